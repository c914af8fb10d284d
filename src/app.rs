//! Command execution for the bizdash binary.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use std::fmt::Write as _;
use std::path::PathBuf;

use bizdash::comparison::ComparisonMode;
use bizdash::export::{self, ExportSection};
use bizdash::goals::{GoalTracker, NewGoal};
use bizdash::metrics::Trend;
use bizdash::report::DashboardReport;
use bizdash::storage::{self, AppConfig};

use crate::cli::{Args, Commands, GoalAction, OutputFormat, SectionArg};

/// Loaded configuration plus the reference date for all calculations.
pub struct BizdashApp {
    config: AppConfig,
    config_path: PathBuf,
    today: NaiveDate,
}

impl BizdashApp {
    /// Load configuration and resolve the reference date.
    pub fn new(config_path: Option<PathBuf>, today: Option<NaiveDate>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(storage::get_config_path);
        let config = storage::load_config_from(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        let today = today.unwrap_or_else(|| Utc::now().date_naive());

        Ok(Self {
            config,
            config_path,
            today,
        })
    }

    /// Dispatch a parsed command line.
    pub fn run(args: Args) -> Result<()> {
        let command = args.command.unwrap_or(Commands::Report {
            format: None,
            section: SectionArg::All,
            output: None,
        });

        if let Commands::Init { force } = command {
            let path = args.config.unwrap_or_else(storage::get_config_path);
            return init_config(&path, force);
        }

        let mut app = Self::new(args.config, args.today)?;

        match command {
            Commands::Report {
                format,
                section,
                output,
            } => app.report(format, section.into(), output),
            Commands::Goal { action } => app.goal(action),
            Commands::Init { .. } => Ok(()),
        }
    }

    fn report(
        &self,
        format: Option<OutputFormat>,
        section: ExportSection,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let report = DashboardReport::build(&self.config, self.today);

        let format = format.unwrap_or(match self.config.settings.default_format {
            export::ExportFormat::Json => OutputFormat::Json,
            export::ExportFormat::Csv => OutputFormat::Csv,
        });

        match (format.export_format(), output) {
            (Some(export_format), Some(path)) => {
                export::export_to_file(&report, export_format, section, &path)
                    .with_context(|| format!("Failed to export {}", path.display()))?;
            }
            (Some(export_format), None) => {
                let content = export::render(&report, export_format, section)
                    .context("Failed to render report")?;
                print!("{}", content);
            }
            (None, Some(path)) => {
                let content = render_text(&report, self.config.settings.default_mode);
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "Report written");
            }
            (None, None) => print!("{}", render_text(&report, self.config.settings.default_mode)),
        }

        Ok(())
    }

    fn goal(&mut self, action: GoalAction) -> Result<()> {
        let mut tracker = GoalTracker::from_goals(std::mem::take(&mut self.config.goals));

        let changed = match action {
            GoalAction::List => {
                for summary in tracker.summaries(self.today) {
                    println!(
                        "{}  {:<28} {:>4}  {:>5}d  {}",
                        summary.id,
                        summary.title,
                        summary
                            .progress
                            .map_or("N/A".to_string(), |p| format!("{:.0}%", p)),
                        summary.days_remaining,
                        summary.deadline_status,
                    );
                }
                false
            }
            GoalAction::Add {
                title,
                target,
                current,
                unit,
                deadline,
                category,
            } => {
                let blank = NewGoal::blank(self.today);
                let id = tracker.add(NewGoal {
                    title,
                    target,
                    current,
                    unit,
                    deadline: deadline.unwrap_or(blank.deadline),
                    category,
                })?;
                println!("{}", id);
                true
            }
            GoalAction::Progress { id, current } => {
                tracker.update_progress(id, current)?;
                true
            }
            GoalAction::Remove { id } => {
                if !tracker.remove(id) {
                    bail!("Goal not found: {}", id);
                }
                true
            }
        };

        self.config.goals = tracker.into_goals();

        if changed {
            storage::save_config_to(&self.config, &self.config_path)
                .with_context(|| format!("Failed to save {}", self.config_path.display()))?;
        }

        Ok(())
    }
}

fn init_config(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    storage::save_config_to(&AppConfig::default(), path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Human-readable dashboard summary. The `selected` comparison is listed
/// first and starred.
fn render_text(report: &DashboardReport, selected: ComparisonMode) -> String {
    let mut out = String::new();
    let currency = &report.currency;

    let _ = writeln!(out, "Dashboard for {}", report.generated_for);

    if !report.goals.is_empty() {
        let _ = writeln!(out, "\nGoals");
        for goal in &report.goals {
            let progress = goal
                .progress
                .map_or("N/A".to_string(), |p| format!("{:.0}%", p));
            let _ = writeln!(
                out,
                "  {:<28} {:>5}  {:<8} {:>5}d  {}",
                goal.title,
                progress,
                goal.category.display_name(),
                goal.days_remaining,
                goal.deadline_status
            );
        }
    }

    if let Some(kpis) = &report.kpis {
        let _ = writeln!(out, "\nSales ({} vs {})", kpis.month, kpis.previous_month);
        let _ = writeln!(
            out,
            "  Revenue  {}{:.0}  {} {:.1}%",
            currency,
            kpis.revenue,
            Trend::of(kpis.revenue_growth).arrow(),
            kpis.revenue_growth.abs(),
        );
        let _ = writeln!(
            out,
            "  Orders   {:.0}  {} {:.1}%",
            kpis.orders,
            Trend::of(kpis.orders_growth).arrow(),
            kpis.orders_growth.abs(),
        );
    }

    if !report.comparisons.is_empty() {
        let _ = writeln!(out, "\nComparisons");
        for comparison in report.comparisons_selected_first(selected) {
            let marker = if comparison.mode == selected { '*' } else { ' ' };
            let _ = writeln!(
                out,
                " {}{:<10} {}{:.0} vs {}{:.0}  {} {:.1}%",
                marker,
                comparison.mode.display_name(),
                currency,
                comparison.current_total,
                currency,
                comparison.previous_total,
                comparison.trend.arrow(),
                comparison.overall_change.abs(),
            );
        }
    }

    for allocation in &report.allocations {
        let _ = writeln!(out, "\n{}", allocation.name);
        for share in &allocation.shares {
            let _ = writeln!(out, "  {:<16} {:>5.1}%", share.label, share.percentage);
        }
    }

    out
}
