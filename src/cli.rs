//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

use bizdash::{ExportFormat, ExportSection, GoalCategory};

/// Bizdash - business dashboard metrics from the terminal
#[derive(Parser, Debug)]
#[command(name = "bizdash")]
#[command(version)]
#[command(about = "Goal progress, period comparisons and dashboard report export", long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Verbosity level: -v (debug), -vv (trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print or export the dashboard report (default)
    Report {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Report section to export
        #[arg(short, long, value_enum, default_value_t = SectionArg::All)]
        section: SectionArg,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a configuration file populated with sample data
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// List goals with progress and deadline status
    List,

    /// Add a goal
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long, default_value = "")]
        unit: String,
        /// Deadline (YYYY-MM-DD); defaults to three months from the reference date
        #[arg(long)]
        deadline: Option<NaiveDate>,
        #[arg(long, default_value = "other")]
        category: GoalCategory,
    },

    /// Set the current value of a goal
    Progress { id: Uuid, current: f64 },

    /// Delete a goal
    Remove { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Csv => Some(ExportFormat::Csv),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    All,
    Goals,
    Kpis,
    Comparisons,
    Allocations,
}

impl From<SectionArg> for ExportSection {
    fn from(section: SectionArg) -> Self {
        match section {
            SectionArg::All => ExportSection::All,
            SectionArg::Goals => ExportSection::Goals,
            SectionArg::Kpis => ExportSection::Kpis,
            SectionArg::Comparisons => ExportSection::Comparisons,
            SectionArg::Allocations => ExportSection::Allocations,
        }
    }
}
