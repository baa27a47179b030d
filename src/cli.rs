use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dashboard::ViewDefaults;

#[derive(Debug, Parser)]
#[command(
    name = "kira-trialsdash",
    version,
    about = "Clinical-trials dashboard: histogram, summary table and timeline views"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Trials CSV export (.csv or .csv.gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "JSON Lines file of control changes to replay")]
    pub events: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = 100.0, help = "Initial lower enrollment bound")]
    pub range_start: f64,

    #[arg(long, default_value_t = 500.0, help = "Initial upper enrollment bound")]
    pub range_end: f64,

    #[arg(long, default_value_t = 50.0, help = "Initial histogram bin width")]
    pub bin_width: f64,
}

impl RunArgs {
    /// Both filtered views start from the same enrollment range.
    pub fn view_defaults(&self) -> ViewDefaults {
        ViewDefaults {
            histogram_range: (self.range_start, self.range_end),
            bin_width: self.bin_width,
            scatter_range: (self.range_start, self.range_end),
        }
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Trials CSV export (.csv or .csv.gz)")]
    pub input: PathBuf,
}
