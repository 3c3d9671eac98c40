//! CLI argument definitions for adperf.

use std::path::PathBuf;

use adperf_model::{SortDirection, SortField};
use adperf_persistence::DEFAULT_STATE_FILE;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adperf",
    version,
    about = "Ad performance reports - publisher spend, CPM and share from campaign exports",
    long_about = "Aggregate ad-platform performance exports by publisher.\n\n\
                  Reports spend, impressions, CPM and share of spend, filters by campaign,\n\
                  and compares publishers across uploaded datasets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Dashboard state file holding uploaded datasets.
    #[arg(
        long = "state",
        value_name = "PATH",
        env = "ADPERF_STATE",
        default_value = DEFAULT_STATE_FILE,
        global = true
    )]
    pub state: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate one export file and print the publisher report.
    Report(ReportArgs),

    /// List the campaigns found in an export file.
    Campaigns(CampaignsArgs),

    /// Add an export file to the saved datasets.
    Upload(UploadArgs),

    /// List saved datasets.
    List,

    /// Show a saved dataset (the active one by default).
    Show(ShowArgs),

    /// Rename a saved dataset.
    Rename(RenameArgs),

    /// Delete a saved dataset.
    Delete(DatasetArgs),

    /// Make a saved dataset the active one.
    Activate(DatasetArgs),

    /// Compare publishers across saved datasets.
    Compare(CompareArgs),

    /// Remove every saved dataset.
    Clear,
}

/// Display ordering flags shared by `report` and `show`.
#[derive(Parser)]
pub struct SortArgs {
    /// Column to sort the publisher table by.
    #[arg(long = "sort", value_enum, default_value = "rank")]
    pub sort: SortFieldArg,

    /// Sort direction.
    #[arg(long = "direction", value_enum, default_value = "asc")]
    pub direction: DirectionArg,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the performance export (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only include rows of this campaign ("all" for every campaign).
    #[arg(long = "campaign", value_name = "NAME")]
    pub campaign: Option<String>,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Maximum publishers to keep (default 25).
    #[arg(long = "limit", value_name = "N", conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Keep every publisher.
    #[arg(long = "all")]
    pub all: bool,

    /// Only print the top 10 publishers by spend.
    #[arg(long = "chart")]
    pub chart: bool,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CampaignsArgs {
    /// Path to the performance export (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Path to the performance export (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dataset name (default: file name without `.csv`).
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// MIME type to report for the file.
    #[arg(long = "mime", value_name = "TYPE")]
    pub mime: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Dataset id (default: the active dataset).
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Switch the dataset's campaign filter ("all" clears it).
    #[arg(long = "campaign", value_name = "NAME")]
    pub campaign: Option<String>,

    #[command(flatten)]
    pub sort: SortArgs,
}

#[derive(Parser)]
pub struct RenameArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Parser)]
pub struct DatasetArgs {
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Dataset ids, in comparison order.
    #[arg(value_name = "ID", required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Show only the top publishers used for charts.
    #[arg(long = "chart")]
    pub chart: bool,
}

/// Publisher table sort columns.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortFieldArg {
    Rank,
    Publisher,
    Impressions,
    Spend,
    Cpm,
    SpendPercentage,
}

impl From<SortFieldArg> for SortField {
    fn from(value: SortFieldArg) -> Self {
        match value {
            SortFieldArg::Rank => SortField::Rank,
            SortFieldArg::Publisher => SortField::Publisher,
            SortFieldArg::Impressions => SortField::Impressions,
            SortFieldArg::Spend => SortField::Spend,
            SortFieldArg::Cpm => SortField::Cpm,
            SortFieldArg::SpendPercentage => SortField::SpendPercentage,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
