//! Command dispatch logic for labor-gauge

use super::{
    InitArgs, ReconcileArgs, ReportArgs, StatsArgs, ValidateArgs, init_config, list_reports, print_stats, process_reconciliation,
    process_reports, validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "labor-gauge", author, version, long_about = None)]
#[command(about = "Labor-market indicators and cross-fact reconciliation over a regional employment warehouse")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: GaugeSubcommand,
}

#[derive(Subcommand, Debug)]
enum GaugeSubcommand {
    /// Compute indicator reports from the warehouse
    Report(Box<ReportArgs>),
    /// Check employment breakdowns against the aggregate totals
    Reconcile(Box<ReconcileArgs>),
    /// Show row counts and period coverage per warehouse table
    Stats(StatsArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file and, optionally, a warehouse
    Validate(ValidateArgs),
    /// List the available reports
    List,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        GaugeSubcommand::Report(report_args) => process_reports(host, report_args),
        GaugeSubcommand::Reconcile(reconcile_args) => process_reconciliation(host, reconcile_args),
        GaugeSubcommand::Stats(stats_args) => print_stats(host, stats_args),
        GaugeSubcommand::Init(init_args) => init_config(host, init_args),
        GaugeSubcommand::Validate(validate_args) => validate_config(host, validate_args),
        GaugeSubcommand::List => list_reports(host),
    }
}
