//! Command-line interface and orchestration for labor-gauge
//!
//! This module implements the CLI commands and ties the warehouse, the indicator
//! catalog, and the report generators together. It handles argument parsing,
//! configuration loading, and the end-to-end workflows.
//!
//! # Commands
//!
//! - **report**: Load the warehouse, run the selected indicator reports, and
//!   write them to the console and/or CSV, JSON, and Excel files
//! - **reconcile**: Compare the industry, education, and age employment breakdowns
//!   against the aggregate totals; optionally fail when any record is over the
//!   major tolerance, for use as a data-quality gate
//! - **stats**: Row counts and period coverage per warehouse table
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file and, optionally, a warehouse
//! - **list**: List the available reports
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The `common` module provides shared
//! functionality like logging setup, color mode handling, input loading, and
//! the report output logic that coordinates multiple output formats.
//!
//! All output goes through the [`Host`] trait so commands can be exercised in tests.

mod common;
mod host;
mod init;
mod list;
mod reconcile;
mod report;
mod run;
mod stats;
#[cfg(test)]
mod test_support;
mod validate;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use list::list_reports;
pub use reconcile::{ReconcileArgs, process_reconciliation};
pub use report::{ReportArgs, process_reports};
pub use run::run;
pub use stats::{StatsArgs, print_stats};
pub use validate::{ValidateArgs, validate_config};
