//! Indicator catalog: named reports computed from the warehouse
//!
//! Each report is a [`ReportDef`] registered statically in `report_def.rs`. A definition
//! names the report, its category, its value columns, and a runner that turns a
//! [`Warehouse`](crate::schema::Warehouse) and [`Config`](crate::config::Config) into
//! ranked [`ReportRow`]s. Runners are thin: they select a source table and window,
//! then hand the rows to the trend, concentration, statistics, and reconciliation engines.
//!
//! Rows are ordered by the report's ranking value, highest first, with ties broken by
//! entity key, and carry the label from the report's classification bands. Values that
//! cannot be computed (an undefined ratio, say) are `None` cells rather than errors.
//!
//! [`run_reports`] evaluates a set of definitions in parallel and returns them in
//! definition order, so output is identical from run to run.

mod concentration_reports;
mod metric_value;
mod profile_reports;
mod reconciliation_reports;
mod report;
mod report_category;
mod report_def;
mod runner;
pub(crate) mod settings;
mod trend_reports;
mod volatility_reports;

pub use metric_value::MetricValue;
pub use reconciliation_reports::{detail_rows, reconcile_all, summary_rows};
pub use report::{Report, ReportRow};
pub use report_category::ReportCategory;
pub use report_def::{RECONCILIATION_DETAIL, RECONCILIATION_SUMMARY, REPORT_DEFINITIONS, ReportDef, SENIOR_SHARE, find};
pub use runner::run_reports;
pub use settings::{ProfileSettings, ReconciliationSettings, SeniorShareSettings, TrendSettings, VolatilitySettings, WindowSettings};
