//! Cross-fact reconciliation engine.
//!
//! Regional employment is recorded once in aggregate (the unemployment survey's
//! employed persons) and three more times broken out by industry, education level, and
//! age group. Each breakdown is summed per (region, period) and compared against the
//! aggregate with one generic operation, [`reconcile`].
//!
//! Two outputs come from each comparison and serve different purposes:
//!
//! - [`Reconciliation::discrepancies`] is the audit trail: only records that disagree.
//! - [`Reconciliation::summary`] is the data-quality score: every record, exact matches
//!   included, bucketed into [`Tolerance`] bands.

mod breakdown;
mod reconciliation;
mod tolerance;

pub use breakdown::{Breakdown, RegionPeriodTotals, reference_totals};
pub use reconciliation::{Reconciliation, ReconciliationRecord, ReconciliationSummary, reconcile, reconcile_breakdown};
pub use tolerance::{Tolerance, ToleranceBand};
