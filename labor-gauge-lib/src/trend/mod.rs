//! Year-over-year trend engine.
//!
//! Trend reports are computed in three steps:
//!
//! 1. [`crate::stats::yearly_means`] reduces a fact table to one mean per
//!    (partition, year).
//! 2. [`year_over_year`] lags that ordered series by one year within each partition,
//!    keeping only years whose immediate predecessor exists.
//! 3. [`summarize`] rolls the points up to a coarser group and [`rank`] filters thin
//!    groups, orders by the requested metric, and applies the row cap.
//!
//! In the growth form a point whose prior value is zero (or not finite) is dropped
//! before the rollup. The delta form keeps every point.

mod summary;
mod yoy;

pub use summary::{TrendForm, TrendMetric, TrendSummary, rank, summarize};
pub use yoy::{YoyPoint, year_over_year};
