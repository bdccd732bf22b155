//! Aggregation primitives: grouped count, sum, mean, and population standard deviation.
//!
//! Variance is accumulated with Welford's one-pass method, and the radicand is clamped
//! to zero before taking the square root, so a constant series always reports a
//! standard deviation of exactly zero.

mod grouped;
mod rounding;
mod welford;

pub use grouped::{GroupStats, grouped_stats, grouped_sums, yearly_means};
pub use rounding::round_to;
pub use welford::Welford;
