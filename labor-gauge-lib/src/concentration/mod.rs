//! Concentration engine.
//!
//! Category totals are summed per partition over a trailing window, turned into shares
//! of the partition total, and squared and summed into the Herfindahl-Hirschman Index.
//! `1 - HHI` is reported as diversification (industry breakdown) or balance (age-group
//! breakdown). Partitions whose total is not positive have no defined shares and are
//! left out of every report.
//!
//! [`cohort_share`] is the plain share of a subset of categories, such as the cohorts at
//! or above the senior age cutoff. It is not a concentration score.

mod hhi;
mod shares;

pub use hhi::{Concentration, concentration};
pub use shares::{CohortShare, cohort_share, partition_totals, shares};
