//! Threshold classification shared by every indicator report.
//!
//! A [`Bands`] table maps a continuous value to an ordered label set. Bands are held in
//! descending threshold order and the first threshold the value strictly exceeds wins;
//! values that exceed no threshold receive the default label. Tables are plain data
//! loaded from configuration, so every report's cut-points can be changed without code.

mod bands;

pub use bands::{Band, Bands, classify};
