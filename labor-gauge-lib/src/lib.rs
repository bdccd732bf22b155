#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for labor-gauge
//!
//! This library consolidates all functionality for the labor-gauge tool, which computes
//! labor-market indicators over a regional employment warehouse and reconciles the
//! warehouse's employment breakdowns against its aggregate totals.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`config`]: Per-report settings loaded from TOML
//! - [`schema`]: Warehouse tables, typed ids, and load-time validation
//! - [`stats`]: Grouped aggregation primitives
//! - [`classify`]: Threshold classification
//! - [`trend`]: Year-over-year trend engine
//! - [`concentration`]: HHI concentration engine
//! - [`reconcile`]: Cross-fact reconciliation engine
//! - [`indicators`]: The report catalog
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod config;
#[cfg(not(any(debug_assertions, test)))]
mod config;

#[cfg(any(debug_assertions, test))]
pub mod schema;
#[cfg(not(any(debug_assertions, test)))]
mod schema;

#[cfg(any(debug_assertions, test))]
pub mod stats;
#[cfg(not(any(debug_assertions, test)))]
mod stats;

#[cfg(any(debug_assertions, test))]
pub mod classify;
#[cfg(not(any(debug_assertions, test)))]
mod classify;

#[cfg(any(debug_assertions, test))]
pub mod trend;
#[cfg(not(any(debug_assertions, test)))]
mod trend;

#[cfg(any(debug_assertions, test))]
pub mod concentration;
#[cfg(not(any(debug_assertions, test)))]
mod concentration;

#[cfg(any(debug_assertions, test))]
pub mod reconcile;
#[cfg(not(any(debug_assertions, test)))]
mod reconcile;

#[cfg(any(debug_assertions, test))]
pub mod indicators;
#[cfg(not(any(debug_assertions, test)))]
mod indicators;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
