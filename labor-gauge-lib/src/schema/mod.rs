//! Schema catalog for the labor-market warehouse.
//!
//! The warehouse is a star schema: four slowly-changing dimension tables (region,
//! industry, education level, age group) and six append-only monthly fact tables that
//! reference them by key. Each table is loaded from one CSV file with a header row.
//!
//! # Load-time invariants
//!
//! Everything the engines rely on is enforced here, at the storage boundary:
//!
//! - periods are `YYYY-MM` tokens
//! - natural keys are unique per table
//! - counts are finite and non-negative; rates are percentages in [0, 100]
//! - every fact row references existing dimension rows
//!
//! Tables are held in memory sorted by natural key, so iteration order is deterministic.
//! Nothing downstream mutates a table once the [`Warehouse`] is built.

mod age_employment_table;
mod age_group_table;
mod education_employment_table;
mod education_level_table;
mod fact_table;
mod ids;
mod industry_employment_table;
mod industry_table;
mod insurance_table;
mod period;
mod population_table;
mod region_table;
mod table;
mod unemployment_table;
mod warehouse;

use table::{check_count, check_percentage, define_table};

pub use age_employment_table::{AgeEmploymentRow, AgeEmploymentTable};
pub use age_group_table::{AgeGroupRow, AgeGroupTable};
pub use education_employment_table::{EducationEmploymentRow, EducationEmploymentTable};
pub use education_level_table::{EducationLevelRow, EducationLevelTable};
pub use fact_table::FactTable;
pub use ids::{AgeGroupId, EducationId, IndustryCode, RegionId};
pub use industry_employment_table::{IndustryEmploymentRow, IndustryEmploymentTable};
pub use industry_table::{IndustryRow, IndustryTable};
pub use insurance_table::{InsuranceRow, InsuranceTable};
pub use period::Period;
pub use population_table::{PopulationRow, PopulationTable};
pub use region_table::{RegionRow, RegionTable};
pub use table::Table;
pub use unemployment_table::{UnemploymentRow, UnemploymentTable};
pub use warehouse::{TableSummary, Warehouse};
