use super::{
    AgeEmploymentTable, AgeGroupTable, EducationEmploymentTable, EducationId, EducationLevelTable, FactTable, IndustryCode,
    IndustryEmploymentTable, IndustryTable, InsuranceTable, Period, PopulationTable, RegionId, RegionTable, Table, UnemploymentTable,
};
use crate::Result;
use camino::Utf8Path;
use core::fmt::Display;
use core::hash::Hash;
use ohno::{IntoAppError, bail};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Log target for warehouse tables
const LOG_TARGET: &str = " warehouse";

/// Row count and period coverage of one warehouse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: &'static str,
    pub rows: usize,

    /// First and last period present, for fact tables with at least one row
    pub periods: Option<(Period, Period)>,
}

/// Generates the `Warehouse` struct and associated methods from the dimension and fact table lists.
///
/// Creates:
/// - `Warehouse` struct with one field per table
/// - Accessor methods for each table (e.g., `region_table()`, `unemployment_table()`)
/// - `with_{field}()` builder methods for assembling a warehouse in memory
/// - `open_tables()` - Loads every table's CSV file from a directory
/// - `summary()` - Row counts and period coverage per table
///
/// See the macro invocation below for usage.
macro_rules! define_tables {
    (
        dimensions { $($dim_field:ident: $dim_type:ty),* $(,)? }
        facts { $($fact_field:ident: $fact_type:ty),* $(,)? }
    ) => {
        pastey::paste! {
            /// Read-only snapshot of every dimension and fact table.
            #[derive(Debug, Default)]
            pub struct Warehouse {
                $( $dim_field: $dim_type, )*
                $( $fact_field: $fact_type, )*
            }

            impl Warehouse {
                $(
                    #[must_use]
                    pub const fn $dim_field(&self) -> &$dim_type {
                        &self.$dim_field
                    }

                    #[must_use]
                    pub fn [<with_ $dim_field>](mut self, table: $dim_type) -> Self {
                        self.$dim_field = table;
                        self
                    }
                )*

                $(
                    #[must_use]
                    pub const fn $fact_field(&self) -> &$fact_type {
                        &self.$fact_field
                    }

                    #[must_use]
                    pub fn [<with_ $fact_field>](mut self, table: $fact_type) -> Self {
                        self.$fact_field = table;
                        self
                    }
                )*

                fn open_tables(data_dir: &Utf8Path) -> Result<Self> {
                    const NUM_TABLES: usize = count_tables!($($dim_field)* $($fact_field)*);
                    log::debug!(target: LOG_TARGET, "Opening {NUM_TABLES} tables from '{data_dir}'");

                    $(
                        let table_start = Instant::now();
                        let $dim_field = <$dim_type>::open(data_dir)
                            .into_app_err(concat!("unable to open ", stringify!($dim_field)))?;
                        log::debug!(
                            target: LOG_TARGET,
                            "Finished opening '{}' ({} rows) in {:.3}s",
                            <$dim_type>::CSV_NAME,
                            $dim_field.len(),
                            table_start.elapsed().as_secs_f64()
                        );
                    )*

                    $(
                        let table_start = Instant::now();
                        let $fact_field = <$fact_type>::open(data_dir)
                            .into_app_err(concat!("unable to open ", stringify!($fact_field)))?;
                        log::debug!(
                            target: LOG_TARGET,
                            "Finished opening '{}' ({} rows) in {:.3}s",
                            <$fact_type>::CSV_NAME,
                            $fact_field.len(),
                            table_start.elapsed().as_secs_f64()
                        );
                    )*

                    Ok(Self {
                        $( $dim_field, )*
                        $( $fact_field, )*
                    })
                }

                /// Row counts and period coverage for every table, dimensions first.
                #[must_use]
                pub fn summary(&self) -> Vec<TableSummary> {
                    vec![
                        $(
                            TableSummary {
                                name: <$dim_type>::CSV_NAME,
                                rows: self.$dim_field.len(),
                                periods: None,
                            },
                        )*
                        $(
                            TableSummary {
                                name: <$fact_type>::CSV_NAME,
                                rows: self.$fact_field.len(),
                                periods: self.$fact_field.period_range(),
                            },
                        )*
                    ]
                }
            }
        }
    };
}

macro_rules! count_tables {
    () => (0);
    ($head:ident $($tail:ident)*) => (1 + count_tables!($($tail)*));
}

define_tables! {
    dimensions {
        region_table: RegionTable,
        industry_table: IndustryTable,
        education_level_table: EducationLevelTable,
        age_group_table: AgeGroupTable,
    }
    facts {
        unemployment_table: UnemploymentTable,
        industry_employment_table: IndustryEmploymentTable,
        population_table: PopulationTable,
        insurance_table: InsuranceTable,
        education_employment_table: EducationEmploymentTable,
        age_employment_table: AgeEmploymentTable,
    }
}

impl Warehouse {
    /// Loads every table from `data_dir` and verifies referential integrity.
    ///
    /// Violations are rejected, never repaired: no engine ever sees an orphaned fact row.
    pub fn open(data_dir: &Utf8Path) -> Result<Self> {
        let start = Instant::now();
        log::info!(target: LOG_TARGET, "Loading warehouse from '{data_dir}'");

        let warehouse = Self::open_tables(data_dir)?;
        warehouse.check_integrity()?;

        log::info!(target: LOG_TARGET, "Loaded warehouse in {:.3}s", start.elapsed().as_secs_f64());
        Ok(warehouse)
    }

    /// Verifies that region names are unique and that every fact row references existing dimension rows.
    pub fn check_integrity(&self) -> Result<()> {
        let mut region_names = FxHashSet::default();
        for row in self.region_table.iter() {
            if !region_names.insert(row.region_name.as_str()) {
                bail!("duplicate region name '{}' in {}", row.region_name, RegionTable::CSV_NAME);
            }
        }

        let regions: FxHashSet<_> = self.region_table.iter().map(|row| row.region_id).collect();
        let industries: FxHashSet<_> = self.industry_table.iter().map(|row| &row.industry_code).collect();
        let education_levels: FxHashSet<_> = self.education_level_table.iter().map(|row| row.education_id).collect();
        let age_groups: FxHashSet<_> = self.age_group_table.iter().map(|row| row.age_group_id).collect();

        check_references(&self.unemployment_table, |row| require(&regions, &row.region_id, "region"))?;
        check_references(&self.population_table, |row| require(&regions, &row.region_id, "region"))?;
        check_references(&self.insurance_table, |row| require(&regions, &row.region_id, "region"))?;

        check_references(&self.industry_employment_table, |row| {
            require(&regions, &row.region_id, "region")?;
            require(&industries, &&row.industry_code, "industry")
        })?;

        check_references(&self.education_employment_table, |row| {
            require(&regions, &row.region_id, "region")?;
            require(&education_levels, &row.education_id, "education level")
        })?;

        check_references(&self.age_employment_table, |row| {
            require(&regions, &row.region_id, "region")?;
            require(&age_groups, &row.age_group_id, "age group")
        })
    }

    /// Display name for a region, falling back to its id.
    #[must_use]
    pub fn region_name(&self, region_id: RegionId) -> String {
        self.region_table
            .get(&region_id)
            .map_or_else(|| region_id.to_string(), |row| row.region_name.to_string())
    }

    #[must_use]
    pub fn industry_name(&self, industry_code: &IndustryCode) -> String {
        self.industry_table
            .get(industry_code)
            .map_or_else(|| industry_code.to_string(), |row| row.industry_name.to_string())
    }

    #[must_use]
    pub fn education_name(&self, education_id: EducationId) -> String {
        self.education_level_table
            .get(&education_id)
            .map_or_else(|| education_id.to_string(), |row| row.education_name.to_string())
    }

    /// Latest period across all fact tables.
    #[must_use]
    pub fn latest_period(&self) -> Option<Period> {
        [
            self.unemployment_table.latest_period(),
            self.industry_employment_table.latest_period(),
            self.population_table.latest_period(),
            self.insurance_table.latest_period(),
            self.education_employment_table.latest_period(),
            self.age_employment_table.latest_period(),
        ]
        .into_iter()
        .flatten()
        .max()
    }
}

fn check_references<T: Table>(table: &T, check: impl Fn(&T::Row) -> Result<()>) -> Result<()> {
    for row in table.iter() {
        check(row).into_app_err_with(|| format!("referential integrity violation in {}", T::CSV_NAME))?;
    }
    Ok(())
}

fn require<K: Hash + Eq + Display>(known: &FxHashSet<K>, key: &K, dimension: &str) -> Result<()> {
    if !known.contains(key) {
        bail!("unknown {dimension} '{key}'");
    }
    Ok(())
}
