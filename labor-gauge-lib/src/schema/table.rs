use crate::Result;
use camino::Utf8Path;
use core::fmt::Debug;
use csv::{Reader, StringRecord};
use ohno::{IntoAppError, bail};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{ErrorKind, Read};

/// Log target for warehouse tables
const LOG_TARGET: &str = " warehouse";

pub trait Table: Sized {
    type Row: DeserializeOwned + Debug;
    type Key: Ord + Debug;

    // Constants
    const CSV_NAME: &'static str;

    // Row semantics
    fn key(row: &Self::Row) -> Self::Key;
    fn check_row(row: &Self::Row) -> Result<()>;

    // Construction from rows already sorted by key and free of duplicates
    fn from_sorted(rows: Vec<Self::Row>) -> Self;

    /// Validates rows, sorts them by natural key, and rejects duplicate keys.
    fn build(mut rows: Vec<Self::Row>) -> Result<Self> {
        for row in &rows {
            Self::check_row(row).into_app_err_with(|| format!("invalid row in {}: {row:?}", Self::CSV_NAME))?;
        }

        rows.sort_by_key(Self::key);

        for pair in rows.windows(2) {
            if let [prev, next] = pair
                && Self::key(prev) == Self::key(next)
            {
                bail!("duplicate natural key {:?} in {}", Self::key(next), Self::CSV_NAME);
            }
        }

        Ok(Self::from_sorted(rows))
    }

    fn read_csv(csv_source: impl Read) -> Result<Self> {
        let mut csv_reader = Reader::from_reader(csv_source);

        let headers = csv_reader.headers()?.clone();
        let mut record = StringRecord::new();
        let mut rows = Vec::new();
        while csv_reader.read_record(&mut record)? {
            let row: Self::Row = record.deserialize(Some(&headers)).into_app_err_with(|| {
                let line = record.position().map_or(0, csv::Position::line);
                format!("unable to parse line {line} of {}", Self::CSV_NAME)
            })?;
            rows.push(row);
        }

        Self::build(rows)
    }

    /// Loads the table's CSV file from `data_dir`. A missing file yields an empty table.
    fn open(data_dir: &Utf8Path) -> Result<Self> {
        let path = data_dir.join(Self::CSV_NAME);
        match File::open(&path) {
            Ok(file) => Self::read_csv(file).into_app_err_with(|| format!("unable to load table file '{path}'")),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!(target: LOG_TARGET, "Table file '{path}' not found, treating it as empty");
                Ok(Self::from_sorted(Vec::new()))
            }
            Err(e) => Err(e).into_app_err_with(|| format!("unable to open table file '{path}'")),
        }
    }

    // Runtime data access
    fn rows(&self) -> &[Self::Row];

    fn iter(&self) -> core::slice::Iter<'_, Self::Row> {
        self.rows().iter()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Row> {
        let rows = self.rows();
        rows.binary_search_by(|row| Self::key(row).cmp(key)).ok().and_then(|index| rows.get(index))
    }

    fn len(&self) -> usize {
        self.rows().len()
    }

    fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Fails unless `value` is a finite, non-negative count.
pub fn check_count(column: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!("{column} must be a non-negative count, got {value}");
    }
    Ok(())
}

/// Fails unless `value` is a percentage in [0, 100].
pub fn check_percentage(column: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        bail!("{column} must be a percentage between 0 and 100, got {value}");
    }
    Ok(())
}

/// Generates a table struct and its `Table` implementation from a `snake_case` name,
/// a row type, a natural key, and a row check.
///
/// Creates:
/// - `{Name}Table` - Table struct holding rows sorted by natural key
/// - Implementation of `Table` trait
/// - CSV file name derived from the base name (`{name}.csv`)
///
/// See `region_table.rs` or `unemployment_table.rs` for usage examples.
macro_rules! define_table {
    (
        $name_snake:ident: $row_ty:ty {
            fn key($key_param:ident) -> $key_ty:ty
                $key_body:block

            fn check_row($check_param:ident) -> Result<()>
                $check_body:block
        }
    ) => {
        pastey::paste! {
            #[derive(Debug, Default)]
            pub struct [<$name_snake:camel Table>] {
                rows: Vec<$row_ty>,
            }

            impl super::Table for [<$name_snake:camel Table>] {
                type Row = $row_ty;
                type Key = $key_ty;

                const CSV_NAME: &'static str = concat!(stringify!($name_snake), ".csv");

                fn key($key_param: &Self::Row) -> Self::Key
                    $key_body

                fn check_row($check_param: &Self::Row) -> crate::Result<()>
                    $check_body

                fn from_sorted(rows: Vec<Self::Row>) -> Self {
                    Self { rows }
                }

                fn rows(&self) -> &[Self::Row] {
                    &self.rows
                }
            }
        }
    };
}

pub(crate) use define_table;
