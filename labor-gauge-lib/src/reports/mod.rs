//! Multi-format rendering of indicator reports
//!
//! Four generators are provided, each accessed through a `generate` function:
//! - **Console**: Aligned tables with optional ANSI colors
//! - **CSV**: One block per report, with RFC 4180 escaping
//! - **JSON**: Machine-readable structured data
//! - **Excel**: Native .xlsx workbook with one worksheet per report
//!
//! All generators take the same input, a slice of [`Report`](crate::indicators::Report),
//! and render values through the shared formatting in `common`. Values are rounded when
//! reports are built, and nothing time-dependent is embedded in the text formats, so
//! rendering the same reports twice produces identical bytes.

mod common;
mod console;
mod csv;
mod excel;
mod json;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use excel::generate as generate_xlsx;
pub use json::generate as generate_json;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::indicators::{REPORT_DEFINITIONS, run_reports};
    use crate::schema::Warehouse;

    #[test]
    fn test_text_formats_are_idempotent() {
        let reports = run_reports(REPORT_DEFINITIONS, &Warehouse::default(), &Config::default());

        let render = || {
            let mut csv = String::new();
            generate_csv(&reports, &mut csv).unwrap();
            let mut json = String::new();
            generate_json(&reports, &mut json).unwrap();
            let mut console = String::new();
            generate_console(&reports, false, &mut console).unwrap();
            (csv, json, console)
        };

        assert_eq!(render(), render());
    }
}
