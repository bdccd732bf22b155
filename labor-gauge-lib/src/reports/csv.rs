use super::common;
use crate::Result;
use crate::indicators::Report;
use core::fmt::Write;
use std::borrow::Cow;

/// Writes one block per report: a `# name` line, the header row, then the data rows.
///
/// Blocks are separated by an empty line. Undefined values are empty fields.
pub fn generate<W: Write>(reports: &[Report], writer: &mut W) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        writeln!(writer, "# {}", report.name())?;
        write_record(writer, common::header(report).into_iter())?;

        for row in &report.rows {
            let cells = common::row_cells(row);
            write_record(writer, cells.iter().map(String::as_str))?;
        }
    }

    Ok(())
}

fn write_record<'a, W: Write>(writer: &mut W, fields: impl Iterator<Item = &'a str>) -> Result<()> {
    for (index, field) in fields.enumerate() {
        if index > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", escape_csv(field))?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
