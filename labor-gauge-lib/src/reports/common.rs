//! Common utilities shared across report generators.

use crate::indicators::{MetricValue, Report, ReportRow};

/// Format a metric value as a string using consistent formatting rules.
///
/// Rates use two decimals, proportions four, and counts whole units.
pub fn format_metric_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Rate(v) => format!("{v:.2}"),
        MetricValue::Proportion(v) => format!("{v:.4}"),
        MetricValue::Count(v) => format!("{v:.0}"),
        MetricValue::UInt(u) => u.to_string(),
        MetricValue::Text(s) => s.to_string(),
    }
}

/// Format an optional cell, rendering undefined values as an empty string.
pub fn format_cell(value: Option<&MetricValue>) -> String {
    value.map(format_metric_value).unwrap_or_default()
}

/// Full header row of a report: the entity column, the value columns, then `label`.
pub fn header(report: &Report) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(report.columns().len() + 2);
    header.push(report.entity());
    header.extend_from_slice(report.columns());
    header.push("label");
    header
}

/// Every cell of a row, formatted, in header order.
pub fn row_cells(row: &ReportRow) -> Vec<String> {
    let mut cells = Vec::with_capacity(row.values.len() + 2);
    cells.push(row.entity.to_string());
    cells.extend(row.values.iter().map(|value| format_cell(value.as_ref())));
    cells.push(row.label.as_deref().unwrap_or_default().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::SENIOR_SHARE;

    #[test]
    fn test_format_metric_value() {
        assert_eq!(format_metric_value(&MetricValue::rate(1.234_5)), "1.23");
        assert_eq!(format_metric_value(&MetricValue::Rate(2.0)), "2.00");
        assert_eq!(format_metric_value(&MetricValue::proportion(0.5)), "0.5000");
        assert_eq!(format_metric_value(&MetricValue::count(1234.4)), "1234");
        assert_eq!(format_metric_value(&MetricValue::UInt(7)), "7");
        assert_eq!(format_metric_value(&MetricValue::text("2023-01")), "2023-01");
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(format_metric_value(&MetricValue::rate(-0.5)), "-0.50");
        assert_eq!(format_metric_value(&MetricValue::count(-20.0)), "-20");
    }

    #[test]
    fn test_format_cell_undefined() {
        assert_eq!(format_cell(None), "");
    }

    #[test]
    fn test_header_and_cells_line_up() {
        let row = ReportRow::new("North", vec![Some(MetricValue::count(30.0)), Some(MetricValue::count(40.0)), None]).with_label("aged");
        let report = Report::new(&SENIOR_SHARE, vec![row]);

        let header = header(&report);
        assert_eq!(header, vec!["region", "senior_employed", "total_employed", "senior_share", "label"]);

        let cells = row_cells(&report.rows[0]);
        assert_eq!(cells, vec!["North", "30", "40", "", "aged"]);
    }
}
