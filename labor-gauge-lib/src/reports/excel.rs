use super::common;
use crate::Result;
use crate::indicators::{MetricValue, Report};
use rust_xlsxwriter::{DocProperties, Format, FormatAlign, Workbook, Worksheet};
use std::io::Write;

/// Excel limits worksheet names to 31 characters
const MAX_SHEET_NAME_LEN: usize = 31;

/// Writes one worksheet per report with a bold header row and frozen panes.
#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate<W: Write>(reports: &[Report], writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new().set_author("labor-gauge");
    workbook.set_properties(&properties);

    let bold_format = Format::new().set_bold();
    let left_align_format = Format::new().set_align(FormatAlign::Left);
    let rate_format = Format::new().set_num_format("0.00");
    let proportion_format = Format::new().set_num_format("0.0000");
    let count_format = Format::new().set_num_format("#,##0");

    if reports.is_empty() {
        workbook.add_worksheet().set_name("reports")?;
    }

    for report in reports {
        let worksheet = workbook.add_worksheet().set_name(sheet_name(report.name()))?;

        for (col, name) in common::header(report).iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
            worksheet.write_string_with_format(0, col as u16, *name, &bold_format)?;
        }

        // Freeze the entity column and the header row
        worksheet.set_freeze_panes(1, 1)?;

        for (row_idx, row) in report.rows.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "Row index limited by Excel's row limit")]
            let sheet_row = (row_idx + 1) as u32;

            worksheet.write_string_with_format(sheet_row, 0, row.entity.as_str(), &left_align_format)?;

            for (col_idx, value) in row.values.iter().enumerate() {
                if let Some(value) = value {
                    let format = match value {
                        MetricValue::Rate(_) => &rate_format,
                        MetricValue::Proportion(_) => &proportion_format,
                        MetricValue::Count(_) => &count_format,
                        MetricValue::UInt(_) | MetricValue::Text(_) => &left_align_format,
                    };

                    #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
                    write_metric_value(worksheet, sheet_row, (col_idx + 1) as u16, value, format)?;
                }
            }

            if let Some(label) = &row.label {
                #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
                worksheet.write_string(sheet_row, (row.values.len() + 1) as u16, label.as_str())?;
            }
        }

        worksheet.autofit();
    }

    let data = workbook.save_to_buffer()?;
    writer.write_all(&data)?;

    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
#[expect(clippy::cast_precision_loss, reason = "Intentional conversion to f64 for Excel output")]
fn write_metric_value(worksheet: &mut Worksheet, row: u32, col: u16, value: &MetricValue, format: &Format) -> Result<()> {
    match value {
        MetricValue::Rate(v) | MetricValue::Proportion(v) | MetricValue::Count(v) => {
            worksheet.write_number_with_format(row, col, *v, format)?;
        }
        MetricValue::UInt(u) => {
            worksheet.write_number_with_format(row, col, *u as f64, format)?;
        }
        MetricValue::Text(s) => {
            worksheet.write_string_with_format(row, col, s.as_str(), format)?;
        }
    }
    Ok(())
}

fn sheet_name(report_name: &str) -> String {
    report_name.chars().take(MAX_SHEET_NAME_LEN).collect()
}
