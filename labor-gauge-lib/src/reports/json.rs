use crate::Result;
use crate::indicators::{MetricValue, Report};
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(reports: &[Report], writer: &mut W) -> Result<()> {
    let mut report_data = Vec::with_capacity(reports.len());

    for report in reports {
        let mut rows = Vec::with_capacity(report.rows.len());
        for row in &report.rows {
            let mut row_obj = serde_json::Map::new();
            row_obj.insert("entity".to_string(), json!(row.entity.as_str()));
            for (column, value) in report.columns().iter().zip(&row.values) {
                row_obj.insert((*column).to_string(), value.as_ref().map_or(serde_json::Value::Null, metric_value_to_json));
            }
            row_obj.insert("label".to_string(), json!(row.label.as_deref()));
            rows.push(json!(row_obj));
        }

        report_data.push(json!({
            "name": report.name(),
            "description": report.description(),
            "category": report.category().to_string(),
            "entity": report.entity(),
            "columns": report.columns(),
            "rows": rows,
        }));
    }

    let output = json!({
        "reports": report_data
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn metric_value_to_json(value: &MetricValue) -> serde_json::Value {
    match value {
        MetricValue::Rate(v) | MetricValue::Proportion(v) | MetricValue::Count(v) => json!(v),
        MetricValue::UInt(u) => json!(u),
        MetricValue::Text(s) => json!(s.as_str()),
    }
}
