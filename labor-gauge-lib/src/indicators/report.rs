use super::{MetricValue, ReportCategory, ReportDef};
use compact_str::CompactString;

/// One entity's line in a report.
///
/// `values` lines up with the report's columns; `None` marks an undefined value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub entity: CompactString,
    pub values: Vec<Option<MetricValue>>,
    pub label: Option<CompactString>,
}

impl ReportRow {
    #[must_use]
    pub fn new(entity: impl Into<CompactString>, values: Vec<Option<MetricValue>>) -> Self {
        Self {
            entity: entity.into(),
            values,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<CompactString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub def: &'static ReportDef,
    pub rows: Vec<ReportRow>,
}

impl Report {
    #[must_use]
    pub const fn new(def: &'static ReportDef, rows: Vec<ReportRow>) -> Self {
        Self { def, rows }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.def.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.def.description
    }

    #[must_use]
    pub const fn category(&self) -> ReportCategory {
        self.def.category
    }

    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.def.entity
    }

    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        self.def.columns
    }
}

/// A row waiting to be ranked.
#[derive(Debug)]
pub(crate) struct Ranked<K> {
    pub key: K,
    pub score: f64,
    pub row: ReportRow,
}

/// Orders rows by score, highest first, breaking ties by key, then applies `limit`.
pub(crate) fn rank_rows<K: Ord>(mut ranked: Vec<Ranked<K>>, limit: Option<usize>) -> Vec<ReportRow> {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
    ranked.into_iter().take(limit.unwrap_or(usize::MAX)).map(|r| r.row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(key: u32, score: f64) -> Ranked<u32> {
        Ranked {
            key,
            score,
            row: ReportRow::new(key.to_string(), vec![Some(MetricValue::proportion(score))]),
        }
    }

    #[test]
    fn test_rank_rows_orders_by_score_then_key() {
        let rows = rank_rows(vec![ranked(3, 0.5), ranked(1, 0.9), ranked(2, 0.5)], None);
        let entities: Vec<_> = rows.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(entities, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_rank_rows_applies_limit_after_ordering() {
        let rows = rank_rows(vec![ranked(1, 0.1), ranked(2, 0.7), ranked(3, 0.4)], Some(2));
        let entities: Vec<_> = rows.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(entities, vec!["2", "3"]);
    }

    #[test]
    fn test_with_label() {
        let row = ReportRow::new("north", Vec::new()).with_label("stable");
        assert_eq!(row.label.as_deref(), Some("stable"));
    }
}
