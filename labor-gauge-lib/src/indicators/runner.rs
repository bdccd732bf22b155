use super::{Report, ReportDef};
use crate::config::Config;
use crate::schema::Warehouse;
use rayon::prelude::*;
use std::time::Instant;

/// Log target for report runs
const LOG_TARGET: &str = "   reports";

/// Runs the given reports in parallel.
///
/// Reports come back in the order of `defs`, whatever order they finish in.
#[must_use]
pub fn run_reports(defs: &[&'static ReportDef], warehouse: &Warehouse, config: &Config) -> Vec<Report> {
    let start = Instant::now();
    log::info!(target: LOG_TARGET, "Running {} report(s)", defs.len());

    let reports: Vec<_> = defs
        .par_iter()
        .map(|&def| {
            let report_start = Instant::now();
            let rows = (def.runner)(warehouse, config);
            log::debug!(
                target: LOG_TARGET,
                "Finished '{}' ({} rows) in {:.3}s",
                def.name,
                rows.len(),
                report_start.elapsed().as_secs_f64()
            );
            Report::new(def, rows)
        })
        .collect();

    log::info!(target: LOG_TARGET, "Ran {} report(s) in {:.3}s", reports.len(), start.elapsed().as_secs_f64());
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::REPORT_DEFINITIONS;

    #[test]
    fn test_reports_follow_definition_order() {
        let reports = run_reports(REPORT_DEFINITIONS, &Warehouse::default(), &Config::default());
        let names: Vec<_> = reports.iter().map(Report::name).collect();
        let expected: Vec<_> = REPORT_DEFINITIONS.iter().map(|def| def.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_no_reports() {
        assert!(run_reports(&[], &Warehouse::default(), &Config::default()).is_empty());
    }
}
