use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::indicators::{REPORT_DEFINITIONS, ReportDef, find, run_reports};
use clap::Parser;
use ohno::app_err;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Comma-separated list of reports to run (default is every report)
    #[arg(long, value_delimiter = ',', value_name = "REPORTS")]
    pub only: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn process_reports<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    let defs = select_reports(&args.only)?;

    let mut common = Common::new(host, &args.common)?;
    let reports = run_reports(&defs, &common.warehouse, &common.config);

    common.report(&reports)
}

/// Resolves report names in the order given, ignoring repeats. No names selects every report.
fn select_reports(names: &[String]) -> Result<Vec<&'static ReportDef>> {
    if names.is_empty() {
        return Ok(REPORT_DEFINITIONS.to_vec());
    }

    let mut defs: Vec<&'static ReportDef> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        let def = find(name).ok_or_else(|| {
            let known: Vec<_> = REPORT_DEFINITIONS.iter().map(|def| def.name).collect();
            app_err!("unknown report '{name}', expected one of: {}", known.join(", "))
        })?;

        if !defs.iter().any(|seen| seen.name == def.name) {
            defs.push(def);
        }
    }

    Ok(defs)
}
