use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::indicators::{RECONCILIATION_DETAIL, RECONCILIATION_SUMMARY, Report, detail_rows, reconcile_all, summary_rows};
use clap::Parser;
use ohno::bail;

#[derive(Parser, Debug)]
pub struct ReconcileArgs {
    /// Exit with status code 1 if any record differs by the major tolerance or more
    #[arg(long)]
    pub error_if_major: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Runs the three breakdown-vs-total comparisons once and reports the summary and the detail.
pub fn process_reconciliation<H: Host>(host: &mut H, args: &ReconcileArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let reconciliations = reconcile_all(&common.warehouse);
    let settings = &common.config.reconciliation;
    let tolerance = settings.tolerance;

    let reports = [
        Report::new(&RECONCILIATION_SUMMARY, summary_rows(&reconciliations, settings)),
        Report::new(&RECONCILIATION_DETAIL, detail_rows(&common.warehouse, &reconciliations, settings)),
    ];

    common.report(&reports)?;

    if args.error_if_major {
        let over_major: usize = reconciliations
            .iter()
            .map(|reconciliation| reconciliation.summary(&tolerance).over_major)
            .sum();

        if over_major > 0 {
            bail!(
                "{over_major} reconciliation record(s) differ by {}% or more",
                tolerance.major_pct
            );
        }
    }

    Ok(())
}
