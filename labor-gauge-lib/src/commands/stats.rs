use super::Host;
use super::common::{WarehouseArgs, init_logging, load_inputs};
use crate::Result;
use crate::schema::{TableSummary, Warehouse};
use clap::Parser;
use core::fmt::Write;

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub warehouse: WarehouseArgs,
}

/// Prints row counts and period coverage for every warehouse table.
pub fn print_stats<H: Host>(host: &mut H, args: &StatsArgs) -> Result<()> {
    init_logging(args.warehouse.log_level);
    let (warehouse, _) = load_inputs(&args.warehouse)?;

    let mut text = String::new();
    render_stats(&warehouse, &mut text)?;

    let _ = std::io::Write::write_all(&mut host.output(), text.as_bytes());
    Ok(())
}

fn render_stats<W: Write>(warehouse: &Warehouse, writer: &mut W) -> Result<()> {
    let summary = warehouse.summary();
    let name_width = summary.iter().map(|table| table.name.len()).chain(["table".len()]).max().unwrap_or_default();

    writeln!(writer, "{:<name_width$}  {:>8}  periods", "table", "rows")?;
    for table in &summary {
        let TableSummary { name, rows, periods } = table;
        match periods {
            Some((first, last)) => writeln!(writer, "{name:<name_width$}  {rows:>8}  {first}..{last}")?,
            None => writeln!(writer, "{name:<name_width$}  {rows:>8}")?,
        }
    }

    match warehouse.latest_period() {
        Some(period) => writeln!(writer, "\nlatest period: {period}")?,
        None => writeln!(writer, "\nlatest period: none (no fact rows)")?,
    }

    Ok(())
}
