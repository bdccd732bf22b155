use super::Host;
use crate::Result;
use crate::indicators::{REPORT_DEFINITIONS, ReportDef};
use core::fmt::Write;

/// Prints every registered report with its category and description.
pub fn list_reports<H: Host>(host: &mut H) -> Result<()> {
    let mut text = String::new();
    render_list(REPORT_DEFINITIONS, &mut text)?;

    let _ = std::io::Write::write_all(&mut host.output(), text.as_bytes());
    Ok(())
}

fn render_list<W: Write>(defs: &[&ReportDef], writer: &mut W) -> Result<()> {
    let name_width = defs.iter().map(|def| def.name.len()).max().unwrap_or_default();
    let category_width = defs.iter().map(|def| def.category.to_string().len()).max().unwrap_or_default();

    for def in defs {
        writeln!(
            writer,
            "{:<name_width$}  {:<category_width$}  {}",
            def.name,
            def.category.to_string(),
            def.description
        )?;
    }

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_list_has_one_line_per_report() {
        let mut host = TestHost::new();
        list_reports(&mut host).unwrap();

        let output = host.output_str();
        assert_eq!(output.lines().count(), REPORT_DEFINITIONS.len());
        for (line, def) in output.lines().zip(REPORT_DEFINITIONS) {
            assert!(line.starts_with(def.name), "{line}");
            assert!(line.ends_with(def.description), "{line}");
        }
    }

    #[test]
    fn test_list_columns_are_aligned() {
        let mut text = String::new();
        render_list(REPORT_DEFINITIONS, &mut text).unwrap();

        let offsets: Vec<_> = text
            .lines()
            .zip(REPORT_DEFINITIONS)
            .map(|(line, def)| line.rfind(def.description).unwrap())
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] == pair[1]), "{text}");
    }
}
