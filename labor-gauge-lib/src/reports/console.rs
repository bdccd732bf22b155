use super::common;
use crate::Result;
use crate::indicators::Report;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Indent for everything below a report's title
const INDENT: usize = 2;

/// Gap between table columns
const GAP: &str = "  ";

pub fn generate<W: Write>(reports: &[Report], use_colors: bool, writer: &mut W) -> Result<()> {
    let term_width = get_terminal_width();

    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let title = format!("{} [{}]", report.name(), report.category());
        if use_colors {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{title}")?;
        }

        for line in wrap_text(report.description(), term_width, INDENT) {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        if report.rows.is_empty() {
            writeln!(writer, "{:INDENT$}(no rows)", "")?;
            continue;
        }

        let header = common::header(report);
        let rows: Vec<Vec<String>> = report.rows.iter().map(common::row_cells).collect();

        // widest cell per column, header included
        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(col, name)| rows.iter().map(|cells| cells[col].chars().count()).fold(name.len(), usize::max))
            .collect();

        let last = header.len() - 1;
        let header_line = format_line(header.iter().copied(), &widths, last);
        if use_colors {
            writeln!(writer, "{:INDENT$}{}", "", header_line.underline())?;
        } else {
            writeln!(writer, "{:INDENT$}{header_line}", "")?;
        }

        for cells in &rows {
            let label = &cells[last];
            let line = format_line(cells.iter().take(last).map(String::as_str), &widths, last);
            if use_colors {
                writeln!(writer, "{:INDENT$}{line}{GAP}{}", "", label.cyan())?;
            } else {
                writeln!(writer, "{:INDENT$}{}", "", format!("{line}{GAP}{label}").trim_end())?;
            }
        }
    }

    Ok(())
}

/// Lays out cells at the given widths: the entity column and the label left-aligned, values right-aligned.
///
/// Trailing padding is dropped from the last cell written.
fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], label_col: usize) -> String {
    let mut line = String::new();
    for (col, cell) in cells.enumerate() {
        if col > 0 {
            line.push_str(GAP);
        }

        let width = widths[col];
        if col == 0 || col == label_col {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("{cell:>width$}"));
        }
    }
    line.trim_end().to_string()
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

/// Word-wrap text so that every line, indentation included, fits within `width`.
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        // Not enough space, return single line
        return vec![format!("{:indent$}{text}", "")];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let separator_len = usize::from(!current_line.is_empty());
        if !current_line.is_empty() && indent + current_line.len() + separator_len + word.len() > width {
            lines.push(format!("{:indent$}{current_line}", ""));
            current_line.clear();
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(format!("{:indent$}{current_line}", ""));
    }

    lines
}
