//! Human-readable text output
//!
//! The experiment table is laid out like a printed data frame: row labels on
//! the left, right-aligned columns separated by two spaces.

use crate::experiment::ExperimentResult;
use crate::uplift::UpliftResult;

const COLUMNS: [&str; 3] = ["Converted", "Visited", "CR_pct"];

/// Format an experiment as an aligned table
pub fn format_experiment_table(result: &ExperimentResult) -> String {
    let cells: Vec<(&str, [String; 3])> = result
        .rows()
        .into_iter()
        .map(|row| {
            (
                row.group.label(),
                [
                    row.converted.to_string(),
                    row.visited.to_string(),
                    row.cr_pct.to_string(),
                ],
            )
        })
        .collect();

    let label_width = cells.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|(_, values)| values[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = format!("{:label_width$}", "");
    for (header, &width) in COLUMNS.iter().zip(&widths) {
        output.push_str(&format!("  {header:>width$}"));
    }
    output.push('\n');

    for (label, values) in &cells {
        output.push_str(&format!("{label:<label_width$}"));
        for (value, &width) in values.iter().zip(&widths) {
            output.push_str(&format!("  {value:>width$}"));
        }
        output.push('\n');
    }

    output
}

/// Format an uplift result, one field per line
pub fn format_uplift(uplift: &UpliftResult) -> String {
    format!("diff: {}\nupli: {}\n", uplift.diff, uplift.upli)
}
