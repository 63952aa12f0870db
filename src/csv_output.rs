//! CSV output format for experiment tables and uplift results

use crate::experiment::{ExperimentResult, GroupSummary};
use crate::uplift::UpliftResult;

/// CSV formatter for experiment tables
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<GroupSummary>,
}

impl CsvOutput {
    /// Create an empty CSV formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter holding both rows of an experiment
    pub fn from_experiment(result: &ExperimentResult) -> Self {
        let mut output = Self::new();
        for row in result.rows() {
            output.add_row(row.clone());
        }
        output
    }

    pub fn add_row(&mut self, row: GroupSummary) {
        self.rows.push(row);
    }

    fn header() -> &'static str {
        "group,Converted,Visited,CR_pct"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &GroupSummary) -> String {
        [
            Self::escape_field(row.group.label()),
            row.converted.to_string(),
            row.visited.to_string(),
            format_float(row.cr_pct),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}

/// Render an uplift result as a two-line CSV document
pub fn uplift_to_csv(uplift: &UpliftResult) -> String {
    format!(
        "diff,upli\n{},{}\n",
        format_float(uplift.diff),
        format_float(uplift.upli)
    )
}

/// NaN becomes an empty field; infinities keep their `inf` spelling
fn format_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{generate_experiment, Group};
    use crate::uplift::{compute_uplift, Rounding};

    fn row(group: Group, converted: u64, visited: u64) -> GroupSummary {
        GroupSummary {
            group,
            converted,
            visited,
            cr_pct: 100.0 * converted as f64 / visited as f64,
        }
    }

    #[test]
    fn test_csv_header() {
        let csv = CsvOutput::new().to_csv();
        assert_eq!(csv, "group,Converted,Visited,CR_pct\n");
    }

    #[test]
    fn test_csv_escape_field_simple() {
        assert_eq!(CsvOutput::escape_field("Control"), "Control");
    }

    #[test]
    fn test_csv_escape_field_with_comma() {
        assert_eq!(CsvOutput::escape_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_csv_escape_field_with_quote() {
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_rows() {
        let mut output = CsvOutput::new();
        output.add_row(row(Group::Control, 594, 2000));
        output.add_row(row(Group::Variant, 612, 2000));

        let csv = output.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Control,594,2000,29.7");
        assert_eq!(lines[2], "Variant,612,2000,30.6");
    }

    #[test]
    fn test_csv_from_experiment_keeps_order() {
        let result = generate_experiment(42, 50, 0.5, 0.5).unwrap();
        let csv = CsvOutput::from_experiment(&result).to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("Control,"));
        assert!(lines[2].starts_with("Variant,"));
    }

    #[test]
    fn test_csv_empty_experiment_rate() {
        let result = generate_experiment(1, 0, 0.5, 0.5).unwrap();
        let csv = CsvOutput::from_experiment(&result).to_csv();
        assert!(csv.contains("Control,0,0,\n"));
    }

    #[test]
    fn test_uplift_csv() {
        let csv = uplift_to_csv(&compute_uplift(29.7, 30.6, Rounding::RoundTo(1)));
        assert_eq!(csv, "diff,upli\n0.9,3\n");

        let csv = uplift_to_csv(&compute_uplift(0.0, 0.1, Rounding::NoRounding));
        assert_eq!(csv, "diff,upli\n0.1,inf\n");
    }
}
