//! Batch conversion summary and result table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use super::record::ConversionRecord;

/// Counts of a finished batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[ConversionRecord]) -> Self {
        let failed = records.iter().filter(|r| !r.is_ok()).count();
        Self {
            total: records.len(),
            converted: records.len() - failed,
            failed,
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("Values"), Cell::new(self.total)]);
        table.add_row(vec![
            Cell::new("Converted"),
            Cell::new(self.converted)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Failed"),
            Cell::new(self.failed).fg(if self.failed == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

/// Build the per-value result table
pub fn results_table(records: &[ConversionRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Line").add_attribute(Attribute::Bold),
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Result").add_attribute(Attribute::Bold),
    ]);

    for record in records {
        let line = record
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let result = match (&record.output, &record.error) {
            (_, Some(err)) => Cell::new(err).fg(Color::Red),
            (Some(out), None) => Cell::new(out).fg(Color::Green),
            (None, None) => Cell::new(""),
        };
        table.add_row(vec![Cell::new(line), Cell::new(&record.input), result]);
    }

    table
}
