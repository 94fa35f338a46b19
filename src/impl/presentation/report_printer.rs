use crate::{
    domain::logic::bucket_classifier::BucketClassifier,
    entities::{CellBucket, TaxRecord, ValidationSummary, YearRange},
};

use super::utils::{format_amount, format_value};

impl CellBucket {
    fn marker(&self) -> char {
        match self {
            CellBucket::BeforeDataWindow => '~',
            CellBucket::Settled => '=',
            CellBucket::Outstanding => ' ',
        }
    }
}

pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(
        &self,
        range: YearRange,
        records: &[TaxRecord],
        summary: &ValidationSummary,
    ) -> String {
        let mut output = String::new();

        output.push_str("--- Validation ---------------------------------------------------------------\n\n");
        self.print_summary(&mut output, summary);
        output.push('\n');

        output.push_str("--- Legend -------------------------------------------------------------------\n\n");
        self.print_legend(&mut output);
        output.push('\n');

        output.push_str("--- Arrears ------------------------------------------------------------------\n\n");
        self.print_grid(&mut output, range, records);

        output
    }

    fn print_summary(&self, output: &mut String, summary: &ValidationSummary) {
        output.push_str(&format!("Total records:       {}\n", summary.total_records));
        output.push_str(&format!(
            "Duplicates detected: {}\n",
            summary.duplicates.len()
        ));
        if !summary.duplicates.is_empty() {
            output.push_str(&format!("  {}\n", summary.duplicates.join(", ")));
        }
        output.push_str(&format!("Data anomalies:      {}\n", summary.anomalies.len()));
        for anomaly in &summary.anomalies {
            output.push_str(&format!("  - {}\n", anomaly));
        }
    }

    fn print_legend(&self, output: &mut String) {
        for bucket in [
            CellBucket::BeforeDataWindow,
            CellBucket::Settled,
            CellBucket::Outstanding,
        ] {
            output.push_str(&format!("[{}] {}\n", bucket.marker(), bucket));
        }
    }

    fn print_grid(&self, output: &mut String, range: YearRange, records: &[TaxRecord]) {
        let header: Vec<String> = ["Nama".to_string(), "NOP".to_string()]
            .into_iter()
            .chain(range.years().map(|y| y.to_string()))
            .chain(["Total".to_string()])
            .collect();

        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| {
                let cells = BucketClassifier::new(record).classify_all();
                [record.name.clone(), record.tax_object_id.clone()]
                    .into_iter()
                    .chain(cells.into_iter().map(|(year, bucket)| {
                        format!(
                            "{}{}",
                            bucket.marker(),
                            format_value(record.arrears.get(year))
                        )
                    }))
                    .chain([format_amount(record.total)])
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|i| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain([header[i].chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let print_row = |output: &mut String, row: &[String]| {
            let line = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    // Identity columns read left to right, amounts align right.
                    if i < 2 {
                        format!("{:<width$}", cell, width = *width)
                    } else {
                        format!("{:>width$}", cell, width = *width)
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            output.push_str(line.trim_end());
            output.push('\n');
        };

        print_row(output, header.as_slice());
        for row in &rows {
            print_row(output, row.as_slice());
        }
    }
}
