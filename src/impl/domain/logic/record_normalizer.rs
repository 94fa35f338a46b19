use tracing::warn;

use crate::entities::{ArrearValue, Arrears, RawExtractionResult, TaxRecord, YearRange};

pub(crate) struct RecordNormalizer {
    range: YearRange,
}

impl RecordNormalizer {
    pub(crate) fn new(range: YearRange) -> Self {
        Self { range }
    }

    pub(crate) fn process(&self, raw_results: Vec<RawExtractionResult>) -> Vec<TaxRecord> {
        raw_results
            .into_iter()
            .map(|raw| self.normalize(raw))
            .collect()
    }

    /// Expands sparse yearly entries into a dense record. Out-of-range years
    /// are dropped; when a year repeats, the last entry wins.
    pub(crate) fn normalize(&self, raw: RawExtractionResult) -> TaxRecord {
        let RawExtractionResult {
            name,
            tax_object_id,
            entries,
        } = raw;

        let mut arrears = Arrears::new(self.range);
        let mut discarded = 0usize;
        for entry in entries {
            let stored = i32::try_from(entry.year)
                .is_ok_and(|year| arrears.set(year, ArrearValue::from_amount(entry.amount)));
            if !stored {
                discarded += 1;
            }
        }
        if discarded > 0 {
            warn!(
                tax_object_id = %tax_object_id,
                discarded,
                start = self.range.start(),
                end = self.range.end(),
                "discarded entries outside year range"
            );
        }

        let total = arrears.outstanding_total();
        TaxRecord {
            name,
            tax_object_id,
            arrears,
            total,
            notes: Vec::new(),
        }
    }
}
