use std::collections::HashSet;

use crate::entities::{TaxRecord, ValidationSummary};

/// Absolute tolerance for floating-point noise in stored totals.
const TOTAL_TOLERANCE: f64 = 0.01;

pub(crate) struct ValidationEngine<'a> {
    records: &'a [TaxRecord],
}

impl<'a> ValidationEngine<'a> {
    pub(crate) fn new(records: &'a [TaxRecord]) -> Self {
        Self { records }
    }

    pub(crate) fn process(self) -> ValidationSummary {
        ValidationSummary {
            total_records: self.records.len(),
            duplicates: self.duplicates(),
            anomalies: self.anomalies(),
        }
    }

    fn duplicates(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();
        self.records
            .iter()
            .map(|r| r.tax_object_id.as_str())
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .map(str::to_string)
            .collect()
    }

    fn anomalies(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| (r.arrears.outstanding_total() - r.total).abs() > TOTAL_TOLERANCE)
            .map(|r| format!("Calculated total mismatch for {}", r.tax_object_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ArrearValue, Arrears, YearRange};

    fn record(id: &str, values: &[(i32, ArrearValue)], total: f64) -> TaxRecord {
        let mut arrears = Arrears::new(YearRange::new(2020, 2022).unwrap());
        for &(year, value) in values {
            arrears.set(year, value);
        }
        TaxRecord {
            name: format!("WP {}", id),
            tax_object_id: id.into(),
            arrears,
            total,
            notes: vec![],
        }
    }

    fn consistent(id: &str) -> TaxRecord {
        record(id, &[(2021, ArrearValue::Amount(10.0))], 10.0)
    }

    #[test]
    fn test_empty_input() {
        let summary = ValidationEngine::new(&[]).process();
        assert_eq!(summary, ValidationSummary::default());
        assert!(summary.is_clean());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let records: Vec<_> = ["A", "B", "A", "C", "B", "B"]
            .into_iter()
            .map(consistent)
            .collect();
        let summary = ValidationEngine::new(&records).process();
        assert_eq!(summary.total_records, 6);
        assert_eq!(summary.duplicates, vec!["A".to_string(), "B".to_string()]);
        assert!(summary.anomalies.is_empty());
    }

    #[test]
    fn test_empty_ids_can_be_duplicates() {
        let records = vec![consistent(""), consistent("X"), consistent("")];
        let summary = ValidationEngine::new(&records).process();
        assert_eq!(summary.duplicates, vec![String::new()]);
    }

    #[test]
    fn test_negative_and_missing_years_do_not_count() {
        let values = [
            (2020, ArrearValue::Amount(100.0)),
            (2021, ArrearValue::Amount(-50.0)),
            (2022, ArrearValue::NoData),
        ];

        let ok = ValidationEngine::new(&[record("N1", &values, 100.0)]).process();
        assert!(ok.anomalies.is_empty());

        let bad = ValidationEngine::new(&[record("N1", &values, 50.0)]).process();
        assert_eq!(bad.anomalies, vec!["Calculated total mismatch for N1".to_string()]);
    }

    #[test]
    fn test_rounding_noise_is_tolerated() {
        let values = [(2020, ArrearValue::Amount(100.0))];
        let summary = ValidationEngine::new(&[
            record("R1", &values, 100.005),
            record("R2", &values, 100.02),
        ])
        .process();
        assert_eq!(summary.anomalies, vec!["Calculated total mismatch for R2".to_string()]);
    }

    #[test]
    fn test_anomalies_not_collapsed_for_same_id() {
        let values = [(2020, ArrearValue::Amount(100.0))];
        let records = vec![
            record("D1", &values, 1.0),
            consistent("OK"),
            record("D1", &values, 2.0),
        ];
        let summary = ValidationEngine::new(&records).process();
        assert_eq!(summary.anomalies.len(), 2);
        assert_eq!(summary.duplicates, vec!["D1".to_string()]);
    }
}
