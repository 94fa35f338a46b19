use crate::entities::{ArrearValue, CellBucket, TaxRecord};

pub(crate) struct BucketClassifier<'a> {
    record: &'a TaxRecord,
    first_data_year: Option<i32>,
}

impl<'a> BucketClassifier<'a> {
    pub(crate) fn new(record: &'a TaxRecord) -> Self {
        Self {
            record,
            first_data_year: record.arrears.first_data_year(),
        }
    }

    /// A record without any data has no first year, so every year counts as
    /// before the data window.
    pub(crate) fn classify(&self, year: i32) -> CellBucket {
        if self.first_data_year.map_or(true, |first| year < first) {
            return CellBucket::BeforeDataWindow;
        }
        match self.record.arrears.get(year) {
            Some(ArrearValue::Settled) => CellBucket::Settled,
            _ => CellBucket::Outstanding,
        }
    }

    pub(crate) fn classify_all(&self) -> Vec<(i32, CellBucket)> {
        self.record
            .arrears
            .range()
            .years()
            .map(|year| (year, self.classify(year)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Arrears, YearRange};

    fn record(values: &[(i32, ArrearValue)]) -> TaxRecord {
        let mut arrears = Arrears::new(YearRange::new(2018, 2021).unwrap());
        for &(year, value) in values {
            arrears.set(year, value);
        }
        let total = arrears.outstanding_total();
        TaxRecord {
            name: "SITI AMINAH".into(),
            tax_object_id: "14.06.020.003.004-0012.0".into(),
            arrears,
            total,
            notes: vec![],
        }
    }

    #[test]
    fn test_before_window_then_settled_then_outstanding() {
        let r = record(&[
            (2020, ArrearValue::Settled),
            (2021, ArrearValue::Amount(500.0)),
        ]);
        let classifier = BucketClassifier::new(&r);
        assert_eq!(classifier.classify(2018), CellBucket::BeforeDataWindow);
        assert_eq!(classifier.classify(2019), CellBucket::BeforeDataWindow);
        assert_eq!(classifier.classify(2020), CellBucket::Settled);
        assert_eq!(classifier.classify(2021), CellBucket::Outstanding);
    }

    #[test]
    fn test_record_without_data_is_entirely_before_window() {
        let r = record(&[]);
        let buckets = BucketClassifier::new(&r).classify_all();
        assert_eq!(buckets.len(), 4);
        assert!(buckets
            .iter()
            .all(|(_, b)| *b == CellBucket::BeforeDataWindow));
    }

    #[test]
    fn test_gap_after_first_data_is_outstanding() {
        let r = record(&[
            (2018, ArrearValue::Amount(10.0)),
            (2021, ArrearValue::Settled),
        ]);
        let classifier = BucketClassifier::new(&r);
        assert_eq!(classifier.classify(2019), CellBucket::Outstanding);
        assert_eq!(classifier.classify(2020), CellBucket::Outstanding);
        assert_eq!(classifier.classify(2021), CellBucket::Settled);
    }

    #[test]
    fn test_negative_amount_is_outstanding() {
        let r = record(&[(2019, ArrearValue::Amount(-75.0))]);
        assert_eq!(BucketClassifier::new(&r).classify(2019), CellBucket::Outstanding);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let r = record(&[(2019, ArrearValue::Settled)]);
        for year in 2015..2025 {
            let first = BucketClassifier::new(&r).classify(year);
            let second = BucketClassifier::new(&r).classify(year);
            assert_eq!(first, second);
        }
    }
}
