use super::year_range::YearRange;

/// Value recorded for one tax year.
///
/// `Settled` (an amount of exactly zero) is kept apart from `NoData` (the
/// year does not appear in the source document).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrearValue {
    NoData,
    Settled,
    Amount(f64),
}

impl ArrearValue {
    pub fn from_amount(amount: f64) -> Self {
        if amount == 0.0 {
            ArrearValue::Settled
        } else {
            ArrearValue::Amount(amount)
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            ArrearValue::NoData => None,
            ArrearValue::Settled => Some(0.0),
            ArrearValue::Amount(a) => Some(*a),
        }
    }

    pub fn has_data(&self) -> bool {
        !matches!(self, ArrearValue::NoData)
    }

    /// Amount counted towards a record total (strictly positive only).
    pub fn outstanding(&self) -> Option<f64> {
        match self {
            ArrearValue::Amount(a) if *a > 0.0 => Some(*a),
            _ => None,
        }
    }
}

/// Dense per-year arrears, one slot for every year of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrears {
    range: YearRange,
    values: Vec<ArrearValue>,
}

impl Arrears {
    /// All years start as `NoData`.
    pub fn new(range: YearRange) -> Self {
        Self {
            range,
            values: vec![ArrearValue::NoData; range.len()],
        }
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Never zero: a range always covers at least one year.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `None` for years outside the range.
    pub fn get(&self, year: i32) -> Option<ArrearValue> {
        self.range.offset(year).map(|i| self.values[i])
    }

    /// Overwrites the slot for `year`. Returns false (and changes nothing)
    /// when the year is outside the range.
    pub fn set(&mut self, year: i32, value: ArrearValue) -> bool {
        match self.range.offset(year) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, ArrearValue)> + '_ {
        self.range.years().zip(self.values.iter().copied())
    }

    /// Sum of strictly positive amounts.
    pub fn outstanding_total(&self) -> f64 {
        self.values.iter().filter_map(ArrearValue::outstanding).sum()
    }

    /// Earliest year holding anything other than `NoData`.
    pub fn first_data_year(&self) -> Option<i32> {
        self.iter()
            .find(|(_, value)| value.has_data())
            .map(|(year, _)| year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> YearRange {
        YearRange::new(2020, 2022).unwrap()
    }

    #[test]
    fn test_zero_is_settled_not_no_data() {
        assert_eq!(ArrearValue::from_amount(0.0), ArrearValue::Settled);
        assert_eq!(ArrearValue::from_amount(-0.0), ArrearValue::Settled);
        assert_eq!(ArrearValue::from_amount(12.5), ArrearValue::Amount(12.5));
        assert_eq!(ArrearValue::Settled.amount(), Some(0.0));
        assert_eq!(ArrearValue::NoData.amount(), None);
    }

    #[test]
    fn test_new_arrears_cover_every_year() {
        let arrears = Arrears::new(range());
        assert_eq!(arrears.len(), 3);
        assert!(arrears.iter().all(|(_, v)| v == ArrearValue::NoData));
        assert_eq!(
            arrears.iter().map(|(y, _)| y).collect::<Vec<_>>(),
            vec![2020, 2021, 2022]
        );
    }

    #[test]
    fn test_set_outside_range_is_ignored() {
        let mut arrears = Arrears::new(range());
        assert!(!arrears.set(2019, ArrearValue::Amount(10.0)));
        assert!(arrears.set(2021, ArrearValue::Amount(10.0)));
        assert_eq!(arrears.get(2019), None);
        assert_eq!(arrears.get(2021), Some(ArrearValue::Amount(10.0)));
    }

    #[test]
    fn test_outstanding_total_skips_non_positive() {
        let mut arrears = Arrears::new(range());
        arrears.set(2020, ArrearValue::Amount(100.0));
        arrears.set(2021, ArrearValue::Amount(-50.0));
        arrears.set(2022, ArrearValue::Settled);
        assert_eq!(arrears.outstanding_total(), 100.0);
    }

    #[test]
    fn test_first_data_year() {
        let mut arrears = Arrears::new(range());
        assert_eq!(arrears.first_data_year(), None);
        arrears.set(2022, ArrearValue::Amount(5.0));
        arrears.set(2021, ArrearValue::Settled);
        assert_eq!(arrears.first_data_year(), Some(2021));
    }
}
