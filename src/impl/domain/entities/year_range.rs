use std::ops::RangeInclusive;

use fractic_server_error::ServerError;

use crate::errors::InvalidYearRange;

pub const DEFAULT_START_YEAR: i32 = 2004;
pub const DEFAULT_END_YEAR: i32 = 2025;
/// Widest range accepted; every record allocates one slot per year.
pub const MAX_YEAR_SPAN: usize = 1000;

/// Fixed, inclusive range of tax years every record is normalized over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, ServerError> {
        let span = i64::from(end) - i64::from(start) + 1;
        if span < 1 || span > MAX_YEAR_SPAN as i64 {
            return Err(InvalidYearRange::new(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Ordered sequence of years, oldest first.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end) as usize + 1
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Position of the year in the dense per-year container, if in range.
    pub(crate) fn offset(&self, year: i32) -> Option<usize> {
        self.contains(year)
            .then(|| year.abs_diff(self.start) as usize)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}
