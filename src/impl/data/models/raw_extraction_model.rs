use tracing::debug;

use crate::entities::{RawArrearEntry, RawExtractionResult};

#[derive(Debug, serde_derive::Deserialize)]
pub struct RawArrearEntryModel {
    // Any JSON number; `2021.0` and misread values like `20210101010` must
    // not fail the whole response.
    pub year: f64,
    #[serde(alias = "kurangBayar")]
    pub amount: f64,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtractionResultModel {
    #[serde(default, alias = "nama")]
    pub name: String,
    #[serde(default, alias = "nop")]
    pub tax_object_id: String,
    #[serde(default, alias = "arrears")]
    pub entries: Vec<RawArrearEntryModel>,
}

impl RawArrearEntryModel {
    fn whole_year(&self) -> Option<i64> {
        (self.year.is_finite() && self.year.fract() == 0.0).then(|| self.year as i64)
    }
}

impl RawExtractionResultModel {
    fn into_entries(entries: Vec<RawArrearEntryModel>) -> Vec<RawArrearEntry> {
        entries
            .into_iter()
            .filter_map(|entry| {
                let year = entry.whole_year();
                if year.is_none() {
                    debug!(year = entry.year, "dropping entry with fractional year");
                }
                year.map(|year| RawArrearEntry {
                    year,
                    amount: entry.amount,
                })
            })
            .collect()
    }
}

impl Into<RawExtractionResult> for RawExtractionResultModel {
    fn into(self) -> RawExtractionResult {
        RawExtractionResult {
            name: self.name,
            tax_object_id: self.tax_object_id,
            entries: Self::into_entries(self.entries),
        }
    }
}
