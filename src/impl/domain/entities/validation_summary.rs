use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total_records: usize,
    /// Each repeated tax object number once, in order of first repetition.
    pub duplicates: Vec<String>,
    /// One message per record whose stored total disagrees with its arrears.
    pub anomalies: Vec<String>,
}

impl ValidationSummary {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.anomalies.is_empty()
    }
}

/// Styling bucket of one grid cell. Displays as its legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellBucket {
    /// Year before the first year with any recorded value.
    BeforeDataWindow,
    /// Recorded value of exactly zero (paid).
    Settled,
    /// Anything else: outstanding amounts and gaps after data started.
    Outstanding,
}

impl std::fmt::Display for CellBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellBucket::BeforeDataWindow => write!(f, "Tahun sebelum piutang muncul"),
            CellBucket::Settled => write!(f, "Lunas / Nilai 0 (Kurang Bayar)"),
            CellBucket::Outstanding => write!(f, "Piutang Berjalan"),
        }
    }
}
