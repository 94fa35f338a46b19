use super::arrears::Arrears;

// Before normalization.
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct RawArrearEntry {
    /// As read from the document; may lie far outside any sensible range.
    pub year: i64,
    pub amount: f64,
}

/// One taxpayer as reported by the extraction service. Entries are sparse,
/// unsorted, and may repeat a year.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExtractionResult {
    pub name: String,
    pub tax_object_id: String,
    pub entries: Vec<RawArrearEntry>,
}

// After normalization.
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct TaxRecord {
    /// Taxpayer name ("Nama Wajib Pajak"). Empty if extraction missed it.
    pub name: String,
    /// Tax object number (NOP). Dedup key, not guaranteed unique.
    pub tax_object_id: String,
    pub arrears: Arrears,
    /// Sum of strictly positive yearly amounts.
    pub total: f64,
    pub notes: Vec<String>,
}
