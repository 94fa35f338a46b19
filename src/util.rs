use fractic_server_error::ServerError;
use tracing::{debug, error, info, warn};

use crate::{
    config::VerifierConfig,
    domain::{
        logic::{bucket_classifier::BucketClassifier, validation_engine::ValidationEngine},
        usecases::process_usecase::{ProcessUsecase, ProcessUsecaseImpl},
    },
    entities::{CellBucket, Document, TaxRecord, ValidationSummary, YearRange},
    presentation::report_printer::ReportPrinter,
};

pub type Report = String;

/// Shown to the user when a batch stops early. Records appended before the
/// failing document stay in the session.
pub const BATCH_FAILURE_NOTICE: &str =
    "Failed to process files. Please check your API key and file content.";

/// Single-session arrears verifier.
///
/// Owns the session's record list. Records are only ever appended (one batch
/// of documents at a time) or cleared all at once; the validation summary is
/// derived from the current list on every call.
pub struct ArrearsVerifierUtil<U = ProcessUsecaseImpl>
where
    U: ProcessUsecase,
{
    process_usecase: U,
    printer: ReportPrinter,
    year_range: YearRange,
    records: Vec<TaxRecord>,
    last_failure: Option<String>,
}

impl ArrearsVerifierUtil {
    pub fn new(config: VerifierConfig) -> Self {
        let year_range = config.year_range;
        Self::with_usecase(year_range, ProcessUsecaseImpl::new(config))
    }

    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self::new(VerifierConfig::from_env()?))
    }
}

impl<U: ProcessUsecase> ArrearsVerifierUtil<U> {
    fn with_usecase(year_range: YearRange, process_usecase: U) -> Self {
        Self {
            process_usecase,
            printer: ReportPrinter::new(),
            year_range,
            records: Vec::new(),
            last_failure: None,
        }
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn records(&self) -> &[TaxRecord] {
        &self.records
    }

    /// Notice from the last batch that stopped early, if any.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Extracts and appends the records of each document, strictly in order.
    /// The first failing document stops the batch; records from documents
    /// before it are kept. Returns the number of records appended.
    pub async fn process_documents<I>(&mut self, documents: I) -> Result<usize, ServerError>
    where
        I: IntoIterator<Item = Document>,
    {
        self.last_failure = None;
        info!("processing document batch");
        let mut appended = 0;
        for document in documents {
            let result = self.process_usecase.from_document(&document).await;
            appended += self.append_or_halt(&document.name, result)?;
        }
        info!(appended, total = self.records.len(), "document batch finished");
        Ok(appended)
    }

    /// Same as [`Self::process_documents`], loading each document from disk
    /// right before it is extracted.
    pub async fn process_files<P>(&mut self, paths: &[P]) -> Result<usize, ServerError>
    where
        P: AsRef<std::path::Path> + Sync,
    {
        self.last_failure = None;
        info!(files = paths.len(), "processing file batch");
        let mut appended = 0;
        for path in paths {
            let path = path.as_ref();
            let result = self.process_usecase.from_file(path).await;
            appended += self.append_or_halt(&path.display().to_string(), result)?;
        }
        info!(appended, total = self.records.len(), "file batch finished");
        Ok(appended)
    }

    fn append_or_halt(
        &mut self,
        document: &str,
        result: Result<Vec<TaxRecord>, ServerError>,
    ) -> Result<usize, ServerError> {
        match result {
            Ok(records) => {
                debug!(document, records = records.len(), "appending records");
                let count = records.len();
                self.records.extend(records);
                Ok(count)
            }
            Err(e) => {
                error!(document, error = ?e, "batch halted");
                self.last_failure = Some(BATCH_FAILURE_NOTICE.to_string());
                Err(e)
            }
        }
    }

    /// Empties the session.
    pub fn clear(&mut self) {
        debug!(records = self.records.len(), "clearing session");
        self.records.clear();
        self.last_failure = None;
    }

    pub fn summary(&self) -> ValidationSummary {
        let summary = ValidationEngine::new(&self.records).process();
        if !summary.is_clean() {
            warn!(
                duplicates = summary.duplicates.len(),
                anomalies = summary.anomalies.len(),
                "validation findings"
            );
        }
        summary
    }

    /// Styling bucket of one grid cell.
    pub fn classify(&self, record: &TaxRecord, year: i32) -> CellBucket {
        BucketClassifier::new(record).classify(year)
    }

    pub fn report(&self) -> Report {
        self.printer
            .print_report(self.year_range, &self.records, &self.summary())
    }
}
