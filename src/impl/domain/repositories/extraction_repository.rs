use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Document, RawExtractionResult};

#[async_trait]
pub trait ExtractionRepository: Send + Sync {
    async fn load_document<P>(&self, path: P) -> Result<Document, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn extract(&self, document: &Document) -> Result<Vec<RawExtractionResult>, ServerError>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::{collections::HashMap, sync::Mutex};

    use super::*;
    use crate::{
        entities::{MediaType, RawArrearEntry},
        errors::{ExtractionRejected, ReadError},
    };

    /// Serves canned extraction results keyed by document name. Documents
    /// without an entry fail as if the service rejected them.
    #[derive(Default)]
    pub(crate) struct FakeExtractionRepository {
        results: HashMap<String, Vec<RawExtractionResult>>,
        pub(crate) extracted: Mutex<Vec<String>>,
    }

    impl FakeExtractionRepository {
        pub(crate) fn with_document(
            mut self,
            name: &str,
            taxpayers: &[(&str, &[(i32, f64)])],
        ) -> Self {
            let results = taxpayers
                .iter()
                .map(|(id, entries)| RawExtractionResult {
                    name: format!("WP {}", id),
                    tax_object_id: id.to_string(),
                    entries: entries
                        .iter()
                        .map(|&(year, amount)| RawArrearEntry {
                            year: year.into(),
                            amount,
                        })
                        .collect(),
                })
                .collect();
            self.results.insert(name.to_string(), results);
            self
        }

        pub(crate) fn extracted(&self) -> Vec<String> {
            self.extracted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExtractionRepository for FakeExtractionRepository {
        async fn load_document<P>(&self, path: P) -> Result<Document, ServerError>
        where
            P: AsRef<std::path::Path> + Send,
        {
            let name = path.as_ref().display().to_string();
            if name.starts_with("unreadable") {
                return Err(ReadError::new(&name));
            }
            Ok(Document::new(name, Vec::new(), MediaType::Pdf))
        }

        async fn extract(
            &self,
            document: &Document,
        ) -> Result<Vec<RawExtractionResult>, ServerError> {
            self.extracted.lock().unwrap().push(document.name.clone());
            self.results
                .get(&document.name)
                .cloned()
                .ok_or_else(|| ExtractionRejected::new(&document.name, 500))
        }
    }
}
