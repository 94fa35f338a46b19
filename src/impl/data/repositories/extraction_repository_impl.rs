use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::ExtractionConfig,
    data::datasources::{
        document_file_datasource::{DocumentFileDatasource, DocumentFileDatasourceImpl},
        extraction_api_datasource::{ExtractionApiDatasource, ExtractionApiDatasourceImpl},
    },
    domain::repositories::extraction_repository::ExtractionRepository,
    entities::{Document, RawExtractionResult},
};

pub struct ExtractionRepositoryImpl<
    DS1 = DocumentFileDatasourceImpl,  // Default.
    DS2 = ExtractionApiDatasourceImpl, // Default.
> where
    DS1: DocumentFileDatasource,
    DS2: ExtractionApiDatasource,
{
    file_datasource: DS1,
    api_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ExtractionRepository for ExtractionRepositoryImpl<DS1, DS2>
where
    DS1: DocumentFileDatasource,
    DS2: ExtractionApiDatasource,
{
    async fn load_document<P>(&self, path: P) -> Result<Document, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.file_datasource.from_file(path).await
    }

    async fn extract(&self, document: &Document) -> Result<Vec<RawExtractionResult>, ServerError> {
        Ok(self
            .api_datasource
            .extract(document)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl ExtractionRepositoryImpl {
    pub(crate) fn new(config: ExtractionConfig) -> Self {
        ExtractionRepositoryImpl {
            file_datasource: DocumentFileDatasourceImpl::new(),
            api_datasource: ExtractionApiDatasourceImpl::new(config),
        }
    }
}
