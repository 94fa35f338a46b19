use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::VerifierConfig,
    data::repositories::extraction_repository_impl::ExtractionRepositoryImpl,
    domain::{
        logic::record_normalizer::RecordNormalizer,
        repositories::extraction_repository::ExtractionRepository,
    },
    entities::{Document, TaxRecord},
};

#[async_trait]
pub trait ProcessUsecase: Send + Sync {
    async fn from_document(&self, document: &Document) -> Result<Vec<TaxRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TaxRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub struct ProcessUsecaseImpl<
    R1 = ExtractionRepositoryImpl, // Default.
> where
    R1: ExtractionRepository,
{
    extraction_repository: R1,
    normalizer: RecordNormalizer,
}

#[async_trait]
impl<R1> ProcessUsecase for ProcessUsecaseImpl<R1>
where
    R1: ExtractionRepository,
{
    async fn from_document(&self, document: &Document) -> Result<Vec<TaxRecord>, ServerError> {
        let raw_results = self.extraction_repository.extract(document).await?;
        Ok(self.normalizer.process(raw_results))
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TaxRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let document = self.extraction_repository.load_document(path).await?;
        self.from_document(&document).await
    }
}

impl ProcessUsecaseImpl {
    pub(crate) fn new(config: VerifierConfig) -> Self {
        ProcessUsecaseImpl {
            normalizer: RecordNormalizer::new(config.year_range),
            extraction_repository: ExtractionRepositoryImpl::new(config.extraction),
        }
    }
}

#[cfg(test)]
impl<R1: ExtractionRepository> ProcessUsecaseImpl<R1> {
    pub(crate) fn with_repository(range: crate::entities::YearRange, repository: R1) -> Self {
        ProcessUsecaseImpl {
            extraction_repository: repository,
            normalizer: RecordNormalizer::new(range),
        }
    }

    pub(crate) fn repository(&self) -> &R1 {
        &self.extraction_repository
    }
}
