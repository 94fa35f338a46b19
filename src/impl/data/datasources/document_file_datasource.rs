use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::media_type_model::MediaTypeModel, entities::Document, errors::ReadError,
};

#[async_trait]
pub trait DocumentFileDatasource: Send + Sync {
    async fn from_file<P>(&self, path: P) -> Result<Document, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub struct DocumentFileDatasourceImpl;

impl DocumentFileDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentFileDatasource for DocumentFileDatasourceImpl {
    async fn from_file<P>(&self, path: P) -> Result<Document, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = MediaTypeModel::from_str(&name)?;
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::with_debug(&name, &e))?;
        debug!(document = %name, bytes = content.len(), "loaded document");
        Ok(Document::new(name, content, media_type.into()))
    }
}
