use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    config::ExtractionConfig,
    data::models::{
        generate_content_model::{
            ContentModel, GenerateContentRequest, GenerateContentResponse, GenerationConfigModel,
            InlineDataModel, PartModel,
        },
        raw_extraction_model::RawExtractionResultModel,
    },
    entities::Document,
    errors::{ExtractionRejected, ExtractionRequestFailed, InvalidExtractionResponse},
};

const EXTRACTION_PROMPT: &str = "\
Extract regional tax arrears data from this PBB-P2 document.
1. Identify the taxpayer name ('Nama Wajib Pajak') and the tax object number ('Nomor Objek Pajak', NOP).
2. Extract all yearly records. Use the value from the 'Kurang Bayar' column.
3. If 'Kurang Bayar' is 0, record it as 0.
4. If a year is missing in the document, do not invent it; only provide the years that exist.";

const API_KEY_HEADER: &str = "x-goog-api-key";

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Nama Wajib Pajak" },
                "taxObjectId": { "type": "STRING", "description": "Nomor Objek Pajak" },
                "entries": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "year": { "type": "INTEGER" },
                            "amount": {
                                "type": "NUMBER",
                                "description": "Value of the Kurang Bayar column"
                            }
                        },
                        "required": ["year", "amount"]
                    }
                }
            },
            "required": ["name", "taxObjectId", "entries"]
        }
    })
}

#[async_trait]
pub trait ExtractionApiDatasource: Send + Sync {
    async fn extract(&self, document: &Document)
        -> Result<Vec<RawExtractionResultModel>, ServerError>;
}

pub struct ExtractionApiDatasourceImpl {
    http: reqwest::Client,
    config: ExtractionConfig,
}

impl ExtractionApiDatasourceImpl {
    pub(crate) fn new(config: ExtractionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(document: &Document) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![ContentModel {
                parts: vec![
                    PartModel::Text(EXTRACTION_PROMPT.to_string()),
                    PartModel::InlineData(InlineDataModel {
                        mime_type: document.media_type.mime().to_string(),
                        data: STANDARD.encode(&document.content),
                    }),
                ],
            }],
            generation_config: GenerationConfigModel {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl ExtractionApiDatasource for ExtractionApiDatasourceImpl {
    async fn extract(
        &self,
        document: &Document,
    ) -> Result<Vec<RawExtractionResultModel>, ServerError> {
        debug!(
            document = %document.name,
            media_type = document.media_type.mime(),
            model = %self.config.model,
            "sending document for extraction"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&Self::build_request(document))
            .send()
            .await
            .map_err(|e| ExtractionRequestFailed::with_debug(&document.name, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExtractionRequestFailed::with_debug(&document.name, &e))?;
        if !status.is_success() {
            return Err(ExtractionRejected::with_debug(
                &document.name,
                status.as_u16(),
                &body,
            ));
        }

        let parsed: GenerateContentResponse = if body.trim().is_empty() {
            GenerateContentResponse::default()
        } else {
            serde_json::from_str(&body)
                .map_err(|e| InvalidExtractionResponse::with_debug(&document.name, &e))?
        };
        let Some(text) = parsed.text() else {
            debug!(document = %document.name, "extraction returned no content");
            return Ok(Vec::new());
        };

        let results: Vec<RawExtractionResultModel> = serde_json::from_str(&text)
            .map_err(|e| InvalidExtractionResponse::with_debug(&document.name, &e))?;
        debug!(
            document = %document.name,
            taxpayers = results.len(),
            "extraction finished"
        );
        Ok(results)
    }
}
