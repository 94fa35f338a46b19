//! Verifier configuration.
//!
//! Values come from the builder methods or from the environment:
//!
//! | Variable                   | Meaning                         | Default                                            |
//! |----------------------------|---------------------------------|----------------------------------------------------|
//! | `PBB_VERIFIER_API_KEY`     | extraction API key (or `API_KEY`) | required                                         |
//! | `PBB_VERIFIER_MODEL`       | extraction model                | `gemini-3-pro-preview`                             |
//! | `PBB_VERIFIER_BASE_URL`    | extraction API base URL         | `https://generativelanguage.googleapis.com/v1beta` |
//! | `PBB_VERIFIER_START_YEAR`  | first tax year                  | `2004`                                             |
//! | `PBB_VERIFIER_END_YEAR`    | last tax year                   | `2025`                                             |

use fractic_server_error::ServerError;

use crate::{
    entities::{YearRange, DEFAULT_END_YEAR, DEFAULT_START_YEAR},
    errors::{InvalidConfigValue, MissingApiKey},
};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VAR: &str = "PBB_VERIFIER_API_KEY";
const FALLBACK_API_KEY_VAR: &str = "API_KEY";
const MODEL_VAR: &str = "PBB_VERIFIER_MODEL";
const BASE_URL_VAR: &str = "PBB_VERIFIER_BASE_URL";
const START_YEAR_VAR: &str = "PBB_VERIFIER_START_YEAR";
const END_YEAR_VAR: &str = "PBB_VERIFIER_END_YEAR";

/// Connection settings for the document-extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl ExtractionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(FALLBACK_API_KEY_VAR))
            .ok_or_else(|| MissingApiKey::new(API_KEY_VAR))?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_blank(MODEL_VAR) {
            config = config.with_model(model);
        }
        if let Some(base_url) = non_blank(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct VerifierConfig {
    pub year_range: YearRange,
    pub extraction: ExtractionConfig,
}

impl VerifierConfig {
    pub fn new(extraction: ExtractionConfig) -> Self {
        Self {
            year_range: YearRange::default(),
            extraction,
        }
    }

    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String> + Copy,
    ) -> Result<Self, ServerError> {
        let year = |name: &str, default: i32| -> Result<i32, ServerError> {
            match lookup(name).map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() => v
                    .parse()
                    .map_err(|e| InvalidConfigValue::with_debug(name, &v, &e)),
                _ => Ok(default),
            }
        };
        let year_range = YearRange::new(
            year(START_YEAR_VAR, DEFAULT_START_YEAR)?,
            year(END_YEAR_VAR, DEFAULT_END_YEAR)?,
        )?;
        Ok(Self::new(ExtractionConfig::from_lookup(lookup)?).with_year_range(year_range))
    }
}
