use serde_derive::{Deserialize, Serialize};

// Request.
// ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<ContentModel>,
    pub generation_config: GenerationConfigModel,
}

#[derive(Debug, Serialize)]
pub(crate) struct ContentModel {
    pub parts: Vec<PartModel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum PartModel {
    Text(String),
    InlineData(InlineDataModel),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineDataModel {
    pub mime_type: String,
    /// Base64-encoded document bytes.
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfigModel {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

// Response.
// ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<CandidateModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateModel {
    pub content: Option<CandidateContentModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContentModel {
    #[serde(default)]
    pub parts: Vec<CandidatePartModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePartModel {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when the service returned
    /// nothing usable.
    pub(crate) fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_as_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![ContentModel {
                parts: vec![
                    PartModel::Text("prompt".into()),
                    PartModel::InlineData(InlineDataModel {
                        mime_type: "application/pdf".into(),
                        data: "AAEC".into(),
                    }),
                ],
            }],
            generation_config: GenerationConfigModel {
                response_mime_type: "application/json".into(),
                response_schema: serde_json::json!({"type": "ARRAY"}),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(
            value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "application/pdf"
        );
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"[{\"name\":"},{"text":"\"A\"}]"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some(r#"[{"name":"A"}]"#));
    }

    #[test]
    fn test_response_without_text() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);

        let blank: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.text(), None);
    }
}
