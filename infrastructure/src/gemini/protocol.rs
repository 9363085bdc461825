//! `generateContent` wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one text part
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated and trimmed.
    ///
    /// `None` when there is no candidate or it carries no content.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("Hello")).unwrap();
        assert_eq!(body, json!({ "contents": [ { "parts": [ { "text": "Hello" } ] } ] }));
    }

    #[test]
    fn test_text_concatenates_parts_and_trims() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [ { "text": "  ```json\n{\"verses\": " }, { "text": "[]}\n```\n" } ] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.text().unwrap(), "```json\n{\"verses\": []}\n```");
    }

    #[test]
    fn test_text_absent_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert!(response.text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [ { "finishReason": "SAFETY" } ] })).unwrap();
        assert!(response.text().is_none());
    }
}
