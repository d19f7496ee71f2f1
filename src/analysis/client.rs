//! Gemini API client
//!
//! One multimodal generate-content call per scan: the analysis instruction
//! and the base64 capture travel as two parts of a single user turn. Every
//! failure mode (transport, auth, content policy, empty response) collapses
//! into one opaque error; the caller substitutes a fallback entry.

use super::types::GeminiConfig;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, String> {
        let client = Client::builder()
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Send one analysis request and return the raw response text.
    /// No retry: a failed call falls straight through to the fallback table.
    pub async fn generate_analysis(
        &self,
        prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String, String> {
        let base64_image = base64::engine::general_purpose::STANDARD.encode(image_data);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 1024,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Analysis request failed: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("Analysis API error ({}): {}", status, text));
        }

        let response: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse analysis response: {}", e))?;

        response.text().ok_or_else(|| {
            // Blocked prompts and empty candidates land here.
            "Empty response from analysis API".to_string()
        })
    }
}

// Wire types for the generate-content endpoint

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "Hello world");
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.text().is_none());

        // Policy-blocked responses carry a candidate with no content.
        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": null}]}"#).unwrap();
        assert!(blocked.text().is_none());
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "inspect".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: "QUJD".to_string(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 1024,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "inspect");
        assert_eq!(
            value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_opaque_error() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: "test-key-0000000000000000".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gemini-1.5-flash".to_string(),
        })
        .unwrap();

        let err = client
            .generate_analysis("prompt", b"\xFF\xD8\xFF", "image/jpeg")
            .await;
        assert!(err.is_err());
    }
}
