//! Client for the Gemini `generateContent` REST endpoint.

pub mod types;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::{Credential, DEFAULT_API_BASE};
use crate::diagnosis::ImagePayload;
use crate::error::{ConfigurationError, InferenceError};

use types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, InlineData, WirePart,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// One element of a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Image(ImagePayload),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }
}

/// A remote model that turns an ordered list of parts into text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_id(&self) -> &str;

    async fn generate(&self, parts: &[Part]) -> Result<String, InferenceError>;
}

/// Gemini over HTTPS. Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiModel {
    pub fn create(credential: &Credential, model_id: &str) -> Result<Self, ConfigurationError> {
        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(ConfigurationError::Client("model identifier is empty".to_string()));
        }
        if credential.is_empty() {
            return Err(ConfigurationError::InvalidCredential("key is empty".to_string()));
        }
        if credential.expose().chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigurationError::InvalidCredential(
                "key contains whitespace or control characters".to_string(),
            ));
        }

        let mut key = HeaderValue::from_str(credential.expose()).map_err(|_| {
            ConfigurationError::InvalidCredential("key is not a valid header value".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigurationError::Client(e.to_string()))?;

        let model = if model_id.starts_with("models/") {
            model_id.to_string()
        } else {
            format!("models/{model_id}")
        };

        Ok(Self {
            http,
            base_url: DEFAULT_API_BASE.to_string(),
            model,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/{}:generateContent", self.base_url, self.model)
    }
}

fn wire_parts(parts: &[Part]) -> Vec<WirePart<'_>> {
    parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => WirePart::Text { text },
            Part::Image(image) => WirePart::InlineData {
                inline_data: InlineData {
                    mime_type: image.media_type,
                    data: general_purpose::STANDARD.encode(&image.bytes),
                },
            },
        })
        .collect()
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, parts: &[Part]) -> Result<String, InferenceError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: wire_parts(parts),
            }],
        };

        tracing::debug!(
            model = %self.model,
            parts = parts.len(),
            "sending generateContent request"
        );

        let response = self.http.post(self.endpoint()).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        reason = envelope.error.status.as_deref().unwrap_or("unknown"),
                        "Gemini rejected request"
                    );
                    envelope.error.message
                }
                Err(_) => body.chars().take(500).collect(),
            };
            return Err(InferenceError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(reason) = parsed.block_reason() {
            return Err(InferenceError::Blocked(reason.to_string()));
        }

        match parsed.text() {
            Some(text) => Ok(text),
            None => {
                let finish = parsed
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
                    .unwrap_or("none");
                tracing::warn!(finish_reason = finish, "Gemini response had no text");
                Err(InferenceError::EmptyResponse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_id_is_normalised() {
        let key = Credential::new("abc");
        let bare = GeminiModel::create(&key, "gemini-2.0-flash").unwrap();
        assert_eq!(bare.model_id(), "models/gemini-2.0-flash");

        let prefixed = GeminiModel::create(&key, "models/gemini-2.0-flash").unwrap();
        assert_eq!(prefixed.model_id(), "models/gemini-2.0-flash");
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let model = GeminiModel::create(&Credential::new("abc"), "gemini-2.0-flash")
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(
            model.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn malformed_credentials_are_rejected() {
        for bad in ["", "has space", "line\nbreak"] {
            let err = GeminiModel::create(&Credential::new(bad), "gemini-2.0-flash").unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidCredential(_)), "{bad:?}");
        }
    }

    #[test]
    fn empty_model_id_is_rejected() {
        let err = GeminiModel::create(&Credential::new("abc"), "  ").unwrap_err();
        assert!(matches!(err, ConfigurationError::Client(_)));
    }

    #[test]
    fn image_parts_are_base64_encoded() {
        let parts = vec![
            Part::text("prompt"),
            Part::Image(ImagePayload {
                bytes: vec![0, 1, 2],
                media_type: "image/jpeg",
            }),
        ];
        let wire = serde_json::to_value(wire_parts(&parts)).unwrap();
        assert_eq!(wire[0]["text"], "prompt");
        assert_eq!(wire[1]["inlineData"]["data"], "AAEC");
        assert_eq!(wire[1]["inlineData"]["mimeType"], "image/jpeg");
    }

    #[test]
    fn debug_output_hides_key() {
        let model =
            GeminiModel::create(&Credential::new("super-secret-key"), "gemini-2.0-flash").unwrap();
        assert!(!format!("{model:?}").contains("super-secret-key"));
    }
}
