//! HTTP client for the prediction endpoint.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::replies::NO_ANSWER;
use super::RelayError;
use crate::config::RelayConfig;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest<'a> {
    pub question: &'a str,
    pub override_config: OverrideConfig,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    pub return_source_documents: bool,
}

impl<'a> PredictionRequest<'a> {
    pub fn new(question: &'a str) -> Self {
        Self {
            question,
            override_config: OverrideConfig { return_source_documents: true },
        }
    }
}

/// Only `text` is read; everything else in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl PredictionClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.prediction_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `question` and return the answer text.
    pub async fn ask(&self, question: &str) -> Result<String, RelayError> {
        let mut request = self.client.post(&self.url).json(&PredictionRequest::new(question));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        Ok(parsed.text.unwrap_or_else(|| NO_ANSWER.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let payload = serde_json::to_value(PredictionRequest::new("Кто написал Мону Лизу?")).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "question": "Кто написал Мону Лизу?",
                "overrideConfig": {"returnSourceDocuments": true}
            })
        );
    }

    #[test]
    fn test_response_without_text() {
        let parsed: PredictionResponse = serde_json::from_str(r#"{"sourceDocuments": []}"#).unwrap();
        assert_eq!(parsed.text, None);
    }
}
