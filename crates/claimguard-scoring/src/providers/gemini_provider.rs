//! Gemini-compatible narrative provider.
//!
//! Sends the prompt plus inline image parts to
//! `{endpoint}/models/{model}:generateContent` and concatenates the text parts
//! of the first candidate. Every failure is final for the request: there is no
//! retry, the caller falls back.

use std::time::Duration;

use claimguard_core::config::NarrativeConfig;
use claimguard_core::errors::NarrativeError;
use claimguard_core::traits::{INarrativeAnalyzer, NarrativeRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

const PROVIDER_NAME: &str = "gemini";

pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    Inline { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiProvider {
    pub fn new(endpoint: String, model: String, api_key: String, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_key,
            timeout,
        }
    }

    /// `None` when the config is disabled or carries no API key.
    pub fn from_config(config: &NarrativeConfig) -> Option<Self> {
        if !config.is_usable() {
            return None;
        }
        let api_key = config.api_key.clone()?;
        Some(Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// JSON body for a request.
    pub fn request_body(request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let mut parts = vec![Part::Text {
            text: &request.prompt,
        }];
        parts.extend(request.attachments.iter().map(|a| Part::Inline {
            inline_data: InlineData {
                mime_type: &a.mime_type,
                data: &a.data,
            },
        }));
        serde_json::to_string(&GenerateRequest {
            contents: vec![Content { parts }],
        })
        .map_err(|e| NarrativeError::RequestFailed {
            reason: format!("JSON serialization error: {e}"),
        })
    }

    /// Concatenated text parts of the first candidate.
    pub fn extract_text(body: &str) -> Result<String, NarrativeError> {
        let resp: GenerateResponse =
            serde_json::from_str(body).map_err(|e| NarrativeError::MalformedResponse {
                reason: format!("JSON parse error: {e}"),
            })?;

        let text: String = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(NarrativeError::EmptyResponse {
                provider: PROVIDER_NAME.to_string(),
            });
        }
        Ok(text)
    }

    /// Blocking send. A caller already inside a tokio runtime cannot `block_on`
    /// on its own thread, so the request moves to a scoped worker thread.
    fn send_request(&self, body: String) -> Result<String, NarrativeError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.send_on_fresh_runtime(body);
        }
        std::thread::scope(|scope| {
            scope
                .spawn(move || self.send_on_fresh_runtime(body))
                .join()
                .unwrap_or_else(|_| {
                    Err(NarrativeError::RequestFailed {
                        reason: "narrative worker thread panicked".to_string(),
                    })
                })
        })
    }

    fn send_on_fresh_runtime(&self, body: String) -> Result<String, NarrativeError> {
        // Current-thread runtime for the one blocking call.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| NarrativeError::RequestFailed {
                reason: format!("runtime error: {e}"),
            })?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| NarrativeError::RequestFailed {
                reason: format!("client error: {e}"),
            })?;
        let url = self.url();

        rt.block_on(async {
            let response = client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| NarrativeError::RequestFailed {
                    reason: format!("HTTP error: {e}"),
                })?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| NarrativeError::MalformedResponse {
                    reason: format!("body read error: {e}"),
                })?;

            if !status.is_success() {
                return Err(NarrativeError::RequestFailed {
                    reason: format!("API returned {status}: {text}"),
                });
            }
            Ok(text)
        })
    }
}

impl INarrativeAnalyzer for GeminiProvider {
    fn analyze(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let body = Self::request_body(request)?;
        debug!(
            model = %self.model,
            attachments = request.attachments.len(),
            "sending narrative request"
        );
        let raw = self.send_request(body)?;
        let text = Self::extract_text(&raw)?;
        debug!(chars = text.len(), "narrative response received");
        Ok(text)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
