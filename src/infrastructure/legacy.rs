//! Legacy transcription endpoint adapter
//!
//! Boundary component keeping the deprecated voice-to-text endpoint alive:
//! it forwards the multipart payload unchanged to the current transcribe
//! endpoint and rewrites the JSON response into the legacy shape.

use serde_json::{json, Value};
use tracing::warn;

/// Path of the current transcribe endpoint the deprecated one forwards to
pub const CURRENT_ENDPOINT_PATH: &str = "/api/voice/transcribe";

/// Default error text when the current endpoint reports an error with no
/// message
const DEFAULT_ERROR_TEXT: &str = "Transcription failed";

/// Reply emitted by the adapter: an HTTP status plus a JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyReply {
    pub status: u16,
    pub body: Value,
}

/// Rewrite a current-endpoint response into the legacy shape.
///
/// Success bodies are flattened to `{text, duration, language}`, error
/// bodies to `{error, code, suggestion}`, both keeping the original HTTP
/// status. Any other shape passes through unchanged; a null `result` or
/// null `error` counts as absent, not as a flattenable payload.
pub fn translate_response(status: u16, body: Value) -> LegacyReply {
    if body["success"] == json!(true) && body["result"].is_object() {
        let result = &body["result"];
        return LegacyReply {
            status,
            body: json!({
                "text": result["text"],
                "duration": result["duration"],
                "language": result["language"],
            }),
        };
    }

    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        return LegacyReply {
            status,
            body: json!({
                "error": error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_ERROR_TEXT),
                "code": error
                    .get("code")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN_ERROR"),
                "suggestion": error.get("suggestion").cloned().unwrap_or(Value::Null),
            }),
        };
    }

    LegacyReply { status, body }
}

/// Fixed reply for any transport failure towards the current endpoint
pub fn service_unavailable() -> LegacyReply {
    LegacyReply {
        status: 500,
        body: json!({
            "error": "Service temporarily unavailable, please try again later",
            "code": "SERVICE_UNAVAILABLE",
            "suggestion": "Check your network connection or contact support",
        }),
    }
}

/// Fixed reply for a GET on the deprecated endpoint
pub fn deprecation_notice() -> LegacyReply {
    LegacyReply {
        status: 301,
        body: json!({
            "message": format!("This endpoint is deprecated, use {}", CURRENT_ENDPOINT_PATH),
            "redirect": CURRENT_ENDPOINT_PATH,
            "status": "deprecated",
        }),
    }
}

/// Forwards deprecated-endpoint requests to the current endpoint
pub struct LegacyAdapter {
    upstream_url: String,
    client: reqwest::Client,
}

impl LegacyAdapter {
    /// Create an adapter forwarding to the current endpoint at `base_url`
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            upstream_url: format!(
                "{}{}",
                base_url.as_ref().trim_end_matches('/'),
                CURRENT_ENDPOINT_PATH
            ),
            client: reqwest::Client::new(),
        }
    }

    /// URL the adapter forwards to
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Forward a multipart payload to the current endpoint, carrying the
    /// client identity header, and translate the response.
    ///
    /// Transport failures and unreadable bodies never surface as errors;
    /// they map to the fixed service-unavailable reply.
    pub async fn forward(&self, form: reqwest::multipart::Form, user_agent: &str) -> LegacyReply {
        let response = match self
            .client
            .post(&self.upstream_url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "forward to current endpoint failed");
                return service_unavailable();
            }
        };

        let status = response.status().as_u16();
        match response.json::<Value>().await {
            Ok(body) => translate_response(status, body),
            Err(error) => {
                warn!(%error, "current endpoint returned unreadable body");
                service_unavailable()
            }
        }
    }
}
