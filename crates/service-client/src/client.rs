//! HTTP plumbing shared by every service operation.
//!
//! All calls are blocking and suspend-until-complete: no client-side
//! timeout, no automatic retry, no cancellation. A failed call surfaces
//! immediately and leaves session state untouched; callers must not overlap
//! two calls of the same kind.

use remix_common::{ServiceConfig, StudioError, StudioResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the remote processing service.
///
/// One configurable base URL routes catalog, ingestion, and remix calls, so
/// the same binary can target a co-located or remote deployment.
pub struct ServiceClient {
    base_url: String,
    agent: ureq::Agent,
}

/// A classified HTTP failure, before mapping to an operation-specific
/// error kind.
pub(crate) enum HttpFailure {
    /// The server answered with a non-success status.
    Status { code: u16, detail: String },
    /// The request never completed (DNS, connect, I/O).
    Transport(String),
}

impl HttpFailure {
    /// Default mapping: everything becomes a transport error carrying the
    /// server's detail text when present.
    pub(crate) fn into_transport(self) -> StudioError {
        match self {
            HttpFailure::Status { detail, .. } => StudioError::transport(detail),
            HttpFailure::Transport(message) => StudioError::transport(message),
        }
    }

    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            HttpFailure::Status { code, .. } => Some(*code),
            HttpFailure::Transport(_) => None,
        }
    }

    pub(crate) fn detail(self) -> String {
        match self {
            HttpFailure::Status { detail, .. } => detail,
            HttpFailure::Transport(message) => message,
        }
    }
}

impl ServiceClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path (leading slash expected).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Liveness probe against the service root.
    pub fn health(&self) -> StudioResult<()> {
        let url = self.url("/health");
        tracing::debug!(%url, "GET health");
        self.agent
            .get(&url)
            .call()
            .map_err(|e| classify(e, "health check").into_transport())?;
        Ok(())
    }

    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, HttpFailure> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.agent.get(&url).call().map_err(|e| classify(e, context))?;
        read_json(response, context)
    }

    pub(crate) fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, HttpFailure> {
        let url = self.url(path);
        tracing::debug!(%url, "POST json");
        let response = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(|e| classify(e, context))?;
        read_json(response, context)
    }

    pub(crate) fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        body: &[u8],
        context: &str,
    ) -> Result<T, HttpFailure> {
        let url = self.url(path);
        tracing::debug!(%url, bytes = body.len(), "POST body");
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", content_type)
            .send_bytes(body)
            .map_err(|e| classify(e, context))?;
        read_json(response, context)
    }

    /// Upload a single file as a multipart/form-data `file` field.
    pub(crate) fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        bytes: &[u8],
        context: &str,
    ) -> Result<T, HttpFailure> {
        let (content_type, body) = crate::multipart::encode_file("file", filename, bytes);
        self.post_bytes(path, &content_type, &body, context)
    }

    pub(crate) fn delete(&self, path: &str, context: &str) -> Result<(), HttpFailure> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        self.agent
            .delete(&url)
            .call()
            .map_err(|e| classify(e, context))?;
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(response: ureq::Response, context: &str) -> Result<T, HttpFailure> {
    response
        .into_json::<T>()
        .map_err(|e| HttpFailure::Transport(format!("{context}: malformed response: {e}")))
}

pub(crate) fn classify(error: ureq::Error, context: &str) -> HttpFailure {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            let detail = extract_detail(&body)
                .unwrap_or_else(|| format!("{context} failed with status {code}"));
            HttpFailure::Status { code, detail }
        }
        ureq::Error::Transport(transport) => {
            HttpFailure::Transport(format!("{context}: {transport}"))
        }
    }
}

/// Pull the server's free-text `detail` field out of an error body, the
/// shape the service uses for every failure it reports.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ServiceClient::new("http://localhost:8000/");
        assert_eq!(client.url("/api/assets/overlays"), "http://localhost:8000/api/assets/overlays");
    }

    #[test]
    fn test_extract_detail_prefers_server_text() {
        assert_eq!(
            extract_detail(r#"{"detail": "Video sorgente non trovato"}"#).as_deref(),
            Some("Video sorgente non trovato")
        );
        assert_eq!(extract_detail(r#"{"detail": ""}"#), None);
        assert_eq!(extract_detail(r#"{"other": 1}"#), None);
        assert_eq!(extract_detail("not json"), None);
    }
}
