//! HTTP boundary. Failures stop here and come out as `Error` responses.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    error::RequestFailed,
    protocol::{ColorRequest, ColorResponse, Method},
};
use tracing::{debug, warn};

#[async_trait]
pub trait ColorTransport: Send + Sync {
    async fn execute(&self, request: &ColorRequest) -> Result<ColorResponse, RequestFailed>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ColorTransport for HttpTransport {
    async fn execute(&self, request: &ColorRequest) -> Result<ColorResponse, RequestFailed> {
        let fail = |reason: String| RequestFailed::new(request.url.clone(), reason);

        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let res = builder.send().await.map_err(|e| fail(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            return Err(fail(format!("server answered {status}")));
        }

        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let bytes = res.bytes().await.map_err(|e| fail(e.to_string()))?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| fail(format!("invalid json body: {e}")))?
        };

        debug!(request = %request.id, %status, "color request completed");
        Ok(ColorResponse::new(request, body, status_text))
    }
}

/// Runs a request and swaps any failure for the `Error` sentinel response.
pub async fn fetch_or_sentinel<T>(transport: &T, request: &ColorRequest) -> ColorResponse
where
    T: ColorTransport + ?Sized,
{
    match transport.execute(request).await {
        Ok(response) => response,
        Err(error) => {
            warn!(request = %request.id, %error, "color request failed");
            ColorResponse::error_for(request)
        }
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
