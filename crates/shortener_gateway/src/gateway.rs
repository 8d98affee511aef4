use std::time::Duration;

use futures_util::StreamExt;
use shortener_logging::{shortener_debug, shortener_warn};
use url::Url;

use crate::error::map_reqwest_error;
use crate::{CreateRequest, GatewayError, ShortLink, WireLink};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Origin of the shortening service, optionally with a path prefix.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Upper bound for a list response body.
    pub max_response_bytes: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Remote collection operations. None of them retry.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Full collection in server order.
    async fn list_all(&self) -> Result<Vec<ShortLink>, GatewayError>;

    /// Submits a long URL. The created record is only visible through `list_all`.
    async fn create(&self, original_url: &str) -> Result<(), GatewayError>;

    async fn delete(&self, short_code: &str) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: GatewaySettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| GatewayError::InvalidBaseUrl(err.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidBaseUrl(self.settings.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_capped(&self, response: reqwest::Response) -> Result<Vec<u8>, GatewayError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(GatewayError::MalformedResponse(format!(
                    "body of {content_len} bytes exceeds limit of {max_bytes}"
                )));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(GatewayError::MalformedResponse(format!(
                    "body exceeds limit of {max_bytes} bytes"
                )));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn ensure_success(response: &reqwest::Response) -> Result<(), GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::ServerRejected {
            status: status.as_u16(),
        })
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn list_all(&self) -> Result<Vec<ShortLink>, GatewayError> {
        let url = self.endpoint(&["api", "urls"])?;
        shortener_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)?;

        let body = self.read_capped(response).await?;
        let wire: Vec<WireLink> = serde_json::from_slice(&body).map_err(|err| {
            shortener_warn!("List response did not decode: {}", err);
            GatewayError::MalformedResponse(err.to_string())
        })?;
        shortener_debug!("List returned {} records", wire.len());

        Ok(wire.into_iter().map(ShortLink::from).collect())
    }

    async fn create(&self, original_url: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(&["shorten"])?;
        shortener_debug!("POST {} original_url_len={}", url, original_url.len());

        let response = self
            .client
            .post(url)
            .json(&CreateRequest { original_url })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)
    }

    async fn delete(&self, short_code: &str) -> Result<(), GatewayError> {
        if short_code.is_empty() {
            return Err(GatewayError::Validation("short code is missing".to_string()));
        }
        let url = self.endpoint(&["delete", short_code])?;
        shortener_debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)
    }
}
