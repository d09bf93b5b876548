//! SharePoint Online REST plumbing.
//!
//! Requests go through [`SpoTransport`] and bearer tokens come from
//! [`AccessTokenProvider`], so the upload flow can run against fakes in tests.
//! Responses are decoded into [`ODataResponse`] in a fixed order: a success
//! body, then an OData error envelope, then whatever text was left.

use crate::domain::constants::{ACCESS_TOKEN_ENV, NOT_CONNECTED_MESSAGE};
use crate::domain::models::Site;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const ACCEPT_JSON_NOMETADATA: &str = "application/json;odata=nometadata";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SpoError {
    #[error("{}", NOT_CONNECTED_MESSAGE)]
    NotConnected,
    #[error("{0}")]
    AccessToken(String),
    #[error("{0}")]
    Remote(String),
    #[error("Invalid SharePoint site URL: {0}")]
    InvalidSiteUrl(String),
}

#[derive(Debug, Clone, Default)]
pub struct SpoRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SpoRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }
}

/// Why a request did not produce a success body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The service answered with a non-success status.
    Response { status: u16, body: String },
    /// No response was received.
    Transport(String),
}

pub trait SpoTransport {
    fn post(&self, request: &SpoRequest) -> Result<String, Rejection>;
}

pub trait AccessTokenProvider {
    fn ensure_access_token(&self, resource: &str) -> anyhow::Result<String>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout_ms: u64) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { client })
    }
}

impl SpoTransport for HttpTransport {
    fn post(&self, request: &SpoRequest) -> Result<String, Rejection> {
        tracing::debug!("POST {}", request.url);
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let resp = builder
            .body(request.body.clone())
            .send()
            .map_err(|e| Rejection::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| Rejection::Transport(e.to_string()))?;
        tracing::debug!("response {}: {}", status, body);
        if status.is_success() {
            Ok(body)
        } else {
            Err(Rejection::Response {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Hands out the token stored by `spo connect`, unless the environment overrides it.
pub struct StoredTokenProvider {
    stored: Option<String>,
    env_override: Option<String>,
}

impl StoredTokenProvider {
    pub fn new(stored: Option<String>, env_override: Option<String>) -> Self {
        Self {
            stored,
            env_override,
        }
    }

    pub fn from_site(site: &Site) -> Self {
        Self::new(
            site.access_token.clone(),
            std::env::var(ACCESS_TOKEN_ENV).ok(),
        )
    }
}

impl AccessTokenProvider for StoredTokenProvider {
    fn ensure_access_token(&self, resource: &str) -> anyhow::Result<String> {
        self.env_override
            .iter()
            .chain(self.stored.iter())
            .find(|t| !t.trim().is_empty())
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Error getting access token for {}: run `spo connect` with --access-token or set {}",
                    resource,
                    ACCESS_TOKEN_ENV
                )
            })
    }
}

#[derive(Deserialize)]
struct ODataEnvelope {
    #[serde(rename = "odata.error")]
    error: ODataErrorBody,
}

#[derive(Deserialize)]
struct ODataErrorBody {
    message: ODataMessage,
}

#[derive(Deserialize)]
struct ODataMessage {
    value: String,
}

#[derive(Deserialize)]
struct ContextInfo {
    #[serde(rename = "FormDigestValue")]
    form_digest_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ODataResponse {
    Success(Value),
    ODataError(String),
    Opaque(String),
}

impl ODataResponse {
    pub fn decode(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(doc) => ODataResponse::Success(doc),
                Err(_) => ODataResponse::Opaque(body),
            },
            Err(Rejection::Response { status, body }) => {
                tracing::debug!("request rejected with status {}", status);
                if body.trim().is_empty() {
                    return ODataResponse::Opaque(format!("Request failed with status {}", status));
                }
                match serde_json::from_str::<ODataEnvelope>(&body) {
                    Ok(envelope) => ODataResponse::ODataError(envelope.error.message.value),
                    Err(_) => ODataResponse::Opaque(body),
                }
            }
            Err(Rejection::Transport(text)) if text.trim().is_empty() => {
                ODataResponse::Opaque("Request failed without a response".to_string())
            }
            Err(Rejection::Transport(text)) => ODataResponse::Opaque(text),
        }
    }

    pub fn into_result(self) -> Result<Value, SpoError> {
        match self {
            ODataResponse::Success(doc) => Ok(doc),
            ODataResponse::ODataError(message) | ODataResponse::Opaque(message) => {
                Err(SpoError::Remote(message))
            }
        }
    }
}

/// Origin of the site URL, used as the token resource.
pub fn site_resource(site_url: &str) -> Result<String, SpoError> {
    let url = reqwest::Url::parse(site_url)
        .map_err(|_| SpoError::InvalidSiteUrl(site_url.to_string()))?;
    if url.scheme() != "https" || url.host_str().is_none() {
        return Err(SpoError::InvalidSiteUrl(site_url.to_string()));
    }
    Ok(url.origin().ascii_serialization())
}

pub fn request_digest(
    transport: &dyn SpoTransport,
    site_url: &str,
    access_token: &str,
) -> Result<String, SpoError> {
    let request = SpoRequest::new(format!(
        "{}/_api/contextinfo",
        site_url.trim_end_matches('/')
    ))
    .header("authorization", format!("Bearer {}", access_token))
    .header("accept", ACCEPT_JSON_NOMETADATA);

    let doc = ODataResponse::decode(transport.post(&request)).into_result()?;
    let info: ContextInfo = serde_json::from_value(doc).map_err(|_| {
        SpoError::Remote("Context info response does not contain FormDigestValue".to_string())
    })?;
    Ok(info.form_digest_value)
}
