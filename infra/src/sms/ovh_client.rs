//! Signed HTTP client for the OVH API
//!
//! Every call carries a per-request signature derived from the shared
//! secrets, the full request, and a server-adjusted timestamp. The
//! remote clock is read once per client instance, lazily, on the first
//! outbound call; the resulting offset is cached for the lifetime of
//! the client and shared by all concurrent requests through it.

use chrono::Utc;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::errors::InfrastructureError;
use sg_core::ProviderError;

/// API version prefixed to every request path
const API_VERSION: &str = "1.0";

/// HTTP client issuing signed calls against one OVH-style deployment
pub struct OvhClient {
    http: reqwest::Client,
    base_url: String,
    application_key: String,
    application_secret: String,
    consumer_key: String,
    // remote - local, in seconds; written once by the first caller
    time_offset: OnceCell<i64>,
}

impl OvhClient {
    /// Create a client against `base_url` with the given credentials
    pub fn new(
        base_url: impl Into<String>,
        application_key: impl Into<String>,
        application_secret: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| InfrastructureError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            application_key: application_key.into(),
            application_secret: application_secret.into(),
            consumer_key: consumer_key.into(),
            time_offset: OnceCell::new(),
        })
    }

    /// Compute the request signature
    ///
    /// `$1$` followed by the lowercase hex SHA-1 of the five request
    /// fields joined with literal `+` separators. `full_url` is the
    /// absolute URL including any query string; `body` is the exact
    /// serialized payload, empty for bodyless methods.
    pub fn signature(
        application_secret: &str,
        consumer_key: &str,
        method: &str,
        full_url: &str,
        body: &str,
        timestamp: &str,
    ) -> String {
        let input = format!(
            "{application_secret}+{consumer_key}+{method}+{full_url}+{body}+{timestamp}"
        );
        let digest = Sha1::digest(input.as_bytes());
        format!("$1${}", hex::encode(digest))
    }

    /// Read the remote server clock, unauthenticated
    async fn fetch_remote_time(&self) -> Option<i64> {
        let url = format!("{}/{}/auth/time", self.base_url, API_VERSION);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("remote time fetch failed: {e}");
                return None;
            }
        };
        if response.status() != reqwest::StatusCode::OK {
            warn!(status = %response.status(), "remote time fetch returned non-success status");
            return None;
        }
        let body = response.text().await.ok()?;
        body.trim().parse::<i64>().ok()
    }

    /// Clock offset between the remote server and this host
    ///
    /// Computed at most once per client instance: concurrent first
    /// callers all await the same in-flight fetch and observe the same
    /// value. A failed fetch caches an offset of zero so the original
    /// request proceeds on local wall-clock time; there is no re-sync.
    async fn clock_offset(&self) -> i64 {
        *self
            .time_offset
            .get_or_init(|| async {
                let local = Utc::now().timestamp();
                match self.fetch_remote_time().await {
                    Some(remote) => {
                        let offset = remote - local;
                        debug!(offset, "remote clock offset cached");
                        offset
                    }
                    None => 0,
                }
            })
            .await
    }

    /// Issue one signed request
    ///
    /// GET/DELETE serialize `parameters` as a query string; POST/PUT
    /// serialize them as a JSON body. The signature covers exactly the
    /// URL and body that go on the wire.
    async fn request(
        &self,
        method: Method,
        basepath: &str,
        parameters: &Map<String, Value>,
    ) -> Result<reqwest::Response, ProviderError> {
        let offset = self.clock_offset().await;

        let path = format!("/{API_VERSION}{basepath}");
        let (full_path, body) = if method == Method::GET || method == Method::DELETE {
            (format!("{path}{}", build_query(parameters)), String::new())
        } else {
            let body = serde_json::to_string(parameters)
                .map_err(|e| ProviderError::call(format!("could not serialize body: {e}")))?;
            (path, body)
        };
        let full_url = format!("{}{}", self.base_url, full_path);
        let timestamp = (Utc::now().timestamp() + offset).to_string();
        let signature = Self::signature(
            &self.application_secret,
            &self.consumer_key,
            method.as_str(),
            &full_url,
            &body,
            &timestamp,
        );

        let mut request = self
            .http
            .request(method, &full_url)
            .header(CONTENT_TYPE, "application/json")
            .header("X-Ovh-Application", &self.application_key)
            .header("X-Ovh-Consumer", &self.consumer_key)
            .header("X-Ovh-Timestamp", &timestamp)
            .header("X-Ovh-Signature", &signature);
        if !body.is_empty() {
            request = request.header(CONTENT_LENGTH, body.len()).body(body);
        }

        request
            .send()
            .await
            .map_err(|e| ProviderError::call(format!("http request failed: {e}")))
    }

    pub async fn get(
        &self,
        path: &str,
        parameters: &Map<String, Value>,
    ) -> Result<reqwest::Response, ProviderError> {
        self.request(Method::GET, path, parameters).await
    }

    pub async fn post(
        &self,
        path: &str,
        parameters: &Map<String, Value>,
    ) -> Result<reqwest::Response, ProviderError> {
        self.request(Method::POST, path, parameters).await
    }

    pub async fn put(
        &self,
        path: &str,
        parameters: &Map<String, Value>,
    ) -> Result<reqwest::Response, ProviderError> {
        self.request(Method::PUT, path, parameters).await
    }

    pub async fn delete(
        &self,
        path: &str,
        parameters: &Map<String, Value>,
    ) -> Result<reqwest::Response, ProviderError> {
        self.request(Method::DELETE, path, parameters).await
    }
}

/// Serialize parameters as a query string: `?k=v&k=v`, unencoded,
/// string values bare and other values in their JSON form
fn build_query(parameters: &Map<String, Value>) -> String {
    let mut query = String::new();
    for (key, value) in parameters {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        match value {
            Value::String(text) => query.push_str(text),
            other => query.push_str(&other.to_string()),
        }
    }
    query
}
