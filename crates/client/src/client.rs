//! HTTP client for the Gastu REST backend.
//!
//! Requests share one `reqwest::Client` with a cookie store, so a session
//! cookie issued by the backend is replayed on every call. An optional
//! bearer token is sent as well.

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use gastu_core::errors::{Error, Result};

use crate::error_body::classify_failure;
use crate::routes::MarkReadRoute;

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Header carrying the user id on budget activation.
const USER_ID_HEADER: &str = "usuarioid";

/// Bodies quoted in decode errors are cut to this many characters.
const MAX_LOGGED_BODY_CHARS: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    pub timeout: Duration,
    pub mark_read_route: MarkReadRoute,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            user_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mark_read_route: MarkReadRoute::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn with_user_id(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mark_read_route(mut self, route: MarkReadRoute) -> Self {
        self.mark_read_route = route;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gastu API Client
// ─────────────────────────────────────────────────────────────────────────────

/// REST client implementing every `gastu-core` API trait.
///
/// # Example
///
/// ```ignore
/// let client = GastuApiClient::new(ClientConfig::new("http://localhost:8080"))?;
/// let profile = client.get_profile().await?;
/// ```
#[derive(Debug, Clone)]
pub struct GastuApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
    user_id: Option<i64>,
    mark_read_route: MarkReadRoute,
}

impl GastuApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or
    /// the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let auth_header = match config.access_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Some(
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Config(format!("Invalid access token format: {}", e)))?,
            ),
            _ => None,
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
            user_id: config.user_id,
            mark_read_route: config.mark_read_route,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mark_read_route(&self) -> MarkReadRoute {
        self.mark_read_route
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("[GastuApi] {} {}", method, url);
        self.client.request(method, &url).headers(self.headers())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST without a request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::POST, path)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// PUT without a request body.
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::PUT, path)).await
    }

    /// PATCH that identifies the user through the `usuarioId` header when one is configured.
    pub(crate) async fn patch_as_user<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut request = self.request(Method::PATCH, path);
        if let Some(user_id) = self.user_id {
            request = request.header(HeaderName::from_static(USER_ID_HEADER), user_id.to_string());
        }
        self.send(request).await
    }

    /// DELETE; any success status is accepted and the body ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(failure(status.as_u16(), response_path(path), &body))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(transport_error)?;
        Self::parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let path = response.url().path().to_string();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(failure(status.as_u16(), &path, &body));
        }

        decode_body(&body)
    }
}

fn response_path(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

fn failure(status: u16, path: &str, body: &str) -> Error {
    let err = classify_failure(status, body);
    warn!("[GastuApi] {} failed with {}: {}", path, status, err);
    err
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

/// Decode a success body into its typed form.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::Decode(format!(
            "{} - {}",
            e,
            body.chars().take(MAX_LOGGED_BODY_CHARS).collect::<String>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gastu_core::notifications::UnreadCount;

    #[test]
    fn test_client_creation() {
        let client = GastuApiClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = GastuApiClient::new(ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/usuario"),
            "http://localhost:8080/api/usuario"
        );
    }

    #[test]
    fn bearer_header_only_when_token_present() {
        let anonymous = GastuApiClient::new(ClientConfig::default()).unwrap();
        assert!(anonymous.headers().get(AUTHORIZATION).is_none());

        let blank = GastuApiClient::new(
            ClientConfig::default().with_access_token(Some("   ".to_string())),
        )
        .unwrap();
        assert!(blank.headers().get(AUTHORIZATION).is_none());

        let authed = GastuApiClient::new(
            ClientConfig::default().with_access_token(Some("abc.def".to_string())),
        )
        .unwrap();
        assert_eq!(
            authed.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc.def"
        );
    }

    #[test]
    fn invalid_token_is_a_config_error() {
        let result = GastuApiClient::new(
            ClientConfig::default().with_access_token(Some("bad\ntoken".to_string())),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let ok: UnreadCount = decode_body(r#"{"count": 4}"#).unwrap();
        assert_eq!(ok.count, 4);

        let err = decode_body::<UnreadCount>(r#"{"total": 4}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let client = GastuApiClient::new(
            ClientConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let result: Result<UnreadCount> = client.get("/api/notificaciones/no-leidas/count").await;
        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(
            result.unwrap_err().user_message(),
            gastu_core::constants::CONNECTION_ERROR_MESSAGE
        );
    }
}
