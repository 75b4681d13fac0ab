//! Cloud Controller HTTP client for API interactions

use std::fmt;

use log::{debug, trace};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cc::models::{CcErrorBody, PageResponse};
use crate::cc::pagination::{ContinuationToken, Page};
use crate::config::api;
use crate::error::{CcError, Result};

const REDACTED: &str = "***";

/// Cloud Controller API client
#[derive(Clone)]
pub struct CcClient {
    client: Client,
    token: String,
    api_url: String,
}

impl fmt::Debug for CcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CcClient")
            .field("api_url", &self.api_url)
            .field("token", &REDACTED)
            .finish()
    }
}

impl CcClient {
    /// Create a new client for the API at `api_url` (e.g. `https://api.example.com`)
    pub fn new(api_url: &str, token: String) -> Self {
        let client = Client::builder()
            .connect_timeout(api::CONNECT_TIMEOUT)
            .read_timeout(api::READ_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            // avoid duplication of slashes
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build the full URL for a `/v2/...` path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Resolve a continuation token to a URL
    ///
    /// The server hands out `next_url` relative to the API root; absolute
    /// URLs are used as they are.
    fn continuation_url(&self, token: &ContinuationToken) -> String {
        let raw = token.as_str();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            raw.to_string()
        } else {
            self.url(raw)
        }
    }

    /// Create a request builder with standard headers
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("Authorization", format!("bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Send a request, turning non-success responses into `CcError::Api`
    async fn execute(&self, builder: RequestBuilder, error_context: &str) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        trace!(
            "Error response ({}) for {}: {}",
            status.as_u16(),
            error_context,
            scrub_credentials(&text)
        );
        let body: Option<CcErrorBody> = serde_json::from_str(&text).ok();
        let message = match body.as_ref().and_then(|b| b.description.as_deref()) {
            Some(description) => format!("Failed to {}: {}", error_context, description),
            None => format!("Failed to {}", error_context),
        };

        Err(CcError::Api {
            status: status.as_u16(),
            body,
            message,
        })
    }

    /// Parse a JSON response body
    async fn parse<T>(&self, response: Response, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| CcError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// GET a single JSON document by API path
    pub(crate) async fn get_json<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .execute(self.request(Method::GET, &url), error_context)
            .await?;
        self.parse(response, error_context).await
    }

    /// Fetch the first page of a paginated endpoint
    pub(crate) async fn fetch_page<T>(&self, path: &str, error_context: &str) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let response: PageResponse<T> = self.get_json(path, error_context).await?;
        debug!(
            "Page 1/{} of {}, total items: {}",
            response.total_pages, error_context, response.total_results
        );
        Ok(response.into())
    }

    /// Fetch the page a continuation token points at
    pub(crate) async fn fetch_next_page<T>(&self, token: ContinuationToken) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.continuation_url(&token);
        let error_context = format!("fetch page {}", token);
        let response = self
            .execute(self.request(Method::GET, &url), &error_context)
            .await?;
        let page: PageResponse<T> = self.parse(response, &error_context).await?;
        Ok(page.into())
    }

    /// Send a JSON body and parse the JSON response
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        error_context: &str,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .execute(self.request(method, &url).json(body), error_context)
            .await?;
        self.parse(response, error_context).await
    }

    /// Send a JSON body, ignoring the response body
    pub(crate) async fn send_body<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        error_context: &str,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        self.execute(self.request(method, &url).json(body), error_context)
            .await?;
        Ok(())
    }

    /// Send a request without a body, ignoring the response body
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        error_context: &str,
    ) -> Result<()> {
        let url = self.url(path);
        self.execute(self.request(method, &url), error_context)
            .await?;
        Ok(())
    }
}

/// Replace bearer tokens in `text` with a placeholder
///
/// Applied to anything read from the wire before it reaches the log.
pub fn scrub_credentials(text: &str) -> String {
    const MARKER: &str = "bearer ";
    // ASCII lowercasing keeps byte offsets identical to `text`
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    while let Some(pos) = lower[copied_up_to..].find(MARKER) {
        let token_start = copied_up_to + pos + MARKER.len();
        let token_end = text[token_start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == ',' || c == '\'')
            .map_or(text.len(), |offset| token_start + offset);
        out.push_str(&text[copied_up_to..token_start]);
        out.push_str(REDACTED);
        copied_up_to = token_end;
    }

    out.push_str(&text[copied_up_to..]);
    out
}

#[cfg(test)]
impl CcClient {
    /// Create a test client against a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, "test-token".to_string())
    }
}


#[cfg(test)]
mod transport_tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_sends_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/info"))
            .and(header("Authorization", "bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "vcap"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let info: serde_json::Value = client.get_json("/v2/info", "fetch info").await.unwrap();
        assert_eq!(info["name"], "vcap");
    }

    #[tokio::test]
    async fn test_error_body_is_carried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/organizations"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 30002,
                "description": "The organization name is taken: my-org",
                "error_code": "CF-OrganizationNameTaken"
            })))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let result: Result<serde_json::Value> = client
            .send_json(
                Method::POST,
                "/v2/organizations",
                &serde_json::json!({"name": "my-org"}),
                "create organization 'my-org'",
            )
            .await;

        match result.unwrap_err() {
            CcError::Api {
                status,
                body,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(body.unwrap().code, Some(30002));
                assert!(message.contains("organization name is taken"));
            }
            other => panic!("Expected CcError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_without_structured_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v2/apps/abc"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let err = client
            .send_empty(Method::DELETE, "/v2/apps/abc", "delete app 'abc'")
            .await
            .unwrap_err();

        match err {
            CcError::Api { status, body, .. } => {
                assert_eq!(status, 502);
                assert!(body.is_none());
            }
            other => panic!("Expected CcError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_next_page_uses_token_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/organizations"))
            .and(query_param("page", "2"))
            .and(query_param("results-per-page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 2,
                "total_pages": 2,
                "prev_url": "/v2/organizations?page=1&results-per-page=1",
                "next_url": null,
                "resources": [{"n": 2}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let page: Page<serde_json::Value> = client
            .fetch_next_page(ContinuationToken::new(
                "/v2/organizations?page=2&results-per-page=1",
            ))
            .await
            .unwrap();

        assert!(page.is_last());
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let result: Result<serde_json::Value> = client.get_json("/v2/broken", "fetch broken").await;
        assert!(matches!(result, Err(CcError::Json(_))));
    }
}
