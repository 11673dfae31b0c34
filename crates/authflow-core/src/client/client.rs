use reqwest::header::{self, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};

use super::client_settings::ClientSettings;
use crate::error::ApiError;

/// Configuration for reaching the identity gateway: the resolved base path
/// and the HTTP client carrying the default headers.
#[derive(Debug, Clone)]
pub struct ApiConfiguration {
    /// Base url all endpoint paths are joined to.
    pub base_path: String,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
    /// The underlying HTTP client.
    pub client: reqwest::Client,
}

/// The main entry point for issuing requests against the identity gateway.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    configuration: ApiConfiguration,
}

impl Client {
    /// Create a new client. `None` uses [`ClientSettings::default`].
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            configuration: ApiConfiguration {
                base_path: settings.base_url,
                user_agent: Some(settings.user_agent),
                client: http_client,
            },
        }
    }

    /// The active API configuration.
    pub fn configuration(&self) -> &ApiConfiguration {
        &self.configuration
    }

    /// Issues a `POST` with a JSON body to `path` under the configured base
    /// url and deserializes the 2xx response body.
    ///
    /// A non-2xx response is converted to [`ApiError::ResponseContent`],
    /// carrying the optional `message` field of the failure body verbatim,
    /// or the HTTP status text when the body has no parsable message.
    pub async fn post_json<Res>(
        &self,
        path: &str,
        payload: &(impl Serialize + ?Sized),
    ) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let url = format!(
            "{}/{}",
            self.configuration.base_path.trim_end_matches('/'),
            path
        );

        let response = self
            .configuration
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            // Credential-bearing requests and responses must never be cached.
            .header(header::CACHE_CONTROL, "no-store")
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorResponseBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Server error")
                    .to_string()
            });

        log::debug!("request to {path} failed: [{status}] {message}");

        Err(ApiError::ResponseContent { status, message })
    }
}

/// Shape of a failure body; only the optional `message` field is consumed.
#[derive(serde::Deserialize)]
struct ErrorResponseBody {
    #[serde(default)]
    message: Option<String>,
}

fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    if let Ok(user_agent) = HeaderValue::from_str(&settings.user_agent) {
        headers.append(header::USER_AGENT, user_agent);
    }

    headers
}

#[cfg(test)]
mod tests {
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(serde::Serialize)]
    struct TestPayload {
        email: String,
    }

    #[derive(serde::Deserialize, Debug)]
    struct TestResponse {
        status: Option<String>,
    }

    fn client_for(server: &MockServer) -> Client {
        Client::new(Some(ClientSettings {
            base_url: server.uri(),
            user_agent: "test-agent".to_string(),
        }))
    }

    fn payload() -> TestPayload {
        TestPayload {
            email: "user@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn post_json_parses_success_body() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/authenticate-user"))
            .and(matchers::header(
                header::CONTENT_TYPE.as_str(),
                "application/json",
            ))
            .and(matchers::header(header::ACCEPT.as_str(), "application/json"))
            .and(matchers::header(
                header::CACHE_CONTROL.as_str(),
                "no-store",
            ))
            .and(matchers::body_json(serde_json::json!({
                "email": "user@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "password-validated"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response: TestResponse = client
            .post_json("authenticate-user", &payload())
            .await
            .expect("request should succeed");

        assert_eq!(response.status.as_deref(), Some("password-validated"));
    }

    #[tokio::test]
    async fn post_json_surfaces_server_message_on_failure() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/authenticate-user"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "server down"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result: Result<TestResponse, ApiError> =
            client.post_json("authenticate-user", &payload()).await;

        match result {
            Err(ApiError::ResponseContent { status, message }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(message, "server down");
            }
            other => panic!("expected ResponseContent error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn post_json_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/renew-password"))
            .respond_with(ResponseTemplate::new(503).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result: Result<TestResponse, ApiError> =
            client.post_json("renew-password", &payload()).await;

        match result {
            Err(ApiError::ResponseContent { status, message }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected ResponseContent error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn post_json_joins_paths_without_duplicate_slashes() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/signup-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings {
            base_url: format!("{}/", server.uri()),
            user_agent: "test-agent".to_string(),
        }));

        let _: TestResponse = client
            .post_json("signup-user", &payload())
            .await
            .expect("request should succeed");
    }
}
