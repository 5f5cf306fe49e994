use super::constants::{self, CONNECT_TIMEOUT_SECS, USER_AGENT};
use super::error::ApiError;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP transport for the questionnaire backend with bearer-token injection
#[derive(Clone)]
pub struct QuestionnaireClient {
    base_url: String,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

impl QuestionnaireClient {
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_custom_client(base_url, access_token, http_client))
    }

    /// Create a client around an already configured reqwest client
    pub fn with_custom_client(
        base_url: impl Into<String>,
        access_token: Option<String>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub async fn get_json(&self, route: &str) -> Result<Value, ApiError> {
        let url = constants::endpoint(&self.base_url, route);
        debug!("GET {}", url);
        let request = self.authorize(self.http_client.get(&url));
        Self::read_json(request.send().await?).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, route: &str, body: &B) -> Result<Value, ApiError> {
        let url = constants::endpoint(&self.base_url, route);
        debug!("POST {}", url);
        let request = self.authorize(self.http_client.post(&url)).json(body);
        Self::read_json(request.send().await?).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        debug!("Response status: {}", status);

        let body = if status.is_success() {
            response.text().await?
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };
        parse_body(status, &body)
    }
}

/// Map a response status and body onto the JSON value or an `ApiError`
fn parse_body(status: reqwest::StatusCode, body: &str) -> Result<Value, ApiError> {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("response body is not JSON: {}", e)))
}
