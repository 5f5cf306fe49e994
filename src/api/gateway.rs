//! Typed gateway operations over the transport client
//!
//! Each operation maps one logical backend call to a route. Fetch-style calls
//! normalize a 401 into `Ok(None)`; write-style calls hand every failure back.

use super::client::QuestionnaireClient;
use super::constants::routes;
use super::error::{ApiError, unauthorized_as_none};
use super::models::AddAnswerRequest;
use async_trait::async_trait;
use log::error;
use serde_json::{Value, json};

/// Backend operations the session state machine depends on
#[async_trait]
pub trait QuestionnaireGateway: Send + Sync {
    /// Fetch the response envelope for a questionnaire; `Ok(None)` on 401
    async fn fetch_questionnaire_by_id(&self, questionnaire_id: &str) -> Result<Option<Value>, ApiError>;

    async fn add_answer(&self, request: &AddAnswerRequest) -> Result<Value, ApiError>;

    async fn lock_questionnaire(&self, questionnaire_id: &str) -> Result<Value, ApiError>;

    async fn request_unlock(&self, questionnaire_id: &str) -> Result<Value, ApiError>;
}

/// Gateway backed by HTTP calls to the questionnaire backend
#[derive(Clone)]
pub struct HttpGateway {
    client: QuestionnaireClient,
}

impl HttpGateway {
    pub fn new(client: QuestionnaireClient) -> Self {
        Self { client }
    }

    /// Fetch the URL the respondent should be sent to for login; `Ok(None)` on 401
    pub async fn fetch_login_redirect_url(&self) -> Result<Option<Value>, ApiError> {
        let result = self.client.get_json(routes::LOGIN_URL).await;
        log_failure("fetching login redirect URL", &result);
        unauthorized_as_none(result)
    }

    /// Exchange login data for a session; `Ok(None)` on 401
    pub async fn login(&self, data: &Value) -> Result<Option<Value>, ApiError> {
        let result = self.client.post_json(routes::LOGIN, data).await;
        log_failure("logging in", &result);
        unauthorized_as_none(result)
    }
}

#[async_trait]
impl QuestionnaireGateway for HttpGateway {
    async fn fetch_questionnaire_by_id(&self, questionnaire_id: &str) -> Result<Option<Value>, ApiError> {
        let result = self
            .client
            .get_json(&routes::questionnaire_by_id(questionnaire_id))
            .await;
        log_failure("fetching questionnaire", &result);
        unauthorized_as_none(result)
    }

    async fn add_answer(&self, request: &AddAnswerRequest) -> Result<Value, ApiError> {
        let result = self.client.post_json(routes::ADD_ANSWER, request).await;
        log_failure("adding answer", &result);
        result
    }

    async fn lock_questionnaire(&self, questionnaire_id: &str) -> Result<Value, ApiError> {
        let result = self
            .client
            .post_json(&routes::lock_questionnaire(questionnaire_id), &json!({}))
            .await;
        log_failure("locking questionnaire", &result);
        result
    }

    async fn request_unlock(&self, questionnaire_id: &str) -> Result<Value, ApiError> {
        let result = self
            .client
            .post_json(&routes::request_unlock(questionnaire_id), &json!({}))
            .await;
        log_failure("requesting edit access", &result);
        result
    }
}

fn log_failure<T>(action: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        error!("Error {}: {}", action, e);
    }
}
