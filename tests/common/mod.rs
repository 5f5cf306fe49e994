//! In-memory gateway that records every backend call

#![allow(dead_code)]

use async_trait::async_trait;
use questionnaire_cli::api::{AddAnswerRequest, ApiError, QuestionnaireGateway};
use questionnaire_cli::session::SessionStore;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(String),
    AddAnswer(AddAnswerRequest),
    Lock(String),
    RequestUnlock(String),
}

#[derive(Debug, Clone)]
pub enum FetchBehavior {
    /// Return this value as the response body
    Envelope(Value),
    Unauthorized,
    ServerError,
}

pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    fetch: FetchBehavior,
    add_answer_fails: bool,
    lock_fails: bool,
    unlock_fails: bool,
}

impl MockGateway {
    pub fn new(fetch: FetchBehavior) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fetch,
            add_answer_fails: false,
            lock_fails: false,
            unlock_fails: false,
        }
    }

    /// Serve `questionnaire` wrapped in the `{ "data": ... }` envelope
    pub fn with_questionnaire(questionnaire: Value) -> Self {
        Self::new(FetchBehavior::Envelope(json!({ "data": questionnaire })))
    }

    pub fn failing_add_answer(mut self) -> Self {
        self.add_answer_fails = true;
        self
    }

    pub fn failing_lock(mut self) -> Self {
        self.lock_fails = true;
        self
    }

    pub fn failing_unlock(mut self) -> Self {
        self.unlock_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn add_answer_calls(&self) -> Vec<AddAnswerRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddAnswer(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn lock_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Lock(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[async_trait]
impl QuestionnaireGateway for MockGateway {
    async fn fetch_questionnaire_by_id(&self, questionnaire_id: &str) -> Result<Option<Value>, ApiError> {
        self.record(Call::Fetch(questionnaire_id.to_string()));
        match &self.fetch {
            FetchBehavior::Envelope(body) => Ok(Some(body.clone())),
            FetchBehavior::Unauthorized => Ok(None),
            FetchBehavior::ServerError => Err(server_error()),
        }
    }

    async fn add_answer(&self, request: &AddAnswerRequest) -> Result<Value, ApiError> {
        self.record(Call::AddAnswer(request.clone()));
        if self.add_answer_fails {
            return Err(server_error());
        }
        Ok(json!({ "data": { "saved": true } }))
    }

    async fn lock_questionnaire(&self, questionnaire_id: &str) -> Result<Value, ApiError> {
        self.record(Call::Lock(questionnaire_id.to_string()));
        if self.lock_fails {
            return Err(server_error());
        }
        Ok(json!({ "data": { "isLocked": true } }))
    }

    async fn request_unlock(&self, questionnaire_id: &str) -> Result<Value, ApiError> {
        self.record(Call::RequestUnlock(questionnaire_id.to_string()));
        if self.unlock_fails {
            return Err(ApiError::Status {
                status: 409,
                message: "Unlock already requested".to_string(),
            });
        }
        Ok(json!({ "data": { "requested": true } }))
    }
}

/// Two questions served out of order, as the backend may send them
pub fn kitchen_questionnaire() -> Value {
    json!({
        "_id": "Q1",
        "title": "Kitchen Vision",
        "welcomeScreen": { "title": "Welcome", "description": "Tell us about your kitchen" },
        "questions": [
            {
                "_id": "style",
                "question": "What is your preferred kitchen style?",
                "type": "SHORT_TEXT",
                "required": true,
                "order": 1,
                "answer": null
            },
            {
                "_id": "inspiration",
                "question": "What's inspiring this kitchen renovation?",
                "type": "SHORT_TEXT",
                "required": true,
                "order": 0
            }
        ],
        "endScreen": { "title": "Thank you!", "bodyText": "We will be in touch." }
    })
}

pub fn store_with(gateway: &Arc<MockGateway>) -> SessionStore {
    SessionStore::new(gateway.clone())
}
