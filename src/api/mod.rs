//! Questionnaire backend API
//!
//! Transport client with bearer-token injection, the route table, wire models
//! and the gateway operations the session layer is built on.

pub mod client;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod models;

pub use client::QuestionnaireClient;
pub use error::ApiError;
pub use gateway::{HttpGateway, QuestionnaireGateway};
pub use models::{AddAnswerRequest, Answer, AnswerPayload, EndScreen, QuestionPayload, QuestionType, QuestionnairePayload, WelcomeScreen};
