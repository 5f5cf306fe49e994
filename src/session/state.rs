//! Normalized questionnaire session data

use crate::api::models::{Answer, EndScreen, QuestionPayload, QuestionType, QuestionnairePayload, WelcomeScreen};
use serde::Serialize;

/// A question ready for display; `answer` is always fully populated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub description: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    pub order: f64,
    pub answer: Answer,
    /// Response the backend last accepted for this question
    #[serde(skip)]
    saved_response: String,
}

impl From<QuestionPayload> for Question {
    fn from(payload: QuestionPayload) -> Self {
        Self {
            id: payload.id,
            question: payload.question,
            description: payload.description,
            question_type: payload.question_type,
            required: payload.required,
            order: payload.order,
            saved_response: payload
                .answer
                .as_ref()
                .map(|a| a.response.clone())
                .unwrap_or_default(),
            answer: payload.answer.unwrap_or_default(),
        }
    }
}

impl Question {
    /// Whether the backend already holds a non-blank response for this question
    pub fn has_saved_answer(&self) -> bool {
        !self.saved_response.trim().is_empty()
    }

    pub(crate) fn mark_saved(&mut self, response: &str) {
        self.saved_response = response.to_string();
    }
}

/// In-memory questionnaire state for the current visit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSession {
    pub id: String,
    pub title: String,
    pub theme_color: Option<String>,
    pub completion_percentage: u8,
    /// Only ever set locally, after a successful lock call
    pub is_locked: Option<bool>,
    pub welcome_screen: Option<WelcomeScreen>,
    /// Sorted ascending by `order`, ties kept in backend sequence
    pub questions: Vec<Question>,
    pub end_screen: Option<EndScreen>,
}

impl QuestionnaireSession {
    /// Build a session from a fetched payload.
    ///
    /// `fallback_id` is used when the payload carries no identifier of its own.
    pub fn normalize(payload: QuestionnairePayload, fallback_id: &str) -> Self {
        let mut questions: Vec<Question> = payload.questions.into_iter().map(Question::from).collect();
        // sort_by is stable
        questions.sort_by(|a, b| a.order.total_cmp(&b.order));

        let id = payload
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| fallback_id.to_string());

        Self {
            id,
            title: payload.title.unwrap_or_default(),
            theme_color: payload.theme_color,
            completion_percentage: payload
                .completion_percentage
                .map(clamp_percentage)
                .unwrap_or(0),
            is_locked: None,
            welcome_screen: payload.welcome_screen,
            questions,
            end_screen: payload.end_screen,
        }
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn question_mut(&mut self, question_id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == question_id)
    }

    pub fn position_of(&self, question_id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.answer.is_answered()).count()
    }

    /// `round(100 * answered / total)`, 0 for an empty questionnaire
    pub fn compute_completion(&self) -> u8 {
        completion_percentage(self.answered_count(), self.questions.len())
    }
}

pub fn completion_percentage(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    clamp_percentage(100.0 * answered as f64 / total as f64)
}

fn clamp_percentage(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
