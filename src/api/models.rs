//! Wire types exchanged with the questionnaire backend
//!
//! Incoming payloads are deliberately tolerant: any field may be missing or
//! `null`, and the session layer normalizes them into fully populated values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A respondent's answer to one question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_options: Vec<String>,
    /// Uploaded file references, passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub reference_images_by_customer: Vec<Value>,
}

impl Answer {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Self::default()
        }
    }

    /// An answer counts once its response has non-whitespace content
    pub fn is_answered(&self) -> bool {
        !self.response.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    #[default]
    ShortText,
    LongText,
    /// Any other type the backend defines
    Other(String),
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SHORT_TEXT" => QuestionType::ShortText,
            "LONG_TEXT" => QuestionType::LongText,
            _ => QuestionType::Other(value),
        }
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        match value {
            QuestionType::ShortText => "SHORT_TEXT".to_string(),
            QuestionType::LongText => "LONG_TEXT".to_string(),
            QuestionType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeScreen {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndScreen {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_text: String,
}

/// A question as the backend sends it; `answer` may be absent, null or partial
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub question_type: QuestionType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    /// Any JSON number; the backend is not consistent about integers
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: f64,
    #[serde(default)]
    pub answer: Option<Answer>,
}

/// The questionnaire document found at `data` in the fetch response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnairePayload {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub welcome_screen: Option<WelcomeScreen>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<QuestionPayload>,
    #[serde(default)]
    pub end_screen: Option<EndScreen>,
}

/// The subset of an answer that is sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub response: String,
    pub reference_images_by_customer: Vec<Value>,
}

impl From<&Answer> for AnswerPayload {
    fn from(answer: &Answer) -> Self {
        Self {
            response: answer.response.clone(),
            reference_images_by_customer: answer.reference_images_by_customer.clone(),
        }
    }
}

/// Body of the add-answer call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAnswerRequest {
    pub questionnaire_id: String,
    pub question_id: String,
    pub answer: AnswerPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_override: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_answer_is_filled_with_defaults() {
        let answer: Answer = serde_json::from_value(json!({ "response": "Blue" })).unwrap();
        assert_eq!(answer.response, "Blue");
        assert_eq!(answer.rating, None);
        assert!(answer.selected_options.is_empty());
        assert!(answer.reference_images_by_customer.is_empty());
    }

    #[test]
    fn test_null_fields_are_defaulted() {
        let answer: Answer = serde_json::from_value(json!({
            "response": null,
            "selectedOptions": null,
            "referenceImagesByCustomer": null
        }))
        .unwrap();
        assert_eq!(answer, Answer::default());
    }

    #[test]
    fn test_question_type_keeps_unknown_values() {
        let q: QuestionPayload = serde_json::from_value(json!({
            "_id": "a", "type": "MULTI_SELECT", "order": 2
        }))
        .unwrap();
        assert_eq!(q.question_type, QuestionType::Other("MULTI_SELECT".to_string()));
        assert_eq!(q.order, 2.0);

        let q: QuestionPayload = serde_json::from_value(json!({ "id": "b", "type": "LONG_TEXT" })).unwrap();
        assert_eq!(q.id, "b");
        assert_eq!(q.question_type, QuestionType::LongText);
        assert!(q.answer.is_none());
    }

    #[test]
    fn test_add_answer_request_shape() {
        let answer = Answer {
            response: "Modern".to_string(),
            rating: Some(4.0),
            selected_options: vec!["x".to_string()],
            reference_images_by_customer: vec![json!({ "url": "https://cdn/x.png" })],
        };

        let request = AddAnswerRequest {
            questionnaire_id: "Q1".to_string(),
            question_id: "q2".to_string(),
            answer: AnswerPayload::from(&answer),
            can_override: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "questionnaireId": "Q1",
                "questionId": "q2",
                "answer": {
                    "response": "Modern",
                    "referenceImagesByCustomer": [{ "url": "https://cdn/x.png" }]
                }
            })
        );

        let body = serde_json::to_value(AddAnswerRequest {
            can_override: Some(true),
            ..request
        })
        .unwrap();
        assert_eq!(body["canOverride"], json!(true));
    }

    #[test]
    fn test_whitespace_response_is_unanswered() {
        assert!(!Answer::text("   \n").is_answered());
        assert!(Answer::text(" yes ").is_answered());
    }

    #[test]
    fn test_order_accepts_any_number() {
        let q: QuestionPayload = serde_json::from_value(json!({ "_id": "a", "order": 1.0 })).unwrap();
        assert_eq!(q.order, 1.0);

        let q: QuestionPayload = serde_json::from_value(json!({ "_id": "a", "order": -3 })).unwrap();
        assert_eq!(q.order, -3.0);

        let q: QuestionPayload = serde_json::from_value(json!({ "_id": "a", "order": null })).unwrap();
        assert_eq!(q.order, 0.0);
    }
}
