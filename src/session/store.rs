use super::outcome::{EditAccessOutcome, NO_QUESTIONNAIRE_LOADED, OptimisticPolicy, SubmitError, SubmitOutcome};
use super::state::{Question, QuestionnaireSession};
use crate::api::constants::DEFAULT_QUESTIONNAIRE_ID;
use crate::api::models::{AddAnswerRequest, Answer, AnswerPayload, QuestionnairePayload};
use crate::api::QuestionnaireGateway;
use log::{debug, error, info, warn};
use std::sync::Arc;

/// Lifecycle of a session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initializing,
    Ready,
    /// Last initialization failed; behaves like `Uninitialized`
    Failed,
}

/// Owns the questionnaire session and coordinates it with the backend.
///
/// Constructed once by the application root and handed to the navigation
/// guard and presentation code. All mutations go through its methods, which
/// take `&mut self`, so one logical actor drives the store at a time.
pub struct SessionStore {
    gateway: Arc<dyn QuestionnaireGateway>,
    session: Option<QuestionnaireSession>,
    phase: SessionPhase,
    current_question_index: usize,
    is_initialized: bool,
    is_preview_mode: bool,
    show_progress_bar: bool,
    policy: OptimisticPolicy,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn QuestionnaireGateway>) -> Self {
        Self {
            gateway,
            session: None,
            phase: SessionPhase::Uninitialized,
            current_question_index: 0,
            is_initialized: false,
            is_preview_mode: false,
            show_progress_bar: false,
            policy: OptimisticPolicy::default(),
        }
    }

    /// Fetch and normalize the questionnaire.
    ///
    /// Returns `false` on any failure (401, transport error, malformed payload)
    /// and leaves the store uninitialized. Callers are expected to check
    /// [`is_initialized`](Self::is_initialized) before calling again.
    pub async fn initialize(&mut self, questionnaire_id: Option<&str>, preview_mode: bool) -> bool {
        let questionnaire_id = questionnaire_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_QUESTIONNAIRE_ID)
            .to_string();

        self.is_preview_mode = preview_mode;
        self.phase = SessionPhase::Initializing;
        info!(
            "Initializing questionnaire {} (preview: {})",
            questionnaire_id, preview_mode
        );

        let envelope = match self.gateway.fetch_questionnaire_by_id(&questionnaire_id).await {
            Ok(Some(envelope)) => envelope,
            Ok(None) => {
                warn!("Not authorized to fetch questionnaire {}", questionnaire_id);
                return self.fail_initialization();
            }
            Err(e) => {
                error!("Failed to fetch questionnaire {}: {}", questionnaire_id, e);
                return self.fail_initialization();
            }
        };

        let Some(data) = envelope.get("data").filter(|data| data.is_object()) else {
            error!("Questionnaire response for {} has no data", questionnaire_id);
            return self.fail_initialization();
        };

        let payload: QuestionnairePayload = match serde_json::from_value(data.clone()) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Questionnaire {} payload is malformed: {}", questionnaire_id, e);
                return self.fail_initialization();
            }
        };

        let session = QuestionnaireSession::normalize(payload, &questionnaire_id);
        debug!(
            "Loaded questionnaire {} with {} questions",
            session.id,
            session.questions.len()
        );

        self.session = Some(session);
        self.is_initialized = true;
        self.phase = SessionPhase::Ready;
        true
    }

    fn fail_initialization(&mut self) -> bool {
        self.phase = SessionPhase::Failed;
        false
    }

    /// Overwrite the current position; the index is not validated
    pub fn set_current_question_index(&mut self, index: usize) {
        self.current_question_index = index;
    }

    pub fn next_question(&mut self) -> bool {
        if self.current_question_index < self.total_questions().saturating_sub(1) {
            self.current_question_index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_question(&mut self) -> bool {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            true
        } else {
            false
        }
    }

    /// Local, unsubmitted edit of a question's answer
    pub fn answer_mut(&mut self, question_id: &str) -> Option<&mut Answer> {
        self.session
            .as_mut()?
            .question_mut(question_id)
            .map(|q| &mut q.answer)
    }

    pub fn current_answer_mut(&mut self) -> Option<&mut Answer> {
        let index = self.current_question_index;
        self.session
            .as_mut()?
            .questions
            .get_mut(index)
            .map(|q| &mut q.answer)
    }

    /// Store `draft` on the question, recompute completion and send it.
    ///
    /// The local update happens before any network call and is kept when the
    /// call fails. In preview mode nothing is sent. When the current index is
    /// the last one, a successful submission is followed by a lock call whose
    /// failure is only logged. `canOverride` is set only when the backend
    /// already accepted a non-blank response for the question.
    pub async fn submit_answer(&mut self, question_id: &str, draft: Answer) -> Result<SubmitOutcome, SubmitError> {
        if !self.is_initialized {
            return Err(SubmitError::NotInitialized);
        }
        let session = self.session.as_mut().ok_or(SubmitError::NotInitialized)?;

        let was_answered = session
            .question(question_id)
            .map(|q| q.has_saved_answer())
            .unwrap_or(false);

        match session.position_of(question_id) {
            Some(position) => session.questions[position].answer = draft.clone(),
            None => warn!("Question {} is not part of questionnaire {}", question_id, session.id),
        }

        let completion_percentage = session.compute_completion();
        session.completion_percentage = completion_percentage;

        if self.is_preview_mode {
            debug!("Preview mode, answer to {} kept locally", question_id);
            return Ok(SubmitOutcome {
                success: true,
                completion_percentage,
                data: None,
                locked: false,
            });
        }

        let questionnaire_id = session.id.clone();
        let is_last = session.questions.len().checked_sub(1) == Some(self.current_question_index);
        let request = AddAnswerRequest {
            questionnaire_id: questionnaire_id.clone(),
            question_id: question_id.to_string(),
            answer: AnswerPayload::from(&draft),
            can_override: was_answered.then_some(true),
        };

        let data = match self.gateway.add_answer(&request).await {
            Ok(data) => data,
            Err(e) => {
                match self.policy {
                    OptimisticPolicy::KeepLocalOnFailure => warn!(
                        "Answer to {} not saved, keeping local edit at {}% complete",
                        question_id, completion_percentage
                    ),
                }
                return Err(SubmitError::Gateway(e));
            }
        };
        info!("Saved answer to {} ({}% complete)", question_id, completion_percentage);
        if let Some(question) = self.session.as_mut().and_then(|s| s.question_mut(question_id)) {
            question.mark_saved(&draft.response);
        }

        let mut locked = false;
        if is_last {
            match self.gateway.lock_questionnaire(&questionnaire_id).await {
                Ok(_) => {
                    if let Some(session) = self.session.as_mut() {
                        session.is_locked = Some(true);
                    }
                    locked = true;
                    info!("Locked questionnaire {}", questionnaire_id);
                }
                Err(e) => error!("Failed to lock questionnaire {}: {}", questionnaire_id, e),
            }
        }

        Ok(SubmitOutcome {
            success: true,
            completion_percentage,
            data: Some(data),
            locked,
        })
    }

    /// Ask the backend to unlock the questionnaire for editing. Never fails.
    pub async fn request_edit_access(&self) -> EditAccessOutcome {
        let Some(questionnaire_id) = self
            .session
            .as_ref()
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty())
        else {
            return EditAccessOutcome::Denied {
                error: NO_QUESTIONNAIRE_LOADED.to_string(),
            };
        };

        match self.gateway.request_unlock(questionnaire_id).await {
            Ok(data) => EditAccessOutcome::Granted { data },
            Err(e) => {
                warn!("Edit access for {} denied: {}", questionnaire_id, e);
                EditAccessOutcome::Denied { error: e.to_string() }
            }
        }
    }

    pub fn set_show_progress_bar(&mut self, show: bool) {
        self.show_progress_bar = show;
    }

    pub fn show_progress_bar(&self) -> bool {
        self.show_progress_bar
    }

    // Derived getters

    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref()?.questions.get(self.current_question_index)
    }

    pub fn progress_percentage(&self) -> u8 {
        self.session
            .as_ref()
            .map(|s| s.completion_percentage)
            .unwrap_or(0)
    }

    pub fn total_questions(&self) -> usize {
        self.session.as_ref().map(|s| s.questions.len()).unwrap_or(0)
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn is_preview_mode(&self) -> bool {
        self.is_preview_mode
    }

    pub fn is_locked(&self) -> bool {
        self.session
            .as_ref()
            .and_then(|s| s.is_locked)
            .unwrap_or(false)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn optimistic_policy(&self) -> OptimisticPolicy {
        self.policy
    }

    pub fn session(&self) -> Option<&QuestionnaireSession> {
        self.session.as_ref()
    }
}
