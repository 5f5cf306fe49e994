use crate::api::models::QuestionType;
use crate::session::Question;
use anyhow::Result;
use dialoguer::{Editor, Input, Select};

/// What the respondent wants to do on a question screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Answer,
    Next,
    Previous,
    Quit,
}

pub fn prompt_wizard_action(can_go_back: bool, can_go_forward: bool) -> Result<WizardAction> {
    let mut actions = vec![(WizardAction::Answer, "Answer")];
    if can_go_forward {
        actions.push((WizardAction::Next, "Next question"));
    }
    if can_go_back {
        actions.push((WizardAction::Previous, "Previous question"));
    }
    actions.push((WizardAction::Quit, "Quit"));

    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].0)
}

/// Ask for a response, prefilled with the current one.
///
/// Long-text questions open the user's editor; everything else is a single line.
pub fn prompt_response(question: &Question) -> Result<String> {
    if question.question_type == QuestionType::LongText {
        let edited = Editor::new().edit(&question.answer.response)?;
        return Ok(edited.unwrap_or_else(|| question.answer.response.clone()));
    }

    let response = Input::<String>::new()
        .with_prompt(&question.question)
        .with_initial_text(question.answer.response.clone())
        .allow_empty(!question.required)
        .interact_text()?;
    Ok(response)
}

/// Interactive confirmation prompt using arrow-key navigable selection
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}
