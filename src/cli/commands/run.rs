//! Interactive questionnaire wizard

use anyhow::Result;
use clap::Args;
use colored::*;
use is_terminal::IsTerminal;
use log::info;
use std::sync::Arc;

use crate::cli::render;
use questionnaire_cli::config::Config;
use questionnaire_cli::router::{NavigationGuard, PREVIEW_MODE, Route, RouteQuery};
use questionnaire_cli::session::SessionStore;
use questionnaire_cli::ui::UiState;
use questionnaire_cli::ui::prompts::{WizardAction, prompt_confirmation, prompt_response, prompt_wizard_action};

#[derive(Args)]
pub struct RunArgs {
    /// Questionnaire identifier (defaults to the configured one)
    #[arg(long)]
    pub id: Option<String>,
    /// Preview mode: answers stay local and nothing is sent to the backend
    #[arg(long)]
    pub preview: bool,
    /// Interaction mode: "text" (menu per question) or "conversation" (one question after another)
    #[arg(long)]
    pub mode: Option<String>,
}

pub async fn run_command(args: RunArgs, config: &Config) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("The questionnaire wizard needs an interactive terminal");
    }

    let gateway = Arc::new(super::build_gateway(config)?);
    let mut store = SessionStore::new(gateway);
    let guard = NavigationGuard::new();

    let mut ui_state = UiState::new();
    if let Some(mode) = &args.mode {
        ui_state.set_mode(mode);
    }

    let query = RouteQuery::new(
        args.id.or_else(|| Some(config.default_questionnaire_id.clone())),
        args.preview.then(|| PREVIEW_MODE.to_string()),
    );

    guard.before_each(&mut store, Route::Welcome, &query).await;
    if let Some(session) = store.session() {
        render::welcome(session.welcome_screen.as_ref(), &session.title);
    }
    if store.is_preview_mode() {
        println!("{}", "Preview mode: answers will not be saved".bright_yellow());
    }

    guard.before_each(&mut store, Route::Question, &query).await;
    if store.total_questions() == 0 {
        println!("{}", "No questions available.".bright_yellow());
        return Ok(());
    }
    store.set_show_progress_bar(true);
    info!("Starting wizard in {} mode", ui_state.selected_mode().as_str());

    loop {
        let Some(question) = store.current_question().cloned() else {
            break;
        };
        render::question(&store, &question);

        let index = store.current_question_index();
        let action = if ui_state.is_conversation_mode() {
            WizardAction::Answer
        } else {
            prompt_wizard_action(index > 0, index + 1 < store.total_questions())?
        };

        match action {
            WizardAction::Answer => {
                let mut draft = question.answer.clone();
                draft.response = prompt_response(&question)?;

                match store.submit_answer(&question.id, draft).await {
                    Ok(outcome) => {
                        println!(
                            "{} Answer saved {}",
                            "✓".bright_green().bold(),
                            render::progress_bar(outcome.completion_percentage)
                        );
                        if outcome.locked {
                            println!("{} Questionnaire submitted and locked", "✓".bright_green().bold());
                        }
                        if !store.next_question() {
                            break;
                        }
                    }
                    Err(e) => {
                        println!("{} {}", "✗".bright_red().bold(), e.to_string().red());
                        if ui_state.is_conversation_mode()
                            && !prompt_confirmation("Try this question again?", true)?
                        {
                            return Ok(());
                        }
                    }
                }
            }
            WizardAction::Next => {
                store.next_question();
            }
            WizardAction::Previous => {
                store.previous_question();
            }
            WizardAction::Quit => return Ok(()),
        }
    }

    guard.before_each(&mut store, Route::End, &query).await;
    render::end(store.session().and_then(|s| s.end_screen.as_ref()));
    Ok(())
}
