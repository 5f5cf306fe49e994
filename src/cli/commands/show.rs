use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::sync::Arc;

use questionnaire_cli::config::Config;
use questionnaire_cli::session::{EditAccessOutcome, SessionStore};

#[derive(Args)]
pub struct ShowArgs {
    /// Questionnaire identifier (defaults to the configured one)
    #[arg(long)]
    pub id: Option<String>,
    /// Print the normalized questionnaire as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Questionnaire identifier (defaults to the configured one)
    #[arg(long)]
    pub id: Option<String>,
}

async fn load_store(config: &Config, id: Option<String>) -> Result<SessionStore> {
    let gateway = Arc::new(super::build_gateway(config)?);
    let mut store = SessionStore::new(gateway);
    let id = id.unwrap_or_else(|| config.default_questionnaire_id.clone());

    if !store.initialize(Some(&id), false).await {
        anyhow::bail!("Failed to load questionnaire '{}'", id);
    }
    Ok(store)
}

pub async fn show_command(args: ShowArgs, config: &Config) -> Result<()> {
    let store = load_store(config, args.id).await?;
    let session = store
        .session()
        .context("Questionnaire loaded without session data")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    println!("{} {}", session.title.bright_cyan().bold(), format!("({})", session.id).dimmed());
    println!("Progress: {}%", store.progress_percentage());
    println!();
    for (index, question) in session.questions.iter().enumerate() {
        let marker = if question.answer.is_answered() {
            "✓".bright_green().bold()
        } else {
            "·".dimmed()
        };
        println!(
            "{} {:>2}. {}{}",
            marker,
            index + 1,
            question.question,
            if question.required { " *".red().to_string() } else { String::new() }
        );
        if question.answer.is_answered() {
            println!("      {}", question.answer.response.dimmed());
        }
    }
    Ok(())
}

pub async fn request_edit_command(args: EditArgs, config: &Config) -> Result<()> {
    let store = load_store(config, args.id).await?;

    match store.request_edit_access().await {
        EditAccessOutcome::Granted { data } => {
            println!("{} Edit access requested", "✓".bright_green().bold());
            if !data.is_null() {
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            Ok(())
        }
        EditAccessOutcome::Denied { error } => {
            anyhow::bail!("Edit access request failed: {}", error)
        }
    }
}
