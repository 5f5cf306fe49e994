//! Terminal rendering for wizard screens

use colored::*;
use questionnaire_cli::api::models::{EndScreen, WelcomeScreen};
use questionnaire_cli::session::{Question, SessionStore};

const PROGRESS_WIDTH: usize = 30;

pub fn progress_bar(percentage: u8) -> String {
    let filled = PROGRESS_WIDTH * usize::from(percentage.min(100)) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled).bright_green(),
        "░".repeat(PROGRESS_WIDTH - filled).dimmed(),
        percentage
    )
}

pub fn welcome(screen: Option<&WelcomeScreen>, title: &str) {
    println!();
    match screen {
        Some(screen) if !screen.title.is_empty() => {
            println!("{}", screen.title.bright_cyan().bold());
            if !screen.description.is_empty() {
                println!("{}", screen.description.dimmed());
            }
        }
        _ if !title.is_empty() => println!("{}", title.bright_cyan().bold()),
        _ => println!("{}", "Questionnaire".bright_cyan().bold()),
    }
    println!();
}

pub fn question(store: &SessionStore, question: &Question) {
    println!();
    if store.show_progress_bar() {
        println!("{}", progress_bar(store.progress_percentage()));
    }
    println!(
        "{} {}{}",
        format!(
            "Question {}/{}",
            store.current_question_index() + 1,
            store.total_questions()
        )
        .bright_blue()
        .bold(),
        question.question.bold(),
        if question.required { " *".red().to_string() } else { String::new() }
    );
    if !question.description.is_empty() {
        println!("  {}", question.description.dimmed());
    }
    if question.answer.is_answered() {
        println!("  {} {}", "Current answer:".dimmed(), question.answer.response);
    }
}

pub fn end(screen: Option<&EndScreen>) {
    println!();
    match screen {
        Some(screen) if !screen.title.is_empty() => {
            println!("{}", screen.title.bright_green().bold());
            if !screen.body_text.is_empty() {
                println!("{}", screen.body_text);
            }
        }
        _ => println!("{}", "Thank you!".bright_green().bold()),
    }
}
