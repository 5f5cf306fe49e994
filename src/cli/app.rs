use super::commands::{AuthCommands, ConfigCommands, EditArgs, RunArgs, ShowArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "questionnaire-cli")]
#[command(about = "Walk through a questionnaire and save answers to the backend")]
pub struct Cli {
    /// Load environment variables from this .env file
    #[arg(long, global = true)]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the questionnaire wizard interactively
    Run(RunArgs),
    /// Fetch and print a questionnaire
    Show(ShowArgs),
    /// Ask the backend to unlock a submitted questionnaire for editing
    RequestEdit(EditArgs),
    /// Login and token management
    Auth(AuthCommands),
    /// Configuration management
    Config(ConfigCommands),
}
