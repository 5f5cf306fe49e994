use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::commands::{auth_command, config_command, request_edit_command, run_command, show_command};
use cli::{Cli, Commands};
use questionnaire_cli::auth::Credentials;
use questionnaire_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("questionnaire-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    match &cli.env_file {
        Some(path) => Credentials::load_env_file(path)?,
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let mut config = Config::load()?;
    info!("Starting questionnaire-cli");

    match cli.command {
        Commands::Run(args) => run_command(args, &config).await,
        Commands::Show(args) => show_command(args, &config).await,
        Commands::RequestEdit(args) => request_edit_command(args, &config).await,
        Commands::Auth(args) => auth_command(args, &mut config).await,
        Commands::Config(args) => config_command(args, &mut config).await,
    }
}
