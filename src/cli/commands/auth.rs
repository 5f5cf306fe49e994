use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;

use questionnaire_cli::auth::{Credentials, TokenSource};
use questionnaire_cli::config::Config;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Print the login redirect URL provided by the backend
    LoginUrl,
    /// Post login data (a JSON object) to the backend
    Login {
        /// JSON body, e.g. '{"code": "..."}'
        data: String,
    },
    /// Persist a bearer token in the config file
    SetToken {
        token: String,
    },
    /// Remove the persisted bearer token
    ClearToken,
    /// Show which token and backend will be used
    Status,
}

pub async fn auth_command(args: AuthCommands, config: &mut Config) -> Result<()> {
    match args.command {
        AuthSubcommands::LoginUrl => {
            let gateway = super::build_gateway(config)?;
            match gateway.fetch_login_redirect_url().await? {
                Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                None => anyhow::bail!("Not authorized to fetch the login URL"),
            }
        }
        AuthSubcommands::Login { data } => {
            let body: serde_json::Value =
                serde_json::from_str(&data).context("Login data must be valid JSON")?;
            let gateway = super::build_gateway(config)?;
            match gateway.login(&body).await? {
                Some(response) => {
                    println!("{} Logged in", "✓".bright_green().bold());
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                None => anyhow::bail!("Login was rejected (401)"),
            }
        }
        AuthSubcommands::SetToken { token } => {
            if token.trim().is_empty() {
                anyhow::bail!("Token must not be empty");
            }
            config.authorization = Some(token);
            config.save()?;
            println!("{} Token saved", "✓".bright_green().bold());
        }
        AuthSubcommands::ClearToken => {
            config.authorization = None;
            config.save()?;
            println!("{} Token removed", "✓".bright_green().bold());
        }
        AuthSubcommands::Status => {
            match config.resolve_base_url() {
                Ok(url) => println!("Backend: {}", url.bright_cyan()),
                Err(_) => println!("Backend: {}", "not configured".bright_yellow()),
            }
            match Credentials::resolve(config) {
                Some(creds) => {
                    let source = match creds.source {
                        TokenSource::ConfigFile => "config file",
                        TokenSource::Environment => "environment",
                    };
                    println!("Token:   {} ({})", creds.masked(), source.dimmed());
                }
                None => println!("Token:   {}", "none".bright_yellow()),
            }
        }
    }
    Ok(())
}
