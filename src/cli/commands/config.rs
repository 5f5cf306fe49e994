use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use questionnaire_cli::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show,
    /// Set the backend base URL
    SetBaseUrl {
        url: String,
    },
    /// Set the request timeout in seconds
    SetTimeout {
        seconds: u64,
    },
    /// Set the questionnaire used when no --id is given
    SetDefaultId {
        id: String,
    },
}

pub async fn config_command(args: ConfigCommands, config: &mut Config) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            println!("{}", "Configuration".bright_cyan().bold());
            println!("  base_url:                 {}", config.base_url.as_deref().unwrap_or("-"));
            println!(
                "  authorization:            {}",
                if config.authorization.is_some() { "set" } else { "-" }
            );
            println!("  timeout_secs:             {}", config.timeout_secs);
            println!("  default_questionnaire_id: {}", config.default_questionnaire_id);
            println!();
            println!("  {}", format!("{}", Config::get_config_path()?.display()).dimmed());
            return Ok(());
        }
        ConfigSubcommands::SetBaseUrl { url } => config.set_base_url(url)?,
        ConfigSubcommands::SetTimeout { seconds } => {
            if seconds == 0 {
                anyhow::bail!("Timeout must be at least one second");
            }
            config.timeout_secs = seconds;
        }
        ConfigSubcommands::SetDefaultId { id } => {
            if id.trim().is_empty() {
                anyhow::bail!("Questionnaire id must not be empty");
            }
            config.default_questionnaire_id = id;
        }
    }

    config.save()?;
    println!("{} Configuration updated", "✓".bright_green().bold());
    Ok(())
}
