pub mod auth;
pub mod config;
pub mod run;
pub mod show;

pub use auth::{AuthCommands, auth_command};
pub use config::{ConfigCommands, config_command};
pub use run::{RunArgs, run_command};
pub use show::{EditArgs, ShowArgs, request_edit_command, show_command};

use anyhow::Result;
use log::debug;
use questionnaire_cli::api::{HttpGateway, QuestionnaireClient};
use questionnaire_cli::auth::Credentials;
use questionnaire_cli::config::Config;

/// Build the HTTP gateway from config and the resolved token
pub fn build_gateway(config: &Config) -> Result<HttpGateway> {
    let base_url = config.resolve_base_url()?;
    let token = Credentials::resolve(config).map(|c| c.token);
    if token.is_none() {
        debug!("No bearer token configured, sending unauthenticated requests");
    }

    let client = QuestionnaireClient::new(base_url, token, config.timeout())?;
    Ok(HttpGateway::new(client))
}
