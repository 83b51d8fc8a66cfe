use std::error::Error;

use clap::{Parser, Subcommand};
use rocketshoes_app::{config::AppConfig, context::AppContext, observability};

mod cart;

#[derive(Debug, Parser)]
#[command(name = "rocketshoes-app", about = "RocketShoes cart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

/// Why a command failed.
#[derive(Debug)]
pub(crate) enum CliError {
    /// The shopper was already told through the notifier.
    Notified,

    /// Not reported yet.
    Message(String),
}

impl From<String> for CliError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
}

impl Cli {
    /// Parse arguments, with `.env` values as fallbacks for unset variables.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), CliError> {
        observability::init(&self.config.logging).map_err(|error| describe(&error))?;

        let ctx = AppContext::from_config(&self.config)
            .await
            .map_err(|error| describe(&error))?;

        match self.command {
            Commands::Cart(command) => cart::run(&ctx, command).await,
        }
    }
}

/// Render an error with its chain of sources.
fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
