//! RocketShoes cart CLI

use std::process;

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = match cli::Cli::load() {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    match cli.run().await {
        Ok(()) => {}
        Err(cli::CliError::Notified) => process::exit(1),
        Err(cli::CliError::Message(message)) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}
