use clap::{Args, Subcommand};
use rocketshoes::{cart::Cart, errors::CartError};
use rocketshoes_app::context::AppContext;

use super::CliError;

mod add;
mod clear;
mod remove;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Print the cart with subtotals and total
    Show,
    /// Add one unit of a product
    Add(add::AddProductArgs),
    /// Remove a product from the cart
    Remove(remove::RemoveProductArgs),
    /// Set the amount of a product already in the cart
    Update(update::UpdateAmountArgs),
    /// Empty the cart
    Clear,
}

pub(crate) async fn run(ctx: &AppContext, command: CartCommand) -> Result<(), CliError> {
    match command.command {
        CartSubcommand::Show => Ok(show::run(ctx)?),
        CartSubcommand::Add(args) => add::run(ctx, args).await,
        CartSubcommand::Remove(args) => remove::run(ctx, args).await,
        CartSubcommand::Update(args) => update::run(ctx, args).await,
        CartSubcommand::Clear => clear::run(ctx).await,
    }
}

/// Print the cart a mutation produced. Failures were already surfaced by the store's
/// notifier.
fn finish(result: Result<Cart, CartError>) -> Result<(), CliError> {
    let Ok(cart) = result else {
        return Err(CliError::Notified);
    };

    Ok(show::print(&cart)?)
}
