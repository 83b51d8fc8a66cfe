use clap::Args;
use rocketshoes::products::ProductId;
use rocketshoes_app::{context::AppContext, store::UpdateProductAmount};

use crate::cli::CliError;

#[derive(Debug, Args)]
pub(crate) struct UpdateAmountArgs {
    /// Product ID of the entry to change
    product_id: ProductId,

    /// New amount; must be at least 1
    #[arg(allow_negative_numbers = true)]
    amount: i64,
}

pub(crate) async fn run(ctx: &AppContext, args: UpdateAmountArgs) -> Result<(), CliError> {
    super::finish(
        ctx.store
            .update_product_amount(UpdateProductAmount {
                product_id: args.product_id,
                amount: args.amount,
            })
            .await,
    )
}
