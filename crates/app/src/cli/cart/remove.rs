use clap::Args;
use rocketshoes::products::ProductId;
use rocketshoes_app::context::AppContext;

use crate::cli::CliError;

#[derive(Debug, Args)]
pub(crate) struct RemoveProductArgs {
    /// Product ID of the entry to remove
    product_id: ProductId,
}

pub(crate) async fn run(ctx: &AppContext, args: RemoveProductArgs) -> Result<(), CliError> {
    super::finish(ctx.store.remove_product(args.product_id).await)
}
