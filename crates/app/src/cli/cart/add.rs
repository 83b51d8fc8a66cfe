use clap::Args;
use rocketshoes::products::ProductId;
use rocketshoes_app::context::AppContext;

use crate::cli::CliError;

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// Catalog product ID
    product_id: ProductId,
}

pub(crate) async fn run(ctx: &AppContext, args: AddProductArgs) -> Result<(), CliError> {
    super::finish(ctx.store.add_product(args.product_id).await)
}
