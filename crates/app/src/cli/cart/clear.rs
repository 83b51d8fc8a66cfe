use rocketshoes_app::context::AppContext;

use crate::cli::CliError;

pub(crate) async fn run(ctx: &AppContext) -> Result<(), CliError> {
    super::finish(ctx.store.clear().await)
}
