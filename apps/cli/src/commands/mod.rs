//! Command handlers, one module per back-office screen.

mod accounts;
mod admin;
mod advisors;
mod assets;
mod basic_data;
mod portfolios;
mod positions;
mod transactions;

use wealthdesk_core::Result;

use crate::cli::Commands;
use crate::context::AppContext;

pub async fn dispatch(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::BasicData(cmd) => basic_data::handle(ctx, cmd).await,
        Commands::Assets(cmd) => assets::handle(ctx, cmd).await,
        Commands::Accounts(cmd) => accounts::handle(ctx, cmd).await,
        Commands::Positions(cmd) => positions::handle(ctx, cmd).await,
        Commands::Portfolios(cmd) => portfolios::handle(ctx, cmd).await,
        Commands::Tx(cmd) => transactions::handle(ctx, cmd).await,
        Commands::Admin(cmd) => admin::handle(ctx, cmd).await,
        Commands::Advisors(cmd) => advisors::handle(ctx, cmd).await,
    }
}
