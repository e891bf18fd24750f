//! Advisors screen: advisor directory and their clients' portfolios.

use wealthdesk_core::Result;

use crate::cli::AdvisorsCmd;
use crate::commands::admin::{user_row, USER_HEADERS};
use crate::context::AppContext;
use crate::utils::{fmt_opt, render_listing};

pub async fn handle(ctx: &AppContext, cmd: AdvisorsCmd) -> Result<()> {
    match cmd {
        AdvisorsCmd::List(args) => {
            let rows = ctx.user_service.get_advisors().await?;
            render_listing(&rows, &args, USER_HEADERS, user_row);
        }
        AdvisorsCmd::Portfolios { advisor, list } => {
            let rows = ctx
                .portfolio_service
                .get_portfolios_for_owner(&advisor)
                .await?;
            render_listing(
                &rows,
                &list,
                &["Id", "Name", "Currency", "Country", "Inception"],
                |portfolio| {
                    vec![
                        portfolio.id.clone(),
                        portfolio.name.clone(),
                        portfolio.currency.clone(),
                        fmt_opt(&portfolio.country_code),
                        portfolio.inception_date.to_string(),
                    ]
                },
            );
        }
    }
    Ok(())
}
