//! Positions screen: holdings, balances, grouped reports, and movers.

use wealthdesk_core::analytics::{GroupBy, MoverDirection, MoversQuery};
use wealthdesk_core::errors::ValidationError;
use wealthdesk_core::positions::{AccountBalance, Position, PositionFilter};
use wealthdesk_core::Result;

use crate::cli::PositionsCmd;
use crate::context::AppContext;
use crate::utils::{fmt_money, fmt_pct, pretty_table, render_listing};

const POSITION_HEADERS: &[&str] = &[
    "Account", "Symbol", "Quantity", "Mark", "Market Value", "PnL", "FX", "As Of",
];

fn position_row(position: &Position) -> Vec<String> {
    vec![
        position.account_id.clone(),
        position.symbol.clone(),
        position.quantity.to_string(),
        fmt_money(&position.mark_price),
        fmt_money(&position.market_value),
        fmt_money(&position.pnl),
        position.fx_rate.to_string(),
        position.as_of_date.to_string(),
    ]
}

const BALANCE_HEADERS: &[&str] = &["Account", "Currency", "Balance", "As Of"];

fn balance_row(balance: &AccountBalance) -> Vec<String> {
    vec![
        balance.account_id.clone(),
        balance.currency.clone(),
        fmt_money(&balance.balance),
        balance.as_of_date.to_string(),
    ]
}

pub async fn handle(ctx: &AppContext, cmd: PositionsCmd) -> Result<()> {
    match cmd {
        PositionsCmd::List {
            portfolio,
            account,
            list,
        } => {
            let filter = PositionFilter {
                portfolio_id: portfolio,
                account_id: account,
            };
            let rows = ctx.position_service.get_positions(&filter).await?;
            render_listing(&rows, &list, POSITION_HEADERS, position_row);
        }
        PositionsCmd::Balances(args) => {
            let rows = ctx.position_service.get_account_balances().await?;
            render_listing(&rows, &args, BALANCE_HEADERS, balance_row);
        }
        PositionsCmd::Report {
            group_by,
            portfolio,
        } => {
            let group_by: GroupBy = group_by
                .parse()
                .map_err(ValidationError::InvalidInput)?;
            let report = ctx
                .analytics_service
                .get_positions_report(group_by, portfolio.as_deref())
                .await?;

            let rows = report
                .rows
                .iter()
                .map(|row| {
                    vec![
                        row.group_key.clone(),
                        fmt_money(&row.market_value),
                        fmt_money(&row.cost_basis),
                        fmt_money(&row.gain_loss),
                        fmt_pct(&row.gain_loss_pct),
                        fmt_pct(&row.weight_pct),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(
                    &["Group", "Market Value", "Cost Basis", "Gain/Loss", "%", "Weight"],
                    rows,
                )
            );
            println!(
                "Total: {} (cost {}, gain/loss {})",
                fmt_money(&report.totals.market_value),
                fmt_money(&report.totals.cost_basis),
                fmt_money(&report.totals.gain_loss),
            );
        }
        PositionsCmd::Filters => {
            let options = ctx.analytics_service.get_filter_options().await?;
            println!("Portfolios:");
            for portfolio in &options.portfolios {
                println!("  {}  {}", portfolio.id, portfolio.name);
            }
            println!("Currencies: {}", options.currencies.join(", "));
            println!("Asset classes: {}", options.asset_classes.join(", "));
        }
        PositionsCmd::Movers {
            direction,
            skip,
            limit,
        } => {
            let direction: MoverDirection = direction
                .parse()
                .map_err(ValidationError::InvalidInput)?;
            let page = ctx
                .analytics_service
                .get_movers(MoversQuery {
                    direction,
                    skip,
                    limit,
                })
                .await?;

            let rows = page
                .data
                .iter()
                .map(|mover| {
                    vec![
                        mover.symbol.clone(),
                        mover.name.clone(),
                        fmt_money(&mover.last_price),
                        fmt_pct(&mover.change_pct),
                        fmt_money(&mover.market_value),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Symbol", "Name", "Last", "Change", "Market Value"], rows)
            );
            if let Some(info) = &page.pagination {
                if let Some(total) = info.total {
                    println!("Showing {} of {} {}", page.data.len(), total, direction.as_str());
                }
            }
            if page.has_more() {
                println!("More available: rerun with --skip {}", skip + limit);
            }
        }
    }
    Ok(())
}
