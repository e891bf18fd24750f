//! Portfolios screen: portfolio CRUD, accounts, and TWR summaries.

use wealthdesk_core::accounts::Account;
use wealthdesk_core::performance::TwrSummary;
use wealthdesk_core::portfolios::{NewPortfolio, Portfolio, PortfolioUpdate};
use wealthdesk_core::Result;

use crate::cli::{ListArgs, PortfoliosCmd};
use crate::context::AppContext;
use crate::utils::{confirm, fmt_opt, fmt_opt_pct, parse_date, render_listing};

const PORTFOLIO_HEADERS: &[&str] = &[
    "Id", "Name", "Owner", "Currency", "Country", "Inception", "Strategy",
];

fn portfolio_row(portfolio: &Portfolio) -> Vec<String> {
    vec![
        portfolio.id.clone(),
        portfolio.name.clone(),
        portfolio.owner_user_id.clone(),
        portfolio.currency.clone(),
        fmt_opt(&portfolio.country_code),
        portfolio.inception_date.to_string(),
        fmt_opt(&portfolio.strategy_code),
    ]
}

const ACCOUNT_HEADERS: &[&str] = &["Id", "Name", "Institution", "Currency", "Type", "Active"];

fn account_row(account: &Account) -> Vec<String> {
    vec![
        account.id.clone(),
        account.name.clone(),
        account.institution.clone(),
        account.currency.clone(),
        fmt_opt(&account.account_type),
        account.is_active.to_string(),
    ]
}

const TWR_HEADERS: &[&str] = &["Portfolio", "YTD", "1Y", "Since Inception"];

fn twr_row(summary: &TwrSummary) -> Vec<String> {
    vec![
        summary.portfolio_name.clone(),
        fmt_opt_pct(&summary.ytd_pct),
        fmt_opt_pct(&summary.one_year_pct),
        fmt_opt_pct(&summary.since_inception_pct),
    ]
}

pub async fn handle(ctx: &AppContext, cmd: PortfoliosCmd) -> Result<()> {
    match cmd {
        PortfoliosCmd::List(args) => {
            let rows = ctx.portfolio_service.get_portfolios().await?;
            render_listing(&rows, &args, PORTFOLIO_HEADERS, portfolio_row);
        }
        PortfoliosCmd::Simple => {
            let rows = ctx.portfolio_service.get_portfolios_simple().await?;
            for portfolio in &rows {
                println!("{}  {}", portfolio.id, portfolio.name);
            }
            println!("{} portfolios", rows.len());
        }
        PortfoliosCmd::Add {
            name,
            owner_user_id,
            currency,
            country_code,
            inception_date,
            strategy_code,
        } => {
            let created = ctx
                .portfolio_service
                .create_portfolio(NewPortfolio {
                    name,
                    owner_user_id,
                    currency,
                    country_code,
                    inception_date: Some(parse_date(&inception_date)?),
                    strategy_code,
                })
                .await?;
            println!("Created portfolio '{}' ({})", created.name, created.id);
        }
        PortfoliosCmd::Edit {
            id,
            name,
            currency,
            country_code,
            strategy_code,
        } => {
            let updated = ctx
                .portfolio_service
                .update_portfolio(
                    &id,
                    PortfolioUpdate {
                        name,
                        currency,
                        country_code,
                        strategy_code,
                    },
                )
                .await?;
            println!("Updated portfolio '{}'", updated.name);
        }
        PortfoliosCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete portfolio '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            ctx.portfolio_service.delete_portfolio(&args.id).await?;
            println!("Deleted portfolio '{}'", args.id);
            let rows = ctx.portfolio_service.get_portfolios().await?;
            render_listing(&rows, &ListArgs::default(), PORTFOLIO_HEADERS, portfolio_row);
        }
        PortfoliosCmd::Performance(args) => {
            let rows = ctx.performance_service.get_twr_summaries().await?;
            render_listing(&rows, &args, TWR_HEADERS, twr_row);
        }
        PortfoliosCmd::Accounts { id, list } => {
            let rows = ctx.account_service.get_accounts(Some(&id)).await?;
            render_listing(&rows, &list, ACCOUNT_HEADERS, account_row);
        }
    }
    Ok(())
}
