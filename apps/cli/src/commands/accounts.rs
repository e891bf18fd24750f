//! Accounts screen: custody account CRUD.

use wealthdesk_core::accounts::{Account, AccountUpdate, NewAccount};
use wealthdesk_core::Result;

use crate::cli::{AccountsCmd, ListArgs};
use crate::context::AppContext;
use crate::utils::{confirm, fmt_opt, render_listing};

pub const ACCOUNT_HEADERS: &[&str] =
    &["Id", "Portfolio", "Name", "Institution", "Currency", "Type", "Active"];

pub fn account_row(account: &Account) -> Vec<String> {
    vec![
        account.id.clone(),
        account.portfolio_id.clone(),
        account.name.clone(),
        account.institution.clone(),
        account.currency.clone(),
        fmt_opt(&account.account_type),
        account.is_active.to_string(),
    ]
}

pub async fn handle(ctx: &AppContext, cmd: AccountsCmd) -> Result<()> {
    let service = &ctx.account_service;
    match cmd {
        AccountsCmd::List { portfolio, list } => {
            let rows = service.get_accounts(portfolio.as_deref()).await?;
            render_listing(&rows, &list, ACCOUNT_HEADERS, account_row);
        }
        AccountsCmd::Add {
            portfolio,
            name,
            institution,
            currency,
            account_type,
        } => {
            let created = service
                .create_account(NewAccount {
                    portfolio_id: portfolio,
                    name,
                    institution,
                    currency,
                    account_type,
                })
                .await?;
            println!("Created account '{}' ({})", created.name, created.id);
        }
        AccountsCmd::Edit {
            id,
            name,
            institution,
            account_type,
            inactive,
        } => {
            let updated = service
                .update_account(
                    &id,
                    AccountUpdate {
                        name,
                        institution,
                        account_type,
                        is_active: !inactive,
                    },
                )
                .await?;
            println!("Updated account '{}'", updated.id);
        }
        AccountsCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete account '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_account(&args.id).await?;
            println!("Deleted account '{}'", args.id);
            let rows = service.get_accounts(None).await?;
            render_listing(&rows, &ListArgs::default(), ACCOUNT_HEADERS, account_row);
        }
    }
    Ok(())
}
