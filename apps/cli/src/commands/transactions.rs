//! Transaction screens: the four journals.

use wealthdesk_core::errors::ValidationError;
use wealthdesk_core::transactions::{
    ActionType, CashEntryType, CashJournal, CorporateAction, FxTransaction, NewCashJournal,
    NewCorporateAction, NewFxTransaction, NewTrade, Trade, TradeSide,
};
use wealthdesk_core::Result;

use crate::cli::{CashCmd, CorporateActionsCmd, FxCmd, ListArgs, TradesCmd, TxCmd};
use crate::context::AppContext;
use crate::utils::{
    confirm, fmt_money, fmt_opt, fmt_opt_date, parse_date, parse_decimal, render_listing,
};

pub async fn handle(ctx: &AppContext, cmd: TxCmd) -> Result<()> {
    match cmd {
        TxCmd::Trades(cmd) => trades(ctx, cmd).await,
        TxCmd::Cash(cmd) => cash(ctx, cmd).await,
        TxCmd::Fx(cmd) => fx(ctx, cmd).await,
        TxCmd::CorporateActions(cmd) => corporate_actions(ctx, cmd).await,
    }
}

fn parse_side(side: &str) -> Result<TradeSide> {
    match side.to_lowercase().as_str() {
        "buy" => Ok(TradeSide::Buy),
        "sell" => Ok(TradeSide::Sell),
        other => Err(ValidationError::InvalidInput(format!(
            "unknown side '{}', expected buy or sell",
            other
        ))
        .into()),
    }
}

fn parse_entry_type(entry_type: &str) -> Result<CashEntryType> {
    match entry_type.to_lowercase().as_str() {
        "deposit" => Ok(CashEntryType::Deposit),
        "withdrawal" => Ok(CashEntryType::Withdrawal),
        "fee" => Ok(CashEntryType::Fee),
        "interest" => Ok(CashEntryType::Interest),
        other => Err(ValidationError::InvalidInput(format!(
            "unknown entry type '{}', expected deposit, withdrawal, fee, or interest",
            other
        ))
        .into()),
    }
}

fn parse_action_type(action_type: &str) -> Result<ActionType> {
    match action_type.to_lowercase().as_str() {
        "dividend" => Ok(ActionType::Dividend),
        "split" => Ok(ActionType::Split),
        "merger" => Ok(ActionType::Merger),
        other => Err(ValidationError::InvalidInput(format!(
            "unknown action type '{}', expected dividend, split, or merger",
            other
        ))
        .into()),
    }
}

// ==================== Trades ====================

const TRADE_HEADERS: &[&str] = &[
    "Id", "Account", "Symbol", "Side", "Quantity", "Price", "Fees", "Currency", "Date",
];

fn trade_row(trade: &Trade) -> Vec<String> {
    vec![
        trade.id.clone(),
        trade.account_id.clone(),
        trade.symbol.clone(),
        format!("{:?}", trade.side).to_uppercase(),
        trade.quantity.to_string(),
        fmt_money(&trade.price),
        trade
            .fees
            .map(|f| fmt_money(&f))
            .unwrap_or_else(|| "-".to_string()),
        trade.currency.clone(),
        trade.trade_date.to_string(),
    ]
}

async fn trades(ctx: &AppContext, cmd: TradesCmd) -> Result<()> {
    let service = &ctx.transaction_service;
    match cmd {
        TradesCmd::List { account, list } => {
            let rows = service.get_trades(account.as_deref()).await?;
            render_listing(&rows, &list, TRADE_HEADERS, trade_row);
        }
        TradesCmd::Add {
            account,
            symbol,
            side,
            quantity,
            price,
            fees,
            currency,
            date,
            settle_date,
        } => {
            let created = service
                .create_trade(NewTrade {
                    account_id: account,
                    symbol,
                    side: parse_side(&side)?,
                    quantity: parse_decimal(&quantity)?,
                    price: parse_decimal(&price)?,
                    fees: fees.as_deref().map(parse_decimal).transpose()?,
                    currency,
                    trade_date: Some(parse_date(&date)?),
                    settle_date: settle_date.as_deref().map(parse_date).transpose()?,
                })
                .await?;
            println!("Recorded trade '{}'", created.id);
        }
        TradesCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete trade '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_trade(&args.id).await?;
            println!("Deleted trade '{}'", args.id);
            let rows = service.get_trades(None).await?;
            render_listing(&rows, &ListArgs::default(), TRADE_HEADERS, trade_row);
        }
    }
    Ok(())
}

// ==================== Cash Journal ====================

const CASH_HEADERS: &[&str] = &["Id", "Account", "Type", "Amount", "Currency", "Date", "Memo"];

fn cash_row(entry: &CashJournal) -> Vec<String> {
    vec![
        entry.id.clone(),
        entry.account_id.clone(),
        format!("{:?}", entry.entry_type).to_uppercase(),
        fmt_money(&entry.amount),
        entry.currency.clone(),
        entry.entry_date.to_string(),
        fmt_opt(&entry.memo),
    ]
}

async fn cash(ctx: &AppContext, cmd: CashCmd) -> Result<()> {
    let service = &ctx.transaction_service;
    match cmd {
        CashCmd::List { account, list } => {
            let rows = service.get_cash_journal(account.as_deref()).await?;
            render_listing(&rows, &list, CASH_HEADERS, cash_row);
        }
        CashCmd::Add {
            account,
            entry_type,
            amount,
            currency,
            date,
            memo,
        } => {
            let created = service
                .create_cash_journal(NewCashJournal {
                    account_id: account,
                    entry_type: parse_entry_type(&entry_type)?,
                    amount: parse_decimal(&amount)?,
                    currency,
                    entry_date: Some(parse_date(&date)?),
                    memo,
                })
                .await?;
            println!("Recorded cash entry '{}'", created.id);
        }
        CashCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete cash entry '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_cash_journal(&args.id).await?;
            println!("Deleted cash entry '{}'", args.id);
            let rows = service.get_cash_journal(None).await?;
            render_listing(&rows, &ListArgs::default(), CASH_HEADERS, cash_row);
        }
    }
    Ok(())
}

// ==================== FX Transactions ====================

const FX_HEADERS: &[&str] = &[
    "Id", "Account", "Sell", "Buy", "Sell Amount", "Buy Amount", "Rate", "Date",
];

fn fx_row(tx: &FxTransaction) -> Vec<String> {
    vec![
        tx.id.clone(),
        tx.account_id.clone(),
        tx.sell_currency.clone(),
        tx.buy_currency.clone(),
        fmt_money(&tx.sell_amount),
        fmt_money(&tx.buy_amount),
        tx.rate.to_string(),
        tx.trade_date.to_string(),
    ]
}

async fn fx(ctx: &AppContext, cmd: FxCmd) -> Result<()> {
    let service = &ctx.transaction_service;
    match cmd {
        FxCmd::List { account, list } => {
            let rows = service.get_fx_transactions(account.as_deref()).await?;
            render_listing(&rows, &list, FX_HEADERS, fx_row);
        }
        FxCmd::Add {
            account,
            sell,
            buy,
            sell_amount,
            buy_amount,
            date,
        } => {
            let created = service
                .create_fx_transaction(NewFxTransaction {
                    account_id: account,
                    sell_currency: sell.to_uppercase(),
                    buy_currency: buy.to_uppercase(),
                    sell_amount: parse_decimal(&sell_amount)?,
                    buy_amount: parse_decimal(&buy_amount)?,
                    trade_date: Some(parse_date(&date)?),
                })
                .await?;
            println!("Recorded FX transaction '{}'", created.id);
        }
        FxCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete FX transaction '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_fx_transaction(&args.id).await?;
            println!("Deleted FX transaction '{}'", args.id);
            let rows = service.get_fx_transactions(None).await?;
            render_listing(&rows, &ListArgs::default(), FX_HEADERS, fx_row);
        }
    }
    Ok(())
}

// ==================== Corporate Actions ====================

const ACTION_HEADERS: &[&str] = &["Id", "Symbol", "Type", "Amount", "Ratio", "Ex Date", "Pay Date"];

fn action_row(action: &CorporateAction) -> Vec<String> {
    vec![
        action.id.clone(),
        action.symbol.clone(),
        format!("{:?}", action.action_type).to_uppercase(),
        action
            .amount
            .map(|a| fmt_money(&a))
            .unwrap_or_else(|| "-".to_string()),
        action
            .ratio
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string()),
        action.ex_date.to_string(),
        fmt_opt_date(&action.pay_date),
    ]
}

async fn corporate_actions(ctx: &AppContext, cmd: CorporateActionsCmd) -> Result<()> {
    let service = &ctx.transaction_service;
    match cmd {
        CorporateActionsCmd::List(args) => {
            let rows = service.get_corporate_actions().await?;
            render_listing(&rows, &args, ACTION_HEADERS, action_row);
        }
        CorporateActionsCmd::Add {
            symbol,
            action_type,
            amount,
            ratio,
            ex_date,
            pay_date,
        } => {
            let created = service
                .create_corporate_action(NewCorporateAction {
                    symbol,
                    action_type: parse_action_type(&action_type)?,
                    amount: amount.as_deref().map(parse_decimal).transpose()?,
                    ratio: ratio.as_deref().map(parse_decimal).transpose()?,
                    ex_date: Some(parse_date(&ex_date)?),
                    pay_date: pay_date.as_deref().map(parse_date).transpose()?,
                })
                .await?;
            println!("Recorded corporate action '{}'", created.id);
        }
        CorporateActionsCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete corporate action '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_corporate_action(&args.id).await?;
            println!("Deleted corporate action '{}'", args.id);
            let rows = service.get_corporate_actions().await?;
            render_listing(&rows, &ListArgs::default(), ACTION_HEADERS, action_row);
        }
    }
    Ok(())
}
