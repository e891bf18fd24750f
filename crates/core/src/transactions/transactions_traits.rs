//! Traits for the transaction API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{
    CashJournal, CorporateAction, FxTransaction, NewCashJournal, NewCorporateAction,
    NewFxTransaction, NewTrade, Trade,
};

/// Gateway trait for transaction REST endpoints.
///
/// `account_id` narrows journal listings server-side when given.
#[async_trait]
pub trait TransactionApiTrait: Send + Sync {
    // Trades
    async fn list_trades(&self, account_id: Option<&str>, page: PageRequest)
        -> Result<Vec<Trade>>;
    async fn create_trade(&self, draft: NewTrade) -> Result<Trade>;
    async fn delete_trade(&self, id: &str) -> Result<()>;

    // Cash journal
    async fn list_cash_journal(
        &self,
        account_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<CashJournal>>;
    async fn create_cash_journal(&self, draft: NewCashJournal) -> Result<CashJournal>;
    async fn delete_cash_journal(&self, id: &str) -> Result<()>;

    // FX transactions
    async fn list_fx_transactions(
        &self,
        account_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<FxTransaction>>;
    async fn create_fx_transaction(&self, draft: NewFxTransaction) -> Result<FxTransaction>;
    async fn delete_fx_transaction(&self, id: &str) -> Result<()>;

    // Corporate actions
    async fn list_corporate_actions(&self, page: PageRequest) -> Result<Vec<CorporateAction>>;
    async fn create_corporate_action(&self, draft: NewCorporateAction)
        -> Result<CorporateAction>;
    async fn delete_corporate_action(&self, id: &str) -> Result<()>;
}

/// Service trait for the transaction screens.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    // Trades
    async fn get_trades(&self, account_id: Option<&str>) -> Result<Vec<Trade>>;
    async fn create_trade(&self, draft: NewTrade) -> Result<Trade>;
    async fn delete_trade(&self, id: &str) -> Result<()>;

    // Cash journal
    async fn get_cash_journal(&self, account_id: Option<&str>) -> Result<Vec<CashJournal>>;
    async fn create_cash_journal(&self, draft: NewCashJournal) -> Result<CashJournal>;
    async fn delete_cash_journal(&self, id: &str) -> Result<()>;

    // FX transactions
    async fn get_fx_transactions(&self, account_id: Option<&str>)
        -> Result<Vec<FxTransaction>>;
    async fn create_fx_transaction(&self, draft: NewFxTransaction) -> Result<FxTransaction>;
    async fn delete_fx_transaction(&self, id: &str) -> Result<()>;

    // Corporate actions
    async fn get_corporate_actions(&self) -> Result<Vec<CorporateAction>>;
    async fn create_corporate_action(&self, draft: NewCorporateAction)
        -> Result<CorporateAction>;
    async fn delete_corporate_action(&self, id: &str) -> Result<()>;
}
