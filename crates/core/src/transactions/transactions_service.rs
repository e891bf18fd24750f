//! Transaction service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{
    CashJournal, CorporateAction, FxTransaction, NewCashJournal, NewCorporateAction,
    NewFxTransaction, NewTrade, Trade, TransactionApiTrait, TransactionServiceTrait,
};

/// Service for the four transaction journals.
pub struct TransactionService {
    api: Arc<dyn TransactionApiTrait>,
    pager: Pager,
}

impl TransactionService {
    pub fn new(api: Arc<dyn TransactionApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn TransactionApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    // ==================== Trades ====================

    async fn get_trades(&self, account_id: Option<&str>) -> Result<Vec<Trade>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_trades(account_id, page))
            .await
    }

    async fn create_trade(&self, draft: NewTrade) -> Result<Trade> {
        draft.validate()?;
        debug!(
            "Recording {:?} trade of {} {}",
            draft.side, draft.quantity, draft.symbol
        );
        self.api.create_trade(draft).await
    }

    async fn delete_trade(&self, id: &str) -> Result<()> {
        debug!("Deleting trade {}", id);
        self.api.delete_trade(id).await
    }

    // ==================== Cash Journal ====================

    async fn get_cash_journal(&self, account_id: Option<&str>) -> Result<Vec<CashJournal>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_cash_journal(account_id, page))
            .await
    }

    async fn create_cash_journal(&self, draft: NewCashJournal) -> Result<CashJournal> {
        draft.validate()?;
        debug!(
            "Recording {:?} of {} {}",
            draft.entry_type, draft.amount, draft.currency
        );
        self.api.create_cash_journal(draft).await
    }

    async fn delete_cash_journal(&self, id: &str) -> Result<()> {
        debug!("Deleting cash entry {}", id);
        self.api.delete_cash_journal(id).await
    }

    // ==================== FX Transactions ====================

    async fn get_fx_transactions(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<FxTransaction>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_fx_transactions(account_id, page))
            .await
    }

    async fn create_fx_transaction(&self, draft: NewFxTransaction) -> Result<FxTransaction> {
        draft.validate()?;
        debug!(
            "Recording FX {} -> {}",
            draft.sell_currency, draft.buy_currency
        );
        self.api.create_fx_transaction(draft).await
    }

    async fn delete_fx_transaction(&self, id: &str) -> Result<()> {
        debug!("Deleting FX transaction {}", id);
        self.api.delete_fx_transaction(id).await
    }

    // ==================== Corporate Actions ====================

    async fn get_corporate_actions(&self) -> Result<Vec<CorporateAction>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_corporate_actions(page))
            .await
    }

    async fn create_corporate_action(
        &self,
        draft: NewCorporateAction,
    ) -> Result<CorporateAction> {
        draft.validate()?;
        debug!(
            "Recording {:?} corporate action on {}",
            draft.action_type, draft.symbol
        );
        self.api.create_corporate_action(draft).await
    }

    async fn delete_corporate_action(&self, id: &str) -> Result<()> {
        debug!("Deleting corporate action {}", id);
        self.api.delete_corporate_action(id).await
    }
}
