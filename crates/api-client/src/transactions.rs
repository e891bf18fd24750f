//! Transaction endpoints: `/api/v1/transactions/*`.

use async_trait::async_trait;

use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::transactions::{
    CashJournal, CorporateAction, FxTransaction, NewCashJournal, NewCorporateAction,
    NewFxTransaction, NewTrade, Trade, TransactionApiTrait,
};
use wealthdesk_core::Result;

use crate::client::ApiClient;

fn journal_query(
    account_id: Option<&str>,
    page: PageRequest,
) -> Vec<(&'static str, String)> {
    let mut query = ApiClient::paged_query(page);
    if let Some(account_id) = account_id {
        query.push(("account_id", account_id.to_string()));
    }
    query
}

#[async_trait]
impl TransactionApiTrait for ApiClient {
    // ==================== Trades ====================

    async fn list_trades(
        &self,
        account_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Trade>> {
        self.get_with_query("/transactions/trades", &journal_query(account_id, page))
            .await
    }

    async fn create_trade(&self, draft: NewTrade) -> Result<Trade> {
        self.post("/transactions/trades", &draft).await
    }

    async fn delete_trade(&self, id: &str) -> Result<()> {
        self.delete(&format!("/transactions/trades/{}", id)).await
    }

    // ==================== Cash Journal ====================

    async fn list_cash_journal(
        &self,
        account_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<CashJournal>> {
        self.get_with_query(
            "/transactions/cash-journal",
            &journal_query(account_id, page),
        )
        .await
    }

    async fn create_cash_journal(&self, draft: NewCashJournal) -> Result<CashJournal> {
        self.post("/transactions/cash-journal", &draft).await
    }

    async fn delete_cash_journal(&self, id: &str) -> Result<()> {
        self.delete(&format!("/transactions/cash-journal/{}", id))
            .await
    }

    // ==================== FX Transactions ====================

    async fn list_fx_transactions(
        &self,
        account_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<FxTransaction>> {
        self.get_with_query(
            "/transactions/fx-transactions",
            &journal_query(account_id, page),
        )
        .await
    }

    async fn create_fx_transaction(&self, draft: NewFxTransaction) -> Result<FxTransaction> {
        self.post("/transactions/fx-transactions", &draft).await
    }

    async fn delete_fx_transaction(&self, id: &str) -> Result<()> {
        self.delete(&format!("/transactions/fx-transactions/{}", id))
            .await
    }

    // ==================== Corporate Actions ====================

    async fn list_corporate_actions(&self, page: PageRequest) -> Result<Vec<CorporateAction>> {
        self.get_with_query(
            "/transactions/corporate-actions",
            &Self::paged_query(page),
        )
        .await
    }

    async fn create_corporate_action(
        &self,
        draft: NewCorporateAction,
    ) -> Result<CorporateAction> {
        self.post("/transactions/corporate-actions", &draft).await
    }

    async fn delete_corporate_action(&self, id: &str) -> Result<()> {
        self.delete(&format!("/transactions/corporate-actions/{}", id))
            .await
    }
}
