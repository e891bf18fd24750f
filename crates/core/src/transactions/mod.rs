//! Transactions module - journal models, services, and traits.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_model_tests;

// Re-export the public interface
pub use transactions_model::{
    ActionType, CashEntryType, CashJournal, CorporateAction, FxTransaction, NewCashJournal,
    NewCorporateAction, NewFxTransaction, NewTrade, Trade, TradeSide,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionApiTrait, TransactionServiceTrait};
