//! Command-line surface: one command group per back-office screen.

use clap::{Args, Parser, Subcommand};

use wealthdesk_core::constants::DISPLAY_PAGE_SIZE;
use wealthdesk_core::listing::{ListState, SortConfig, SortDirection};

#[derive(Parser, Debug)]
#[command(
    name = "wealthdesk",
    version,
    about = "Wealth-management back-office terminal client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse and edit catalog reference data
    #[command(subcommand, name = "basic-data")]
    BasicData(BasicDataCmd),
    /// Browse and edit instruments
    #[command(subcommand)]
    Assets(AssetsCmd),
    /// Custody accounts
    #[command(subcommand)]
    Accounts(AccountsCmd),
    /// Holdings, balances, grouped reports, and movers
    #[command(subcommand)]
    Positions(PositionsCmd),
    /// Client portfolios and performance
    #[command(subcommand)]
    Portfolios(PortfoliosCmd),
    /// Transaction journals
    #[command(subcommand)]
    Tx(TxCmd),
    /// Users and roles
    #[command(subcommand)]
    Admin(AdminCmd),
    /// Advisor directory
    #[command(subcommand)]
    Advisors(AdvisorsCmd),
}

/// Client-side table controls shared by every listing.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive filter across the table's text columns
    #[arg(long)]
    pub search: Option<String>,
    /// Column key to sort by
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page
    #[arg(long = "page-size", default_value_t = DISPLAY_PAGE_SIZE)]
    pub page_size: usize,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            desc: false,
            page: 1,
            page_size: DISPLAY_PAGE_SIZE,
        }
    }
}

impl ListArgs {
    pub fn to_state(&self) -> ListState {
        let mut state = ListState::new();
        if let Some(query) = &self.search {
            state.set_query(query.clone());
        }
        if let Some(key) = &self.sort {
            state.sort = Some(SortConfig {
                key: key.clone(),
                direction: if self.desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                },
            });
        }
        state.page = self.page;
        state.page_size = self.page_size;
        state
    }
}

/// Shared arguments for delete commands.
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Identifier of the row to delete
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

// ==================== Basic Data ====================

#[derive(Subcommand, Debug)]
pub enum BasicDataCmd {
    #[command(subcommand)]
    Exchanges(ExchangeCmd),
    #[command(subcommand)]
    Countries(CountryCmd),
    #[command(subcommand)]
    Industries(IndustryCmd),
    #[command(subcommand)]
    Indices(IndexCmd),
    #[command(subcommand)]
    Currencies(CurrencyCmd),
    #[command(subcommand, name = "asset-classes")]
    AssetClasses(AssetClassCmd),
    #[command(subcommand)]
    Strategies(StrategyCmd),
}

#[derive(Args, Debug)]
pub struct ExchangeFields {
    #[arg(long)]
    pub name: String,
    #[arg(long = "country")]
    pub country_code: String,
    #[arg(long)]
    pub timezone: Option<String>,
    #[arg(long)]
    pub mic: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExchangeCmd {
    /// List exchanges
    List(ListArgs),
    /// Create an exchange
    Add {
        code: String,
        #[command(flatten)]
        fields: ExchangeFields,
    },
    /// Update an exchange
    Edit {
        code: String,
        #[command(flatten)]
        fields: ExchangeFields,
    },
    /// Delete an exchange
    Rm(RmArgs),
}

#[derive(Args, Debug)]
pub struct CountryFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long = "currency")]
    pub currency_code: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CountryCmd {
    /// List countries
    List(ListArgs),
    /// Create a country
    Add {
        code: String,
        #[command(flatten)]
        fields: CountryFields,
    },
    /// Update a country
    Edit {
        code: String,
        #[command(flatten)]
        fields: CountryFields,
    },
    /// Delete a country
    Rm(RmArgs),
}

#[derive(Args, Debug)]
pub struct IndustryFields {
    #[arg(long)]
    pub name: String,
    #[arg(long = "sector")]
    pub sector_code: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum IndustryCmd {
    /// List industries
    List(ListArgs),
    /// Create an industry
    Add {
        code: String,
        #[command(flatten)]
        fields: IndustryFields,
    },
    /// Update an industry
    Edit {
        code: String,
        #[command(flatten)]
        fields: IndustryFields,
    },
    /// Delete an industry
    Rm(RmArgs),
}

#[derive(Args, Debug)]
pub struct IndexFields {
    #[arg(long)]
    pub name: String,
    #[arg(long = "currency")]
    pub currency_code: Option<String>,
    #[arg(long)]
    pub provider: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum IndexCmd {
    /// List market indices
    List(ListArgs),
    /// Create an index
    Add {
        code: String,
        #[command(flatten)]
        fields: IndexFields,
    },
    /// Update an index
    Edit {
        code: String,
        #[command(flatten)]
        fields: IndexFields,
    },
    /// Delete an index
    Rm(RmArgs),
}

#[derive(Args, Debug)]
pub struct CurrencyFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub symbol: Option<String>,
    #[arg(long = "decimals", default_value_t = 2)]
    pub decimal_places: i32,
}

#[derive(Subcommand, Debug)]
pub enum CurrencyCmd {
    /// List currencies
    List(ListArgs),
    /// Create a currency
    Add {
        code: String,
        #[command(flatten)]
        fields: CurrencyFields,
    },
    /// Update a currency
    Edit {
        code: String,
        #[command(flatten)]
        fields: CurrencyFields,
    },
    /// Delete a currency
    Rm(RmArgs),
}

#[derive(Subcommand, Debug)]
pub enum AssetClassCmd {
    /// List asset classes with their subclasses
    List(ListArgs),
    /// Create an asset class
    Add {
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update an asset class
    Edit {
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an asset class
    Rm(RmArgs),
}

#[derive(Args, Debug)]
pub struct StrategyFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Risk level on a 1-5 scale
    #[arg(long = "risk")]
    pub risk_level: Option<i32>,
}

#[derive(Subcommand, Debug)]
pub enum StrategyCmd {
    /// List investment strategies
    List(ListArgs),
    /// Create a strategy
    Add {
        code: String,
        #[command(flatten)]
        fields: StrategyFields,
    },
    /// Update a strategy
    Edit {
        code: String,
        #[command(flatten)]
        fields: StrategyFields,
    },
    /// Delete a strategy
    Rm(RmArgs),
}

// ==================== Assets ====================

#[derive(Args, Debug)]
pub struct AssetFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub isin: Option<String>,
    #[arg(long)]
    pub figi: Option<String>,
    #[arg(long)]
    pub cusip: Option<String>,
    #[arg(long = "class")]
    pub asset_class_code: Option<String>,
    #[arg(long = "sub-class")]
    pub asset_sub_class_code: Option<String>,
    #[arg(long = "exchange")]
    pub exchange_code: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub issuer: Option<String>,
    /// Maturity date (YYYY-MM-DD) for structured notes
    #[arg(long = "maturity")]
    pub maturity_date: Option<String>,
    #[arg(long = "coupon")]
    pub coupon_rate: Option<String>,
    #[arg(long = "barrier")]
    pub barrier_level: Option<String>,
    #[arg(long = "protection")]
    pub protection_level: Option<String>,
    #[arg(long = "underlying")]
    pub underlying_symbol: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum AssetsCmd {
    /// List assets
    List(ListArgs),
    /// Show one asset
    Show { id: String },
    /// Create an asset
    Add {
        symbol: String,
        #[arg(long)]
        currency: String,
        #[command(flatten)]
        fields: AssetFields,
    },
    /// Update an asset
    Edit {
        id: String,
        #[command(flatten)]
        fields: AssetFields,
    },
    /// Delete an asset
    Rm(RmArgs),
}

// ==================== Accounts ====================

#[derive(Subcommand, Debug)]
pub enum AccountsCmd {
    /// List accounts
    List {
        #[arg(long)]
        portfolio: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Create an account
    Add {
        #[arg(long)]
        portfolio: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        currency: String,
        #[arg(long = "type")]
        account_type: Option<String>,
    },
    /// Update an account
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        institution: String,
        #[arg(long = "type")]
        account_type: Option<String>,
        /// Deactivate the account
        #[arg(long)]
        inactive: bool,
    },
    /// Delete an account
    Rm(RmArgs),
}

// ==================== Positions ====================

#[derive(Subcommand, Debug)]
pub enum PositionsCmd {
    /// List positions
    List {
        #[arg(long)]
        portfolio: Option<String>,
        #[arg(long)]
        account: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Cash balances per account
    Balances(ListArgs),
    /// Grouped positions report (computed server-side)
    Report {
        /// asset_class, currency, portfolio, or symbol
        #[arg(long = "group-by", default_value = "asset_class")]
        group_by: String,
        #[arg(long)]
        portfolio: Option<String>,
    },
    /// Filter choices offered by the analytics endpoints
    Filters,
    /// Top movers ranking (paginated server-side)
    Movers {
        /// gainers or losers
        #[arg(long, default_value = "gainers")]
        direction: String,
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}

// ==================== Portfolios ====================

#[derive(Subcommand, Debug)]
pub enum PortfoliosCmd {
    /// List portfolios
    List(ListArgs),
    /// Reduced id/name listing for dropdowns
    Simple,
    /// Create a portfolio
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "owner")]
        owner_user_id: String,
        #[arg(long)]
        currency: String,
        #[arg(long = "country")]
        country_code: Option<String>,
        /// Inception date (YYYY-MM-DD)
        #[arg(long = "inception")]
        inception_date: String,
        #[arg(long = "strategy")]
        strategy_code: Option<String>,
    },
    /// Update a portfolio
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        currency: String,
        #[arg(long = "country")]
        country_code: Option<String>,
        #[arg(long = "strategy")]
        strategy_code: Option<String>,
    },
    /// Delete a portfolio
    Rm(RmArgs),
    /// Time-weighted return summaries (computed server-side)
    Performance(ListArgs),
    /// Accounts within a portfolio
    Accounts {
        id: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

// ==================== Transactions ====================

#[derive(Subcommand, Debug)]
pub enum TxCmd {
    #[command(subcommand)]
    Trades(TradesCmd),
    #[command(subcommand)]
    Cash(CashCmd),
    #[command(subcommand)]
    Fx(FxCmd),
    #[command(subcommand, name = "corporate-actions")]
    CorporateActions(CorporateActionsCmd),
}

#[derive(Subcommand, Debug)]
pub enum TradesCmd {
    /// List trades
    List {
        #[arg(long)]
        account: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Record a trade
    Add {
        #[arg(long)]
        account: String,
        #[arg(long)]
        symbol: String,
        /// buy or sell
        #[arg(long)]
        side: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        fees: Option<String>,
        #[arg(long)]
        currency: String,
        /// Trade date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Settlement date (YYYY-MM-DD)
        #[arg(long = "settle")]
        settle_date: Option<String>,
    },
    /// Delete a trade
    Rm(RmArgs),
}

#[derive(Subcommand, Debug)]
pub enum CashCmd {
    /// List cash journal entries
    List {
        #[arg(long)]
        account: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Record a cash entry
    Add {
        #[arg(long)]
        account: String,
        /// deposit, withdrawal, fee, or interest
        #[arg(long = "type")]
        entry_type: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        currency: String,
        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        memo: Option<String>,
    },
    /// Delete a cash entry
    Rm(RmArgs),
}

#[derive(Subcommand, Debug)]
pub enum FxCmd {
    /// List FX conversions
    List {
        #[arg(long)]
        account: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Record an FX conversion
    Add {
        #[arg(long)]
        account: String,
        #[arg(long)]
        sell: String,
        #[arg(long)]
        buy: String,
        #[arg(long = "sell-amount")]
        sell_amount: String,
        #[arg(long = "buy-amount")]
        buy_amount: String,
        /// Trade date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Delete an FX conversion
    Rm(RmArgs),
}

#[derive(Subcommand, Debug)]
pub enum CorporateActionsCmd {
    /// List corporate actions
    List(ListArgs),
    /// Record a corporate action
    Add {
        #[arg(long)]
        symbol: String,
        /// dividend, split, or merger
        #[arg(long = "type")]
        action_type: String,
        /// Cash amount per share (dividends)
        #[arg(long)]
        amount: Option<String>,
        /// New-for-old share ratio (splits and mergers)
        #[arg(long)]
        ratio: Option<String>,
        /// Ex date (YYYY-MM-DD)
        #[arg(long = "ex-date")]
        ex_date: String,
        /// Pay date (YYYY-MM-DD)
        #[arg(long = "pay-date")]
        pay_date: Option<String>,
    },
    /// Delete a corporate action
    Rm(RmArgs),
}

// ==================== Admin ====================

#[derive(Subcommand, Debug)]
pub enum AdminCmd {
    #[command(subcommand)]
    Users(UsersCmd),
    #[command(subcommand)]
    Roles(RolesCmd),
}

#[derive(Subcommand, Debug)]
pub enum UsersCmd {
    /// List users
    List(ListArgs),
    /// Create a user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// individual, advisor, or institution
        #[arg(long = "type", default_value = "individual")]
        entity_type: String,
        #[arg(long = "role")]
        role_id: Option<String>,
    },
    /// Update a user
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// individual, advisor, or institution
        #[arg(long = "type", default_value = "individual")]
        entity_type: String,
        #[arg(long = "role")]
        role_id: Option<String>,
        /// Deactivate the user
        #[arg(long)]
        inactive: bool,
    },
    /// Delete a user
    Rm(RmArgs),
}

#[derive(Subcommand, Debug)]
pub enum RolesCmd {
    /// List roles with their user counts
    List(ListArgs),
    /// Create a role
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a role
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a role
    Rm(RmArgs),
}

// ==================== Advisors ====================

#[derive(Subcommand, Debug)]
pub enum AdvisorsCmd {
    /// List advisors
    List(ListArgs),
    /// Portfolios managed for an advisor's clients
    Portfolios {
        /// Advisor user id
        #[arg(long)]
        advisor: String,
        #[command(flatten)]
        list: ListArgs,
    },
}
