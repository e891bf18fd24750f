//! Basic Data screen: CRUD over the seven catalog kinds.

use wealthdesk_core::catalogs::{
    AssetClass, AssetClassUpdate, Country, CountryUpdate, Currency, CurrencyUpdate, Exchange,
    ExchangeUpdate, Industry, IndustryUpdate, InvestmentStrategy, InvestmentStrategyUpdate,
    MarketIndex, MarketIndexUpdate, NewAssetClass, NewCountry, NewCurrency, NewExchange,
    NewIndustry, NewInvestmentStrategy, NewMarketIndex,
};
use wealthdesk_core::Result;

use crate::cli::{
    AssetClassCmd, BasicDataCmd, CountryCmd, CurrencyCmd, ExchangeCmd, IndexCmd, IndustryCmd,
    ListArgs, StrategyCmd,
};
use crate::context::AppContext;
use crate::utils::{confirm, fmt_opt, render_listing};

pub async fn handle(ctx: &AppContext, cmd: BasicDataCmd) -> Result<()> {
    match cmd {
        BasicDataCmd::Exchanges(cmd) => exchanges(ctx, cmd).await,
        BasicDataCmd::Countries(cmd) => countries(ctx, cmd).await,
        BasicDataCmd::Industries(cmd) => industries(ctx, cmd).await,
        BasicDataCmd::Indices(cmd) => indices(ctx, cmd).await,
        BasicDataCmd::Currencies(cmd) => currencies(ctx, cmd).await,
        BasicDataCmd::AssetClasses(cmd) => asset_classes(ctx, cmd).await,
        BasicDataCmd::Strategies(cmd) => strategies(ctx, cmd).await,
    }
}

// ==================== Exchanges ====================

const EXCHANGE_HEADERS: &[&str] = &["Code", "Name", "Country", "Timezone", "MIC"];

fn exchange_row(exchange: &Exchange) -> Vec<String> {
    vec![
        exchange.code.clone(),
        exchange.name.clone(),
        exchange.country_code.clone(),
        fmt_opt(&exchange.timezone),
        fmt_opt(&exchange.operating_mic),
    ]
}

async fn exchanges(ctx: &AppContext, cmd: ExchangeCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        ExchangeCmd::List(args) => {
            let rows = service.get_exchanges().await?;
            render_listing(&rows, &args, EXCHANGE_HEADERS, exchange_row);
        }
        ExchangeCmd::Add { code, fields } => {
            let created = service
                .create_exchange(NewExchange {
                    code,
                    name: fields.name,
                    country_code: fields.country_code,
                    timezone: fields.timezone,
                    operating_mic: fields.mic,
                })
                .await?;
            println!("Created exchange '{}'", created.code);
        }
        ExchangeCmd::Edit { code, fields } => {
            let updated = service
                .update_exchange(
                    &code,
                    ExchangeUpdate {
                        name: fields.name,
                        country_code: fields.country_code,
                        timezone: fields.timezone,
                        operating_mic: fields.mic,
                    },
                )
                .await?;
            println!("Updated exchange '{}'", updated.code);
        }
        ExchangeCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete exchange '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_exchange(&args.id).await?;
            println!("Deleted exchange '{}'", args.id);
            let rows = service.get_exchanges().await?;
            render_listing(&rows, &ListArgs::default(), EXCHANGE_HEADERS, exchange_row);
        }
    }
    Ok(())
}

// ==================== Countries ====================

const COUNTRY_HEADERS: &[&str] = &["Code", "Name", "Region", "Currency"];

fn country_row(country: &Country) -> Vec<String> {
    vec![
        country.code.clone(),
        country.name.clone(),
        fmt_opt(&country.region),
        fmt_opt(&country.currency_code),
    ]
}

async fn countries(ctx: &AppContext, cmd: CountryCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        CountryCmd::List(args) => {
            let rows = service.get_countries().await?;
            render_listing(&rows, &args, COUNTRY_HEADERS, country_row);
        }
        CountryCmd::Add { code, fields } => {
            let created = service
                .create_country(NewCountry {
                    code,
                    name: fields.name,
                    region: fields.region,
                    currency_code: fields.currency_code,
                })
                .await?;
            println!("Created country '{}'", created.code);
        }
        CountryCmd::Edit { code, fields } => {
            let updated = service
                .update_country(
                    &code,
                    CountryUpdate {
                        name: fields.name,
                        region: fields.region,
                        currency_code: fields.currency_code,
                    },
                )
                .await?;
            println!("Updated country '{}'", updated.code);
        }
        CountryCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete country '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_country(&args.id).await?;
            println!("Deleted country '{}'", args.id);
            let rows = service.get_countries().await?;
            render_listing(&rows, &ListArgs::default(), COUNTRY_HEADERS, country_row);
        }
    }
    Ok(())
}

// ==================== Industries ====================

const INDUSTRY_HEADERS: &[&str] = &["Code", "Name", "Sector", "Description"];

fn industry_row(industry: &Industry) -> Vec<String> {
    vec![
        industry.code.clone(),
        industry.name.clone(),
        fmt_opt(&industry.sector_code),
        fmt_opt(&industry.description),
    ]
}

async fn industries(ctx: &AppContext, cmd: IndustryCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        IndustryCmd::List(args) => {
            let rows = service.get_industries().await?;
            render_listing(&rows, &args, INDUSTRY_HEADERS, industry_row);
        }
        IndustryCmd::Add { code, fields } => {
            let created = service
                .create_industry(NewIndustry {
                    code,
                    name: fields.name,
                    sector_code: fields.sector_code,
                    description: fields.description,
                })
                .await?;
            println!("Created industry '{}'", created.code);
        }
        IndustryCmd::Edit { code, fields } => {
            let updated = service
                .update_industry(
                    &code,
                    IndustryUpdate {
                        name: fields.name,
                        sector_code: fields.sector_code,
                        description: fields.description,
                    },
                )
                .await?;
            println!("Updated industry '{}'", updated.code);
        }
        IndustryCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete industry '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_industry(&args.id).await?;
            println!("Deleted industry '{}'", args.id);
            let rows = service.get_industries().await?;
            render_listing(&rows, &ListArgs::default(), INDUSTRY_HEADERS, industry_row);
        }
    }
    Ok(())
}

// ==================== Indices ====================

const INDEX_HEADERS: &[&str] = &["Code", "Name", "Currency", "Provider"];

fn index_row(index: &MarketIndex) -> Vec<String> {
    vec![
        index.code.clone(),
        index.name.clone(),
        fmt_opt(&index.currency_code),
        fmt_opt(&index.provider),
    ]
}

async fn indices(ctx: &AppContext, cmd: IndexCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        IndexCmd::List(args) => {
            let rows = service.get_indices().await?;
            render_listing(&rows, &args, INDEX_HEADERS, index_row);
        }
        IndexCmd::Add { code, fields } => {
            let created = service
                .create_index(NewMarketIndex {
                    code,
                    name: fields.name,
                    currency_code: fields.currency_code,
                    provider: fields.provider,
                })
                .await?;
            println!("Created index '{}'", created.code);
        }
        IndexCmd::Edit { code, fields } => {
            let updated = service
                .update_index(
                    &code,
                    MarketIndexUpdate {
                        name: fields.name,
                        currency_code: fields.currency_code,
                        provider: fields.provider,
                    },
                )
                .await?;
            println!("Updated index '{}'", updated.code);
        }
        IndexCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete index '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_index(&args.id).await?;
            println!("Deleted index '{}'", args.id);
            let rows = service.get_indices().await?;
            render_listing(&rows, &ListArgs::default(), INDEX_HEADERS, index_row);
        }
    }
    Ok(())
}

// ==================== Currencies ====================

const CURRENCY_HEADERS: &[&str] = &["Code", "Name", "Symbol", "Decimals"];

fn currency_row(currency: &Currency) -> Vec<String> {
    vec![
        currency.code.clone(),
        currency.name.clone(),
        fmt_opt(&currency.symbol),
        currency.decimal_places.to_string(),
    ]
}

async fn currencies(ctx: &AppContext, cmd: CurrencyCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        CurrencyCmd::List(args) => {
            let rows = service.get_currencies().await?;
            render_listing(&rows, &args, CURRENCY_HEADERS, currency_row);
        }
        CurrencyCmd::Add { code, fields } => {
            let created = service
                .create_currency(NewCurrency {
                    code,
                    name: fields.name,
                    symbol: fields.symbol,
                    decimal_places: fields.decimal_places,
                })
                .await?;
            println!("Created currency '{}'", created.code);
        }
        CurrencyCmd::Edit { code, fields } => {
            let updated = service
                .update_currency(
                    &code,
                    CurrencyUpdate {
                        name: fields.name,
                        symbol: fields.symbol,
                        decimal_places: fields.decimal_places,
                    },
                )
                .await?;
            println!("Updated currency '{}'", updated.code);
        }
        CurrencyCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete currency '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_currency(&args.id).await?;
            println!("Deleted currency '{}'", args.id);
            let rows = service.get_currencies().await?;
            render_listing(&rows, &ListArgs::default(), CURRENCY_HEADERS, currency_row);
        }
    }
    Ok(())
}

// ==================== Asset Classes ====================

const ASSET_CLASS_HEADERS: &[&str] = &["Code", "Name", "Description", "Subclasses"];

fn asset_class_row(class: &AssetClass) -> Vec<String> {
    let sub_classes = class
        .sub_classes
        .iter()
        .map(|sub| sub.code.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        class.code.clone(),
        class.name.clone(),
        fmt_opt(&class.description),
        sub_classes,
    ]
}

async fn asset_classes(ctx: &AppContext, cmd: AssetClassCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        AssetClassCmd::List(args) => {
            let rows = service.get_asset_classes().await?;
            render_listing(&rows, &args, ASSET_CLASS_HEADERS, asset_class_row);
        }
        AssetClassCmd::Add {
            code,
            name,
            description,
        } => {
            let created = service
                .create_asset_class(NewAssetClass {
                    code,
                    name,
                    description,
                    sub_classes: Vec::new(),
                })
                .await?;
            println!("Created asset class '{}'", created.code);
        }
        AssetClassCmd::Edit {
            code,
            name,
            description,
        } => {
            let updated = service
                .update_asset_class(&code, AssetClassUpdate { name, description })
                .await?;
            println!("Updated asset class '{}'", updated.code);
        }
        AssetClassCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete asset class '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_asset_class(&args.id).await?;
            println!("Deleted asset class '{}'", args.id);
            let rows = service.get_asset_classes().await?;
            render_listing(
                &rows,
                &ListArgs::default(),
                ASSET_CLASS_HEADERS,
                asset_class_row,
            );
        }
    }
    Ok(())
}

// ==================== Investment Strategies ====================

const STRATEGY_HEADERS: &[&str] = &["Code", "Name", "Description", "Risk"];

fn strategy_row(strategy: &InvestmentStrategy) -> Vec<String> {
    vec![
        strategy.code.clone(),
        strategy.name.clone(),
        fmt_opt(&strategy.description),
        strategy
            .risk_level
            .map(|level| level.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]
}

async fn strategies(ctx: &AppContext, cmd: StrategyCmd) -> Result<()> {
    let service = &ctx.catalog_service;
    match cmd {
        StrategyCmd::List(args) => {
            let rows = service.get_strategies().await?;
            render_listing(&rows, &args, STRATEGY_HEADERS, strategy_row);
        }
        StrategyCmd::Add { code, fields } => {
            let created = service
                .create_strategy(NewInvestmentStrategy {
                    code,
                    name: fields.name,
                    description: fields.description,
                    risk_level: fields.risk_level,
                })
                .await?;
            println!("Created strategy '{}'", created.code);
        }
        StrategyCmd::Edit { code, fields } => {
            let updated = service
                .update_strategy(
                    &code,
                    InvestmentStrategyUpdate {
                        name: fields.name,
                        description: fields.description,
                        risk_level: fields.risk_level,
                    },
                )
                .await?;
            println!("Updated strategy '{}'", updated.code);
        }
        StrategyCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete strategy '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_strategy(&args.id).await?;
            println!("Deleted strategy '{}'", args.id);
            let rows = service.get_strategies().await?;
            render_listing(&rows, &ListArgs::default(), STRATEGY_HEADERS, strategy_row);
        }
    }
    Ok(())
}
