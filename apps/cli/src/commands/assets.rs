//! Assets screen: instrument CRUD.

use wealthdesk_core::assets::{Asset, AssetUpdate, NewAsset};
use wealthdesk_core::Result;

use crate::cli::{AssetFields, AssetsCmd, ListArgs};
use crate::context::AppContext;
use crate::utils::{confirm, fmt_opt, fmt_opt_date, parse_date, parse_decimal, render_listing};

const ASSET_HEADERS: &[&str] = &["Symbol", "Name", "Class", "Currency", "Exchange", "ISIN"];

fn asset_row(asset: &Asset) -> Vec<String> {
    vec![
        asset.symbol.clone(),
        asset.name.clone(),
        fmt_opt(&asset.asset_class_code),
        asset.currency.clone(),
        fmt_opt(&asset.exchange_code),
        fmt_opt(&asset.isin),
    ]
}

struct ParsedAssetFields {
    maturity_date: Option<chrono::NaiveDate>,
    coupon_rate: Option<rust_decimal::Decimal>,
    barrier_level: Option<rust_decimal::Decimal>,
    protection_level: Option<rust_decimal::Decimal>,
}

fn parse_asset_fields(fields: &AssetFields) -> Result<ParsedAssetFields> {
    Ok(ParsedAssetFields {
        maturity_date: fields.maturity_date.as_deref().map(parse_date).transpose()?,
        coupon_rate: fields.coupon_rate.as_deref().map(parse_decimal).transpose()?,
        barrier_level: fields
            .barrier_level
            .as_deref()
            .map(parse_decimal)
            .transpose()?,
        protection_level: fields
            .protection_level
            .as_deref()
            .map(parse_decimal)
            .transpose()?,
    })
}

pub async fn handle(ctx: &AppContext, cmd: AssetsCmd) -> Result<()> {
    let service = &ctx.asset_service;
    match cmd {
        AssetsCmd::List(args) => {
            let rows = service.get_assets().await?;
            render_listing(&rows, &args, ASSET_HEADERS, asset_row);
        }
        AssetsCmd::Show { id } => {
            let asset = service.get_asset(&id).await?;
            println!("{} - {}", asset.symbol, asset.name);
            println!("  currency:   {}", asset.currency);
            println!("  class:      {}", fmt_opt(&asset.asset_class_code));
            println!("  subclass:   {}", fmt_opt(&asset.asset_sub_class_code));
            println!("  exchange:   {}", fmt_opt(&asset.exchange_code));
            println!("  isin:       {}", fmt_opt(&asset.isin));
            println!("  figi:       {}", fmt_opt(&asset.figi));
            println!("  cusip:      {}", fmt_opt(&asset.cusip));
            if asset.issuer.is_some() || asset.maturity_date.is_some() {
                println!("  issuer:     {}", fmt_opt(&asset.issuer));
                println!("  maturity:   {}", fmt_opt_date(&asset.maturity_date));
                println!("  underlying: {}", fmt_opt(&asset.underlying_symbol));
            }
        }
        AssetsCmd::Add {
            symbol,
            currency,
            fields,
        } => {
            let parsed = parse_asset_fields(&fields)?;
            let created = service
                .create_asset(NewAsset {
                    symbol,
                    name: fields.name,
                    isin: fields.isin,
                    figi: fields.figi,
                    cusip: fields.cusip,
                    asset_class_code: fields.asset_class_code,
                    asset_sub_class_code: fields.asset_sub_class_code,
                    currency,
                    exchange_code: fields.exchange_code,
                    notes: fields.notes,
                    issuer: fields.issuer,
                    maturity_date: parsed.maturity_date,
                    coupon_rate: parsed.coupon_rate,
                    barrier_level: parsed.barrier_level,
                    protection_level: parsed.protection_level,
                    underlying_symbol: fields.underlying_symbol,
                })
                .await?;
            println!("Created asset '{}' ({})", created.symbol, created.id);
        }
        AssetsCmd::Edit { id, fields } => {
            let parsed = parse_asset_fields(&fields)?;
            let updated = service
                .update_asset(
                    &id,
                    AssetUpdate {
                        name: fields.name,
                        isin: fields.isin,
                        figi: fields.figi,
                        cusip: fields.cusip,
                        asset_class_code: fields.asset_class_code,
                        asset_sub_class_code: fields.asset_sub_class_code,
                        exchange_code: fields.exchange_code,
                        notes: fields.notes,
                        issuer: fields.issuer,
                        maturity_date: parsed.maturity_date,
                        coupon_rate: parsed.coupon_rate,
                        barrier_level: parsed.barrier_level,
                        protection_level: parsed.protection_level,
                        underlying_symbol: fields.underlying_symbol,
                    },
                )
                .await?;
            println!("Updated asset '{}'", updated.symbol);
        }
        AssetsCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete asset '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_asset(&args.id).await?;
            println!("Deleted asset '{}'", args.id);
            let rows = service.get_assets().await?;
            render_listing(&rows, &ListArgs::default(), ASSET_HEADERS, asset_row);
        }
    }
    Ok(())
}
