//! Rendering and input helpers shared by every command.

use std::io::{self, Write};

use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use wealthdesk_core::constants::DISPLAY_DECIMAL_PRECISION;
use wealthdesk_core::errors::{Error, Result};
use wealthdesk_core::listing::Listable;

use crate::cli::ListArgs;

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.iter().map(|h| Cell::new(*h)));
    for row in rows {
        table.add_row(row.into_iter().map(Cell::new));
    }
    table
}

/// Filter, sort, window, and print one table screen.
pub fn render_listing<T, F>(rows: &[T], args: &ListArgs, headers: &[&str], to_row: F)
where
    T: Listable,
    F: Fn(&T) -> Vec<String>,
{
    let state = args.to_state();
    let view = state.apply(rows);
    let table_rows: Vec<Vec<String>> = view.rows.iter().map(|row| to_row(row)).collect();
    println!("{}", pretty_table(headers, table_rows));
    println!(
        "Page {} of {} ({} rows)",
        view.page, view.total_pages, view.total_rows
    );
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    Ok(s.parse::<Decimal>()?)
}

pub fn fmt_money(value: &Decimal) -> String {
    value.round_dp(DISPLAY_DECIMAL_PRECISION).to_string()
}

pub fn fmt_pct(value: &Decimal) -> String {
    format!("{}%", value.round_dp(DISPLAY_DECIMAL_PRECISION))
}

pub fn fmt_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

pub fn fmt_opt_pct(value: &Option<Decimal>) -> String {
    value.map(|v| fmt_pct(&v)).unwrap_or_else(|| "-".to_string())
}

pub fn fmt_opt_date(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Ask for explicit confirmation on the terminal. Only `y`/`yes` confirms.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| Error::Unexpected(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| Error::Unexpected(e.to_string()))?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fmt_money_rounds_to_display_precision() {
        assert_eq!(fmt_money(&dec!(1234.5678)), "1234.57");
    }

    #[test]
    fn test_fmt_pct_appends_sign() {
        assert_eq!(fmt_pct(&dec!(8.125)), "8.13%");
    }

    #[test]
    fn test_fmt_opt_renders_dash_for_none() {
        assert_eq!(fmt_opt(&None), "-");
        assert_eq!(fmt_opt(&Some("XNYS".to_string())), "XNYS");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2025-02-14").is_ok());
        assert!(parse_date("14/02/2025").is_err());
    }
}
