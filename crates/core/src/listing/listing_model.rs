//! Models for the shared table pipeline.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_PAGE_SIZE;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

/// Active sort column and direction for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Selecting the already-active column flips its direction; selecting a
    /// new column sorts ascending.
    pub fn toggle(current: Option<&SortConfig>, key: &str) -> SortConfig {
        match current {
            Some(active) if active.key == key => SortConfig {
                key: key.to_string(),
                direction: active.direction.flip(),
            },
            _ => SortConfig::ascending(key),
        }
    }
}

/// A value a row exposes for ordering under some column key.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(Decimal),
    Date(NaiveDate),
}

impl SortValue {
    fn kind_rank(&self) -> u8 {
        match self {
            SortValue::Text(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
        }
    }

    /// Text compares case-insensitively (raw bytes break ties); values of
    /// different kinds order by kind.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// Row contract for the shared table pipeline.
pub trait Listable {
    /// The fixed set of string fields scanned by the free-text filter.
    fn search_values(&self) -> Vec<String>;

    /// Value used when ordering by `key`. `None` sorts last in either
    /// direction.
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}

/// Case-insensitive substring match over the row's search fields.
/// A blank query matches every row.
pub fn matches_query<T: Listable>(row: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    row.search_values()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// View state of one rendered table: filter, sort, and page window.
#[derive(Debug, Clone)]
pub struct ListState {
    pub query: String,
    pub sort: Option<SortConfig>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
            page_size: DISPLAY_PAGE_SIZE,
        }
    }
}

/// The filtered, sorted, windowed slice of a listing, plus its totals.
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub rows: Vec<&'a T>,
    pub total_rows: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Toggle the sort column, resetting to the first page.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = Some(SortConfig::toggle(self.sort.as_ref(), key));
        self.page = 1;
    }

    /// Run the full pipeline over rows already fetched into memory.
    pub fn apply<'a, T: Listable>(&self, rows: &'a [T]) -> ListView<'a, T> {
        let mut filtered: Vec<&T> = rows
            .iter()
            .filter(|row| matches_query(*row, &self.query))
            .collect();

        if let Some(sort) = &self.sort {
            let descending = sort.direction.is_descending();
            filtered.sort_by(|a, b| {
                match (a.sort_value(&sort.key), b.sort_value(&sort.key)) {
                    (Some(x), Some(y)) => {
                        let ord = x.compare(&y);
                        if descending {
                            ord.reverse()
                        } else {
                            ord
                        }
                    }
                    // Rows without a value stay at the bottom in either
                    // direction.
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }

        let total_rows = filtered.len();
        let page_size = self.page_size.max(1);
        let total_pages = total_rows.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let start = (page - 1) * page_size;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        ListView {
            rows,
            total_rows,
            page,
            total_pages,
        }
    }
}
