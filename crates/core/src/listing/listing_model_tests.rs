//! Tests for the shared table pipeline.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::catalogs::Exchange;
    use crate::listing::{
        matches_query, ListState, Listable, SortConfig, SortDirection, SortValue,
    };

    fn exchange(code: &str, name: &str, country: &str) -> Exchange {
        Exchange {
            code: code.to_string(),
            name: name.to_string(),
            country_code: country.to_string(),
            timezone: None,
            operating_mic: None,
        }
    }

    fn sample_exchanges() -> Vec<Exchange> {
        vec![
            exchange("NYSE", "New York Stock Exchange", "US"),
            exchange("LSE", "London Stock Exchange", "GB"),
        ]
    }

    // ==================== Search ====================

    #[test]
    fn test_search_matches_on_symbol_field() {
        let rows = sample_exchanges();
        let mut state = ListState::new();
        state.set_query("NYSE");

        let view = state.apply(&rows);
        assert_eq!(view.total_rows, 1);
        assert_eq!(view.rows[0].code, "NYSE");
    }

    #[test]
    fn test_search_matches_name_substring_across_rows() {
        let rows = sample_exchanges();
        let mut state = ListState::new();
        state.set_query("Stock Exchange");

        let view = state.apply(&rows);
        assert_eq!(view.total_rows, 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = sample_exchanges();
        let mut state = ListState::new();
        state.set_query("nyse");
        assert_eq!(state.apply(&rows).total_rows, 1);

        state.set_query("LONDON stock");
        assert_eq!(state.apply(&rows).total_rows, 1);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let rows = sample_exchanges();
        let state = ListState::new();
        assert_eq!(state.apply(&rows).total_rows, 2);

        let mut padded = ListState::new();
        padded.set_query("   ");
        assert_eq!(padded.apply(&rows).total_rows, 2);
    }

    #[test]
    fn test_search_misses_return_no_rows() {
        let rows = sample_exchanges();
        let mut state = ListState::new();
        state.set_query("Tokyo");
        assert_eq!(state.apply(&rows).total_rows, 0);
    }

    // ==================== Sort Toggling ====================

    #[test]
    fn test_new_sort_key_defaults_to_ascending() {
        let sort = SortConfig::toggle(None, "name");
        assert_eq!(sort.key, "name");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_same_key_flips_direction() {
        let first = SortConfig::toggle(None, "name");
        let second = SortConfig::toggle(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);
        let third = SortConfig::toggle(Some(&second), "name");
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_switching_key_resets_to_ascending() {
        let first = SortConfig::toggle(None, "name");
        let flipped = SortConfig::toggle(Some(&first), "name");
        let switched = SortConfig::toggle(Some(&flipped), "code");
        assert_eq!(switched.key, "code");
        assert_eq!(switched.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_orders_rows_and_reverses() {
        let rows = sample_exchanges();
        let mut state = ListState::new();

        state.toggle_sort("code");
        let view = state.apply(&rows);
        assert_eq!(view.rows[0].code, "LSE");

        state.toggle_sort("code");
        let view = state.apply(&rows);
        assert_eq!(view.rows[0].code, "NYSE");
    }

    struct Row {
        label: String,
        value: Option<SortValue>,
    }

    impl Listable for Row {
        fn search_values(&self) -> Vec<String> {
            vec![self.label.clone()]
        }

        fn sort_value(&self, key: &str) -> Option<SortValue> {
            match key {
                "value" => self.value.clone(),
                _ => None,
            }
        }
    }

    #[test]
    fn test_rows_without_sort_value_stay_last_in_both_directions() {
        let rows = vec![
            Row {
                label: "a".to_string(),
                value: None,
            },
            Row {
                label: "b".to_string(),
                value: Some(SortValue::Number(dec!(2))),
            },
            Row {
                label: "c".to_string(),
                value: Some(SortValue::Number(dec!(1))),
            },
        ];
        let mut state = ListState::new();

        state.toggle_sort("value");
        let view = state.apply(&rows);
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "b", "a"]);

        state.toggle_sort("value");
        let view = state.apply(&rows);
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }

    // ==================== Sort Values ====================

    #[test]
    fn test_text_comparison_ignores_case() {
        let a = SortValue::Text("apple".to_string());
        let b = SortValue::Text("Banana".to_string());
        assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_numeric_comparison_is_not_lexicographic() {
        let nine = SortValue::Number(dec!(9));
        let ten = SortValue::Number(dec!(10));
        assert_eq!(nine.compare(&ten), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_date_comparison() {
        let earlier = SortValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let later = SortValue::Date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(earlier.compare(&later), std::cmp::Ordering::Less);
    }

    // ==================== Paging ====================

    #[test]
    fn test_page_window_and_totals() {
        let rows: Vec<Exchange> = (0..55)
            .map(|i| exchange(&format!("X{:02}", i), &format!("Exchange {}", i), "US"))
            .collect();
        let mut state = ListState::new();
        state.page_size = 25;

        let view = state.apply(&rows);
        assert_eq!(view.rows.len(), 25);
        assert_eq!(view.total_rows, 55);
        assert_eq!(view.total_pages, 3);

        state.page = 3;
        let view = state.apply(&rows);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.page, 3);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let rows = sample_exchanges();
        let mut state = ListState::new();
        state.page = 99;
        let view = state.apply(&rows);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_matches_query_scans_only_declared_fields() {
        let row = exchange("NYSE", "New York Stock Exchange", "US");
        assert!(matches_query(&row, "US"));
        // timezone is not part of the search field set
        let with_tz = Exchange {
            timezone: Some("America/New_York".to_string()),
            ..row
        };
        assert!(!matches_query(&with_tz, "America"));
    }
}
