//! Tests for the pagination drain.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::errors::{Error, Result};
    use crate::paging::{fetch_all_pages, PageInfo, PageRequest, Paginated, Pager};

    /// Serves `rows` through the `skip`/`limit` contract, counting calls.
    fn page_server(
        rows: Vec<i32>,
        calls: Rc<RefCell<usize>>,
    ) -> impl FnMut(PageRequest) -> std::future::Ready<Result<Vec<i32>>> {
        move |page: PageRequest| {
            *calls.borrow_mut() += 1;
            let start = (page.skip as usize).min(rows.len());
            let end = (start + page.limit as usize).min(rows.len());
            std::future::ready(Ok(rows[start..end].to_vec()))
        }
    }

    // ==================== Drain Termination ====================

    #[tokio::test]
    async fn test_drain_concatenates_pages_in_order() {
        let rows: Vec<i32> = (0..250).collect();
        let calls = Rc::new(RefCell::new(0));

        let all = fetch_all_pages(100, page_server(rows.clone(), calls.clone()))
            .await
            .unwrap();

        assert_eq!(all, rows);
        // 100 + 100 + 50: the short third page ends the drain.
        assert_eq!(*calls.borrow(), 3);
    }

    #[tokio::test]
    async fn test_drain_stops_after_short_page() {
        let calls = Rc::new(RefCell::new(0));

        let all = fetch_all_pages(100, page_server((0..5).collect(), calls.clone()))
            .await
            .unwrap();

        assert_eq!(all.len(), 5);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_drain_exact_multiple_fetches_trailing_empty_page() {
        let calls = Rc::new(RefCell::new(0));

        let all = fetch_all_pages(100, page_server((0..200).collect(), calls.clone()))
            .await
            .unwrap();

        assert_eq!(all.len(), 200);
        // Two full pages prove nothing about exhaustion; the empty third
        // page does, and nothing is requested after it.
        assert_eq!(*calls.borrow(), 3);
    }

    #[tokio::test]
    async fn test_drain_empty_listing() {
        let calls = Rc::new(RefCell::new(0));

        let all = fetch_all_pages(100, page_server(Vec::new(), calls.clone()))
            .await
            .unwrap();

        assert!(all.is_empty());
        assert_eq!(*calls.borrow(), 1);
    }

    // ==================== Safety Guards ====================

    #[tokio::test]
    async fn test_drain_rejects_non_positive_limit() {
        let err = fetch_all_pages(0, |_page| std::future::ready(Ok(vec![1])))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_drain_detects_stuck_pagination() {
        // A backend that ignores `skip` keeps serving the same full page.
        let err = fetch_all_pages(2, |_page| std::future::ready(Ok(vec![7, 8])))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("stuck"));
    }

    #[tokio::test]
    async fn test_drain_enforces_max_pages() {
        let pager = Pager {
            limit: 1,
            max_pages: 3,
        };
        // Distinct full pages forever; only the cap stops the drain.
        let counter = RefCell::new(0);
        let err = pager
            .drain(|_page| {
                *counter.borrow_mut() += 1;
                std::future::ready(Ok(vec![*counter.borrow()]))
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("max pages"));
    }

    #[tokio::test]
    async fn test_drain_propagates_fetch_errors() {
        let err = fetch_all_pages(10, |_page: PageRequest| {
            std::future::ready(Err::<Vec<i32>, _>(Error::Unexpected("boom".to_string())))
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    // ==================== PageRequest ====================

    #[test]
    fn test_page_request_advances_by_received() {
        let page = PageRequest::first(100);
        assert_eq!(page.skip, 0);
        let next = page.next(100);
        assert_eq!(next.skip, 100);
        assert_eq!(next.limit, 100);
    }

    // ==================== Paginated Envelope ====================

    #[test]
    fn test_paginated_envelope_has_more() {
        let page = Paginated {
            data: vec![1, 2],
            pagination: Some(PageInfo {
                total: Some(10),
                has_more: true,
            }),
        };
        assert!(page.has_more());

        let last: Paginated<i32> = Paginated {
            data: vec![3],
            pagination: None,
        };
        assert!(!last.has_more());
    }

    #[test]
    fn test_paginated_envelope_deserializes_without_pagination() {
        let page: Paginated<i32> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert!(!page.has_more());
    }
}
