//! Tests for the catalog service against a mock API gateway.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::catalogs::{
        AssetClass, AssetClassUpdate, CatalogApiTrait, CatalogService, CatalogServiceTrait,
        Country, CountryUpdate, Currency, CurrencyUpdate, Exchange, ExchangeUpdate, Industry,
        IndustryUpdate, InvestmentStrategy, InvestmentStrategyUpdate, MarketIndex,
        MarketIndexUpdate, NewAssetClass, NewCountry, NewCurrency, NewExchange, NewIndustry,
        NewInvestmentStrategy, NewMarketIndex,
    };
    use crate::errors::{ApiError, Error, Result};
    use crate::paging::{PageRequest, Pager};

    // --- Mock catalog API ---

    #[derive(Clone, Default)]
    struct MockCatalogApi {
        exchanges: Arc<Mutex<Vec<Exchange>>>,
        list_calls: Arc<Mutex<usize>>,
        mutation_calls: Arc<Mutex<usize>>,
    }

    impl MockCatalogApi {
        fn new() -> Self {
            Self::default()
        }

        fn seed_exchanges(&self, count: usize) {
            let mut exchanges = self.exchanges.lock().unwrap();
            for i in 0..count {
                exchanges.push(Exchange {
                    code: format!("X{:04}", i),
                    name: format!("Exchange {}", i),
                    country_code: "US".to_string(),
                    timezone: None,
                    operating_mic: None,
                });
            }
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }

        fn mutation_calls(&self) -> usize {
            *self.mutation_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CatalogApiTrait for MockCatalogApi {
        async fn list_exchanges(&self, page: PageRequest) -> Result<Vec<Exchange>> {
            *self.list_calls.lock().unwrap() += 1;
            let exchanges = self.exchanges.lock().unwrap();
            let start = (page.skip as usize).min(exchanges.len());
            let end = (start + page.limit as usize).min(exchanges.len());
            Ok(exchanges[start..end].to_vec())
        }

        async fn create_exchange(&self, draft: NewExchange) -> Result<Exchange> {
            *self.mutation_calls.lock().unwrap() += 1;
            let exchange = Exchange {
                code: draft.code,
                name: draft.name,
                country_code: draft.country_code,
                timezone: draft.timezone,
                operating_mic: draft.operating_mic,
            };
            self.exchanges.lock().unwrap().push(exchange.clone());
            Ok(exchange)
        }

        async fn update_exchange(&self, code: &str, update: ExchangeUpdate) -> Result<Exchange> {
            *self.mutation_calls.lock().unwrap() += 1;
            let mut exchanges = self.exchanges.lock().unwrap();
            let exchange = exchanges
                .iter_mut()
                .find(|e| e.code == code)
                .ok_or_else(|| Error::Api(ApiError::http(404, "Exchange not found")))?;
            exchange.name = update.name;
            exchange.country_code = update.country_code;
            exchange.timezone = update.timezone;
            exchange.operating_mic = update.operating_mic;
            Ok(exchange.clone())
        }

        async fn delete_exchange(&self, code: &str) -> Result<()> {
            *self.mutation_calls.lock().unwrap() += 1;
            let mut exchanges = self.exchanges.lock().unwrap();
            let before = exchanges.len();
            exchanges.retain(|e| e.code != code);
            if exchanges.len() == before {
                return Err(Error::Api(ApiError::http(404, "Exchange not found")));
            }
            Ok(())
        }

        async fn list_countries(&self, _page: PageRequest) -> Result<Vec<Country>> {
            unimplemented!()
        }

        async fn create_country(&self, _draft: NewCountry) -> Result<Country> {
            unimplemented!()
        }

        async fn update_country(&self, _code: &str, _update: CountryUpdate) -> Result<Country> {
            unimplemented!()
        }

        async fn delete_country(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }

        async fn list_industries(&self, _page: PageRequest) -> Result<Vec<Industry>> {
            unimplemented!()
        }

        async fn create_industry(&self, _draft: NewIndustry) -> Result<Industry> {
            unimplemented!()
        }

        async fn update_industry(&self, _code: &str, _update: IndustryUpdate) -> Result<Industry> {
            unimplemented!()
        }

        async fn delete_industry(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }

        async fn list_indices(&self, _page: PageRequest) -> Result<Vec<MarketIndex>> {
            unimplemented!()
        }

        async fn create_index(&self, _draft: NewMarketIndex) -> Result<MarketIndex> {
            unimplemented!()
        }

        async fn update_index(
            &self,
            _code: &str,
            _update: MarketIndexUpdate,
        ) -> Result<MarketIndex> {
            unimplemented!()
        }

        async fn delete_index(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }

        async fn list_currencies(&self, _page: PageRequest) -> Result<Vec<Currency>> {
            unimplemented!()
        }

        async fn create_currency(&self, _draft: NewCurrency) -> Result<Currency> {
            unimplemented!()
        }

        async fn update_currency(&self, _code: &str, _update: CurrencyUpdate) -> Result<Currency> {
            unimplemented!()
        }

        async fn delete_currency(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }

        async fn list_asset_classes(&self, _page: PageRequest) -> Result<Vec<AssetClass>> {
            unimplemented!()
        }

        async fn create_asset_class(&self, _draft: NewAssetClass) -> Result<AssetClass> {
            unimplemented!()
        }

        async fn update_asset_class(
            &self,
            _code: &str,
            _update: AssetClassUpdate,
        ) -> Result<AssetClass> {
            unimplemented!()
        }

        async fn delete_asset_class(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }

        async fn list_strategies(&self, _page: PageRequest) -> Result<Vec<InvestmentStrategy>> {
            unimplemented!()
        }

        async fn create_strategy(
            &self,
            _draft: NewInvestmentStrategy,
        ) -> Result<InvestmentStrategy> {
            unimplemented!()
        }

        async fn update_strategy(
            &self,
            _code: &str,
            _update: InvestmentStrategyUpdate,
        ) -> Result<InvestmentStrategy> {
            unimplemented!()
        }

        async fn delete_strategy(&self, _code: &str) -> Result<()> {
            unimplemented!()
        }
    }

    fn service_with(api: &MockCatalogApi, limit: i64) -> CatalogService {
        CatalogService::with_pager(Arc::new(api.clone()), Pager::new(limit))
    }

    // ==================== Listing ====================

    #[tokio::test]
    async fn test_get_exchanges_drains_every_page() {
        let api = MockCatalogApi::new();
        api.seed_exchanges(305);
        let service = service_with(&api, 100);

        let exchanges = service.get_exchanges().await.unwrap();

        assert_eq!(exchanges.len(), 305);
        assert_eq!(exchanges[0].code, "X0000");
        assert_eq!(exchanges[304].code, "X0304");
        // 100 + 100 + 100 + 5
        assert_eq!(api.list_calls(), 4);
    }

    // ==================== Mutations ====================

    #[tokio::test]
    async fn test_create_exchange_rejects_blank_draft_without_calling_api() {
        let api = MockCatalogApi::new();
        let service = service_with(&api, 100);

        let err = service
            .create_exchange(NewExchange::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(api.mutation_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_then_refetch_shows_new_exchange() {
        let api = MockCatalogApi::new();
        api.seed_exchanges(2);
        let service = service_with(&api, 100);

        service
            .create_exchange(NewExchange {
                code: "NYSE".to_string(),
                name: "New York Stock Exchange".to_string(),
                country_code: "US".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        // The screen refetches after a mutation rather than patching local
        // state.
        let exchanges = service.get_exchanges().await.unwrap();
        assert_eq!(exchanges.len(), 3);
        assert!(exchanges.iter().any(|e| e.code == "NYSE"));
    }

    #[tokio::test]
    async fn test_update_exchange_validates_before_submitting() {
        let api = MockCatalogApi::new();
        api.seed_exchanges(1);
        let service = service_with(&api, 100);

        let err = service
            .update_exchange("X0000", ExchangeUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(api.mutation_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_refetch_drops_exchange() {
        let api = MockCatalogApi::new();
        api.seed_exchanges(3);
        let service = service_with(&api, 100);

        service.delete_exchange("X0001").await.unwrap();

        let exchanges = service.get_exchanges().await.unwrap();
        assert_eq!(exchanges.len(), 2);
        assert!(!exchanges.iter().any(|e| e.code == "X0001"));
    }

    #[tokio::test]
    async fn test_delete_missing_exchange_surfaces_backend_detail() {
        let api = MockCatalogApi::new();
        let service = service_with(&api, 100);

        let err = service.delete_exchange("NOPE").await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
