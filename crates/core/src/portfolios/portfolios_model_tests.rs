//! Tests for portfolio models.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::errors::{Error, ValidationError};
    use crate::portfolios::{NewPortfolio, Portfolio};

    #[test]
    fn test_portfolio_deserializes_with_inception_date() {
        let json = r#"{
            "id": "pf-1",
            "name": "Retirement",
            "owner_user_id": "u-1",
            "currency": "EUR",
            "country_code": "DE",
            "inception_date": "2019-04-01",
            "strategy_code": "GROWTH"
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(
            portfolio.inception_date,
            NaiveDate::from_ymd_opt(2019, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_new_portfolio_requires_inception_date() {
        let draft = NewPortfolio {
            name: "Retirement".to_string(),
            owner_user_id: "u-1".to_string(),
            currency: "EUR".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "inception_date"
        ));
    }

    #[test]
    fn test_new_portfolio_complete_draft_passes() {
        let draft = NewPortfolio {
            name: "Retirement".to_string(),
            owner_user_id: "u-1".to_string(),
            currency: "EUR".to_string(),
            inception_date: NaiveDate::from_ymd_opt(2019, 4, 1),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }
}
