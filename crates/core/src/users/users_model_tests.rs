//! Tests for user and role models including EntityType.

#[cfg(test)]
mod tests {
    use crate::users::{EntityType, NewRole, NewUser, Role, User};

    // ==================== EntityType Serialization ====================

    #[test]
    fn test_entity_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EntityType::Individual).unwrap(),
            "\"INDIVIDUAL\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::Advisor).unwrap(),
            "\"ADVISOR\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::Institution).unwrap(),
            "\"INSTITUTION\""
        );
    }

    #[test]
    fn test_entity_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<EntityType>("\"ADVISOR\"").unwrap(),
            EntityType::Advisor
        );
    }

    #[test]
    fn test_entity_type_default() {
        assert_eq!(EntityType::default(), EntityType::Individual);
    }

    #[test]
    fn test_user_without_entity_type_defaults_to_individual() {
        let json = r#"{
            "id": "u-1",
            "name": "Dana",
            "email": "dana@example.com",
            "role_id": null
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.entity_type, EntityType::Individual);
        assert!(user.is_active);
    }

    // ==================== Role ====================

    #[test]
    fn test_role_users_count_defaults_to_zero() {
        let json = r#"{"id":"r-1","name":"Operations","description":null}"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.users_count, 0);
    }

    // ==================== Draft Validation ====================

    #[test]
    fn test_new_user_requires_name_and_email() {
        assert!(NewUser::default().validate().is_err());

        let draft = NewUser {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_new_role_requires_name() {
        assert!(NewRole::default().validate().is_err());
        let draft = NewRole {
            name: "Operations".to_string(),
            description: None,
        };
        assert!(draft.validate().is_ok());
    }
}
