//! Tests for the user service against a mock API gateway.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::errors::Result;
    use crate::paging::{PageRequest, Pager};
    use crate::users::{
        EntityType, NewRole, NewUser, Role, RoleUpdate, User, UserApiTrait, UserService,
        UserServiceTrait, UserUpdate,
    };

    // --- Mock user API ---

    #[derive(Clone, Default)]
    struct MockUserApi {
        users: Arc<Mutex<Vec<User>>>,
        mutation_calls: Arc<Mutex<usize>>,
    }

    impl MockUserApi {
        fn new() -> Self {
            Self::default()
        }

        fn add_user(&self, id: &str, name: &str, entity_type: EntityType) {
            self.users.lock().unwrap().push(User {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", id),
                entity_type,
                role_id: None,
                is_active: true,
            });
        }

        fn mutation_calls(&self) -> usize {
            *self.mutation_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl UserApiTrait for MockUserApi {
        async fn list_users(&self, page: PageRequest) -> Result<Vec<User>> {
            let users = self.users.lock().unwrap();
            let start = (page.skip as usize).min(users.len());
            let end = (start + page.limit as usize).min(users.len());
            Ok(users[start..end].to_vec())
        }

        async fn create_user(&self, draft: NewUser) -> Result<User> {
            *self.mutation_calls.lock().unwrap() += 1;
            let user = User {
                id: format!("u-{}", self.users.lock().unwrap().len() + 1),
                name: draft.name,
                email: draft.email,
                entity_type: draft.entity_type,
                role_id: draft.role_id,
                is_active: true,
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update_user(&self, _id: &str, _update: UserUpdate) -> Result<User> {
            unimplemented!()
        }

        async fn delete_user(&self, id: &str) -> Result<()> {
            *self.mutation_calls.lock().unwrap() += 1;
            self.users.lock().unwrap().retain(|u| u.id != id);
            Ok(())
        }

        async fn list_roles(&self, _page: PageRequest) -> Result<Vec<Role>> {
            unimplemented!()
        }

        async fn create_role(&self, _draft: NewRole) -> Result<Role> {
            unimplemented!()
        }

        async fn update_role(&self, _id: &str, _update: RoleUpdate) -> Result<Role> {
            unimplemented!()
        }

        async fn delete_role(&self, _id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    fn service_with(api: &MockUserApi) -> UserService {
        UserService::with_pager(Arc::new(api.clone()), Pager::new(100))
    }

    #[tokio::test]
    async fn test_get_advisors_filters_by_entity_type() {
        let api = MockUserApi::new();
        api.add_user("u-1", "Dana", EntityType::Individual);
        api.add_user("u-2", "Alex", EntityType::Advisor);
        api.add_user("u-3", "Kim", EntityType::Advisor);
        api.add_user("u-4", "ACME Pension", EntityType::Institution);
        let service = service_with(&api);

        let advisors = service.get_advisors().await.unwrap();

        assert_eq!(advisors.len(), 2);
        assert!(advisors
            .iter()
            .all(|u| u.entity_type == EntityType::Advisor));
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank_draft_without_calling_api() {
        let api = MockUserApi::new();
        let service = service_with(&api);

        assert!(service.create_user(NewUser::default()).await.is_err());
        assert_eq!(api.mutation_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_refetch_drops_user() {
        let api = MockUserApi::new();
        api.add_user("u-1", "Dana", EntityType::Individual);
        api.add_user("u-2", "Alex", EntityType::Advisor);
        let service = service_with(&api);

        service.delete_user("u-1").await.unwrap();

        let users = service.get_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u-2");
    }
}
