//! User and role endpoints: `/api/v1/users`, `/api/v1/roles`.

use async_trait::async_trait;

use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::users::{
    NewRole, NewUser, Role, RoleUpdate, User, UserApiTrait, UserUpdate,
};
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl UserApiTrait for ApiClient {
    async fn list_users(&self, page: PageRequest) -> Result<Vec<User>> {
        self.get_with_query("/users", &Self::paged_query(page))
            .await
    }

    async fn create_user(&self, draft: NewUser) -> Result<User> {
        self.post("/users", &draft).await
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User> {
        self.put(&format!("/users/{}", id), &update).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(&format!("/users/{}", id)).await
    }

    async fn list_roles(&self, page: PageRequest) -> Result<Vec<Role>> {
        self.get_with_query("/roles", &Self::paged_query(page))
            .await
    }

    async fn create_role(&self, draft: NewRole) -> Result<Role> {
        self.post("/roles", &draft).await
    }

    async fn update_role(&self, id: &str, update: RoleUpdate) -> Result<Role> {
        self.put(&format!("/roles/{}", id), &update).await
    }

    async fn delete_role(&self, id: &str) -> Result<()> {
        self.delete(&format!("/roles/{}", id)).await
    }
}
