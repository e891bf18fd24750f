//! Traits for the user/role API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{NewRole, NewUser, Role, RoleUpdate, User, UserUpdate};

/// Gateway trait for user and role REST endpoints.
#[async_trait]
pub trait UserApiTrait: Send + Sync {
    // Users
    async fn list_users(&self, page: PageRequest) -> Result<Vec<User>>;
    async fn create_user(&self, draft: NewUser) -> Result<User>;
    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User>;
    async fn delete_user(&self, id: &str) -> Result<()>;

    // Roles
    async fn list_roles(&self, page: PageRequest) -> Result<Vec<Role>>;
    async fn create_role(&self, draft: NewRole) -> Result<Role>;
    async fn update_role(&self, id: &str, update: RoleUpdate) -> Result<Role>;
    async fn delete_role(&self, id: &str) -> Result<()>;
}

/// Service trait for the admin and advisors screens.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    // Users
    async fn get_users(&self) -> Result<Vec<User>>;
    /// Users with `entity_type == ADVISOR`, filtered client-side from the
    /// drained listing.
    async fn get_advisors(&self) -> Result<Vec<User>>;
    async fn create_user(&self, draft: NewUser) -> Result<User>;
    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User>;
    async fn delete_user(&self, id: &str) -> Result<()>;

    // Roles
    async fn get_roles(&self) -> Result<Vec<Role>>;
    async fn create_role(&self, draft: NewRole) -> Result<Role>;
    async fn update_role(&self, id: &str, update: RoleUpdate) -> Result<Role>;
    async fn delete_role(&self, id: &str) -> Result<()>;
}
