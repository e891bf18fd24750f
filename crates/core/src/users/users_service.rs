//! User and role service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{
    EntityType, NewRole, NewUser, Role, RoleUpdate, User, UserApiTrait, UserServiceTrait,
    UserUpdate,
};

/// Service for users and roles.
pub struct UserService {
    api: Arc<dyn UserApiTrait>,
    pager: Pager,
}

impl UserService {
    pub fn new(api: Arc<dyn UserApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn UserApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> Result<Vec<User>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_users(page)).await
    }

    async fn get_advisors(&self) -> Result<Vec<User>> {
        let users = self.get_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.entity_type == EntityType::Advisor)
            .collect())
    }

    async fn create_user(&self, draft: NewUser) -> Result<User> {
        draft.validate()?;
        debug!("Creating user {}", draft.email);
        self.api.create_user(draft).await
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User> {
        update.validate()?;
        debug!("Updating user {}", id);
        self.api.update_user(id, update).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        debug!("Deleting user {}", id);
        self.api.delete_user(id).await
    }

    async fn get_roles(&self) -> Result<Vec<Role>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_roles(page)).await
    }

    async fn create_role(&self, draft: NewRole) -> Result<Role> {
        draft.validate()?;
        debug!("Creating role {}", draft.name);
        self.api.create_role(draft).await
    }

    async fn update_role(&self, id: &str, update: RoleUpdate) -> Result<Role> {
        update.validate()?;
        debug!("Updating role {}", id);
        self.api.update_role(id, update).await
    }

    async fn delete_role(&self, id: &str) -> Result<()> {
        debug!("Deleting role {}", id);
        self.api.delete_role(id).await
    }
}
