//! User and role domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result};
use crate::listing::{Listable, SortValue};

/// Kind of party a user record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    #[default]
    Individual,
    Advisor,
    Institution,
}

/// A back-office user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub entity_type: EntityType,
    pub role_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Data for creating a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub entity_type: EntityType,
    pub role_id: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("email", &self.email)?;
        Ok(())
    }
}

/// Data for updating an existing user (keyed by id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub entity_type: EntityType,
    pub role_id: Option<String>,
    pub is_active: bool,
}

impl Default for UserUpdate {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            entity_type: EntityType::default(),
            role_id: None,
            is_active: true,
        }
    }
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("email", &self.email)?;
        Ok(())
    }
}

/// An access role.
///
/// `users_count` is derived by the backend; the client renders it verbatim
/// and refetches after mutations instead of recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub users_count: i64,
}

/// Data for creating a new role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

impl NewRole {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

/// Data for updating an existing role (keyed by id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: String,
    pub description: Option<String>,
}

impl RoleUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for User {
    fn search_values(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "email" => Some(SortValue::Text(self.email.clone())),
            _ => None,
        }
    }
}

impl Listable for Role {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.name.clone()];
        if let Some(description) = &self.description {
            values.push(description.clone());
        }
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "users_count" => Some(SortValue::Number(self.users_count.into())),
            _ => None,
        }
    }
}
