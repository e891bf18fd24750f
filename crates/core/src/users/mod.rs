//! Users module - user and role models, services, and traits.

mod users_model;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_model_tests;

#[cfg(test)]
mod users_service_tests;

// Re-export the public interface
pub use users_model::{EntityType, NewRole, NewUser, Role, RoleUpdate, User, UserUpdate};
pub use users_service::UserService;
pub use users_traits::{UserApiTrait, UserServiceTrait};
