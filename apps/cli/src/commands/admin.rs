//! Admin screen: user and role CRUD.

use wealthdesk_core::errors::ValidationError;
use wealthdesk_core::users::{EntityType, NewRole, NewUser, Role, RoleUpdate, User, UserUpdate};
use wealthdesk_core::Result;

use crate::cli::{AdminCmd, ListArgs, RolesCmd, UsersCmd};
use crate::context::AppContext;
use crate::utils::{confirm, fmt_opt, render_listing};

pub async fn handle(ctx: &AppContext, cmd: AdminCmd) -> Result<()> {
    match cmd {
        AdminCmd::Users(cmd) => users(ctx, cmd).await,
        AdminCmd::Roles(cmd) => roles(ctx, cmd).await,
    }
}

pub fn parse_entity_type(entity_type: &str) -> Result<EntityType> {
    match entity_type.to_lowercase().as_str() {
        "individual" => Ok(EntityType::Individual),
        "advisor" => Ok(EntityType::Advisor),
        "institution" => Ok(EntityType::Institution),
        other => Err(ValidationError::InvalidInput(format!(
            "unknown entity type '{}', expected individual, advisor, or institution",
            other
        ))
        .into()),
    }
}

// ==================== Users ====================

pub const USER_HEADERS: &[&str] = &["Id", "Name", "Email", "Type", "Role", "Active"];

pub fn user_row(user: &User) -> Vec<String> {
    vec![
        user.id.clone(),
        user.name.clone(),
        user.email.clone(),
        format!("{:?}", user.entity_type).to_uppercase(),
        fmt_opt(&user.role_id),
        user.is_active.to_string(),
    ]
}

async fn users(ctx: &AppContext, cmd: UsersCmd) -> Result<()> {
    let service = &ctx.user_service;
    match cmd {
        UsersCmd::List(args) => {
            let rows = service.get_users().await?;
            render_listing(&rows, &args, USER_HEADERS, user_row);
        }
        UsersCmd::Add {
            name,
            email,
            entity_type,
            role_id,
        } => {
            let created = service
                .create_user(NewUser {
                    name,
                    email,
                    entity_type: parse_entity_type(&entity_type)?,
                    role_id,
                })
                .await?;
            println!("Created user '{}' ({})", created.email, created.id);
        }
        UsersCmd::Edit {
            id,
            name,
            email,
            entity_type,
            role_id,
            inactive,
        } => {
            let updated = service
                .update_user(
                    &id,
                    UserUpdate {
                        name,
                        email,
                        entity_type: parse_entity_type(&entity_type)?,
                        role_id,
                        is_active: !inactive,
                    },
                )
                .await?;
            println!("Updated user '{}'", updated.id);
        }
        UsersCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete user '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_user(&args.id).await?;
            println!("Deleted user '{}'", args.id);
            let rows = service.get_users().await?;
            render_listing(&rows, &ListArgs::default(), USER_HEADERS, user_row);
        }
    }
    Ok(())
}

// ==================== Roles ====================

const ROLE_HEADERS: &[&str] = &["Id", "Name", "Description", "Users"];

fn role_row(role: &Role) -> Vec<String> {
    vec![
        role.id.clone(),
        role.name.clone(),
        fmt_opt(&role.description),
        role.users_count.to_string(),
    ]
}

async fn roles(ctx: &AppContext, cmd: RolesCmd) -> Result<()> {
    let service = &ctx.user_service;
    match cmd {
        RolesCmd::List(args) => {
            let rows = service.get_roles().await?;
            render_listing(&rows, &args, ROLE_HEADERS, role_row);
        }
        RolesCmd::Add { name, description } => {
            let created = service.create_role(NewRole { name, description }).await?;
            println!("Created role '{}' ({})", created.name, created.id);
        }
        RolesCmd::Edit {
            id,
            name,
            description,
        } => {
            let updated = service
                .update_role(&id, RoleUpdate { name, description })
                .await?;
            println!("Updated role '{}'", updated.name);
        }
        RolesCmd::Rm(args) => {
            if !args.yes && !confirm(&format!("Delete role '{}'?", args.id))? {
                println!("Aborted.");
                return Ok(());
            }
            service.delete_role(&args.id).await?;
            println!("Deleted role '{}'", args.id);
            let rows = service.get_roles().await?;
            render_listing(&rows, &ListArgs::default(), ROLE_HEADERS, role_row);
        }
    }
    Ok(())
}
