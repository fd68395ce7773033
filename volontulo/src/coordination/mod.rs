//! Coordination module
//!
//! High-level functions combining the stores, sessions and permission checks.
//! This is the main entry point for the web layer.
//!
//! - `auth`: login and volunteer sign-up
//! - `auth_helpers`: role resolution and the administrator check
//! - `offer`: offer operations, including the administrator-only deletion
//! - `organization`: organization management
//! - `user`: user and profile management

mod auth;
mod auth_helpers;
mod errors;
mod offer;
mod organization;
mod user;

pub use auth::{login_core, register_volunteer_core};
pub use auth_helpers::{resolve_role, validate_admin_session};
pub use errors::CoordinationError;
pub use offer::{
    create_offer, delete_offer_core, get_offer, list_offers, list_offers_by_organization,
    update_offer_statuses,
};
pub use organization::{
    create_organization, delete_organization, get_organization, list_organizations,
};
pub use user::{
    add_profile_organization, create_user_with_profile, delete_user, get_all_users, get_profile,
    get_user, get_user_by_email, set_administrator,
};
