use std::sync::LazyLock;

use crate::storage::table_name;

/// Users table name
pub(super) static DB_TABLE_USERS: LazyLock<String> =
    LazyLock::new(|| table_name("DB_TABLE_USERS", "users"));

/// User profiles table name
pub(super) static DB_TABLE_USER_PROFILES: LazyLock<String> =
    LazyLock::new(|| table_name("DB_TABLE_USER_PROFILES", "user_profiles"));

/// Profile to organization join table name
pub(super) static DB_TABLE_USER_PROFILE_ORGANIZATIONS: LazyLock<String> = LazyLock::new(|| {
    table_name(
        "DB_TABLE_USER_PROFILE_ORGANIZATIONS",
        "user_profile_organizations",
    )
});
