use std::sync::LazyLock;

use crate::storage::table_name;

/// Organizations table name
pub(crate) static DB_TABLE_ORGANIZATIONS: LazyLock<String> =
    LazyLock::new(|| table_name("DB_TABLE_ORGANIZATIONS", "organizations"));
