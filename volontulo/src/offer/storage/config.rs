use std::sync::LazyLock;

use crate::storage::table_name;

/// Offers table name
pub(crate) static DB_TABLE_OFFERS: LazyLock<String> =
    LazyLock::new(|| table_name("DB_TABLE_OFFERS", "offers"));
