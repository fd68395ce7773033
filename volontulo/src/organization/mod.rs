mod errors;
mod storage;
mod types;

pub use errors::OrganizationError;
pub(crate) use storage::{DB_TABLE_ORGANIZATIONS, OrganizationStore};
pub use types::{NewOrganization, Organization};

pub(crate) async fn init() -> Result<(), OrganizationError> {
    OrganizationStore::init().await
}
