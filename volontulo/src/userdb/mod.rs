mod errors;
mod password;
mod storage;
mod types;

pub use errors::UserError;
pub(crate) use password::{PASSWORD_MIN_LENGTH, hash_password, verify_password};
pub(crate) use storage::UserStore;
pub use types::{Role, User, UserProfile};
pub(crate) use types::UserSearchField;

pub(crate) async fn init() -> Result<(), UserError> {
    UserStore::init().await
}
