mod session;

pub(crate) use session::create_new_session_with_uid;
pub use session::{
    get_session_id_from_headers, get_user_from_session, is_authenticated, prepare_logout_response,
};
