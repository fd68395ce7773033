mod errors;
mod storage;
mod types;

pub use errors::OfferError;
pub(crate) use storage::OfferStore;
pub use types::{
    ActionStatus, LegacyStatus, NewOffer, Offer, OfferStatus, OfferStatuses, RecruitmentStatus,
};

pub(crate) async fn init() -> Result<(), OfferError> {
    OfferStore::init().await
}
