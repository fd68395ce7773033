use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::errors::OfferError;

/// Declares a status enumeration stored as text.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = OfferError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(OfferError::InvalidStatus(format!("{}={}", $field, other))),
                }
            }
        }
    };
}

text_enum!(
    /// Publication state
    OfferStatus, "offer_status" {
        Unpublished => "unpublished",
        Published => "published",
        Rejected => "rejected",
    }
);

text_enum!(
    /// Whether volunteers are still being recruited
    RecruitmentStatus, "recruitment_status" {
        Open => "open",
        Supplemental => "supplemental",
        Closed => "closed",
    }
);

text_enum!(
    /// Execution state of the volunteering action
    ActionStatus, "action_status" {
        Future => "future",
        Ongoing => "ongoing",
        Finished => "finished",
    }
);

text_enum!(
    /// Single status field predating the three enumerations above
    LegacyStatus, "status_old" {
        New => "NEW",
        Active => "ACTIVE",
        Suspended => "SUSPENDED",
    }
);

/// The four status fields of an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferStatuses {
    pub offer_status: OfferStatus,
    pub recruitment_status: RecruitmentStatus,
    pub action_status: ActionStatus,
    pub status_old: LegacyStatus,
}

impl Default for OfferStatuses {
    fn default() -> Self {
        Self {
            offer_status: OfferStatus::Unpublished,
            recruitment_status: RecruitmentStatus::Open,
            action_status: ActionStatus::Future,
            status_old: LegacyStatus::New,
        }
    }
}

/// Volunteering opportunity owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub organization_id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub time_commitment: String,
    pub benefits: String,
    pub location: String,
    pub time_period: String,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub statuses: OfferStatuses,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an offer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewOffer {
    pub organization_id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub time_commitment: String,
    pub benefits: String,
    pub location: String,
    pub time_period: String,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub statuses: OfferStatuses,
}

/// Offer as stored, with statuses still in text form
#[derive(Debug, Clone, FromRow)]
pub(crate) struct OfferRow {
    pub(crate) id: i64,
    pub(crate) organization_id: i64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) requirements: String,
    pub(crate) time_commitment: String,
    pub(crate) benefits: String,
    pub(crate) location: String,
    pub(crate) time_period: String,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) finished_at: Option<DateTime<Utc>>,
    pub(crate) offer_status: String,
    pub(crate) recruitment_status: String,
    pub(crate) action_status: String,
    pub(crate) status_old: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl TryFrom<OfferRow> for Offer {
    type Error = OfferError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            organization_id: row.organization_id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            time_commitment: row.time_commitment,
            benefits: row.benefits,
            location: row.location,
            time_period: row.time_period,
            started_at: row.started_at,
            finished_at: row.finished_at,
            statuses: OfferStatuses {
                offer_status: row.offer_status.parse()?,
                recruitment_status: row.recruitment_status.parse()?,
                action_status: row.action_status.parse()?,
                status_old: row.status_old.parse()?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(crate) fn rows_into_offers(rows: Vec<OfferRow>) -> Result<Vec<Offer>, OfferError> {
    rows.into_iter().map(Offer::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(status_old: &str) -> OfferRow {
        let now = Utc::now();
        OfferRow {
            id: 1,
            organization_id: 2,
            title: "volontulo offer".to_string(),
            description: String::new(),
            requirements: String::new(),
            time_commitment: String::new(),
            benefits: String::new(),
            location: String::new(),
            time_period: String::new(),
            started_at: None,
            finished_at: None,
            offer_status: "unpublished".to_string(),
            recruitment_status: "closed".to_string(),
            action_status: "ongoing".to_string(),
            status_old: status_old.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_offer_from_row() {
        let offer = Offer::try_from(row("ACTIVE")).expect("valid row");

        assert_eq!(offer.statuses.offer_status, OfferStatus::Unpublished);
        assert_eq!(offer.statuses.recruitment_status, RecruitmentStatus::Closed);
        assert_eq!(offer.statuses.action_status, ActionStatus::Ongoing);
        assert_eq!(offer.statuses.status_old, LegacyStatus::Active);
    }

    #[test]
    fn test_offer_from_row_with_unknown_status() {
        let result = Offer::try_from(row("ARCHIVED"));

        match result {
            Err(OfferError::InvalidStatus(msg)) => assert_eq!(msg, "status_old=ARCHIVED"),
            other => panic!("Expected InvalidStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_status_parsing_is_case_sensitive() {
        assert!("NEW".parse::<LegacyStatus>().is_ok());
        assert!("new".parse::<LegacyStatus>().is_err());
        assert!("Published".parse::<OfferStatus>().is_err());
    }

    #[test]
    fn test_default_statuses() {
        let statuses = OfferStatuses::default();
        assert_eq!(statuses.offer_status, OfferStatus::Unpublished);
        assert_eq!(statuses.recruitment_status, RecruitmentStatus::Open);
        assert_eq!(statuses.action_status, ActionStatus::Future);
        assert_eq!(statuses.status_old, LegacyStatus::New);
    }

    #[test]
    fn test_offer_json_flattens_statuses() {
        let offer = Offer::try_from(row("NEW")).unwrap();
        let json = serde_json::to_value(&offer).unwrap();

        assert_eq!(json["offer_status"], "unpublished");
        assert_eq!(json["status_old"], "NEW");
        assert!(json.get("statuses").is_none());
    }

    proptest! {
        /// Anything outside the known values is rejected
        #[test]
        fn test_unknown_offer_status_rejected(s in "[a-z]{1,12}") {
            prop_assume!(!["unpublished", "published", "rejected"].contains(&s.as_str()));
            prop_assert!(s.parse::<OfferStatus>().is_err());
        }
    }
}
