use chrono::{TimeZone, Utc};
use volontulo::{
    ActionStatus, LegacyStatus, NewOffer, NewOrganization, Offer, OfferStatus, OfferStatuses,
    Organization, RecruitmentStatus, User,
};

/// Fixed accounts used by the integration tests
pub struct TestUsers;

impl TestUsers {
    pub const VOLUNTEER: (&'static str, &'static str) = ("volunteer@example.com", "123volunteer");
    pub const ORGANIZATION: (&'static str, &'static str) = ("organization@example.com", "123org");
    pub const ADMIN: (&'static str, &'static str) = ("admin@example.com", "123admin");
    /// Account name carrying a stray `cls.` prefix; never created
    pub const MISTYPED_ORGANIZATION: &'static str = "cls.organization@example.com";
}

/// One organization with two offers, plus a volunteer, an organization
/// representative and an administrator.
pub struct OfferFixtures {
    pub organization: Organization,
    pub inactive_offer: Offer,
    pub active_offer: Offer,
    pub users: Vec<User>,
}

fn offer_data(organization_id: i64, status_old: LegacyStatus) -> NewOffer {
    NewOffer {
        organization_id,
        title: "volontulo offer".to_string(),
        description: String::new(),
        requirements: String::new(),
        time_commitment: String::new(),
        benefits: String::new(),
        location: String::new(),
        time_period: String::new(),
        started_at: Utc.with_ymd_and_hms(2105, 10, 24, 9, 10, 11).single(),
        finished_at: Utc.with_ymd_and_hms(2105, 11, 28, 12, 13, 14).single(),
        statuses: OfferStatuses {
            offer_status: OfferStatus::Unpublished,
            recruitment_status: RecruitmentStatus::Closed,
            action_status: ActionStatus::Ongoing,
            status_old,
        },
    }
}

/// Remove an account left behind by an earlier test
async fn remove_user(email: &str) {
    if let Some(user) = volontulo::get_user_by_email(email).await.unwrap() {
        volontulo::delete_user(&user.id).await.unwrap();
    }
}

impl OfferFixtures {
    pub async fn create() -> Self {
        let organization = volontulo::create_organization(NewOrganization::default())
            .await
            .expect("Failed to create organization");

        let inactive_offer =
            volontulo::create_offer(offer_data(organization.id, LegacyStatus::New))
                .await
                .expect("Failed to create inactive offer");
        let active_offer =
            volontulo::create_offer(offer_data(organization.id, LegacyStatus::Active))
                .await
                .expect("Failed to create active offer");

        let (volunteer_email, volunteer_password) = TestUsers::VOLUNTEER;
        let (org_email, org_password) = TestUsers::ORGANIZATION;
        let (admin_email, admin_password) = TestUsers::ADMIN;
        for email in [volunteer_email, org_email, admin_email] {
            remove_user(email).await;
        }

        let volunteer = volontulo::create_user_with_profile(volunteer_email, volunteer_password, false)
            .await
            .unwrap();
        let representative = volontulo::create_user_with_profile(org_email, org_password, false)
            .await
            .unwrap();
        volontulo::add_profile_organization(&representative.id, organization.id)
            .await
            .unwrap();
        let admin = volontulo::create_user_with_profile(admin_email, admin_password, true)
            .await
            .unwrap();

        Self {
            organization,
            inactive_offer,
            active_offer,
            users: vec![volunteer, representative, admin],
        }
    }

    pub async fn offer_exists(id: i64) -> bool {
        volontulo::get_offer(id).await.is_ok()
    }

    /// Drop everything created by [`OfferFixtures::create`]
    pub async fn cleanup(self) {
        for user in &self.users {
            let _ = volontulo::delete_user(&user.id).await;
        }
        let _ = volontulo::delete_organization(self.organization.id).await;
    }
}
