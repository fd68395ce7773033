//! Offer deletion is reserved to administrators

use crate::common::{MockBrowser, OfferFixtures, TestServer, TestUsers};
use reqwest::StatusCode;
use serial_test::serial;

async fn setup() -> (TestServer, MockBrowser, OfferFixtures) {
    let server = TestServer::start().await.expect("Failed to start server");
    let browser = MockBrowser::new(&server.base_url);
    let fixtures = OfferFixtures::create().await;
    (server, browser, fixtures)
}

fn delete_path(offer_id: i64) -> String {
    format!("/offers/delete/{offer_id}")
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_for_anonymous_user() {
    let (server, browser, fixtures) = setup().await;

    for offer in [&fixtures.inactive_offer, &fixtures.active_offer] {
        let response = browser.get(&delete_path(offer.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(OfferFixtures::offer_exists(offer.id).await);
    }

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_for_volunteer() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::VOLUNTEER;
    browser.login_ok(email, password).await;

    for offer in [&fixtures.inactive_offer, &fixtures.active_offer] {
        let response = browser.get(&delete_path(offer.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(OfferFixtures::offer_exists(offer.id).await);
    }

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_for_organization() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::ORGANIZATION;
    browser.login_ok(email, password).await;

    // Representing the owning organization grants nothing here
    let response = browser.get("/me").await.unwrap();
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["role"], "organization");
    assert_eq!(profile["organization_ids"][0], fixtures.organization.id);

    for offer in [&fixtures.inactive_offer, &fixtures.active_offer] {
        let response = browser.get(&delete_path(offer.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(OfferFixtures::offer_exists(offer.id).await);
    }

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_with_unknown_organization_account() {
    let (server, browser, fixtures) = setup().await;

    let response = browser
        .login(TestUsers::MISTYPED_ORGANIZATION, "123org")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!browser.has_session());

    let response = browser
        .get(&delete_path(fixtures.inactive_offer.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(OfferFixtures::offer_exists(fixtures.inactive_offer.id).await);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_for_admin() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::ADMIN;
    browser.login_ok(email, password).await;

    for offer in [&fixtures.inactive_offer, &fixtures.active_offer] {
        let response = browser.get(&delete_path(offer.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get("location").unwrap(),
            volontulo_axum::VOLONTULO_OFFERS_URL.as_str()
        );
        assert!(!OfferFixtures::offer_exists(offer.id).await);
    }

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_of_missing_offer_for_admin() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::ADMIN;
    browser.login_ok(email, password).await;

    let missing = fixtures.inactive_offer.id;
    assert_eq!(
        browser.get(&delete_path(missing)).await.unwrap().status(),
        StatusCode::FOUND
    );
    assert_eq!(
        browser.get(&delete_path(missing)).await.unwrap().status(),
        StatusCode::NOT_FOUND
    );

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_of_missing_offer_for_volunteer_is_forbidden() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::VOLUNTEER;
    browser.login_ok(email, password).await;

    let response = browser.get(&delete_path(i64::MAX)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_revoked_administrator_cannot_delete() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::ADMIN;
    browser.login_ok(email, password).await;

    // Privileges are read from the profile on every request
    let admin = volontulo::get_user_by_email(email).await.unwrap().unwrap();
    volontulo::set_administrator(&admin.id, false).await.unwrap();

    let response = browser
        .get(&delete_path(fixtures.active_offer.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(OfferFixtures::offer_exists(fixtures.active_offer.id).await);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_deletion_after_logout_is_forbidden() {
    let (server, browser, fixtures) = setup().await;
    let (email, password) = TestUsers::ADMIN;
    browser.login_ok(email, password).await;

    let response = browser.get("/logout").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(!browser.has_session());

    let response = browser
        .get(&delete_path(fixtures.inactive_offer.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_non_numeric_offer_id_is_rejected() {
    let (server, browser, fixtures) = setup().await;

    let response = browser.get("/offers/delete/abc").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    fixtures.cleanup().await;
    server.shutdown().await;
}
