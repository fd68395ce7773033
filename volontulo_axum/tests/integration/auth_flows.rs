//! Login, logout, registration and the offer pages

use crate::common::{MockBrowser, OfferFixtures, TestServer, TestUsers};
use reqwest::StatusCode;
use serial_test::serial;

fn unique_email(tag: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{tag}-{timestamp}@example.com")
}

#[tokio::test]
#[serial]
async fn test_login_page_renders_form() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);

    let response = browser.get("/login").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"password\""));

    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_login_success_sets_cookie_and_redirects() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);
    let fixtures = OfferFixtures::create().await;
    let (email, password) = TestUsers::VOLUNTEER;

    let response = browser.login(email, password).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get("location").unwrap(), "/offers");

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("volontulo_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains("Secure"));

    // A logged-in visitor is sent on from the login page
    let response = browser.get("/login").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = browser.get("/me").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["email"], email);
    assert_eq!(profile["role"], "volunteer");
    assert_eq!(profile["is_administrator"], false);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_login_failure_rerenders_form() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);
    let fixtures = OfferFixtures::create().await;
    let (email, _) = TestUsers::ADMIN;

    let response = browser.login(email, "wrong-password").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("set-cookie").is_none());
    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid email or password"));
    assert!(!browser.has_session());

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_me_requires_login() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);

    let response = browser.get("/me").await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/login");

    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_logout_ends_session() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);
    let fixtures = OfferFixtures::create().await;
    let (email, password) = TestUsers::VOLUNTEER;
    browser.login_ok(email, password).await;

    let response = browser.get("/logout").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
    assert!(!browser.has_session());

    let response = browser.get("/me").await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_register_then_login() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);
    let email = unique_email("register");

    let response = browser
        .post_form("/register", &[("email", email.as_str()), ("password", "123volunteer")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get("location").unwrap(), "/login");

    let response = browser
        .post_form("/register", &[("email", email.as_str()), ("password", "123volunteer")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    browser.login_ok(&email, "123volunteer").await;

    let user = volontulo::get_user_by_email(&email).await.unwrap().unwrap();
    volontulo::delete_user(&user.id).await.unwrap();
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_register_rejects_invalid_input() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);

    let email = unique_email("short");
    let response = browser
        .post_form("/register", &[("email", email.as_str()), ("password", "123")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = browser
        .post_form("/register", &[("email", "not-an-email"), ("password", "123volunteer")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_detail() {
    let server = TestServer::start().await.unwrap();
    let browser = MockBrowser::new(&server.base_url);
    let fixtures = OfferFixtures::create().await;

    let path = format!("/offers/{}", fixtures.active_offer.id);
    let response = browser.get(&path).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let offer: serde_json::Value = response.json().await.unwrap();
    assert_eq!(offer["title"], "volontulo offer");
    assert_eq!(offer["status_old"], "ACTIVE");
    assert_eq!(offer["offer_status"], "unpublished");

    let response = browser.get(&format!("/offers/{}", i64::MAX)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    fixtures.cleanup().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial]
async fn test_offer_list_shows_delete_links_to_admin_only() {
    let server = TestServer::start().await.unwrap();
    let fixtures = OfferFixtures::create().await;
    let delete_link = format!("/offers/delete/{}", fixtures.inactive_offer.id);

    let anonymous = MockBrowser::new(&server.base_url);
    let body = anonymous.get("/offers").await.unwrap().text().await.unwrap();
    assert!(body.contains("volontulo offer"));
    assert!(!body.contains(&delete_link));

    let volunteer = MockBrowser::new(&server.base_url);
    let (email, password) = TestUsers::VOLUNTEER;
    volunteer.login_ok(email, password).await;
    let body = volunteer.get("/offers").await.unwrap().text().await.unwrap();
    assert!(!body.contains(&delete_link));

    let admin = MockBrowser::new(&server.base_url);
    let (email, password) = TestUsers::ADMIN;
    admin.login_ok(email, password).await;
    let body = admin.get("/offers").await.unwrap().text().await.unwrap();
    assert!(body.contains(&delete_link));

    fixtures.cleanup().await;
    server.shutdown().await;
}
