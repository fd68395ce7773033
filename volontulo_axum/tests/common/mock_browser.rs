use reqwest::{Client, Response, StatusCode, header};
use std::sync::Mutex;

const SESSION_COOKIE_NAME: &str = "volontulo_session";

/// Mock browser client for integration testing
///
/// Redirects are not followed so tests can assert on 302 responses. The
/// session cookie is kept by hand: it is picked up from `Set-Cookie` and
/// replayed on every later request. A non-positive Max-Age clears it.
pub struct MockBrowser {
    client: Client,
    base_url: String,
    session_cookie: Mutex<Option<String>>,
}

impl MockBrowser {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            client,
            base_url: base_url.to_string(),
            session_cookie: Mutex::new(None),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.with_cookie(self.client.get(&url));
        let response = request.send().await?;
        self.store_cookie(&response);
        Ok(response)
    }

    pub async fn post_form(
        &self,
        path: &str,
        form_data: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.with_cookie(self.client.post(&url).form(form_data));
        let response = request.send().await?;
        self.store_cookie(&response);
        Ok(response)
    }

    /// Submit the login form, returning the response to `POST /login`
    pub async fn login(&self, email: &str, password: &str) -> Result<Response, reqwest::Error> {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }

    /// Submit the login form and require it to succeed
    pub async fn login_ok(&self, email: &str, password: &str) {
        let response = self.login(email, password).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::FOUND,
            "Login as {email} should redirect"
        );
        assert!(self.has_session(), "Login as {email} should set a session");
    }

    pub fn has_session(&self) -> bool {
        self.session_cookie.lock().unwrap().is_some()
    }

    fn with_cookie(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session_cookie.lock().unwrap().as_ref() {
            Some(value) => request.header(header::COOKIE, format!("{SESSION_COOKIE_NAME}={value}")),
            None => request,
        }
    }

    fn store_cookie(&self, response: &Response) {
        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let Ok(set_cookie) = set_cookie.to_str() else {
                continue;
            };
            let Some((name, value)) = set_cookie
                .split(';')
                .next()
                .and_then(|pair| pair.trim().split_once('='))
            else {
                continue;
            };
            if name != SESSION_COOKIE_NAME {
                continue;
            }

            let expired = set_cookie.split(';').any(|attr| {
                attr.trim()
                    .strip_prefix("Max-Age=")
                    .and_then(|age| age.parse::<i64>().ok())
                    .is_some_and(|age| age <= 0)
            });
            let mut cookie = self.session_cookie.lock().unwrap();
            *cookie = if expired {
                None
            } else {
                Some(value.to_string())
            };
        }
    }
}
