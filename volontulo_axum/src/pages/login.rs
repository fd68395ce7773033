use askama::Template;
use axum::{
    Form,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use volontulo::{CoordinationError, login_core};

use super::found;
use crate::config::{VOLONTULO_LOGIN_URL, VOLONTULO_OFFERS_URL};
use crate::error::IntoResponseError;
use crate::session::AuthUser;

#[derive(Template)]
#[template(path = "login.j2", escape = "html")]
struct LoginTemplate<'a> {
    message: &'a str,
    error: &'a str,
    login_url: &'a str,
    register_url: &'a str,
    offers_url: &'a str,
}

fn render_login(error: &str) -> Result<Html<String>, (StatusCode, String)> {
    let template = LoginTemplate {
        message: "Log in to Volontulo",
        error,
        login_url: VOLONTULO_LOGIN_URL.as_str(),
        register_url: "/register",
        offers_url: VOLONTULO_OFFERS_URL.as_str(),
    };
    Ok(Html(template.render().map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?))
}

pub(super) async fn login_page(user: Option<AuthUser>) -> Result<Response, (StatusCode, String)> {
    match user {
        Some(_) => Ok(found(VOLONTULO_OFFERS_URL.as_str())),
        None => Ok(render_login("")?.into_response()),
    }
}

#[derive(Deserialize)]
pub(super) struct LoginForm {
    email: String,
    password: String,
}

/// Log in with email and password.
///
/// Success sets the session cookie and redirects to the offer list. Bad
/// credentials re-render the login page with 200, leaving the visitor anonymous.
pub(super) async fn login_submit(
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    match login_core(&form.email, &form.password).await {
        Ok((user, headers)) => {
            tracing::debug!(user_id = %user.id, "Login succeeded");
            Ok((headers, found(VOLONTULO_OFFERS_URL.as_str())).into_response())
        }
        Err(CoordinationError::Authentication(_)) => {
            Ok(render_login("Invalid email or password")?.into_response())
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_renders_error() {
        let Html(html) = render_login("Invalid email or password").unwrap();
        assert!(html.contains("Invalid email or password"));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"password\""));
    }

    #[test]
    fn test_login_page_escapes_error() {
        let Html(html) = render_login("<script>").unwrap();
        assert!(!html.contains("<script>"));
    }
}
