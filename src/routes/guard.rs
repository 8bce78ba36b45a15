//! Route guard.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of the session snapshot, the route's access
//! policy and the attempted location:
//!
//! | loading | user               | policy        | decision          |
//! |---------|--------------------|---------------|-------------------|
//! | true    | any                | any           | `Wait`            |
//! | false   | none               | any           | `RedirectToLogin` |
//! | false   | present            | Authenticated | `Render`          |
//! | false   | present, not admin | Admin         | `RedirectHome`    |
//! | false   | present, admin     | Admin         | `Render`          |
//!
//! A protected view is never rendered while `loading` is set, so a slow
//! identity check cannot bounce a signed-in visitor to the login page.
//!
//! Return paths travel as `/login?from=<path>` and are only honoured when
//! they point back into the app.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::route::query_param;
use crate::net::encode;
use crate::net::types::{Session, UserSummary};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const ADMIN_PATH: &str = "/admin";
const FROM_PARAM: &str = "from";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity check still running; show a waiting state only.
    Wait,
    Render,
    RedirectToLogin { from: String },
    /// Signed in but not an admin. No message is shown.
    RedirectHome,
}

#[must_use]
pub fn decide(session: &Session, access: Access, location: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Wait;
    }
    match (&session.user, access) {
        (None, _) => GuardDecision::RedirectToLogin { from: location.to_owned() },
        (Some(user), Access::Admin) if !user.is_admin => GuardDecision::RedirectHome,
        (Some(_), _) => GuardDecision::Render,
    }
}

/// Where a redirecting decision sends the browser.
#[must_use]
pub fn redirect_target(decision: &GuardDecision) -> Option<String> {
    match decision {
        GuardDecision::RedirectToLogin { from } => Some(login_redirect_path(from)),
        GuardDecision::RedirectHome => Some(HOME_PATH.to_owned()),
        GuardDecision::Wait | GuardDecision::Render => None,
    }
}

/// `/login?from=<encoded>`; plain `/login` when there is nothing to remember.
#[must_use]
pub fn login_redirect_path(from: &str) -> String {
    match sanitize_return_path(from) {
        Some(from) => format!("{LOGIN_PATH}{}", encode::query_string(&[(FROM_PARAM, from)])),
        None => LOGIN_PATH.to_owned(),
    }
}

/// Accept only same-app paths: a single leading `/`, no backslashes, no
/// control characters, and not the auth pages themselves.
#[must_use]
pub fn sanitize_return_path(raw: &str) -> Option<String> {
    let path = raw.trim();
    let internal = path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control);
    if !internal {
        return None;
    }
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    if bare == "/" || bare == LOGIN_PATH || bare == "/register" {
        return None;
    }
    Some(path.to_owned())
}

/// The remembered `from` in a login page's query string, if it is safe.
#[must_use]
pub fn return_path_from_query(query: &str) -> Option<String> {
    query_param(query, FROM_PARAM).and_then(|from| sanitize_return_path(&from))
}

/// After login: the remembered location, else `/admin` for admins, else `/`.
#[must_use]
pub fn post_login_destination(user: &UserSummary, remembered: Option<&str>) -> String {
    if let Some(path) = remembered.and_then(sanitize_return_path) {
        return path;
    }
    if user.is_admin { ADMIN_PATH.to_owned() } else { HOME_PATH.to_owned() }
}
