//! Password login and registration.
//!
//! Validation runs before any request; a failure is an `ApiError::Invalid`
//! whose message is shown as-is. On success the returned user goes straight
//! into the session store.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest, UserSummary};
use crate::state::SessionStore;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns `ApiError::Invalid` when either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ApiError::Invalid("Email and password are required".to_owned()));
        }
        Ok(LoginRequest { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns `ApiError::Invalid` for blank fields or a short password.
    pub fn validate(&self) -> Result<RegisterRequest, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ApiError::Invalid("Name, email and password are required".to_owned()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: self.password.clone() })
    }
}

/// Validate, `POST /auth/login`, and store the user.
///
/// # Errors
///
/// Returns the validation or backend error; the session is untouched.
pub async fn login<A: AuthApi>(form: &LoginForm, api: &A, session: &SessionStore) -> Result<UserSummary, ApiError> {
    let request = form.validate()?;
    let resp = api.login(&request).await.inspect_err(|e| {
        tracing::warn!(error = %e, "login rejected");
    })?;
    session.set_session(resp.user.clone());
    Ok(resp.user)
}

/// Validate, `POST /auth/register`, and store the new user.
///
/// # Errors
///
/// Returns the validation or backend error; the session is untouched.
pub async fn register<A: AuthApi>(
    form: &RegisterForm,
    api: &A,
    session: &SessionStore,
) -> Result<UserSummary, ApiError> {
    let request = form.validate()?;
    let resp = api.register(&request).await.inspect_err(|e| {
        tracing::warn!(error = %e, "registration rejected");
    })?;
    session.set_session(resp.user.clone());
    Ok(resp.user)
}
