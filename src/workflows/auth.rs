//! Login and signup, with the client-side checks the forms ran before
//! any request. A successful login persists the session record.

use tracing::info;

use crate::api::auth::{self, SignupRequest};
use crate::config::Config;
use crate::models::{Role, SessionUser};
use crate::session::SessionStore;
use crate::utils::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shape check matching the forms: one `@`, no whitespace, a dotted
/// domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        _ => false,
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::Validation("E-Mail not correct".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    Ok(())
}

/// Logs in and persists the returned session record.
pub async fn login(
    config: &Config,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<SessionUser, AppError> {
    validate_credentials(email, password)?;
    let user = auth::login(config, email, password).await?;
    store.save(&user)?;
    info!(user = %user.id, role = ?user.role, "Logged in");
    Ok(user)
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Creates an account. Admins are provisioned elsewhere; the form only
/// offers attendee and organizer.
pub async fn signup(config: &Config, form: &SignupForm) -> Result<(), AppError> {
    validate_credentials(&form.email, &form.password)?;
    if form.password != form.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if form.role == Role::Admin {
        return Err(AppError::Validation(
            "Role must be attendee or organizer".to_string(),
        ));
    }
    let request = SignupRequest {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        role: form.role,
    };
    auth::signup(config, &request).await?;
    info!(email = %form.email, "Account created");
    Ok(())
}

/// Logout: the stored record is the session's whole lifecycle.
pub fn logout(store: &SessionStore) -> Result<(), AppError> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada bc@example.com"));
        assert!(!is_valid_email("ada@.  "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn short_password_fails_validation() {
        let err = validate_credentials("ada@example.com", "short").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn signup_rejects_mismatched_passwords_before_any_request() {
        // unroutable base url: validation must fail first
        let config = Config::new("http://127.0.0.1:0");
        let form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter23".to_string(),
            role: Role::Attendee,
        };
        let err = signup(&config, &form).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
