//! Profile screen: view and edit the session user's own record.

use crate::api::profiles::ProfileUpdate;
use crate::api::ApiClient;
use crate::models::User;
use crate::utils::error::AppError;
use crate::workflows::auth::is_valid_email;

pub async fn my_profile(client: &ApiClient) -> Result<User, AppError> {
    client.get_profile(client.session().id).await
}

pub async fn save_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<(), AppError> {
    if update.first_name.trim().is_empty() || update.last_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Name fields must not be empty".to_string(),
        ));
    }
    if !is_valid_email(&update.email) {
        return Err(AppError::Validation("Email is not valid".to_string()));
    }
    client.update_profile(client.session().id, update).await
}

/// Changes the password after the confirm check; the current password
/// is verified by the server.
pub async fn change_password(
    client: &ApiClient,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), AppError> {
    if new != confirm {
        return Err(AppError::Validation(
            "New password and confirm password do not match".to_string(),
        ));
    }
    if new.len() < super::auth::MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    client.change_password(client.session().id, current, new).await
}
