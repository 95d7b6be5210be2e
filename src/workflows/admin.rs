//! Admin screens: organizer account management and the all-events
//! overview.

use tracing::info;
use uuid::Uuid;

use crate::analytics::{all_events_analytics, EventAnalytics};
use crate::api::ApiClient;
use crate::models::{Role, User};
use crate::utils::error::AppError;

pub fn organizers(users: Vec<User>) -> Vec<User> {
    users
        .into_iter()
        .filter(|user| user.role == Role::Organizer)
        .collect()
}

pub async fn list_organizers(client: &ApiClient) -> Result<Vec<User>, AppError> {
    let users = client.list_profiles().await?;
    Ok(organizers(users))
}

pub async fn delete_organizer(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    client.delete_profile(id).await?;
    info!(organizer = %id, "Organizer deleted");
    Ok(())
}

/// Every event on the platform, aggregated the same way the organizer
/// analytics screen does for its own.
pub async fn all_events_overview(client: &ApiClient) -> Result<Vec<EventAnalytics>, AppError> {
    all_events_analytics(client).await
}
