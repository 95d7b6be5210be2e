//! Organizer notifications screen: list own, publish, cancel.

use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::Notification;
use crate::utils::error::AppError;

pub async fn my_notifications(client: &ApiClient) -> Result<Vec<Notification>, AppError> {
    client.notifications_for(client.session().id).await
}

pub async fn publish(client: &ApiClient, message: &str) -> Result<(), AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation(
            "Notification message must not be empty".to_string(),
        ));
    }
    client.create_notification(message).await?;
    info!("Notification published");
    Ok(())
}

pub async fn cancel(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    client.cancel_notification(id).await?;
    info!(notification = %id, "Notification cancelled");
    Ok(())
}
