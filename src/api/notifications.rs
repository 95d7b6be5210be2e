use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

use super::{into_result, ApiClient};
use crate::models::Notification;
use crate::utils::error::AppError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRequest<'a> {
    user_id: Uuid,
    message: &'a str,
    email: &'a str,
}

impl ApiClient {
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let response = self
            .request(Method::GET, "/user/notifications")
            .send()
            .await?;
        Ok(into_result(response).await?.json().await?)
    }

    pub async fn notifications_for(&self, user_id: Uuid) -> Result<Vec<Notification>, AppError> {
        let response = self
            .request(Method::GET, &format!("/user/notifications/{user_id}"))
            .send()
            .await?;
        Ok(into_result(response).await?.json().await?)
    }

    /// Publishes a notification authored by the session user.
    pub async fn create_notification(&self, message: &str) -> Result<(), AppError> {
        let body = NotificationRequest {
            user_id: self.session().id,
            message,
            email: &self.session().email,
        };
        let response = self
            .request(Method::POST, "/user/notifications")
            .json(&body)
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }

    pub async fn cancel_notification(&self, id: Uuid) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/user/notifications/cancel/{id}"))
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }
}
