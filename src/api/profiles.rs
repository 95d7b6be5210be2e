use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{into_result, ApiClient};
use crate::models::User;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    password: &'a str,
    new_password: &'a str,
}

// The single-profile endpoint wraps its payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileEnvelope {
    user_profile: User,
}

impl ApiClient {
    pub async fn list_profiles(&self) -> Result<Vec<User>, AppError> {
        let response = self.request(Method::GET, "/user/profile").send().await?;
        Ok(into_result(response).await?.json().await?)
    }

    pub async fn get_profile(&self, id: Uuid) -> Result<User, AppError> {
        let response = self
            .request(Method::GET, &format!("/user/profile/{id}"))
            .send()
            .await?;
        let envelope: ProfileEnvelope = into_result(response).await?.json().await?;
        Ok(envelope.user_profile)
    }

    pub async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> Result<(), AppError> {
        let response = self
            .request(Method::PUT, &format!("/user/profile/{id}"))
            .json(update)
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }

    pub async fn change_password(
        &self,
        id: Uuid,
        current: &str,
        new: &str,
    ) -> Result<(), AppError> {
        let body = PasswordChange {
            password: current,
            new_password: new,
        };
        let response = self
            .request(Method::PUT, &format!("/user/profile/password/{id}"))
            .json(&body)
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }

    pub async fn delete_profile(&self, id: Uuid) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/user/profile/{id}"))
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }
}
