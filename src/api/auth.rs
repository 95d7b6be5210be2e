//! Unauthenticated endpoints: login and signup. These build their own
//! short-lived HTTP client since no session exists yet.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::into_result;
use crate::config::Config;
use crate::models::{Role, SessionUser};
use crate::utils::error::AppError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    user: SessionUser,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn anonymous_client(config: &Config) -> Result<Client, AppError> {
    Ok(Client::builder().timeout(config.request_timeout).build()?)
}

/// Exchanges credentials for the session record (user fields plus
/// bearer token). The caller decides whether to persist it.
pub async fn login(config: &Config, email: &str, password: &str) -> Result<SessionUser, AppError> {
    let http = anonymous_client(config)?;
    let response = http
        .post(format!(
            "{}/user/login",
            config.api_route.trim_end_matches('/')
        ))
        .json(&LoginRequest { email, password })
        .send()
        .await?;
    let envelope: LoginEnvelope = into_result(response).await?.json().await?;
    Ok(envelope.user)
}

pub async fn signup(config: &Config, request: &SignupRequest) -> Result<(), AppError> {
    let http = anonymous_client(config)?;
    let response = http
        .post(format!(
            "{}/user/signup",
            config.api_route.trim_end_matches('/')
        ))
        .json(request)
        .send()
        .await?;
    into_result(response).await?;
    Ok(())
}
