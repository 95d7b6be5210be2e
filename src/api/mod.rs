//! Authenticated gateway to the Evently REST API.
//!
//! One [`ApiClient`] per logged-in session; every call carries the
//! session's bearer token and a request timeout. Failures are never
//! retried, a rejected call surfaces the server's own message.

pub mod auth;
pub mod events;
pub mod notifications;
pub mod profiles;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::models::SessionUser;
use crate::utils::error::AppError;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionUser,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionUser) -> Result<Self, AppError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_route.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionUser {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.session.token)
    }
}

/// Passes 2xx responses through; anything else becomes
/// [`AppError::Server`] carrying the message the backend put in the
/// body (`message` or `error` field, raw text as fallback).
pub(crate) async fn into_result(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Server {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

fn extract_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| body.to_string())
}
