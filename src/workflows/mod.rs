//! Page-level compositions: each module is the logic one screen of the
//! UI ran, expressed over [`crate::api::ApiClient`] and the domain
//! modules. Rendering stays with the caller.

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod manage;
pub mod notifications;
pub mod profile;
