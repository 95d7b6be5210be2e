//! Client library for the Evently event-ticketing REST API.
//!
//! The backend owns every entity; this crate supplies the typed gateway
//! calls plus the in-memory logic the UI layers on top of them: explore
//! filtering, ticket booking with discount codes, organizer analytics
//! aggregation, report export, and list pagination.

pub mod analytics;
pub mod api;
pub mod booking;
pub mod config;
pub mod lifecycle;
pub mod models;
pub mod report;
pub mod session;
pub mod utils;
pub mod workflows;

pub use api::ApiClient;
pub use config::Config;
pub use session::SessionStore;
pub use utils::error::AppError;
