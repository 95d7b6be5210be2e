use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event as returned by the events endpoints. Ticket types,
/// discount codes and feedback keep the server's ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// Time of day, "HH:MM" as stored by the backend.
    pub time: String,
    pub venue: String,
    #[serde(default)]
    pub image: Option<String>,
    pub organizer: Uuid,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub discount_codes: Vec<DiscountCode>,
    #[serde(default)]
    pub attendees: Vec<Uuid>,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
}

impl Event {
    pub fn has_attendee(&self, user_id: Uuid) -> bool {
        self.attendees.contains(&user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    /// Label, unique within its event.
    #[serde(rename = "type")]
    pub label: String,
    pub price: Decimal,
    pub quantity: u32,
    /// Missing on the wire for older events; treated as 0.
    #[serde(default)]
    pub remaining: Option<u32>,
}

impl TicketType {
    pub fn remaining_or_zero(&self) -> u32 {
        self.remaining.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub code: String,
    /// Percentage off, 0-100.
    pub discount_percentage: Decimal,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub attendee: Uuid,
    /// 1-5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}
