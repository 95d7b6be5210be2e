//! Organizer-authored event drafts.
//!
//! A draft is client-only state while the create/edit form is open; it
//! becomes a persisted event once the backend assigns an id. Each form
//! validates its own draft before any network call.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeDraft {
    #[serde(rename = "type")]
    pub label: String,
    pub price: Decimal,
    pub quantity: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCodeDraft {
    pub code: String,
    pub discount_percentage: Decimal,
    pub expiry_date: NaiveDate,
}

/// Image file attached to a draft; sent as a multipart file part.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Time of day, "HH:MM".
    pub time: String,
    pub venue: String,
    pub image: Option<ImageAttachment>,
    pub ticket_types: Vec<TicketTypeDraft>,
    pub discount_codes: Vec<DiscountCodeDraft>,
}

impl EventDraft {
    /// Form validation, run before submission. Rejects empty fields,
    /// an empty ticket or discount list, tickets with
    /// `remaining > quantity`, percentages outside [0,100], and dates
    /// in the past.
    pub fn validate(&self, today: NaiveDate) -> Result<(), AppError> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.time.trim().is_empty()
            || self.venue.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        if self.date < today {
            return Err(AppError::Validation(
                "Event date cannot be before today".to_string(),
            ));
        }
        if self.ticket_types.is_empty() {
            return Err(AppError::Validation(
                "At least one ticket type is required".to_string(),
            ));
        }
        for ticket in &self.ticket_types {
            if ticket.label.trim().is_empty() {
                return Err(AppError::Validation(
                    "Ticket type label must not be empty".to_string(),
                ));
            }
            if ticket.remaining > ticket.quantity {
                return Err(AppError::Validation(format!(
                    "Ticket type '{}' has more remaining than its quantity",
                    ticket.label
                )));
            }
        }
        if self.discount_codes.is_empty() {
            return Err(AppError::Validation(
                "At least one discount code is required".to_string(),
            ));
        }
        for discount in &self.discount_codes {
            if discount.code.trim().is_empty() {
                return Err(AppError::Validation(
                    "Discount code must not be empty".to_string(),
                ));
            }
            let hundred = Decimal::new(100, 0);
            if discount.discount_percentage < Decimal::ZERO
                || discount.discount_percentage > hundred
            {
                return Err(AppError::Validation(format!(
                    "Discount percentage for '{}' must be between 0 and 100",
                    discount.code
                )));
            }
            if discount.expiry_date < today {
                return Err(AppError::Validation(format!(
                    "Discount code '{}' expires in the past",
                    discount.code
                )));
            }
        }
        Ok(())
    }
}
