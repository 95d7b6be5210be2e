use reqwest::multipart::{Form, Part};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{into_result, ApiClient};
use crate::lifecycle::EventDraft;
use crate::models::Event;
use crate::utils::error::AppError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingRequest<'a> {
    event_id: Uuid,
    attendee: Uuid,
    ticket_type: &'a str,
    discount_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingReceipt {
    final_price: Decimal,
}

#[derive(Serialize)]
struct FeedbackRequest<'a> {
    attendee: Uuid,
    rating: u8,
    comment: &'a str,
}

impl ApiClient {
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        let response = self.request(Method::GET, "/user/events").send().await?;
        Ok(into_result(response).await?.json().await?)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Event, AppError> {
        let response = self
            .request(Method::GET, &format!("/user/events/{id}"))
            .send()
            .await?;
        Ok(into_result(response).await?.json().await?)
    }

    /// Creates an event from a validated draft. The backend assigns the
    /// id; the returned event is the persisted record.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, AppError> {
        let form = self.event_form(draft)?;
        let response = self
            .request(Method::POST, "/user/events")
            .multipart(form)
            .send()
            .await?;
        Ok(into_result(response).await?.json().await?)
    }

    /// Edits an event in place, same id.
    pub async fn update_event(&self, id: Uuid, draft: &EventDraft) -> Result<Event, AppError> {
        let form = self.event_form(draft)?;
        let response = self
            .request(Method::PUT, &format!("/user/events/{id}"))
            .multipart(form)
            .send()
            .await?;
        Ok(into_result(response).await?.json().await?)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/user/events/{id}"))
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }

    /// Books one ticket for the session user and returns the
    /// server-computed final price. The server is the sole arbiter of
    /// duplicates; no idempotency key is sent.
    pub async fn book_ticket(
        &self,
        event_id: Uuid,
        ticket_type: &str,
        discount_code: &str,
    ) -> Result<Decimal, AppError> {
        let body = BookingRequest {
            event_id,
            attendee: self.session().id,
            ticket_type,
            discount_code,
        };
        let response = self
            .request(Method::POST, &format!("/user/events/{event_id}/book"))
            .json(&body)
            .send()
            .await?;
        let receipt: BookingReceipt = into_result(response).await?.json().await?;
        Ok(receipt.final_price)
    }

    pub async fn submit_feedback(
        &self,
        event_id: Uuid,
        rating: u8,
        comment: &str,
    ) -> Result<(), AppError> {
        let body = FeedbackRequest {
            attendee: self.session().id,
            rating,
            comment,
        };
        let response = self
            .request(Method::POST, &format!("/user/events/{event_id}/feedback"))
            .json(&body)
            .send()
            .await?;
        into_result(response).await?;
        Ok(())
    }

    // Multipart shape the backend expects for create and update: scalar
    // fields as text parts, ticket types and discount codes as embedded
    // JSON, the image as a file part when present.
    fn event_form(&self, draft: &EventDraft) -> Result<Form, AppError> {
        let mut form = Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone())
            .text("date", draft.date.format("%Y-%m-%d").to_string())
            .text("time", draft.time.clone())
            .text("venue", draft.venue.clone())
            .text("ticketTypes", serde_json::to_string(&draft.ticket_types)?)
            .text(
                "discountCodes",
                serde_json::to_string(&draft.discount_codes)?,
            )
            .text("organizer", self.session().id.to_string());

        if let Some(image) = &draft.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}
