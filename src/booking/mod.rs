//! Ticket booking: which events are offered, which are already booked,
//! and the booking call itself.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::{Event, TicketType, User};
use crate::utils::error::AppError;

/// Message the backend returns for a duplicate booking. Matched by
/// string; there is no structured error code on this endpoint.
pub const ALREADY_ATTENDING_MESSAGE: &str = "You are already attending this event";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Booked, with the server-computed final price (discount applied).
    Booked { final_price: Decimal },
    /// The server refused because this attendee already holds a ticket.
    AlreadyAttending,
}

/// Case-insensitive title search and venue filter, both optional.
#[derive(Debug, Clone, Default)]
pub struct ExploreFilter {
    pub search: String,
    pub venue: String,
}

/// Events open for booking: dated now or later, and owned by an
/// organizer that still exists in the fetched user list (orphaned
/// events of deleted organizers are never offered).
pub fn explore_events<'a>(
    events: &'a [Event],
    users: &[User],
    now: DateTime<Utc>,
    filter: &ExploreFilter,
) -> Vec<&'a Event> {
    let organizer_ids: HashSet<Uuid> = users.iter().map(|u| u.id).collect();
    let search = filter.search.to_lowercase();
    let venue = filter.venue.to_lowercase();

    events
        .iter()
        .filter(|event| {
            organizer_ids.contains(&event.organizer)
                && event.date >= now
                && event.title.to_lowercase().contains(&search)
                && (venue.is_empty() || event.venue.to_lowercase().contains(&venue))
        })
        .collect()
}

/// Ids of events this attendee already holds a ticket for.
pub fn booked_event_ids(events: &[Event], attendee: Uuid) -> HashSet<Uuid> {
    events
        .iter()
        .filter(|event| event.has_attendee(attendee))
        .map(|event| event.id)
        .collect()
}

/// Books one ticket of the given type for the session user.
///
/// A duplicate booking comes back as
/// [`BookingOutcome::AlreadyAttending`]; every other server rejection
/// propagates with the raw server message. A double call issues two
/// requests, the server arbitrates.
pub async fn book_ticket(
    client: &ApiClient,
    event: &Event,
    ticket: &TicketType,
    discount_code: &str,
) -> Result<BookingOutcome, AppError> {
    match client
        .book_ticket(event.id, &ticket.label, discount_code)
        .await
    {
        Ok(final_price) => {
            info!(event = %event.id, ticket = %ticket.label, %final_price, "Ticket booked");
            Ok(BookingOutcome::Booked { final_price })
        }
        Err(err) if err.server_message() == Some(ALREADY_ATTENDING_MESSAGE) => {
            Ok(BookingOutcome::AlreadyAttending)
        }
        Err(err) => Err(err),
    }
}
