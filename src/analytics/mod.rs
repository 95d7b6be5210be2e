//! Organizer analytics: join each event with its attendee profiles and
//! feedback, compute per-event figures for display and export.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::warn;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::{Event, Feedback, User};
use crate::utils::error::AppError;

/// One event joined with everything the report needs.
#[derive(Debug, Clone)]
pub struct EventAnalytics {
    pub event: Event,
    /// Attendee profiles that resolved, in attendee-list order.
    pub roster: Vec<User>,
    /// Attendee ids whose profile lookup failed (deleted accounts).
    pub skipped: Vec<Uuid>,
    pub average_rating: f64,
}

/// Attendee ids resolved to profiles, with failures kept as typed
/// skips instead of failing the batch.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRoster {
    pub resolved: Vec<User>,
    pub skipped: Vec<Uuid>,
}

/// Arithmetic mean of the ratings, 0 when there is no feedback.
pub fn average_rating(feedback: &[Feedback]) -> f64 {
    if feedback.is_empty() {
        return 0.0;
    }
    let total: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    f64::from(total) / feedback.len() as f64
}

/// An event is closed once its date is strictly in the past. Display
/// only; closed events still aggregate.
pub fn is_closed(event: &Event, now: DateTime<Utc>) -> bool {
    event.date < now
}

/// Tickets-sold figure used by the report: sum of each ticket type's
/// `remaining` count, missing values as 0. The backend tracks sales in
/// that field despite the name.
pub fn tickets_sold(event: &Event) -> u32 {
    event
        .ticket_types
        .iter()
        .map(|ticket| ticket.remaining_or_zero())
        .sum()
}

/// Resolves every attendee id to a profile concurrently. A lookup that
/// fails drops that attendee into `skipped` rather than failing the
/// whole aggregation; order of the resolved roster follows the input.
pub async fn resolve_attendees(client: &ApiClient, attendees: &[Uuid]) -> ResolvedRoster {
    let lookups = attendees.iter().map(|&id| async move {
        match client.get_profile(id).await {
            Ok(user) => Ok(user),
            Err(err) => {
                warn!(attendee = %id, error = %err, "Dropping unresolvable attendee");
                Err(id)
            }
        }
    });

    let mut roster = ResolvedRoster::default();
    for outcome in join_all(lookups).await {
        match outcome {
            Ok(user) => roster.resolved.push(user),
            Err(id) => roster.skipped.push(id),
        }
    }
    roster
}

async fn aggregate(client: &ApiClient, events: Vec<Event>) -> Vec<EventAnalytics> {
    let joined = events.into_iter().map(|event| async move {
        let roster = resolve_attendees(client, &event.attendees).await;
        let average = average_rating(&event.feedback);
        EventAnalytics {
            average_rating: average,
            roster: roster.resolved,
            skipped: roster.skipped,
            event,
        }
    });
    join_all(joined).await
}

/// Analytics over the events owned by one organizer.
pub async fn organizer_analytics(
    client: &ApiClient,
    organizer: Uuid,
) -> Result<Vec<EventAnalytics>, AppError> {
    let events = client.list_events().await?;
    let owned: Vec<Event> = events
        .into_iter()
        .filter(|event| event.organizer == organizer)
        .collect();
    Ok(aggregate(client, owned).await)
}

/// Unscoped variant for the admin all-events view.
pub async fn all_events_analytics(client: &ApiClient) -> Result<Vec<EventAnalytics>, AppError> {
    let events = client.list_events().await?;
    Ok(aggregate(client, events).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn feedback(rating: u8) -> Feedback {
        Feedback {
            attendee: Uuid::new_v4(),
            rating,
            comment: String::new(),
        }
    }

    #[test]
    fn average_of_known_ratings() {
        let ratings = vec![feedback(4), feedback(5), feedback(3)];
        assert_eq!(average_rating(&ratings), 4.0);
    }

    #[test]
    fn average_of_no_feedback_is_zero_not_nan() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn closed_is_strictly_before_now() {
        let now = Utc::now();
        let mut event = crate::models::Event {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: None,
            date: now - Duration::hours(1),
            time: "10:00".to_string(),
            venue: "V".to_string(),
            image: None,
            organizer: Uuid::new_v4(),
            ticket_types: Vec::new(),
            discount_codes: Vec::new(),
            attendees: Vec::new(),
            feedback: Vec::new(),
        };
        assert!(is_closed(&event, now));
        event.date = now + Duration::hours(1);
        assert!(!is_closed(&event, now));
    }

    #[test]
    fn tickets_sold_defaults_missing_to_zero() {
        use crate::models::TicketType;
        use rust_decimal::Decimal;

        let event = crate::models::Event {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: None,
            date: Utc::now(),
            time: "10:00".to_string(),
            venue: "V".to_string(),
            image: None,
            organizer: Uuid::new_v4(),
            ticket_types: vec![
                TicketType {
                    label: "VIP".to_string(),
                    price: Decimal::new(50, 0),
                    quantity: 10,
                    remaining: Some(4),
                },
                TicketType {
                    label: "Regular".to_string(),
                    price: Decimal::new(20, 0),
                    quantity: 100,
                    remaining: None,
                },
            ],
            discount_codes: Vec::new(),
            attendees: Vec::new(),
            feedback: Vec::new(),
        };
        assert_eq!(tickets_sold(&event), 4);
    }
}
