//! The attendee's "my events" screen: booked events, tickets, and
//! post-event feedback.

use chrono::{DateTime, NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::{Event, Feedback};
use crate::utils::error::AppError;

/// Events the attendee holds a ticket for.
pub fn attending_events(events: Vec<Event>, attendee: Uuid) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| event.has_attendee(attendee))
        .collect()
}

pub async fn my_events(client: &ApiClient) -> Result<Vec<Event>, AppError> {
    let events = client.list_events().await?;
    Ok(attending_events(events, client.session().id))
}

/// An event has ended once its date plus its "HH:MM" start time is in
/// the past. An unparseable time falls back to the date alone.
pub fn event_has_ended(event: &Event, now: DateTime<Utc>) -> bool {
    match NaiveTime::parse_from_str(&event.time, "%H:%M") {
        Ok(time) => {
            let starts_at = event.date.date_naive().and_time(time).and_utc();
            starts_at < now
        }
        Err(_) => event.date < now,
    }
}

pub fn has_submitted_feedback(event: &Event, attendee: Uuid) -> bool {
    event.feedback.iter().any(|f| f.attendee == attendee)
}

/// Feedback is offered once the event has ended and this attendee has
/// not already left one. One entry per attendee per event is expected;
/// only this gate enforces it client-side.
pub fn can_leave_feedback(event: &Event, attendee: Uuid, now: DateTime<Utc>) -> bool {
    event_has_ended(event, now) && !has_submitted_feedback(event, attendee)
}

/// Submits feedback and mirrors it into the local event so the gate
/// flips without a refetch.
pub async fn leave_feedback(
    client: &ApiClient,
    event: &mut Event,
    rating: u8,
    comment: &str,
) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    client.submit_feedback(event.id, rating, comment).await?;
    info!(event = %event.id, rating, "Feedback submitted");
    event.feedback.push(Feedback {
        attendee: client.session().id,
        rating,
        comment: comment.to_string(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event_at(date: DateTime<Utc>, time: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: None,
            date,
            time: time.to_string(),
            venue: "V".to_string(),
            image: None,
            organizer: Uuid::new_v4(),
            ticket_types: Vec::new(),
            discount_codes: Vec::new(),
            attendees: Vec::new(),
            feedback: Vec::new(),
        }
    }

    #[test]
    fn attending_keeps_only_booked_events() {
        let attendee = Uuid::new_v4();
        let mut booked = event_at(Utc::now(), "10:00");
        booked.attendees.push(attendee);
        let other = event_at(Utc::now(), "10:00");

        let mine = attending_events(vec![booked.clone(), other], attendee);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, booked.id);
    }

    #[test]
    fn ended_considers_time_of_day() {
        let now = Utc::now();
        let past = event_at(now - Duration::days(1), "23:59");
        let future = event_at(now + Duration::days(1), "09:00");
        assert!(event_has_ended(&past, now));
        assert!(!event_has_ended(&future, now));
    }

    #[test]
    fn feedback_gate_needs_ended_event_and_no_prior_entry() {
        let attendee = Uuid::new_v4();
        let now = Utc::now();
        let mut ended = event_at(now - Duration::days(1), "10:00");
        assert!(can_leave_feedback(&ended, attendee, now));

        ended.feedback.push(Feedback {
            attendee,
            rating: 5,
            comment: String::new(),
        });
        assert!(!can_leave_feedback(&ended, attendee, now));

        let upcoming = event_at(now + Duration::days(1), "10:00");
        assert!(!can_leave_feedback(&upcoming, attendee, now));
    }
}
