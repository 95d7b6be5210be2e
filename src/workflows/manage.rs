//! Organizer event management: list own events, create, edit, cancel.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::lifecycle::EventDraft;
use crate::models::Event;
use crate::utils::error::AppError;

pub fn owned_events(events: Vec<Event>, organizer: Uuid) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| event.organizer == organizer)
        .collect()
}

pub async fn my_events(client: &ApiClient) -> Result<Vec<Event>, AppError> {
    let events = client.list_events().await?;
    Ok(owned_events(events, client.session().id))
}

/// Validates the draft, then persists it. The returned event carries
/// the server-assigned id.
pub async fn create_event(client: &ApiClient, draft: &EventDraft) -> Result<Event, AppError> {
    draft.validate(Utc::now().date_naive())?;
    let event = client.create_event(draft).await?;
    info!(event = %event.id, title = %event.title, "Event created");
    Ok(event)
}

/// Validates and saves an edit, in place, same id.
pub async fn update_event(
    client: &ApiClient,
    id: Uuid,
    draft: &EventDraft,
) -> Result<Event, AppError> {
    draft.validate(Utc::now().date_naive())?;
    let event = client.update_event(id, draft).await?;
    info!(event = %event.id, "Event updated");
    Ok(event)
}

/// Cancels (deletes) an event and drops it from the local list on
/// success. The id was the client's only record of it.
pub async fn cancel_event(
    client: &ApiClient,
    events: &mut Vec<Event>,
    id: Uuid,
) -> Result<(), AppError> {
    client.delete_event(id).await?;
    events.retain(|event| event.id != id);
    info!(event = %id, "Event cancelled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_filters_by_organizer() {
        let organizer = Uuid::new_v4();
        let mine = Event {
            id: Uuid::new_v4(),
            title: "Mine".to_string(),
            description: None,
            date: Utc::now(),
            time: "10:00".to_string(),
            venue: "V".to_string(),
            image: None,
            organizer,
            ticket_types: Vec::new(),
            discount_codes: Vec::new(),
            attendees: Vec::new(),
            feedback: Vec::new(),
        };
        let mut theirs = mine.clone();
        theirs.id = Uuid::new_v4();
        theirs.organizer = Uuid::new_v4();

        let owned = owned_events(vec![mine.clone(), theirs], organizer);
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, mine.id);
    }
}
