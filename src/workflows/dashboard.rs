use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::booking::{booked_event_ids, explore_events, ExploreFilter};
use crate::models::{Event, Notification, User};
use crate::utils::error::AppError;

const DASHBOARD_ITEMS: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Next few bookable events (organizer exists, dated in the future).
    pub upcoming: Vec<Event>,
    pub notifications: Vec<Notification>,
    /// Events the session user already holds a ticket for.
    pub booked: HashSet<Uuid>,
}

/// Attendee landing view: three independent fetches joined in
/// parallel. Any one failing fails the whole snapshot.
pub async fn attendee_dashboard(
    client: &ApiClient,
    now: DateTime<Utc>,
) -> Result<DashboardSnapshot, AppError> {
    let (events, users, notifications) = tokio::try_join!(
        client.list_events(),
        client.list_profiles(),
        client.list_notifications(),
    )?;

    let upcoming: Vec<Event> = explore_events(&events, &users, now, &ExploreFilter::default())
        .into_iter()
        .take(DASHBOARD_ITEMS)
        .cloned()
        .collect();
    let booked = booked_event_ids(&events, client.session().id);

    Ok(DashboardSnapshot {
        upcoming,
        notifications: authored_notifications(notifications, &users)
            .into_iter()
            .take(DASHBOARD_ITEMS)
            .collect(),
        booked,
    })
}

/// Notifications whose author still exists in the fetched user list;
/// the same orphan guard the event list applies.
fn authored_notifications(notifications: Vec<Notification>, users: &[User]) -> Vec<Notification> {
    notifications
        .into_iter()
        .filter(|notif| users.iter().any(|user| user.id == notif.user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: Uuid) -> User {
        User {
            id,
            first_name: "Org".to_string(),
            last_name: "Anizer".to_string(),
            email: "org@example.com".to_string(),
            phone: None,
            role: Role::Organizer,
        }
    }

    fn notification(author: Uuid, message: &str) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: author,
            message: message.to_string(),
            email: "org@example.com".to_string(),
        }
    }

    #[test]
    fn notifications_from_deleted_authors_are_dropped() {
        let alive = Uuid::new_v4();
        let deleted = Uuid::new_v4();
        let notifications = vec![
            notification(alive, "Doors open at 6"),
            notification(deleted, "Stale"),
            notification(alive, "Bring a friend"),
        ];

        let kept = authored_notifications(notifications, &[user(alive)]);
        let messages: Vec<&str> = kept.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Doors open at 6", "Bring a friend"]);
    }

    #[test]
    fn no_users_means_no_notifications() {
        let kept = authored_notifications(vec![notification(Uuid::new_v4(), "Hi")], &[]);
        assert!(kept.is_empty());
    }
}
