#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;

use evently_client::models::{Role, SessionUser};
use evently_client::{ApiClient, Config};

pub fn session_user() -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Attendee,
        token: "test-token".to_string(),
    }
}

pub fn client(base_url: &str, user: SessionUser) -> ApiClient {
    ApiClient::new(&Config::new(base_url), user).expect("client should build")
}

pub fn user_json(id: Uuid, first: &str, last: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "role": role,
    })
}

pub fn event_json(id: Uuid, title: &str, organizer: Uuid, date: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "A fine event",
        "date": date,
        "time": "18:00",
        "venue": "Town Hall",
        "organizer": organizer,
        "ticketTypes": [
            {"type": "Regular", "price": 20.0, "quantity": 100, "remaining": 10}
        ],
        "discountCodes": [
            {"code": "SAVE10", "discountPercentage": 10.0, "expiryDate": "2027-01-01T00:00:00Z"}
        ],
        "attendees": [],
        "feedback": [],
    })
}
