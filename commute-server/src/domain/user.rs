//! Stored users and their day schedules.

use serde::{Deserialize, Serialize};

use super::Event;

/// A stored user.
///
/// `preferences` is kept as a raw document so partial updates can merge
/// into it without knowing every key. Use
/// [`CommutePreferences::from_document`](super::CommutePreferences::from_document)
/// to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,

    #[serde(default = "empty_document")]
    pub preferences: serde_json::Value,

    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub day_schedule: Vec<ScheduleEntry>,
}

impl User {
    /// Create a user with no preferences, events or schedule.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            preferences: empty_document(),
            events: Vec::new(),
            day_schedule: Vec::new(),
        }
    }

    /// Find an event by name.
    pub fn event(&self, event_name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.event_name == event_name)
    }
}

/// One entry of a user's day schedule: an event and the route chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub event: String,
    pub route: serde_json::Value,
}

fn empty_document() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_user_payload() {
        let user: User = serde_json::from_value(json!({ "username": "user@gmail.com" })).unwrap();

        assert_eq!(user.username, "user@gmail.com");
        assert_eq!(user.preferences, json!({}));
        assert!(user.events.is_empty());
        assert!(user.day_schedule.is_empty());
    }

    #[test]
    fn day_schedule_uses_camel_case() {
        let mut user = User::new("a@b.c");
        user.day_schedule.push(ScheduleEntry {
            event: "event1".into(),
            route: json!("route 1"),
        });

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["daySchedule"][0]["event"], json!("event1"));
        assert_eq!(value["daySchedule"][0]["route"], json!("route 1"));
    }

    #[test]
    fn finds_event_by_name() {
        let user: User = serde_json::from_value(json!({
            "username": "a@b.c",
            "events": [{
                "eventName": "CPEN442 Meeting",
                "start": "2023-11-30T10:00:00Z",
                "end": "2023-11-30T12:00:00Z",
                "address": "6200 University Blvd, Vancouver",
            }],
        }))
        .unwrap();

        assert!(user.event("CPEN442 Meeting").is_some());
        assert!(user.event("cpen442 meeting").is_none());
    }
}
