//! Calendar events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event the rider commutes to.
///
/// `address` is the destination handed to the mapping service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub address: String,

    /// Set by the store once a chat room exists for the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_chat: Option<bool>,
}

impl Event {
    /// Create an event without a chat room.
    pub fn new(
        event_name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            start,
            end,
            address: address.into(),
            has_chat: None,
        }
    }
}
