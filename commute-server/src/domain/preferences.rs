//! Rider commute preferences.

use serde::{Deserialize, Deserializer, Serialize};

/// A rider's stored configuration controlling travel mode and planning.
///
/// The stored document may carry numbers as strings (`"30"`), so numeric
/// fields accept either form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommutePreferences {
    /// Preferred travel mode as stored, e.g. `"Driving"` or `"Transit"`.
    pub commute_method: String,

    /// Minutes the rider needs to get ready before leaving.
    #[serde(default, deserialize_with = "non_negative_int")]
    pub preparation_time: u32,

    /// How many buses the rider is willing to miss (transit only).
    #[serde(
        rename = "maxMissedBus",
        default,
        deserialize_with = "non_negative_int"
    )]
    pub max_missed_bus: u32,

    #[serde(default)]
    pub notification_preferences: NotificationPreferences,
}

impl CommutePreferences {
    /// Create preferences for a commute method with everything else defaulted.
    pub fn new(commute_method: impl Into<String>) -> Self {
        Self {
            commute_method: commute_method.into(),
            preparation_time: 0,
            max_missed_bus: 0,
            notification_preferences: NotificationPreferences::default(),
        }
    }

    /// Read preferences out of a stored preferences document.
    pub fn from_document(document: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(document)
    }
}

/// Independently toggleable notification flags.
///
/// Flags absent from a stored document default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub morning_alarm: bool,
    pub event_alarm: bool,
    pub event_notification: bool,
    pub traffic_alerts: bool,
    pub weather_alerts: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            morning_alarm: true,
            event_alarm: true,
            event_notification: true,
            traffic_alerts: true,
            weather_alerts: true,
        }
    }
}

fn non_negative_int<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u32),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(|e| {
            serde::de::Error::custom(format!("expected a non-negative integer, got {s:?}: {e}"))
        }),
    }
}
