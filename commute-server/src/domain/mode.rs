//! Travel mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A travel mode understood by the mapping service.
///
/// Riders store their preferred mode as a free-form `commute_method`
/// string; [`TravelMode::from_commute_method`] is the only way in.
///
/// # Examples
///
/// ```
/// use commute_server::domain::TravelMode;
///
/// assert_eq!(TravelMode::from_commute_method("Transit"), Some(TravelMode::Transit));
/// assert_eq!(TravelMode::from_commute_method("driving"), Some(TravelMode::Driving));
/// assert_eq!(TravelMode::from_commute_method("Hovercraft"), None);
/// assert_eq!(TravelMode::Transit.as_str(), "transit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Transit,
    Walking,
    Bicycling,
}

impl TravelMode {
    /// All modes, in the order they are tried when comparing modes.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Transit,
        TravelMode::Walking,
        TravelMode::Bicycling,
    ];

    /// Map a stored commute method to a travel mode.
    ///
    /// Accepts the capitalised names clients store (`"Driving"`) and the
    /// lowercase wire names (`"driving"`). Anything else is unrecognized.
    pub fn from_commute_method(method: &str) -> Option<Self> {
        match method {
            "Driving" | "driving" => Some(TravelMode::Driving),
            "Transit" | "transit" => Some(TravelMode::Transit),
            "Walking" | "walking" => Some(TravelMode::Walking),
            "Bicycling" | "bicycling" => Some(TravelMode::Bicycling),
            _ => None,
        }
    }

    /// The mapping service's `mode` parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
        }
    }

    /// Whether the mapping service reports scheduled arrival times for this mode.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, TravelMode::Transit)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
