//! Clip metadata: the recording's name plus the optional triggering event.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A named recording. One viewing session covers exactly one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Recording name, used in export filenames.
    pub name: String,

    /// The event that triggered this recording, when known.
    pub event: Option<ClipEvent>,
}

/// Metadata about the event that triggered a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipEvent {
    pub city: Option<String>,
    pub street: Option<String>,

    /// Estimated coordinates of the event.
    pub est_lat: Option<f64>,
    pub est_lon: Option<f64>,

    /// Trigger time as recorded (RFC 3339, or bare `YYYY-MM-DDTHH:MM:SS`).
    pub timestamp: String,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event: None,
        }
    }

    /// Location label for the overlay, when the event carries one.
    pub fn location_label(&self) -> Option<String> {
        self.event.as_ref().and_then(ClipEvent::location_label)
    }
}

impl ClipEvent {
    /// Wall-clock trigger time, if the recorded timestamp parses.
    pub fn time(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S").ok()
    }

    /// Human-readable location: street and city when present, otherwise the
    /// estimated coordinates.
    pub fn location_label(&self) -> Option<String> {
        let place: Vec<&str> = [self.street.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if !place.is_empty() {
            return Some(place.join(", "));
        }

        match (self.est_lat, self.est_lon) {
            (Some(lat), Some(lon)) => Some(format!("{lat:.4}, {lon:.4}")),
            _ => None,
        }
    }
}
