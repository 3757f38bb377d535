//! A contiguous chunk of four-camera footage.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Format of the timestamp-encoded segment name, e.g. `2024-03-18_14-05-33`.
pub const SEGMENT_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// One time-bounded chunk of the clip, with a source URL per camera.
///
/// Immutable once loaded. `start_secs` positions the segment on the clip
/// timeline; the segment's length is derived from the next segment's start
/// (or the clip duration for the last one), see
/// [`Footage::segment_len`](crate::footage::Footage::segment_len).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Timestamp-encoded identifier (recording wall-clock start).
    pub name: String,

    /// Offset of this segment's start within the clip timeline, in seconds.
    pub start_secs: f64,

    /// Per-camera source URLs.
    pub front: String,
    pub back: String,
    pub left: String,
    pub right: String,
}

impl Segment {
    /// Source URL for one camera.
    pub fn camera_url(&self, camera: Camera) -> &str {
        match camera {
            Camera::Front => &self.front,
            Camera::Back => &self.back,
            Camera::Left => &self.left,
            Camera::Right => &self.right,
        }
    }

    /// Wall-clock start time decoded from the segment name.
    /// `None` if the name does not follow the encoded format.
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.name, SEGMENT_NAME_FORMAT).ok()
    }

    /// Wall-clock time at `offset_secs` into this segment.
    pub fn absolute_time(&self, offset_secs: f64) -> Option<NaiveDateTime> {
        let start = self.start_time()?;
        let offset_ms = (offset_secs * 1000.0).round() as i64;
        Some(start + Duration::milliseconds(offset_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str) -> Segment {
        Segment {
            name: name.to_string(),
            start_secs: 0.0,
            front: "front.mp4".to_string(),
            back: "back.mp4".to_string(),
            left: "left.mp4".to_string(),
            right: "right.mp4".to_string(),
        }
    }

    #[test]
    fn test_camera_url_lookup() {
        let seg = segment("2024-03-18_14-05-33");
        assert_eq!(seg.camera_url(Camera::Front), "front.mp4");
        assert_eq!(seg.camera_url(Camera::Right), "right.mp4");
    }

    #[test]
    fn test_start_time_parses_encoded_name() {
        let seg = segment("2024-03-18_14-05-33");
        let start = seg.start_time().unwrap();
        assert_eq!(start.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-18 14:05:33");
    }

    #[test]
    fn test_start_time_rejects_malformed_name() {
        assert!(segment("not-a-timestamp").start_time().is_none());
    }

    #[test]
    fn test_absolute_time_adds_offset() {
        let seg = segment("2024-03-18_14-05-33");
        let at = seg.absolute_time(27.0).unwrap();
        assert_eq!(at.format("%H:%M:%S").to_string(), "14:06:00");
    }
}
