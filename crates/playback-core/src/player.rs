//! Per-camera player contract and reported playback state.

use serde::{Deserialize, Serialize};

/// Playback state reported by one camera's underlying player.
///
/// Reports are pushed into the core whenever the player's position or state
/// changes. A report is only trusted for the segment it names: state from a
/// player still showing the previous segment never counts toward the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Segment index this report refers to.
    pub index: usize,

    /// Position within that segment, in seconds.
    pub current_time: f64,

    /// Whether the player reached the end of its segment source.
    pub ended: bool,
}

impl PlayerState {
    pub fn new(index: usize, current_time: f64, ended: bool) -> Self {
        Self {
            index,
            current_time,
            ended,
        }
    }
}

/// Host-side video element abstraction for a single camera.
///
/// Implementations wrap whatever the embedding platform uses to decode and
/// present a segment's video source. The core drives all four players
/// uniformly through this trait and learns about their progress only via
/// [`PlayerState`] reports.
pub trait CameraPlayer {
    fn play(&mut self);

    fn pause(&mut self);

    fn set_rate(&mut self, rate: f64);

    /// Move the playback position within the currently-mounted segment.
    fn set_position(&mut self, secs: f64);

    /// Whether the player is mounted and backed by its segment's source,
    /// so a position write lands on the right media.
    fn is_ready(&self) -> bool;
}
