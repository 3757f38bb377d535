//! Seek resolution and once-only application.

use dashview_footage_model::Footage;
use serde::{Deserialize, Serialize};

use crate::time_model::segment_and_offset_for;

/// A resolved clip-relative time: segment index plus offset within it.
/// Transient — consumed exactly once when the seek is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekInfo {
    pub index: usize,
    pub seconds: f64,
}

/// Turns a target clip-time into a segment switch plus a pending per-camera
/// position write.
///
/// The pending seek is held until every camera is mounted on the target
/// segment and ready; it is then consumed exactly once. A newer request
/// supersedes and replaces a pending one — seeks never queue.
#[derive(Debug, Default)]
pub struct SeekCoordinator {
    pending: Option<SeekInfo>,
}

impl SeekCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and record a seek request. Out-of-range targets are silently
    /// ignored and leave any pending seek untouched.
    pub fn request(&mut self, footage: &Footage, target_secs: f64) -> Option<SeekInfo> {
        let info = segment_and_offset_for(footage, target_secs)?;
        tracing::debug!(segment = info.index, offset = info.seconds, "Seek requested");
        self.pending = Some(info);
        Some(info)
    }

    pub fn pending(&self) -> Option<SeekInfo> {
        self.pending
    }

    /// Consume the pending seek if the viewer reports that every camera is
    /// backed by the target segment and ready. Returns the offset to write
    /// to each player. Never yields the same seek twice.
    pub fn take_if_ready(&mut self, ready_for: impl Fn(usize) -> bool) -> Option<SeekInfo> {
        let info = self.pending?;
        if !ready_for(info.index) {
            return None;
        }
        self.pending = None;
        Some(info)
    }

    /// Drop the pending seek (superseded by an immediate export seek).
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
