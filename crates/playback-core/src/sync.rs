//! Segment synchronization across the four cameras.

use dashview_footage_model::{Camera, CameraMap, Footage};

use crate::player::PlayerState;

/// Result of one synchronizer transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTransition {
    /// Nothing changed.
    None,
    /// Every camera finished the previous segment; playback moved to this one.
    Advanced(usize),
    /// Every camera finished the last segment; the clip is over.
    ClipEnded,
}

/// Aggregates per-camera playback reports and owns the current segment
/// index.
///
/// The advance decision is an explicit [`step`](Self::step) invoked after
/// every state mutation, never a side effect of recording a report, so a
/// partial round of reports can never trigger a premature advance.
#[derive(Debug)]
pub struct SegmentSynchronizer {
    current_index: usize,
    last_index: usize,
    states: CameraMap<Option<PlayerState>>,
    ended: bool,
}

impl SegmentSynchronizer {
    pub fn new(footage: &Footage) -> Self {
        Self {
            current_index: 0,
            last_index: footage.last_index().unwrap_or(0),
            states: CameraMap::default(),
            ended: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the last segment has finished on all cameras.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Record one camera's latest report, overwriting the previous one.
    pub fn record_state(&mut self, camera: Camera, state: PlayerState) {
        *self.states.get_mut(camera) = Some(state);
    }

    /// The latest report from one camera, if it has reported at all.
    pub fn state(&self, camera: Camera) -> Option<PlayerState> {
        *self.states.get(camera)
    }

    /// Displayed progress within the current segment: the furthest-advanced
    /// camera defines it. Cameras still reporting another segment are
    /// ignored, and desync between cameras is tolerated by trusting the
    /// leader rather than averaging.
    pub fn played_secs(&self) -> f64 {
        self.states
            .iter()
            .filter_map(|(_, state)| *state)
            .filter(|state| state.index == self.current_index)
            .map(|state| state.current_time)
            .fold(0.0, f64::max)
    }

    /// True iff every camera's report is for the current segment and ended.
    pub fn all_finished_current(&self) -> bool {
        self.states.all(|state| {
            state.is_some_and(|s| s.index == self.current_index && s.ended)
        })
    }

    /// Run the advance transition. Called after every report; advances at
    /// most once per segment because advancing changes the index that
    /// subsequent reports are matched against.
    pub fn step(&mut self) -> SyncTransition {
        if self.ended || !self.all_finished_current() {
            return SyncTransition::None;
        }

        if self.current_index < self.last_index {
            self.current_index += 1;
            tracing::debug!(segment = self.current_index, "Advanced to next segment");
            SyncTransition::Advanced(self.current_index)
        } else {
            self.ended = true;
            tracing::debug!("Clip ended");
            SyncTransition::ClipEnded
        }
    }

    /// Move to an arbitrary segment (seek target). Re-arms an ended clip:
    /// a backward seek out of the ended state must allow playback to
    /// resume.
    pub fn set_index(&mut self, index: usize) {
        self.current_index = index.min(self.last_index);
        self.ended = false;
    }

    /// Back to segment 0 with a clean slate (replay).
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.states = CameraMap::default();
        self.ended = false;
    }
}
