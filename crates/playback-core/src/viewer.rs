//! The per-clip viewing session.
//!
//! `ClipViewer` wires the synchronizer, seek coordinator, and range tracker
//! to the four camera players. Every mutation goes through an explicit
//! sequence — record the report, run the advance transition, then try the
//! pending seek — so segment advances can never fire on a partial round of
//! reports and a pending seek is applied at most once.

use dashview_footage_model::{Camera, CameraMap, Clip, Footage, Segment};

use crate::export_range::ExportRangeTracker;
use crate::keyboard::{command_for_key, KeyCommand};
use crate::player::{CameraPlayer, PlayerState};
use crate::seek::{SeekCoordinator, SeekInfo};
use crate::sync::{SegmentSynchronizer, SyncTransition};
use crate::time_model::{absolute_time_label, event_offset};

/// One viewing session over one clip. Owns all session-scoped state; the
/// clip and footage are read-only for its lifetime.
pub struct ClipViewer<P: CameraPlayer> {
    clip: Clip,
    footage: Footage,
    players: CameraMap<P>,
    sync: SegmentSynchronizer,
    seeks: SeekCoordinator,
    range: ExportRangeTracker,
    playing: bool,
    rate: f64,
}

impl<P: CameraPlayer> ClipViewer<P> {
    pub fn new(clip: Clip, footage: Footage, players: CameraMap<P>) -> Self {
        let sync = SegmentSynchronizer::new(&footage);
        let range = ExportRangeTracker::new(footage.duration_secs);
        Self {
            clip,
            footage,
            players,
            sync,
            seeks: SeekCoordinator::new(),
            range,
            playing: false,
            rate: 1.0,
        }
    }

    pub fn clip(&self) -> &Clip {
        &self.clip
    }

    pub fn footage(&self) -> &Footage {
        &self.footage
    }

    pub fn current_segment_index(&self) -> usize {
        self.sync.current_index()
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.footage.segment(self.sync.current_index())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn ended(&self) -> bool {
        self.sync.ended()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn range(&self) -> &ExportRangeTracker {
        &self.range
    }

    /// Clip-relative played time: the current segment's start plus the
    /// leading camera's progress within it.
    pub fn played_secs(&self) -> f64 {
        match self.current_segment() {
            Some(segment) => segment.start_secs + self.sync.played_secs(),
            None => 0.0,
        }
    }

    /// Display timestamp for the current position.
    pub fn display_label(&self) -> String {
        self.current_segment()
            .map(|segment| absolute_time_label(segment, self.sync.played_secs()))
            .unwrap_or_default()
    }

    /// Location label from the clip's event, if any.
    pub fn location_label(&self) -> Option<String> {
        self.clip.location_label()
    }

    /// Clip-relative offset of the triggering event, if any.
    pub fn event_secs(&self) -> Option<f64> {
        event_offset(&self.clip, &self.footage)
    }

    /// Ingest one camera's state report. This is the single entry point for
    /// player feedback; advance and seek application both hang off it.
    pub fn handle_report(&mut self, camera: Camera, state: PlayerState) {
        self.sync.record_state(camera, state);

        if let SyncTransition::ClipEnded = self.sync.step() {
            self.playing = false;
            for camera in Camera::ALL {
                self.players.get_mut(camera).pause();
            }
        }

        self.apply_pending_seek();
    }

    /// Toggle play/pause on all four cameras.
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
        for camera in Camera::ALL {
            let player = self.players.get_mut(camera);
            if self.playing {
                player.play();
            } else {
                player.pause();
            }
        }
    }

    /// Jump relative to the current position. Forward jumps are suppressed
    /// once the clip has ended.
    pub fn jump(&mut self, delta_secs: f64) {
        if self.sync.ended() && delta_secs > 0.0 {
            return;
        }
        self.seek(self.played_secs() + delta_secs);
    }

    /// Seek to a clip-relative time. Out-of-range requests are silently
    /// ignored. The per-camera position write waits until all four players
    /// report readiness for the target segment.
    pub fn seek(&mut self, target_secs: f64) {
        if let Some(info) = self.seeks.request(&self.footage, target_secs) {
            self.sync.set_index(info.index);
            // A same-segment seek can apply right away.
            self.apply_pending_seek();
        }
    }

    /// Seek all cameras immediately, without waiting for readiness reports.
    /// Clip export must start exactly on the requested frame, so it cannot
    /// ride the reactive path. Supersedes any pending seek.
    pub fn force_seek(&mut self, info: SeekInfo) {
        self.seeks.clear();
        self.sync.set_index(info.index);
        for camera in Camera::ALL {
            self.players.get_mut(camera).set_position(info.seconds);
        }
    }

    /// Reset to segment 0 and resume playback. Always succeeds.
    pub fn replay(&mut self) {
        self.sync.reset();
        self.seeks.clear();
        self.seeks.request(&self.footage, 0.0);
        self.playing = true;
        for camera in Camera::ALL {
            self.players.get_mut(camera).play();
        }
        tracing::debug!("Replay from segment 0");
    }

    /// Set the playback rate on all four cameras.
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
        for camera in Camera::ALL {
            self.players.get_mut(camera).set_rate(rate);
        }
    }

    /// Mark the export in point at the current playhead.
    pub fn mark_in(&mut self) {
        let played = self.played_secs();
        self.range.mark_in(played);
    }

    /// Mark the export out point at the current playhead.
    pub fn mark_out(&mut self) {
        let played = self.played_secs();
        self.range.mark_out(played);
    }

    /// Handle a keyboard event. Returns whether the platform's default
    /// handling must be suppressed.
    pub fn handle_key(&mut self, key: &str, text_input_focused: bool) -> bool {
        let Some(binding) = command_for_key(key, text_input_focused) else {
            return false;
        };

        match binding.command {
            KeyCommand::TogglePlayback => self.toggle_playback(),
            KeyCommand::JumpBack | KeyCommand::JumpForward => {
                if let Some(delta) = binding.command.jump_delta() {
                    self.jump(delta);
                }
            }
        }

        binding.suppress_default
    }

    fn apply_pending_seek(&mut self) {
        let sync = &self.sync;
        let players = &self.players;
        let applied = self.seeks.take_if_ready(|index| {
            index == sync.current_index()
                && Camera::ALL
                    .iter()
                    .all(|&camera| sync.state(camera).is_some_and(|s| s.index == index))
                && players.all(|player| player.is_ready())
        });

        if let Some(info) = applied {
            for camera in Camera::ALL {
                self.players.get_mut(camera).set_position(info.seconds);
            }
            tracing::debug!(segment = info.index, offset = info.seconds, "Seek applied");
        }
    }
}
