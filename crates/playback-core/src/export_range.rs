//! In/out marks and the capped exportable duration.

use crate::time_model::zero_based_label;

/// Hard cap on any single export, in seconds.
pub const MAX_EXPORT_SECS: f64 = 60.0;

/// Records optional in/out marks on the clip timeline and derives the
/// exportable duration for the current playhead.
///
/// Marking is independent: out-of-order marking is allowed, and a mark is
/// only ever replaced by re-marking — there is no clear operation. A
/// selection counts only when `out > in`.
#[derive(Debug)]
pub struct ExportRangeTracker {
    duration_secs: f64,
    mark_in: Option<f64>,
    mark_out: Option<f64>,
}

impl ExportRangeTracker {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            mark_in: None,
            mark_out: None,
        }
    }

    /// Record the current playhead as the in point.
    pub fn mark_in(&mut self, played_secs: f64) {
        self.mark_in = Some(played_secs.clamp(0.0, self.duration_secs));
    }

    /// Record the current playhead as the out point.
    pub fn mark_out(&mut self, played_secs: f64) {
        self.mark_out = Some(played_secs.clamp(0.0, self.duration_secs));
    }

    pub fn in_mark(&self) -> Option<f64> {
        self.mark_in
    }

    pub fn out_mark(&self) -> Option<f64> {
        self.mark_out
    }

    /// Whether a usable selection exists (`out > in`, both set).
    pub fn has_selection(&self) -> bool {
        matches!((self.mark_in, self.mark_out), (Some(i), Some(o)) if o > i)
    }

    /// Selected duration: 0 unless both marks are set with `out > in`.
    pub fn selection_secs(&self) -> f64 {
        match (self.mark_in, self.mark_out) {
            (Some(i), Some(o)) if o > i => (o - i).min(self.duration_secs),
            _ => 0.0,
        }
    }

    /// How many seconds an export started now would cover: the selection if
    /// one exists, otherwise playhead-to-end, both capped at
    /// [`MAX_EXPORT_SECS`].
    pub fn exportable_secs(&self, played_secs: f64) -> f64 {
        if self.has_selection() {
            self.selection_secs().min(MAX_EXPORT_SECS)
        } else {
            (self.duration_secs - played_secs).max(0.0).min(MAX_EXPORT_SECS)
        }
    }

    /// Where an export started now would begin: the in point of a valid
    /// selection, else the playhead.
    pub fn export_start(&self, played_secs: f64) -> f64 {
        if self.has_selection() {
            self.mark_in.unwrap_or(played_secs)
        } else {
            played_secs
        }
    }

    /// Display label for a mark: `HH:MM:SS` from a zero origin, or a
    /// placeholder when unset.
    pub fn mark_label(mark: Option<f64>) -> String {
        match mark {
            Some(secs) => zero_based_label(secs),
            None => "--:--:--".to_string(),
        }
    }
}
