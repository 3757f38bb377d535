//! Still-frame and clip export driven by the compositor.
//!
//! Two operations share one in-flight gate: a still export composites one
//! frame and encodes it, a clip export runs a wall-clock-capped recording
//! session fed by the repaint-driven [`Exporter::tick`]. Starting anything
//! while a clip export is active is rejected as a no-op — never queued,
//! never interrupted.

use dashview_common::{ExportDefaults, RateController};
use dashview_footage_model::{CameraMap, ViewType};
use dashview_playback_core::time_model::absolute_time_label;
use dashview_playback_core::{segment_and_offset_for, CameraPlayer, ClipViewer};
use serde::{Deserialize, Serialize};

use crate::compositor::render_frame;
use crate::overlay::Overlay;
use crate::surface::{DownloadSink, DrawSurface, FrameSource, MediaRecorder, SurfaceProvider};

/// A recording container candidate: MIME type plus the file extension it
/// downloads under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerFormat {
    pub mime: &'static str,
    pub extension: &'static str,
}

/// Recording containers in preference order. H.264-in-MP4 first, a generic
/// WebM container as the unconditional fallback.
pub const CONTAINER_CANDIDATES: [ContainerFormat; 4] = [
    ContainerFormat {
        mime: "video/mp4;codecs=H264",
        extension: "mp4",
    },
    ContainerFormat {
        mime: "video/mp4",
        extension: "mp4",
    },
    ContainerFormat {
        mime: "video/webm;codecs=vp9",
        extension: "webm",
    },
    ContainerFormat {
        mime: "video/webm",
        extension: "webm",
    },
];

/// Pick the first container the recorder supports. Negotiation failure is
/// not fatal: the last candidate is used unconditionally.
pub fn negotiate_container(recorder: &dyn MediaRecorder) -> ContainerFormat {
    for candidate in CONTAINER_CANDIDATES {
        if recorder.supports(candidate.mime) {
            tracing::debug!(mime = candidate.mime, "Recording container negotiated");
            return candidate;
        }
    }

    let fallback = CONTAINER_CANDIDATES[CONTAINER_CANDIDATES.len() - 1];
    tracing::warn!(
        mime = fallback.mime,
        "No supported recording container; using fallback"
    );
    fallback
}

/// Export canvas size for a layout: 1280x960 for the grid, 1280x720 for a
/// single camera.
pub fn export_dimensions(view: ViewType) -> (u32, u32) {
    match view.camera() {
        None => (1280, 960),
        Some(_) => (1280, 720),
    }
}

/// Tunables for the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Compositing/recording frame rate for clip export.
    pub record_fps: u32,

    /// JPEG quality for still export, in `[0.0, 1.0]`.
    pub still_quality: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            record_fps: 30,
            still_quality: 0.92,
        }
    }
}

impl From<&ExportDefaults> for ExportSettings {
    fn from(defaults: &ExportDefaults) -> Self {
        Self {
            record_fps: defaults.record_fps,
            still_quality: defaults.still_quality,
        }
    }
}

/// Drives still and clip exports. At most one clip-recording session is in
/// flight at a time; it owns its offscreen surface and recorder and tears
/// both down when it completes.
pub struct Exporter {
    settings: ExportSettings,
    session: Option<RecordingSession>,
}

impl Exporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExportSettings::default())
    }

    /// Whether a clip export is currently in flight.
    pub fn is_exporting(&self) -> bool {
        self.session.is_some()
    }

    /// Composite one frame and download it as a JPEG still named
    /// `<clip-name>-<view>.jpg`.
    ///
    /// Silently does nothing while a clip export is active, when no drawing
    /// context can be obtained, or when encoding produces no data.
    pub fn export_frame(
        &self,
        provider: &dyn SurfaceProvider,
        sink: &mut dyn DownloadSink,
        view: ViewType,
        sources: &CameraMap<&dyn FrameSource>,
        overlay: &Overlay,
        clip_name: &str,
    ) {
        if self.is_exporting() {
            tracing::debug!("Still export skipped: clip export in flight");
            return;
        }

        let (width, height) = export_dimensions(view);
        let Some(mut surface) = provider.create(width, height) else {
            tracing::warn!(width, height, "Still export skipped: no drawing context");
            return;
        };

        render_frame(surface.as_mut(), width, height, view, sources, overlay);

        let Some(bytes) = surface.encode_jpeg(self.settings.still_quality) else {
            tracing::warn!("Still export skipped: encoding failed");
            return;
        };
        if bytes.is_empty() {
            tracing::warn!("Still export skipped: empty encoding");
            return;
        }

        let filename = format!("{clip_name}-{}.jpg", view.as_str());
        tracing::info!(filename = %filename, bytes = bytes.len(), "Still exported");
        sink.save(&filename, "image/jpeg", bytes);
    }

    /// Begin a clip export: resolve the start point, position all four
    /// cameras on it immediately, pin the overlay timestamp and the
    /// duration cap, and open the recording session.
    ///
    /// Returns whether a session started. A no-op if one is already in
    /// flight, nothing is exportable, or the platform provides no surface.
    pub fn begin_clip_export<P: CameraPlayer>(
        &mut self,
        viewer: &mut ClipViewer<P>,
        provider: &dyn SurfaceProvider,
        mut recorder: Box<dyn MediaRecorder>,
        view: ViewType,
        now_secs: f64,
    ) -> bool {
        if self.is_exporting() {
            tracing::debug!("Clip export rejected: one already in flight");
            return false;
        }

        let played = viewer.played_secs();
        let limit_secs = viewer.range().exportable_secs(played);
        if limit_secs <= 0.0 {
            return false;
        }

        // The marked in-point when a valid selection exists, else the
        // playhead; positioned immediately so recording starts exactly on
        // the requested frame.
        let start_secs = viewer.range().export_start(played);
        let Some(start) = segment_and_offset_for(viewer.footage(), start_secs) else {
            return false;
        };
        viewer.force_seek(start);

        let Some(segment) = viewer.footage().segment(start.index) else {
            return false;
        };
        // Pinned to the export's starting instant; the location label does
        // not change with playback.
        let overlay = Overlay::new(
            absolute_time_label(segment, start.seconds),
            viewer.location_label(),
        );

        let (width, height) = export_dimensions(view);
        let Some(surface) = provider.create(width, height) else {
            tracing::warn!(width, height, "Clip export aborted: no drawing context");
            return false;
        };

        let container = negotiate_container(recorder.as_ref());
        if let Err(e) = recorder.start(container.mime, self.settings.record_fps) {
            tracing::warn!(error = %e, mime = container.mime, "Clip export aborted: recorder failed to start");
            return false;
        }

        let filename = format!("{}-{}.{}", viewer.clip().name, view.as_str(), container.extension);
        tracing::info!(
            filename = %filename,
            start_secs,
            limit_secs,
            fps = self.settings.record_fps,
            "Clip export started"
        );

        self.session = Some(RecordingSession {
            surface,
            recorder,
            container,
            view,
            overlay,
            filename,
            width,
            height,
            cadence: RateController::new(self.settings.record_fps),
            started_secs: now_secs,
            limit_secs,
            frames_drawn: 0,
        });
        true
    }

    /// Advance the in-flight recording session from a repaint callback.
    /// Composites at most one frame per call, paced to the target rate,
    /// and finalizes the download once wall-clock elapsed time reaches the
    /// cap pinned at start. Returns whether a session is still running.
    pub fn tick(
        &mut self,
        now_secs: f64,
        sources: &CameraMap<&dyn FrameSource>,
        sink: &mut dyn DownloadSink,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        match session.tick(now_secs, sources, sink) {
            SessionTick::Recording => true,
            SessionTick::Finished => {
                self.session = None;
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTick {
    Recording,
    Finished,
}

/// One in-flight clip recording. Owns the offscreen surface and recorder
/// exclusively; the live camera surfaces are read-only inputs supplied per
/// tick.
struct RecordingSession {
    surface: Box<dyn DrawSurface>,
    recorder: Box<dyn MediaRecorder>,
    container: ContainerFormat,
    view: ViewType,
    overlay: Overlay,
    filename: String,
    width: u32,
    height: u32,
    cadence: RateController,
    started_secs: f64,
    /// Exportable seconds computed once at start and held fixed.
    limit_secs: f64,
    frames_drawn: u64,
}

impl RecordingSession {
    fn tick(
        &mut self,
        now_secs: f64,
        sources: &CameraMap<&dyn FrameSource>,
        sink: &mut dyn DownloadSink,
    ) -> SessionTick {
        let elapsed = now_secs - self.started_secs;
        if elapsed < self.limit_secs {
            if self.cadence.should_tick(now_secs) {
                render_frame(
                    self.surface.as_mut(),
                    self.width,
                    self.height,
                    self.view,
                    sources,
                    &self.overlay,
                );
                self.recorder.capture_frame(self.surface.as_ref());
                self.frames_drawn += 1;
            }
            return SessionTick::Recording;
        }

        let bytes = self.recorder.stop();
        if bytes.is_empty() {
            tracing::warn!(filename = %self.filename, "Recording produced no data");
        } else {
            tracing::info!(
                filename = %self.filename,
                frames = self.frames_drawn,
                elapsed_secs = elapsed,
                bytes = bytes.len(),
                "Clip export finished"
            );
            sink.save(&self.filename, self.container.mime, bytes);
        }
        SessionTick::Finished
    }
}
