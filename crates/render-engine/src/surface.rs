//! Drawing-surface and platform-capability abstractions.
//!
//! The engine never talks to a concrete canvas, encoder, or save dialog.
//! The embedding shell implements these traits over whatever the platform
//! provides; tests implement them over plain vectors.

use dashview_common::DashviewResult;

/// An axis-aligned rectangle in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// A color with 8-bit channels and fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Text rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f64,
    pub color: Rgba,
}

/// A live video surface for one camera.
pub trait FrameSource {
    /// Whether enough data is buffered to draw the current frame. An
    /// undecodable source is skipped rather than drawn stale.
    fn is_decodable(&self) -> bool;
}

/// A 2D drawing surface with blit and text primitives.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill the whole surface with one color.
    fn fill(&mut self, color: Rgba);

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba);

    /// Draw a frame source scaled into `dest`.
    fn blit(&mut self, source: &dyn FrameSource, dest: Rect);

    /// Draw text with its baseline at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    /// Encode the surface contents as JPEG. `None` when the platform
    /// cannot produce an encoding.
    fn encode_jpeg(&self, quality: f64) -> Option<Vec<u8>>;
}

/// Creates offscreen drawing surfaces. Returns `None` when a drawing
/// context cannot be obtained.
pub trait SurfaceProvider {
    fn create(&self, width: u32, height: u32) -> Option<Box<dyn DrawSurface>>;
}

/// Records a fixed-rate feed of composited frames into a video container.
pub trait MediaRecorder {
    /// Whether this recorder can produce the given MIME type.
    fn supports(&self, mime: &str) -> bool;

    /// Open a recording session targeting the given container and rate.
    fn start(&mut self, mime: &str, fps: u32) -> DashviewResult<()>;

    /// Feed one composited frame into the recording.
    fn capture_frame(&mut self, surface: &dyn DrawSurface);

    /// Close the session and assemble the buffered output. An empty
    /// result means the recording produced no usable data.
    fn stop(&mut self) -> Vec<u8>;
}

/// Client-side save trigger: hands a finished file to the user.
pub trait DownloadSink {
    fn save(&mut self, filename: &str, mime: &str, bytes: Vec<u8>);
}
