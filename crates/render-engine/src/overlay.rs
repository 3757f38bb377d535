//! The timestamp/location overlay burned into rendered output.
//!
//! The overlay's values are captured by the caller at a known instant and
//! passed into every render call, so a still or a recording freezes its
//! text to the export's starting moment instead of drifting with live
//! state.

use crate::surface::{DrawSurface, Rect, Rgba, TextStyle};

const BOX_MARGIN: f64 = 16.0;
const BOX_PADDING: f64 = 12.0;
const BOX_RADIUS: f64 = 8.0;
const BOX_COLOR: Rgba = Rgba::new(0, 0, 0, 0.6);

const TIMESTAMP_SIZE: f64 = 28.0;
const LOCATION_SIZE: f64 = 16.0;
const LINE_GAP: f64 = 6.0;
const LOCATION_COLOR: Rgba = Rgba::new(210, 210, 210, 1.0);

// Rough advance width per glyph as a fraction of the font size; the box
// only needs to comfortably cover the text.
const GLYPH_ASPECT: f64 = 0.55;

/// Timestamp and location text rendered over exported frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub timestamp: String,
    pub location: Option<String>,
}

impl Overlay {
    pub fn new(timestamp: impl Into<String>, location: Option<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            location,
        }
    }

    /// Draw the overlay box near the top-left corner. Must be called after
    /// the video content so it always sits on top.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let timestamp_width = text_width(&self.timestamp, TIMESTAMP_SIZE);
        let location_width = self
            .location
            .as_deref()
            .map(|loc| text_width(loc, LOCATION_SIZE))
            .unwrap_or(0.0);

        let box_w = timestamp_width.max(location_width) + 2.0 * BOX_PADDING;
        let mut box_h = 2.0 * BOX_PADDING + TIMESTAMP_SIZE;
        if self.location.is_some() {
            box_h += LINE_GAP + LOCATION_SIZE;
        }

        surface.fill_rounded_rect(
            Rect::new(BOX_MARGIN, BOX_MARGIN, box_w, box_h),
            BOX_RADIUS,
            BOX_COLOR,
        );

        let text_x = BOX_MARGIN + BOX_PADDING;
        let timestamp_baseline = BOX_MARGIN + BOX_PADDING + TIMESTAMP_SIZE;
        surface.draw_text(
            &self.timestamp,
            text_x,
            timestamp_baseline,
            TextStyle {
                size_px: TIMESTAMP_SIZE,
                color: Rgba::WHITE,
            },
        );

        if let Some(location) = &self.location {
            surface.draw_text(
                location,
                text_x,
                timestamp_baseline + LINE_GAP + LOCATION_SIZE,
                TextStyle {
                    size_px: LOCATION_SIZE,
                    color: LOCATION_COLOR,
                },
            );
        }
    }
}

fn text_width(text: &str, size_px: f64) -> f64 {
    text.chars().count() as f64 * size_px * GLYPH_ASPECT
}
