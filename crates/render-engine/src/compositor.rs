//! Frame composition: the 2x2 grid or a single full-screen camera, plus
//! the overlay.

use dashview_footage_model::{Camera, CameraMap, ViewType};

use crate::overlay::Overlay;
use crate::surface::{DrawSurface, FrameSource, Rect, Rgba};

/// Quadrant placement for the grid layout: front top-left, left
/// bottom-left, back top-right, right bottom-right, each exactly one
/// quarter of the canvas.
pub fn grid_layout(width: u32, height: u32) -> [(Camera, Rect); 4] {
    let (w, h) = (width as f64 / 2.0, height as f64 / 2.0);
    [
        (Camera::Front, Rect::new(0.0, 0.0, w, h)),
        (Camera::Left, Rect::new(0.0, h, w, h)),
        (Camera::Back, Rect::new(w, 0.0, w, h)),
        (Camera::Right, Rect::new(w, h, w, h)),
    ]
}

/// Composite one frame: black background, then the camera content for the
/// requested layout, then the overlay on top.
///
/// A source that is not yet decodable is skipped silently — the background
/// shows through rather than a stale or broken frame.
pub fn render_frame(
    surface: &mut dyn DrawSurface,
    width: u32,
    height: u32,
    view: ViewType,
    sources: &CameraMap<&dyn FrameSource>,
    overlay: &Overlay,
) {
    surface.fill(Rgba::BLACK);

    match view.camera() {
        None => {
            for (camera, rect) in grid_layout(width, height) {
                let source = *sources.get(camera);
                if source.is_decodable() {
                    surface.blit(source, rect);
                }
            }
        }
        Some(camera) => {
            let source = *sources.get(camera);
            if source.is_decodable() {
                surface.blit(source, Rect::new(0.0, 0.0, width as f64, height as f64));
            }
        }
    }

    overlay.draw(surface);
}

#[cfg(test)]
mod tests {
    use crate::surface::TextStyle;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill(Rgba),
        RoundedRect(Rect),
        Blit(Rect),
        Text(String),
    }

    struct FakeSurface {
        width: u32,
        height: u32,
        ops: Vec<Op>,
    }

    impl FakeSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: vec![],
            }
        }

        fn blits(&self) -> Vec<Rect> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Blit(rect) => Some(*rect),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for FakeSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn fill(&mut self, color: Rgba) {
            self.ops.push(Op::Fill(color));
        }

        fn fill_rounded_rect(&mut self, rect: Rect, _radius: f64, _color: Rgba) {
            self.ops.push(Op::RoundedRect(rect));
        }

        fn blit(&mut self, _source: &dyn FrameSource, dest: Rect) {
            self.ops.push(Op::Blit(dest));
        }

        fn draw_text(&mut self, text: &str, _x: f64, _y: f64, _style: TextStyle) {
            self.ops.push(Op::Text(text.to_string()));
        }

        fn encode_jpeg(&self, _quality: f64) -> Option<Vec<u8>> {
            Some(vec![0xff, 0xd8])
        }
    }

    struct FakeFrame {
        decodable: bool,
    }

    impl FrameSource for FakeFrame {
        fn is_decodable(&self) -> bool {
            self.decodable
        }
    }

    fn sources(frames: &CameraMap<FakeFrame>) -> CameraMap<&dyn FrameSource> {
        frames.map(|_, frame| frame as &dyn FrameSource)
    }

    fn overlay() -> Overlay {
        Overlay::new("Mon, 18 Mar 2024, 2:05:33 PM", Some("Prinsengracht, Amsterdam".into()))
    }

    #[test]
    fn test_grid_layout_quadrants() {
        let layout = grid_layout(1280, 960);
        assert_eq!(layout[0], (Camera::Front, Rect::new(0.0, 0.0, 640.0, 480.0)));
        assert_eq!(layout[1], (Camera::Left, Rect::new(0.0, 480.0, 640.0, 480.0)));
        assert_eq!(layout[2], (Camera::Back, Rect::new(640.0, 0.0, 640.0, 480.0)));
        assert_eq!(layout[3], (Camera::Right, Rect::new(640.0, 480.0, 640.0, 480.0)));
    }

    #[test]
    fn test_grid_draws_all_four_quadrants() {
        let mut surface = FakeSurface::new(1280, 960);
        let frames = CameraMap::build(|_| FakeFrame { decodable: true });

        render_frame(&mut surface, 1280, 960, ViewType::Grid, &sources(&frames), &overlay());

        let expected: Vec<Rect> = grid_layout(1280, 960).iter().map(|(_, r)| *r).collect();
        assert_eq!(surface.blits(), expected);
        assert_eq!(surface.ops[0], Op::Fill(Rgba::BLACK));
    }

    #[test]
    fn test_undecodable_source_is_skipped() {
        let mut surface = FakeSurface::new(1280, 960);
        let mut frames = CameraMap::build(|_| FakeFrame { decodable: true });
        frames.front.decodable = false;

        render_frame(&mut surface, 1280, 960, ViewType::Grid, &sources(&frames), &overlay());

        let blits = surface.blits();
        assert_eq!(blits.len(), 3);
        // The front quadrant (top-left) stays background.
        assert!(!blits.contains(&Rect::new(0.0, 0.0, 640.0, 480.0)));
    }

    #[test]
    fn test_single_view_fills_the_canvas() {
        let mut surface = FakeSurface::new(1280, 720);
        let frames = CameraMap::build(|_| FakeFrame { decodable: true });

        render_frame(&mut surface, 1280, 720, ViewType::Back, &sources(&frames), &overlay());

        assert_eq!(surface.blits(), vec![Rect::new(0.0, 0.0, 1280.0, 720.0)]);
    }

    #[test]
    fn test_overlay_is_drawn_last() {
        let mut surface = FakeSurface::new(1280, 720);
        let frames = CameraMap::build(|_| FakeFrame { decodable: true });

        render_frame(&mut surface, 1280, 720, ViewType::Front, &sources(&frames), &overlay());

        let last_two: Vec<&Op> = surface.ops.iter().rev().take(2).collect();
        assert_eq!(last_two[0], &Op::Text("Prinsengracht, Amsterdam".to_string()));
        assert_eq!(last_two[1], &Op::Text("Mon, 18 Mar 2024, 2:05:33 PM".to_string()));
        // The overlay box sits between the blit and the text.
        assert!(surface.ops.iter().any(|op| matches!(op, Op::RoundedRect(_))));
    }
}
