//! DashView Render Engine
//!
//! Samples the four live camera surfaces onto a drawing surface and turns
//! the result into exported stills and time-capped video clips.
//!
//! # Pipeline Architecture
//!
//! ```text
//! front ──┐
//! back  ──┤
//! left  ──┼── FrameCompositor (2x2 grid / single camera)
//! right ──┘              │
//!                        ├── Overlay burn (timestamp + location)
//!                        │
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!      JPEG still             MediaRecorder
//!    (one composite)     (wall-clock-capped loop)
//!            │                       │
//!            ▼                       ▼
//!     <clip>-<view>.jpg     <clip>-<view>.mp4/.webm
//! ```
//!
//! The engine owns no platform objects: surfaces, recorders, and the
//! download trigger are supplied by the host through the traits in
//! [`surface`].

pub mod compositor;
pub mod export;
pub mod overlay;
pub mod surface;

pub use export::*;
pub use overlay::Overlay;
pub use surface::*;
