//! DashView Playback Core — segment-synchronized playback state machines
//!
//! Maps the continuous clip timeline onto discrete segments and keeps four
//! independently-loading camera players in lockstep:
//! - **TimeModel:** clip-time ⇄ (segment, offset) mapping and display labels
//! - **SegmentSynchronizer:** per-camera state aggregation and the
//!   segment-advance transition
//! - **SeekCoordinator:** pending seeks, applied exactly once when every
//!   camera is ready
//! - **ExportRangeTracker:** in/out marks and the capped exportable duration
//! - **ClipViewer:** the per-clip session object wiring the above to the
//!   four camera players
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod export_range;
pub mod keyboard;
pub mod player;
pub mod seek;
pub mod sync;
pub mod time_model;
pub mod viewer;

pub use export_range::{ExportRangeTracker, MAX_EXPORT_SECS};
pub use keyboard::{command_for_key, KeyBinding, KeyCommand, JUMP_SECS};
pub use player::{CameraPlayer, PlayerState};
pub use seek::{SeekCoordinator, SeekInfo};
pub use sync::{SegmentSynchronizer, SyncTransition};
pub use time_model::segment_and_offset_for;
pub use viewer::ClipViewer;
