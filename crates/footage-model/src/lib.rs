//! DashView Footage Model
//!
//! Defines the core data contracts for DashView clips:
//! - **Camera / ViewType:** the four fixed camera slots and the layouts
//!   built from them
//! - **Segment:** one contiguous, independently-sourced chunk of footage
//!   for all four cameras, with its own start time
//! - **Footage:** the ordered segment sequence plus total clip duration
//! - **Clip:** a named recording and the optional event that triggered it
//!
//! All times are clip-relative seconds unless a type says otherwise.
//! Footage and clip metadata are externally supplied and read-only for the
//! lifetime of a viewing session.

pub mod camera;
pub mod clip;
pub mod footage;
pub mod segment;

pub use camera::*;
pub use clip::*;
pub use footage::*;
pub use segment::*;
