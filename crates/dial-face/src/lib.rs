//! Dial face model.
//!
//! Turns a wall-clock snapshot into renderer-agnostic primitives: one dial
//! circle, sixty tick marks and three hands. Nothing here touches the GPU or
//! the window; the engine crate consumes the output.

mod error;
mod format;
mod style;
mod time;

pub mod geometry;

pub use error::{StyleError, TimeError};
pub use format::format_12h;
pub use geometry::{
    clock_face, hour_value, pointer_segment, tick_segment, CirclePrimitive, ClockFace, Hands,
    LineSegment, Point, Primitive,
};
pub use style::{ClockPalette, ClockStyle, Rgba8};
pub use time::{FixedTime, LocalClock, TimeOfDay, TimeSource};
