//! Time subsystem.
//!
//! Monotonic timing utilities, decoupled from the runtime so they can be
//! driven with synthetic instants in tests:
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `RefreshTimer`: fixed-cadence deadline that decides when content must be
//!   rebuilt, independent of how often frames are presented

mod frame_clock;
mod refresh_timer;

pub use frame_clock::{FrameClock, FrameTime};
pub use refresh_timer::RefreshTimer;
