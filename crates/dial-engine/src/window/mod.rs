//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! Redraws are scheduled from the app's next frame deadline; between
//! deadlines the loop sleeps.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
