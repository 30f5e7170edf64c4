//! Dial engine crate.
//!
//! Platform + GPU runtime for a small, mostly idle window: a winit loop that
//! sleeps until the app's next deadline, a wgpu surface, a retained draw
//! list, and instanced renderers for circles, lines and text.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
