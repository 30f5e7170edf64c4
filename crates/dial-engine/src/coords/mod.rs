//! Coordinate types shared by the scene and the renderers.
//!
//! Canonical CPU space:
//! - logical pixels (DPI-aware)
//! - origin top-left, +X right, +Y down
//!
//! Shaders convert to NDC using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
