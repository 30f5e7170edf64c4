//! Retained draw stream.
//!
//! The app records one frame's worth of circles, lines and text into a
//! [`DrawList`]; renderers read it back in paint order (z-index, then
//! insertion order). Shape payloads and their `push_*` helpers live under
//! `scene::shapes`.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
