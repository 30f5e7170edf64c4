//! Shape renderers. One instanced pass per shape kind.

mod common;

pub mod circle;
pub mod line;
pub mod text;
