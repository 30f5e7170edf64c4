use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded draw operation. Each variant has a matching renderer under
/// `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled disc.
    Circle(CircleCmd),
    /// Butt-capped stroke.
    Line(LineCmd),
    /// Single line of text.
    Text(TextCmd),
}
