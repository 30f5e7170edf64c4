use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight stroke with butt caps: the stroke ends exactly at `start` and
/// `end` and extends `width / 2` to either side of the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}

impl LineCmd {
    /// Zero-length or zero-width strokes cover no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || (self.end - self.start).length() <= f32::EPSILON
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, color: Color, width: f32) {
        self.push(z, DrawCmd::Line(LineCmd { start, end, color, width }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: Vec2, end: Vec2, width: f32) -> LineCmd {
        LineCmd { start, end, color: Color::transparent(), width }
    }

    #[test]
    fn zero_width_or_length_is_degenerate() {
        let p = Vec2::new(3.0, 4.0);
        assert!(line(p, p, 2.0).is_degenerate());
        assert!(line(Vec2::zero(), p, 0.0).is_degenerate());
        assert!(!line(Vec2::zero(), p, 2.0).is_degenerate());
    }
}
