use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Single-line text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), font, size, color, origin }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_text_records_payload_on_layer() {
        let mut dl = DrawList::new();
        dl.push_text(ZIndex(3), "12:00:00 AM", FontId(0), 16.0, Color::transparent(), Vec2::zero());

        let item = &dl.items()[0];
        assert_eq!(item.key.z, ZIndex(3));
        let DrawCmd::Text(cmd) = &item.cmd else { panic!("expected text") };
        assert_eq!(cmd.text, "12:00:00 AM");
        assert_eq!(cmd.size, 16.0);
    }
}
