use crate::error::StyleError;

/// Straight-alpha sRGB color bytes.
///
/// The face layer stays renderer-agnostic; renderers convert this into their
/// own color representation (premultiplied linear in the engine).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn opaque(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xFF)
    }
}

/// Lengths and stroke widths of the clock face, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockStyle {
    pub minute_line_length: f32,
    pub hour_line_length: f32,

    /// Distance the hands reach back past the center.
    pub pointer_offset: f32,
    /// Gap between the hand tips and the rim.
    pub pointer_inset: f32,

    pub tick_width: f32,
    pub second_hand_width: f32,
    pub minute_hand_width: f32,
    pub hour_hand_width: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            minute_line_length: 8.0,
            hour_line_length: 24.0,
            pointer_offset: 8.0,
            pointer_inset: 16.0,
            tick_width: 2.0,
            second_hand_width: 7.0,
            minute_hand_width: 10.0,
            hour_hand_width: 15.0,
        }
    }
}

impl ClockStyle {
    /// Default style with custom tick lengths.
    ///
    /// Lengths must be finite and non-negative. A length longer than the
    /// dial radius is accepted; the tick then crosses the center.
    pub fn with_tick_lengths(minute: f32, hour: f32) -> Result<Self, StyleError> {
        check_length("minute tick length", minute)?;
        check_length("hour tick length", hour)?;
        Ok(Self { minute_line_length: minute, hour_line_length: hour, ..Self::default() })
    }
}

fn check_length(what: &str, v: f32) -> Result<(), StyleError> {
    if !v.is_finite() {
        return Err(StyleError::new(format!("{what} must be finite, got {v}")));
    }
    if v < 0.0 {
        return Err(StyleError::new(format!("{what} must not be negative, got {v}")));
    }
    Ok(())
}

/// Colors of the clock screen, resolved once and passed into every draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockPalette {
    /// Window clear color.
    pub background: Rgba8,
    /// Dial disc.
    pub face: Rgba8,
    /// Tick marks, minute and hour hands.
    pub lines: Rgba8,
    pub second_hand: Rgba8,
    /// Digital readout.
    pub text: Rgba8,
}

impl ClockPalette {
    /// Light scheme: purple primary on a white dial.
    pub const fn light() -> Self {
        Self {
            background: Rgba8::opaque(0xFFFBFE),
            face: Rgba8::opaque(0xFFFFFF),
            lines: Rgba8::opaque(0x6750A4),
            second_hand: Rgba8::opaque(0xB3261E),
            text: Rgba8::opaque(0x1C1B1F),
        }
    }

    /// Dark scheme: lavender primary on a deep purple dial.
    pub const fn dark() -> Self {
        Self {
            background: Rgba8::opaque(0x1C1B1F),
            face: Rgba8::opaque(0x381E72),
            lines: Rgba8::opaque(0xD0BCFF),
            second_hand: Rgba8::opaque(0xF2B8B5),
            text: Rgba8::opaque(0xE6E1E5),
        }
    }
}

impl Default for ClockPalette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_splits_channels() {
        assert_eq!(Rgba8::opaque(0x12_34_56), Rgba8::new(0x12, 0x34, 0x56, 0xFF));
    }

    #[test]
    fn default_style_matches_reference_dimensions() {
        let s = ClockStyle::default();
        assert_eq!((s.minute_line_length, s.hour_line_length), (8.0, 24.0));
        assert_eq!((s.pointer_offset, s.pointer_inset), (8.0, 16.0));
        assert_eq!(
            (s.tick_width, s.second_hand_width, s.minute_hand_width, s.hour_hand_width),
            (2.0, 7.0, 10.0, 15.0)
        );
    }

    #[test]
    fn with_tick_lengths_keeps_other_defaults() {
        let s = ClockStyle::with_tick_lengths(4.0, 30.0).unwrap();
        assert_eq!(s.minute_line_length, 4.0);
        assert_eq!(s.hour_line_length, 30.0);
        assert_eq!(s.hour_hand_width, ClockStyle::default().hour_hand_width);
    }

    #[test]
    fn with_tick_lengths_rejects_negative_and_nan() {
        assert!(ClockStyle::with_tick_lengths(-1.0, 24.0).is_err());
        assert!(ClockStyle::with_tick_lengths(8.0, f32::NAN).is_err());
        assert!(ClockStyle::with_tick_lengths(f32::INFINITY, 24.0).is_err());
    }

    #[test]
    fn zero_length_is_allowed() {
        assert!(ClockStyle::with_tick_lengths(0.0, 0.0).is_ok());
    }

    #[test]
    fn palettes_differ_per_scheme() {
        assert_ne!(ClockPalette::light(), ClockPalette::dark());
        assert_eq!(ClockPalette::default(), ClockPalette::dark());
    }
}
