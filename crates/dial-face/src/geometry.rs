//! Clock face geometry.
//!
//! Angles are in radians, measured clockwise from the +X axis because the
//! coordinate space has +Y pointing down. Tick marks use the raw angle
//! (`i * 6°`, tick 0 at three o'clock); hands are rotated by −90° so value 0
//! points at twelve.

use crate::style::{ClockPalette, ClockStyle, Rgba8};
use crate::time::TimeOfDay;

/// Number of tick marks around the dial.
pub const TICK_COUNT: u32 = 60;

/// Every `HOUR_TICK_EVERY`-th tick marks an hour.
pub const HOUR_TICK_EVERY: u32 = 5;

const DEGREES_PER_STEP: f64 = 360.0 / TICK_COUNT as f64;

/// Point in logical pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self + dir * len`.
    #[inline]
    fn along(self, dir: Point, len: f32) -> Point {
        Point::new(self.x + dir.x * len, self.y + dir.y * len)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub color: Rgba8,
    pub width: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f32,
    pub color: Rgba8,
}

/// A single drawable, in submission order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Circle(CirclePrimitive),
    Line(LineSegment),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hands {
    pub second: LineSegment,
    pub minute: LineSegment,
    pub hour: LineSegment,
}

/// Everything needed to draw one frame of the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub dial: CirclePrimitive,
    /// Always [`TICK_COUNT`] segments, indexed by tick number.
    pub ticks: Vec<LineSegment>,
    pub hands: Hands,
}

impl ClockFace {
    /// Primitives back to front: dial, ticks, then second, minute, hour hand.
    ///
    /// The hour hand comes last so it covers the thinner hands where they overlap.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        let hands = [self.hands.second, self.hands.minute, self.hands.hour];
        std::iter::once(Primitive::Circle(self.dial))
            .chain(self.ticks.iter().copied().map(Primitive::Line))
            .chain(hands.into_iter().map(Primitive::Line))
    }
}

// ── angles ────────────────────────────────────────────────────────────────

/// Angle of tick `i`, clockwise from three o'clock.
#[inline]
pub fn tick_angle(i: u32) -> f64 {
    (i as f64 * DEGREES_PER_STEP).to_radians()
}

/// Angle of a hand showing `value` (`0..60`), where 0 is twelve o'clock.
#[inline]
pub fn pointer_angle(value: u32) -> f64 {
    (value as f64 * DEGREES_PER_STEP - 90.0).to_radians()
}

/// Unit vector for [`pointer_angle`].
#[inline]
pub fn pointer_direction(value: u32) -> Point {
    direction(pointer_angle(value))
}

#[inline]
fn direction(angle: f64) -> Point {
    Point::new(angle.cos() as f32, angle.sin() as f32)
}

// ── values ────────────────────────────────────────────────────────────────

/// Tick length: hour ticks on every fifth index, minute ticks elsewhere.
#[inline]
pub fn tick_length(i: u32, style: &ClockStyle) -> f32 {
    if i % HOUR_TICK_EVERY == 0 {
        style.hour_line_length
    } else {
        style.minute_line_length
    }
}

/// Position of the hour hand on the 60-step dial.
///
/// `round(((hour % 12) + minute / 60) * 5)`, rounding halves up. From 11:54
/// onward the result reaches 60 and wraps to 0.
pub fn hour_value(hour: u32, minute: u32) -> u32 {
    // (h + m/60) * 5 == (60h + m) / 12; adding 6 before dividing rounds half up.
    let twelfths = 60 * (hour % 12) + minute;
    ((twelfths + 6) / 12) % TICK_COUNT
}

// ── segments ──────────────────────────────────────────────────────────────

/// Tick mark `i`, from the rim inward by [`tick_length`].
pub fn tick_segment(i: u32, center: Point, radius: f32, style: &ClockStyle, color: Rgba8) -> LineSegment {
    let dir = direction(tick_angle(i));
    LineSegment {
        start: center.along(dir, radius),
        end: center.along(dir, radius - tick_length(i, style)),
        color,
        width: style.tick_width,
    }
}

/// A hand showing `value`: starts `pointer_offset` behind the center and
/// stops `pointer_inset` short of the rim.
pub fn pointer_segment(
    value: u32,
    center: Point,
    radius: f32,
    style: &ClockStyle,
    width: f32,
    color: Rgba8,
) -> LineSegment {
    let dir = pointer_direction(value);
    LineSegment {
        start: center.along(dir, -style.pointer_offset),
        end: center.along(dir, radius - style.pointer_inset),
        color,
        width,
    }
}

/// Builds the full dial for `time`.
///
/// Pure: identical inputs always produce identical output.
pub fn clock_face(
    time: TimeOfDay,
    style: &ClockStyle,
    palette: &ClockPalette,
    center: Point,
    radius: f32,
) -> ClockFace {
    let dial = CirclePrimitive { center, radius, color: palette.face };

    let ticks = (0..TICK_COUNT)
        .map(|i| tick_segment(i, center, radius, style, palette.lines))
        .collect();

    let hands = Hands {
        second: pointer_segment(
            time.second(),
            center,
            radius,
            style,
            style.second_hand_width,
            palette.second_hand,
        ),
        minute: pointer_segment(
            time.minute(),
            center,
            radius,
            style,
            style.minute_hand_width,
            palette.lines,
        ),
        hour: pointer_segment(
            hour_value(time.hour(), time.minute()),
            center,
            radius,
            style,
            style.hour_hand_width,
            palette.lines,
        ),
    };

    ClockFace { dial, ticks, hands }
}
