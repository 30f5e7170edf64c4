use std::time::{Duration, Instant};

use dial_engine::coords::{Vec2, Viewport};
use dial_engine::paint::Color;
use dial_engine::scene::{DrawList, ZIndex};
use dial_engine::text::{FontId, FontSystem};
use dial_engine::time::RefreshTimer;
use dial_face::{
    clock_face, format_12h, ClockPalette, ClockStyle, Point, Primitive, Rgba8, TimeOfDay,
    TimeSource,
};

/// Refresh cadence of the displayed time.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Largest dial diameter, in logical pixels.
pub const MAX_DIAL_DIAMETER: f32 = 300.0;
/// Vertical gap between the readout and the dial.
pub const READOUT_GAP: f32 = 32.0;
pub const READOUT_FONT_SIZE: f32 = 16.0;
/// Minimum free space kept around the column.
pub const MARGIN: f32 = 16.0;

const FACE_Z: ZIndex = ZIndex(0);
const READOUT_Z: ZIndex = FACE_Z.above();

/// Where the readout and the dial go for a given viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockLayout {
    /// Top-left of the readout text.
    pub readout_origin: Vec2,
    pub dial_center: Point,
    pub dial_radius: f32,
}

/// Font used for the digital readout.
#[derive(Copy, Clone)]
pub struct ReadoutFont<'a> {
    pub fonts: &'a FontSystem,
    pub id: FontId,
}

/// Clock screen state: the current snapshot and the timer that refreshes it.
///
/// Independent of any window. The owner feeds it instants (`start`, `poll`)
/// and draws it into a [`DrawList`] with [`paint`](Self::paint).
pub struct ClockScreen<S> {
    source: S,
    timer: RefreshTimer,
    time: TimeOfDay,
    style: ClockStyle,
    palette: ClockPalette,
}

impl<S: TimeSource> ClockScreen<S> {
    /// Creates a stopped screen showing the source's current time.
    pub fn new(source: S, style: ClockStyle, palette: ClockPalette) -> Self {
        let time = source.now();
        Self {
            source,
            timer: RefreshTimer::new(REFRESH_PERIOD),
            time,
            style,
            palette,
        }
    }

    /// Starts the once-per-second refresh. The first sample is due at `now`.
    pub fn start(&mut self, now: Instant) {
        self.timer.start(now);
        log::debug!("clock refresh started");
    }

    /// Cancels the refresh; the screen keeps showing the last sample.
    pub fn stop(&mut self) {
        if self.timer.is_running() {
            self.timer.cancel();
            log::debug!("clock refresh cancelled after {} ticks", self.timer.fired());
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Re-samples the time source if a tick is due. Returns `true` when the
    /// snapshot was replaced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.time = self.source.now();
        log::debug!("tick {}: {}", self.timer.fired(), self.time);
        true
    }

    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    #[inline]
    pub fn palette(&self) -> &ClockPalette {
        &self.palette
    }

    /// Text of the digital readout, e.g. `"03:07:09 PM"`.
    pub fn readout(&self) -> String {
        format_12h(self.time)
    }

    /// Centers a readout of `readout_size` above the dial, both as one column.
    ///
    /// The dial shrinks below [`MAX_DIAL_DIAMETER`] when the viewport is too
    /// small; it never goes negative.
    pub fn layout(&self, viewport: Viewport, readout_size: Vec2) -> ClockLayout {
        let gap = if readout_size.y > 0.0 { READOUT_GAP } else { 0.0 };
        let text_block = readout_size.y + gap;

        let diameter = MAX_DIAL_DIAMETER
            .min(viewport.width - 2.0 * MARGIN)
            .min(viewport.height - text_block - 2.0 * MARGIN)
            .max(0.0);

        let column_height = text_block + diameter;
        let top = (viewport.height - column_height) * 0.5;
        let center_x = viewport.width * 0.5;

        ClockLayout {
            readout_origin: Vec2::new(center_x - readout_size.x * 0.5, top),
            dial_center: Point::new(center_x, top + text_block + diameter * 0.5),
            dial_radius: diameter * 0.5,
        }
    }

    /// Records the current frame: dial, ticks and hands, then the readout.
    ///
    /// Without a font the readout is skipped and the dial is centered alone.
    pub fn paint(&self, dl: &mut DrawList, viewport: Viewport, font: Option<ReadoutFont<'_>>) {
        let text = self.readout();
        let readout_size = font.map_or(Vec2::zero(), |f| {
            f.fonts.measure_text(&text, f.id, READOUT_FONT_SIZE)
        });

        let layout = self.layout(viewport, readout_size);
        let face = clock_face(
            self.time,
            &self.style,
            &self.palette,
            layout.dial_center,
            layout.dial_radius,
        );

        for primitive in face.primitives() {
            match primitive {
                Primitive::Circle(c) => {
                    dl.push_solid_circle(FACE_Z, to_vec2(c.center), c.radius, to_color(c.color));
                }
                Primitive::Line(l) => {
                    dl.push_line(
                        FACE_Z,
                        to_vec2(l.start),
                        to_vec2(l.end),
                        to_color(l.color),
                        l.width,
                    );
                }
            }
        }

        if let Some(f) = font {
            dl.push_text(
                READOUT_Z,
                text,
                f.id,
                READOUT_FONT_SIZE,
                to_color(self.palette.text),
                layout.readout_origin,
            );
        }
    }
}

#[inline]
fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

#[inline]
pub fn to_color(c: Rgba8) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::DrawCmd;
    use dial_face::FixedTime;

    fn at(h: u32, m: u32, s: u32) -> FixedTime {
        FixedTime(TimeOfDay::new(h, m, s).unwrap())
    }

    fn screen(source: FixedTime) -> ClockScreen<FixedTime> {
        ClockScreen::new(source, ClockStyle::default(), ClockPalette::default())
    }

    const WINDOW: Viewport = Viewport::new(360.0, 460.0);

    // ── refresh ───────────────────────────────────────────────────────────

    #[test]
    fn stopped_screen_never_samples() {
        let mut s = screen(at(1, 2, 3));
        let t0 = Instant::now();
        assert!(!s.is_running());
        assert!(!s.poll(t0 + Duration::from_secs(5)));
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn first_sample_is_immediate_then_once_per_second() {
        let mut s = screen(at(1, 2, 3));
        let t0 = Instant::now();
        s.start(t0);

        assert!(s.poll(t0));
        assert_eq!(s.next_deadline(), Some(t0 + REFRESH_PERIOD));
        assert!(!s.poll(t0 + Duration::from_millis(999)));
        assert!(s.poll(t0 + REFRESH_PERIOD));
        assert_eq!(s.next_deadline(), Some(t0 + 2 * REFRESH_PERIOD));
    }

    #[test]
    fn stop_cancels_pending_ticks() {
        let mut s = screen(at(1, 2, 3));
        let t0 = Instant::now();
        s.start(t0);
        assert!(s.poll(t0));
        s.stop();
        assert!(!s.is_running());
        assert!(!s.poll(t0 + 10 * REFRESH_PERIOD));
        assert_eq!(s.next_deadline(), None);
    }

    /// Advances one second per observation.
    struct Ticking(std::cell::Cell<u32>);

    impl TimeSource for Ticking {
        fn now(&self) -> TimeOfDay {
            let s = self.0.get();
            self.0.set(s + 1);
            TimeOfDay::new(15, 7, s % 60).unwrap()
        }
    }

    #[test]
    fn poll_resamples_only_when_due() {
        let mut s = ClockScreen::new(
            Ticking(std::cell::Cell::new(0)),
            ClockStyle::default(),
            ClockPalette::default(),
        );
        assert_eq!(s.readout(), "03:07:00 PM");

        let t0 = Instant::now();
        s.start(t0);
        assert!(s.poll(t0));
        assert_eq!(s.readout(), "03:07:01 PM");

        assert!(!s.poll(t0 + Duration::from_millis(500)));
        assert_eq!(s.readout(), "03:07:01 PM");

        assert!(s.poll(t0 + REFRESH_PERIOD));
        assert_eq!(s.readout(), "03:07:02 PM");
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn default_window_fits_full_dial_below_readout() {
        let s = screen(at(0, 0, 0));
        let l = s.layout(WINDOW, Vec2::new(100.0, 20.0));

        assert_eq!(l.dial_radius, MAX_DIAL_DIAMETER * 0.5);
        assert_eq!(l.dial_center.x, 180.0);
        assert_eq!(l.readout_origin.x, 130.0);

        // Readout bottom + gap == dial top.
        let dial_top = l.dial_center.y - l.dial_radius;
        assert_eq!(l.readout_origin.y + 20.0 + READOUT_GAP, dial_top);

        // Column is vertically centered.
        let bottom = l.dial_center.y + l.dial_radius;
        assert!((l.readout_origin.y - (460.0 - bottom)).abs() < 1e-3);
    }

    #[test]
    fn small_window_shrinks_dial() {
        let s = screen(at(0, 0, 0));
        let l = s.layout(Viewport::new(200.0, 600.0), Vec2::new(80.0, 20.0));
        assert_eq!(l.dial_radius, (200.0 - 2.0 * MARGIN) * 0.5);
    }

    #[test]
    fn tiny_window_clamps_radius_to_zero() {
        let s = screen(at(0, 0, 0));
        let l = s.layout(Viewport::new(10.0, 10.0), Vec2::new(80.0, 20.0));
        assert_eq!(l.dial_radius, 0.0);
    }

    #[test]
    fn missing_readout_drops_gap_and_centers_dial() {
        let s = screen(at(0, 0, 0));
        let l = s.layout(WINDOW, Vec2::zero());
        assert_eq!(l.dial_center, Point::new(180.0, 230.0));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_without_font_records_face_in_order() {
        let s = screen(at(10, 10, 30));
        let mut dl = DrawList::new();
        s.paint(&mut dl, WINDOW, None);

        assert_eq!(dl.len(), 1 + 60 + 3);
        let kinds: Vec<&str> = dl
            .iter_in_paint_order()
            .map(|item| match item.cmd {
                DrawCmd::Circle(_) => "circle",
                DrawCmd::Line(_) => "line",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds[0], "circle");
        assert!(kinds[1..].iter().all(|k| *k == "line"));
    }

    #[test]
    fn hands_are_recorded_second_minute_hour() {
        let style = ClockStyle::default();
        let s = screen(at(10, 10, 30));
        let mut dl = DrawList::new();
        s.paint(&mut dl, WINDOW, None);

        let widths: Vec<f32> = dl
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(l) => Some(l.width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 63);
        assert!(widths[..60].iter().all(|w| *w == style.tick_width));
        assert_eq!(
            &widths[60..],
            &[style.second_hand_width, style.minute_hand_width, style.hour_hand_width]
        );
    }

    #[test]
    fn second_hand_uses_its_own_color() {
        let palette = ClockPalette::light();
        let s = ClockScreen::new(at(0, 0, 0), ClockStyle::default(), palette);
        let mut dl = DrawList::new();
        s.paint(&mut dl, WINDOW, None);

        let colors: Vec<Color> = dl
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(l) => Some(l.color),
                _ => None,
            })
            .collect();
        assert_eq!(colors[60], to_color(palette.second_hand));
        assert_eq!(colors[61], to_color(palette.lines));
    }

    #[test]
    fn readout_is_recorded_last_above_the_dial() {
        let mut fonts = FontSystem::new();
        let Some(id) = crate::fonts::load_system_font(&mut fonts) else {
            // No system font on this machine; covered by the font-less tests.
            return;
        };
        let s = screen(at(12, 0, 0));
        let mut dl = DrawList::new();
        s.paint(&mut dl, WINDOW, Some(ReadoutFont { fonts: &fonts, id }));

        assert_eq!(dl.len(), 1 + 63 + 1);
        let Some(DrawCmd::Text(t)) = dl.iter_in_paint_order().last().map(|i| i.cmd.clone()) else {
            panic!("expected readout text last");
        };
        assert_eq!(t.text, "12:00:00 PM");

        let DrawCmd::Circle(dial) = &dl.items()[0].cmd else { panic!("expected the dial first") };
        assert!(t.origin.y < dial.center.y - dial.radius);
    }

    #[test]
    fn dial_circle_matches_layout() {
        let s = screen(at(0, 0, 0));
        let mut dl = DrawList::new();
        s.paint(&mut dl, WINDOW, None);
        let l = s.layout(WINDOW, Vec2::zero());

        match &dl.items()[0].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(l.dial_center.x, l.dial_center.y));
                assert_eq!(c.radius, l.dial_radius);
            }
            other => panic!("expected the dial first, got {other:?}"),
        }
    }
}
