use std::time::Instant;

use dial_engine::core::{App as EngineApp, AppControl, FrameCtx};
use dial_engine::render::shapes::circle::CircleRenderer;
use dial_engine::render::shapes::line::LineRenderer;
use dial_engine::render::shapes::text::TextRenderer;
use dial_engine::scene::DrawList;
use dial_engine::text::{FontId, FontSystem};
use dial_face::TimeSource;

use crate::screen::{to_color, ClockScreen, ReadoutFont};

/// Engine app that shows a [`ClockScreen`] in the window.
///
/// The refresh runs between resume and suspend/exit. Each frame polls the
/// screen, rebuilds the draw list and runs the circle, line and text passes.
pub struct ClockView<S> {
    screen: ClockScreen<S>,
    draw_list: DrawList,

    fonts: FontSystem,
    readout_font: Option<FontId>,

    circle_renderer: CircleRenderer,
    line_renderer: LineRenderer,
    text_renderer: TextRenderer,
}

impl<S: TimeSource> ClockView<S> {
    pub fn new(screen: ClockScreen<S>, fonts: FontSystem, readout_font: Option<FontId>) -> Self {
        Self {
            screen,
            draw_list: DrawList::new(),
            fonts,
            readout_font,
            circle_renderer: CircleRenderer::new(),
            line_renderer: LineRenderer::new(),
            text_renderer: TextRenderer::new(),
        }
    }
}

impl<S: TimeSource> EngineApp for ClockView<S> {
    fn on_resumed(&mut self, now: Instant) {
        self.screen.start(now);
    }

    fn on_suspended(&mut self) {
        self.screen.stop();
    }

    fn on_exit(&mut self) {
        self.screen.stop();
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.screen.poll(ctx.time.now);

        let font = self.readout_font.map(|id| ReadoutFont { fonts: &self.fonts, id });
        self.draw_list.clear();
        self.screen.paint(&mut self.draw_list, ctx.window.viewport(), font);

        let dl = &mut self.draw_list;
        let fonts = &self.fonts;
        let circles = &mut self.circle_renderer;
        let lines = &mut self.line_renderer;
        let text = &mut self.text_renderer;

        ctx.render(to_color(self.screen.palette().background), |rctx, target| {
            circles.render(rctx, target, dl);
            lines.render(rctx, target, dl);
            text.render(rctx, target, dl, fonts);
        })
    }

    fn next_frame_deadline(&self) -> Option<Instant> {
        self.screen.next_deadline()
    }
}
