use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime only redraws when asked to: on resize, on scale change, and
/// whenever the deadline reported by [`App::next_frame_deadline`] has passed.
pub trait App {
    /// Called once the first window and its GPU context exist.
    fn on_resumed(&mut self, now: Instant) {
        let _ = now;
    }

    /// Called when the platform suspends the app. Timers should stop here.
    fn on_suspended(&mut self) {}

    /// Called once before the event loop returns.
    fn on_exit(&mut self) {}

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// When the next frame is due. `None` sleeps until an external event.
    fn next_frame_deadline(&self) -> Option<Instant> {
        None
    }
}
