use std::time::Duration;
use crate::host::Frame;

/// Hooks the engine calls once per tick, always on the event loop thread.
///
/// `on_update` runs before `on_render` within a tick. The frame handed to
/// `on_render` is presented by the host once the callback returns, so
/// implementations never swap buffers themselves.
pub trait FrameCallbacks {
    fn on_update(&mut self, delta: Duration);
    fn on_render(&mut self, frame: &mut Frame<'_>);

    /// Called once before the graphics context is released.
    fn on_close(&mut self) {}
}
