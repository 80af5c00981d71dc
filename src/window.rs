use std::time::Duration;
use engine::application::FrameCallbacks;
use engine::gfx::ClearMask;
use engine::host::Frame;

/// Main program window.
#[derive(Default)]
pub struct AluniteWindow {}

impl FrameCallbacks for AluniteWindow {
    fn on_update(&mut self, _: Duration) {}

    fn on_render(&mut self, frame: &mut Frame<'_>) {
        frame.clear(ClearMask::COLOR | ClearMask::DEPTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::gfx::recording::{GfxCall, RecordingContext};
    use engine::host::FrameHost;
    use engine::lifecycle::WindowState;
    use engine::options::Options;

    fn host() -> FrameHost<RecordingContext> {
        FrameHost::new(RecordingContext::default(), &Options::default()).unwrap()
    }

    #[test]
    fn opens_at_default_size() {
        let host = host();
        assert_eq!(host.width(), 640);
        assert_eq!(host.height(), 480);
        assert_eq!(Options::default().main_window.title, "Alunite");
    }

    #[test]
    fn render_clears_color_and_depth_then_presents_once() {
        let mut host = host();
        let mut window = AluniteWindow::default();
        host.render(&mut window).unwrap();

        let context = host.context().unwrap();
        assert_eq!(context.clears(), vec![ClearMask::COLOR | ClearMask::DEPTH]);
        assert_eq!(context.presents(), 1);
        assert_eq!(context.calls().last(), Some(&GfxCall::Present));
    }

    #[test]
    fn update_touches_nothing() {
        let mut host = host();
        let mut window = AluniteWindow::default();
        let before = host.context().unwrap().calls().to_vec();
        host.update(&mut window, Duration::from_millis(16)).unwrap();
        host.update(&mut window, Duration::from_millis(16)).unwrap();
        assert_eq!(host.context().unwrap().calls(), before.as_slice());
        assert_eq!(host.frame_index(), 0);
    }

    #[test]
    fn closes_cleanly_after_running() {
        let mut host = host();
        let mut window = AluniteWindow::default();
        for _ in 0..3 {
            host.tick(&mut window).unwrap();
        }
        assert_eq!(host.context().unwrap().presents(), 3);
        host.close(&mut window).unwrap();
        assert_eq!(host.state(), WindowState::Closed);
    }
}
