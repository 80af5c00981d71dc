use anyhow::Error;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};
use crate::application::FrameCallbacks;
use crate::gfx::gl_context::GlContext;
use crate::options::Options;
use crate::session::{Flow, Session};
use crate::window::create_window;

/// Owns the event loop, the main window and the application callbacks.
pub struct Engine<A: FrameCallbacks> {
    // Declared before `window` so the GL context is released first.
    session: Session<GlContext, A>,
    window: Option<Window>,
    options: Options,
}

impl<A: FrameCallbacks> Engine<A> {
    pub fn new(options: Options, app: A) -> Self {
        Self {
            session: Session::new(app),
            window: None,
            options,
        }
    }

    /// Blocks until the window is closed or could not be created.
    pub fn run(mut self) -> Result<(), Error> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        self.session.finish()
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, flow: Flow) {
        match flow {
            Flow::Continue => {}
            Flow::Redraw => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            Flow::Exit => {
                self.window = None;
                event_loop.exit();
            }
        }
    }
}

impl<A: FrameCallbacks> ApplicationHandler for Engine<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_attached() {
            return;
        }
        let created = create_window(event_loop, &self.options).map(|(window, host)| {
            self.window = Some(window);
            host
        });
        let flow = self.session.attach(created);
        self.apply(event_loop, flow);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref().filter(|window| window.id() == id) else {
            return;
        };
        let flow = self.session.handle(event, || window.pre_present_notify());
        self.apply(event_loop, flow);
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        info!("Event loop exiting");
    }
}

impl<A: FrameCallbacks> Drop for Engine<A> {
    fn drop(&mut self) {
        if let Err(err) = self.session.close() {
            error!("Failed to close window : {}", err);
        }
    }
}
