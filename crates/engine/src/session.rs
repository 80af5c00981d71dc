use anyhow::Error;
use tracing::error;
use winit::event::WindowEvent;
use crate::application::FrameCallbacks;
use crate::gfx::GraphicsContext;
use crate::host::FrameHost;

/// What the event loop should do after an event has been handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Exit,
}

/// Routes window events to the frame host and the application callbacks.
///
/// Holds no platform handles, the engine only forwards events and acts on
/// the returned `Flow`.
pub struct Session<C: GraphicsContext, A: FrameCallbacks> {
    host: Option<FrameHost<C>>,
    app: A,
    failure: Option<Error>,
}

impl<C: GraphicsContext, A: FrameCallbacks> Session<C, A> {
    pub fn new(app: A) -> Self {
        Self {
            host: None,
            app,
            failure: None,
        }
    }

    /// Takes the outcome of window creation. A failure is kept for `finish`.
    pub fn attach(&mut self, created: Result<FrameHost<C>, Error>) -> Flow {
        match created {
            Ok(host) => {
                self.host = Some(host);
                Flow::Redraw
            }
            Err(err) => {
                error!("Failed to create window : {}", err);
                self.failure = Some(err);
                Flow::Exit
            }
        }
    }

    pub fn handle<F: FnOnce()>(&mut self, event: WindowEvent, before_present: F) -> Flow {
        let Some(host) = self.host.as_mut() else {
            return Flow::Continue;
        };
        match event {
            WindowEvent::CloseRequested => {
                if let Err(err) = host.close(&mut self.app) {
                    error!("Failed to close window : {}", err);
                }
                Flow::Exit
            }
            WindowEvent::Resized(size) => {
                host.resize(size.width, size.height);
                Flow::Continue
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = host.tick_with(&mut self.app, before_present) {
                    error!("Failed to render frame : {}", err);
                }
                // Request redraw for next frame
                Flow::Redraw
            }
            _ => Flow::Continue,
        }
    }

    pub fn close(&mut self) -> Result<(), Error> {
        match self.host.as_mut() {
            Some(host) => host.close(&mut self.app),
            None => Ok(()),
        }
    }

    /// The creation failure, if any. `Ok` after a user close.
    pub fn finish(&mut self) -> Result<(), Error> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&FrameHost<C>> {
        self.host.as_ref()
    }

    pub fn app(&self) -> &A {
        &self.app
    }
}
