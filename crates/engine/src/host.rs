use std::time::Duration;
use anyhow::{anyhow, Error};
use tracing::{debug, info};
use types::time_delta::TimeDelta;
use crate::application::FrameCallbacks;
use crate::gfx::{ClearMask, GraphicsContext};
use crate::lifecycle::WindowState;
use crate::options::{Options, RenderingOptions};

/// The frame currently being rendered.
pub struct Frame<'a> {
    context: &'a mut dyn GraphicsContext,
    index: u64,
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    pub fn clear(&mut self, mask: ClearMask) {
        self.context.clear(mask);
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Drives the update/render cycle of one window over a graphics context.
pub struct FrameHost<C: GraphicsContext> {
    context: Option<C>,
    state: WindowState,
    width: u32,
    height: u32,
    minimized: bool,
    delta_time: TimeDelta,
    frame_index: u64,
}

impl<C: GraphicsContext> FrameHost<C> {
    /// Builds a host sized from the configured window.
    pub fn new(context: C, options: &Options) -> Result<Self, Error> {
        let window = &options.main_window;
        if window.width == 0 || window.height == 0 {
            return Err(anyhow!("Invalid window size {}x{}", window.width, window.height));
        }
        Ok(Self::with_size(context, window.width, window.height, &options.rendering))
    }

    /// Builds a host for a surface whose current size is already known.
    pub fn with_size(mut context: C, width: u32, height: u32, rendering: &RenderingOptions) -> Self {
        let minimized = width == 0 || height == 0;
        context.set_clear_color(rendering.clear_color);
        if !minimized {
            context.set_viewport(width, height);
        }
        Self {
            context: Some(context),
            state: WindowState::Created,
            width,
            height,
            minimized,
            delta_time: TimeDelta::default(),
            frame_index: 0,
        }
    }

    /// Runs one update followed by one render.
    pub fn tick<A: FrameCallbacks + ?Sized>(&mut self, app: &mut A) -> Result<(), Error> {
        self.tick_with(app, || {})
    }

    /// Like `tick`, calling `before_present` right before the frame is swapped.
    pub fn tick_with<A, F>(&mut self, app: &mut A, before_present: F) -> Result<(), Error>
    where
        A: FrameCallbacks + ?Sized,
        F: FnOnce(),
    {
        if self.state == WindowState::Created {
            self.state = self.state.start()?;
            info!("Window running ({}x{})", self.width, self.height);
        }
        let delta = self.delta_time.next();
        self.update(app, delta)?;
        self.render_with(app, before_present)
    }

    pub fn update<A: FrameCallbacks + ?Sized>(&mut self, app: &mut A, delta: Duration) -> Result<(), Error> {
        self.ensure_open()?;
        app.on_update(delta);
        Ok(())
    }

    /// Renders and presents one frame. Minimized windows draw nothing.
    pub fn render<A: FrameCallbacks + ?Sized>(&mut self, app: &mut A) -> Result<(), Error> {
        self.render_with(app, || {})
    }

    /// `frame_index` only advances once the frame has been presented.
    pub fn render_with<A, F>(&mut self, app: &mut A, before_present: F) -> Result<(), Error>
    where
        A: FrameCallbacks + ?Sized,
        F: FnOnce(),
    {
        self.ensure_open()?;
        if self.minimized {
            return Ok(());
        }
        let context = self.context.as_mut().ok_or(anyhow!("Window have been destroyed"))?;
        let mut frame = Frame {
            context: &mut *context,
            index: self.frame_index,
            width: self.width,
            height: self.height,
        };
        app.on_render(&mut frame);
        before_present();
        context.present()?;
        self.frame_index += 1;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.minimized = width == 0 || height == 0;
        self.width = width;
        self.height = height;
        debug!("Window resized to {}x{}", width, height);
        if let Some(context) = self.context.as_mut() {
            if !self.minimized {
                context.set_viewport(width, height);
            }
        }
    }

    /// Notifies the callbacks and releases the graphics context. Closing an
    /// already closed host does nothing.
    pub fn close<A: FrameCallbacks + ?Sized>(&mut self, app: &mut A) -> Result<(), Error> {
        if !self.state.is_open() {
            return Ok(());
        }
        self.state = self.state.begin_close()?;
        app.on_close();
        self.context = None;
        self.state = self.state.finish_close()?;
        info!("Window closed after {} frames", self.frame_index);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.state.is_open() && self.context.is_some() {
            Ok(())
        } else {
            Err(anyhow!("Window have been destroyed"))
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn delta_time(&self) -> &Duration {
        self.delta_time.delta_time()
    }

    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }
}
