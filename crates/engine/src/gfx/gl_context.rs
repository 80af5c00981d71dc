use std::ffi::CString;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use anyhow::{anyhow, Error};
use glam::Vec4;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use tracing::{debug, info, warn};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::HasWindowHandle;
use winit::window::Window;
use crate::gfx::{ClearMask, GraphicsContext};
use crate::options::{RenderingOptions, WindowOptions};

/// An OpenGL context made current on the surface of one window.
///
/// The context is released when this value is dropped, which must happen
/// before the window it was created for is destroyed.
pub struct GlContext {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
}

impl GlContext {
    /// Opens a window together with a matching GL context.
    pub fn create_window(event_loop: &ActiveEventLoop, window_options: &WindowOptions, rendering: &RenderingOptions) -> Result<(Window, Self), Error> {
        let attributes = Window::default_attributes()
            .with_title(window_options.title.as_str())
            .with_inner_size(PhysicalSize::new(window_options.width, window_options.height))
            .with_resizable(window_options.resizable);

        let template = ConfigTemplateBuilder::new()
            .with_depth_size(rendering.depth_bits);

        let (window, config) = catch_missing_config(|| {
            DisplayBuilder::new()
                .with_window_attributes(Some(attributes))
                .build(event_loop, template, pick_config)
        })?
        .map_err(|err| anyhow!("Failed to find a suitable GL config : {}", err))?;
        let window = window.ok_or(anyhow!("Display did not create a window"))?;

        let context = Self::new(&window, &config, rendering)?;
        Ok((window, context))
    }

    fn new(window: &Window, config: &Config, rendering: &RenderingOptions) -> Result<Self, Error> {
        let display = config.display();
        let raw_handle = window.window_handle().ok().map(|handle| handle.as_raw());

        let attributes = ContextAttributesBuilder::new().build(raw_handle);
        let fallback = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(None))
            .build(raw_handle);

        let not_current = match unsafe { display.create_context(config, &attributes) } {
            Ok(context) => context,
            Err(err) => {
                warn!("Desktop GL context unavailable ({}), falling back to GLES", err);
                unsafe { display.create_context(config, &fallback)? }
            }
        };

        let surface_attributes = window.build_surface_attributes(SurfaceAttributesBuilder::default())?;
        let surface = unsafe { display.create_window_surface(config, &surface_attributes)? };
        let context = not_current.make_current(&surface)?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(&symbol),
            Err(_) => ptr::null(),
        });

        if rendering.vsync {
            if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                warn!("Failed to enable vsync : {}", err);
            }
        }

        info!("Created GL context (depth bits: {}, samples: {})", config.depth_size(), config.num_samples());
        Ok(Self { context, surface })
    }
}

/// Panic payload raised by `pick_config` when the display filtered out every
/// config. The picker has to return a `Config`, so this is the only way out.
struct NoGlConfig;

/// Prefers the config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    match configs.reduce(|best, config| if config.num_samples() > best.num_samples() { config } else { best }) {
        Some(config) => config,
        None => panic::panic_any(NoGlConfig),
    }
}

/// Turns a `NoGlConfig` unwinding out of `build` into an error. Any other
/// panic keeps unwinding.
fn catch_missing_config<T>(build: impl FnOnce() -> T) -> Result<T, Error> {
    match panic::catch_unwind(AssertUnwindSafe(build)) {
        Ok(value) => Ok(value),
        Err(payload) if payload.is::<NoGlConfig>() => Err(anyhow!("Display offered no GL config")),
        Err(payload) => panic::resume_unwind(payload),
    }
}

impl GraphicsContext for GlContext {
    fn set_clear_color(&mut self, color: Vec4) {
        unsafe { gl::ClearColor(color.x, color.y, color.z, color.w) };
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, w, h);
        }
        unsafe { gl::Viewport(0, 0, width as i32, height as i32) };
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe { gl::Clear(mask.bits()) };
    }

    fn present(&mut self) -> Result<(), Error> {
        Ok(self.surface.swap_buffers(&self.context)?)
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        debug!("Releasing GL context");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_becomes_an_error() {
        let result: Result<u32, Error> = catch_missing_config(|| panic::panic_any(NoGlConfig));
        assert_eq!(result.unwrap_err().to_string(), "Display offered no GL config");
    }

    #[test]
    fn successful_build_passes_through() {
        assert_eq!(catch_missing_config(|| 7).unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "driver exploded")]
    fn unrelated_panics_keep_unwinding() {
        let _ = catch_missing_config(|| -> u32 { panic!("driver exploded") });
    }
}
