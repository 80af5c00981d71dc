use anyhow::Error;
use tracing::info;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use crate::gfx::gl_context::GlContext;
use crate::host::FrameHost;
use crate::options::Options;

/// Opens the main window and a frame host bound to its GL context.
///
/// The host is sized from the window's actual inner size, which the window
/// manager may already have changed from the requested one. The caller must
/// drop the host before the window.
pub fn create_window(event_loop: &ActiveEventLoop, options: &Options) -> Result<(Window, FrameHost<GlContext>), Error> {
    let (window, context) = GlContext::create_window(event_loop, &options.main_window, &options.rendering)?;
    let size = window.inner_size();
    let host = FrameHost::with_size(context, size.width, size.height, &options.rendering);
    info!("Created window '{}' ({}x{})", options.main_window.title, size.width, size.height);
    Ok((window, host))
}
