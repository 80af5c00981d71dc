use anyhow::Error;
use glam::Vec4;

pub mod clear;
pub mod gl_context;
pub mod recording;

pub use clear::ClearMask;

/// The subset of a rendering context the frame host drives.
pub trait GraphicsContext {
    fn set_clear_color(&mut self, color: Vec4);
    fn set_viewport(&mut self, width: u32, height: u32);
    fn clear(&mut self, mask: ClearMask);
    /// Makes the frame rendered so far visible.
    fn present(&mut self) -> Result<(), Error>;
}
