use anyhow::{anyhow, Error};
use glam::Vec4;
use crate::gfx::{ClearMask, GraphicsContext};

#[derive(Clone, Debug, PartialEq)]
pub enum GfxCall {
    SetClearColor(Vec4),
    SetViewport { width: u32, height: u32 },
    Clear(ClearMask),
    Present,
}

/// Headless context that keeps a log of every call instead of drawing.
#[derive(Default, Debug)]
pub struct RecordingContext {
    calls: Vec<GfxCall>,
    fail_present: bool,
}

impl RecordingContext {
    /// Every following `present` returns an error.
    pub fn failing_present() -> Self {
        Self { fail_present: true, ..Default::default() }
    }

    pub fn calls(&self) -> &[GfxCall] {
        &self.calls
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|call| **call == GfxCall::Present).count()
    }

    pub fn clears(&self) -> Vec<ClearMask> {
        self.calls.iter().filter_map(|call| match call {
            GfxCall::Clear(mask) => Some(*mask),
            _ => None,
        }).collect()
    }
}

impl GraphicsContext for RecordingContext {
    fn set_clear_color(&mut self, color: Vec4) {
        self.calls.push(GfxCall::SetClearColor(color));
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(GfxCall::SetViewport { width, height });
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(GfxCall::Clear(mask));
    }

    fn present(&mut self) -> Result<(), Error> {
        if self.fail_present {
            return Err(anyhow!("Swap buffers failed"));
        }
        self.calls.push(GfxCall::Present);
        Ok(())
    }
}
