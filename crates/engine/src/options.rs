use glam::Vec4;

#[derive(Clone, Debug)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Alunite".to_string(),
            width: 640,
            height: 480,
            resizable: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderingOptions {
    pub clear_color: Vec4,
    /// Minimum depth buffer precision requested from the display.
    pub depth_bits: u8,
    pub vsync: bool,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self {
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            depth_bits: 24,
            vsync: true,
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct Options {
    pub main_window: WindowOptions,
    pub rendering: RenderingOptions,
}
