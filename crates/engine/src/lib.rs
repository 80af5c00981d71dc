pub mod application;
pub mod engine;
pub mod gfx;
pub mod host;
pub mod lifecycle;
pub mod options;
pub mod session;
pub mod window;
