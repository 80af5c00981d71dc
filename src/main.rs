mod window;

use anyhow::Error;
use engine::engine::Engine;
use engine::options::Options;
use crate::window::AluniteWindow;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();
    Engine::new(Options::default(), AluniteWindow::default()).run()
}
