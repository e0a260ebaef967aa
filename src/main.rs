//! Dock demo - drag icons to reorder them

mod runtime;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use dock_reorder::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    dock_reorder::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(items = config.items.len(), "starting dock");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
