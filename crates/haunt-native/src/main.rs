use clap::Parser;
use haunt_core::HauntedHouse;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod assets;
mod cli;
mod input;
mod panel;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();

    let mut house = HauntedHouse::build(cli.scene_config())?;
    cli.apply_lights(&mut house.lights);
    // Readiness gate: refuse to open a window without every texture
    let bundle = assets::load_bundle(&house.config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = app::App::new(house, bundle);
    event_loop.run_app(&mut app)?;
    app.finish()
}
