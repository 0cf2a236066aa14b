mod app;
mod controls;
mod settings;

use clap::Parser;
use log::info;
use torus_life::{Grid, Pattern};

use crate::{app::App, controls::Controls, settings::Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::parse();
    let (w, h) = settings.grid_size();
    let mut grid = Grid::new(w, h)?;
    grid.stamp(0, 0, &Pattern::glider());
    info!("starting on a {w}x{h} board");

    let cell_size = settings.cell_size as f32;
    let controls = Controls::new(settings.speed, settings.paused, cell_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.width as f32 + 16., settings.height as f32 + 48.]),
        ..Default::default()
    };
    eframe::run_native(
        "Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, grid, controls, cell_size)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
