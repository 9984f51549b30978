mod app;
mod controller;
mod state;
mod widgets;

use anyhow::Result;
use app::JudgeApp;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create("judge_gui.log")?,
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Hackathon Judging Panel",
        native_options,
        Box::new(|cc| Ok(Box::new(JudgeApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
