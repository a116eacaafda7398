//! Desktop shell built on egui/eframe

mod app;
mod components;
mod constants;

pub use app::run_gui;
