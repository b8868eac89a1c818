mod app;
mod clipboard;
mod effects;
mod ui;

pub use app::run_app;
