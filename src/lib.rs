pub mod api;
pub mod app;
pub mod config;
pub mod state;
pub mod types;
pub mod ui;
