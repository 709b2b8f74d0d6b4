//! GUI module - User interface components

mod about;
mod analysis;
mod app;
mod data_table;
mod overview;

pub use app::DashboardApp;
