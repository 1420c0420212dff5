//! GUI module - User interface components

mod app;
mod control_panel;
pub mod views;

pub use app::DashboardApp;
pub use control_panel::{group_thousands, ControlPanel, ControlPanelAction, Page};
