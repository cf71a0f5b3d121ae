// Terminal UI module using ratatui

mod app;
mod dashboard;
mod widgets;

pub use app::{Action, App, Panel, Status};
pub use dashboard::Dashboard;
pub use widgets::Palette;
