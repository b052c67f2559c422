mod bridge;
mod bridge_config;
mod draw_list_controller;
mod io_controller;
mod plot_context_controller;

pub use bridge::Bridge;
pub use bridge_config::{BridgeConfig, DrawDefaults, PlotDefaults};
