//! Plotting facade over the current plot context.

mod flags;
mod spec;
mod ui;

pub use flags::{AxisFlags, PlotFlags};
pub use spec::PlotSpec;
pub use ui::PlotUi;
