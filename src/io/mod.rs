//! Facade over the IO block of the current GUI context: frame timing, display
//! geometry, mouse and keyboard state fed in by the host platform layer.

mod flags;
mod state;

pub use flags::{BackendFlags, ConfigFlags};
pub use state::{IoMut, KEY_COUNT, KEY_MAP_COUNT, MOUSE_BUTTON_COUNT, MouseWheel, RenderMetrics};
