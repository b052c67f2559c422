//! imgui-bridge: typed bindings over the `igg*` C shim for Dear ImGui draw
//! lists and ImPlot.
//!
//! The crate is split into a handle facade (`core`), a marshaling layer
//! (`marshal`) and the foreign call surface (`ffi`). The `draw`, `plot` and
//! `io` facades sit on top and are reached through [`Bridge`].

pub mod api;
pub mod core;
pub mod draw;
pub mod error;
pub mod ffi;
pub mod io;
pub mod marshal;
pub mod plot;
pub mod telemetry;

pub use api::{Bridge, BridgeConfig};
pub use error::{BridgeError, BridgeResult};
