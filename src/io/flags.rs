use std::ffi::c_int;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Application-side options stored in the IO block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ConfigFlags: u32 {
        const NAV_ENABLE_KEYBOARD = 1 << 0;
        const NAV_ENABLE_GAMEPAD = 1 << 1;
        /// Let keyboard navigation move the OS mouse cursor.
        const NAV_ENABLE_SET_MOUSE_POS = 1 << 2;
        const NAV_NO_CAPTURE_KEYBOARD = 1 << 3;
        /// Ignore mouse position and buttons reported by the host.
        const NO_MOUSE = 1 << 4;
        const NO_MOUSE_CURSOR_CHANGE = 1 << 5;
        const IS_SRGB = 1 << 20;
        const IS_TOUCH_SCREEN = 1 << 21;
    }
}

bitflags! {
    /// Capabilities the platform and renderer backends advertise.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct BackendFlags: u32 {
        const HAS_GAMEPAD = 1 << 0;
        const HAS_MOUSE_CURSORS = 1 << 1;
        const HAS_SET_MOUSE_POS = 1 << 2;
        /// Renderer honors per-command vertex offsets, allowing lists above 64k vertices.
        const RENDERER_HAS_VTX_OFFSET = 1 << 3;
    }
}

impl ConfigFlags {
    pub(crate) fn to_c(self) -> c_int {
        self.bits() as c_int
    }

    /// Unknown bits are kept so a round trip never drops native options.
    pub(crate) fn from_c(bits: c_int) -> Self {
        Self::from_bits_retain(bits as u32)
    }
}

impl BackendFlags {
    pub(crate) fn to_c(self) -> c_int {
        self.bits() as c_int
    }

    pub(crate) fn from_c(bits: c_int) -> Self {
        Self::from_bits_retain(bits as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::{BackendFlags, ConfigFlags};

    #[test]
    fn unknown_native_bits_survive_a_round_trip() {
        let flags = ConfigFlags::from_c((1 << 30) | 1);
        assert!(flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD));
        assert_eq!(flags.to_c(), (1 << 30) | 1);
    }

    #[test]
    fn backend_capabilities_keep_their_bits_through_json() {
        let flags = BackendFlags::HAS_MOUSE_CURSORS | BackendFlags::HAS_SET_MOUSE_POS;
        assert_eq!(flags.to_c(), 6);
        let json = serde_json::to_string(&flags).expect("serialize");
        let back: BackendFlags = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, flags);
    }
}
