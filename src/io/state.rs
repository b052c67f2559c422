use std::ffi::c_int;

use serde::{Deserialize, Serialize};

use crate::core::{IoHandle, Vec2};
use crate::ffi::ForeignBackend;
use crate::marshal::{ForeignString, RawVec2, SkipReason, table_index};

use super::{BackendFlags, ConfigFlags};

/// Mouse buttons tracked by the native IO block.
pub const MOUSE_BUTTON_COUNT: usize = 5;
/// Size of the native key-down table indexed by host key codes.
pub const KEY_COUNT: usize = 512;
/// Named keys the native key map has a slot for.
pub const KEY_MAP_COUNT: usize = 22;

/// Wheel movement for the current frame, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MouseWheel {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Geometry and window counts from the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderMetrics {
    pub render_vertices: usize,
    pub render_indices: usize,
    pub render_windows: usize,
    pub active_windows: usize,
    pub active_allocations: usize,
}

fn count(value: c_int) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// IO block of the current GUI context.
///
/// The platform layer writes display size, timing and input through this view
/// before each frame and reads back what the GUI wants to capture. Key codes
/// and mouse buttons index fixed native tables; out-of-range values make the
/// call a no-op.
pub struct IoMut<'a, B: ForeignBackend> {
    backend: &'a mut B,
    io: IoHandle,
}

impl<'a, B: ForeignBackend> IoMut<'a, B> {
    pub(crate) fn new(backend: &'a mut B, io: IoHandle) -> Self {
        Self { backend, io }
    }

    #[must_use]
    pub fn handle(&self) -> IoHandle {
        self.io
    }

    pub fn want_capture_mouse(&mut self) -> bool {
        self.backend.io_want_capture_mouse(self.io)
    }

    pub fn want_capture_keyboard(&mut self) -> bool {
        self.backend.io_want_capture_keyboard(self.io)
    }

    pub fn want_text_input(&mut self) -> bool {
        self.backend.io_want_text_input(self.io)
    }

    /// Frames per second, averaged by the native side over recent frames.
    pub fn framerate(&mut self) -> f32 {
        self.backend.io_framerate(self.io)
    }

    pub fn metrics(&mut self) -> RenderMetrics {
        RenderMetrics {
            render_vertices: count(self.backend.io_metrics_render_vertices(self.io)),
            render_indices: count(self.backend.io_metrics_render_indices(self.io)),
            render_windows: count(self.backend.io_metrics_render_windows(self.io)),
            active_windows: count(self.backend.io_metrics_active_windows(self.io)),
            active_allocations: count(self.backend.io_metrics_active_allocations(self.io)),
        }
    }

    pub fn mouse_delta(&mut self) -> Vec2 {
        let mut out = RawVec2::default();
        self.backend.io_mouse_delta(self.io, &mut out);
        out.into()
    }

    pub fn mouse_wheel(&mut self) -> MouseWheel {
        let mut wheel = MouseWheel::default();
        self.backend
            .io_mouse_wheel(self.io, &mut wheel.horizontal, &mut wheel.vertical);
        wheel
    }

    pub fn display_frame_buffer_scale(&mut self) -> Vec2 {
        let mut out = RawVec2::default();
        self.backend.io_display_frame_buffer_scale(self.io, &mut out);
        out.into()
    }

    pub fn set_display_size(&mut self, size: Vec2) {
        self.backend.io_set_display_size(self.io, &size.into());
    }

    /// Ratio of framebuffer pixels to display units, e.g. 2.0 on HiDPI screens.
    pub fn set_display_frame_buffer_scale(&mut self, scale: Vec2) {
        self.backend
            .io_set_display_frame_buffer_scale(self.io, &scale.into());
    }

    pub fn set_mouse_position(&mut self, pos: Vec2) {
        self.backend.io_set_mouse_position(self.io, &pos.into());
    }

    /// Reports the mouse as unavailable, e.g. outside the window.
    pub fn clear_mouse_position(&mut self) {
        self.set_mouse_position(Vec2::new(-f32::MAX, -f32::MAX));
    }

    pub fn set_mouse_button_down(&mut self, button: usize, down: bool) {
        const ENTRY: &str = "iggIoSetMouseButtonDown";
        match table_index(button, MOUSE_BUTTON_COUNT) {
            Ok(index) => self.backend.io_set_mouse_button_down(self.io, index, down),
            Err(reason) => reason.log(ENTRY),
        }
    }

    pub fn add_mouse_wheel_delta(&mut self, horizontal: f32, vertical: f32) {
        self.backend
            .io_add_mouse_wheel_delta(self.io, horizontal, vertical);
    }

    /// Seconds elapsed since the previous frame.
    pub fn set_delta_time(&mut self, seconds: f32) {
        self.backend.io_set_delta_time(self.io, seconds);
    }

    pub fn set_font_global_scale(&mut self, scale: f32) {
        self.backend.io_set_font_global_scale(self.io, scale);
    }

    /// Whether the GUI draws its own software cursor.
    pub fn mouse_draw_cursor(&mut self) -> bool {
        self.backend.io_mouse_draw_cursor(self.io)
    }

    pub fn set_mouse_draw_cursor(&mut self, show: bool) {
        self.backend.io_set_mouse_draw_cursor(self.io, show);
    }

    pub fn key_press(&mut self, key: usize) {
        if let Some(key) = key_index(key, "iggIoKeyPress") {
            self.backend.io_key_press(self.io, key);
        }
    }

    pub fn key_release(&mut self, key: usize) {
        if let Some(key) = key_index(key, "iggIoKeyRelease") {
            self.backend.io_key_release(self.io, key);
        }
    }

    /// Binds one of the GUI's named keys to a host key code.
    pub fn key_map(&mut self, imgui_key: usize, native_key: usize) {
        const ENTRY: &str = "iggIoKeyMap";
        let slot = match table_index(imgui_key, KEY_MAP_COUNT) {
            Ok(slot) => slot,
            Err(reason) => return reason.log(ENTRY),
        };
        if let Some(native_key) = key_index(native_key, ENTRY) {
            self.backend.io_key_map(self.io, slot, native_key);
        }
    }

    /// Ctrl is held when either key code is down.
    pub fn key_ctrl(&mut self, left: usize, right: usize) {
        if let Some((left, right)) = key_pair(left, right, "iggIoKeyCtrl") {
            self.backend.io_key_ctrl(self.io, left, right);
        }
    }

    pub fn key_shift(&mut self, left: usize, right: usize) {
        if let Some((left, right)) = key_pair(left, right, "iggIoKeyShift") {
            self.backend.io_key_shift(self.io, left, right);
        }
    }

    pub fn key_alt(&mut self, left: usize, right: usize) {
        if let Some((left, right)) = key_pair(left, right, "iggIoKeyAlt") {
            self.backend.io_key_alt(self.io, left, right);
        }
    }

    pub fn key_super(&mut self, left: usize, right: usize) {
        if let Some((left, right)) = key_pair(left, right, "iggIoKeySuper") {
            self.backend.io_key_super(self.io, left, right);
        }
    }

    /// Queues typed text. Empty text queues nothing; the native side reads up
    /// to the first NUL byte.
    pub fn add_input_characters(&mut self, chars: &str) {
        const ENTRY: &str = "iggIoAddInputCharactersUTF8";
        if chars.is_empty() {
            return SkipReason::Empty.log(ENTRY);
        }
        let buffer = ForeignString::new(chars);
        self.backend.io_add_input_characters_utf8(self.io, &buffer);
    }

    /// Path for persisted window settings; `None` turns persistence off.
    pub fn set_ini_filename(&mut self, path: Option<&str>) {
        let buffer = ForeignString::optional(path);
        self.backend.io_set_ini_filename(self.io, buffer.as_ref());
    }

    pub fn config_flags(&mut self) -> ConfigFlags {
        ConfigFlags::from_c(self.backend.io_config_flags(self.io))
    }

    pub fn set_config_flags(&mut self, flags: ConfigFlags) {
        self.backend.io_set_config_flags(self.io, flags.to_c());
    }

    pub fn backend_flags(&mut self) -> BackendFlags {
        BackendFlags::from_c(self.backend.io_backend_flags(self.io))
    }

    pub fn set_backend_flags(&mut self, flags: BackendFlags) {
        self.backend.io_set_backend_flags(self.io, flags.to_c());
    }

    pub fn frame_count_since_last_input(&mut self) -> i32 {
        self.backend.io_frame_count_since_last_input(self.io)
    }

    pub fn set_frame_count_since_last_input(&mut self, frames: i32) {
        self.backend
            .io_set_frame_count_since_last_input(self.io, frames);
    }
}

fn key_index(key: usize, entry: &'static str) -> Option<c_int> {
    table_index(key, KEY_COUNT)
        .map_err(|reason| reason.log(entry))
        .ok()
}

fn key_pair(left: usize, right: usize, entry: &'static str) -> Option<(c_int, c_int)> {
    Some((key_index(left, entry)?, key_index(right, entry)?))
}

impl<B: ForeignBackend> std::fmt::Debug for IoMut<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoMut")
            .field("io", &self.io)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{count, key_pair};

    #[test]
    fn negative_native_counts_read_as_zero() {
        assert_eq!(count(-1), 0);
        assert_eq!(count(42), 42);
    }

    #[test]
    fn key_pair_needs_both_codes_in_range() {
        assert_eq!(key_pair(17, 18, "iggIoKeyCtrl"), Some((17, 18)));
        assert_eq!(key_pair(17, 512, "iggIoKeyCtrl"), None);
    }
}
