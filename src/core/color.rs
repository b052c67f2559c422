use serde::{Deserialize, Serialize};

use crate::core::Vec4;

const RED_SHIFT: u32 = 0;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 16;
const ALPHA_SHIFT: u32 = 24;

/// 32-bit packed color, one byte per channel.
///
/// Red sits in the low byte and alpha in the high byte, which is the layout the
/// native draw list writes into its vertex records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::from_rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    #[must_use]
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            ((alpha as u32) << ALPHA_SHIFT)
                | ((blue as u32) << BLUE_SHIFT)
                | ((green as u32) << GREEN_SHIFT)
                | ((red as u32) << RED_SHIFT),
        )
    }

    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    /// Converts a normalized color, saturating each channel to `0..=1` first.
    #[must_use]
    pub fn from_vec4(color: Vec4) -> Self {
        Self::from_rgba(
            unit_to_byte(color.x),
            unit_to_byte(color.y),
            unit_to_byte(color.z),
            unit_to_byte(color.w),
        )
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> RED_SHIFT) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> GREEN_SHIFT) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 >> BLUE_SHIFT) as u8
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> ALPHA_SHIFT) as u8
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        let scale = 1.0 / 255.0;
        Vec4::new(
            f32::from(self.red()) * scale,
            f32::from(self.green()) * scale,
            f32::from(self.blue()) * scale,
            f32::from(self.alpha()) * scale,
        )
    }
}

impl From<u32> for PackedColor {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

fn unit_to_byte(value: f32) -> u8 {
    // NaN saturates to 0 through `clamp` + `as`.
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::PackedColor;
    use crate::core::Vec4;

    #[test]
    fn red_occupies_low_byte() {
        assert_eq!(PackedColor::from_rgba(0x11, 0x22, 0x33, 0x44).bits(), 0x4433_2211);
        assert_eq!(PackedColor::WHITE.bits(), u32::MAX);
    }

    #[test]
    fn normalized_conversion_saturates() {
        let color = PackedColor::from_vec4(Vec4::new(2.0, -1.0, 0.5, f32::NAN));
        assert_eq!(color.to_rgba(), [255, 0, 128, 0]);
    }
}
