//! Fixed 16-entry gradient palettes with interpolated lookup.

use crate::{
    color::{Rgb, blend_colors},
    math8::scale8_video,
};

/// A 16-entry gradient palette
///
/// Queried by an 8-bit index: the high nibble selects a segment and the low
/// nibble blends linearly toward the next entry, wrapping from entry 15
/// back to entry 0 so the gradient is continuous around the circle.
#[derive(Debug, Clone, Copy)]
pub struct Palette16([Rgb; 16]);

impl Palette16 {
    pub const fn new(entries: [Rgb; 16]) -> Self {
        Self(entries)
    }

    /// Build a palette from 16 hex colors (0xRRGGBB format)
    pub const fn from_hex(entries: [u32; 16]) -> Self {
        let mut colors = [Rgb { r: 0, g: 0, b: 0 }; 16];
        let mut i = 0;
        while i < 16 {
            colors[i] = crate::color::rgb_from_u32(entries[i]);
            i += 1;
        }
        Self(colors)
    }

    /// Sample the palette at `index` with linear blending, scaled by `brightness`
    ///
    /// Brightness scaling uses [`scale8_video`] so a dim layer sampling a
    /// non-black entry never collapses to full black.
    pub fn sample(&self, index: u8, brightness: u8) -> Rgb {
        let hi = (index >> 4) as usize;
        let lo = index & 0x0F;

        let entry = self.0[hi];
        let color = if lo == 0 {
            entry
        } else {
            let next = self.0[(hi + 1) % 16];
            blend_colors(entry, next, lo << 4)
        };

        if brightness == 255 {
            return color;
        }
        Rgb {
            r: scale8_video(color.r, brightness),
            g: scale8_video(color.g, brightness),
            b: scale8_video(color.b, brightness),
        }
    }

    /// Access the raw entries
    pub const fn entries(&self) -> &[Rgb; 16] {
        &self.0
    }
}
