//! Static color with smooth click rotation.

use embassy_time::Instant;

use super::Animation;
use crate::{
    color::{Rgb, rgb_from_u32},
    control::{StripControl, blend_rgb_toward},
    gamma::correct,
};

/// Blend rate toward the target color, in 256ths per tick (~30%)
const BLEND_RATE: u8 = 75;

// Click rotation, gamma-corrected at compile time.
#[allow(clippy::unreadable_literal)]
const ROTATION_COLORS: [Rgb; 7] = [
    correct(rgb_from_u32(0xFFFFFF)), // White
    correct(rgb_from_u32(0xFF00FF)), // Magenta
    correct(rgb_from_u32(0xFF0000)), // Red
    correct(rgb_from_u32(0xFFA500)), // Orange
    correct(rgb_from_u32(0x00FF00)), // Green
    correct(rgb_from_u32(0x00BFFF)), // Deep sky blue
    correct(rgb_from_u32(0x0000FF)), // Blue
];

/// Solid color animation
///
/// Holds a current and a target color from a fixed rotation list. A click
/// advances the target; each tick moves the current color a step toward it
/// and refreshes the strip, producing a smooth ramp instead of a jump.
#[derive(Debug, Clone)]
pub struct SolidAnimation {
    color_idx: usize,
    current_color: Rgb,
    target_color: Rgb,
}

impl Default for SolidAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidAnimation {
    pub const fn new() -> Self {
        Self {
            color_idx: 0,
            current_color: ROTATION_COLORS[0],
            target_color: ROTATION_COLORS[0],
        }
    }

    /// Color the strip currently shows (mid-blend values included)
    pub const fn current_color(&self) -> Rgb {
        self.current_color
    }

    /// Color the blend is converging toward
    pub const fn target_color(&self) -> Rgb {
        self.target_color
    }
}

impl Animation for SolidAnimation {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn begin<const N: usize>(&mut self, strip: &mut StripControl<N>) {
        self.color_idx = 0;
        self.current_color = ROTATION_COLORS[0];
        self.target_color = ROTATION_COLORS[0];
        strip.fill_solid(self.current_color);
    }

    fn click(&mut self) {
        self.color_idx = (self.color_idx + 1) % ROTATION_COLORS.len();
        self.target_color = ROTATION_COLORS[self.color_idx];
    }

    fn tick<const N: usize>(&mut self, _now: Instant, strip: &mut StripControl<N>) {
        if self.current_color == self.target_color {
            return;
        }

        let changed = blend_rgb_toward(&mut self.current_color, self.target_color, BLEND_RATE);
        if changed {
            strip.fill_solid(self.current_color);
        }
    }
}
