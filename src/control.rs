//! Frame buffer control: bounded range fills, blend-toward-target math and
//! presentation-time brightness scaling.
//!
//! The pixel array is exclusively owned here; every write range is clamped
//! to the strip bounds, so no operation can write outside `[0, N)`.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, color::Rgb, math8::{scale8, scale8_video}};

/// Move an 8-bit channel toward a target value
///
/// The step is `scale8_video(|target - current|, rate)`, signed by
/// direction. `rate` is expressed in 256ths (75 is roughly 30% per call).
/// Because [`scale8_video`] never rounds a nonzero delta to zero, repeated
/// calls converge monotonically without overshoot and report `false`
/// exactly when `current == target`.
///
/// Returns whether the channel moved.
#[inline]
pub fn blend_u8_toward(current: &mut u8, target: u8, rate: u8) -> bool {
    let delta = scale8_video(target.abs_diff(*current), rate);
    if *current < target {
        *current += delta;
    } else {
        *current -= delta;
    }
    delta != 0
}

/// Move a color toward a target, channel-wise
///
/// Returns true iff any channel moved.
#[inline]
pub fn blend_rgb_toward(current: &mut Rgb, target: Rgb, rate: u8) -> bool {
    let r = blend_u8_toward(&mut current.r, target.r, rate);
    let g = blend_u8_toward(&mut current.g, target.g, rate);
    let b = blend_u8_toward(&mut current.b, target.b, rate);
    r || g || b
}

/// Owns the pixel array of an `N`-LED strip
///
/// Mutation goes through bounds-clamped fills or the checked pixel slice;
/// brightness is a global multiplier applied only in [`StripControl::present`],
/// never baked into stored pixels, so changing it loses no color data.
#[derive(Debug, Clone)]
pub struct StripControl<const N: usize> {
    pixels: [Rgb; N],
    brightness: u8,
    brightness_cap: u8,
}

impl<const N: usize> StripControl<N> {
    pub const fn new(brightness_cap: u8) -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
            brightness: 0,
            brightness_cap,
        }
    }

    /// Number of LEDs on the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Fill `[first, first + count)` with `color`
    ///
    /// The range is clamped to the strip: `first` to at most `N - 1` and
    /// `count` so the write never exceeds the last pixel. Out-of-range
    /// requests are silently narrowed, never an error.
    pub fn fill(&mut self, color: Rgb, first: usize, count: usize) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripControl.fill] ({:02x},{:02x},{:02x}) first={} count={}",
            color.r, color.g, color.b, first, count
        );
        if N == 0 {
            return;
        }

        let first = first.min(N - 1);
        let count = count.min(N - first);
        for pixel in &mut self.pixels[first..first + count] {
            *pixel = color;
        }
    }

    /// Fill the whole strip with `color`
    pub fn fill_solid(&mut self, color: Rgb) {
        self.fill(color, 0, N);
    }

    pub const fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub const fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Current global brightness (0-255, presentation-time only)
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the global brightness, clamped to the configured cap
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness.min(self.brightness_cap);
    }

    /// Present the buffer to the output driver
    ///
    /// Writes a brightness-scaled copy; the stored pixels stay unscaled.
    pub fn present<O: OutputDriver>(&self, output: &mut O) {
        let brightness = self.brightness;
        if brightness == 255 {
            output.write(&self.pixels);
            return;
        }

        let mut frame = self.pixels;
        for pixel in &mut frame {
            pixel.r = scale8(pixel.r, brightness);
            pixel.g = scale8(pixel.g, brightness);
            pixel.b = scale8(pixel.b, brightness);
        }
        output.write(&frame);
    }
}
