//! Four-layer procedural ocean wave animation.
//!
//! Every frame, four independent wave layers sweep the strip, each sampling
//! a deep-ocean gradient palette at a sine-derived index and accumulating
//! additively into the pixels. A whitecap pass sparkles where layers
//! constructively overlap, and a final pass deepens the blues.
//!
//! All oscillators read an internal millisecond clock that only ever
//! advances by the elapsed time between draws, so the rendered output is a
//! deterministic function of the delta sequence and the stored phase state.
//! An absolute-clock jump or reset shifts nothing but a single delta.

use embassy_time::Instant;

use super::Animation;
use crate::{
    color::{Palette16, Rgb, qadd_colors},
    control::StripControl,
    math8::{qadd8, scale8, scale16, sin8, sin16},
};

// Deep ocean gradients: layers 1 and 2 get their own palette, layers 3 and
// 4 share the third at different scale and phase.
#[allow(clippy::unreadable_literal)]
const OCEAN_PALETTE_1: Palette16 = Palette16::from_hex([
    0x000507, 0x000409, 0x00030B, 0x00030D, 0x000210, 0x000212, 0x000114, 0x000117, //
    0x000019, 0x00001C, 0x000026, 0x000031, 0x00003B, 0x000046, 0x14554B, 0x28AA50,
]);
#[allow(clippy::unreadable_literal)]
const OCEAN_PALETTE_2: Palette16 = Palette16::from_hex([
    0x000507, 0x000409, 0x00030B, 0x00030D, 0x000210, 0x000212, 0x000114, 0x000117, //
    0x000019, 0x00001C, 0x000026, 0x000031, 0x00003B, 0x000046, 0x0C5F52, 0x19BE5F,
]);
#[allow(clippy::unreadable_literal)]
const OCEAN_PALETTE_3: Palette16 = Palette16::from_hex([
    0x000208, 0x00030E, 0x000514, 0x00061A, 0x000820, 0x000927, 0x000B2D, 0x000C33, //
    0x000E39, 0x001040, 0x001450, 0x001860, 0x001C70, 0x002080, 0x1040BF, 0x2060FF,
]);

/// Dim additive canvas the layers accumulate onto
const BASE_COLOR: Rgb = Rgb { r: 2, g: 6, b: 10 };

/// Per-channel floor applied by the deepen pass; no pixel goes fully black
const FLOOR_COLOR: Rgb = Rgb { r: 2, g: 5, b: 7 };

// Beat oscillators over the internal clock. BPM values are Q8.8
// (256 = one beat per minute); `beat16` widens small whole-number rates.

#[inline]
const fn beat88(clock_ms: u32, bpm88: u16) -> u16 {
    ((clock_ms.wrapping_mul(bpm88 as u32).wrapping_mul(280)) >> 16) as u16
}

#[inline]
const fn beat16(clock_ms: u32, bpm: u16) -> u16 {
    let bpm88 = if bpm < 256 { bpm << 8 } else { bpm };
    beat88(clock_ms, bpm88)
}

#[inline]
const fn beat8(clock_ms: u32, bpm: u16) -> u8 {
    (beat16(clock_ms, bpm) >> 8) as u8
}

/// Bounded pseudo-sine oscillator in `[low, high]`, Q8.8 rate
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn beatsin88(clock_ms: u32, bpm88: u16, low: u16, high: u16) -> u16 {
    let wave = (sin16(beat88(clock_ms, bpm88)) as i32 + 32768) as u16;
    low + scale16(wave, high - low)
}

/// Bounded pseudo-sine oscillator in `[low, high]`, whole-number rate
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn beatsin16(clock_ms: u32, bpm: u16, low: u16, high: u16) -> u16 {
    let wave = (sin16(beat16(clock_ms, bpm)) as i32 + 32768) as u16;
    low + scale16(wave, high - low)
}

/// 8-bit bounded pseudo-sine oscillator in `[low, high]`
#[inline]
const fn beatsin8(clock_ms: u32, bpm: u16, low: u8, high: u8) -> u8 {
    low + scale8(sin8(beat8(clock_ms, bpm)), high - low)
}

/// Average channel intensity of a pixel
#[inline]
const fn average_light(pixel: Rgb) -> u8 {
    ((pixel.r as u16 + pixel.g as u16 + pixel.b as u16) / 3) as u8
}

/// Procedural ocean wave animation
///
/// State is four 16-bit wrapping color-index accumulators (one per layer)
/// plus the internal clock; everything else is derived per draw.
#[derive(Debug, Clone, Default)]
pub struct WaveAnimation {
    clock_ms: u32,
    layer_phase: [u16; 4],
    last_draw: Option<Instant>,
}

impl WaveAnimation {
    pub const fn new() -> Self {
        Self {
            clock_ms: 0,
            layer_phase: [0; 4],
            last_draw: None,
        }
    }

    /// Advance the clock and the per-layer phase accumulators
    ///
    /// Layer speeds are modulated by two slow oscillators and advance with
    /// distinct signs and rates, so the four layers desynchronize over time.
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, delta_ms: u32) {
        self.clock_ms = self.clock_ms.wrapping_add(delta_ms);
        let t = self.clock_ms;

        let speed_1 = u32::from(beatsin16(t, 3, 179, 269));
        let speed_2 = u32::from(beatsin16(t, 4, 179, 269));
        let delta_1 = delta_ms.wrapping_mul(speed_1) / 256;
        let delta_2 = delta_ms.wrapping_mul(speed_2) / 256;
        let delta_21 = (delta_1 + delta_2) / 2;

        let step = |delta: u32, rate: u16| (delta.wrapping_mul(u32::from(rate))) as u16;

        self.layer_phase[0] = self.layer_phase[0]
            .wrapping_add(step(delta_1, beatsin88(t, 1011, 10, 13)));
        self.layer_phase[1] = self.layer_phase[1]
            .wrapping_sub(step(delta_21, beatsin88(t, 777, 8, 11)));
        self.layer_phase[2] = self.layer_phase[2]
            .wrapping_sub(step(delta_1, beatsin88(t, 501, 5, 7)));
        self.layer_phase[3] = self.layer_phase[3]
            .wrapping_sub(step(delta_2, beatsin88(t, 257, 4, 6)));
    }

    /// Render one wave layer additively onto the strip
    ///
    /// Per pixel: advance the wave angle, derive a sine intensity that
    /// modulates how fast the color index runs along the strip, then sample
    /// the palette at a sine of that index.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_layer<const N: usize>(
        strip: &mut StripControl<N>,
        palette: &Palette16,
        phase: u16,
        wave_scale: u16,
        brightness: u8,
        angle_offset: u16,
    ) {
        let mut color_index = phase;
        let mut wave_angle = angle_offset;
        let wave_scale_half = (wave_scale / 2) + 20;

        for pixel in strip.pixels_mut() {
            wave_angle = wave_angle.wrapping_add(250);
            let angle_sin = (i32::from(sin16(wave_angle)) + 32768) as u16;
            let index_step = scale16(angle_sin, wave_scale_half).wrapping_add(wave_scale_half);
            color_index = color_index.wrapping_add(index_step);

            let index_sin = (i32::from(sin16(color_index)) + 32768) as u16;
            let sample_index = scale16(index_sin, 240) as u8;

            let color = palette.sample(sample_index, brightness);
            *pixel = qadd_colors(*pixel, color);
        }
    }

    /// Sparkle where wave layers constructively overlap
    ///
    /// The threshold is an oscillating baseline plus a per-pixel sine
    /// ripple; pixels brighter than it on average get a cyan-white tint
    /// proportional to the overage.
    fn add_whitecaps<const N: usize>(&self, strip: &mut StripControl<N>) {
        let base_threshold = beatsin8(self.clock_ms, 9, 55, 65);
        let mut ripple = beat8(self.clock_ms, 7);

        for pixel in strip.pixels_mut() {
            let threshold = scale8(sin8(ripple), 20) + base_threshold;
            ripple = ripple.wrapping_add(7);

            let light = average_light(*pixel);
            if light > threshold {
                let overage = light - threshold;
                let overage_2 = qadd8(overage, overage);
                let tint = Rgb {
                    r: overage,
                    g: overage_2,
                    b: qadd8(overage_2, overage_2),
                };
                *pixel = qadd_colors(*pixel, tint);
            }
        }
    }

    /// Bias toward deep ocean tones and floor every channel
    fn deepen_colors<const N: usize>(strip: &mut StripControl<N>) {
        for pixel in strip.pixels_mut() {
            pixel.b = scale8(pixel.b, 145);
            pixel.g = scale8(pixel.g, 200);
            pixel.r = pixel.r.max(FLOOR_COLOR.r);
            pixel.g = pixel.g.max(FLOOR_COLOR.g);
            pixel.b = pixel.b.max(FLOOR_COLOR.b);
        }
    }
}

impl Animation for WaveAnimation {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn begin<const N: usize>(&mut self, strip: &mut StripControl<N>) {
        self.clock_ms = 0;
        self.layer_phase = [0; 4];
        self.last_draw = None;
        strip.fill_solid(BASE_COLOR);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw<const N: usize>(&mut self, now: Instant, strip: &mut StripControl<N>) {
        let delta_ms = match self.last_draw {
            Some(last) => now.duration_since(last).as_millis() as u32,
            None => 0,
        };
        self.last_draw = Some(now);
        self.advance(delta_ms);
        let t = self.clock_ms;

        strip.fill_solid(BASE_COLOR);

        Self::render_layer(
            strip,
            &OCEAN_PALETTE_1,
            self.layer_phase[0],
            beatsin16(t, 3, 11 * 256, 14 * 256),
            beatsin8(t, 10, 70, 130),
            0u16.wrapping_sub(beat16(t, 301)),
        );
        Self::render_layer(
            strip,
            &OCEAN_PALETTE_2,
            self.layer_phase[1],
            beatsin16(t, 4, 6 * 256, 9 * 256),
            beatsin8(t, 17, 40, 80),
            beat16(t, 401),
        );
        Self::render_layer(
            strip,
            &OCEAN_PALETTE_3,
            self.layer_phase[2],
            6 * 256,
            beatsin8(t, 9, 10, 38),
            0u16.wrapping_sub(beat16(t, 503)),
        );
        Self::render_layer(
            strip,
            &OCEAN_PALETTE_3,
            self.layer_phase[3],
            5 * 256,
            beatsin8(t, 8, 10, 28),
            beat16(t, 601),
        );

        self.add_whitecaps(strip);
        Self::deepen_colors(strip);
    }
}
