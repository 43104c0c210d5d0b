//! Continuous hue wheel cycle.

use embassy_time::Instant;

use super::Animation;
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    control::StripControl,
};

/// Elapsed time between hue steps, in milliseconds
const STEP_MS: u64 = 200;

/// Cycles the whole strip around the hue wheel
///
/// The 8-bit hue counter advances once per 200ms of accumulated elapsed
/// time, independent of how often `tick` is actually called: 1000ms of
/// wall time always yields exactly 5 steps. Wraps every 256 steps.
#[derive(Debug, Clone, Default)]
pub struct HueAnimation {
    hue: u8,
    carry_ms: u64,
    last_tick: Option<Instant>,
}

impl HueAnimation {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            carry_ms: 0,
            last_tick: None,
        }
    }

    /// Current position on the hue wheel
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    fn color(&self) -> Rgb {
        hsv2rgb(Hsv {
            hue: self.hue,
            sat: 255,
            val: 255,
        })
    }
}

impl Animation for HueAnimation {
    fn name(&self) -> &'static str {
        "hue"
    }

    fn begin<const N: usize>(&mut self, strip: &mut StripControl<N>) {
        self.hue = 0;
        self.carry_ms = 0;
        self.last_tick = None;
        strip.fill_solid(self.color());
    }

    fn tick<const N: usize>(&mut self, now: Instant, strip: &mut StripControl<N>) {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };

        self.carry_ms += now.duration_since(last).as_millis();
        self.last_tick = Some(now);

        if self.carry_ms < STEP_MS {
            return;
        }

        while self.carry_ms >= STEP_MS {
            self.carry_ms -= STEP_MS;
            self.hue = self.hue.wrapping_add(1);
        }
        strip.fill_solid(self.color());
    }
}
