//! Animation variants with compile-time known dispatch
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the [`Animation`] trait; the manager drives
//! the lifecycle `begin -> (click | tick | draw)* -> end`.

mod hue;
mod initial;
mod solid;
mod wave;

use embassy_time::Instant;
pub use hue::HueAnimation;
pub use initial::InitialAnimation;
pub use solid::SolidAnimation;
pub use wave::WaveAnimation;

use crate::control::StripControl;

const ANIMATION_NAME_INITIAL: &str = "initial";
const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_HUE: &str = "hue";
const ANIMATION_NAME_WAVE: &str = "wave";

const ANIMATION_ID_INITIAL: u8 = 0;
const ANIMATION_ID_SOLID: u8 = 1;
const ANIMATION_ID_HUE: u8 = 2;
const ANIMATION_ID_WAVE: u8 = 3;

/// Capability set of a single animation
///
/// `click`, `tick` and `draw` are only invoked between `begin` and `end`;
/// the manager guarantees that ordering. `tick` runs every loop iteration
/// at the native loop rate, `draw` only on the paced frame interval.
pub trait Animation {
    fn name(&self) -> &'static str;

    /// Take ownership of the strip and render the first state
    fn begin<const N: usize>(&mut self, _strip: &mut StripControl<N>) {}

    /// Release the strip; the instance is retired afterwards
    fn end(&mut self) {}

    /// React to a short press
    fn click(&mut self) {}

    /// Per-iteration update (time-based blends, cadence counters)
    fn tick<const N: usize>(&mut self, _now: Instant, _strip: &mut StripControl<N>) {}

    /// Render a frame; called once per paced frame interval
    fn draw<const N: usize>(&mut self, _now: Instant, _strip: &mut StripControl<N>) {}
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Initial = ANIMATION_ID_INITIAL,
    Solid = ANIMATION_ID_SOLID,
    Hue = ANIMATION_ID_HUE,
    Wave = ANIMATION_ID_WAVE,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_INITIAL => Self::Initial,
            ANIMATION_ID_SOLID => Self::Solid,
            ANIMATION_ID_HUE => Self::Hue,
            ANIMATION_ID_WAVE => Self::Wave,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => ANIMATION_NAME_INITIAL,
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Hue => ANIMATION_NAME_HUE,
            Self::Wave => ANIMATION_NAME_WAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_INITIAL => Some(Self::Initial),
            ANIMATION_NAME_SOLID => Some(Self::Solid),
            ANIMATION_NAME_HUE => Some(Self::Hue),
            ANIMATION_NAME_WAVE => Some(Self::Wave),
            _ => None,
        }
    }

    /// Next id in the long-click rotation
    ///
    /// Initial is startup-only and excluded from the cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Initial | Self::Wave => Self::Solid,
            Self::Solid => Self::Hue,
            Self::Hue => Self::Wave,
        }
    }

    /// Construct a fresh, not-yet-begun instance of this animation
    pub fn build(self) -> AnimationSlot {
        match self {
            Self::Initial => AnimationSlot::Initial(InitialAnimation::new()),
            Self::Solid => AnimationSlot::Solid(SolidAnimation::new()),
            Self::Hue => AnimationSlot::Hue(HueAnimation::new()),
            Self::Wave => AnimationSlot::Wave(WaveAnimation::new()),
        }
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Blank startup animation
    Initial(InitialAnimation),
    /// Static color with smooth click rotation
    Solid(SolidAnimation),
    /// Continuous hue wheel cycle
    Hue(HueAnimation),
    /// Four-layer procedural ocean waves
    Wave(WaveAnimation),
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::Initial(InitialAnimation::new())
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Initial(_) => AnimationId::Initial,
            Self::Solid(_) => AnimationId::Solid,
            Self::Hue(_) => AnimationId::Hue,
            Self::Wave(_) => AnimationId::Wave,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial(anim) => anim.name(),
            Self::Solid(anim) => anim.name(),
            Self::Hue(anim) => anim.name(),
            Self::Wave(anim) => anim.name(),
        }
    }

    pub fn begin<const N: usize>(&mut self, strip: &mut StripControl<N>) {
        match self {
            Self::Initial(anim) => anim.begin(strip),
            Self::Solid(anim) => anim.begin(strip),
            Self::Hue(anim) => anim.begin(strip),
            Self::Wave(anim) => anim.begin(strip),
        }
    }

    pub fn end(&mut self) {
        match self {
            Self::Initial(anim) => Animation::end(anim),
            Self::Solid(anim) => Animation::end(anim),
            Self::Hue(anim) => Animation::end(anim),
            Self::Wave(anim) => Animation::end(anim),
        }
    }

    pub fn click(&mut self) {
        match self {
            Self::Initial(anim) => Animation::click(anim),
            Self::Solid(anim) => Animation::click(anim),
            Self::Hue(anim) => Animation::click(anim),
            Self::Wave(anim) => Animation::click(anim),
        }
    }

    pub fn tick<const N: usize>(&mut self, now: Instant, strip: &mut StripControl<N>) {
        match self {
            Self::Initial(anim) => anim.tick(now, strip),
            Self::Solid(anim) => anim.tick(now, strip),
            Self::Hue(anim) => anim.tick(now, strip),
            Self::Wave(anim) => anim.tick(now, strip),
        }
    }

    pub fn draw<const N: usize>(&mut self, now: Instant, strip: &mut StripControl<N>) {
        match self {
            Self::Initial(anim) => anim.draw(now, strip),
            Self::Solid(anim) => anim.draw(now, strip),
            Self::Hue(anim) => anim.draw(now, strip),
            Self::Wave(anim) => anim.draw(now, strip),
        }
    }
}
