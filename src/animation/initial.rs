//! Blank startup animation.

use super::Animation;
use crate::{color::Rgb, control::StripControl};

/// Fills the strip with black on begin and does nothing else
///
/// Installed while the strip powers up, so the first presented frame is
/// dark instead of whatever the pixels latched at power-on.
#[derive(Debug, Clone, Default)]
pub struct InitialAnimation;

impl InitialAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for InitialAnimation {
    fn name(&self) -> &'static str {
        "initial"
    }

    fn begin<const N: usize>(&mut self, strip: &mut StripControl<N>) {
        strip.fill_solid(Rgb { r: 0, g: 0, b: 0 });
    }
}
