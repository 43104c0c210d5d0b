mod palette;
mod utils;

pub use palette::Palette16;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use utils::{blend_colors, qadd_colors, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
