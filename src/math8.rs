//! Saturating 8/16-bit arithmetic and integer trigonometry.
//!
//! All blend and waveform math in the engine is integer-only; these
//! primitives are the whole toolkit.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, guaranteeing a nonzero result for nonzero inputs
///
/// Like [`scale8`], but a nonzero `value` with a nonzero `scale` never
/// rounds down to zero. A zero input or zero scale stays exactly zero.
/// Used for low-rate blends and dim palette layers, where plain [`scale8`]
/// would visibly flicker to black.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Saturating 8-bit add, clamped to 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

// Piecewise-linear sine approximation: one quarter wave in 8 segments,
// mirrored and negated for the other three quadrants.
const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

/// Integer sine over a 65536-step circle
///
/// `theta` of 0 is angle 0, 16384 is a quarter turn. Output spans roughly
/// -32645..=32645.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    let mut offset = (theta & 0x3FFF) >> 3; // 0..2047
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset >> 8) as usize; // 0..7
    let b = SIN16_BASE[section];
    let m = SIN16_SLOPE[section] as u16;
    let section_offset = ((offset as u8) >> 1) as u16; // 0..127

    let mut y = (b + m * section_offset) as i16;
    if theta & 0x8000 != 0 {
        y = -y;
    }
    y
}

/// Integer sine over a 256-step circle, output 0-255 centered on 128
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    (((sin16((theta as u16) << 8) >> 8) + 128) & 0xFF) as u8
}
