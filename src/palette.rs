// src/palette.rs

//! Constant tables describing the 256-colour ANSI palette.
//!
//! The palette consists of three regions:
//! - indices 0-15: system colours (terminal defined, xterm defaults here),
//! - indices 16-231: a 6×6×6 colour cube,
//! - indices 232-255: a 24-step greyscale ramp from `#080808` to `#eeeeee`.

use crate::rgb::Rgb;

// Region boundaries within the 256-colour palette
pub const SYSTEM_COLOR_COUNT: u8 = 16;
pub const COLOR_CUBE_OFFSET: u8 = 16;
pub const COLOR_CUBE_SIZE: u8 = 6; // 6x6x6 cube
pub const COLOR_CUBE_TOTAL_COLORS: u8 = COLOR_CUBE_SIZE * COLOR_CUBE_SIZE * COLOR_CUBE_SIZE; // 216
pub const GRAYSCALE_OFFSET: u8 = COLOR_CUBE_OFFSET + COLOR_CUBE_TOTAL_COLORS; // 232
pub const GRAYSCALE_LEVELS: u8 = 24;
/// Channel value of the darkest ramp entry; each step adds `GRAYSCALE_STEP`.
pub const GRAYSCALE_START: u8 = 8;
pub const GRAYSCALE_STEP: u8 = 10;

/// The 16 system colours as used by default by xterm (`XTerm-col.ad`).
pub const SYSTEM_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0xce, 0x00, 0x00), // Red
    Rgb::new(0x00, 0xce, 0x00), // Green
    Rgb::new(0xce, 0xce, 0x00), // Yellow
    Rgb::new(0x00, 0x00, 0xee), // Blue
    Rgb::new(0xce, 0x00, 0xce), // Magenta
    Rgb::new(0x00, 0xce, 0xce), // Cyan
    Rgb::new(0xef, 0xef, 0xef), // White
    Rgb::new(0x7f, 0x7f, 0x7f), // BrightBlack
    Rgb::new(0xff, 0x00, 0x00), // BrightRed
    Rgb::new(0x00, 0xff, 0x00), // BrightGreen
    Rgb::new(0xff, 0xff, 0x00), // BrightYellow
    Rgb::new(0x5c, 0x5c, 0xff), // BrightBlue
    Rgb::new(0xff, 0x00, 0xff), // BrightMagenta
    Rgb::new(0x00, 0xff, 0xff), // BrightCyan
    Rgb::new(0xff, 0xff, 0xff), // BrightWhite
];

/// Channel values of the six colour cube levels.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Best palette index for every shade of grey, `rgb(y, y, y)` → index.
///
/// Chosen to minimise ΔE*₀₀. Greys live both in the ramp and on the cube
/// diagonal (59, 102, 145, 188 plus black 16 and white 231), and the ramp
/// spans 8..=238 rather than the full range, so the mapping is tabulated
/// rather than computed.
#[rustfmt::skip]
pub const ANSI256_FROM_GREY: [u8; 256] = [
     16,  16,  16,  16,  16, 232, 232, 232,
    232, 232, 232, 232, 232, 232, 233, 233,
    233, 233, 233, 233, 233, 233, 233, 233,
    234, 234, 234, 234, 234, 234, 234, 234,
    234, 234, 235, 235, 235, 235, 235, 235,
    235, 235, 235, 235, 236, 236, 236, 236,
    236, 236, 236, 236, 236, 236, 237, 237,
    237, 237, 237, 237, 237, 237, 237, 237,
    238, 238, 238, 238, 238, 238, 238, 238,
    238, 238, 239, 239, 239, 239, 239, 239,
    239, 239, 239, 239, 240, 240, 240, 240,
    240, 240, 240, 240,  59,  59,  59,  59,
     59, 241, 241, 241, 241, 241, 241, 241,
    242, 242, 242, 242, 242, 242, 242, 242,
    242, 242, 243, 243, 243, 243, 243, 243,
    243, 243, 243, 244, 244, 244, 244, 244,
    244, 244, 244, 244, 102, 102, 102, 102,
    102, 245, 245, 245, 245, 245, 245, 246,
    246, 246, 246, 246, 246, 246, 246, 246,
    246, 247, 247, 247, 247, 247, 247, 247,
    247, 247, 247, 248, 248, 248, 248, 248,
    248, 248, 248, 248, 145, 145, 145, 145,
    145, 249, 249, 249, 249, 249, 249, 250,
    250, 250, 250, 250, 250, 250, 250, 250,
    250, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 188, 188, 188, 188,
    188, 253, 253, 253, 253, 253, 253, 254,
    254, 254, 254, 254, 254, 254, 254, 254,
    254, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 231,
    231, 231, 231, 231, 231, 231, 231, 231,
];

/// The region of the palette an index falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Indices 0-15.
    System,
    /// Indices 16-231.
    Cube,
    /// Indices 232-255.
    Grayscale,
}

impl Region {
    #[inline]
    pub const fn of(index: u8) -> Self {
        if index < SYSTEM_COLOR_COUNT {
            Region::System
        } else if index < GRAYSCALE_OFFSET {
            Region::Cube
        } else {
            Region::Grayscale
        }
    }
}

/// Translates a cube digit into a channel value.
///
/// # Panics
/// Panics if `digit` is not less than six.
#[inline]
pub const fn cube_level(digit: u8) -> u8 {
    CUBE_LEVELS[digit as usize]
}

/// Palette index of the cube entry with the given per-channel digits (0-5).
///
/// # Panics
/// Debug builds panic if a digit is not less than six.
#[inline]
pub const fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    debug_assert!(
        r < COLOR_CUBE_SIZE && g < COLOR_CUBE_SIZE && b < COLOR_CUBE_SIZE,
        "not a colour cube digit"
    );
    COLOR_CUBE_OFFSET + r * COLOR_CUBE_SIZE * COLOR_CUBE_SIZE + g * COLOR_CUBE_SIZE + b
}

/// Splits a cube palette index (16-231) into its red, green and blue digits.
///
/// # Panics
/// Debug builds panic if `index` is outside the cube.
#[inline]
pub const fn cube_digits(index: u8) -> (u8, u8, u8) {
    debug_assert!(
        index >= COLOR_CUBE_OFFSET && index < GRAYSCALE_OFFSET,
        "not a colour cube index"
    );
    let offset = index - COLOR_CUBE_OFFSET;
    (
        offset / (COLOR_CUBE_SIZE * COLOR_CUBE_SIZE),
        (offset / COLOR_CUBE_SIZE) % COLOR_CUBE_SIZE,
        offset % COLOR_CUBE_SIZE,
    )
}

/// Channel value of a greyscale ramp index (232-255).
///
/// # Panics
/// Debug builds panic if `index` is below the ramp.
#[inline]
pub const fn grayscale_level(index: u8) -> u8 {
    debug_assert!(index >= GRAYSCALE_OFFSET, "not a greyscale ramp index");
    (index - GRAYSCALE_OFFSET) * GRAYSCALE_STEP + GRAYSCALE_START
}
