// src/rgb.rs

//! Structured sRGB colour value and the `AsRgb` adapter trait.
//!
//! Colours cross the public API as 24-bit `0xRRGGBB` integers, but internally
//! the conversion code works on `Rgb` so channels are never extracted by hand.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// An sRGB colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// A shade of grey with all three channels set to `level`.
    #[inline]
    pub const fn grey(level: u8) -> Self {
        Rgb::new(level, level, level)
    }

    /// Unpacks a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Rgb::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Packs the colour as `0xRRGGBB`; the top byte is always zero.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parses `#rrggbb` or `rrggbb` (hex digits in either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("expected a colour in #rrggbb form: '{}'", s);
        }
        let packed = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex colour '{}'", s))?;
        Ok(Rgb::from_u32(packed))
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Rgb::from_u32(packed)
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.to_u32()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Types which represent an sRGB colour.
///
/// Lets [`ansi256_from_rgb`](crate::ansi256_from_rgb) accept a packed
/// `0xRRGGBB` integer, an `(r, g, b)` tuple, an `[r, g, b]` array or an
/// [`Rgb`] alike.
pub trait AsRgb {
    /// Returns the colour as a 24-bit `0xRRGGBB` integer.
    fn as_u32(&self) -> u32;

    /// Returns the index of the 256-colour palette entry approximating the
    /// colour.
    #[inline]
    fn to_ansi256(&self) -> u8 {
        crate::convert::ansi256_from_rgb(self.as_u32())
    }
}

impl AsRgb for u32 {
    /// The top byte is ignored.
    #[inline]
    fn as_u32(&self) -> u32 {
        *self & 0x00ff_ffff
    }
}

impl AsRgb for Rgb {
    #[inline]
    fn as_u32(&self) -> u32 {
        self.to_u32()
    }
}

impl AsRgb for (u8, u8, u8) {
    #[inline]
    fn as_u32(&self) -> u32 {
        Rgb::from(*self).to_u32()
    }
}

impl AsRgb for [u8; 3] {
    #[inline]
    fn as_u32(&self) -> u32 {
        Rgb::from(*self).to_u32()
    }
}

impl<T: AsRgb + ?Sized> AsRgb for &T {
    #[inline]
    fn as_u32(&self) -> u32 {
        (**self).as_u32()
    }
}

/// ```
/// use ansi_palette::AsRgb;
/// use rgb::RGB8;
///
/// assert_eq!(0x123456, RGB8::new(0x12, 0x34, 0x56).as_u32());
/// assert_eq!(16, RGB8::new(1, 1, 1).to_ansi256());
/// assert_eq!(16, RGB8::new(0, 1, 2).to_ansi256());
/// assert_eq!(67, RGB8::new(95, 135, 175).to_ansi256());
/// assert_eq!(231, RGB8::new(255, 255, 255).to_ansi256());
/// ```
#[cfg(feature = "rgb")]
impl AsRgb for rgb::RGB<u8> {
    #[inline]
    fn as_u32(&self) -> u32 {
        Rgb::new(self.r, self.g, self.b).to_u32()
    }
}

/// Only the most significant byte of each channel is used.
///
/// ```
/// use ansi_palette::AsRgb;
/// use rgb::RGB16;
///
/// assert_eq!(67, RGB16::new(24500, 34600, 44800).to_ansi256());
/// assert_eq!(16, RGB16::new(256, 511, 256).to_ansi256());
/// assert_eq!(16, RGB16::new(128, 256, 512).to_ansi256());
/// assert_eq!(231, RGB16::new(65535, 65535, 65535).to_ansi256());
/// ```
#[cfg(feature = "rgb")]
impl AsRgb for rgb::RGB<u16> {
    #[inline]
    fn as_u32(&self) -> u32 {
        let top = |c: u16| (c >> 8) as u8;
        Rgb::new(top(self.r), top(self.g), top(self.b)).to_u32()
    }
}
