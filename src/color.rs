// src/color.rs

//! Terminal colour values (`NamedColor`, `Color`) and their conversions to and
//! from the 256-colour palette.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::convert::{ansi256_from_rgb, rgb_of};
use crate::palette::SYSTEM_COLORS;
use crate::rgb::{AsRgb, Rgb};

/// Standard ANSI named colors (indices 0-15).
/// These are the 8 normal and 8 bright colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,       // Also known as Grey
    BrightBlack = 8, // Also known as Dark Grey
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Converts a palette index to a `NamedColor`, or `None` if the index is
    /// not a system colour (16 and above).
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// xterm's default value for this colour.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        SYSTEM_COLORS[self as usize]
    }
}

/// Represents a color value used in the terminal.
/// Can be a default placeholder, a standard named ANSI color,
/// an indexed color from the 256-color palette, or an RGB true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Default foreground or background color, to be resolved by whoever
    /// renders it.
    #[default]
    Default,
    /// A standard named ANSI color (indices 0-15).
    Named(NamedColor),
    /// An indexed color from the 256-color palette (indices 0-255).
    /// Note: Indices 0-15 can also be represented via `Color::Named`.
    Indexed(u8),
    /// An RGB true color, with each component from 0 to 255.
    Rgb(u8, u8, u8),
}

/// Palette-aware helpers for terminal colour types.
pub trait ColorExt: Sized {
    /// Constructs a palette colour approximating the given sRGB colour.
    fn approx_rgb(r: u8, g: u8, b: u8) -> Self;

    /// Converts a true colour into its 256-colour approximation; any other
    /// colour is returned unchanged.
    fn to_256(&self) -> Self;

    /// Resolves the colour to sRGB. Named and indexed colours go through the
    /// palette; true colours are returned as they are.
    fn to_rgb(&self) -> (u8, u8, u8);
}

impl ColorExt for Color {
    /// # Examples
    ///
    /// ```
    /// use ansi_palette::{Color, ColorExt};
    ///
    /// assert_eq!(Color::Indexed( 16), Color::approx_rgb(  0,   0,   0));
    /// assert_eq!(Color::Indexed( 16), Color::approx_rgb(  0,   1,   2));
    /// assert_eq!(Color::Indexed( 67), Color::approx_rgb( 95, 135, 175));
    /// assert_eq!(Color::Indexed(231), Color::approx_rgb(255, 255, 255));
    /// ```
    #[inline]
    fn approx_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Indexed(ansi256_from_rgb((r, g, b)))
    }

    #[inline]
    fn to_256(&self) -> Self {
        match *self {
            Color::Rgb(r, g, b) => Color::approx_rgb(r, g, b),
            other => other,
        }
    }

    fn to_rgb(&self) -> (u8, u8, u8) {
        let rgb = match *self {
            Color::Rgb(r, g, b) => return (r, g, b),
            Color::Named(named) => named.to_rgb(),
            Color::Indexed(idx) => rgb_of(idx),
            Color::Default => {
                warn!("Color::Default has no palette value. Resolving to black.");
                Rgb::BLACK
            }
        };
        rgb.into()
    }
}

impl AsRgb for Color {
    #[inline]
    fn as_u32(&self) -> u32 {
        Rgb::from(self.to_rgb()).to_u32()
    }

    /// Named and indexed colours already are palette entries and keep their
    /// index; true colours are approximated.
    fn to_ansi256(&self) -> u8 {
        match *self {
            Color::Named(named) => named.index(),
            Color::Indexed(idx) => idx,
            Color::Rgb(r, g, b) => ansi256_from_rgb((r, g, b)),
            Color::Default => {
                warn!("Color::Default has no palette index. Resolving to black.");
                NamedColor::Black.index()
            }
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}
