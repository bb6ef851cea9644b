// src/lib.rs

//! Conversions between 24-bit sRGB colours and the 256-colour ANSI terminal
//! palette.
//!
//! [`rgb_from_ansi256`] returns the colour of a palette entry and
//! [`ansi256_from_rgb`] finds the entry approximating a true colour. Both are
//! pure functions over constant tables and may be called from any thread.
//!
//! ```
//! use ansi_palette::{ansi256_from_rgb, rgb_from_ansi256};
//!
//! let index = ansi256_from_rgb((97, 134, 8));
//! assert_eq!(index, 64);
//! assert_eq!(rgb_from_ansi256(index), 0x5f8700);
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod convert;
pub mod metric;
pub mod palette;
pub mod quantize;
pub mod rgb;

pub use color::{Color, ColorExt, NamedColor};
pub use convert::{ansi256_from_rgb, rgb_from_ansi256, rgb_of};
pub use rgb::{AsRgb, Rgb};
