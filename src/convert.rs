// src/convert.rs

//! Conversions between sRGB colours and indices of the 256-colour palette.

use log::trace;

use crate::metric::{distance, luminance};
use crate::palette::{
    cube_digits, cube_index, cube_level, grayscale_level, Region, ANSI256_FROM_GREY,
    SYSTEM_COLORS,
};
use crate::quantize::{cube_digit, Channel};
use crate::rgb::{AsRgb, Rgb};

#[cfg(test)]
mod tests;

/// A palette entry considered as an approximation of some colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    index: u8,
    rgb: Rgb,
}

impl Candidate {
    fn new(index: u8, rgb: Rgb) -> Self {
        Candidate { index, rgb }
    }

    fn from_index(index: u8) -> Self {
        Candidate::new(index, rgb_of(index))
    }
}

/// Returns the colour of a palette entry as an [`Rgb`].
///
/// See [`rgb_from_ansi256`] for details.
#[inline]
pub fn rgb_of(index: u8) -> Rgb {
    match Region::of(index) {
        Region::System => SYSTEM_COLORS[index as usize],
        Region::Cube => {
            let (r, g, b) = cube_digits(index);
            Rgb::new(cube_level(r), cube_level(g), cube_level(b))
        }
        Region::Grayscale => Rgb::grey(grayscale_level(index)),
    }
}

/// Returns the sRGB colour, as a `0xRRGGBB` integer, of an entry in the
/// 256-colour ANSI palette.
///
/// The first 16 colours (system colours) are not standardised and terminal
/// emulators often let users customise them, so their values should not be
/// relied upon; XTerm's defaults are returned. The remaining 240 colours (the
/// 6×6×6 colour cube and the 24-step greyscale ramp) are the same on every
/// terminal supporting the 256-colour palette.
///
/// # Examples
///
/// ```
/// use ansi_palette::rgb_from_ansi256;
///
/// assert_eq!(0x000000, rgb_from_ansi256(16));
/// assert_eq!(0x5f87af, rgb_from_ansi256(67));
/// assert_eq!(0xffffff, rgb_from_ansi256(231));
/// assert_eq!(0xeeeeee, rgb_from_ansi256(255));
/// ```
#[inline]
pub fn rgb_from_ansi256(index: u8) -> u32 {
    rgb_of(index).to_u32()
}

/// Returns the index of the 256-colour ANSI palette entry approximating an
/// sRGB colour.
///
/// System colours are never returned: they are not standardised, so the
/// search is limited to the colour cube and the greyscale ramp.
///
/// # Examples
///
/// ```
/// use ansi_palette::ansi256_from_rgb;
///
/// assert_eq!( 16, ansi256_from_rgb(0x000000));
/// assert_eq!( 16, ansi256_from_rgb((1, 1, 1)));
/// assert_eq!( 16, ansi256_from_rgb([0, 1, 2]));
/// assert_eq!( 67, ansi256_from_rgb(&(95, 135, 175)));
/// assert_eq!(231, ansi256_from_rgb(&[255, 255, 255]));
/// ```
pub fn ansi256_from_rgb<C: AsRgb>(rgb: C) -> u8 {
    let rgb = Rgb::from_u32(rgb.as_u32());

    // Shades of grey have a known best approximation.
    if rgb.is_grey() {
        return ANSI256_FROM_GREY[rgb.b as usize];
    }

    let grey = grey_candidate(rgb);
    let cube = cube_candidate(rgb);
    let grey_distance = distance(rgb, grey.rgb);
    let cube_distance = distance(rgb, cube.rgb);
    trace!(
        "ansi256_from_rgb({}): grey {} at {}, cube {} at {}",
        rgb,
        grey.index,
        grey_distance,
        cube.index,
        cube_distance
    );

    if cube_distance < grey_distance {
        cube.index
    } else {
        grey.index
    }
}

/// The grey palette entry best matching the luminance of `rgb`.
fn grey_candidate(rgb: Rgb) -> Candidate {
    Candidate::from_index(ANSI256_FROM_GREY[luminance(rgb) as usize])
}

/// The colour cube entry obtained by quantising each channel separately.
fn cube_candidate(rgb: Rgb) -> Candidate {
    let r = cube_digit(Channel::Red, rgb.r);
    let g = cube_digit(Channel::Green, rgb.g);
    let b = cube_digit(Channel::Blue, rgb.b);
    Candidate::new(
        cube_index(r, g, b),
        Rgb::new(cube_level(r), cube_level(g), cube_level(b)),
    )
}
