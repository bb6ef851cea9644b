// src/metric.rs

//! Cheap colour metrics: a luminance estimate and a perceptual distance.

use crate::rgb::Rgb;

// Y row of the linear RGB -> XYZ matrix, scaled so the sum is 2^24.
const LUMA_RED: u32 = 3_568_058;
const LUMA_GREEN: u32 = 11_998_262;
const LUMA_BLUE: u32 = 1_210_896;
const LUMA_SHIFT: u32 = 24;

/// Approximates the luminance of an sRGB colour.
///
/// The weighted sum ignores sRGB gamma. Approximating gamma with γ=2 (a
/// square root of weighted squares) is more precise but around five times
/// slower, and proper gamma handling is around twenty times slower.
#[inline]
pub fn luminance(rgb: Rgb) -> u8 {
    let y = LUMA_RED * rgb.r as u32 + LUMA_GREEN * rgb.g as u32 + LUMA_BLUE * rgb.b as u32;
    (y >> LUMA_SHIFT) as u8
}

/// Distance between two colours.
///
/// A reduced form of the "redmean" low-cost approximation
/// (<https://www.compuphase.com/cmetric.htm>). It is not a proper metric;
/// it only guarantees `d(x, x) = 0` and that `d(x, y) < d(x, z)` means `y`
/// is closer to `x` than `z` is.
#[inline]
pub fn distance(x: Rgb, y: Rgb) -> u32 {
    let r_sum = x.r as i32 + y.r as i32;
    let r = x.r as i32 - y.r as i32;
    let g = x.g as i32 - y.g as i32;
    let b = x.b as i32 - y.b as i32;
    // Every weight stays positive since r_sum <= 510, and the maximum
    // (1534 * 255^2 + 2048 * 255^2 + 1534 * 255^2) fits in an i32.
    ((1024 + r_sum) * r * r + 2048 * g * g + (1534 - r_sum) * b * b) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = Rgb> {
        (0..=255u8)
            .step_by(17)
            .flat_map(|r| (0..=255u8).step_by(51).map(move |g| (r, g)))
            .flat_map(|(r, g)| (0..=255u8).step_by(85).map(move |b| Rgb::new(r, g, b)))
    }

    #[test_log::test]
    fn luminance_extremes() {
        assert_eq!(luminance(Rgb::BLACK), 0);
        assert_eq!(luminance(Rgb::new(255, 255, 255)), 255);
        assert_eq!(luminance(Rgb::new(255, 0, 0)), 54);
        assert_eq!(luminance(Rgb::new(0, 255, 0)), 182);
        assert_eq!(luminance(Rgb::new(0, 0, 255)), 18);
    }

    #[test_log::test]
    fn luminance_of_grey_is_its_level() {
        // The weights add up to exactly 2^24.
        assert_eq!(LUMA_RED + LUMA_GREEN + LUMA_BLUE, 1 << LUMA_SHIFT);
        for y in 0..=255u8 {
            assert_eq!(luminance(Rgb::grey(y)), y);
        }
    }

    #[test_log::test]
    fn distance_to_self_is_zero() {
        for x in samples() {
            assert_eq!(distance(x, x), 0, "{}", x);
        }
    }

    #[test_log::test]
    fn distance_is_symmetric() {
        for x in samples() {
            for y in samples().step_by(7) {
                assert_eq!(distance(x, y), distance(y, x), "{} vs {}", x, y);
            }
        }
    }

    #[test_log::test]
    fn green_weighs_more_than_blue() {
        let black = Rgb::BLACK;
        assert!(distance(black, Rgb::new(0, 255, 0)) > distance(black, Rgb::new(0, 0, 255)));
        assert_eq!(distance(Rgb::new(255, 0, 0), black), 83_166_975);
    }
}
