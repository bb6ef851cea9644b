// src/quantize.rs

//! Per-channel quantisation of a channel value into a colour cube digit.
//!
//! Each channel gets its own break points, found by approximating pure
//! colours (`rgb(v, 0, 0)` for red and so on) by the cube level with the
//! smallest ΔE*₀₀. ΔE*₀₀ varies most among dark colours so dark tones get
//! finer treatment than light ones.

/// Top digit returned when a value reaches past every threshold.
const TOP_DIGIT: u8 = 5;

/// `(threshold, digit)` pairs: the first pair whose threshold exceeds the
/// value gives the digit.
pub type Thresholds = [(u8, u8); 5];

pub const RED_THRESHOLDS: Thresholds = [(38, 0), (115, 1), (155, 2), (196, 3), (235, 4)];
pub const GREEN_THRESHOLDS: Thresholds = [(36, 0), (116, 1), (154, 2), (195, 3), (235, 4)];
pub const BLUE_THRESHOLDS: Thresholds = [(35, 0), (115, 1), (155, 2), (195, 3), (235, 4)];

/// A colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    pub const fn thresholds(self) -> &'static Thresholds {
        match self {
            Channel::Red => &RED_THRESHOLDS,
            Channel::Green => &GREEN_THRESHOLDS,
            Channel::Blue => &BLUE_THRESHOLDS,
        }
    }
}

/// Maps a channel value onto a cube digit (0-5) using the channel's
/// thresholds.
#[inline]
pub fn cube_digit(channel: Channel, value: u8) -> u8 {
    channel
        .thresholds()
        .iter()
        .find(|&&(threshold, _)| value < threshold)
        .map_or(TOP_DIGIT, |&(_, digit)| digit)
}
