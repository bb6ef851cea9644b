// src/convert/tests.rs

//! Unit tests for the palette conversions, including the candidate
//! selection that is not visible through the public functions.

use super::*;
use crate::palette::{CUBE_LEVELS, GRAYSCALE_OFFSET};

fn pack(r: u8, g: u8, b: u8) -> u32 {
    Rgb::new(r, g, b).to_u32()
}

#[test_log::test]
fn system_colours() {
    assert_eq!(rgb_from_ansi256(0), 0x000000);
    assert_eq!(rgb_from_ansi256(1), 0xce0000);
    assert_eq!(rgb_from_ansi256(7), 0xefefef);
    assert_eq!(rgb_from_ansi256(8), 0x7f7f7f);
    assert_eq!(rgb_from_ansi256(12), 0x5c5cff);
    assert_eq!(rgb_from_ansi256(15), 0xffffff);
}

#[test_log::test]
fn cube_corners() {
    assert_eq!(rgb_from_ansi256(16), 0x000000);
    assert_eq!(rgb_from_ansi256(196), 0xff0000);
    assert_eq!(rgb_from_ansi256(46), 0x00ff00);
    assert_eq!(rgb_from_ansi256(21), 0x0000ff);
    assert_eq!(rgb_from_ansi256(231), 0xffffff);
}

#[test_log::test]
fn cube_uses_shared_levels() {
    for index in 16..232u8 {
        let offset = (index - 16) as usize;
        let want = Rgb::new(
            CUBE_LEVELS[offset / 36],
            CUBE_LEVELS[offset / 6 % 6],
            CUBE_LEVELS[offset % 6],
        );
        assert_eq!(rgb_of(index), want, "index {}", index);
    }
}

#[test_log::test]
fn grey_ramp() {
    assert_eq!(rgb_from_ansi256(232), 0x080808);
    assert_eq!(rgb_from_ansi256(233), 0x121212);
    assert_eq!(rgb_from_ansi256(255), 0xeeeeee);
    for index in GRAYSCALE_OFFSET..=255 {
        assert!(rgb_of(index).is_grey());
    }
}

#[test_log::test]
fn forward_result_has_no_top_byte() {
    for index in 0..=255u8 {
        assert_eq!(rgb_from_ansi256(index) >> 24, 0);
    }
}

#[test_log::test]
fn greys_use_the_table() {
    for y in 0..=255u8 {
        assert_eq!(ansi256_from_rgb(pack(y, y, y)), ANSI256_FROM_GREY[y as usize]);
    }
}

#[test_log::test]
fn reverse_of_corners() {
    assert_eq!(ansi256_from_rgb(0xff0000), 196);
    assert_eq!(ansi256_from_rgb(0x000000), 16);
    assert_eq!(ansi256_from_rgb(0xffffff), 231);
}

#[test_log::test]
fn near_grey_inputs() {
    assert_eq!(ansi256_from_rgb((1, 1, 1)), 16);
    assert_eq!(ansi256_from_rgb((0, 1, 2)), 16);
    assert_eq!(ansi256_from_rgb((7, 7, 7)), 232);
    assert_eq!(ansi256_from_rgb((8, 7, 8)), 232);
    assert_eq!(ansi256_from_rgb((100, 100, 101)), 241);
    assert_eq!(ansi256_from_rgb((128, 128, 130)), 244);
}

#[test_log::test]
fn saturated_inputs_pick_the_cube() {
    assert_eq!(ansi256_from_rgb((97, 134, 8)), 64);
    assert_eq!(ansi256_from_rgb((250, 5, 5)), 196);
    assert_eq!(ansi256_from_rgb((200, 10, 10)), 160);
    assert_eq!(ansi256_from_rgb((0, 200, 0)), 40);
    assert_eq!(ansi256_from_rgb((10, 20, 200)), 20);
    assert_eq!(ansi256_from_rgb((255, 250, 0)), 226);
    assert_eq!(ansi256_from_rgb((90, 140, 170)), 67);
}

#[test_log::test]
fn cube_candidate_quantises_each_channel() {
    let candidate = cube_candidate(Rgb::new(97, 134, 8));
    assert_eq!(candidate, Candidate::new(64, Rgb::new(95, 135, 0)));
    assert_eq!(candidate.rgb.to_u32(), rgb_from_ansi256(candidate.index));
}

#[test_log::test]
fn grey_candidate_follows_luminance() {
    // luminance(97, 134, 8) == 117
    let candidate = grey_candidate(Rgb::new(97, 134, 8));
    assert_eq!(candidate.index, ANSI256_FROM_GREY[117]);
    assert!(candidate.rgb.is_grey());
}

// Inputs nudged away from a saturated cube corner must resolve to that
// corner rather than to a grey.
#[test_log::test]
fn nudged_corners_stay_in_the_cube() {
    fn nudge(v: u8, delta: u8) -> u8 {
        if v == 255 {
            v - delta
        } else {
            v + delta
        }
    }

    let corners = [
        (196u8, (255u8, 0u8, 0u8)),
        (46, (0, 255, 0)),
        (21, (0, 0, 255)),
        (201, (255, 0, 255)),
        (226, (255, 255, 0)),
        (51, (0, 255, 255)),
    ];
    for (index, (r, g, b)) in corners {
        for delta in 0..=10u8 {
            let input = (nudge(r, delta), nudge(g, delta), nudge(b, delta));
            let got = ansi256_from_rgb(input);
            assert_eq!(got, index, "{:?} -> {} (#{:06x})", input, got, rgb_from_ansi256(got));
        }
    }
}

#[test_log::test]
fn palette_colours_map_back_to_themselves() {
    for index in 16..=255u8 {
        let rgb = rgb_from_ansi256(index);
        let got = ansi256_from_rgb(rgb);
        assert_eq!(got, index, "want {:06x} but got {:06x}", rgb, rgb_from_ansi256(got));
    }
}

#[test_log::test]
fn grey_cube_entries_are_their_own_grey_candidates() {
    for index in [59u8, 102, 145, 188] {
        let rgb = rgb_of(index);
        assert_eq!(grey_candidate(rgb).index, index);
    }
}
