#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(0.0, 0x000000; "black")]
#[test_case(0.5, 0x7F7F7F; "mid gray")]
#[test_case(1.0, 0xFFFFFF; "white")]
#[test_case(0.25, 0x3F3F3F; "quarter gray")]
fn pack_grayscale___nominal_sample___replicates_intensity(sample: f32, expected: i32) {
    assert_eq!(pack_grayscale(sample), expected);
}

#[test]
fn pack_grayscale___sample_above_one___is_not_clamped() {
    // 2.0 scales to 510, past 8 bits; channels bleed instead of saturating.
    let intensity = 510;

    assert_eq!(
        pack_grayscale(2.0),
        intensity | (intensity << 8) | (intensity << 16)
    );
}

#[test]
fn pack_grayscale___negative_sample___is_not_clamped() {
    // -0.5 scales to -127.5 and truncates toward zero.
    let intensity = -127;

    assert_eq!(
        pack_grayscale(-0.5),
        intensity | (intensity << 8) | (intensity << 16)
    );
}

#[test]
fn pack_grayscale___nominal_range___channels_always_match() {
    for step in 0..=255 {
        let packed = pack_grayscale(step as f32 / 255.0);

        let red = (packed >> 16) & 0xFF;
        let green = (packed >> 8) & 0xFF;
        let blue = packed & 0xFF;

        assert_eq!(red, green);
        assert_eq!(green, blue);
    }
}

#[test]
fn render_grayscale___two_by_two_frame___writes_row_major() {
    let samples = [0.0, 1.0, 0.5, 0.25];
    let mut pixels = [0i32; 4];

    render_grayscale(&samples, &mut pixels);

    assert_eq!(pixels, [0x000000, 0xFFFFFF, 0x7F7F7F, 0x3F3F3F]);
}

#[test]
fn render_grayscale___equal_lengths___overwrites_every_pixel() {
    let samples = [1.0f32; 16];
    let mut pixels = [0x123456i32; 16];

    render_grayscale(&samples, &mut pixels);

    assert!(pixels.iter().all(|&p| p == 0xFFFFFF));
}

#[test]
fn render_grayscale___full_frame___matches_per_sample_packing() {
    let samples: Vec<f32> = (0..64).map(|i| i as f32 / 63.0).collect();
    let mut pixels = vec![0i32; 64];

    render_grayscale(&samples, &mut pixels);

    for (pixel, sample) in pixels.iter().zip(&samples) {
        assert_eq!(*pixel, pack_grayscale(*sample));
    }
}

#[test]
fn render_grayscale___empty_frame___writes_nothing() {
    let samples: [f32; 0] = [];
    let mut pixels: [i32; 0] = [];

    render_grayscale(&samples, &mut pixels);
}
