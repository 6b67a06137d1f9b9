//! Sample-to-pixel conversion.
//!
//! The capture engine delivers frames as float samples nominally in
//! `[0.0, 1.0]`. Each sample becomes one packed grayscale pixel with the
//! intensity replicated into the red, green, and blue channels, the layout
//! an `int[]` raster on the Java side expects.

/// Convert one sample to a packed grayscale pixel.
///
/// The sample is scaled by 255 and truncated to an integer intensity, which
/// then fills all three color channels. Samples outside `[0.0, 1.0]` are not
/// clamped; the input-range contract is the engine's.
///
/// ```
/// use framebridge_core::pack_grayscale;
///
/// assert_eq!(pack_grayscale(0.0), 0x000000);
/// assert_eq!(pack_grayscale(0.5), 0x7F7F7F);
/// assert_eq!(pack_grayscale(1.0), 0xFFFFFF);
/// ```
pub fn pack_grayscale(sample: f32) -> i32 {
    let intensity = (sample * 255.0) as i32;
    intensity | (intensity << 8) | (intensity << 16)
}

/// Render one frame of samples into a pixel buffer, row-major.
///
/// Writes `min(samples.len(), pixels.len())` pixels; callers hand in equally
/// sized slices.
pub fn render_grayscale(samples: &[f32], pixels: &mut [i32]) {
    for (pixel, sample) in pixels.iter_mut().zip(samples) {
        *pixel = pack_grayscale(*sample);
    }
}

#[cfg(test)]
#[path = "frame/frame_tests.rs"]
mod frame_tests;
