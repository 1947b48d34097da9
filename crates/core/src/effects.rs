//! Whole-canvas color effects: grayscale and the directional gradient.

use glam::DVec2;

use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// NTSC luminance weight for the red channel.
const LUMA_R: f64 = 0.298912;
/// NTSC luminance weight for the green channel.
const LUMA_G: f64 = 0.586611;
/// NTSC luminance weight for the blue channel.
const LUMA_B: f64 = 0.114478;

/// Converts every canvas pixel to its NTSC-weighted gray, truncated to 8 bits.
/// Alpha is preserved. Operates on the canvas directly, bypassing the
/// overlay, and is idempotent.
pub fn grayscale(canvas: &mut PixelGrid) {
    for p in canvas.data_mut() {
        let luma =
            (LUMA_R * f64::from(p.r) + LUMA_G * f64::from(p.g) + LUMA_B * f64::from(p.b)) as u8;
        *p = Pixel::new(luma, luma, luma, p.a);
    }
}

/// Fills the whole overlay with a linear blend from `from` to `to` (all four
/// channels) along the direction `degree`, in degrees counterclockwise with 0
/// pointing right.
///
/// The angle is normalized into 0–359 with `rem_euclid` and bucketed into one
/// of four quadrants; each quadrant sweeps from a fixed corner toward the
/// opposite one. The per-pixel fraction is the square root of the pixel's
/// projection onto the direction vector, normalized by the end corner's
/// projection. Projections are clamped to zero before the square root: they
/// only go negative by floating-point fuzz at exact quadrant boundaries. On a
/// grid too small to define a sweep axis (a single row or column orthogonal
/// to the direction), the fraction is zero and the overlay becomes solid
/// `from`.
pub fn gradient(overlay: &mut PixelGrid, degree: i32, from: Pixel, to: Pixel) {
    let w = overlay.width() as i32;
    let h = overlay.height() as i32;
    let degree = degree.rem_euclid(360);
    let quad = (degree / 90) as usize;

    // Sweep corners per quadrant: 0-89 bottom-left -> top-right,
    // 90-179 bottom-right -> top-left, 180-269 top-right -> bottom-left,
    // 270-359 top-left -> bottom-right.
    let start_x = [0, w - 1, w - 1, 0][quad];
    let start_y = [h - 1, h - 1, 0, 0][quad];
    let end_x = [w - 1, 0, 0, w - 1][quad];
    let end_y = [0, 0, h - 1, h - 1][quad];

    let theta = f64::from(degree).to_radians();
    // Screen y grows downward, so the y component is negated.
    let dir = DVec2::new(theta.cos(), -theta.sin());
    let start = DVec2::new(f64::from(start_x), f64::from(start_y));
    let end = DVec2::new(f64::from(end_x), f64::from(end_y));
    let span = (end - start).dot(dir).max(0.0).sqrt();

    for y in 0..h {
        for x in 0..w {
            let pos = DVec2::new(f64::from(x), f64::from(y));
            let depth = (pos - start).dot(dir).max(0.0).sqrt();
            let fraction = if span > 0.0 { depth / span } else { 0.0 };
            let lerp =
                |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * fraction) as u8;
            overlay.set(
                x,
                y,
                Pixel::new(
                    lerp(from.r, to.r),
                    lerp(from.g, to.g),
                    lerp(from.b, to.b),
                    lerp(from.a, to.a),
                ),
            );
        }
    }
}
