//! Shape rasterization into an overlay grid.
//!
//! All operations write `color` into the target grid and never blend; the
//! blend with the canvas happens later at commit. Positions outside the grid
//! are silently clipped.
//!
//! Line stepping uses truncating integer division (`i*Δ/n` rounds toward
//! zero). The truncation bias is part of the drawing semantics: replay and
//! saved command files must reproduce committed images bit for bit, so do
//! not "fix" it to rounded interpolation.

use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// Number of straight segments used to approximate a circle outline.
const CIRCLE_SEGMENTS: u32 = 1000;

/// Writes `color` at `(x, y)` if it lies within the grid.
pub fn point(grid: &mut PixelGrid, color: Pixel, x: i32, y: i32) {
    grid.set(x, y, color);
}

/// Draws a stepped line from `(x0, y0)` to `(x1, y1)`, inclusive of both
/// endpoints.
///
/// The step count is `max(|Δx|, |Δy|)`; a zero-length line draws the single
/// point `(x0, y0)`.
pub fn line(grid: &mut PixelGrid, color: Pixel, x0: i32, y0: i32, x1: i32, y1: i32) {
    let (x0, y0) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));
    let n = (x1 - x0).abs().max((y1 - y0).abs());
    for i in 0..=n {
        let (x, y) = if n == 0 {
            (x0, y0)
        } else {
            (x0 + i * (x1 - x0) / n, y0 + i * (y1 - y0) / n)
        };
        point(grid, color, x as i32, y as i32);
    }
}

/// Draws the outline of the rectangle spanned by `(x0, y0)` and `(x1, y1)`:
/// left edge, bottom edge, right edge, top edge.
pub fn rect(grid: &mut PixelGrid, color: Pixel, x0: i32, y0: i32, x1: i32, y1: i32) {
    line(grid, color, x0, y0, x0, y1);
    line(grid, color, x0, y1, x1, y1);
    line(grid, color, x1, y1, x1, y0);
    line(grid, color, x1, y0, x0, y0);
}

/// Draws a circle outline of the given radius centered at `(cx, cy)`,
/// approximated by [`CIRCLE_SEGMENTS`] straight segments.
///
/// Segment endpoints are `center + trunc(radius * cos/sin)`, rounded toward
/// zero. A zero radius degenerates to repeated point draws at the center.
pub fn circle(grid: &mut PixelGrid, color: Pixel, cx: i32, cy: i32, radius: i32) {
    let theta = 2.0 * std::f64::consts::PI / f64::from(CIRCLE_SEGMENTS);
    let endpoint = |i: u32| {
        let angle = f64::from(i) * theta;
        let x = cx.saturating_add((f64::from(radius) * angle.cos()) as i32);
        let y = cy.saturating_add((f64::from(radius) * angle.sin()) as i32);
        (x, y)
    };
    for i in 0..CIRCLE_SEGMENTS {
        let (x0, y0) = endpoint(i);
        let (x1, y1) = endpoint(i + 1);
        line(grid, color, x0, y0, x1, y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Pixel = Pixel::WHITE;

    fn grid(w: usize, h: usize) -> PixelGrid {
        PixelGrid::new(w, h).unwrap()
    }

    fn painted(grid: &PixelGrid) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|&(_, _, p)| p != Pixel::TRANSPARENT)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    // -- point --

    #[test]
    fn point_writes_color_in_bounds() {
        let mut g = grid(4, 4);
        point(&mut g, INK, 2, 1);
        assert_eq!(painted(&g), vec![(2, 1)]);
    }

    #[test]
    fn point_out_of_bounds_is_silently_ignored() {
        let mut g = grid(4, 4);
        point(&mut g, INK, -1, 0);
        point(&mut g, INK, 4, 4);
        assert!(painted(&g).is_empty());
    }

    // -- line --

    #[test]
    fn zero_length_line_draws_single_point() {
        let mut g = grid(4, 4);
        line(&mut g, INK, 2, 2, 2, 2);
        assert_eq!(painted(&g), vec![(2, 2)]);
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let mut g = grid(6, 3);
        line(&mut g, INK, 0, 1, 5, 1);
        assert_eq!(
            painted(&g),
            (0..6).map(|x| (x, 1)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn diagonal_line_steps_one_cell_per_iteration() {
        let mut g = grid(4, 4);
        line(&mut g, INK, 0, 0, 3, 3);
        assert_eq!(painted(&g), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn shallow_line_truncates_toward_zero() {
        // n = 5, y_i = i*2/5: [0, 0, 0, 1, 1, 2].
        let mut g = grid(6, 3);
        line(&mut g, INK, 0, 0, 5, 2);
        assert_eq!(
            painted(&g),
            vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 2)]
        );
    }

    #[test]
    fn reversed_shallow_line_truncates_differently() {
        // Truncation is toward zero, so the reverse direction lands on
        // different cells: y_i = 2 + i*(-2)/5 = [2, 2, 2, 1, 1, 0].
        let mut g = grid(6, 3);
        line(&mut g, INK, 5, 2, 0, 0);
        assert_eq!(
            painted(&g),
            vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn line_clips_at_grid_edge() {
        let mut g = grid(3, 3);
        line(&mut g, INK, -2, 1, 5, 1);
        assert_eq!(painted(&g), vec![(0, 1), (1, 1), (2, 1)]);
    }

    // -- rect --

    #[test]
    fn rect_draws_exactly_the_border() {
        let mut g = grid(8, 8);
        rect(&mut g, INK, 1, 1, 4, 4);
        for (x, y, p) in g.iter() {
            let on_border = (1..=4).contains(&x)
                && (1..=4).contains(&y)
                && (x == 1 || x == 4 || y == 1 || y == 4);
            assert_eq!(p != Pixel::TRANSPARENT, on_border, "cell ({x}, {y})");
        }
    }

    #[test]
    fn degenerate_rect_is_a_line() {
        let mut g = grid(6, 6);
        rect(&mut g, INK, 2, 1, 2, 4);
        assert_eq!(painted(&g), vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    }

    // -- circle --

    #[test]
    fn zero_radius_circle_draws_only_the_center() {
        let mut g = grid(9, 9);
        circle(&mut g, INK, 4, 4, 0);
        assert_eq!(painted(&g), vec![(4, 4)]);
    }

    #[test]
    fn circle_touches_the_four_axis_extremes() {
        let mut g = grid(11, 11);
        circle(&mut g, INK, 5, 5, 4);
        for (x, y) in [(9, 5), (1, 5), (5, 9), (5, 1)] {
            assert_ne!(g.get(x, y).unwrap(), Pixel::TRANSPARENT, "({x}, {y})");
        }
    }

    #[test]
    fn circle_stays_within_its_bounding_box() {
        let mut g = grid(11, 11);
        circle(&mut g, INK, 5, 5, 3);
        for (x, y) in painted(&g) {
            assert!(x.abs_diff(5) <= 3 && y.abs_diff(5) <= 3, "({x}, {y})");
        }
    }

    #[test]
    fn off_grid_circle_center_does_not_panic() {
        let mut g = grid(5, 5);
        circle(&mut g, INK, -10, -10, 3);
        assert!(painted(&g).is_empty());
    }
}
