//! Boundary-seeded flood fill.

use crate::compose::is_wall;
use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// The four orthogonal neighbor offsets, in the order the fill visits them.
const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

/// Fills the 4-connected region around `(x, y)` with `color`, writing into
/// the overlay and stopping at walls (opaque cells of either grid, see
/// [`is_wall`]) and at the grid edge.
///
/// A seed that is out of bounds or already a wall is a no-op. Uses an
/// explicit work stack and a visited bitmap, so it is bounded on any finite
/// grid and terminates even when `color` has zero alpha (where wall detection
/// alone would revisit cells forever). The grids are the session's
/// canvas/overlay pair and share dimensions.
pub fn flood_fill(canvas: &PixelGrid, overlay: &mut PixelGrid, color: Pixel, x: i32, y: i32) {
    if !overlay.contains(x, y) || is_wall(canvas, overlay, x, y) {
        return;
    }
    let width = overlay.width();
    let mut visited = vec![false; width * overlay.height()];
    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if !overlay.contains(cx, cy) || is_wall(canvas, overlay, cx, cy) {
            continue;
        }
        let seen = &mut visited[cy as usize * width + cx as usize];
        if *seen {
            continue;
        }
        *seen = true;
        overlay.set(cx, cy, color);
        for (dx, dy) in NEIGHBORS {
            stack.push((cx + dx, cy + dy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster;

    const INK: Pixel = Pixel::WHITE;

    fn pair(w: usize, h: usize) -> (PixelGrid, PixelGrid) {
        (PixelGrid::new(w, h).unwrap(), PixelGrid::new(w, h).unwrap())
    }

    #[test]
    fn fill_inside_rect_covers_exactly_the_interior() {
        let (mut canvas, mut overlay) = pair(10, 10);
        raster::rect(&mut canvas, INK, 1, 1, 6, 6);
        flood_fill(&canvas, &mut overlay, INK, 3, 3);
        for (x, y, p) in overlay.iter() {
            let interior = (2..=5).contains(&x) && (2..=5).contains(&y);
            assert_eq!(p != Pixel::TRANSPARENT, interior, "cell ({x}, {y})");
        }
    }

    #[test]
    fn fill_without_walls_floods_the_whole_grid() {
        let (canvas, mut overlay) = pair(7, 5);
        flood_fill(&canvas, &mut overlay, INK, 3, 2);
        assert!(overlay.data().iter().all(|&p| p == INK));
    }

    #[test]
    fn fill_seeded_on_a_wall_is_a_no_op() {
        let (mut canvas, mut overlay) = pair(5, 5);
        canvas.set(2, 2, INK);
        flood_fill(&canvas, &mut overlay, INK, 2, 2);
        assert!(overlay.data().iter().all(|&p| p == Pixel::TRANSPARENT));
    }

    #[test]
    fn fill_seeded_out_of_bounds_is_a_no_op() {
        let (canvas, mut overlay) = pair(5, 5);
        flood_fill(&canvas, &mut overlay, INK, -1, 2);
        flood_fill(&canvas, &mut overlay, INK, 5, 5);
        assert!(overlay.data().iter().all(|&p| p == Pixel::TRANSPARENT));
    }

    #[test]
    fn fill_respects_uncommitted_overlay_walls() {
        let (canvas, mut overlay) = pair(10, 10);
        raster::rect(&mut overlay, INK, 0, 0, 9, 4);
        let blue = Pixel::opaque(0, 0, 255);
        flood_fill(&canvas, &mut overlay, blue, 2, 2);
        assert_eq!(overlay.get(2, 2), Some(blue));
        // The region below the uncommitted rectangle stays untouched.
        assert_eq!(overlay.get(2, 7), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn fill_does_not_leak_through_diagonal_gaps() {
        // Two walls touching only diagonally block a 4-connected fill.
        let (mut canvas, mut overlay) = pair(3, 3);
        canvas.set(1, 0, INK);
        canvas.set(0, 1, INK);
        flood_fill(&canvas, &mut overlay, INK, 0, 0);
        assert_eq!(overlay.get(0, 0), Some(INK));
        assert_eq!(overlay.get(2, 2), Some(Pixel::TRANSPARENT));
        assert_eq!(overlay.get(1, 1), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn zero_alpha_color_still_terminates() {
        let (canvas, mut overlay) = pair(50, 50);
        let ghost = Pixel::new(255, 255, 255, 0);
        flood_fill(&canvas, &mut overlay, ghost, 10, 10);
        assert!(overlay.data().iter().all(|&p| p == ghost));
    }

    #[test]
    fn large_fill_does_not_exhaust_the_stack() {
        let (canvas, mut overlay) = pair(512, 512);
        flood_fill(&canvas, &mut overlay, INK, 0, 0);
        assert!(overlay.data().iter().all(|&p| p == INK));
    }
}
