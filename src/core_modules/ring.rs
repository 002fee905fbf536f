// THEORY:
// The `ring` module is the engine of the neighborhood search. Given a center
// point and a radius, it walks the perimeter of the square of side `2 * ring`
// around the center and gathers every usable neighbor color: coordinates
// outside the grid and pixels matching the defect color are silently skipped.
//
// The enumeration is a fixed contract, not an approximation of a circle:
// - top edge:    x from `cx - ring` to `cx + ring - 1`, y = `cy - ring`
// - bottom edge: x from `cx - ring` to `cx + ring - 1`, y = `cy + ring`
// - left edge:   y from `cy - ring + 1` to `cy + ring - 2`, x = `cx - ring`
// - right edge:  y from `cy - ring + 1` to `cy + ring - 2`, x = `cx + ring`
// The spans are asymmetric: the right-hand corners and the cell above each
// bottom corner are never visited. Changing the spans changes which neighbors
// are eligible at small radii and therefore changes repair output, so the
// shape must stay exactly as written. Downstream ordering depends on the
// top, bottom, left, right edge sequence as a tie-break.

use crate::core_modules::grid::grid::{Coord, PixelGrid};
use crate::core_modules::pixel::pixel::Pixel;

pub mod ring {
    use super::*;

    /// Appends the usable perimeter colors at the given radius to `collected`.
    /// Purely a query; the grid is never written.
    pub fn collect_ring(
        grid: &PixelGrid,
        center_x: Coord,
        center_y: Coord,
        ring: Coord,
        key: &Pixel,
        collected: &mut Vec<Pixel>,
    ) {
        for x in (center_x - ring)..(center_x + ring) {
            collect_color(grid, x, center_y - ring, key, collected);
        }
        for x in (center_x - ring)..(center_x + ring) {
            collect_color(grid, x, center_y + ring, key, collected);
        }
        for y in (center_y - ring + 1)..(center_y + ring - 1) {
            collect_color(grid, center_x - ring, y, key, collected);
        }
        for y in (center_y - ring + 1)..(center_y + ring - 1) {
            collect_color(grid, center_x + ring, y, key, collected);
        }
    }

    /// Gathers the color at `(x, y)` unless it is out of bounds or matches
    /// the defect color.
    fn collect_color(
        grid: &PixelGrid,
        x: Coord,
        y: Coord,
        key: &Pixel,
        collected: &mut Vec<Pixel>,
    ) {
        if let Some(color) = grid.color_at(x, y) {
            if !color.same_color(key) {
                collected.push(color);
            }
        }
    }
}
