// THEORY:
// The `pipeline` module is the top-level API for the repair engine. A
// `Repairer` captures the defect color exactly once, at construction, from
// the pixel at the grid origin; every later defect test compares against that
// one value. Repair then scans the input row-major, copying sound pixels
// verbatim (alpha included) and substituting the selector's choice for
// defective ones, into a freshly allocated output. The input grid is never
// mutated and the selector only ever reads the input, so a replacement can
// never leak into a later replacement's neighborhood.

use crate::core_modules::grid::grid::{Coord, PixelGrid};
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::selector::select_replacement;
use log::{debug, info};

// Re-export the error type for the public API.
pub use crate::core_modules::selector::RepairError;

/// The repair driver. Holds the one process-wide constant of the engine:
/// the defect color every pixel is tested against.
#[derive(Debug, Clone)]
pub struct Repairer {
    key: Pixel,
}

impl Repairer {
    /// Builds a driver around an explicit defect color.
    pub fn new(key: Pixel) -> Self {
        Self { key }
    }

    /// Builds a driver whose defect color is the pixel at the grid's origin,
    /// the first in-bounds coordinate. Fails on a zero-area grid.
    pub fn from_origin(grid: &PixelGrid) -> Result<Self, RepairError> {
        let key = grid.origin_color().ok_or(RepairError::EmptyImage)?;
        debug!(
            "defect color sampled at origin: rgb({}, {}, {})",
            key.red, key.green, key.blue
        );
        Ok(Self::new(key))
    }

    /// The defect color this driver was built around.
    pub fn key(&self) -> Pixel {
        self.key
    }

    /// Repairs the whole grid into a fresh output grid. Deterministic for a
    /// fixed input and defect color.
    pub fn repair(&self, input: &PixelGrid) -> Result<PixelGrid, RepairError> {
        let bounds = input.bounds();
        if bounds.is_empty() {
            return Err(RepairError::EmptyImage);
        }

        let defective = self.count_defective(input);
        let pixels = self.repair_rows(input, bounds.min_y, bounds.max_y)?;
        info!(
            "repaired {} defective pixels in a {}x{} image",
            defective,
            bounds.width(),
            bounds.height()
        );
        Ok(PixelGrid::from_pixels(bounds, pixels))
    }

    /// Repairs the rows `row_start..row_end` and returns their pixels in
    /// row-major order. This is the unit of work the parallel driver hands to
    /// each worker; every output pixel depends only on the frozen input grid
    /// and the captured defect color, so disjoint row bands compose into the
    /// same output the sequential scan produces.
    pub fn repair_rows(
        &self,
        input: &PixelGrid,
        row_start: Coord,
        row_end: Coord,
    ) -> Result<Vec<Pixel>, RepairError> {
        let bounds = input.bounds();
        let rows = (row_end - row_start).max(0) as usize;
        let mut output = Vec::with_capacity(bounds.width() as usize * rows);

        for y in row_start..row_end {
            for x in bounds.min_x..bounds.max_x {
                if let Some(original) = input.color_at(x, y) {
                    let repaired = if original.same_color(&self.key) {
                        select_replacement(input, x, y, &self.key)?
                    } else {
                        original
                    };
                    output.push(repaired);
                }
            }
        }
        Ok(output)
    }

    fn count_defective(&self, input: &PixelGrid) -> usize {
        input
            .pixels()
            .iter()
            .filter(|pixel| pixel.same_color(&self.key))
            .count()
    }
}
