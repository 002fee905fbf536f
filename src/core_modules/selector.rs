// THEORY:
// The `selector` module decides which color a defective pixel becomes. It asks
// the ring collector for ever larger radii, pooling every usable neighbor it
// has seen so far, until the pool is non-empty. The pool is then ordered by
// brightness and the element at index `count / 2` is returned: the exact
// median for odd counts, the upper median for even counts.
//
// Key architectural principles:
// 1.  **Accumulation across radii**: Results of successive rings are appended
//     to one growing collection. Rings before the first successful one were
//     empty by definition, so the candidate set is exactly the first ring
//     that produced anything.
// 2.  **Deterministic ordering**: `sort_by_key` is a stable sort, so colors
//     of equal brightness keep the ring enumeration order. Repairing the same
//     image twice yields bit-identical output.
// 3.  **Bounded search**: The radius is capped at the grid diagonal. Once a
//     ring of that radius comes back empty, no usable neighbor can exist and
//     the search reports `NoReplacementFound` instead of spinning forever.

use crate::core_modules::grid::grid::{Coord, PixelGrid};
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::ring::ring::collect_ring;
use thiserror::Error;

/// Failures the repair computation itself can produce. Boundary failures
/// (file access, decoding, encoding) are handled by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    /// The bounding rectangle has zero area; there is no origin pixel to
    /// infer the defect color from.
    #[error("input image is empty")]
    EmptyImage,
    /// The ring search exhausted the whole grid without finding a single
    /// usable neighbor for the pixel at `(x, y)`.
    #[error("no replacement color found for pixel ({x}, {y}); every reachable pixel matches the defect color")]
    NoReplacementFound { x: Coord, y: Coord },
    /// A parallel repair worker terminated without delivering its rows.
    #[error("repair worker terminated unexpectedly")]
    WorkerFailure,
}

/// Picks the replacement color for the defective pixel at `(center_x, center_y)`
/// by the median brightness of the nearest ring of usable neighbors.
pub fn select_replacement(
    grid: &PixelGrid,
    center_x: Coord,
    center_y: Coord,
    key: &Pixel,
) -> Result<Pixel, RepairError> {
    let max_ring = grid.bounds().diagonal();
    let mut candidates: Vec<Pixel> = Vec::new();

    let mut ring = 1;
    while candidates.is_empty() {
        if ring > max_ring {
            return Err(RepairError::NoReplacementFound {
                x: center_x,
                y: center_y,
            });
        }
        collect_ring(grid, center_x, center_y, ring, key, &mut candidates);
        ring += 1;
    }

    candidates.sort_by_key(|candidate| candidate.brightness());
    Ok(candidates[candidates.len() / 2])
}
