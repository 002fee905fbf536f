use crate::core_modules::grid::grid::PixelGrid;
use crate::pipeline::{RepairError, Repairer};
use futures::future::try_join_all;
use log::debug;
use std::sync::Arc;

/// Repairs the grid by partitioning its row range across a pool of workers.
/// Each worker repairs a disjoint band of rows against the shared read-only
/// input, so no synchronization is needed beyond handing the grid around in
/// an `Arc`; the bands are reassembled in row order, which makes the result
/// bit-identical to `Repairer::repair`.
pub async fn repair_parallel(
    repairer: &Repairer,
    input: PixelGrid,
) -> Result<PixelGrid, RepairError> {
    let bounds = input.bounds();
    if bounds.is_empty() {
        return Err(RepairError::EmptyImage);
    }

    let rows = bounds.height() as usize;
    let workers = num_cpus::get().min(rows).max(1);
    let band_rows = rows.div_ceil(workers) as i32;
    debug!("repairing with {workers} workers, {band_rows} rows per band");

    let input = Arc::new(input);
    let mut handles = Vec::with_capacity(workers);
    let mut row = bounds.min_y;
    while row < bounds.max_y {
        let band_end = (row + band_rows).min(bounds.max_y);
        let grid = Arc::clone(&input);
        let worker = repairer.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            worker.repair_rows(&grid, row, band_end)
        }));
        row = band_end;
    }

    let bands = try_join_all(handles)
        .await
        .map_err(|_| RepairError::WorkerFailure)?;

    let mut pixels = Vec::with_capacity(bounds.width() as usize * rows);
    for band in bands {
        pixels.extend(band?);
    }
    Ok(PixelGrid::from_pixels(bounds, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::grid::grid::{Bounds, Coord};
    use crate::core_modules::pixel::pixel::Pixel;

    const KEY: Pixel = Pixel {
        red: 65535,
        green: 0,
        blue: 65535,
        alpha: 65535,
    };

    fn grid_of(width: u32, height: u32, color_for: impl Fn(Coord, Coord) -> Pixel) -> PixelGrid {
        let bounds = Bounds::of_size(width, height);
        let mut pixels = Vec::new();
        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                pixels.push(color_for(x, y));
            }
        }
        PixelGrid::from_pixels(bounds, pixels)
    }

    /// A tall grid with defects sprinkled through every band.
    fn speckled_grid() -> PixelGrid {
        grid_of(9, 64, |x, y| {
            if x == 0 && y == 0 {
                KEY
            } else if (x * 5 + y * 3) % 11 == 0 {
                KEY
            } else {
                Pixel::new((x * 31) as u16, (y * 17) as u16, 4000, (x * y) as u16)
            }
        })
    }

    #[tokio::test]
    async fn parallel_repair_matches_the_sequential_driver() {
        let input = speckled_grid();
        let repairer = Repairer::from_origin(&input).unwrap();

        let sequential = repairer.repair(&input).unwrap();
        let parallel = repair_parallel(&repairer, input).await.unwrap();
        assert_eq!(parallel, sequential);
    }

    #[tokio::test]
    async fn parallel_repair_replaces_every_defect() {
        let input = speckled_grid();
        let repairer = Repairer::from_origin(&input).unwrap();
        let output = repair_parallel(&repairer, input).await.unwrap();
        assert!(output.pixels().iter().all(|pixel| !pixel.same_color(&KEY)));
    }

    #[tokio::test]
    async fn a_fully_defective_grid_fails_instead_of_starving_workers() {
        let input = grid_of(4, 4, |_, _| KEY);
        let repairer = Repairer::from_origin(&input).unwrap();
        assert!(matches!(
            repair_parallel(&repairer, input).await,
            Err(RepairError::NoReplacementFound { .. })
        ));
    }

    #[tokio::test]
    async fn an_empty_grid_is_rejected() {
        let input = PixelGrid::from_pixels(Bounds::new(0, 0, 0, 0), Vec::new());
        let repairer = Repairer::new(KEY);
        assert_eq!(
            repair_parallel(&repairer, input).await,
            Err(RepairError::EmptyImage)
        );
    }
}
