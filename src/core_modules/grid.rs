// THEORY:
// The `grid` module is the spatial backbone of the repair engine. A `PixelGrid`
// is a "dumb" container holding a flattened vector of `Pixel`s together with an
// explicit bounding rectangle. Coordinates are signed because the ring search
// routinely probes beyond every image edge; an out-of-bounds read is a normal,
// expected outcome and is answered with `None`, never with a panic or a
// substitute color.
//
// Key architectural principles:
// 1.  **Explicit bounds**: The rectangle carries its own minimum and exclusive
//     maximum on both axes. Nothing assumes the origin is (0, 0), so the grid
//     contract holds for any rectangle a decoder hands over.
// 2.  **Read-only once constructed**: The repair drivers build a fresh pixel
//     vector and wrap it into a new grid. There is no mutation API, which
//     makes the "collector never observes a freshly written pixel" invariant
//     structural instead of procedural.

pub mod grid {
    use crate::core_modules::pixel::pixel::Pixel;

    pub type Coord = i32;

    /// A bounding rectangle with inclusive minima and exclusive maxima.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Bounds {
        pub min_x: Coord,
        pub min_y: Coord,
        pub max_x: Coord,
        pub max_y: Coord,
    }

    impl Bounds {
        pub fn new(min_x: Coord, min_y: Coord, max_x: Coord, max_y: Coord) -> Self {
            Self {
                min_x,
                min_y,
                max_x,
                max_y,
            }
        }

        /// A rectangle of the given size anchored at the origin (0, 0).
        pub fn of_size(width: u32, height: u32) -> Self {
            Self::new(0, 0, width as Coord, height as Coord)
        }

        pub fn contains(&self, x: Coord, y: Coord) -> bool {
            x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
        }

        pub fn width(&self) -> u32 {
            (self.max_x - self.min_x).max(0) as u32
        }

        pub fn height(&self) -> u32 {
            (self.max_y - self.min_y).max(0) as u32
        }

        pub fn is_empty(&self) -> bool {
            self.width() == 0 || self.height() == 0
        }

        /// Length of the rectangle's diagonal, rounded up. A square ring of
        /// this radius centered anywhere inside the rectangle encloses every
        /// cell of it, so the ring search never needs to grow past this.
        pub fn diagonal(&self) -> Coord {
            (self.width() as f64).hypot(self.height() as f64).ceil() as Coord
        }
    }

    /// A "dumb" data container representing a rectangular block of pixels.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PixelGrid {
        bounds: Bounds,
        /// Flattened row-major pixel data, `width * height` entries.
        pixels: Vec<Pixel>,
    }

    impl PixelGrid {
        pub fn from_pixels(bounds: Bounds, pixels: Vec<Pixel>) -> Self {
            debug_assert_eq!(
                pixels.len(),
                bounds.width() as usize * bounds.height() as usize
            );
            Self { bounds, pixels }
        }

        pub fn bounds(&self) -> Bounds {
            self.bounds
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        /// Bounds-checked read access. `None` when `(x, y)` lies outside the
        /// bounding rectangle.
        pub fn color_at(&self, x: Coord, y: Coord) -> Option<Pixel> {
            self.index_of(x, y).map(|index| self.pixels[index])
        }

        /// The pixel at the grid's origin, the first in-bounds coordinate.
        /// `None` when the bounding rectangle has zero area.
        pub fn origin_color(&self) -> Option<Pixel> {
            self.color_at(self.bounds.min_x, self.bounds.min_y)
        }

        fn index_of(&self, x: Coord, y: Coord) -> Option<usize> {
            if !self.bounds.contains(x, y) {
                return None;
            }
            let column = (x - self.bounds.min_x) as usize;
            let row = (y - self.bounds.min_y) as usize;
            Some(row * self.bounds.width() as usize + column)
        }
    }
}
