// THEORY:
// The `Pixel` module is the most fundamental unit of the repair engine. It is a
// "dumb" data container for a single pixel plus the two heuristics the repair
// algorithm is built on. Anything that needs another pixel's position (ring
// enumeration, neighborhood gathering) belongs in higher modules like `ring`.
//
// What lives here (by design):
// - Raw channels (RGBA) at 16 bits each, matching the widened range a decoder
//   exposes for any source bit depth (an 8-bit source maps onto 0..65535).
// - Brightness: the sum of the red, green, and blue channels. Alpha never
//   contributes. This is the only ordering the replacement selector uses.
// - Defect equality: two pixels carry the "same color" when their red, green,
//   and blue channels match exactly. Alpha is deliberately ignored so that a
//   scratch marker is recognized regardless of transparency.
//
// Key principles:
// 1) Single-pixel scope: these operations never read neighbors.
// 2) Totality: both heuristics are defined for every representable pixel.
// 3) Immutability: a `Pixel` is produced by decoding and never changed.

pub mod pixel {
    pub type Channel = u16;
    pub type Brightness = u32;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Pixel {
        /// The red channel value (0-65535).
        pub red: Channel,
        /// The green channel value (0-65535).
        pub green: Channel,
        /// The blue channel value (0-65535).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-65535).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Brightness proxy: raw RGB channel sum.
        /// Alpha is excluded; three 16-bit channels always fit a `u32`.
        pub fn brightness(&self) -> Brightness {
            self.red as Brightness + self.green as Brightness + self.blue as Brightness
        }

        /// Color equality for defect detection. Symmetric, ignores alpha.
        pub fn same_color(&self, other: &Pixel) -> bool {
            self.red == other.red && self.green == other.green && self.blue == other.blue
        }
    }

    impl From<image::Rgba<u16>> for Pixel {
        fn from(rgba: image::Rgba<u16>) -> Self {
            Pixel::new(rgba.0[0], rgba.0[1], rgba.0[2], rgba.0[3])
        }
    }

    impl From<Pixel> for image::Rgba<u16> {
        fn from(pixel: Pixel) -> Self {
            image::Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
        }
    }
}
