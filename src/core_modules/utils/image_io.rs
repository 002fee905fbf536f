// Bridges between encoded image files and the repair engine's `PixelGrid`.
// Decoding widens every source to 16 bits per channel so brightness and
// equality behave identically for 8-bit and 16-bit inputs. Encoding always
// produces PNG, regardless of the input container, and goes through an
// in-memory buffer so a failed encode never leaves a partial file behind.

pub mod image_io {
    use crate::core_modules::grid::grid::{Bounds, PixelGrid};
    use crate::core_modules::pixel::pixel::Pixel;
    use anyhow::Context;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;
    use std::path::Path;

    /// Decodes raw image bytes into a 16-bit-per-channel pixel grid.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<PixelGrid> {
        let decoded = image::load_from_memory(bytes).context("couldn't decode image")?;
        let rgba = decoded.to_rgba16();
        let bounds = Bounds::of_size(rgba.width(), rgba.height());
        let pixels = rgba.pixels().map(|rgba| Pixel::from(*rgba)).collect();
        Ok(PixelGrid::from_pixels(bounds, pixels))
    }

    /// Reads and decodes the image file at `path`.
    pub fn read_file(path: &Path) -> anyhow::Result<PixelGrid> {
        let bytes = std::fs::read(path).context("couldn't open the input file for reading")?;
        decode(&bytes)
    }

    /// Encodes a pixel grid as PNG bytes.
    pub fn encode_png(grid: &PixelGrid) -> anyhow::Result<Vec<u8>> {
        let bounds = grid.bounds();
        let raw: Vec<u16> = grid
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let rgba: Rgba<u16> = (*pixel).into();
                rgba.0
            })
            .collect();
        let buffer = image::ImageBuffer::from_raw(bounds.width(), bounds.height(), raw)
            .context("pixel data does not match the grid dimensions")?;

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba16(buffer)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("couldn't encode image as PNG")?;
        Ok(bytes)
    }

    /// Encodes a pixel grid and writes it to `path`. The file is only
    /// touched once the full encoding succeeded.
    pub fn write_file(path: &Path, grid: &PixelGrid) -> anyhow::Result<()> {
        let bytes = encode_png(grid)?;
        std::fs::write(path, bytes).context("couldn't write the output file")
    }
}

#[cfg(test)]
mod tests {
    use super::image_io::*;
    use crate::core_modules::grid::grid::{Bounds, PixelGrid};
    use crate::core_modules::pixel::pixel::Pixel;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn eight_bit_sources_are_widened_to_sixteen_bits() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([255, 0, 128, 255]));
        source.put_pixel(1, 0, Rgba([1, 2, 3, 4]));
        let mut bytes = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let grid = decode(&bytes).unwrap();
        assert_eq!(grid.bounds(), Bounds::of_size(2, 1));
        // An 8-bit channel value v widens to v * 257.
        assert_eq!(
            grid.color_at(0, 0),
            Some(Pixel::new(65535, 0, 128 * 257, 65535))
        );
        assert_eq!(grid.color_at(1, 0), Some(Pixel::new(257, 514, 771, 1028)));
    }

    #[test]
    fn png_encoding_preserves_sixteen_bit_pixels() {
        let bounds = Bounds::of_size(2, 2);
        let pixels = vec![
            Pixel::new(0, 1, 2, 3),
            Pixel::new(40000, 50000, 60000, 65535),
            Pixel::new(65535, 0, 65535, 0),
            Pixel::new(7, 8, 9, 10),
        ];
        let grid = PixelGrid::from_pixels(bounds, pixels);

        let bytes = encode_png(&grid).unwrap();
        assert_eq!(decode(&bytes).unwrap(), grid);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode(b"not an image").is_err());
    }
}
