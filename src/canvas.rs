//! RGB canvas that glyphs are rasterized onto.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::font::{Typeface, union_bounds};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Draws `text` so that its ink bounding box starts at `(x, y)`.
    ///
    /// Coverage is blended over what is already on the canvas, and anything
    /// past the canvas edges is dropped.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, typeface: &Typeface, color: Rgb<u8>) {
        let glyphs = typeface.outlined_glyphs(text);
        let Some(ink) = union_bounds(&glyphs) else {
            return;
        };

        let width = self.image.width() as i64;
        let height = self.image.height() as i64;

        for glyph in &glyphs {
            let bounds = glyph.px_bounds();
            let left = x as i64 + (bounds.min.x - ink.min.x).round() as i64;
            let top = y as i64 + (bounds.min.y - ink.min.y).round() as i64;
            let image = &mut self.image;

            glyph.draw(|gx, gy, coverage| {
                let px = left + gx as i64;
                let py = top + gy as i64;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let dst = image.get_pixel_mut(px as u32, py as u32);
                *dst = blend(*dst, color, coverage);
            });
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to save image to {}: {}", path.display(), e))
    }
}

fn blend(dst: Rgb<u8>, src: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let a = coverage.clamp(0.0, 1.0);
    let mix = |d: u8, s: u8| (d as f32 * (1.0 - a) + s as f32 * a).round().clamp(0.0, 255.0) as u8;
    Rgb([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
    ])
}
