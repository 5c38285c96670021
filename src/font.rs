//! Typeface loading and glyph measurement.

use std::path::Path;

use ab_glyph::{Font as _, FontArc, Glyph, GlyphId, OutlinedGlyph, PxScale, PxScaleFont, Rect, ScaleFont as _};
use anyhow::Context as _;

use crate::metrics::TextMetrics;
use crate::pt::Pt;

pub fn load_font_from_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to load font from {}: {}", path.display(), e))
}

/// A font loaded at a fixed pixel size.
///
/// # Example
/// ```no_run
/// # use fontsheet::{Pt, TextMetrics, Typeface};
/// let face = Typeface::from_file("assets/DejaVuSans.ttf", Pt::from(20u32)).unwrap();
/// let width = face.measure_text_width("Hello");
/// ```
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
    font_size: Pt,
    family_name: Option<String>,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("family_name", &self.family_name)
            .field("font_size", &self.font_size)
            .finish_non_exhaustive()
    }
}

impl Typeface {
    pub fn from_file(path: impl AsRef<Path>, font_size: Pt) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = load_font_from_file(path)?;
        Self::from_bytes(data, font_size)
            .with_context(|| format!("Failed to open typeface {}", path.display()))
    }

    pub fn from_bytes(data: Vec<u8>, font_size: Pt) -> anyhow::Result<Self> {
        let family_name = read_family_name(&data);
        let font = FontArc::try_from_vec(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;

        Ok(Self {
            font,
            font_size: Pt::from(font_size.as_f32().max(1.0)),
            family_name,
        })
    }

    /// Family name from the font's `name` table, if it has a readable one.
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    fn scale(&self) -> PxScale {
        PxScale::from(self.font_size.as_f32())
    }

    fn scaled(&self) -> PxScaleFont<&FontArc> {
        self.font.as_scaled(self.scale())
    }

    /// Distance between successive baselines.
    pub fn line_advance(&self) -> f32 {
        let scaled = self.scaled();
        scaled.ascent() - scaled.descent() + scaled.line_gap()
    }

    /// Advance width of one line, kerning included.
    fn line_width(&self, line: &str) -> f32 {
        let scaled = self.scaled();
        let mut width = 0.0f32;
        let mut prev: Option<GlyphId> = None;

        for ch in line.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    /// Outlines for every visible glyph of `text`, laid out with the first
    /// baseline at `ascent` and `'\n'` moving down one line.
    pub(crate) fn outlined_glyphs(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scale = self.scale();
        let scaled = self.scaled();
        let line_advance = self.line_advance();

        let mut outlined = Vec::new();
        let mut caret = ab_glyph::point(0.0, scaled.ascent());
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            if ch == '\n' {
                caret.x = 0.0;
                caret.y += line_advance;
                prev = None;
                continue;
            }

            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret.x += scaled.kern(p, id);
            }
            prev = Some(id);

            // Whitespace has no outline but still advances.
            if let Some(glyph) = scaled.outline_glyph(Glyph {
                id,
                scale,
                position: caret,
            }) {
                outlined.push(glyph);
            }
            caret.x += scaled.h_advance(id);
        }

        outlined
    }

    /// Union of the pixel bounds of every visible glyph in `text`.
    pub(crate) fn ink_bounds(&self, text: &str) -> Option<Rect> {
        union_bounds(&self.outlined_glyphs(text))
    }
}

pub(crate) fn union_bounds(glyphs: &[OutlinedGlyph]) -> Option<Rect> {
    glyphs.iter().map(OutlinedGlyph::px_bounds).reduce(|acc, b| Rect {
        min: ab_glyph::point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
        max: ab_glyph::point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
    })
}

fn read_family_name(data: &[u8]) -> Option<String> {
    let face = ttf_parser::Face::parse(data, 0).ok()?;
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
        .find_map(|name| name.to_string())
        .filter(|name| !name.trim().is_empty())
}

impl TextMetrics for Typeface {
    fn measure_text_width(&self, text: &str) -> f32 {
        text.split('\n')
            .map(|line| self.line_width(line))
            .fold(0.0f32, f32::max)
    }

    fn text_bounds(&self, text: &str) -> (u32, u32) {
        match self.ink_bounds(text) {
            Some(rect) => (
                Pt::from(rect.width()).ceil_u32(),
                Pt::from(rect.height()).ceil_u32(),
            ),
            None => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

    fn face(size: u32) -> Typeface {
        Typeface::from_bytes(FONT.to_vec(), Pt::from(size)).unwrap()
    }

    #[test]
    fn test_family_name_is_read() {
        assert_eq!(face(20).family_name(), Some("DejaVu Sans"));
    }

    #[test]
    fn test_invalid_bytes_fail_to_parse() {
        let err = Typeface::from_bytes(b"not a font".to_vec(), Pt::from(20u32)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse font"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Typeface::from_file("/definitely/not/here.ttf", Pt::from(20u32)).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ttf"));
    }

    #[test]
    fn test_width_grows_with_repeated_characters() {
        let face = face(20);
        let one = face.measure_text_width("m");
        let three = face.measure_text_width("mmm");
        assert!(one > 0.0);
        assert!(three > one * 2.5);
    }

    #[test]
    fn test_space_has_width_but_no_ink() {
        let face = face(20);
        assert!(face.measure_text_width(" ") > 0.0);
        assert_eq!(face.text_bounds(" "), (0, 0));
        assert_eq!(face.text_bounds(""), (0, 0));
    }

    #[test]
    fn test_width_of_multiline_text_is_widest_line() {
        let face = face(20);
        let wide = face.measure_text_width("wide line");
        assert_eq!(face.measure_text_width("ab\nwide line\nc"), wide);
    }

    #[test]
    fn test_newline_adds_height() {
        let face = face(20);
        let (_, single) = face.text_bounds("Hx");
        let (_, double) = face.text_bounds("Hx\nHx");
        assert!(double as f32 >= single as f32 + face.line_advance() - 2.0);
    }

    #[test]
    fn test_descender_makes_line_taller() {
        let face = face(32);
        let (_, flat) = face.text_bounds("ace");
        let (_, tall) = face.text_bounds("gyp");
        assert!(tall > flat);
    }

    #[test]
    fn test_font_size_is_clamped_to_one() {
        assert_eq!(face(0).font_size(), Pt::from(1u32));
    }
}
