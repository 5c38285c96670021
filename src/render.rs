//! Per-typeface rendering run: discover fonts, wrap, lay out, draw, save.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::canvas::{BLACK, Canvas, WHITE};
use crate::config::RenderConfig;
use crate::font::Typeface;
use crate::layout::measure_lines;
use crate::wrap::wrap_lines;

/// Outcome of [`render_all`].
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: Vec<PathBuf>,
    /// Typefaces that failed, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Lists `.ttf` files directly inside `dir`, sorted by file name.
pub fn discover_fonts(dir: impl AsRef<Path>) -> anyhow::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("Font directory {} does not exist", dir.display());
    }

    let mut fonts = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_ttf = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"));
        if is_ttf {
            fonts.push(entry.into_path());
        }
    }

    Ok(fonts)
}

/// `<output_dir>/<base_name>_<font stem>.png`
pub fn output_path(output_dir: &Path, base_name: &str, font_path: &Path) -> PathBuf {
    let stem = font_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{base_name}_{stem}.png"))
}

/// Prefixes `text` with a `Font: <family>` header and a blank line.
pub fn with_font_name_line(typeface: &Typeface, text: &str) -> String {
    match typeface.family_name() {
        Some(name) => format!("Font: {name}\n\n{text}"),
        None => text.to_string(),
    }
}

/// Lays out already-wrapped `lines` and draws them onto a fresh canvas.
pub fn render_lines<S: AsRef<str>>(lines: &[S], typeface: &Typeface, config: &RenderConfig) -> Canvas {
    let layout = measure_lines(lines, typeface, config.line_spacing, config.padding);
    let (width, height) = layout.canvas_size_at_least(config.min_canvas_size);
    log::debug!(
        "{} lines -> {}x{} canvas",
        layout.line_count(),
        width,
        height
    );

    let mut canvas = Canvas::new(width, height, WHITE);
    for (line, y) in lines.iter().zip(&layout.line_offsets) {
        canvas.draw_text(layout.padding, *y, line.as_ref(), typeface, BLACK);
    }
    canvas
}

/// Renders the configured text with one font file and returns the image path.
pub fn render_typeface(font_path: &Path, config: &RenderConfig) -> anyhow::Result<PathBuf> {
    let typeface = Typeface::from_file(font_path, config.font_size)?;
    let text = with_font_name_line(&typeface, &config.text);
    let lines = wrap_lines(text.trim(), &typeface, config.wrap_width());

    let canvas = render_lines(&lines, &typeface, config);
    let path = output_path(&config.output_dir, &config.output_base_name, font_path);
    canvas.save(&path)?;
    Ok(path)
}

/// Renders every typeface in `config.fonts_dir`.
///
/// A font that cannot be loaded or saved is logged and skipped; only a
/// missing or empty font directory fails the whole run.
pub fn render_all(config: &RenderConfig) -> anyhow::Result<RenderSummary> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let fonts = discover_fonts(&config.fonts_dir)?;
    if fonts.is_empty() {
        anyhow::bail!("No .ttf files found in {}", config.fonts_dir.display());
    }

    let mut summary = RenderSummary::default();
    for font_path in fonts {
        match render_typeface(&font_path, config) {
            Ok(path) => {
                log::info!("Rendered {} -> {}", font_path.display(), path.display());
                summary.rendered.push(path);
            }
            Err(e) => {
                log::warn!("Skipping {}: {:#}", font_path.display(), e);
                summary.skipped.push((font_path, format!("{e:#}")));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt::Pt;

    const FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

    fn face() -> Typeface {
        Typeface::from_bytes(FONT.to_vec(), Pt::from(20u32)).unwrap()
    }

    fn config_in(root: &Path) -> RenderConfig {
        RenderConfig::default()
            .with_fonts_dir(root.join("fonts"))
            .with_output_dir(root.join("output"))
    }

    #[test]
    fn test_output_path_uses_font_stem() {
        let path = output_path(Path::new("out"), "image", Path::new("/fonts/Nanum Gothic.ttf"));
        assert_eq!(path, PathBuf::from("out/image_Nanum Gothic.png"));
    }

    #[test]
    fn test_font_name_line_is_prepended() {
        let text = with_font_name_line(&face(), "hello");
        assert_eq!(text, "Font: DejaVu Sans\n\nhello");
    }

    #[test]
    fn test_discover_fonts_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.ttf", "a.TTF", "notes.txt", "c.otf"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.ttf")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("deep.ttf"), b"").unwrap();

        let fonts = discover_fonts(dir.path()).unwrap();
        let names: Vec<_> = fonts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TTF", "b.ttf"]);
    }

    #[test]
    fn test_discover_fonts_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_fonts(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_render_lines_sizes_canvas_from_layout() {
        let face = face();
        let config = RenderConfig::default();
        let lines = wrap_lines("a few words to wrap", &face, 60.0);
        assert!(lines.len() > 1);

        let layout = measure_lines(&lines, &face, config.line_spacing, config.padding);
        let canvas = render_lines(&lines, &face, &config);
        assert_eq!(
            (canvas.width(), canvas.height()),
            layout.canvas_size_at_least(config.min_canvas_size)
        );
    }

    #[test]
    fn test_render_lines_empty_uses_minimum_canvas() {
        let lines: Vec<String> = Vec::new();
        let canvas = render_lines(&lines, &face(), &RenderConfig::default());
        assert_eq!((canvas.width(), canvas.height()), (100, 100));
    }

    #[test]
    fn test_render_all_writes_one_image_per_font_and_skips_broken() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path()).with_output_base_name("sample");
        std::fs::create_dir(&config.fonts_dir).unwrap();
        std::fs::write(config.fonts_dir.join("DejaVuSans.ttf"), FONT).unwrap();
        std::fs::write(config.fonts_dir.join("Broken.ttf"), b"garbage").unwrap();

        let summary = render_all(&config).unwrap();

        let expected = config.output_dir.join("sample_DejaVuSans.png");
        assert_eq!(summary.rendered, vec![expected.clone()]);
        assert_eq!(summary.skipped.len(), 1);
        assert!(summary.skipped[0].0.ends_with("Broken.ttf"));

        let image = image::open(&expected).unwrap();
        assert!(image.width() >= 100 && image.width() < 900);
        assert!(image.height() > 100);
    }

    #[test]
    fn test_render_all_without_fonts_fails() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path());
        std::fs::create_dir(&config.fonts_dir).unwrap();

        let err = render_all(&config).unwrap_err();
        assert!(err.to_string().contains("No .ttf files found"));
        assert!(config.output_dir.is_dir());
    }
}
