use std::path::PathBuf;

use crate::pt::Pt;

pub const DEFAULT_TEXT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz
0123456789 `~!@#$%^&*()-=_+\\|<>,.;:/?\"'[{]}
별 헤는 밤, 낡은 짚차를 타고 숲 속으로, 퀘퀘한 향내를 맡으니 즈믄 강은 흐르고 저편에는 붉은 탑이 솟아있네.";

/// Settings for one rendering run over a font directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub text: String,
    pub font_size: Pt,
    /// Output files are named `<output_base_name>_<font stem>.png`.
    pub output_base_name: String,
    pub line_spacing: u32,
    pub fonts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_image_width: Pt,
    /// Subtracted from `max_image_width` to get the wrap budget.
    pub wrap_margin: Pt,
    pub padding: u32,
    pub min_canvas_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            font_size: Pt::from(20u32),
            output_base_name: "image".to_string(),
            line_spacing: 10,
            fonts_dir: PathBuf::from("data/fonts"),
            output_dir: PathBuf::from("data/output"),
            max_image_width: Pt::from(800u32),
            wrap_margin: Pt::from(40u32),
            padding: 30,
            min_canvas_size: 100,
        }
    }
}

impl RenderConfig {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font_size(mut self, font_size: Pt) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_output_base_name(mut self, name: impl Into<String>) -> Self {
        self.output_base_name = name.into();
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: u32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_max_image_width(mut self, width: Pt) -> Self {
        self.max_image_width = width;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Pixel budget handed to the line wrapper.
    pub fn wrap_width(&self) -> f32 {
        (self.max_image_width - self.wrap_margin).as_f32()
    }
}
