//! Fontsheet - render sample text into one preview image per typeface.
//!
//! The interesting part is the pair of pure functions [`wrap_text`] and
//! [`measure_lines`]. They depend only on [`TextMetrics`], so they can be
//! driven by a real [`Typeface`] or by a synthetic width function.
//!
//! # Example
//! ```
//! use fontsheet::{FnMetrics, measure_lines, wrap_lines};
//!
//! let metrics = FnMetrics::new(
//!     |s: &str| s.chars().count() as f32 * 10.0,
//!     |s: &str| (s.chars().count() as u32 * 10, 20),
//! );
//! let lines = wrap_lines("The quick brown fox", &metrics, 90.0);
//! assert_eq!(lines, vec!["The quick", "brown fox"]);
//!
//! let layout = measure_lines(&lines, &metrics, 10, 30);
//! assert_eq!(layout.canvas_height, 2 * 30 + 2 * 20 + 10);
//! assert_eq!(layout.line_offsets, vec![30, 60]);
//! ```

mod canvas;
mod config;
mod font;
mod layout;
mod metrics;
mod pt;
mod render;
mod wrap;

pub use canvas::{BLACK, Canvas, WHITE};
pub use config::{DEFAULT_TEXT, RenderConfig};
pub use font::{Typeface, load_font_from_file};
pub use layout::{BlockLayout, MIN_BLOCK_EXTENT, measure_lines};
pub use metrics::{FnMetrics, TextMetrics};
pub use pt::Pt;
pub use render::{
    RenderSummary, discover_fonts, output_path, render_all, render_lines, render_typeface,
    with_font_name_line,
};
pub use wrap::{wrap_lines, wrap_text};
