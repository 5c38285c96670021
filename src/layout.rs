//! Vertical layout of wrapped lines and canvas sizing.

use crate::metrics::TextMetrics;

/// Smallest content extent, so an empty block still has a non-zero area.
pub const MIN_BLOCK_EXTENT: u32 = 1;

/// Measured placement of a block of lines inside a padded canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Ink height of each line, in input order.
    pub line_heights: Vec<u32>,
    /// Top edge of each line, measured from the top of the canvas.
    pub line_offsets: Vec<u32>,
    pub padding: u32,
}

impl BlockLayout {
    pub fn line_count(&self) -> usize {
        self.line_heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_heights.is_empty()
    }

    /// Canvas size grown so neither edge is below `min_edge`.
    ///
    /// Growing only adds space on the right and bottom, so the line offsets
    /// stay valid.
    pub fn canvas_size_at_least(&self, min_edge: u32) -> (u32, u32) {
        (
            self.canvas_width.max(min_edge),
            self.canvas_height.max(min_edge),
        )
    }
}

/// Measures `lines` top to bottom and returns the canvas they need.
///
/// Each line's height comes from [`TextMetrics::text_bounds`]. Lines are
/// stacked starting at `padding`, separated by `spacing`, and the canvas
/// gets `padding` on every side.
pub fn measure_lines<S, M>(lines: &[S], metrics: &M, spacing: u32, padding: u32) -> BlockLayout
where
    S: AsRef<str>,
    M: TextMetrics + ?Sized,
{
    let mut max_line_width = 0u32;
    let mut total_height = 0u32;
    let mut line_heights = Vec::with_capacity(lines.len());

    for line in lines {
        let (width, height) = metrics.text_bounds(line.as_ref());
        max_line_width = max_line_width.max(width);
        total_height = total_height.saturating_add(height);
        line_heights.push(height);
    }

    let gaps = (lines.len() as u32).saturating_sub(1);
    let block_height = total_height.saturating_add(spacing.saturating_mul(gaps));

    let canvas_width = max_line_width
        .max(MIN_BLOCK_EXTENT)
        .saturating_add(padding.saturating_mul(2));
    let canvas_height = block_height
        .max(MIN_BLOCK_EXTENT)
        .saturating_add(padding.saturating_mul(2));

    let mut line_offsets = Vec::with_capacity(lines.len());
    let mut current_y = padding;
    for height in &line_heights {
        line_offsets.push(current_y);
        current_y = current_y.saturating_add(height.saturating_add(spacing));
    }

    BlockLayout {
        canvas_width,
        canvas_height,
        line_heights,
        line_offsets,
        padding,
    }
}
