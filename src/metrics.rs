//! Text measurement seam between the layout code and a real typeface.

/// Measures strings rendered in one typeface at one size.
///
/// The wrapper only needs advance widths; the layout measurer only needs
/// ink bounds. The two may disagree slightly for the same string.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn measure_text_width(&self, text: &str) -> f32;

    /// Tight ink bounding box of `text` as `(width, height)` in whole pixels.
    fn text_bounds(&self, text: &str) -> (u32, u32);
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure_text_width(&self, text: &str) -> f32 {
        (**self).measure_text_width(text)
    }

    fn text_bounds(&self, text: &str) -> (u32, u32) {
        (**self).text_bounds(text)
    }
}

/// Adapts a pair of closures into [`TextMetrics`].
///
/// ```
/// use fontsheet::{FnMetrics, TextMetrics};
///
/// let metrics = FnMetrics::new(
///     |s: &str| s.chars().count() as f32 * 10.0,
///     |s: &str| (s.chars().count() as u32 * 10, 20),
/// );
/// assert_eq!(metrics.measure_text_width("abc"), 30.0);
/// assert_eq!(metrics.text_bounds("abc"), (30, 20));
/// ```
pub struct FnMetrics<W, B> {
    width: W,
    bounds: B,
}

impl<W, B> FnMetrics<W, B>
where
    W: Fn(&str) -> f32,
    B: Fn(&str) -> (u32, u32),
{
    pub fn new(width: W, bounds: B) -> Self {
        Self { width, bounds }
    }
}

impl<W, B> TextMetrics for FnMetrics<W, B>
where
    W: Fn(&str) -> f32,
    B: Fn(&str) -> (u32, u32),
{
    fn measure_text_width(&self, text: &str) -> f32 {
        (self.width)(text)
    }

    fn text_bounds(&self, text: &str) -> (u32, u32) {
        (self.bounds)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure_via_ref<M: TextMetrics>(m: M, text: &str) -> f32 {
        m.measure_text_width(text)
    }

    #[test]
    fn test_fn_metrics_forwards_to_closures() {
        let metrics = FnMetrics::new(|s: &str| s.len() as f32 * 2.5, |s: &str| (s.len() as u32, 7));
        assert_eq!(metrics.measure_text_width("abcd"), 10.0);
        assert_eq!(metrics.text_bounds("abcd"), (4, 7));
    }

    #[test]
    fn test_reference_is_metrics() {
        let metrics = FnMetrics::new(|s: &str| s.len() as f32, |_: &str| (0, 0));
        assert_eq!(measure_via_ref(&metrics, "hello"), 5.0);
    }
}
