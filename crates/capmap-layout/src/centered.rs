//! Centered single-row layout
//!
//! Places N items on one row around x = 0.5 in normalized space:
//! the first item at `0.5 - (N - 1) * s / 2`, each next one `s` further right.

use crate::layout_box::LayoutBox;

/// X positions for `count` items centered on 0.5 with step `spacing`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centered_xs(count: usize, spacing: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let start = 0.5 - (count - 1) as f64 * spacing / 2.0;
    (0..count).map(|i| start + i as f64 * spacing).collect()
}

/// Spacing that fits the widest of several rows into `[0, 1]`: `1 / (max + 1)`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fitted_spacing(row_lengths: &[usize]) -> f64 {
    let widest = row_lengths.iter().copied().max().unwrap_or(0);
    1.0 / (widest as f64 + 1.0)
}

/// New boxes for `items`, centered on one row at `y`
///
/// Each box keeps its id, size, color and labels; its draw height becomes
/// `height / height_scale`. Inputs are left untouched.
#[must_use]
pub fn center_row<'a, I>(items: I, y: f64, spacing: f64, height_scale: f64) -> Vec<LayoutBox>
where
    I: IntoIterator<Item = &'a LayoutBox>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let xs = centered_xs(items.len(), spacing);
    items
        .zip(xs)
        .map(|(item, x)| item.placed_at(x, y, item.height / height_scale))
        .collect()
}
