use serde::{Deserialize, Serialize};

use crate::core::{ChartStyle, Viewport};
use crate::error::{ChartError, ChartResult};

/// Deterministic pixel geometry for one bar column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    /// Left edge of the drawable track/value rects (column inset applied).
    pub x_left: f64,
    /// Horizontal center of the column, where the label anchors.
    pub x_center: f64,
    /// Drawable rect width after the column inset.
    pub inner_width: f64,
    /// Top of the drawable bar area.
    pub y_top: f64,
    /// Bottom of the drawable bar area; value rects anchor here.
    pub y_bottom: f64,
}

/// Lays out `n` equal-gap columns across the viewport width.
///
/// Columns are distributed space-between: the first is flush left, the last
/// flush right, and the gaps in between are equal. A single column sits at
/// the left edge.
pub fn layout_columns(
    viewport: Viewport,
    style: ChartStyle,
    n: usize,
) -> ChartResult<Vec<ColumnGeometry>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    style.validate()?;

    if n == 0 {
        return Ok(Vec::new());
    }

    let width = f64::from(viewport.width);
    if style.bar_width_px * n as f64 > width {
        return Err(ChartError::InvalidData(format!(
            "{n} columns of {} px do not fit a {} px viewport",
            style.bar_width_px, viewport.width
        )));
    }

    let step = if n > 1 {
        (width - style.bar_width_px) / (n - 1) as f64
    } else {
        0.0
    };

    let y_top = style.bar_padding_px;
    let y_bottom = style.bar_area_height_px - style.bar_padding_px;
    let inner_width = style.bar_width_px - 2.0 * style.bar_padding_px;

    let columns = (0..n)
        .map(|i| {
            let x = i as f64 * step;
            ColumnGeometry {
                x_left: x + style.bar_padding_px,
                x_center: x + style.bar_width_px / 2.0,
                inner_width,
                y_top,
                y_bottom,
            }
        })
        .collect();

    Ok(columns)
}

/// Maps an animated value to its bar pixel height: `H * value / max`.
///
/// `max_value <= 0` short-circuits to zero height instead of dividing; this
/// covers both the all-zero dataset and the empty one. Output is clamped to
/// the bar area so a value mid-ease can never paint outside the track.
#[must_use]
pub fn bar_fill_height(value: f64, max_value: f64, area_height_px: f64) -> f64 {
    if max_value <= 0.0 || area_height_px <= 0.0 {
        return 0.0;
    }
    (area_height_px * value / max_value).clamp(0.0, area_height_px)
}
