use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual configuration for one bar chart.
///
/// The reference rendering hardcodes these as compile-time constants; here
/// they are named options so hosts can restyle without recompiling the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Height of the bar drawing area in pixels (tracks span it fully).
    pub bar_area_height_px: f64,
    /// Width of one column in pixels.
    pub bar_width_px: f64,
    /// Inset between the column box and the drawn track/value rects.
    pub bar_padding_px: f64,
    /// Font size for the label strip under the bars.
    pub label_font_size_px: f64,
    /// Vertical gap between the bar area and the labels.
    pub label_gap_px: f64,
    pub track_color: Color,
    pub value_color: Color,
    pub label_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_area_height_px: 200.0,
            bar_width_px: 24.0,
            bar_padding_px: 4.0,
            label_font_size_px: 12.0,
            label_gap_px: 4.0,
            track_color: Color::rgb(0.5, 0.5, 0.5),
            value_color: Color::rgb(0.40, 0.31, 0.64),
            label_color: Color::rgb(0.1, 0.1, 0.1),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("bar_area_height_px", self.bar_area_height_px),
            ("bar_width_px", self.bar_width_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style dimension `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("bar_padding_px", self.bar_padding_px),
            ("label_gap_px", self.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style dimension `{name}` must be finite and >= 0"
                )));
            }
        }

        if self.bar_padding_px * 2.0 >= self.bar_width_px {
            return Err(ChartError::InvalidData(
                "bar padding must leave a positive drawable width".to_owned(),
            ));
        }
        if self.bar_padding_px * 2.0 >= self.bar_area_height_px {
            return Err(ChartError::InvalidData(
                "bar padding must leave a positive drawable height".to_owned(),
            ));
        }

        self.track_color.validate()?;
        self.value_color.validate()?;
        self.label_color.validate()
    }

    /// Total pixel height the chart needs: bar area plus the label strip.
    #[must_use]
    pub fn required_height_px(self) -> f64 {
        self.bar_area_height_px + self.label_gap_px + self.label_font_size_px
    }
}
