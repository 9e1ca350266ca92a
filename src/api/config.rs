use serde::{Deserialize, Serialize};

use crate::anim::AnimationSpec;
use crate::core::{ChartStyle, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub animation: AnimationSpec,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
            animation: AnimationSpec::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.style.validate()?;
        self.animation.validate()?;

        if f64::from(self.viewport.height) < self.style.required_height_px() {
            return Err(ChartError::InvalidData(format!(
                "viewport height {} px is shorter than the bar area plus label strip ({} px)",
                self.viewport.height,
                self.style.required_height_px()
            )));
        }

        Ok(())
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
