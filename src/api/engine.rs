use tracing::{debug, trace};

use crate::anim::{AnimatedSeries, AnimationPhase};
use crate::api::{BarChartConfig, bar_fill_height, layout_columns};
use crate::core::Dataset;
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Bar chart engine with explicit mount/unmount lifecycle.
///
/// Host integration is three calls: `mount` once with the dataset, `advance`
/// from the frame clock, `render` (or `build_frame`) per frame. Everything
/// is single-threaded; per-bar animation state is owned by the mounted
/// series and only read during frame building.
#[derive(Debug)]
pub struct BarChartEngine<R: Renderer> {
    renderer: R,
    config: BarChartConfig,
    mounted: Option<MountedChart>,
}

#[derive(Debug)]
struct MountedChart {
    dataset: Dataset,
    series: AnimatedSeries,
}

impl<R: Renderer> BarChartEngine<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            mounted: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> BarChartConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Mounts a dataset and starts its entrance animations from zero.
    ///
    /// Mounting over an already-mounted chart is the re-mount case: the old
    /// series is dropped and every bar restarts, with no resume semantics.
    pub fn mount(&mut self, dataset: Dataset) -> ChartResult<()> {
        let series = AnimatedSeries::start(&dataset, self.config.animation)?;
        debug!(bars = dataset.len(), "mount bar chart");
        self.mounted = Some(MountedChart { dataset, series });
        Ok(())
    }

    /// Unmounts the chart, cancelling all pending and in-flight animations.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("unmount bar chart");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.mounted.as_ref().map(|chart| &chart.dataset)
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.mounted
            .as_ref()
            .map_or(0, |chart| chart.series.elapsed_ms())
    }

    /// True once every bar has settled (or nothing is mounted).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.mounted
            .as_ref()
            .is_none_or(|chart| chart.series.is_settled())
    }

    /// Advances the animation clock by `delta_ms`.
    ///
    /// Returns `true` while another frame is worth drawing; `false` when
    /// unmounted or fully settled, so hosts can park their frame timer.
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        match self.mounted.as_mut() {
            Some(chart) => chart.series.advance(delta_ms),
            None => false,
        }
    }

    pub fn current_value(&self, index: usize) -> ChartResult<f64> {
        self.series()?.current_value(index)
    }

    pub fn phase(&self, index: usize) -> ChartResult<AnimationPhase> {
        self.series()?.phase(index)
    }

    /// Builds the scene for the current animation state.
    ///
    /// Pure read: an unmounted engine or an empty dataset yields an empty
    /// frame, and an all-zero dataset yields zero-height value rects via the
    /// degenerate-range guard in `bar_fill_height`.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);

        let Some(chart) = self.mounted.as_ref() else {
            return Ok(frame);
        };

        let style = self.config.style;
        let columns = layout_columns(self.config.viewport, style, chart.dataset.len())?;
        let max_value = chart.dataset.max_value();

        for (index, column) in columns.iter().enumerate() {
            let current = chart.series.current_value(index)?;
            let fill_height =
                bar_fill_height(current, max_value, column.y_bottom - column.y_top);

            frame = frame.with_rect(RectPrimitive::new(
                column.x_left,
                column.y_top,
                column.inner_width,
                column.y_bottom - column.y_top,
                style.track_color,
            ));
            frame = frame.with_rect(RectPrimitive::new(
                column.x_left,
                column.y_bottom - fill_height,
                column.inner_width,
                fill_height,
                style.value_color,
            ));

            if let Some(label) = chart.dataset.label(index) {
                frame = frame.with_text(TextPrimitive::new(
                    label,
                    column.x_center,
                    style.bar_area_height_px + style.label_gap_px,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }
        }

        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            elapsed_ms = chart.series.elapsed_ms(),
            "build frame"
        );
        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    fn series(&self) -> ChartResult<&AnimatedSeries> {
        self.mounted
            .as_ref()
            .map(|chart| &chart.series)
            .ok_or(crate::error::ChartError::NotMounted)
    }
}
