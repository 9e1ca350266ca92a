use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::anim::Easing;
use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Timing parameters shared by every bar of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Extra start delay added per index: bar `i` begins at `i * stagger_ms`.
    pub stagger_ms: u64,
    /// Duration of each bar's zero-to-target transition.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            stagger_ms: 100,
            duration_ms: 1000,
            easing: Easing::default(),
        }
    }
}

impl AnimationSpec {
    pub fn validate(self) -> ChartResult<()> {
        if self.duration_ms == 0 {
            return Err(ChartError::InvalidData(
                "animation duration must be > 0 ms".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Lifecycle of one bar's animation relative to the series clock.
///
/// `Settled` is terminal; the only way back is re-mounting the chart, which
/// builds a fresh series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Unstarted,
    Animating,
    Settled,
}

/// One bar's independent zero-to-target transition.
///
/// The state is pure with respect to time: `value_at` is a deterministic
/// function of elapsed milliseconds, so the renderer can sample it at any
/// clock without mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarAnimation {
    target: f64,
    delay_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl BarAnimation {
    #[must_use]
    pub fn new(target: f64, delay_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            target,
            delay_ms,
            duration_ms,
            easing,
        }
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn delay_ms(self) -> u64 {
        self.delay_ms
    }

    /// Animated value at `elapsed_ms` on the series clock.
    ///
    /// Zero before the stagger delay elapses, eased interpolation while
    /// animating, and exactly `target` from `delay + duration` onwards.
    #[must_use]
    pub fn value_at(self, elapsed_ms: u64) -> f64 {
        let Some(local_ms) = elapsed_ms.checked_sub(self.delay_ms) else {
            return 0.0;
        };
        if local_ms >= self.duration_ms {
            return self.target;
        }

        let progress = local_ms as f64 / self.duration_ms as f64;
        self.easing.apply(progress) * self.target
    }

    #[must_use]
    pub fn phase_at(self, elapsed_ms: u64) -> AnimationPhase {
        match elapsed_ms.checked_sub(self.delay_ms) {
            None => AnimationPhase::Unstarted,
            Some(local_ms) if local_ms >= self.duration_ms => AnimationPhase::Settled,
            Some(_) => AnimationPhase::Animating,
        }
    }

    /// Series-clock time at which this bar settles.
    #[must_use]
    pub fn settle_at_ms(self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// The store of per-bar animation states plus the series clock.
///
/// This is the explicit replacement for a reactive UI framework's implicit
/// re-render loop: the host advances the clock once per frame and reads
/// current values back out. Each `BarAnimation` is owned by the series and
/// never shared, so there is nothing to synchronize.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSeries {
    bars: SmallVec<[BarAnimation; 8]>,
    elapsed_ms: u64,
}

impl AnimatedSeries {
    /// Schedules one animation per dataset entry, bar `i` delayed by
    /// `i * stagger_ms`, and starts the series clock at zero.
    pub fn start(dataset: &Dataset, spec: AnimationSpec) -> ChartResult<Self> {
        spec.validate()?;

        let bars = dataset
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                BarAnimation::new(
                    *value,
                    (index as u64).saturating_mul(spec.stagger_ms),
                    spec.duration_ms,
                    spec.easing,
                )
            })
            .collect();

        debug!(
            bars = dataset.len(),
            stagger_ms = spec.stagger_ms,
            duration_ms = spec.duration_ms,
            "start animated series"
        );

        Ok(Self {
            bars,
            elapsed_ms: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Series-clock time at which the last bar settles, 0 when empty.
    #[must_use]
    pub fn settle_deadline_ms(&self) -> u64 {
        self.bars
            .iter()
            .map(|bar| bar.settle_at_ms())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.elapsed_ms >= self.settle_deadline_ms()
    }

    /// Moves the series clock forward by `delta_ms`.
    ///
    /// Returns `true` while at least one bar is still unstarted or
    /// animating, i.e. while another frame is worth drawing.
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        trace!(elapsed_ms = self.elapsed_ms, "advance series clock");
        !self.is_settled()
    }

    /// Value of bar `index` at the current series clock.
    pub fn current_value(&self, index: usize) -> ChartResult<f64> {
        self.value_at(index, self.elapsed_ms)
    }

    /// Value of bar `index` at an arbitrary series-clock time.
    pub fn value_at(&self, index: usize, at_ms: u64) -> ChartResult<f64> {
        self.bar(index).map(|bar| bar.value_at(at_ms))
    }

    pub fn phase(&self, index: usize) -> ChartResult<AnimationPhase> {
        self.bar(index).map(|bar| bar.phase_at(self.elapsed_ms))
    }

    /// Current values of all bars in index order.
    pub fn current_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.value_at(self.elapsed_ms))
    }

    #[must_use]
    pub fn bars(&self) -> &[BarAnimation] {
        &self.bars
    }

    fn bar(&self, index: usize) -> ChartResult<BarAnimation> {
        self.bars
            .get(index)
            .copied()
            .ok_or(ChartError::BarIndexOutOfBounds {
                index,
                len: self.bars.len(),
            })
    }
}
