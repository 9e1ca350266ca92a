pub mod easing;
pub mod series;

pub use easing::Easing;
pub use series::{AnimatedSeries, AnimationPhase, AnimationSpec, BarAnimation};
