pub mod dataset;
pub mod style;
pub mod types;

pub use dataset::Dataset;
pub use style::ChartStyle;
pub use types::Viewport;
