mod config;
mod engine;
mod layout;

pub use config::BarChartConfig;
pub use engine::BarChartEngine;
pub use layout::{ColumnGeometry, bar_fill_height, layout_columns};
