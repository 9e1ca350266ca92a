//! barchart-rs: animated bar chart engine.
//!
//! This crate renders a bar chart whose bars grow from zero to their target
//! values with a per-index staggered start, behind a strict split between
//! animation core, deterministic layout, and pluggable render backends.
//!
//! The engine is frame-driven: the host clock calls
//! [`BarChartEngine::advance`] once per frame and a [`render::Renderer`]
//! receives a fully materialized [`render::RenderFrame`]. Nothing in the
//! crate spawns threads or owns a timer.

pub mod anim;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
