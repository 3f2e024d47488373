#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod bounding_box;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod renderer;
pub mod sampled;

pub use crate::bezier::BezierCurve;
pub use crate::canvas::{Canvas, Rgb};
pub use crate::config::RenderConfig;
pub use crate::error::{Error, Result};
pub use crate::renderer::Renderer;
pub use crate::sampled::SampledCurve;
