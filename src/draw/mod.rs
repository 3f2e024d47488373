//! Defines the helper trait [`DrawCurve`] and implements it on the crate's [`Canvas`].
//!
//! Drawing a curve is just connecting samples with straight lines.
//! But doing it next to the control polygon and the control points is noisy and repetitive.
//!
//! [`Canvas`]: crate::canvas::Canvas
use crate::bezier::BezierCurve;
use crate::canvas::Rgb;
use crate::sampled::SampledCurve;

/// Draw bezier curves and their construction on a "drawing context".
pub trait DrawCurve {
    /// Add the curve's samples connected by straight segments.
    fn add_curve(&mut self, samples: &SampledCurve<f64>, color: Rgb);

    /// Add the straight segments between consecutive control points.
    fn add_control_polygon(&mut self, curve: &BezierCurve<f64>, color: Rgb);

    /// Add a marker of the given radius at every control point.
    fn add_control_points(&mut self, curve: &BezierCurve<f64>, radius: f64, color: Rgb);
}

pub mod raster;
