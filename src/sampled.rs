//! Points sampled along a curve, ready to be connected by straight lines.

use nalgebra::{RealField, Vector2};

/// Points on a curve in ascending order of `t`.
///
/// Produced by [`BezierCurve::sample`](crate::BezierCurve::sample).
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve<T: RealField + Copy>(Vec<Vector2<T>>);

impl<T: RealField + Copy> SampledCurve<T> {
    /// The sampled points
    pub fn points(&self) -> &[Vector2<T>] {
        &self.0
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Are there no samples at all?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive pairs of samples, i.e. the straight segments approximating the curve
    pub fn segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.0.windows(2).map(|segment| (segment[0], segment[1]))
    }

    /// Unwraps the samples
    pub fn into_inner(self) -> Vec<Vector2<T>> {
        self.0
    }
}

impl<T: RealField + Copy> From<Vec<Vector2<T>>> for SampledCurve<T> {
    fn from(points: Vec<Vector2<T>>) -> Self {
        SampledCurve(points)
    }
}
