//! Bezier curves of arbitrary degree evaluated with de Casteljau's algorithm.

use log::debug;
use nalgebra::{RealField, Vector2};
use smallvec::SmallVec;

use crate::bounding_box::BoundingBox;
use crate::error::{Error, Result};
use crate::sampled::SampledCurve;

/// Control points are kept on the stack for curves up to cubic ones.
type ControlPoints<T> = SmallVec<[Vector2<T>; 4]>;

/// Bezier curve defined by an ordered sequence of at least two control points.
///
/// The curve is immutable after construction. Every evaluation works on a private copy of the
/// control points, so a curve can be shared freely between threads.
///
/// ```
/// use castlejau::BezierCurve;
///
/// let curve = BezierCurve::<f64>::new([[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]).unwrap();
/// let point = curve.evaluate(0.5);
/// assert_eq!((point.x, point.y), (2.5, 7.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve<T: RealField + Copy> {
    points: ControlPoints<T>,
}

impl<T: RealField + Copy> BezierCurve<T> {
    /// Builds a curve from its control points.
    ///
    /// Fails with [`Error::InvalidInput`] if less than two points are given.
    pub fn new<I, P>(points: I) -> Result<BezierCurve<T>>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vector2<T>>,
    {
        let points: ControlPoints<T> = points.into_iter().map(Into::into).collect();
        if points.len() < 2 {
            return Err(Error::InvalidInput {
                points: points.len(),
            });
        }
        debug!("built bezier curve of degree {}", points.len() - 1);
        Ok(BezierCurve { points })
    }

    /// The control points in their original order
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Start point of the curve
    pub fn first(&self) -> Vector2<T> {
        self.points[0]
    }

    /// End point of the curve
    pub fn last(&self) -> Vector2<T> {
        self.points[self.points.len() - 1]
    }

    /// Iterates over the edges of the control polygon
    pub fn control_polygon(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.points.windows(2).map(|edge| (edge[0], edge[1]))
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// This box also contains the whole curve for `t` between `0` and `1`.
    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.points[1..]
            .iter()
            .fold(BoundingBox::around(self.first()), |bb, &p| bb.including(p))
    }

    /// Get the point on the curve at position `t`.
    ///
    /// `t` is usually between `0` and `1`, other values extrapolate the curve and are not
    /// rejected.
    pub fn evaluate(&self, t: T) -> Vector2<T> {
        let mut buffer = self.points.clone();
        castlejau(&mut buffer, t)
    }

    /// Same as [`evaluate`] but reuses `buffer` for the intermediate points.
    ///
    /// The buffer's previous content is discarded.
    ///
    /// [`evaluate`]: BezierCurve::evaluate
    pub fn evaluate_with(&self, t: T, buffer: &mut Vec<Vector2<T>>) -> Vector2<T> {
        buffer.clear();
        buffer.extend_from_slice(&self.points);
        castlejau(buffer, t)
    }

    /// Evaluates the curve at `precision` evenly spaced values of `t` from `0` to `1`.
    ///
    /// Both ends are included, so the first sample is the start point and the last one the
    /// end point. A precision of `1` only samples the start point.
    pub fn sample(&self, precision: usize) -> SampledCurve<T> {
        let mut buffer = Vec::with_capacity(self.points.len());
        let samples = match precision {
            0 => Vec::new(),
            1 => vec![self.evaluate_with(T::zero(), &mut buffer)],
            _ => {
                let steps = (precision - 1) as f64;
                (0..precision)
                    .map(|i| {
                        let t: T = nalgebra::convert(i as f64 / steps);
                        self.evaluate_with(t, &mut buffer)
                    })
                    .collect()
            }
        };
        debug!(
            "sampled curve of degree {} at {} points",
            self.degree(),
            samples.len()
        );
        SampledCurve::from(samples)
    }
}

/// Reduces `points` level by level in place until `points[0]` is the point at `t`.
///
/// Level `k` keeps the first `k` entries, each one interpolated towards its successor.
fn castlejau<T: RealField + Copy>(points: &mut [Vector2<T>], t: T) -> Vector2<T> {
    for level in (1..points.len()).rev() {
        for i in 0..level {
            points[i] = points[i] + (points[i + 1] - points[i]) * t;
        }
    }
    points[0]
}
