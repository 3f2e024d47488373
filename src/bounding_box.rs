//! Axis aligned bounding boxes around sets of points.

use nalgebra::{RealField, Vector2};

/// Axis aligned box given by its lower left and upper right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<T: RealField + Copy> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,

    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField + Copy> BoundingBox<T> {
    /// Box containing only a single point
    pub fn around(point: Vector2<T>) -> BoundingBox<T> {
        BoundingBox {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing all points, `None` if there are none.
    pub fn from_iter<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<BoundingBox<T>> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(BoundingBox::around(first), BoundingBox::including))
    }

    /// Grows the box until it contains `p`
    pub fn including(mut self, p: Vector2<T>) -> BoundingBox<T> {
        if self.min.x > p.x {
            self.min.x = p.x;
        }
        if self.min.y > p.y {
            self.min.y = p.y;
        }
        if self.max.x < p.x {
            self.max.x = p.x;
        }
        if self.max.y < p.y {
            self.max.y = p.y;
        }
        self
    }

    /// Width and height of the box
    pub fn size(&self) -> Vector2<T> {
        self.max - self.min
    }

    /// Is `point` inside the box or on its border?
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }

    /// Do both boxes share at least one point?
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlapping_interval::<0>(other) && self.overlapping_interval::<1>(other)
    }

    fn overlapping_interval<const I: usize>(&self, other: &Self) -> bool {
        self.min[I] <= other.max[I] && other.min[I] <= self.max[I]
    }
}

impl<T: RealField + Copy> From<[Vector2<T>; 2]> for BoundingBox<T> {
    fn from(array: [Vector2<T>; 2]) -> Self {
        BoundingBox {
            min: array[0],
            max: array[1],
        }
    }
}
