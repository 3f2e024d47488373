use castlejau::BezierCurve;
use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [[f64; 2]; 10] = [
    [ 0.0,      0.0    ],
    [-0.29734,  0.44984],
    [-0.52560,  0.42885],
    [ 1.42777, -0.02652],
    [ 1.98032, -0.67824],
    [ 0.44863, -0.91328],
    [-2.51139, -0.79100],
    [-3.10479, -0.59318],
    [-1.16022, -2.95591],
    [-1.07946,  0.78888],
];

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub LINEAR: BezierCurve<f64>,
    pub QUADRATIC: BezierCurve<f64>,
    pub CUBIC: BezierCurve<f64>,
    pub HIGHER: BezierCurve<f64>,
    pub REFERENCE: BezierCurve<f64>,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            LINEAR:    curve(&[0, 1]),
            QUADRATIC: curve(&[2, 3, 4]),
            CUBIC:     curve(&[4, 5, 6, 7]),
            HIGHER:    curve(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            REFERENCE: BezierCurve::new([
                Vector2::new(100.0, 300.0),
                Vector2::new(300.0, 500.0),
                Vector2::new(500.0, 500.0),
                Vector2::new(400.0, 50.0),
                Vector2::new(300.0, 100.0),
                Vector2::new(200.0, 250.0),
            ]).expect("six points"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=(&'static str, &BezierCurve<f64>)> {
        [
            ("linear", &self.LINEAR),
            ("quadratic", &self.QUADRATIC),
            ("cubic", &self.CUBIC),
            ("higher", &self.HIGHER),
            ("reference", &self.REFERENCE),
        ].into_iter()
    }
}

fn curve(indices: &[usize]) -> BezierCurve<f64> {
    BezierCurve::new(indices.iter().map(|&i| POINTS[i])).expect("at least two points")
}
