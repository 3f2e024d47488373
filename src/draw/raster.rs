//! Draw a curve onto a [`Canvas`]

use crate::bezier::BezierCurve;
use crate::canvas::{Canvas, Rgb};
use crate::draw::DrawCurve;
use crate::sampled::SampledCurve;

impl DrawCurve for Canvas {
    fn add_curve(&mut self, samples: &SampledCurve<f64>, color: Rgb) {
        for (from, to) in samples.segments() {
            self.draw_line(from, to, color);
        }
    }

    fn add_control_polygon(&mut self, curve: &BezierCurve<f64>, color: Rgb) {
        for (from, to) in curve.control_polygon() {
            self.draw_line(from, to, color);
        }
    }

    fn add_control_points(&mut self, curve: &BezierCurve<f64>, radius: f64, color: Rgb) {
        for &point in curve.points() {
            self.fill_circle(point, radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bezier::BezierCurve;
    use crate::canvas::{Canvas, Rgb};
    use crate::draw::DrawCurve;

    #[test]
    fn polygon_and_markers() {
        let curve = BezierCurve::<f64>::new([[2.0, 2.0], [17.0, 2.0], [17.0, 17.0]]).unwrap();
        let mut canvas = Canvas::new(20, 20, Rgb::BLACK);
        canvas.add_control_polygon(&curve, Rgb::SKY_BLUE);
        assert_eq!(canvas.pixel(10, 2), Some(Rgb::SKY_BLUE));
        assert_eq!(canvas.pixel(17, 10), Some(Rgb::SKY_BLUE));
        assert_eq!(canvas.pixel(10, 10), Some(Rgb::BLACK));

        canvas.add_control_points(&curve, 1.0, Rgb::LIGHT_GREEN);
        assert_eq!(canvas.pixel(17, 2), Some(Rgb::LIGHT_GREEN));
        assert_eq!(canvas.pixel(3, 2), Some(Rgb::LIGHT_GREEN));
        assert_eq!(canvas.pixel(10, 2), Some(Rgb::SKY_BLUE));
    }

    #[test]
    fn curve_passes_through_samples() {
        let curve = BezierCurve::<f64>::new([[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]).unwrap();
        let samples = curve.sample(11);
        let mut canvas = Canvas::new(12, 12, Rgb::BLACK);
        canvas.add_curve(&samples, Rgb::WHITE);
        for p in samples.points() {
            let (x, y) = (p.x.round() as u32, p.y.round() as u32);
            assert_eq!(canvas.pixel(x, y), Some(Rgb::WHITE), "{:?}", p);
        }
        assert_eq!(canvas.pixel(11, 0), Some(Rgb::BLACK));
    }
}
