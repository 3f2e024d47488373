//! Renders a single curve with its construction onto a canvas and saves it as png.

use log::{debug, warn};
use nalgebra::Vector2;

use crate::bezier::BezierCurve;
use crate::bounding_box::BoundingBox;
use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::draw::DrawCurve;
use crate::error::Result;

/// Owns a curve and the canvas it is drawn on.
///
/// ```no_run
/// use castlejau::{RenderConfig, Renderer};
///
/// let mut renderer = Renderer::new([[100.0, 300.0], [300.0, 500.0], [500.0, 500.0]], RenderConfig::default())?;
/// renderer.draw_all();
/// renderer.save()?;
/// # Ok::<(), castlejau::Error>(())
/// ```
pub struct Renderer {
    config: RenderConfig,
    canvas: Canvas,
    curve: BezierCurve<f64>,
}

impl Renderer {
    /// Builds the curve and a blank canvas.
    ///
    /// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) if less than two
    /// control points are given.
    pub fn new<I, P>(points: I, config: RenderConfig) -> Result<Renderer>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vector2<f64>>,
    {
        let curve = BezierCurve::new(points)?;
        let canvas = Canvas::new(config.width, config.height, config.background);

        let visible = BoundingBox::from([
            Vector2::new(0.0, 0.0),
            Vector2::new(config.width as f64, config.height as f64),
        ]);
        let bb = curve.bounding_box();
        if !(visible.contains(bb.min) && visible.contains(bb.max)) {
            warn!(
                "control points span {:?} to {:?} but the canvas is only {}x{}",
                (bb.min.x, bb.min.y),
                (bb.max.x, bb.max.y),
                config.width,
                config.height
            );
        }

        Ok(Renderer {
            config,
            canvas,
            curve,
        })
    }

    /// Draws a marker at every control point
    pub fn draw_points(&mut self) {
        self.canvas.add_control_points(
            &self.curve,
            self.config.marker_radius,
            self.config.marker_color,
        );
    }

    /// Samples the curve and connects the samples
    pub fn draw_line(&mut self) {
        let samples = self.curve.sample(self.config.precision);
        self.canvas.add_curve(&samples, self.config.curve_color);
    }

    /// Draws the control polygon
    pub fn draw_sub_lines(&mut self) {
        self.canvas
            .add_control_polygon(&self.curve, self.config.polygon_color);
    }

    /// Draws markers, curve and control polygon, in this order
    pub fn draw_all(&mut self) {
        debug!(
            "drawing curve of degree {} on {}x{} canvas",
            self.curve.degree(),
            self.config.width,
            self.config.height
        );
        self.draw_points();
        self.draw_line();
        self.draw_sub_lines();
    }

    /// Writes the canvas to the configured output path
    pub fn save(&self) -> Result<()> {
        self.canvas.save_png(&self.config.output)
    }

    /// The canvas drawn so far
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The rendered curve
    pub fn curve(&self) -> &BezierCurve<f64> {
        &self.curve
    }

    /// The configuration in use
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::canvas::Rgb;
    use crate::config::RenderConfig;
    use crate::error::Error;

    fn small() -> RenderConfig {
        RenderConfig {
            width: 40,
            height: 40,
            precision: 64,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_single_point() {
        let result = Renderer::new([[1.0, 1.0]], small());
        assert!(matches!(result, Err(Error::InvalidInput { points: 1 })));
    }

    #[test]
    fn blank_until_drawn() {
        let renderer = Renderer::new([[5.0, 5.0], [30.0, 30.0]], small()).unwrap();
        assert_eq!(renderer.canvas().width(), 40);
        assert_eq!(renderer.canvas().height(), 40);
        assert!(renderer
            .canvas()
            .as_raw()
            .iter()
            .all(|&channel| channel == 0));
    }

    #[test]
    fn draw_order() {
        let mut renderer = Renderer::new([[5.0, 20.0], [20.0, 5.0], [35.0, 20.0]], small()).unwrap();
        renderer.draw_all();
        let canvas = renderer.canvas();

        // the polygon is drawn last and crosses the marker centers
        assert_eq!(canvas.pixel(5, 20), Some(Rgb::SKY_BLUE));
        // marker pixels off the polygon survive
        assert_eq!(canvas.pixel(5, 23), Some(Rgb::LIGHT_GREEN));
        // apex of the curve lies at t = 0.5
        let apex = renderer.curve().evaluate(0.5);
        assert_eq!(
            canvas.pixel(apex.x.round() as u32, apex.y.round() as u32),
            Some(Rgb::WHITE)
        );
        assert_eq!(canvas.pixel(0, 39), Some(Rgb::BLACK));
    }

    #[test]
    fn points_outside_canvas() {
        let mut renderer = Renderer::new([[-50.0, 20.0], [90.0, 20.0]], small()).unwrap();
        renderer.draw_all();
        for x in 0..40 {
            assert_eq!(renderer.canvas().pixel(x, 20), Some(Rgb::SKY_BLUE));
        }
    }
}
