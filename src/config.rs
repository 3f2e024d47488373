//! Presentation constants for rendering a curve.

use std::path::PathBuf;

use crate::canvas::Rgb;

/// Everything the [`Renderer`](crate::Renderer) needs besides the curve itself.
///
/// Override single values with struct update syntax:
///
/// ```
/// use castlejau::RenderConfig;
///
/// let config = RenderConfig {
///     precision: 50,
///     ..Default::default()
/// };
/// assert_eq!(config.width, 600);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Number of samples taken along the curve, both ends included
    pub precision: usize,

    /// Radius of the control point markers in pixels
    pub marker_radius: f64,

    /// Where [`Renderer::save`](crate::Renderer::save) writes the png
    pub output: PathBuf,

    /// Canvas fill
    pub background: Rgb,

    /// Color of the curve
    pub curve_color: Rgb,

    /// Color of the control polygon
    pub polygon_color: Rgb,

    /// Color of the control point markers
    pub marker_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 600,
            height: 600,
            precision: 500,
            marker_radius: 3.0,
            output: PathBuf::from("output.png"),
            background: Rgb::BLACK,
            curve_color: Rgb::WHITE,
            polygon_color: Rgb::SKY_BLUE,
            marker_color: Rgb::LIGHT_GREEN,
        }
    }
}
