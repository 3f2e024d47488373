//! Minimal rgb raster with the few primitives needed to draw curves, encoded as png.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use nalgebra::Vector2;
use num::ToPrimitive;

use crate::error::Result;

/// 8 bit rgb color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Light blue used for the control polygon
    pub const SKY_BLUE: Rgb = Rgb::new(135, 206, 235);
    /// Pale green used for control point markers
    pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);

    /// Color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

/// Fixed size rgb image, row major without padding.
///
/// Pixel `(x, y)` covers the unit square centered at integer coordinates, `y` grows downwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Creates a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb) -> Canvas {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Canvas {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw rgb bytes
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Color of a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let i = self.index(x as i64, y as i64)?;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Paints a pixel, writes outside the canvas are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        self.put(x as i64, y as i64, color);
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Draws a one pixel wide line between the pixels nearest to `from` and `to`.
    ///
    /// The segment is clipped to the canvas first. Lines with non finite endpoints are skipped.
    pub fn draw_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Rgb) {
        // One pixel of slack so rounding at the border doesn't lose the edge pixels
        let min = Vector2::new(-1.0, -1.0);
        let max = Vector2::new(self.width as f64, self.height as f64);
        let (from, to) = match clip(from, to, min, max) {
            Some(segment) => segment,
            None => return,
        };
        let (x0, y0, x1, y1) = match (round(from.x), round(from.y), round(to.x), round(to.y)) {
            (Some(x0), Some(y0), Some(x1), Some(y1)) => (x0, y0, x1, y1),
            _ => return,
        };

        // Bresenham over all octants
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fills every pixel whose center lies within `radius` of `center`
    pub fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Rgb) {
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        let bounds = (
            round((center.x - radius).floor()),
            round((center.y - radius).floor()),
            round((center.x + radius).ceil()),
            round((center.y + radius).ceil()),
        );
        let (left, top, right, bottom) = match bounds {
            (Some(left), Some(top), Some(right), Some(bottom)) => (
                left.max(0),
                top.max(0),
                right.min(self.width as i64 - 1),
                bottom.min(self.height as i64 - 1),
            ),
            _ => return,
        };
        let r2 = radius * radius;
        for y in top..=bottom {
            for x in left..=right {
                let dx = x as f64 - center.x;
                let dy = y as f64 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Encodes the canvas as an 8 bit rgb png into `writer`
    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(())
    }

    /// Writes the canvas to a png file at `path`, replacing any existing file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(File::create(path)?);
        self.write_png(&mut file)?;
        file.flush()?;
        info!(
            "wrote {}x{} png to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Nearest integer, `None` for NaN, infinities and values beyond `i64`
fn round(value: f64) -> Option<i64> {
    value.round().to_i64()
}

/// Liang-Barsky clipping of the segment `from`-`to` against the box `min`-`max`
fn clip(
    from: Vector2<f64>,
    to: Vector2<f64>,
    min: Vector2<f64>,
    max: Vector2<f64>,
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    if !from.iter().chain(to.iter()).all(|v| v.is_finite()) {
        return None;
    }
    let d = to - from;
    let mut t0 = 0.0;
    let mut t1 = 1.0;
    for (p, q) in [
        (-d.x, from.x - min.x),
        (d.x, max.x - from.x),
        (-d.y, from.y - min.y),
        (d.y, max.y - from.y),
    ] {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }
    // Unclipped ends stay bit identical so they round to the same pixel as before
    let start = if t0 > 0.0 { from + d * t0 } else { from };
    let end = if t1 < 1.0 { from + d * t1 } else { to };
    Some((start, end))
}
