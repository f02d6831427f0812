//! Text rendering of a session using Braille Unicode symbols.
//!
//! Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns, so a grid
//! of `cols × rows` characters is a `2·cols × 4·rows` pixel raster.
//!
//! # Braille Dot Numbering
//!
//! ```text
//! 1  4
//! 2  5
//! 3  6
//! 7  8
//! ```
use std::fmt;

use crate::data::polygon::bounding_box;
use crate::data::Point;
use crate::session::Session;

/// A pixel raster that maps plane coordinates into a fixed character grid.
///
/// Both axes share one scale so shapes keep their proportions. The y axis
/// points down, like screen coordinates.
#[derive(Debug, Clone)]
pub struct Canvas {
  grid: Vec<Vec<bool>>,
  origin: Point,
  scale: f64,
}

impl Canvas {
  /// Canvas of `cols × rows` characters showing the box `bounds`.
  pub fn new(cols: usize, rows: usize, bounds: (Point, Point)) -> Canvas {
    let width = cols.max(1) * 2;
    let height = rows.max(1) * 4;
    let (min, max) = bounds;
    let fit = |pixels: usize, span: f64| {
      if span > 0.0 {
        (pixels - 1) as f64 / span
      } else {
        f64::INFINITY
      }
    };
    let scale = fit(width, max.x_coord() - min.x_coord())
      .min(fit(height, max.y_coord() - min.y_coord()));
    Canvas {
      grid: vec![vec![false; width]; height],
      origin: min,
      scale: if scale.is_finite() { scale } else { 0.0 },
    }
  }

  /// Canvas fitted to the bounding box of `pts`.
  pub fn fitted(cols: usize, rows: usize, pts: &[Point]) -> Canvas {
    let bounds = bounding_box(pts).unwrap_or_default();
    Canvas::new(cols, rows, bounds)
  }

  fn to_pixel(&self, pt: &Point) -> (i32, i32) {
    let x = (pt.x_coord() - self.origin.x_coord()) * self.scale;
    let y = (pt.y_coord() - self.origin.y_coord()) * self.scale;
    (x.round() as i32, y.round() as i32)
  }

  fn set(&mut self, x: i32, y: i32) {
    if x < 0 || y < 0 {
      return;
    }
    if let Some(pixel) = self
      .grid
      .get_mut(y as usize)
      .and_then(|row| row.get_mut(x as usize))
    {
      *pixel = true;
    }
  }

  pub fn plot_point(&mut self, pt: &Point) {
    let (x, y) = self.to_pixel(pt);
    self.set(x, y);
  }

  /// A small cross around the point.
  pub fn plot_marker(&mut self, pt: &Point) {
    let (x, y) = self.to_pixel(pt);
    for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
      self.set(x + dx, y + dy);
    }
  }

  pub fn plot_line(&mut self, src: &Point, dst: &Point) {
    let (x0, y0) = self.to_pixel(src);
    let (x1, y1) = self.to_pixel(dst);
    bresenham_line(x0, y0, x1, y1, |x, y| self.set(x, y));
  }

  /// Outline of a closed polygon: the last vertex connects to the first.
  pub fn plot_polygon(&mut self, vertices: &[Point]) {
    if vertices.len() < 2 {
      return;
    }
    for (i, src) in vertices.iter().enumerate() {
      let dst = &vertices[(i + 1) % vertices.len()];
      self.plot_line(src, dst);
    }
  }

  /// Convert the pixel grid to Braille characters, one line per character row.
  pub fn render(&self) -> String {
    let height = self.grid.len();
    let width = self.grid.first().map_or(0, Vec::len);
    let mut result = String::new();

    for row in 0..height.div_ceil(4) {
      for col in 0..width.div_ceil(2) {
        let (base_x, base_y) = (col * 2, row * 4);
        // (dx, dy, bit) in Unicode order: dots 1, 2, 3, 7 on the left,
        // dots 4, 5, 6, 8 on the right.
        const DOTS: [(usize, usize, u32); 8] = [
          (0, 0, 0b0000_0001),
          (0, 1, 0b0000_0010),
          (0, 2, 0b0000_0100),
          (0, 3, 0b0100_0000),
          (1, 0, 0b0000_1000),
          (1, 1, 0b0001_0000),
          (1, 2, 0b0010_0000),
          (1, 3, 0b1000_0000),
        ];
        let dots: u32 = DOTS
          .iter()
          .filter(|(dx, dy, _)| self.get_pixel(base_x + dx, base_y + dy))
          .map(|(_, _, bit)| bit)
          .sum();
        // U+2800 is the blank Braille pattern.
        result.push(char::from_u32(0x2800 + dots).unwrap_or('?'));
      }
      result.push('\n');
    }
    result
  }

  /// Get a pixel from the grid, returning false if out of bounds.
  fn get_pixel(&self, x: usize, y: usize) -> bool {
    self
      .grid
      .get(y)
      .and_then(|row| row.get(x))
      .copied()
      .unwrap_or(false)
  }
}

impl fmt::Display for Canvas {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

/// Draw the session: every point, the visible hull outline, markers on the
/// points of the current step, and a caption.
pub fn frame(session: &Session, cols: usize, rows: usize) -> String {
  let mut canvas = Canvas::fitted(cols, rows, session.points());
  for pt in session.points() {
    canvas.plot_point(pt);
  }
  canvas.plot_polygon(session.hull());
  if let Some(step) = session.current_step() {
    for pt in step.points() {
      canvas.plot_marker(pt);
    }
  }

  let mut out = canvas.render();
  if let Some(step) = session.current_step() {
    out.push_str(&format!(
      "Step {}/{} [{:?}] {}\n",
      session.current_step_index(),
      session.total_steps(),
      step.kind(),
      step.description()
    ));
  }
  out.push_str(&session.status_line());
  out.push('\n');
  out
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
