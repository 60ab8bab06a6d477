//! Bresenham line rasterization.
//!
//! This is the single source of truth for "draw line": it is used both
//! standalone for wireframe rendering and as the edge-drawing primitive
//! for outlined triangles.

use super::rasterizer::Triangle;
use super::{Canvas, RasterError};
use crate::color::Color;

/// Draw the discrete approximation of the segment (x0, y0) -> (x1, y1).
///
/// After setup the algorithm uses only integer arithmetic: an error
/// accumulator tracks the distance between the ideal line and the
/// current pixel, and crossing zero triggers a step along the minor
/// axis. Segments are classified as shallow (|dy| < |dx|) or steep and
/// iterated along the major axis, so every integer pair on the path is
/// plotted exactly once: max(|dx|, |dy|) + 1 pixels, endpoints included.
///
/// The plotted pixel set is symmetric in the endpoints. A degenerate
/// segment (both endpoints equal) plots exactly one pixel. Pixels
/// outside the canvas propagate [`RasterError::OutOfBounds`].
pub fn draw_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> Result<(), RasterError> {
    if (y1 - y0).abs() < (x1 - x0).abs() {
        // Shallow: iterate x, ordered so x grows
        if x0 < x1 {
            draw_shallow(canvas, x0, y0, x1, y1, color)
        } else {
            draw_shallow(canvas, x1, y1, x0, y0, color)
        }
    } else {
        // Steep: iterate y, ordered so y grows
        if y0 < y1 {
            draw_steep(canvas, x0, y0, x1, y1, color)
        } else {
            draw_steep(canvas, x1, y1, x0, y0, color)
        }
    }
}

/// Shallow branch: x is the major axis and x0 <= x1.
fn draw_shallow(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> Result<(), RasterError> {
    let dx = x1 - x0;
    let mut dy = y1 - y0;
    let dir = if dy < 0 { -1 } else { 1 };
    dy *= dir;

    let mut error = 2 * dy - dx;
    let mut y = y0;
    for x in x0..=x1 {
        canvas.set(x, y, color)?;
        if error >= 0 {
            y += dir;
            error -= 2 * dx;
        }
        error += 2 * dy;
    }
    Ok(())
}

/// Steep branch: y is the major axis and y0 <= y1.
fn draw_steep(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> Result<(), RasterError> {
    let dy = y1 - y0;
    let mut dx = x1 - x0;
    let dir = if dx < 0 { -1 } else { 1 };
    dx *= dir;

    let mut error = 2 * dx - dy;
    let mut x = x0;
    for y in y0..=y1 {
        canvas.set(x, y, color)?;
        if error >= 0 {
            x += dir;
            error -= 2 * dy;
        }
        error += 2 * dx;
    }
    Ok(())
}

/// Outline a screen-space triangle by drawing its three edges.
pub fn draw_wireframe(
    canvas: &mut Canvas,
    triangle: &Triangle,
    color: Color,
) -> Result<(), RasterError> {
    for i in 0..3 {
        let from = triangle.points[i];
        let to = triangle.points[(i + 1) % 3];
        draw_line(canvas, from.x, from.y, to.x, to.y, color)?;
    }
    Ok(())
}
