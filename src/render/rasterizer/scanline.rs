use super::{Rasterizer, Triangle};
use crate::color::Color;
use crate::projection::ScreenPoint;
use crate::render::{Canvas, RasterError};

/// Scanline triangle rasterizer using flat-top/flat-bottom decomposition.
///
/// Vertices are sorted by ascending y; a triangle that is not already
/// flat on one end is split at the middle vertex's scanline into a
/// flat-bottom half and a flat-top half. Span bounds advance by a
/// precomputed per-row delta and each row fills the inclusive range
/// `round(left)..=round(right)`. The inclusive rounding double-plots the
/// row shared by the two halves of a split triangle; like the edge
/// rasterizer's gap artifact, this is a documented tie-break, not a
/// defect.
pub struct ScanlineRasterizer;

/// Screen-space vertex with a fractional x, used while interpolating
/// span bounds. The split vertex lands between pixel columns, so x
/// stays floating point until each row is rounded.
#[derive(Clone, Copy)]
struct SpanVertex {
    x: f32,
    y: i32,
}

impl From<ScreenPoint> for SpanVertex {
    fn from(point: ScreenPoint) -> Self {
        Self {
            x: point.x as f32,
            y: point.y,
        }
    }
}

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fill a triangle whose flat edge is at the largest y, apex above.
    /// Spans start at the apex and widen toward the flat edge.
    fn fill_flat_bottom(
        &self,
        canvas: &mut Canvas,
        apex: SpanVertex,
        e0: SpanVertex,
        e1: SpanVertex,
        color: Color,
    ) -> Result<(), RasterError> {
        let (left, right) = if e0.x <= e1.x { (e0, e1) } else { (e1, e0) };
        let rows = (left.y - apex.y) as f32;
        let left_step = (left.x - apex.x) / rows;
        let right_step = (right.x - apex.x) / rows;

        let mut xl = apex.x;
        let mut xr = apex.x;
        for y in apex.y..=left.y {
            fill_span(canvas, y, xl, xr, color)?;
            xl += left_step;
            xr += right_step;
        }
        Ok(())
    }

    /// Fill a triangle whose flat edge is at the smallest y, apex below.
    /// The mirror of `fill_flat_bottom`: spans start at the apex and
    /// widen upward toward the flat edge.
    fn fill_flat_top(
        &self,
        canvas: &mut Canvas,
        e0: SpanVertex,
        e1: SpanVertex,
        apex: SpanVertex,
        color: Color,
    ) -> Result<(), RasterError> {
        let (left, right) = if e0.x <= e1.x { (e0, e1) } else { (e1, e0) };
        let rows = (apex.y - left.y) as f32;
        let left_step = (left.x - apex.x) / rows;
        let right_step = (right.x - apex.x) / rows;

        let mut xl = apex.x;
        let mut xr = apex.x;
        for y in (left.y..=apex.y).rev() {
            fill_span(canvas, y, xl, xr, color)?;
            xl += left_step;
            xr += right_step;
        }
        Ok(())
    }
}

/// Fill one scanline between fractional bounds, rounding inclusively on
/// both ends.
fn fill_span(
    canvas: &mut Canvas,
    y: i32,
    left: f32,
    right: f32,
    color: Color,
) -> Result<(), RasterError> {
    for x in left.round() as i32..=right.round() as i32 {
        canvas.set(x, y, color)?;
    }
    Ok(())
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill(
        &self,
        triangle: &Triangle,
        canvas: &mut Canvas,
        color: Color,
    ) -> Result<(), RasterError> {
        // Ascending-y rebinding of the input triple; the caller's
        // triangle is never mutated.
        let mut points = triangle.points;
        points.sort_by_key(|p| p.y);
        let [a, b, c] = points.map(SpanVertex::from);

        // All three vertices on one scanline: no area to fill.
        if a.y == c.y {
            return Err(RasterError::DegenerateGeometry);
        }

        if a.y == b.y {
            return self.fill_flat_top(canvas, a, b, c, color);
        }
        if b.y == c.y {
            return self.fill_flat_bottom(canvas, a, b, c, color);
        }

        // General case: split the long edge a-c at b's scanline. The
        // shared row b.y belongs to both halves.
        let t = (b.y - a.y) as f32 / (c.y - a.y) as f32;
        let d = SpanVertex {
            x: a.x + t * (c.x - a.x),
            y: b.y,
        };
        self.fill_flat_bottom(canvas, a, b, d, color)?;
        self.fill_flat_top(canvas, b, d, c, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    fn triangle(points: [(i32, i32); 3]) -> Triangle {
        Triangle::new(points.map(|(x, y)| ScreenPoint::new(x, y, 0.0)))
    }

    fn filled(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get(x, y).unwrap() != color::TRANSPARENT {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn covers_vertices_and_edges_inclusively() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        ScanlineRasterizer::new()
            .fill(&triangle([(0, 0), (4, 0), (0, 4)]), &mut canvas, color::RED)
            .unwrap();

        let pixels = filled(&canvas);
        for expected in [(0, 0), (1, 0), (4, 0), (0, 1), (0, 4)] {
            assert!(pixels.contains(&expected), "missing {expected:?}");
        }
        assert!(!pixels.contains(&(4, 4)));
    }

    #[test]
    fn vertex_order_does_not_change_the_fill() {
        let rasterizer = ScanlineRasterizer::new();
        let mut reference = Canvas::new(16, 16).unwrap();
        rasterizer
            .fill(&triangle([(1, 2), (13, 5), (6, 14)]), &mut reference, color::RED)
            .unwrap();
        let expected = filled(&reference);

        for permuted in [
            [(13, 5), (1, 2), (6, 14)],
            [(6, 14), (13, 5), (1, 2)],
        ] {
            let mut canvas = Canvas::new(16, 16).unwrap();
            rasterizer
                .fill(&triangle(permuted), &mut canvas, color::RED)
                .unwrap();
            assert_eq!(filled(&canvas), expected);
        }
    }

    #[test]
    fn flat_top_and_flat_bottom_shapes_fill_directly() {
        let rasterizer = ScanlineRasterizer::new();

        // flat edge at the smallest y
        let mut canvas = Canvas::new(10, 10).unwrap();
        rasterizer
            .fill(&triangle([(1, 1), (7, 1), (4, 6)]), &mut canvas, color::RED)
            .unwrap();
        let pixels = filled(&canvas);
        assert!(pixels.contains(&(1, 1)));
        assert!(pixels.contains(&(7, 1)));
        assert!(pixels.contains(&(4, 6)));
        assert!(!pixels.contains(&(0, 0)));

        // flat edge at the largest y
        let mut canvas = Canvas::new(10, 10).unwrap();
        rasterizer
            .fill(&triangle([(4, 1), (1, 6), (7, 6)]), &mut canvas, color::RED)
            .unwrap();
        let pixels = filled(&canvas);
        assert!(pixels.contains(&(4, 1)));
        assert!(pixels.contains(&(1, 6)));
        assert!(pixels.contains(&(7, 6)));
    }

    #[test]
    fn split_fill_stays_near_the_geometric_area() {
        let mut canvas = Canvas::new(100, 70).unwrap();
        ScanlineRasterizer::new()
            .fill(&triangle([(0, 0), (80, 10), (20, 60)]), &mut canvas, color::RED)
            .unwrap();

        // |det| / 2 for the vertices above
        let area = 2300.0_f32;
        let count = filled(&canvas).len() as f32;
        assert!(
            (count - area).abs() <= area * 0.1,
            "pixel count {count} too far from geometric area {area}"
        );
    }

    #[test]
    fn single_scanline_triangle_is_degenerate_and_plots_nothing() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        let result = ScanlineRasterizer::new().fill(
            &triangle([(0, 3), (2, 3), (6, 3)]),
            &mut canvas,
            color::RED,
        );
        assert_eq!(result, Err(RasterError::DegenerateGeometry));
        assert!(filled(&canvas).is_empty());
    }

    #[test]
    fn out_of_bounds_spans_propagate() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let result = ScanlineRasterizer::new().fill(
            &triangle([(0, 0), (10, 0), (0, 10)]),
            &mut canvas,
            color::RED,
        );
        assert!(matches!(result, Err(RasterError::OutOfBounds { .. })));
    }
}
