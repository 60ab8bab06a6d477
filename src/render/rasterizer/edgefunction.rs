use super::{Rasterizer, Triangle};
use crate::color::Color;
use crate::projection::ScreenPoint;
use crate::render::{Canvas, RasterError};

/// Triangle rasterizer using signed edge distances over a bounding box.
///
/// The triangle is first normalized to counter-clockwise winding, then
/// every pixel in its bounding box is tested against the three directed
/// edges. A pixel is filled iff it lies strictly inside all three edges:
/// the test is `< 0`, not `<= 0`, so pixels exactly on an edge are
/// excluded. Adjacent triangles sharing an edge therefore leave a
/// one-pixel gap along it; this tie-break is part of the contract and
/// deliberately not corrected here.
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer {}
    }

    /// Scaled signed perpendicular distance of (x, y) from the directed
    /// line p0 -> p1. Negative on the interior side of a
    /// counter-clockwise triangle, zero exactly on the line.
    ///
    /// All inputs are integer pixel coordinates, so the value is exact;
    /// i64 keeps the products safe from overflow for any i32 input.
    #[inline]
    fn edge_distance(p0: ScreenPoint, p1: ScreenPoint, x: i32, y: i32) -> i64 {
        let dx = (p1.x - p0.x) as i64;
        let dy = (p1.y - p0.y) as i64;
        dy * x as i64 - dx * y as i64 + dx * p0.y as i64 - dy * p0.x as i64
    }
}

impl Default for EdgeFunctionRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill(
        &self,
        triangle: &Triangle,
        canvas: &mut Canvas,
        color: Color,
    ) -> Result<(), RasterError> {
        let [a, b, c] = triangle.points;

        // Twice the signed area: positive for counter-clockwise vertices
        let det = ((a.x - c.x) as i64) * ((b.y - c.y) as i64)
            - ((a.y - c.y) as i64) * ((b.x - c.x) as i64);
        if det == 0 {
            return Err(RasterError::DegenerateGeometry);
        }

        // Reorder a clockwise triangle to counter-clockwise. Local
        // rebinding only: the caller's triangle is never mutated.
        let (a, b) = if det < 0 { (b, a) } else { (a, b) };

        let left = a.x.min(b.x).min(c.x);
        let right = a.x.max(b.x).max(c.x);
        let bottom = a.y.min(b.y).min(c.y);
        let top = a.y.max(b.y).max(c.y);

        for y in bottom..=top {
            for x in left..=right {
                if Self::edge_distance(a, b, x, y) < 0
                    && Self::edge_distance(b, c, x, y) < 0
                    && Self::edge_distance(c, a, x, y) < 0
                {
                    canvas.set(x, y, color)?;
                }
            }
        }
        Ok(())
    }
}
