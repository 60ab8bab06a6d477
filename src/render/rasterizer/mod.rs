//! Triangle rasterization algorithms.
//!
//! Two interchangeable fill strategies are provided as a documented
//! exploration of trade-offs:
//! - [`EdgeFunctionRasterizer`]: bounding-box iteration with signed
//!   edge-distance tests
//! - [`ScanlineRasterizer`]: flat-top/flat-bottom decomposition with
//!   interpolated span bounds

mod edgefunction;
mod scanline;

pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;

use super::{Canvas, RasterError};
use crate::color::Color;
use crate::projection::ScreenPoint;

/// A triangle ready for rasterization in screen space.
///
/// The vertex order carries no winding invariant; each fill strategy
/// normalizes or decomposes the triple itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [ScreenPoint; 3],
}

impl Triangle {
    pub fn new(points: [ScreenPoint; 3]) -> Self {
        Self { points }
    }
}

/// Trait for triangle fill algorithms.
///
/// Implementors define how a screen-space triangle is filled into the
/// canvas. Neither strategy clips: pixel addresses outside the canvas
/// propagate [`RasterError::OutOfBounds`], and a zero-area triangle
/// yields [`RasterError::DegenerateGeometry`] with nothing plotted.
pub trait Rasterizer {
    fn fill(
        &self,
        triangle: &Triangle,
        canvas: &mut Canvas,
        color: Color,
    ) -> Result<(), RasterError>;
}

/// Available fill algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Flat-top/flat-bottom decomposition with per-scanline span fills.
    #[default]
    Scanline,
    /// Edge-distance test for every pixel in the bounding box. Simpler,
    /// and the basis of GPU rasterization, but always scans the full
    /// box regardless of coverage.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
        }
    }
}

/// Dispatcher holding both implementations behind a runtime selector.
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            edge_function: EdgeFunctionRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill(
        &self,
        triangle: &Triangle,
        canvas: &mut Canvas,
        color: Color,
    ) -> Result<(), RasterError> {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill(triangle, canvas, color),
            RasterizerType::EdgeFunction => self.edge_function.fill(triangle, canvas, color),
        }
    }
}
