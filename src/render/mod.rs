//! Rasterization primitives: the pixel canvas, line drawing, and the
//! interchangeable triangle-fill algorithms.

mod canvas;
pub mod line;
mod rasterizer;

pub use canvas::Canvas;
pub use rasterizer::{
    EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    Triangle,
};

use thiserror::Error;

/// Failure conditions of the rasterization core.
///
/// All three are local, recoverable input-validation errors. There is no
/// retry concept here: each one is fatal to the single call that raised
/// it but never to the process.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// Canvas construction with a non-positive width or height.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Pixel address outside the canvas extent on get/set. Rejected
    /// outright rather than clamped or wrapped, which would corrupt
    /// adjacent rows.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Triangle with zero signed area. The fill algorithms detect this
    /// up front and plot nothing; the caller decides whether to skip or
    /// surface it.
    #[error("triangle has zero signed area")]
    DegenerateGeometry,
}
