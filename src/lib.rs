//! A minimal CPU-only software rasterizer.
//!
//! Converts a 3D triangle mesh into a 2D raster image with no graphics
//! hardware involved: device-space vertices are projected to pixel
//! coordinates, triangles are filled (or outlined with Bresenham lines)
//! into a color canvas, and the canvas serializes to uncompressed
//! true-color TGA bytes.
//!
//! # Quick Start
//!
//! ```no_run
//! use rastly::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mesh = Mesh::from_obj("head.obj")?;
//! let mut engine = Engine::new(1000, 1000)?;
//! engine.render(&mesh)?;
//! std::fs::write("out.tga", engine.to_tga_bytes(false))?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use color::Color;
pub use engine::{Engine, FaceColor, RenderMode};
pub use mesh::{Face, LoadError, Mesh};
pub use projection::ScreenPoint;
pub use render::{Canvas, RasterError, RasterizerType};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rastly::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, FaceColor, RenderMode};

    // Mesh
    pub use crate::mesh::{Face, LoadError, Mesh};

    // Math & projection
    pub use crate::math::vec3::Vec3;
    pub use crate::projection::{project, project_all, ScreenPoint};

    // Rasterization
    pub use crate::color::Color;
    pub use crate::render::{
        Canvas, EdgeFunctionRasterizer, Rasterizer, RasterizerType, RasterError,
        ScanlineRasterizer, Triangle,
    };
}
