//! The render loop.
//!
//! [`Engine`] ties the pipeline together: it owns the canvas, projects
//! each mesh triangle into screen space, and hands it to the configured
//! drawing strategy. One loop with selectable mode, fill algorithm, and
//! face coloring replaces the zoo of near-identical entry points this
//! kind of renderer tends to accumulate.

use log::debug;
use rand::Rng;

use crate::color::{self, Color};
use crate::mesh::Mesh;
use crate::projection::project;
use crate::render::{
    line, Canvas, Rasterizer, RasterizerDispatcher, RasterizerType, RasterError, Triangle,
};

/// What gets drawn for each triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Triangle edges only.
    Wireframe,
    /// Filled faces using the active rasterizer.
    #[default]
    Filled,
}

/// How each face is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceColor {
    /// Every face gets the same color.
    Uniform(Color),
    /// Every face gets an independently random opaque color.
    Random,
}

pub struct Engine {
    canvas: Canvas,
    rasterizer: RasterizerDispatcher,
    render_mode: RenderMode,
    face_color: FaceColor,
}

impl Engine {
    pub fn new(width: i32, height: i32) -> Result<Self, RasterError> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
            render_mode: RenderMode::default(),
            face_color: FaceColor::Uniform(color::WHITE),
        })
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn set_face_color(&mut self, face_color: FaceColor) {
        self.face_color = face_color;
    }

    pub fn face_color(&self) -> FaceColor {
        self.face_color
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Rasterize every triangle of the mesh into the canvas.
    ///
    /// Degenerate (zero-area) faces are skipped with a debug log entry
    /// rather than failing the render; real meshes routinely contain
    /// them. Out-of-bounds pixel writes do fail the call: the engine
    /// performs no clipping and expects projected coordinates to land
    /// inside the canvas.
    pub fn render(&mut self, mesh: &Mesh) -> Result<(), RasterError> {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let mut rng = rand::thread_rng();

        for index in 0..mesh.triangle_count() {
            let Some(vertices) = mesh.triangle(index) else {
                debug!("skipping face {index}: missing vertex data");
                continue;
            };

            let triangle = Triangle::new(vertices.map(|v| project(v, width, height)));
            let face_color = match self.face_color {
                FaceColor::Uniform(c) => c,
                FaceColor::Random => Color::from_hex(rng.gen_range(0..=0xFFFFFF), 0xFF),
            };

            let result = match self.render_mode {
                RenderMode::Wireframe => line::draw_wireframe(&mut self.canvas, &triangle, face_color),
                RenderMode::Filled => self.rasterizer.fill(&triangle, &mut self.canvas, face_color),
            };
            match result {
                Err(RasterError::DegenerateGeometry) => {
                    debug!("skipping face {index}: zero signed area");
                }
                other => other?,
            }
        }
        Ok(())
    }

    /// Serialize the canvas to TGA bytes. See [`Canvas::to_tga_bytes`].
    pub fn to_tga_bytes(&self, vflip: bool) -> Vec<u8> {
        self.canvas.to_tga_bytes(vflip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use crate::mesh::Face;

    /// A triangle covering the lower-left half of device space, plus a
    /// degenerate face collapsed onto one point.
    fn test_mesh() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![
                Face { a: 0, b: 1, c: 2 },
                Face { a: 0, b: 0, c: 0 },
            ],
        )
    }

    fn filled_count(canvas: &Canvas) -> usize {
        let mut count = 0;
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get(x, y).unwrap() != crate::color::TRANSPARENT {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn renders_filled_meshes_and_skips_degenerate_faces() {
        let mut engine = Engine::new(20, 20).unwrap();
        engine.render(&test_mesh()).unwrap();
        assert!(filled_count(engine.canvas()) > 0);
    }

    #[test]
    fn wireframe_mode_draws_fewer_pixels_than_fill() {
        let mesh = test_mesh();

        let mut filled = Engine::new(40, 40).unwrap();
        filled.render(&mesh).unwrap();

        let mut wireframe = Engine::new(40, 40).unwrap();
        wireframe.set_render_mode(RenderMode::Wireframe);
        wireframe.render(&mesh).unwrap();

        let filled = filled_count(filled.canvas());
        let outlined = filled_count(wireframe.canvas());
        assert!(outlined > 0);
        assert!(outlined < filled);
    }

    #[test]
    fn both_fill_algorithms_are_selectable() {
        let mesh = test_mesh();
        for rasterizer_type in [RasterizerType::Scanline, RasterizerType::EdgeFunction] {
            let mut engine = Engine::new(20, 20).unwrap();
            engine.set_rasterizer(rasterizer_type);
            assert_eq!(engine.rasterizer(), rasterizer_type);
            engine.render(&mesh).unwrap();
            assert!(filled_count(engine.canvas()) > 0, "{rasterizer_type}");
        }
    }

    #[test]
    fn random_face_colors_still_render() {
        let mut engine = Engine::new(20, 20).unwrap();
        engine.set_face_color(FaceColor::Random);
        engine.render(&test_mesh()).unwrap();
        assert!(filled_count(engine.canvas()) > 0);
    }

    #[test]
    fn coordinates_outside_device_space_fail_the_render() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(3.0, -1.0, 0.0),
                Vec3::new(-1.0, 3.0, 0.0),
            ],
            vec![Face { a: 0, b: 1, c: 2 }],
        );
        let mut engine = Engine::new(10, 10).unwrap();
        assert!(matches!(
            engine.render(&mesh),
            Err(RasterError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn serializes_through_the_canvas() {
        let engine = Engine::new(6, 4).unwrap();
        let bytes = engine.to_tga_bytes(false);
        assert_eq!(bytes.len(), 18 + 6 * 4 * 4);
        assert_eq!(bytes[12], 6);
        assert_eq!(bytes[14], 4);
    }
}
