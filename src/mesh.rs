//! Triangle mesh input for the renderer.
//!
//! The rasterization core only ever asks a mesh two things: how many
//! triangles it has, and the three device-space points of triangle `i`.
//! Everything else here exists to get OBJ files into that shape.

use std::io::BufRead;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::math::vec3::Vec3;

/// Errors raised while loading a mesh from an OBJ source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ data: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// One triangular face as zero-based indices into the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

/// An ordered collection of triangles over shared vertices.
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Load a mesh from an OBJ file, triangulating any larger faces.
    ///
    /// All objects/groups in the file are flattened into one mesh; only
    /// vertex positions are kept.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &load_options())?;
        let mesh = Self::from_models(models);
        info!(
            "loaded {} ({} vertices, {} triangles)",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Load a mesh from any OBJ-format reader. Material libraries are
    /// ignored, matching `from_obj`'s position-only loading.
    pub fn from_reader(reader: &mut impl BufRead) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Ok((Vec::new(), Default::default()))
        })?;
        Ok(Self::from_models(models))
    }

    fn from_models(models: Vec<tobj::Model>) -> Self {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in models {
            let base = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(model.mesh.indices.chunks_exact(3).map(|i| Face {
                a: base + i[0] as usize,
                b: base + i[1] as usize,
                c: base + i[2] as usize,
            }));
        }
        Self { vertices, faces }
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// The three device-space points of triangle `index`, in face order.
    ///
    /// Returns `None` if the index is out of range or a face references
    /// a missing vertex.
    pub fn triangle(&self, index: usize) -> Option<[Vec3; 3]> {
        let face = self.faces.get(index)?;
        Some([
            *self.vertices.get(face.a)?,
            *self.vertices.get(face.b)?,
            *self.vertices.get(face.c)?,
        ])
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUAD_OBJ: &str = "\
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.5
v -1.0 1.0 0.5
f 1 2 3
f 1 3 4
";

    #[test]
    fn loads_vertices_and_faces_from_obj_text() {
        let mesh = Mesh::from_reader(&mut Cursor::new(QUAD_OBJ)).unwrap();

        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(
            mesh.triangle(0).unwrap(),
            [
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.5),
            ]
        );
    }

    #[test]
    fn triangulates_quad_faces() {
        let obj = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
        let mesh = Mesh::from_reader(&mut Cursor::new(obj)).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn out_of_range_triangle_index_is_none() {
        let mesh = Mesh::from_reader(&mut Cursor::new(QUAD_OBJ)).unwrap();
        assert!(mesh.triangle(2).is_none());
    }

    #[test]
    fn hand_built_meshes_expose_the_same_surface() {
        let vertices = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0) + Vec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![Face { a: 0, b: 1, c: 2 }]);

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0).unwrap()[2], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn face_referencing_missing_vertex_is_none() {
        let mesh = Mesh::new(vec![Vec3::ZERO], vec![Face { a: 0, b: 1, c: 2 }]);
        assert!(mesh.triangle(0).is_none());
    }
}
