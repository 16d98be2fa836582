//! # Mesh Data Structure
//!
//! Welded output of the accumulator: shared vertex positions, one
//! representative normal per vertex, and a face list that remembers winding,
//! quad diagonal and surface tag.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// FACE ATTRIBUTES
// =============================================================================

/// Order in which a face's points were submitted, seen from its front side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Winding {
    /// Points run clockwise seen from the front (generator convention)
    #[default]
    Clockwise,
    /// Points run counter-clockwise seen from the front
    CounterClockwise,
}

/// Which diagonal splits a quad into two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuadDiagonal {
    /// Split along 0-2: `(0,1,2)` and `(0,2,3)`
    #[default]
    ZeroTwo,
    /// Split along 1-3: `(0,1,3)` and `(1,2,3)`
    OneThree,
}

/// Surface category carried through to the rendering layer.
///
/// The accumulator never interprets tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceTag {
    /// Road surface at road height
    Road,
    /// Walkable footpath slab top
    Footpath,
    /// Sloped curb face between footpath and gutter
    CurbFace,
    /// Vertical drop into the gutter
    GutterDrop,
    /// Gutter floor running out to the road
    GutterRun,
}

/// Vertex indices of one face in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceIndices {
    /// Three indices
    Triangle([u32; 3]),
    /// Four indices
    Quad([u32; 4]),
}

impl FaceIndices {
    /// Borrows the indices as a slice.
    pub fn as_slice(&self) -> &[u32] {
        match self {
            FaceIndices::Triangle(indices) => indices,
            FaceIndices::Quad(indices) => indices,
        }
    }
}

/// A welded face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Welded vertex indices in submission order
    pub indices: FaceIndices,
    /// Submission winding
    pub winding: Winding,
    /// Split used when the face is a quad
    pub diagonal: QuadDiagonal,
    /// Optional surface classification
    pub tag: Option<SurfaceTag>,
}

impl Face {
    /// Number of output triangles this face produces.
    pub fn triangle_count(&self) -> usize {
        match self.indices {
            FaceIndices::Triangle(_) => 1,
            FaceIndices::Quad(_) => 2,
        }
    }

    /// True when welding merged two of the face's corners.
    ///
    /// Zero-size curb dimensions produce these; they cover no area.
    pub fn is_collapsed(&self) -> bool {
        let indices = self.indices.as_slice();
        indices
            .iter()
            .enumerate()
            .any(|(k, i)| indices[k + 1..].contains(i))
    }

    /// Appends this face's triangles, counter-clockwise from the front.
    pub fn push_triangles(&self, out: &mut Vec<[u32; 3]>) {
        let emit = |out: &mut Vec<[u32; 3]>, tri: [u32; 3]| match self.winding {
            Winding::CounterClockwise => out.push(tri),
            Winding::Clockwise => out.push([tri[2], tri[1], tri[0]]),
        };

        match self.indices {
            FaceIndices::Triangle(tri) => emit(out, tri),
            FaceIndices::Quad([i0, i1, i2, i3]) => match self.diagonal {
                QuadDiagonal::ZeroTwo => {
                    emit(out, [i0, i1, i2]);
                    emit(out, [i0, i2, i3]);
                }
                QuadDiagonal::OneThree => {
                    emit(out, [i0, i1, i3]);
                    emit(out, [i1, i2, i3]);
                }
            },
        }
    }
}

/// Stable reference to a face submitted to an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceHandle(pub(crate) usize);

impl FaceHandle {
    /// Position of the face in submission order.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

// =============================================================================
// MESH
// =============================================================================

/// A welded polygon mesh.
///
/// All geometry is f64. Export to f32 only happens at the rendering
/// boundary through [`Mesh::vertices_f32`] and [`Mesh::indices_u32`].
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use road_mesh::{MeshAccumulator, Winding};
///
/// let mut acc = MeshAccumulator::new();
/// acc.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Z, Winding::CounterClockwise)
///     .unwrap();
/// let mesh = acc.build();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Welded vertex positions
    positions: Vec<DVec3>,
    /// Representative normal per vertex (first face that created it)
    normals: Vec<DVec3>,
    /// Faces in submission order
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(positions: Vec<DVec3>, normals: Vec<DVec3>, faces: Vec<Face>) -> Self {
        Self {
            positions,
            normals,
            faces,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of faces (triangles and quads).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of output triangles.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(Face::triangle_count).sum()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the representative vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the face behind a handle, if it belongs to this mesh.
    pub fn face(&self, handle: FaceHandle) -> Option<&Face> {
        self.faces.get(handle.index())
    }

    /// Triangulated index list, counter-clockwise from the front.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let mut out = Vec::with_capacity(self.triangle_count());
        for face in &self.faces {
            face.push_triangles(&mut out);
        }
        out
    }

    /// Faces carrying the given tag.
    pub fn faces_with_tag(&self, tag: SurfaceTag) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(move |face| face.tag == Some(tag))
    }

    /// Faces whose corners welded together.
    pub fn collapsed_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(|face| face.is_collapsed())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        crate::geometry::bounding_box(&self.positions)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every face index refers to an existing vertex
    /// - Positions and normals have the same length
    ///
    /// Collapsed faces pass; see [`Mesh::collapsed_faces`].
    pub fn validate(&self) -> bool {
        if self.positions.len() != self.normals.len() {
            return false;
        }
        let vertex_count = self.positions.len();

        self.faces.iter().all(|face| {
            face.indices
                .as_slice()
                .iter()
                .all(|&i| (i as usize) < vertex_count)
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles().into_iter().flatten().collect()
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_face(winding: Winding, diagonal: QuadDiagonal) -> Face {
        Face {
            indices: FaceIndices::Quad([0, 1, 2, 3]),
            winding,
            diagonal,
            tag: None,
        }
    }

    fn unit_square() -> Mesh {
        Mesh::from_parts(
            vec![
                DVec3::ZERO,
                DVec3::X,
                DVec3::new(1.0, 0.0, 1.0),
                DVec3::Z,
            ],
            vec![DVec3::Y; 4],
            vec![Face {
                tag: Some(SurfaceTag::Footpath),
                ..quad_face(Winding::Clockwise, QuadDiagonal::ZeroTwo)
            }],
        )
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_quad_split_patterns() {
        let mut out = Vec::new();
        quad_face(Winding::CounterClockwise, QuadDiagonal::ZeroTwo).push_triangles(&mut out);
        assert_eq!(out, vec![[0, 1, 2], [0, 2, 3]]);

        out.clear();
        quad_face(Winding::CounterClockwise, QuadDiagonal::OneThree).push_triangles(&mut out);
        assert_eq!(out, vec![[0, 1, 3], [1, 2, 3]]);
    }

    #[test]
    fn test_clockwise_reverses_each_triangle() {
        let mut out = Vec::new();
        quad_face(Winding::Clockwise, QuadDiagonal::ZeroTwo).push_triangles(&mut out);
        assert_eq!(out, vec![[2, 1, 0], [3, 2, 0]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let (min, max) = unit_square().bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_square().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO],
            vec![DVec3::Y],
            vec![quad_face(Winding::Clockwise, QuadDiagonal::ZeroTwo)],
        );
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_accepts_collapsed_face() {
        let mut mesh = unit_square();
        assert_eq!(mesh.collapsed_faces().count(), 0);

        mesh.faces[0].indices = FaceIndices::Quad([0, 0, 2, 2]);
        assert!(mesh.faces[0].is_collapsed());
        assert!(mesh.validate());
        assert_eq!(mesh.collapsed_faces().count(), 1);
    }

    #[test]
    fn test_faces_with_tag() {
        let mesh = unit_square();
        assert_eq!(mesh.faces_with_tag(SurfaceTag::Footpath).count(), 1);
        assert_eq!(mesh.faces_with_tag(SurfaceTag::Road).count(), 0);
    }

    #[test]
    fn test_exports() {
        let mesh = unit_square();
        assert_eq!(&mesh.vertices_f32()[3..6], &[1.0f32, 0.0, 0.0]);
        assert_eq!(mesh.normals_f32().len(), 12);
        assert_eq!(mesh.indices_u32(), vec![2, 1, 0, 3, 2, 0]);
    }

    #[test]
    fn test_surface_tag_serde_names() {
        let json = serde_json::to_string(&SurfaceTag::GutterRun).unwrap();
        assert_eq!(json, "\"GutterRun\"");
    }
}
