//! # Mesh Accumulator
//!
//! Collects triangles and quads into a shared vertex pool. Coincident
//! vertices are welded only when their face normals agree, so creases between
//! differently oriented faces stay sharp.
//!
//! ## Weld Rule
//!
//! Two vertices weld when `|p - q| <= position_epsilon` and
//! `|dot(n1, n2)| >= cos(normal_tolerance_degrees)`. The normal test ignores
//! sign. When several existing vertices match, the lowest index wins.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use road_mesh::{MeshAccumulator, QuadDiagonal, Winding};
//!
//! let mut acc = MeshAccumulator::new();
//! let quad = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0), DVec3::Z];
//! acc.add_quad(quad[0], quad[1], quad[2], quad[3], Winding::Clockwise, QuadDiagonal::ZeroTwo)
//!     .unwrap();
//! assert_eq!(acc.build().triangle_count(), 2);
//! ```

mod weld;


use crate::error::{MeshError, MeshResult};
use crate::geometry::{plane_normal, FacePoints, TaggedFace, FALLBACK_NORMAL};
use crate::mesh::{Face, FaceHandle, FaceIndices, Mesh, QuadDiagonal, SurfaceTag, Winding};
use config::constants::WeldConfig;
use glam::DVec3;
use weld::WeldIndex;

/// Incremental welding mesh builder.
#[derive(Debug, Clone)]
pub struct MeshAccumulator {
    config: WeldConfig,
    cos_threshold: f64,
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<Face>,
    index: WeldIndex,
}

impl Default for MeshAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshAccumulator {
    /// Creates an accumulator with the default weld tolerances.
    pub fn new() -> Self {
        Self::from_valid_config(WeldConfig::default())
    }

    /// Creates an accumulator with custom tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Config`] if the tolerances are invalid.
    pub fn with_config(config: WeldConfig) -> MeshResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WeldConfig) -> Self {
        Self {
            cos_threshold: config.normal_cos_threshold(),
            index: WeldIndex::new(config.position_epsilon),
            config,
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Weld tolerances in use.
    #[inline]
    pub fn config(&self) -> &WeldConfig {
        &self.config
    }

    /// Number of welded vertices so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of submitted faces so far.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if nothing has been submitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Adds a triangle.
    pub fn add_triangle(
        &mut self,
        a: DVec3,
        b: DVec3,
        c: DVec3,
        winding: Winding,
    ) -> MeshResult<FaceHandle> {
        self.add_face(&FacePoints::Triangle([a, b, c]), winding, QuadDiagonal::default(), None)
    }

    /// Adds a quad split along `diagonal`.
    pub fn add_quad(
        &mut self,
        a: DVec3,
        b: DVec3,
        c: DVec3,
        d: DVec3,
        winding: Winding,
        diagonal: QuadDiagonal,
    ) -> MeshResult<FaceHandle> {
        self.add_face(&FacePoints::Quad([a, b, c, d]), winding, diagonal, None)
    }

    /// Adds a batch of 3- or 4-point sets sharing one winding and tag.
    ///
    /// Every set is checked before any is inserted, so a bad set leaves the
    /// accumulator untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidInput`] for a set that is not 3 or 4
    /// points long or holds non-finite coordinates.
    pub fn add_faces<P: AsRef<[DVec3]>>(
        &mut self,
        point_sets: &[P],
        winding: Winding,
        tag: Option<SurfaceTag>,
    ) -> MeshResult<Vec<FaceHandle>> {
        let faces = point_sets
            .iter()
            .map(|set| face_points_from_slice(set.as_ref()))
            .collect::<MeshResult<Vec<_>>>()?;

        faces
            .iter()
            .map(|points| self.add_face(points, winding, QuadDiagonal::default(), tag))
            .collect()
    }

    /// Adds a tagged face from a composite builder.
    pub fn add_tagged(
        &mut self,
        face: &TaggedFace,
        winding: Winding,
        keep_tag: bool,
    ) -> MeshResult<FaceHandle> {
        let tag = keep_tag.then_some(face.tag);
        self.add_face(&face.points, winding, QuadDiagonal::default(), tag)
    }

    /// Adds one face: computes its normal, welds its corners, records it.
    pub fn add_face(
        &mut self,
        points: &FacePoints,
        winding: Winding,
        diagonal: QuadDiagonal,
        tag: Option<SurfaceTag>,
    ) -> MeshResult<FaceHandle> {
        let slice = points.as_slice();
        if slice.iter().any(|p| !p.is_finite()) {
            return Err(MeshError::invalid_input("face has non-finite coordinates"));
        }

        let normal = self.face_normal(slice, winding)?;

        let indices = match points {
            FacePoints::Triangle([a, b, c]) => {
                FaceIndices::Triangle([self.weld(*a, normal), self.weld(*b, normal), self.weld(*c, normal)])
            }
            FacePoints::Quad([a, b, c, d]) => FaceIndices::Quad([
                self.weld(*a, normal),
                self.weld(*b, normal),
                self.weld(*c, normal),
                self.weld(*d, normal),
            ]),
        };

        let face = Face {
            indices,
            winding,
            diagonal,
            tag,
        };
        if face.is_collapsed() {
            tracing::debug!(face = self.faces.len(), "face collapsed onto welded vertices");
        }

        let handle = FaceHandle(self.faces.len());
        self.faces.push(face);
        Ok(handle)
    }

    /// Face normal from `cross(b - a, c - a)`, turned to face the front.
    fn face_normal(&self, points: &[DVec3], winding: Winding) -> MeshResult<DVec3> {
        let normal = match points {
            [a, b, c] => plane_normal(*a, *b, *c),
            [a, b, c, d] => plane_normal(*a, *b, *c).or_else(|| plane_normal(*a, *c, *d)),
            _ => None,
        };

        match normal {
            Some(n) => Ok(match winding {
                Winding::CounterClockwise => n,
                Winding::Clockwise => -n,
            }),
            None if self.config.strict => Err(MeshError::DegenerateFace),
            None => {
                tracing::warn!(
                    face = self.faces.len(),
                    "degenerate face, using fallback normal"
                );
                Ok(FALLBACK_NORMAL)
            }
        }
    }

    // =========================================================================
    // WELDING
    // =========================================================================

    fn weld(&mut self, pos: DVec3, normal: DVec3) -> u32 {
        if let Some(existing) = self.find_match(pos, normal) {
            tracing::trace!(vertex = existing, "welded");
            return existing;
        }

        let index = self.positions.len() as u32;
        self.positions.push(pos);
        self.normals.push(normal);
        self.index.insert(index, pos);
        tracing::trace!(vertex = index, x = pos.x, y = pos.y, z = pos.z, "allocated");
        index
    }

    fn find_match(&self, pos: DVec3, normal: DVec3) -> Option<u32> {
        let epsilon = self.config.position_epsilon;
        self.index
            .candidates(pos)
            .filter(|&i| {
                let i = i as usize;
                self.positions[i].distance(pos) <= epsilon
                    && self.normals[i].dot(normal).abs() >= self.cos_threshold
            })
            .min()
    }

    /// Welded vertices within `position_epsilon` of `pos`, any normal.
    pub fn vertices_near(&self, pos: DVec3) -> Vec<u32> {
        let mut found: Vec<u32> = self
            .index
            .candidates(pos)
            .filter(|&i| self.positions[i as usize].distance(pos) <= self.config.position_epsilon)
            .collect();
        found.sort_unstable();
        found
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Snapshots the accumulated geometry into a [`Mesh`].
    ///
    /// Leaves the accumulator unchanged; two calls return equal meshes.
    pub fn build(&self) -> Mesh {
        Mesh::from_parts(self.positions.clone(), self.normals.clone(), self.faces.clone())
    }

    /// Drops all vertices and faces, keeping the tolerances.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.faces.clear();
        self.index.clear();
    }
}

fn face_points_from_slice(points: &[DVec3]) -> MeshResult<FacePoints> {
    let face = match points {
        [a, b, c] => FacePoints::Triangle([*a, *b, *c]),
        [a, b, c, d] => FacePoints::Quad([*a, *b, *c, *d]),
        _ => {
            return Err(MeshError::invalid_input(format!(
                "face needs 3 or 4 points, got {}",
                points.len()
            )))
        }
    };
    if points.iter().any(|p| !p.is_finite()) {
        return Err(MeshError::invalid_input("face has non-finite coordinates"));
    }
    Ok(face)
}
