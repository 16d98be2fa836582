//! # Footprint Assembly
//!
//! Turns a [`FootprintConfig`] into corner pieces and footpath strips, places
//! them around the footprint rectangle and feeds them to a
//! [`MeshAccumulator`].
//!
//! ## Pipeline
//!
//! ```text
//! FootprintConfig -> assemble() -> Assembly -> submit() -> MeshAccumulator -> Mesh
//! ```
//!
//! Every piece is built in its own canonical frame; the only rotation and
//! translation is the final placement (corner or side table, then the
//! footprint placement).

mod corner;
mod footpath;
mod placement;
mod profile;


pub use corner::{inward_corner, outward_corner, Levels};
pub use footpath::{footpath_strip, StripEnds};
pub use placement::{corner_kind, CornerId, CornerKind, SideId};
pub use profile::{CornerSize, CurbProfile, FootprintConfig, Mitre, SideConfig, SurfaceTagging, WeldSettings};

use crate::accumulator::MeshAccumulator;
use crate::error::MeshResult;
use crate::geometry::{RigidPlacement, TaggedFace};
use crate::mesh::{FaceHandle, Mesh, Winding};

// =============================================================================
// PARTS
// =============================================================================

/// A corner piece with its canonical faces and its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerPart {
    /// Which corner
    pub corner: CornerId,
    /// Inward or outward shape
    pub kind: CornerKind,
    /// Canonical frame to world
    pub placement: RigidPlacement,
    /// Faces in the canonical corner frame
    pub local_faces: Vec<TaggedFace>,
}

impl CornerPart {
    /// Faces moved into place.
    pub fn faces(&self) -> impl Iterator<Item = TaggedFace> + '_ {
        self.local_faces
            .iter()
            .map(move |face| face.transformed(&self.placement))
    }
}

/// A footpath strip with its canonical faces and its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct FootpathPart {
    /// Which side
    pub side: SideId,
    /// How the strip meets its neighbours
    pub ends: StripEnds,
    /// Canonical frame to world
    pub placement: RigidPlacement,
    /// Faces in the canonical side frame
    pub local_faces: Vec<TaggedFace>,
}

impl FootpathPart {
    /// Faces moved into place.
    pub fn faces(&self) -> impl Iterator<Item = TaggedFace> + '_ {
        self.local_faces
            .iter()
            .map(move |face| face.transformed(&self.placement))
    }
}

/// All placed parts of one footprint, before welding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// Corner pieces in NE, NW, SW, SE order (mixed corners are absent)
    pub corners: Vec<CornerPart>,
    /// Footpath strips in N, E, S, W order (sides without one are absent)
    pub footpaths: Vec<FootpathPart>,
}

impl Assembly {
    /// Total number of faces across all parts.
    pub fn face_count(&self) -> usize {
        let corners: usize = self.corners.iter().map(|c| c.local_faces.len()).sum();
        let strips: usize = self.footpaths.iter().map(|f| f.local_faces.len()).sum();
        corners + strips
    }

    /// All placed faces, corners first.
    pub fn faces(&self) -> impl Iterator<Item = TaggedFace> + '_ {
        self.corners
            .iter()
            .flat_map(|corner| corner.faces())
            .chain(self.footpaths.iter().flat_map(|strip| strip.faces()))
    }

    /// Submits every placed face, clockwise, in a fixed order.
    pub fn submit(
        &self,
        acc: &mut MeshAccumulator,
        tagging: SurfaceTagging,
    ) -> MeshResult<Vec<FaceHandle>> {
        self.faces()
            .map(|face| acc.add_tagged(&face, Winding::Clockwise, tagging.keeps_tags()))
            .collect()
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Builds and places every corner piece and footpath strip.
///
/// # Errors
///
/// Returns the first validation or extrusion error.
pub fn assemble(config: &FootprintConfig) -> MeshResult<Assembly> {
    config.validate()?;

    let levels = Levels {
        footpath: config.footpath_height(),
        road: config.road_height,
    };
    let (width, length) = (config.width, config.length);

    let mut corners = Vec::with_capacity(4);
    for corner in CornerId::ALL {
        let Some(kind) = piece_at(config, corner) else {
            tracing::debug!(?corner, "mixed connectivity, no corner piece");
            continue;
        };

        let (a, b) = corner.canonical_extents(config.corner(corner));
        let local_faces = match kind {
            CornerKind::InwardFacing => inward_corner(a, b, &config.curb, levels)?,
            CornerKind::OutwardFacing => outward_corner(a, b, &config.curb, levels)?,
        };
        tracing::debug!(?corner, ?kind, faces = local_faces.len(), "built corner");

        corners.push(CornerPart {
            corner,
            kind,
            placement: corner.placement(width, length).then(&config.placement),
            local_faces,
        });
    }

    let mut footpaths = Vec::with_capacity(4);
    for side in SideId::ALL {
        let Some(depth) = config.side(side).footpath else {
            continue;
        };

        let ends = strip_ends(config, side);
        let local_faces = footpath_strip(side.length(width, length), depth, ends, &config.curb, levels)?;
        tracing::debug!(
            ?side,
            extend_start = ends.extend_start,
            extend_end = ends.extend_end,
            curb_extend_start = ends.curb_extend_start,
            curb_extend_end = ends.curb_extend_end,
            faces = local_faces.len(),
            "built footpath"
        );

        footpaths.push(FootpathPart {
            side,
            ends,
            placement: side.placement(width, length).then(&config.placement),
            local_faces,
        });
    }

    Ok(Assembly { corners, footpaths })
}

/// Assembles `config` and submits it to an existing accumulator.
pub fn build_into(config: &FootprintConfig, acc: &mut MeshAccumulator) -> MeshResult<Vec<FaceHandle>> {
    let assembly = assemble(config)?;
    assembly.submit(acc, config.tagging)
}

/// Builds the welded mesh for one footprint.
///
/// # Example
///
/// ```rust
/// use road_mesh::assembly::{CurbProfile, FootprintConfig};
///
/// let config = FootprintConfig::uniform(30.0, 30.0, CurbProfile::new(0.35, 0.05, 0.5, 0.5), 3.0);
/// let mesh = road_mesh::build_footprint(&config).unwrap();
/// assert_eq!(mesh.face_count(), 60);
/// ```
pub fn build_footprint(config: &FootprintConfig) -> MeshResult<Mesh> {
    let mut acc = MeshAccumulator::with_config(config.weld.to_weld_config()?)?;
    build_into(config, &mut acc)?;
    let mesh = acc.build();
    tracing::debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        triangles = mesh.triangle_count(),
        "built footprint"
    );
    Ok(mesh)
}

// =============================================================================
// NEIGHBOUR RULES
// =============================================================================

/// Corner piece at `corner`, if its two sides agree on connectivity.
fn piece_at(config: &FootprintConfig, corner: CornerId) -> Option<CornerKind> {
    let (first, second) = corner.sides();
    corner_kind(config.side(first).connected, config.side(second).connected)
}

/// End treatment for the strip on `side`.
///
/// An end without a corner piece is filled by the connected side's strip,
/// whose pad grows by the neighbouring footpath width. The unconnected
/// strip runs its curb alongside that pad, by the same width, and both
/// curbs mitre into each other there.
fn strip_ends(config: &FootprintConfig, side: SideId) -> StripEnds {
    let (start_corner, end_corner) = side.end_corners();
    let (start_neighbour, end_neighbour) = side.neighbours();
    let connected = config.side(side).connected;

    // (pad extension, curb-only extension, mitre)
    let end = |corner: CornerId, neighbour: SideId| -> (f64, f64, bool) {
        if piece_at(config, corner).is_some() {
            return (0.0, 0.0, false);
        }
        match config.side(neighbour).footpath {
            Some(width) if connected => (width.max(0.0), 0.0, true),
            Some(width) => (0.0, width.max(0.0), true),
            None => (0.0, 0.0, false),
        }
    };

    let (extend_start, curb_extend_start, widen_start) = end(start_corner, start_neighbour);
    let (extend_end, curb_extend_end, widen_end) = end(end_corner, end_neighbour);
    StripEnds {
        extend_start,
        extend_end,
        curb_extend_start,
        curb_extend_end,
        widen_start,
        widen_end,
    }
}
