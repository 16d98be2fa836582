//! # Corner Pieces
//!
//! Builds corner geometry in the canonical corner frame: the pad covers
//! `[0, a] x [0, b]` at footpath height and the curb wraps around its +x and
//! +z edges, away from the footprint rectangle.
//!
//! ```text
//!        z
//!        ^        apex
//!        B ----- C
//!        |  pad  |
//!        O ----- A ---> x
//! ```

use super::profile::{CurbProfile, Mitre};
use crate::error::MeshResult;
use crate::geometry::TaggedFace;
use crate::mesh::SurfaceTag;
use crate::quad::Quad;
use glam::DVec3;

/// Footpath and road heights shared by every piece of one footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    /// Footpath top
    pub footpath: f64,
    /// Road surface and gutter rim
    pub road: f64,
}

fn pad(a: f64, b: f64, height: f64) -> Quad {
    Quad::new([
        DVec3::new(0.0, height, 0.0),
        DVec3::new(a, height, 0.0),
        DVec3::new(a, height, b),
        DVec3::new(0.0, height, b),
    ])
}

/// Inward-facing corner: the curb turns around the pad's outer corner.
///
/// Produces 11 faces: pad, two skirts and their cap, two aprons and their
/// cap, two gutters, a gutter cap and the road apex.
pub fn inward_corner(a: f64, b: f64, curb: &CurbProfile, levels: Levels) -> MeshResult<Vec<TaggedFace>> {
    let pad = pad(a, b, levels.footpath);
    let corner = pad.points[2];

    // Pad edge 1 faces +x, edge 2 faces +z.
    let [skirt_x, apron_x, gutter_x] = curb.curb_run(&pad, 1, DVec3::X, levels.road, Mitre::default())?;
    let [skirt_z, apron_z, gutter_z] = curb.curb_run(&pad, 2, DVec3::Z, levels.road, Mitre::default())?;
    let skirt_x_corner = skirt_x.points[2];
    let skirt_z_corner = skirt_z.points[1];
    let apron_x_corner = apron_x.points[2];
    let apron_z_corner = apron_z.points[1];
    let gutter_x_corner = gutter_x.points[2];
    let gutter_z_corner = gutter_z.points[1];

    let reach = curb.reach();
    let apex = DVec3::new(a + reach, levels.road, b + reach);

    Ok(vec![
        TaggedFace::new(pad, SurfaceTag::Footpath),
        TaggedFace::new(skirt_x, SurfaceTag::CurbFace),
        TaggedFace::new(skirt_z, SurfaceTag::CurbFace),
        TaggedFace::new([corner, skirt_x_corner, skirt_z_corner], SurfaceTag::CurbFace),
        TaggedFace::new(apron_x, SurfaceTag::GutterDrop),
        TaggedFace::new(apron_z, SurfaceTag::GutterDrop),
        TaggedFace::new(
            [skirt_x_corner, apron_x_corner, apron_z_corner, skirt_z_corner],
            SurfaceTag::GutterDrop,
        ),
        TaggedFace::new(gutter_x, SurfaceTag::GutterRun),
        TaggedFace::new(gutter_z, SurfaceTag::GutterRun),
        TaggedFace::new(
            [apron_x_corner, gutter_x_corner, gutter_z_corner, apron_z_corner],
            SurfaceTag::GutterRun,
        ),
        TaggedFace::new([gutter_x_corner, apex, gutter_z_corner], SurfaceTag::Road),
    ])
}

/// Outward-facing corner: the curb turns the pad's outer corner on a mitre,
/// along the diagonal from the pad corner out to `(a + reach, b + reach)`.
///
/// Produces 7 faces: pad, then skirt, apron and gutter along the +x and +z
/// edges. Each run starts on the end profile of the strip it continues, so
/// no caps are needed.
pub fn outward_corner(a: f64, b: f64, curb: &CurbProfile, levels: Levels) -> MeshResult<Vec<TaggedFace>> {
    let pad = pad(a, b, levels.footpath);

    // Edge 1 ends at the outer corner, edge 2 starts there.
    let turn_x = Mitre {
        from: None,
        to: Some(DVec3::Z),
    };
    let turn_z = Mitre {
        from: Some(DVec3::X),
        to: None,
    };
    let [skirt_x, apron_x, gutter_x] = curb.curb_run(&pad, 1, DVec3::X, levels.road, turn_x)?;
    let [skirt_z, apron_z, gutter_z] = curb.curb_run(&pad, 2, DVec3::Z, levels.road, turn_z)?;

    Ok(vec![
        TaggedFace::new(pad, SurfaceTag::Footpath),
        TaggedFace::new(skirt_x, SurfaceTag::CurbFace),
        TaggedFace::new(skirt_z, SurfaceTag::CurbFace),
        TaggedFace::new(apron_x, SurfaceTag::GutterDrop),
        TaggedFace::new(apron_z, SurfaceTag::GutterDrop),
        TaggedFace::new(gutter_x, SurfaceTag::GutterRun),
        TaggedFace::new(gutter_z, SurfaceTag::GutterRun),
    ])
}
