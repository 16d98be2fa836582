//! # Footpath Strips
//!
//! One straight strip per side, in the canonical side frame: local +x runs
//! along the side from its start corner, local +z points toward the road.

use super::corner::Levels;
use super::profile::{CurbProfile, Mitre};
use crate::error::MeshResult;
use crate::geometry::TaggedFace;
use crate::mesh::SurfaceTag;
use crate::quad::Quad;
use glam::DVec3;

/// How a strip meets its neighbours at either end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripEnds {
    /// Extra pad and curb length before local x = 0
    pub extend_start: f64,
    /// Extra pad and curb length past the side end
    pub extend_end: f64,
    /// Extra curb length before the pad start, closing a neighbour's pad
    pub curb_extend_start: f64,
    /// Extra curb length past the pad end, closing a neighbour's pad
    pub curb_extend_end: f64,
    /// Mitre the curb into the neighbouring strip's curb at the start
    pub widen_start: bool,
    /// Mitre the curb into the neighbouring strip's curb at the end
    pub widen_end: bool,
}

/// Builds pad, skirt, apron and gutter for a side of `length` with a
/// footpath `depth` deep.
///
/// A widened end turns every curb layer outward by its own run, so the
/// gutter rim ends `reach` past the curb line along the side.
pub fn footpath_strip(
    length: f64,
    depth: f64,
    ends: StripEnds,
    curb: &CurbProfile,
    levels: Levels,
) -> MeshResult<Vec<TaggedFace>> {
    let h = levels.footpath;
    let x0 = -ends.extend_start.max(0.0);
    let x1 = length + ends.extend_end.max(0.0);
    let pad = slab(x0, x1, depth, h);

    let curb_line = slab(
        x0 - ends.curb_extend_start.max(0.0),
        x1 + ends.curb_extend_end.max(0.0),
        depth,
        h,
    );

    // Edge 2 faces the road and runs from the end back to the start.
    let mitre = Mitre {
        from: ends.widen_end.then_some(DVec3::X),
        to: ends.widen_start.then_some(DVec3::NEG_X),
    };
    let [skirt, apron, gutter] = curb.curb_run(&curb_line, 2, DVec3::Z, levels.road, mitre)?;

    Ok(vec![
        TaggedFace::new(pad, SurfaceTag::Footpath),
        TaggedFace::new(skirt, SurfaceTag::CurbFace),
        TaggedFace::new(apron, SurfaceTag::GutterDrop),
        TaggedFace::new(gutter, SurfaceTag::GutterRun),
    ])
}

fn slab(x0: f64, x1: f64, depth: f64, height: f64) -> Quad {
    Quad::new([
        DVec3::new(x0, height, 0.0),
        DVec3::new(x1, height, 0.0),
        DVec3::new(x1, height, depth),
        DVec3::new(x0, height, depth),
    ])
}
