//! # Footprint Configuration
//!
//! Serde-loadable description of one block: rectangle size, curb cross
//! section, per-corner pad sizes and per-side connectivity.

use super::placement::{corner_kind, CornerId, SideId};
use crate::error::{MeshError, MeshResult};
use crate::extrude::{DirectionSpace, ExtrudeSpec};
use crate::geometry::RigidPlacement;
use crate::quad::Quad;
use config::constants::{ConfigError, WeldConfig, NORMAL_TOLERANCE_DEGREES, POSITION_EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// CURB PROFILE
// =============================================================================

/// Cross section of the curb running along every footpath edge.
///
/// ```text
///  footpath ____
///               \  skirt (out skirt_out, down skirt_down)
///                |
///                |  apron (down gutter_depth)
///                |______ gutter (out gutter_width, to road height)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurbProfile {
    /// Horizontal run of the sloped curb face
    pub skirt_out: f64,
    /// Vertical drop of the sloped curb face
    pub skirt_down: f64,
    /// Vertical drop from the skirt into the gutter
    pub gutter_depth: f64,
    /// Horizontal run of the gutter floor
    pub gutter_width: f64,
}

impl CurbProfile {
    /// Creates a profile; see [`CurbProfile::validate`].
    pub fn new(skirt_out: f64, skirt_down: f64, gutter_depth: f64, gutter_width: f64) -> Self {
        Self {
            skirt_out,
            skirt_down,
            gutter_depth,
            gutter_width,
        }
    }

    /// Horizontal distance from the footpath edge to the gutter rim.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.skirt_out + self.gutter_width
    }

    /// Total drop from footpath top to gutter floor.
    #[inline]
    pub fn drop(&self) -> f64 {
        self.skirt_down + self.gutter_depth
    }

    /// Sloped curb face off a horizontal edge whose outward side is `outward`.
    pub fn skirt_spec(&self, outward: DVec3) -> ExtrudeSpec {
        ExtrudeSpec::AxisOffsets {
            offset: outward * self.skirt_out - DVec3::Y * self.skirt_down,
            project_to_edge_plane: true,
        }
    }

    /// Vertical drop into the gutter.
    pub fn apron_spec(&self) -> ExtrudeSpec {
        ExtrudeSpec::DirectionAndDistance {
            direction: DVec3::NEG_Y,
            space: DirectionSpace::World,
            distance: self.gutter_depth,
            clamp_to_edge_plane: true,
        }
    }

    /// Gutter floor running `gutter_width` out to the road surface.
    pub fn gutter_spec(&self, outward: DVec3, road_height: f64) -> ExtrudeSpec {
        ExtrudeSpec::ToWorldHeight {
            outward,
            out_amount: self.gutter_width,
            target_height: road_height,
        }
    }

    /// Skirt, apron and gutter grown off `edge` of `base`, facing `outward`.
    ///
    /// Each layer keeps the `[a, a', b', b]` extrusion layout, so its outer
    /// point at the edge's first end is index 1 and at the second end index
    /// 2. A mitred end slides those outer points by the layer's own run,
    /// which lets two runs meeting at a right angle share their corners.
    pub fn curb_run(
        &self,
        base: &Quad,
        edge: usize,
        outward: DVec3,
        road_height: f64,
        mitre: Mitre,
    ) -> MeshResult<[Quad; 3]> {
        let slide = |quad: &mut Quad, run: f64| {
            if let Some(direction) = mitre.from {
                quad.points[1] += direction * run;
            }
            if let Some(direction) = mitre.to {
                quad.points[2] += direction * run;
            }
        };

        let mut skirt = base.create_quad_from_extrusion(edge, &self.skirt_spec(outward))?;
        slide(&mut skirt, self.skirt_out);
        // The apron drops straight down from the already mitred skirt.
        let apron = skirt.create_quad_from_extrusion(1, &self.apron_spec())?;
        let mut gutter = apron.create_quad_from_extrusion(1, &self.gutter_spec(outward, road_height))?;
        slide(&mut gutter, self.gutter_width);

        Ok([skirt, apron, gutter])
    }

    /// Every dimension must be finite and non-negative.
    pub fn validate(&self) -> MeshResult<()> {
        let fields = [
            ("skirt_out", self.skirt_out),
            ("skirt_down", self.skirt_down),
            ("gutter_depth", self.gutter_depth),
            ("gutter_width", self.gutter_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(MeshError::invalid_input(format!(
                    "curb {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Right-angle turns at the ends of a curb run.
///
/// Each end names the direction its outer points slide along, usually the
/// outward direction of the run it meets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mitre {
    /// Turn at the source edge's first point
    pub from: Option<DVec3>,
    /// Turn at the source edge's second point
    pub to: Option<DVec3>,
}

// =============================================================================
// CORNERS AND SIDES
// =============================================================================

/// Corner pad extents along world X and world Z.
///
/// NW and SE pads are built rotated a quarter turn, so their canonical
/// extents are swapped; see [`CornerId::canonical_extents`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerSize {
    /// Extent along world X (width of the east/west footpath)
    pub x: f64,
    /// Extent along world Z (width of the north/south footpath)
    pub z: f64,
}

impl CornerSize {
    /// Creates a size.
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Square size.
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }
}

/// One side of the footprint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SideConfig {
    /// Side continues into a road connection
    #[serde(default)]
    pub connected: bool,
    /// Footpath strip width; `None` means no strip on this side
    #[serde(default)]
    pub footpath: Option<f64>,
}

impl SideConfig {
    /// A connected side with a footpath of `width`.
    pub fn connected(width: f64) -> Self {
        Self {
            connected: true,
            footpath: Some(width),
        }
    }

    /// An unconnected side, optionally with a footpath.
    pub fn open(footpath: Option<f64>) -> Self {
        Self {
            connected: false,
            footpath,
        }
    }
}

/// Whether generated faces carry a [`SurfaceTag`](crate::SurfaceTag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceTagging {
    /// Faces are tagged road, footpath, curb face or gutter
    #[default]
    Classified,
    /// Faces are submitted without tags
    Untagged,
}

impl SurfaceTagging {
    /// True when tags should reach the accumulator.
    #[inline]
    pub fn keeps_tags(self) -> bool {
        matches!(self, SurfaceTagging::Classified)
    }
}

/// Serializable weld tolerances, converted to [`WeldConfig`] at build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldSettings {
    /// Maximum distance between welded positions
    pub position_epsilon: f64,
    /// Maximum angle between welded normals, degrees
    pub normal_tolerance_degrees: f64,
    /// Reject zero-area faces instead of warning
    pub strict: bool,
}

impl Default for WeldSettings {
    fn default() -> Self {
        Self {
            position_epsilon: POSITION_EPSILON,
            normal_tolerance_degrees: NORMAL_TOLERANCE_DEGREES,
            strict: false,
        }
    }
}

impl WeldSettings {
    /// Validates and converts to a [`WeldConfig`].
    pub fn to_weld_config(&self) -> Result<WeldConfig, ConfigError> {
        let config = WeldConfig::new(self.position_epsilon, self.normal_tolerance_degrees)?;
        Ok(if self.strict { config.strict() } else { config })
    }
}

// =============================================================================
// FOOTPRINT
// =============================================================================

/// Everything needed to build one block's curbs, footpaths and corners.
///
/// Arrays are indexed by [`CornerId::index`] (NE, NW, SW, SE) and
/// [`SideId::index`] (N, E, S, W).
///
/// # Example
///
/// ```rust
/// use road_mesh::assembly::{CurbProfile, FootprintConfig};
///
/// let curb = CurbProfile::new(0.35, 0.05, 0.5, 0.5);
/// let config = FootprintConfig::uniform(30.0, 30.0, curb, 3.0);
/// assert!(config.validate().is_ok());
/// assert!((config.footpath_height() - 0.55).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintConfig {
    /// Rectangle extent along local X
    pub width: f64,
    /// Rectangle extent along local Z
    pub length: f64,
    /// Placement of the whole footprint
    #[serde(default)]
    pub placement: RigidPlacement,
    /// Height of the surrounding road
    #[serde(default)]
    pub road_height: f64,
    /// Footpath top; defaults to road height plus the curb drop
    #[serde(default)]
    pub footpath_height: Option<f64>,
    /// Curb cross section
    pub curb: CurbProfile,
    /// Corner pad sizes (NE, NW, SW, SE)
    pub corners: [CornerSize; 4],
    /// Side settings (N, E, S, W)
    pub sides: [SideConfig; 4],
    /// Surface classification
    #[serde(default)]
    pub tagging: SurfaceTagging,
    /// Weld tolerances
    #[serde(default)]
    pub weld: WeldSettings,
}

impl FootprintConfig {
    /// All sides connected with footpaths of `footpath_width`, square corners
    /// of the same size, road at height 0.
    pub fn uniform(width: f64, length: f64, curb: CurbProfile, footpath_width: f64) -> Self {
        Self {
            width,
            length,
            placement: RigidPlacement::IDENTITY,
            road_height: 0.0,
            footpath_height: None,
            curb,
            corners: [CornerSize::square(footpath_width); 4],
            sides: [SideConfig::connected(footpath_width); 4],
            tagging: SurfaceTagging::default(),
            weld: WeldSettings::default(),
        }
    }

    /// Footpath top height.
    pub fn footpath_height(&self) -> f64 {
        self.footpath_height
            .unwrap_or(self.road_height + self.curb.drop())
    }

    /// Settings for one side.
    #[inline]
    pub fn side(&self, side: SideId) -> &SideConfig {
        &self.sides[side.index()]
    }

    /// Pad size for one corner.
    #[inline]
    pub fn corner(&self, corner: CornerId) -> CornerSize {
        self.corners[corner.index()]
    }

    /// Checks dimensions, curb values, footpath widths and the sizes of
    /// corners that will be built.
    pub fn validate(&self) -> MeshResult<()> {
        for (name, value) in [("width", self.width), ("length", self.length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_input(format!(
                    "footprint {name} must be positive, got {value}"
                )));
            }
        }
        if !self.road_height.is_finite() {
            return Err(MeshError::invalid_input("road height must be finite"));
        }
        if !self.footpath_height().is_finite() {
            return Err(MeshError::invalid_input("footpath height must be finite"));
        }
        if !(self.placement.yaw_degrees.is_finite() && self.placement.translation.is_finite()) {
            return Err(MeshError::invalid_input("footprint placement must be finite"));
        }
        self.curb.validate()?;

        for side in SideId::ALL {
            if let Some(width) = self.side(side).footpath {
                if !width.is_finite() || width < 0.0 {
                    return Err(MeshError::invalid_input(format!(
                        "{side:?} footpath width must be finite and non-negative, got {width}"
                    )));
                }
            }
        }

        for corner in CornerId::ALL {
            let (first, second) = corner.sides();
            let built = corner_kind(self.side(first).connected, self.side(second).connected);
            let size = self.corner(corner);
            let positive = |v: f64| v.is_finite() && v > 0.0;
            if built.is_some() && !(positive(size.x) && positive(size.z)) {
                return Err(MeshError::invalid_input(format!(
                    "{corner:?} corner size must be positive, got {} x {}",
                    size.x, size.z
                )));
            }
        }

        self.weld.to_weld_config()?;
        Ok(())
    }
}
