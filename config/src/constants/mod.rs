//! Centralized tolerance values shared across the road mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default distance under which two positions weld into one vertex.
///
/// Also used as the bucket width of the accumulator's spatial hash.
///
/// # Examples
/// ```
/// use config::constants::POSITION_EPSILON;
/// let a = 1.0_f64;
/// let b = a + 0.5 * POSITION_EPSILON;
/// assert!((a - b).abs() <= POSITION_EPSILON);
/// ```
pub const POSITION_EPSILON: f64 = 1.0e-4;

/// Default angular tolerance (degrees) for treating two face normals as the
/// same plane orientation during welding.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE_DEGREES;
/// assert!(NORMAL_TOLERANCE_DEGREES > 0.0 && NORMAL_TOLERANCE_DEGREES < 90.0);
/// ```
pub const NORMAL_TOLERANCE_DEGREES: f64 = 1.0;

/// Edges shorter than this cannot define an extrusion frame.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_EDGE_EPSILON;
/// let edge_length = 0.0_f64;
/// assert!(edge_length < DEGENERATE_EDGE_EPSILON);
/// ```
pub const DEGENERATE_EDGE_EPSILON: f64 = 1.0e-9;

/// Cross products with a smaller magnitude are treated as zero-area faces
/// and fall back to the default up normal.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_AREA_EPSILON;
/// assert!(DEGENERATE_AREA_EPSILON < 1.0e-9);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-12;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Lower clamp (degrees) applied to angle-and-length extrusions.
///
/// # Examples
/// ```
/// use config::constants::MIN_EXTRUDE_ANGLE_DEGREES;
/// assert_eq!(0.0_f64.max(MIN_EXTRUDE_ANGLE_DEGREES), MIN_EXTRUDE_ANGLE_DEGREES);
/// ```
pub const MIN_EXTRUDE_ANGLE_DEGREES: f64 = 0.01;

/// Upper clamp (degrees) applied to angle-and-length extrusions.
///
/// # Examples
/// ```
/// use config::constants::MAX_EXTRUDE_ANGLE_DEGREES;
/// assert_eq!(90.0_f64.min(MAX_EXTRUDE_ANGLE_DEGREES), MAX_EXTRUDE_ANGLE_DEGREES);
/// ```
pub const MAX_EXTRUDE_ANGLE_DEGREES: f64 = 89.99;

// =============================================================================
// WELD CONFIGURATION
// =============================================================================

/// Tolerances used by the mesh accumulator when welding vertices.
///
/// # Examples
/// ```
/// use config::constants::WeldConfig;
/// let config = WeldConfig::default();
/// assert!(config.position_epsilon > 0.0);
/// assert!(!config.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeldConfig {
    /// Maximum distance between two welded positions.
    pub position_epsilon: f64,
    /// Maximum angle (degrees) between welded face planes, sign-agnostic.
    pub normal_tolerance_degrees: f64,
    /// Reject zero-area faces instead of substituting a fallback normal.
    pub strict: bool,
}

impl WeldConfig {
    /// Builds a permissive configuration, validating both tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::WeldConfig;
    /// let cfg = WeldConfig::new(1.0e-3, 5.0).expect("valid config");
    /// assert_eq!(cfg.normal_tolerance_degrees, 5.0);
    /// assert!(WeldConfig::new(0.0, 5.0).is_err());
    /// ```
    pub fn new(position_epsilon: f64, normal_tolerance_degrees: f64) -> Result<Self, ConfigError> {
        if !position_epsilon.is_finite() || position_epsilon <= 0.0 {
            return Err(ConfigError::InvalidTolerance(position_epsilon));
        }
        if !normal_tolerance_degrees.is_finite()
            || normal_tolerance_degrees < 0.0
            || normal_tolerance_degrees >= 90.0
        {
            return Err(ConfigError::InvalidAngle(normal_tolerance_degrees));
        }
        Ok(Self {
            position_epsilon,
            normal_tolerance_degrees,
            strict: false,
        })
    }

    /// Returns a copy that rejects degenerate faces.
    pub fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }

    /// Re-runs the constructor checks on an existing value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.position_epsilon, self.normal_tolerance_degrees).map(|_| ())
    }

    /// Minimum absolute dot product for two unit normals to count as coplanar.
    ///
    /// # Examples
    /// ```
    /// use config::constants::WeldConfig;
    /// let cfg = WeldConfig::new(1.0e-4, 0.0).unwrap();
    /// assert_eq!(cfg.normal_cos_threshold(), 1.0);
    /// ```
    #[inline]
    pub fn normal_cos_threshold(&self) -> f64 {
        self.normal_tolerance_degrees.to_radians().cos()
    }
}

impl Default for WeldConfig {
    fn default() -> Self {
        Self {
            position_epsilon: POSITION_EPSILON,
            normal_tolerance_degrees: NORMAL_TOLERANCE_DEGREES,
            strict: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a distance tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when an angular tolerance is outside `[0, 90)` degrees.
    InvalidAngle(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "position tolerance must be positive: {value}")
            }
            ConfigError::InvalidAngle(value) => {
                write!(f, "normal tolerance must be within [0, 90) degrees: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
