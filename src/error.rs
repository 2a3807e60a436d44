//! Simulation-specific error types.
//!
//! The frame loop itself has no recoverable errors — pointer coordinates and
//! random draws are well-formed by construction, and the one latent numeric
//! hazard (the zero-distance collision pair) is guarded in
//! [`crate::collision`] rather than surfaced as an error.  What remains is
//! configuration: values loaded from `assets/field.toml` are validated here
//! before they replace the compiled defaults.

use std::fmt;

/// Top-level error enum for the dotfield simulation.
#[derive(Debug)]
pub enum SimError {
    /// A configuration value is outside its safe operating range.
    UnsafeConfigValue {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The radius range is empty or inverted (`radius_min >= radius_max`).
    EmptyRadiusRange {
        min: f32,
        max: f32,
    },

    /// A speed range is empty, inverted, or non-finite.
    EmptySpeedRange {
        /// Name of the range (for logging), e.g. `release_speed`.
        name: &'static str,
        min: f32,
        max: f32,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnsafeConfigValue {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::EmptyRadiusRange { min, max } => write!(
                f,
                "radius range [{}, {}) is empty; radius_min must be positive and below radius_max",
                min, max
            ),
            SimError::EmptySpeedRange { name, min, max } => write!(
                f,
                "{} range [{}, {}) is empty; the minimum must be finite and below the maximum",
                name, min, max
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `radius_min` and `radius_max` form a non-empty
/// positive range.  A non-positive radius would render nothing and break the
/// overlap test.
pub fn validate_radius_range(min: f32, max: f32) -> SimResult<()> {
    if min <= 0.0 || !(min < max) {
        Err(SimError::EmptyRadiusRange { min, max })
    } else {
        Ok(())
    }
}

/// Returns an error if `pointer_pull_factor` is negative or large enough to
/// overshoot the pointer in a single frame at screen-scale distances.
pub fn validate_pull_factor(value: f32) -> SimResult<()> {
    if !(0.0..=1.0).contains(&value) {
        Err(SimError::UnsafeConfigValue {
            name: "pointer_pull_factor",
            value,
            safe_range: "[0.0, 1.0]",
        })
    } else {
        Ok(())
    }
}

/// Returns an error unless `[min, max)` is a non-empty finite speed range.
///
/// The bounds are independent — a positive-only range like `[4, 10)` is
/// valid and sends every dot in the same quadrant on release.
pub fn validate_speed_range(name: &'static str, min: f32, max: f32) -> SimResult<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        Err(SimError::EmptySpeedRange { name, min, max })
    } else {
        Ok(())
    }
}
