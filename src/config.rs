//! Runtime field configuration loaded from `assets/field.toml`.
//!
//! [`FieldConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_field_config`] reads
//! `assets/field.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about — e.g. the sparse
//! 20-dot drift preset sets only `seed_count = 20`.
//!
//! Loaded files are validated through [`crate::error`]; a file containing an
//! out-of-range value is rejected wholesale (with a warning) and the compiled
//! defaults stand.

use crate::constants::*;
use crate::error::{validate_pull_factor, validate_radius_range, validate_speed_range, SimResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable simulation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset via `assets/field.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // ── Field Population ─────────────────────────────────────────────────────
    pub seed_count: usize,
    pub spawn_burst_count: usize,

    // ── Dot Geometry ─────────────────────────────────────────────────────────
    pub radius_min: f32,
    pub radius_max: f32,

    // ── Motion ───────────────────────────────────────────────────────────────
    pub initial_speed_min: f32,
    pub initial_speed_max: f32,
    pub release_speed_min: f32,
    pub release_speed_max: f32,
    pub pointer_pull_factor: f32,

    // ── Colour ───────────────────────────────────────────────────────────────
    pub color_saturation: f32,
    pub color_lightness: f32,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub stats_font_size: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            // Field Population
            seed_count: SEED_COUNT,
            spawn_burst_count: SPAWN_BURST_COUNT,
            // Dot Geometry
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            // Motion
            initial_speed_min: INITIAL_SPEED_MIN,
            initial_speed_max: INITIAL_SPEED_MAX,
            release_speed_min: RELEASE_SPEED_MIN,
            release_speed_max: RELEASE_SPEED_MAX,
            pointer_pull_factor: POINTER_PULL_FACTOR,
            // Colour
            color_saturation: COLOR_SATURATION,
            color_lightness: COLOR_LIGHTNESS,
            // Rendering
            stats_font_size: STATS_FONT_SIZE,
        }
    }
}

impl FieldConfig {
    /// Check every loaded value against its safe range.
    ///
    /// Returns the first violation found; `Ok(())` means the whole config is
    /// usable as-is.
    pub fn validate(&self) -> SimResult<()> {
        validate_radius_range(self.radius_min, self.radius_max)?;
        validate_pull_factor(self.pointer_pull_factor)?;
        validate_speed_range("initial_speed", self.initial_speed_min, self.initial_speed_max)?;
        validate_speed_range("release_speed", self.release_speed_min, self.release_speed_max)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/field.toml` and overwrite the
/// [`FieldConfig`] resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse and validation errors
/// are printed to stderr but do not abort the simulation.  A missing file is
/// silently ignored (defaults are already in place from `insert_resource`).
pub fn load_field_config(mut config: ResMut<FieldConfig>) {
    let path = "assets/field.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<FieldConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    println!("✓ Loaded field config from {path}");
                }
                Err(e) => {
                    eprintln!("⚠ Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = FieldConfig::default();
        assert_eq!(config.seed_count, 60);
        assert_eq!(config.spawn_burst_count, 5);
        assert_eq!(config.radius_min, 20.0);
        assert_eq!(config.radius_max, 50.0);
        assert_eq!(config.initial_speed_min, -2.0);
        assert_eq!(config.initial_speed_max, 2.0);
        assert_eq!(config.release_speed_min, -2.0);
        assert_eq!(config.release_speed_max, 2.0);
        assert_eq!(config.pointer_pull_factor, 0.001);
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let loaded: FieldConfig = toml::from_str("seed_count = 20").unwrap();
        assert_eq!(loaded.seed_count, 20);
        // Everything else keeps the compiled default.
        assert_eq!(loaded.radius_max, 50.0);
        assert_eq!(loaded.release_speed_min, -2.0);
        assert_eq!(loaded.release_speed_max, 2.0);
    }

    #[test]
    fn positive_only_release_preset_round_trips() {
        // The down-right scatter variant: both release bounds positive.
        let loaded: FieldConfig =
            toml::from_str("release_speed_min = 4.0\nrelease_speed_max = 10.0").unwrap();
        assert_eq!(loaded.release_speed_min, 4.0);
        assert_eq!(loaded.release_speed_max, 10.0);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn inverted_release_range_fails_validation() {
        let loaded: FieldConfig =
            toml::from_str("release_speed_min = 10.0\nrelease_speed_max = 4.0").unwrap();
        assert!(loaded.validate().is_err());
    }

    #[test]
    fn inverted_radius_range_fails_validation() {
        let loaded: FieldConfig =
            toml::from_str("radius_min = 50.0\nradius_max = 20.0").unwrap();
        assert!(loaded.validate().is_err());
    }
}
