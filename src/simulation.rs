//! Simulation plugin: resources and the per-frame system chain.
//!
//! One display refresh drives one pass of
//! `input → integrate → resolve collisions` (rendering sync follows in
//! `main.rs`).  Bevy's winit runner with default vsync is the refresh
//! signal; the loop has no pause state and ends with the window.
//!
//! The physics systems are thin wrappers over the pure functions in
//! [`crate::motion`] and [`crate::collision`], so tests can either call
//! those directly or drive this plugin headless with synthetic resources.

use crate::collision;
use crate::config::FieldConfig;
use crate::constants::DISTANCE_EPSILON;
use crate::dot::DotField;
use crate::input::{self, PointerState, SurfaceBounds};
use crate::motion;
use bevy::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldConfig>()
            .init_resource::<DotField>()
            .init_resource::<PointerState>()
            .init_resource::<SurfaceBounds>()
            .add_systems(
                Update,
                (
                    input::surface_bounds_system,
                    input::pointer_tracking_system,
                    input::pointer_button_system,
                    integrate_system,
                    collision_system,
                )
                    .chain(),
            );
    }
}

/// Startup system: populate the field with the configured dot count.
///
/// Runs after the config loader so an overridden `seed_count` takes effect.
pub fn seed_field_system(
    mut field: ResMut<DotField>,
    config: Res<FieldConfig>,
    bounds: Res<SurfaceBounds>,
) {
    let mut rng = rand::thread_rng();
    field.seed(
        &mut rng,
        config.seed_count,
        bounds.width,
        bounds.height,
        &config,
    );
    println!("✓ Seeded field with {} dots", field.len());
}

/// Per-frame motion pass: pointer homing, Euler step, boundary reflection.
pub fn integrate_system(
    mut field: ResMut<DotField>,
    pointer: Res<PointerState>,
    bounds: Res<SurfaceBounds>,
    config: Res<FieldConfig>,
) {
    motion::integrate(
        field.as_mut_slice(),
        &pointer,
        bounds.width,
        bounds.height,
        config.pointer_pull_factor,
    );
}

/// Per-frame collision pass: naive pairwise detection and elastic exchange.
pub fn collision_system(mut field: ResMut<DotField>) {
    collision::resolve_collisions(field.as_mut_slice(), DISTANCE_EPSILON);
}
