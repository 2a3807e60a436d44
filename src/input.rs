//! Pointer input: cursor tracking, button edges, and surface-size refresh.
//!
//! The window is the sole source of pointer truth.  These systems reduce it
//! to two plain resources — [`PointerState`] and [`SurfaceBounds`] — so the
//! motion and collision passes never touch window APIs and can run headless
//! in tests with synthetic values.

use crate::config::FieldConfig;
use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::dot::DotField;
use crate::motion;
use bevy::input::ButtonInput;
use bevy::prelude::*;

/// Live pointer position (surface coordinates, origin top-left, y down) and
/// primary-button state.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

/// Current drawing-surface size, refreshed from the primary window every
/// frame so window resizes take effect immediately.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceBounds {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

/// Copy the live window size into [`SurfaceBounds`].
pub fn surface_bounds_system(windows: Query<&Window>, mut bounds: ResMut<SurfaceBounds>) {
    let Ok(window) = windows.single() else {
        return;
    };
    bounds.width = window.width();
    bounds.height = window.height();
}

/// Track the cursor position while it is inside the window.
///
/// `cursor_position` is already in surface coordinates (origin top-left,
/// y down), the same frame the simulation runs in — no conversion needed.
/// When the cursor leaves the window the last known position is kept.
pub fn pointer_tracking_system(windows: Query<&Window>, mut pointer: ResMut<PointerState>) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        pointer.position = cursor;
    }
}

/// Handle button edges.
///
/// - Left press: enter the "pressed" state read by the integrator's homing
///   step.
/// - Left release: leave the pressed state and re-roll every dot's velocity
///   into the configured release range — a one-shot edge effect.
/// - Right press: append a burst of dots at the current pointer position.
pub fn pointer_button_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
    mut field: ResMut<DotField>,
    config: Res<FieldConfig>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        pointer.pressed = true;
    }

    if buttons.just_released(MouseButton::Left) {
        pointer.pressed = false;
        let mut rng = rand::thread_rng();
        motion::randomize_velocities(
            field.as_mut_slice(),
            config.release_speed_min,
            config.release_speed_max,
            &mut rng,
        );
    }

    if buttons.just_pressed(MouseButton::Right) {
        let mut rng = rand::thread_rng();
        let position = pointer.position;
        field.spawn_burst(&mut rng, config.spawn_burst_count, position, &config);
    }
}
