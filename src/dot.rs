//! The dot entity and the shared field store.
//!
//! A [`Dot`] is a plain data struct — the simulation mutates position and
//! velocity every frame, while radius and colour are fixed at creation.
//! [`DotField`] is the single session-wide store: an insertion-ordered,
//! append-only `Vec` held as a Bevy [`Resource`] and injected into every
//! system that needs it.  Dots are never removed; the field only grows.
//!
//! Random draws go through `&mut impl Rng` so callers can pass
//! `rand::thread_rng()` in the app and a seeded `StdRng` in tests.

use crate::config::FieldConfig;
use bevy::prelude::*;
use rand::Rng;

/// One circular simulated body.
#[derive(Debug, Clone, Copy)]
pub struct Dot {
    /// Centre in surface coordinates (origin top-left, y down).
    pub position: Vec2,
    /// Radius in logical pixels; strictly positive, fixed at creation.
    pub radius: f32,
    /// Velocity in pixels per frame (unit-step integration, no delta time).
    pub velocity: Vec2,
    /// Fill colour; fixed at creation.
    pub color: Color,
}

/// The session-wide dot store: insertion-ordered and append-only.
///
/// Painting follows insertion order, so later-spawned dots render on top of
/// earlier ones where they overlap.
#[derive(Resource, Debug, Clone, Default)]
pub struct DotField {
    dots: Vec<Dot>,
}

impl DotField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the field with `count` dots uniformly distributed over
    /// `[0, width) × [0, height)`, with radius, velocity, and colour drawn
    /// from the configured distributions.
    pub fn seed(
        &mut self,
        rng: &mut impl Rng,
        count: usize,
        width: f32,
        height: f32,
        config: &FieldConfig,
    ) {
        self.dots.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
            self.dots.push(random_dot(rng, position, config));
        }
    }

    /// Append `count` dots at a fixed point, with the same radius, velocity,
    /// and colour distributions as [`DotField::seed`].
    pub fn spawn_burst(
        &mut self,
        rng: &mut impl Rng,
        count: usize,
        position: Vec2,
        config: &FieldConfig,
    ) {
        self.dots.reserve(count);
        for _ in 0..count {
            self.dots.push(random_dot(rng, position, config));
        }
    }

    /// Append a single dot.  The only mutation besides per-frame state
    /// updates — there is no removal.
    pub fn push(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    /// Number of dots currently in the field.  Monotonically non-decreasing
    /// over the session.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Dot at a given store slot, if it exists.
    pub fn get(&self, index: usize) -> Option<&Dot> {
        self.dots.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Ordered read iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter()
    }

    /// Ordered mutable iteration for the integrator.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Dot> {
        self.dots.iter_mut()
    }

    /// Full mutable slice for the pairwise collision pass.
    pub fn as_mut_slice(&mut self) -> &mut [Dot] {
        &mut self.dots
    }
}

/// Draw one dot at `position` from the configured distributions.
fn random_dot(rng: &mut impl Rng, position: Vec2, config: &FieldConfig) -> Dot {
    let velocity = Vec2::new(
        rng.gen_range(config.initial_speed_min..config.initial_speed_max),
        rng.gen_range(config.initial_speed_min..config.initial_speed_max),
    );
    Dot {
        position,
        radius: rng.gen_range(config.radius_min..config.radius_max),
        velocity,
        color: random_dot_color(rng, config),
    }
}

/// Random dot colour: uniform hue, fixed saturation and lightness.
pub fn random_dot_color(rng: &mut impl Rng, config: &FieldConfig) -> Color {
    let hue = rng.gen_range(0.0..360.0);
    Color::hsl(hue, config.color_saturation, config.color_lightness)
}
