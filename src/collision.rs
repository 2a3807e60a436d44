//! Pairwise circle collision detection and response.
//!
//! Every unordered pair is checked — naive O(n²), no broad phase.  That is
//! the intended algorithm for this field size, not an oversight; the dot
//! count stays in the tens-to-hundreds where the constant factor of a
//! spatial structure would not pay for itself.
//!
//! Response is the simplified equal-mass elastic exchange: one positional
//! correction pushing the pair apart along the collision normal, then a
//! velocity exchange that swaps the normal components and keeps each dot's
//! own tangential component.  Not a mass-weighted conservation law.

use crate::dot::Dot;
use bevy::prelude::*;

/// Detect and resolve every overlapping pair in the field.
///
/// Pairs whose centres are within `distance_epsilon` of coincident are
/// skipped for the frame: there is no usable collision normal at zero
/// separation, and resolving anyway would push NaN into position state that
/// the additive integrator can never flush out.  Such a pair separates on a
/// later frame once integration moves either dot.
pub fn resolve_collisions(dots: &mut [Dot], distance_epsilon: f32) {
    let n = dots.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // Disjoint &mut access to slots i and j (i < j).
            let (head, tail) = dots.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let delta = b.position - a.position;
            let distance = delta.length();
            let radii = a.radius + b.radius;

            if distance >= radii {
                continue;
            }
            if distance <= distance_epsilon {
                // Coincident centres: no normal to resolve along.
                continue;
            }

            let angle = delta.y.atan2(delta.x);
            let normal = Vec2::new(angle.cos(), angle.sin());

            // Positional correction, applied exactly once: split the overlap
            // evenly, a away from b and b away from a.  Afterwards the pair
            // sits at exactly touching distance.
            let offset = normal * ((radii - distance) * 0.5);
            a.position -= offset;
            b.position += offset;

            // Velocity exchange: rotate each velocity into the collision
            // frame, swap the normal components, keep the tangentials,
            // rotate back.  Both dots are treated as equal unit mass.
            let heading_a = a.velocity.y.atan2(a.velocity.x);
            let heading_b = b.velocity.y.atan2(b.velocity.x);
            let speed_a = a.velocity.length();
            let speed_b = b.velocity.length();

            let normal_a = speed_a * (heading_a - angle).cos();
            let tangent_a = speed_a * (heading_a - angle).sin();
            let normal_b = speed_b * (heading_b - angle).cos();
            let tangent_b = speed_b * (heading_b - angle).sin();

            a.velocity = Vec2::new(
                normal_b * normal.x - tangent_a * normal.y,
                normal_b * normal.y + tangent_a * normal.x,
            );
            b.velocity = Vec2::new(
                normal_a * normal.x - tangent_b * normal.y,
                normal_a * normal.y + tangent_b * normal.x,
            );
        }
    }
}
