//! Ground interaction: bounce resolution and rolling.
//!
//! Incoming velocity is decomposed against the contact normal. A rebound
//! whose apex would not clear the ball radius (or any contact with sand)
//! becomes a rolling transition; everything else is a true bounce with
//! surface-dependent restitution and friction. Spin is damped by the same
//! tangential retention factor a bounce applies to velocity.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{GRAVITY_MPS2, REST_SPEED_MPS, ROLL_SPIN_ACCEL_PER_KRPM};

/// Surface category under the ball at contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    /// Firm fairway or links turf
    Hard,
    /// Receptive green or soft fairway
    Soft,
    /// Bunker sand; kills the bounce almost entirely
    Sand,
}

impl SurfaceType {
    /// Coefficient of restitution for the normal velocity component.
    ///
    /// Fitted constants; the ordering hard > soft > sand is relied on by
    /// callers and locked by tests.
    pub fn restitution(self) -> f64 {
        match self {
            SurfaceType::Hard => 0.9,
            SurfaceType::Soft => 0.675,
            SurfaceType::Sand => 0.05,
        }
    }

    /// Tangential friction retention entering the bounce formula.
    pub fn friction(self) -> f64 {
        match self {
            SurfaceType::Hard => 0.75,
            SurfaceType::Soft => 0.55,
            SurfaceType::Sand => 0.30,
        }
    }

    /// Rolling-resistance deceleration (m/s²) once the ball is on the turf.
    ///
    /// Sand takes the full landing speed into the roll (it never bounces),
    /// so its resistance is far above the turf values.
    pub fn rolling_resistance(self) -> f64 {
        match self {
            SurfaceType::Hard => 1.2,
            SurfaceType::Soft => 2.5,
            SurfaceType::Sand => 15.0,
        }
    }
}

/// Snapshot emitted once per ground contact, for external consumers
/// (audio, particles, persistence). The core has no dependency on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BounceEvent {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub surface: SurfaceType,
}

/// Subscriber for ground-contact events.
pub trait BounceObserver {
    fn on_bounce(&mut self, event: &BounceEvent);
}

/// Observer that ignores every event; used by the run-to-completion solver
/// when the caller has nothing subscribed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BounceObserver for NullObserver {
    fn on_bounce(&mut self, _event: &BounceEvent) {}
}

/// Observer that appends every event to a vector, for hosts (and tests)
/// that want the contact history after the fact.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<BounceEvent>,
}

impl BounceObserver for RecordingObserver {
    fn on_bounce(&mut self, event: &BounceEvent) {
        self.events.push(event.clone());
    }
}

/// What the resolver decided for this contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The ball rebounded and is airborne again.
    Bounced,
    /// The rebound would not clear the ball radius (or the surface is
    /// sand): vertical motion is absorbed and the ball rolls.
    Rolling,
}

/// Resolve one ground contact in place.
///
/// `velocity` and the spin components are updated; the caller owns the
/// bounce counter and event emission so that each invocation is counted
/// exactly once.
pub fn resolve_contact(
    velocity: &mut Vector3<f64>,
    backspin_rpm: &mut f64,
    sidespin_rpm: &mut f64,
    normal: &Vector3<f64>,
    surface: SurfaceType,
    ball_radius_m: f64,
) -> ContactOutcome {
    let normal_speed = velocity.dot(normal);
    let v_normal = normal * normal_speed;
    let v_tangent = *velocity - v_normal;

    let cor = surface.restitution();
    let rebound_speed = normal_speed.abs() * cor;
    let rebound_apex = rebound_speed * rebound_speed / (2.0 * GRAVITY_MPS2);

    if rebound_apex <= ball_radius_m || surface == SurfaceType::Sand {
        // Rolling transition: vertical motion absorbed, tangential kept.
        *velocity = v_tangent;
        return ContactOutcome::Rolling;
    }

    let retention = (cor + surface.friction()) / 2.0;
    *velocity = v_tangent * retention - v_normal * cor;
    *backspin_rpm *= retention;
    *sidespin_rpm *= retention;
    ContactOutcome::Bounced
}

/// Acceleration on a rolling ball: rolling resistance opposing motion plus
/// a forward push from residual backspin. Purely horizontal.
pub fn rolling_acceleration(
    velocity: &Vector3<f64>,
    backspin_rpm: f64,
    surface: SurfaceType,
) -> Vector3<f64> {
    let horizontal = Vector3::new(velocity.x, 0.0, velocity.z);
    let speed = horizontal.norm();
    if speed < REST_SPEED_MPS {
        return Vector3::zeros();
    }
    let direction = horizontal / speed;
    let drive = backspin_rpm / 1000.0 * ROLL_SPIN_ACCEL_PER_KRPM;
    direction * (drive - surface.rolling_resistance())
}
