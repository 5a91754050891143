//! Launch-condition and ball records with boundary validation.

use serde::{Deserialize, Serialize};

use crate::constants::{BALL_MASS_KG, BALL_RADIUS_M, MAX_BALL_SPEED_MPS, MAX_SPIN_RPM};
use crate::error::{FlightError, Result};

/// Measured or synthesized conditions of a single strike.
///
/// Produced by a launch monitor, UI, or the statistical generator, and
/// consumed once per simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters {
    /// Ball speed off the face (m/s)
    pub ball_speed_mps: f64,
    /// Launch angle above the horizon (deg)
    pub launch_angle_deg: f64,
    /// Backspin (rpm)
    pub backspin_rpm: f64,
    /// Sidespin (rpm); positive curves the ball right of the target line
    pub sidespin_rpm: f64,
    /// Face angle (deg, positive = open)
    pub face_angle_deg: f64,
    /// Attack angle (deg, positive = downward strike); recorded for
    /// statistics, not consumed by the force model
    pub attack_angle_deg: f64,
    /// Ball surface temperature (K); recorded for statistics
    pub ball_temperature_k: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        // A stock mid-iron strike.
        Self {
            ball_speed_mps: 48.0,
            launch_angle_deg: 16.0,
            backspin_rpm: 6000.0,
            sidespin_rpm: 0.0,
            face_angle_deg: 0.0,
            attack_angle_deg: 4.0,
            ball_temperature_k: 293.15,
        }
    }
}

impl LaunchParameters {
    /// Reject non-finite or out-of-range inputs before they reach the
    /// integrator, where they could produce nonsensical or non-terminating
    /// trajectories.
    pub fn validate(&self) -> Result<()> {
        FlightError::check_range("ball_speed_mps", self.ball_speed_mps, 0.0, MAX_BALL_SPEED_MPS)?;
        FlightError::check_range("launch_angle_deg", self.launch_angle_deg, -90.0, 90.0)?;
        FlightError::check_range("backspin_rpm", self.backspin_rpm, 0.0, MAX_SPIN_RPM)?;
        FlightError::check_range("sidespin_rpm", self.sidespin_rpm, -MAX_SPIN_RPM, MAX_SPIN_RPM)?;
        FlightError::check_range("face_angle_deg", self.face_angle_deg, -45.0, 45.0)?;
        FlightError::check_range("attack_angle_deg", self.attack_angle_deg, -45.0, 45.0)?;
        FlightError::check_range("ball_temperature_k", self.ball_temperature_k, 200.0, 400.0)?;
        Ok(())
    }
}

/// Physical ball parameters, constant per ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallProperties {
    /// Mass (kg)
    pub mass_kg: f64,
    /// Radius (m)
    pub radius_m: f64,
}

impl Default for BallProperties {
    /// The regulation ball.
    fn default() -> Self {
        Self {
            mass_kg: BALL_MASS_KG,
            radius_m: BALL_RADIUS_M,
        }
    }
}

impl BallProperties {
    /// Cross-sectional area πr² (m²).
    pub fn cross_section_m2(&self) -> f64 {
        std::f64::consts::PI * self.radius_m * self.radius_m
    }

    /// Diameter (m), the length scale Reynolds numbers use.
    pub fn diameter_m(&self) -> f64 {
        2.0 * self.radius_m
    }

    /// Mass and radius must both be strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        FlightError::check_range("ball_mass_kg", self.mass_kg, 1e-4, 1.0)?;
        FlightError::check_range("ball_radius_m", self.radius_m, 1e-4, 0.5)?;
        Ok(())
    }
}
