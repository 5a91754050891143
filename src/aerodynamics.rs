//! Aerodynamic force model: drag, Magnus lift, and sidespin forces.
//!
//! Drag uses a two-regime quadratic fit in Reynolds number; lift and side
//! coefficients share a single quadratic fit in the spin ratio for the
//! relevant axis. All forces are returned as accelerations (divided by the
//! ball mass), so the integrator just sums and steps.
//!
//! Frame convention: x toward the target, y up, z right of the target line.
//! Backspin rotates about +z; positive sidespin (open face) is a clockwise
//! rotation seen from above and curves the ball toward +z.

use nalgebra::Vector3;

use crate::atmosphere::AirProperties;
use crate::constants::{
    CD_HIGH_RE, CD_LOW_RE, GRAVITY_MPS2, LIFT_QUAD_A, LIFT_QUAD_B, REYNOLDS_REGIME_SPLIT,
    SPIN_DECAY_BASE,
};
use crate::launch::BallProperties;

/// Speed below which aerodynamic terms are dropped entirely.
const MIN_AERO_SPEED: f64 = 1e-6;

/// Reynolds number Re = |v|·d/ν.
pub fn reynolds_number(speed_mps: f64, diameter_m: f64, kinematic_viscosity: f64) -> f64 {
    speed_mps * diameter_m / kinematic_viscosity
}

/// Drag coefficient from the two-segment quadratic fit.
///
/// The subcritical curve applies below `REYNOLDS_REGIME_SPLIT`, the
/// supercritical curve above; the fitted coefficients are empirical, not
/// first-principles, and are pinned in `constants`.
pub fn drag_coefficient(reynolds: f64) -> f64 {
    let [a, b, c] = if reynolds < REYNOLDS_REGIME_SPLIT {
        CD_LOW_RE
    } else {
        CD_HIGH_RE
    };
    a * reynolds * reynolds + b * reynolds + c
}

/// Spin ratio S = ω·r/|v| for one spin axis, with ω in rad/s derived from
/// rpm. Returns zero at zero speed rather than dividing by it.
pub fn spin_ratio(spin_rpm: f64, radius_m: f64, speed_mps: f64) -> f64 {
    if speed_mps < MIN_AERO_SPEED {
        return 0.0;
    }
    let omega = spin_rpm * std::f64::consts::TAU / 60.0;
    omega * radius_m / speed_mps
}

/// Lift (or side) coefficient from the shared quadratic fit in spin ratio.
pub fn lift_coefficient(spin_ratio: f64) -> f64 {
    LIFT_QUAD_A * spin_ratio * spin_ratio + LIFT_QUAD_B * spin_ratio
}

/// Total acceleration on the ball: gravity plus drag, Magnus lift, and the
/// sidespin force, for the current velocity and spin state.
pub fn acceleration(
    velocity: &Vector3<f64>,
    backspin_rpm: f64,
    sidespin_rpm: f64,
    ball: &BallProperties,
    air: &AirProperties,
) -> Vector3<f64> {
    let mut acc = Vector3::new(0.0, -GRAVITY_MPS2, 0.0);

    let speed = velocity.norm();
    if speed < MIN_AERO_SPEED {
        return acc;
    }

    // q = ρ·A / (2m) converts coefficient·|v|² directly into acceleration.
    let q = air.density * ball.cross_section_m2() / (2.0 * ball.mass_kg);

    let re = reynolds_number(speed, ball.diameter_m(), air.kinematic_viscosity());
    let cd = drag_coefficient(re);
    acc -= velocity * (q * cd * speed);

    // Magnus lift: backspin about +z lifts the ball perpendicular to its
    // velocity in the vertical plane.
    let s_back = spin_ratio(backspin_rpm.abs(), ball.radius_m, speed);
    if s_back > 0.0 {
        let lift_dir = Vector3::z().cross(velocity);
        let norm = lift_dir.norm();
        if norm > MIN_AERO_SPEED {
            acc += lift_dir * (q * lift_coefficient(s_back) * speed * speed / norm);
        }
    }

    // Side force: positive sidespin is a clockwise rotation seen from above
    // (spin axis -y), pushing the ball right of the line.
    let s_side = spin_ratio(sidespin_rpm.abs(), ball.radius_m, speed);
    if s_side > 0.0 {
        let axis = Vector3::new(0.0, -sidespin_rpm.signum(), 0.0);
        let side_dir = axis.cross(velocity);
        let norm = side_dir.norm();
        if norm > MIN_AERO_SPEED {
            acc += side_dir * (q * lift_coefficient(s_side) * speed * speed / norm);
        }
    }

    acc
}

/// Continuous-time exponential spin decay applied per step:
/// `spin · base^dt`. Works on signed values, so sidespin keeps its sign.
pub fn decay_spin(spin_rpm: f64, dt: f64) -> f64 {
    spin_rpm * SPIN_DECAY_BASE.powf(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_air() -> AirProperties {
        AirProperties {
            density: 1.225,
            dynamic_viscosity: 1.802e-5,
        }
    }

    #[test]
    fn drag_curve_switches_regimes() {
        // Just below the split the subcritical fit applies; just above, the
        // supercritical one. The fitted curves are intentionally different.
        let below = drag_coefficient(REYNOLDS_REGIME_SPLIT - 1.0);
        let above = drag_coefficient(REYNOLDS_REGIME_SPLIT + 1.0);
        assert!((below - 0.1450).abs() < 1e-3, "got {below}");
        assert!((above - 0.1413).abs() < 1e-3, "got {above}");
        // Subcritical drag rises as Re falls; supercritical stays flat-ish.
        assert!(drag_coefficient(3.0e4) > below + 0.1);
        assert!((drag_coefficient(2.0e5) - above).abs() < 0.05);
    }

    #[test]
    fn drag_coefficient_plausible_at_driver_speed() {
        // ~70 m/s ball speed sits well into the supercritical regime.
        let air = still_air();
        let ball = BallProperties::default();
        let re = reynolds_number(70.0, ball.diameter_m(), air.kinematic_viscosity());
        let cd = drag_coefficient(re);
        assert!(re > REYNOLDS_REGIME_SPLIT);
        assert!(cd > 0.10 && cd < 0.25, "got {cd}");
    }

    #[test]
    fn spin_ratio_guards_zero_velocity() {
        assert_eq!(spin_ratio(3000.0, 0.02135, 0.0), 0.0);
    }

    #[test]
    fn lift_coefficient_rises_then_rolls_off() {
        // The quadratic peaks near S = 0.306; typical flight stays left of it.
        assert!(lift_coefficient(0.1) < lift_coefficient(0.2));
        assert!(lift_coefficient(0.0).abs() < 1e-12);
        let peak = LIFT_QUAD_B / (-2.0 * LIFT_QUAD_A);
        assert!(lift_coefficient(peak) > lift_coefficient(peak + 0.1));
    }

    #[test]
    fn drag_opposes_motion() {
        let air = still_air();
        let ball = BallProperties::default();
        let v = Vector3::new(40.0, 0.0, 0.0);
        let acc = acceleration(&v, 0.0, 0.0, &ball, &air);
        assert!(acc.x < 0.0, "drag should oppose +x motion, got {}", acc.x);
        assert!(acc.z.abs() < 1e-12);
    }

    #[test]
    fn backspin_lifts_the_ball() {
        let air = still_air();
        let ball = BallProperties::default();
        let v = Vector3::new(40.0, 0.0, 0.0);
        let no_spin = acceleration(&v, 0.0, 0.0, &ball, &air);
        let with_spin = acceleration(&v, 3000.0, 0.0, &ball, &air);
        assert!(
            with_spin.y > no_spin.y + 1.0,
            "backspin should add lift: {} vs {}",
            with_spin.y,
            no_spin.y
        );
    }

    #[test]
    fn positive_sidespin_pushes_right() {
        let air = still_air();
        let ball = BallProperties::default();
        let v = Vector3::new(40.0, 0.0, 0.0);
        let acc = acceleration(&v, 0.0, 1500.0, &ball, &air);
        assert!(acc.z > 0.0, "open-face sidespin should curve right, got {}", acc.z);
        let acc_left = acceleration(&v, 0.0, -1500.0, &ball, &air);
        assert!(acc_left.z < 0.0);
    }

    #[test]
    fn gravity_always_present() {
        let air = still_air();
        let ball = BallProperties::default();
        let acc = acceleration(&Vector3::zeros(), 3000.0, 0.0, &ball, &air);
        assert!((acc.y + GRAVITY_MPS2).abs() < 1e-12);
        assert_eq!(acc.x, 0.0);
    }

    #[test]
    fn spin_decay_is_monotone_and_time_consistent() {
        let spin = 3000.0;
        let one_step = decay_spin(spin, 1.0);
        assert!(one_step < spin);
        // Two half-second steps equal one one-second step.
        let split = decay_spin(decay_spin(spin, 0.5), 0.5);
        assert!((split - one_step).abs() < 1e-9);
        // Signed values keep their sign.
        assert!(decay_spin(-1000.0, 0.5) > -1000.0);
        assert!(decay_spin(-1000.0, 0.5) < 0.0);
    }
}
