/// Physical constants and fitted coefficients used by the flight model.

/// Gravitational acceleration applied by the integrator (m/s²)
pub const GRAVITY_MPS2: f64 = 9.81;

/// Standard gravity used in barometric pressure formulas (m/s²)
pub const G_STANDARD_MPS2: f64 = 9.80665;

/// Regulation ball mass (kg)
pub const BALL_MASS_KG: f64 = 0.0459;

/// Regulation ball radius (m)
pub const BALL_RADIUS_M: f64 = 0.02135;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY_AIR: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K))
pub const R_WATER_VAPOR: f64 = 461.495;

/// Air density at sea level, 15°C, dry (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Tropospheric temperature lapse rate (K/m)
pub const TROPOSPHERE_LAPSE_RATE: f64 = -0.0065;

// Sutherland's law reference values for the dynamic viscosity of air.
/// Reference temperature (K)
pub const SUTHERLAND_T0_K: f64 = 273.15;
/// Viscosity at the reference temperature (Pa·s)
pub const SUTHERLAND_MU0: f64 = 1.716e-5;
/// Sutherland constant for air (K)
pub const SUTHERLAND_S_K: f64 = 110.4;

/// Reynolds number at which the drag fit switches between the subcritical
/// and supercritical curves.
///
/// Both segments are empirical quadratic fits to dimpled-ball flight data,
/// Cd = a·Re² + b·Re + c, not first-principles physics. The switch point
/// and both coefficient sets are load-bearing for numerical parity and are
/// pinned by tests.
pub const REYNOLDS_REGIME_SPLIT: f64 = 7.5e4;

/// Drag fit coefficients [a, b, c] for Re below the regime split
pub const CD_LOW_RE: [f64; 3] = [4.76e-11, -9.05e-6, 0.556];

/// Drag fit coefficients [a, b, c] for Re at or above the regime split
pub const CD_HIGH_RE: [f64; 3] = [2.0e-12, -6.0e-7, 0.175];

// Lift/side coefficient fit C = LIFT_QUAD_A·S² + LIFT_QUAD_B·S, where S is
// the spin ratio for the relevant axis. The same curve serves both axes.
pub const LIFT_QUAD_A: f64 = -3.25;
pub const LIFT_QUAD_B: f64 = 1.99;

/// Per-second spin retention; spin is multiplied by `base^dt` each step
pub const SPIN_DECAY_BASE: f64 = 0.96;

/// Sidespin injected by face angle, in rpm per (m/s · sin(face))
pub const FACE_SIDESPIN_RPM_PER_MPS: f64 = 200.0;

// Wind couples into the ball as a direct velocity bias, scaled per axis.
// This is an empirical approximation, not a momentum-conserving force.
pub const WIND_COUPLING_HORIZONTAL: f64 = 0.12;
pub const WIND_COUPLING_VERTICAL: f64 = 0.03;

/// Default integration timestep (s)
pub const DEFAULT_TIMESTEP_S: f64 = 0.01;

/// Largest timestep the solver accepts (s)
pub const MAX_TIMESTEP_S: f64 = 0.1;

/// Hard iteration cap guaranteeing termination on any input
pub const MAX_ITERATIONS: u32 = 10_000;

/// Horizontal speed below which the ball is considered at rest (m/s)
pub const REST_SPEED_MPS: f64 = 0.1;

/// Forward acceleration from residual backspin while rolling,
/// in m/s² per 1000 rpm
pub const ROLL_SPIN_ACCEL_PER_KRPM: f64 = 0.15;

// Input validation bounds shared by the boundary checks and the generator
// clamps.
/// Fastest ball speed accepted (m/s)
pub const MAX_BALL_SPEED_MPS: f64 = 150.0;
/// Largest spin magnitude accepted (rpm)
pub const MAX_SPIN_RPM: f64 = 20_000.0;

// Statistical shot generation.
/// Minimum recorded shots before a profile can synthesize launches
pub const MIN_PROFILE_SHOTS: usize = 5;
/// Floor applied to synthesized ball speed (m/s)
pub const GEN_MIN_BALL_SPEED: f64 = 10.0;
/// Ceiling applied to synthesized launch angle (deg)
pub const GEN_MAX_LAUNCH_ANGLE: f64 = 45.0;
/// Magnitude bound for synthesized face/attack angles (deg)
pub const GEN_MAX_FACE_ANGLE: f64 = 15.0;
/// Magnitude bound for synthesized sidespin (rpm)
pub const GEN_MAX_SIDESPIN: f64 = 5000.0;
