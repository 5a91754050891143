//! Per-club shot statistics and the synthetic launch generator.
//!
//! Profiles accumulate recorded shots incrementally (Welford's running
//! mean/variance, append-only history) and, once enough shots exist, can
//! synthesize new launch conditions by sampling each parameter from a
//! normal distribution via the Box-Muller transform, clamped to physically
//! valid ranges.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    GEN_MAX_FACE_ANGLE, GEN_MAX_LAUNCH_ANGLE, GEN_MAX_SIDESPIN, GEN_MIN_BALL_SPEED,
    MAX_BALL_SPEED_MPS, MAX_SPIN_RPM, MIN_PROFILE_SHOTS,
};
use crate::error::{FlightError, Result};
use crate::launch::LaunchParameters;

/// Incremental mean/variance accumulator (Welford's algorithm).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningStat {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStat {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance; zero until two values have been pushed.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// One standard-normal draw via the Box-Muller transform: two independent
/// uniforms in (0, 1] mapped through sqrt(-2 ln u₁)·cos(2π u₂).
fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std_dev * z
}

/// Aggregate launch statistics for one club, built from recorded shots.
///
/// Append-only: shots are recorded incrementally and never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubPerformanceProfile {
    club: String,
    history: Vec<LaunchParameters>,
    ball_speed: RunningStat,
    launch_angle: RunningStat,
    backspin: RunningStat,
    sidespin: RunningStat,
    face_angle: RunningStat,
    attack_angle: RunningStat,
    ball_temperature: RunningStat,
}

impl ClubPerformanceProfile {
    pub fn new(club: impl Into<String>) -> Self {
        Self {
            club: club.into(),
            history: Vec::new(),
            ball_speed: RunningStat::default(),
            launch_angle: RunningStat::default(),
            backspin: RunningStat::default(),
            sidespin: RunningStat::default(),
            face_angle: RunningStat::default(),
            attack_angle: RunningStat::default(),
            ball_temperature: RunningStat::default(),
        }
    }

    pub fn club(&self) -> &str {
        &self.club
    }

    pub fn shot_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[LaunchParameters] {
        &self.history
    }

    pub fn ball_speed(&self) -> &RunningStat {
        &self.ball_speed
    }

    pub fn launch_angle(&self) -> &RunningStat {
        &self.launch_angle
    }

    pub fn backspin(&self) -> &RunningStat {
        &self.backspin
    }

    /// Record one measured shot. Invalid launches are rejected so they
    /// cannot poison the running statistics.
    pub fn record(&mut self, shot: &LaunchParameters) -> Result<()> {
        shot.validate()?;
        self.ball_speed.push(shot.ball_speed_mps);
        self.launch_angle.push(shot.launch_angle_deg);
        self.backspin.push(shot.backspin_rpm);
        self.sidespin.push(shot.sidespin_rpm);
        self.face_angle.push(shot.face_angle_deg);
        self.attack_angle.push(shot.attack_angle_deg);
        self.ball_temperature.push(shot.ball_temperature_k);
        self.history.push(shot.clone());
        Ok(())
    }

    /// Synthesize a launch by sampling every parameter independently from
    /// this profile's statistics, clamped to physically valid ranges.
    ///
    /// Fails with [`FlightError::InsufficientSamples`] until at least
    /// `MIN_PROFILE_SHOTS` shots have been recorded.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<LaunchParameters> {
        if self.shot_count() < MIN_PROFILE_SHOTS {
            return Err(FlightError::InsufficientSamples {
                club: self.club.clone(),
                have: self.shot_count(),
                need: MIN_PROFILE_SHOTS,
            });
        }

        Ok(LaunchParameters {
            ball_speed_mps: sample_normal(rng, self.ball_speed.mean(), self.ball_speed.std_dev())
                .clamp(GEN_MIN_BALL_SPEED, MAX_BALL_SPEED_MPS),
            launch_angle_deg: sample_normal(
                rng,
                self.launch_angle.mean(),
                self.launch_angle.std_dev(),
            )
            .clamp(0.0, GEN_MAX_LAUNCH_ANGLE),
            backspin_rpm: sample_normal(rng, self.backspin.mean(), self.backspin.std_dev())
                .clamp(0.0, MAX_SPIN_RPM),
            sidespin_rpm: sample_normal(rng, self.sidespin.mean(), self.sidespin.std_dev())
                .clamp(-GEN_MAX_SIDESPIN, GEN_MAX_SIDESPIN),
            face_angle_deg: sample_normal(rng, self.face_angle.mean(), self.face_angle.std_dev())
                .clamp(-GEN_MAX_FACE_ANGLE, GEN_MAX_FACE_ANGLE),
            attack_angle_deg: sample_normal(
                rng,
                self.attack_angle.mean(),
                self.attack_angle.std_dev(),
            )
            .clamp(-GEN_MAX_FACE_ANGLE, GEN_MAX_FACE_ANGLE),
            ball_temperature_k: sample_normal(
                rng,
                self.ball_temperature.mean(),
                self.ball_temperature.std_dev(),
            )
            .clamp(250.0, 330.0),
        })
    }
}

/// Profiles keyed by club name.
///
/// A lookup miss and a profile that exists but is too thin are reported as
/// distinct errors, so callers can tell "never configured" from "needs more
/// shots".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    profiles: HashMap<String, ClubPerformanceProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shot for a club, creating its profile on first use.
    pub fn record(&mut self, club: &str, shot: &LaunchParameters) -> Result<()> {
        self.profiles
            .entry(club.to_string())
            .or_insert_with(|| ClubPerformanceProfile::new(club))
            .record(shot)
    }

    pub fn profile(&self, club: &str) -> Result<&ClubPerformanceProfile> {
        self.profiles
            .get(club)
            .ok_or_else(|| FlightError::UnknownClub {
                club: club.to_string(),
            })
    }

    pub fn synthesize<R: Rng + ?Sized>(&self, club: &str, rng: &mut R) -> Result<LaunchParameters> {
        self.profile(club)?.synthesize(rng)
    }

    pub fn clubs(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

/// Named launch presets for common clubs, used by the CLI and as seeds for
/// demos and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubClass {
    Driver,
    ThreeWood,
    FiveIron,
    SevenIron,
    PitchingWedge,
}

impl ClubClass {
    pub fn name(self) -> &'static str {
        match self {
            ClubClass::Driver => "driver",
            ClubClass::ThreeWood => "three_wood",
            ClubClass::FiveIron => "five_iron",
            ClubClass::SevenIron => "seven_iron",
            ClubClass::PitchingWedge => "pitching_wedge",
        }
    }

    /// A stock strike for this club.
    pub fn typical_launch(self) -> LaunchParameters {
        let (speed, angle, backspin) = match self {
            ClubClass::Driver => (75.0, 11.0, 2600.0),
            ClubClass::ThreeWood => (68.0, 12.5, 3400.0),
            ClubClass::FiveIron => (55.0, 14.5, 5000.0),
            ClubClass::SevenIron => (48.0, 17.0, 6500.0),
            ClubClass::PitchingWedge => (38.0, 24.0, 8500.0),
        };
        LaunchParameters {
            ball_speed_mps: speed,
            launch_angle_deg: angle,
            backspin_rpm: backspin,
            sidespin_rpm: 0.0,
            face_angle_deg: 0.0,
            attack_angle_deg: if matches!(self, ClubClass::Driver | ClubClass::ThreeWood) {
                -1.5
            } else {
                4.0
            },
            ball_temperature_k: 293.15,
        }
    }
}
