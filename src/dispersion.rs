//! Shot dispersion analysis: many perturbed copies of a base launch,
//! simulated in parallel and reduced to per-field statistics.
//!
//! Perturbation samples are generated serially from the caller's RNG, then
//! the trajectories (pure functions of their inputs) are evaluated with
//! rayon. Rounds that fail to simulate are counted and skipped rather than
//! aborting the batch.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{FlightError, Result};
use crate::launch::LaunchParameters;
use crate::simulation::{FlightSimulator, ShotResult};

/// Standard deviations applied to the base launch, one per perturbed field.
#[derive(Debug, Clone)]
pub struct DispersionParams {
    pub rounds: usize,
    pub ball_speed_std: f64,
    pub launch_angle_std: f64,
    pub backspin_std: f64,
    pub sidespin_std: f64,
    pub face_angle_std: f64,
}

impl Default for DispersionParams {
    fn default() -> Self {
        Self {
            rounds: 500,
            ball_speed_std: 1.5,
            launch_angle_std: 1.0,
            backspin_std: 250.0,
            sidespin_std: 200.0,
            face_angle_std: 1.0,
        }
    }
}

/// Mean/std/min/max over one output field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldStats {
    fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        Self {
            mean,
            std: variance.sqrt(),
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Aggregate outcome of a dispersion run.
#[derive(Debug, Clone, Serialize)]
pub struct DispersionReport {
    pub rounds: usize,
    pub successful: usize,
    pub failed: usize,
    pub carry_m: FieldStats,
    pub total_m: FieldStats,
    pub max_height_m: FieldStats,
    pub lateral_m: FieldStats,
    pub flight_time_s: FieldStats,
}

fn normal(field: &'static str, mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|source| FlightError::Distribution { field, source })
}

/// Run `params.rounds` perturbed copies of `base` through a configured
/// simulator and reduce the results.
pub fn run_dispersion<R: Rng + ?Sized>(
    sim: &FlightSimulator<'_>,
    base: &LaunchParameters,
    params: &DispersionParams,
    rng: &mut R,
) -> Result<DispersionReport> {
    base.validate()?;

    let speed_dist = normal("ball_speed", base.ball_speed_mps, params.ball_speed_std)?;
    let angle_dist = normal("launch_angle", base.launch_angle_deg, params.launch_angle_std)?;
    let backspin_dist = normal("backspin", base.backspin_rpm, params.backspin_std)?;
    let sidespin_dist = normal("sidespin", base.sidespin_rpm, params.sidespin_std)?;
    let face_dist = normal("face_angle", base.face_angle_deg, params.face_angle_std)?;

    let launches: Vec<LaunchParameters> = (0..params.rounds)
        .map(|_| LaunchParameters {
            ball_speed_mps: speed_dist.sample(rng).max(0.0),
            launch_angle_deg: angle_dist.sample(rng).clamp(-90.0, 90.0),
            backspin_rpm: backspin_dist.sample(rng).max(0.0),
            sidespin_rpm: sidespin_dist.sample(rng),
            face_angle_deg: face_dist.sample(rng).clamp(-45.0, 45.0),
            ..base.clone()
        })
        .collect();

    let results: Vec<Option<ShotResult>> = launches
        .par_iter()
        .map(|launch| sim.run(launch).ok())
        .collect();

    let ok: Vec<&ShotResult> = results.iter().flatten().collect();
    let failed = params.rounds - ok.len();
    if ok.is_empty() {
        return Err(FlightError::NoSuccessfulRounds);
    }
    if failed > 0 {
        debug!("dispersion: {failed} of {} rounds failed", params.rounds);
    }

    let field = |f: fn(&ShotResult) -> f64| {
        FieldStats::from_samples(&ok.iter().map(|&r| f(r)).collect::<Vec<_>>())
    };

    Ok(DispersionReport {
        rounds: params.rounds,
        successful: ok.len(),
        failed,
        carry_m: field(|r| r.carry_m),
        total_m: field(|r| r.total_m),
        max_height_m: field(|r| r.max_height_m),
        lateral_m: field(|r| r.lateral_m),
        flight_time_s: field(|r| r.flight_time_s),
    })
}
