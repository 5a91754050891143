//! Trajectory integration: a deterministic stepper and the solvers on top.
//!
//! The integrator is a fixed-timestep explicit Euler loop over two macro
//! states, airborne and rolling, with the ground resolver handling the
//! transition. `FlightSimulator::step` advances exactly one timestep;
//! `run`/`run_with_observer` loop it to completion, and interactive hosts
//! can call `step` once per tick instead. Both modes produce identical
//! numerical results because they share the same function.
//!
//! Each call owns its `SimulationState`, so independent trajectories can run
//! in parallel against one shared environment (see [`simulate_batch`]).

use log::{debug, warn};
use nalgebra::Vector3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aerodynamics::{acceleration, decay_spin};
use crate::atmosphere::AirProperties;
use crate::constants::{
    DEFAULT_TIMESTEP_S, FACE_SIDESPIN_RPM_PER_MPS, MAX_ITERATIONS, MAX_TIMESTEP_S, REST_SPEED_MPS,
    WIND_COUPLING_HORIZONTAL, WIND_COUPLING_VERTICAL,
};
use crate::environment::EnvironmentalConditions;
use crate::error::{FlightError, Result};
use crate::ground::{
    resolve_contact, rolling_acceleration, BounceEvent, BounceObserver, ContactOutcome,
    NullObserver, SurfaceType,
};
use crate::launch::{BallProperties, LaunchParameters};

/// Mutable per-shot integration state.
///
/// Created by [`FlightSimulator::initial_state`], mutated once per step,
/// reduced into a [`ShotResult`] when the ball settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub backspin_rpm: f64,
    pub sidespin_rpm: f64,
    pub time_s: f64,
    pub iterations: u32,
    pub max_height_m: f64,
    pub bounce_count: u32,
    /// True until the first ground contact, then false forever.
    pub carrying: bool,
    /// True once the resolver has handed the ball over to rolling.
    pub rolling: bool,
    carry_position: Option<Vector3<f64>>,
    carry_time_s: Option<f64>,
}

impl SimulationState {
    fn horizontal_speed(&self) -> f64 {
        (self.velocity.x * self.velocity.x + self.velocity.z * self.velocity.z).sqrt()
    }

    /// The loop keeps going while the ball still moves horizontally or is
    /// climbing.
    pub fn in_motion(&self) -> bool {
        self.horizontal_speed() > REST_SPEED_MPS || self.velocity.y > 0.0
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The ball is still moving; keep stepping.
    Active,
    /// The ball has come to rest.
    Settled,
    /// The iteration cap fired; the state is frozen and the extracted
    /// result will carry `converged = false`.
    IterationCapped,
}

/// Final flight metrics returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    pub final_position: Vector3<f64>,
    /// Planar distance from launch to first ground contact (m)
    pub carry_m: f64,
    /// Planar distance from launch to rest or simulation end (m)
    pub total_m: f64,
    /// Elapsed time at first ground contact (s)
    pub flight_time_s: f64,
    /// Highest point reached (m)
    pub max_height_m: f64,
    /// Signed perpendicular distance from the target line at rest;
    /// positive = right of the line (m)
    pub lateral_m: f64,
    pub bounce_count: u32,
    /// False when the iteration cap terminated the run, meaning the
    /// metrics describe a truncated trajectory.
    pub converged: bool,
}

/// Signed lateral deviation of a planar displacement from the target line.
///
/// The 2D cross product of the line direction with the displacement in the
/// ground plane; the sign is kept so a right miss reads positive.
pub fn lateral_deviation(target_line: &Vector3<f64>, displacement: &Vector3<f64>) -> f64 {
    let norm = (target_line.x * target_line.x + target_line.z * target_line.z).sqrt();
    if norm < f64::EPSILON {
        return 0.0;
    }
    (target_line.x * displacement.z - target_line.z * displacement.x) / norm
}

/// Configured simulator for one ball/environment/surface combination.
///
/// Construction derives the air state and wind vector once; the simulator
/// is then immutable and can serve any number of shots, concurrently if
/// desired.
pub struct FlightSimulator<'e> {
    ball: BallProperties,
    env: &'e EnvironmentalConditions,
    surface: SurfaceType,
    dt: f64,
    air: AirProperties,
    wind: Vector3<f64>,
}

impl<'e> FlightSimulator<'e> {
    pub fn new(
        ball: BallProperties,
        env: &'e EnvironmentalConditions,
        surface: SurfaceType,
    ) -> Result<Self> {
        ball.validate()?;
        Ok(Self {
            ball,
            env,
            surface,
            dt: DEFAULT_TIMESTEP_S,
            air: env.air_properties(),
            wind: env.wind_vector(),
        })
    }

    /// Override the integration timestep (s).
    pub fn with_timestep(mut self, dt: f64) -> Result<Self> {
        FlightError::check_range("timestep_s", dt, 1e-5, MAX_TIMESTEP_S)?;
        self.dt = dt;
        Ok(self)
    }

    pub fn ball(&self) -> &BallProperties {
        &self.ball
    }

    pub fn environment(&self) -> &EnvironmentalConditions {
        self.env
    }

    pub fn surface(&self) -> SurfaceType {
        self.surface
    }

    /// Build the initial state for a validated launch.
    ///
    /// The initial velocity splits into forward/vertical components from the
    /// launch angle, and the horizontal part is rotated by the face angle;
    /// an open face also injects sidespin proportional to sin(face).
    pub fn initial_state(&self, launch: &LaunchParameters) -> Result<SimulationState> {
        launch.validate()?;

        let angle = launch.launch_angle_deg.to_radians();
        let face = launch.face_angle_deg.to_radians();
        let horizontal = launch.ball_speed_mps * angle.cos();

        let velocity = Vector3::new(
            horizontal * face.cos(),
            launch.ball_speed_mps * angle.sin(),
            horizontal * face.sin(),
        );
        let sidespin =
            launch.sidespin_rpm + launch.ball_speed_mps * face.sin() * FACE_SIDESPIN_RPM_PER_MPS;

        Ok(SimulationState {
            position: Vector3::zeros(),
            velocity,
            backspin_rpm: launch.backspin_rpm,
            sidespin_rpm: sidespin,
            time_s: 0.0,
            iterations: 0,
            max_height_m: 0.0,
            bounce_count: 0,
            carrying: true,
            rolling: false,
            carry_position: None,
            carry_time_s: None,
        })
    }

    /// Advance the state by one timestep.
    ///
    /// Deterministic and side-effect free apart from the state mutation and
    /// observer callbacks, so per-frame hosts and the run-to-completion
    /// solver get bit-identical trajectories.
    pub fn step<O: BounceObserver>(
        &self,
        state: &mut SimulationState,
        observer: &mut O,
    ) -> StepStatus {
        if !state.in_motion() {
            return StepStatus::Settled;
        }
        if state.iterations >= MAX_ITERATIONS {
            return StepStatus::IterationCapped;
        }
        state.iterations += 1;

        state.backspin_rpm = decay_spin(state.backspin_rpm, self.dt);
        state.sidespin_rpm = decay_spin(state.sidespin_rpm, self.dt);

        if state.rolling {
            self.step_rolling(state);
        } else {
            self.step_airborne(state, observer);
        }

        state.time_s += self.dt;
        if state.in_motion() {
            StepStatus::Active
        } else {
            debug!(
                "ball settled after {} steps, {} bounce(s)",
                state.iterations, state.bounce_count
            );
            StepStatus::Settled
        }
    }

    fn step_airborne<O: BounceObserver>(&self, state: &mut SimulationState, observer: &mut O) {
        let acc = acceleration(
            &state.velocity,
            state.backspin_rpm,
            state.sidespin_rpm,
            &self.ball,
            &self.air,
        );
        state.velocity += acc * self.dt;

        // Wind enters as a direct velocity bias with per-axis coupling, an
        // approximation rather than a momentum-conserving force.
        state.velocity.x += self.wind.x * WIND_COUPLING_HORIZONTAL * self.dt;
        state.velocity.y += self.wind.y * WIND_COUPLING_VERTICAL * self.dt;
        state.velocity.z += self.wind.z * WIND_COUPLING_HORIZONTAL * self.dt;

        state.position += state.velocity * self.dt;

        if state.position.y > state.max_height_m {
            state.max_height_m = state.position.y;
        }

        // Ground plane crossing while descending hands off to the resolver.
        if state.position.y <= 0.0 && state.velocity.y < 0.0 {
            state.position.y = 0.0;

            if state.carrying {
                state.carrying = false;
                state.carry_position = Some(state.position);
                state.carry_time_s = Some(state.time_s + self.dt);
            }

            let outcome = resolve_contact(
                &mut state.velocity,
                &mut state.backspin_rpm,
                &mut state.sidespin_rpm,
                &Vector3::y(),
                self.surface,
                self.ball.radius_m,
            );
            state.bounce_count += 1;
            observer.on_bounce(&BounceEvent {
                position: state.position,
                velocity: state.velocity,
                surface: self.surface,
            });

            if outcome == ContactOutcome::Rolling {
                debug!(
                    "rolling transition at {:.1} m after {} bounce(s)",
                    (state.position.x * state.position.x + state.position.z * state.position.z)
                        .sqrt(),
                    state.bounce_count
                );
                state.rolling = true;
            }
        }
    }

    fn step_rolling(&self, state: &mut SimulationState) {
        let acc = rolling_acceleration(&state.velocity, state.backspin_rpm, self.surface);
        state.velocity += acc * self.dt;
        state.velocity.y = 0.0;

        if state.horizontal_speed() < REST_SPEED_MPS {
            state.velocity = Vector3::zeros();
            return;
        }
        state.position += state.velocity * self.dt;
        state.position.y = 0.0;
    }

    /// Run a launch to completion with no bounce subscriber.
    pub fn run(&self, launch: &LaunchParameters) -> Result<ShotResult> {
        self.run_with_observer(launch, &mut NullObserver)
    }

    /// Run a launch to completion, forwarding every ground contact to the
    /// observer.
    pub fn run_with_observer<O: BounceObserver>(
        &self,
        launch: &LaunchParameters,
        observer: &mut O,
    ) -> Result<ShotResult> {
        let mut state = self.initial_state(launch)?;
        let converged = loop {
            match self.step(&mut state, observer) {
                StepStatus::Active => continue,
                StepStatus::Settled => break true,
                StepStatus::IterationCapped => {
                    warn!(
                        "iteration cap ({}) reached; returning truncated trajectory",
                        MAX_ITERATIONS
                    );
                    break false;
                }
            }
        };
        Ok(self.extract_result(&state, converged))
    }

    /// Reduce a finished (or capped) state into the caller-facing metrics.
    pub fn extract_result(&self, state: &SimulationState, converged: bool) -> ShotResult {
        let planar = |p: &Vector3<f64>| (p.x * p.x + p.z * p.z).sqrt();
        let carry_m = state
            .carry_position
            .as_ref()
            .map(planar)
            .unwrap_or_else(|| planar(&state.position));

        ShotResult {
            final_position: state.position,
            carry_m,
            total_m: planar(&state.position),
            flight_time_s: state.carry_time_s.unwrap_or(state.time_s),
            max_height_m: state.max_height_m,
            lateral_m: lateral_deviation(&Vector3::x(), &state.position),
            bounce_count: state.bounce_count,
            converged,
        }
    }
}

/// Evaluate many independent launches against one shared environment in
/// parallel. Each trajectory owns its state, so no synchronization is
/// needed; the first invalid launch fails the batch.
pub fn simulate_batch(
    ball: BallProperties,
    env: &EnvironmentalConditions,
    surface: SurfaceType,
    launches: &[LaunchParameters],
) -> Result<Vec<ShotResult>> {
    let sim = FlightSimulator::new(ball, env, surface)?;
    launches.par_iter().map(|launch| sim.run(launch)).collect()
}
