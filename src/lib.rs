//! # ballflight
//!
//! Golf ball flight simulation engine with comprehensive physics modeling:
//! aerodynamic drag and Magnus lift, wind, surface bounce and rolling, and
//! statistical shot generation from per-club history.
//!
//! The integrator is a deterministic fixed-timestep stepper; run it to
//! completion with [`FlightSimulator::run`], or drive it one step per host
//! tick with [`FlightSimulator::step`] for interactive use. Environments
//! and ball properties are shared read-only, so independent shots can be
//! evaluated in parallel (see [`simulate_batch`] and [`dispersion`]).

// Re-export the main types and functions
pub use dispersion::{run_dispersion, DispersionParams, DispersionReport, FieldStats};
pub use environment::EnvironmentalConditions;
pub use error::{FlightError, Result};
pub use ground::{BounceEvent, BounceObserver, NullObserver, RecordingObserver, SurfaceType};
pub use launch::{BallProperties, LaunchParameters};
pub use simulation::{
    simulate_batch, FlightSimulator, ShotResult, SimulationState, StepStatus,
};
pub use statistics::{ClubClass, ClubPerformanceProfile, ProfileStore, RunningStat};

// Module declarations
pub mod aerodynamics;
pub mod atmosphere;
pub mod constants;
pub mod dispersion;
pub mod environment;
pub mod error;
pub mod ground;
pub mod launch;
pub mod simulation;
pub mod statistics;
