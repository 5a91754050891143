//! End-to-end flight properties exercised through the public API.

use ballflight::{
    simulate_batch, BallProperties, ClubClass, EnvironmentalConditions, FlightSimulator,
    LaunchParameters, ProfileStore, RecordingObserver, SurfaceType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn iron_launch() -> LaunchParameters {
    LaunchParameters {
        ball_speed_mps: 40.0,
        launch_angle_deg: 12.0,
        backspin_rpm: 3000.0,
        sidespin_rpm: 0.0,
        face_angle_deg: 0.0,
        attack_angle_deg: 4.0,
        ball_temperature_k: 293.15,
    }
}

fn soft_simulator(env: &EnvironmentalConditions) -> FlightSimulator<'_> {
    FlightSimulator::new(BallProperties::default(), env, SurfaceType::Soft).unwrap()
}

#[test]
fn flight_metrics_positive_and_monotone_in_velocity() {
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let mut last_flight_time = 0.0;
    let mut last_apex = 0.0;
    for speed in [25.0, 35.0, 45.0, 55.0] {
        let result = sim
            .run(&LaunchParameters {
                ball_speed_mps: speed,
                ..iron_launch()
            })
            .unwrap();
        assert!(result.flight_time_s > 0.0);
        assert!(result.max_height_m > 0.0);
        assert!(
            result.flight_time_s > last_flight_time,
            "flight time should grow with ball speed at fixed angle"
        );
        assert!(
            result.max_height_m > last_apex,
            "apex should grow with ball speed at fixed angle"
        );
        last_flight_time = result.flight_time_s;
        last_apex = result.max_height_m;
    }
}

#[test]
fn rebound_speed_ordering_across_surfaces() {
    // Identical swing onto each surface; the hard surface keeps the most
    // bounce energy, sand keeps essentially none.
    let env = EnvironmentalConditions::calm();
    let launch = iron_launch();
    let mut bounce_speeds = Vec::new();
    for surface in [SurfaceType::Hard, SurfaceType::Soft, SurfaceType::Sand] {
        let sim = FlightSimulator::new(BallProperties::default(), &env, surface).unwrap();
        let mut observer = RecordingObserver::default();
        sim.run_with_observer(&launch, &mut observer).unwrap();
        let first = observer.events.first().expect("at least one contact");
        bounce_speeds.push(first.velocity.y);
    }
    assert!(
        bounce_speeds[0] > bounce_speeds[1],
        "hard rebound should beat soft: {bounce_speeds:?}"
    );
    assert!(
        bounce_speeds[2].abs() < 1e-9,
        "sand should absorb the bounce entirely: {bounce_speeds:?}"
    );
}

#[test]
fn carry_bounded_by_total_on_every_surface() {
    let env = EnvironmentalConditions::calm();
    for surface in [SurfaceType::Hard, SurfaceType::Soft, SurfaceType::Sand] {
        for club in [
            ClubClass::Driver,
            ClubClass::SevenIron,
            ClubClass::PitchingWedge,
        ] {
            let sim = FlightSimulator::new(BallProperties::default(), &env, surface).unwrap();
            let result = sim.run(&club.typical_launch()).unwrap();
            assert!(
                result.carry_m <= result.total_m + 1e-9,
                "{club:?} on {surface:?}: carry {} > total {}",
                result.carry_m,
                result.total_m
            );
        }
    }
}

#[test]
fn straight_conditions_produce_no_lateral_deviation() {
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let result = sim.run(&iron_launch()).unwrap();
    assert!(
        result.lateral_m.abs() < 0.5,
        "zero wind, zero sidespin, square face should fly straight: {}",
        result.lateral_m
    );
}

#[test]
fn degenerate_launch_terminates_immediately() {
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let result = sim
        .run(&LaunchParameters {
            ball_speed_mps: 0.0,
            launch_angle_deg: 0.0,
            backspin_rpm: 0.0,
            ..iron_launch()
        })
        .unwrap();
    assert!(result.converged);
    assert!(result.carry_m.abs() < 1e-9);
    assert!(result.total_m.abs() < 1e-9);
    assert!(result.flight_time_s < 0.05, "should settle within a step or two");
}

#[test]
fn reference_iron_scenario_lands_in_band() {
    // 40 m/s, 12°, 3000 rpm, flat terrain, no wind.
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let result = sim.run(&iron_launch()).unwrap();
    assert!(result.converged);
    assert!(
        result.carry_m > 120.0 && result.carry_m < 160.0,
        "carry out of the iron band: {}",
        result.carry_m
    );
    assert!(
        result.max_height_m > 8.0 && result.max_height_m < 18.0,
        "apex out of the iron band: {}",
        result.max_height_m
    );
}

#[test]
fn club_carry_ordering_matches_the_bag() {
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let driver = sim.run(&ClubClass::Driver.typical_launch()).unwrap();
    let iron = sim.run(&ClubClass::SevenIron.typical_launch()).unwrap();
    let wedge = sim.run(&ClubClass::PitchingWedge.typical_launch()).unwrap();
    assert!(
        driver.carry_m > iron.carry_m && iron.carry_m > wedge.carry_m,
        "carry ordering broken: driver {} / iron {} / wedge {}",
        driver.carry_m,
        iron.carry_m,
        wedge.carry_m
    );
}

#[test]
fn generator_round_trips_through_the_simulator() {
    // Record a plausible spread of shots, then every synthesized launch
    // must simulate cleanly.
    let env = EnvironmentalConditions::calm();
    let sim = soft_simulator(&env);
    let mut store = ProfileStore::new();
    for i in 0..12 {
        store
            .record(
                "seven_iron",
                &LaunchParameters {
                    ball_speed_mps: 46.0 + (i % 5) as f64,
                    launch_angle_deg: 15.0 + (i % 3) as f64,
                    backspin_rpm: 6000.0 + (i % 4) as f64 * 300.0,
                    ..iron_launch()
                },
            )
            .unwrap();
    }
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..25 {
        let launch = store.synthesize("seven_iron", &mut rng).unwrap();
        let result = sim.run(&launch).unwrap();
        assert!(result.converged);
        assert!(result.carry_m > 0.0);
    }
}

#[test]
fn batch_runs_share_one_environment() {
    let env = EnvironmentalConditions::calm();
    let launches: Vec<LaunchParameters> = (0..16)
        .map(|i| LaunchParameters {
            ball_speed_mps: 30.0 + i as f64 * 2.0,
            ..iron_launch()
        })
        .collect();
    let results =
        simulate_batch(BallProperties::default(), &env, SurfaceType::Soft, &launches).unwrap();
    assert_eq!(results.len(), launches.len());
    for window in results.windows(2) {
        assert!(
            window[1].carry_m > window[0].carry_m,
            "batch results should preserve the speed ordering"
        );
    }
}
