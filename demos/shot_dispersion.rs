/// Shot Dispersion Example
///
/// Builds a club profile from recorded shots, synthesizes launches from it,
/// and runs a dispersion analysis over a perturbed base shot.
use ballflight::{
    run_dispersion, BallProperties, ClubClass, DispersionParams, EnvironmentalConditions,
    FlightSimulator, LaunchParameters, ProfileStore, SurfaceType,
};
use rand::thread_rng;

fn main() -> ballflight::Result<()> {
    println!("=== Shot Dispersion Example ===\n");

    let mut rng = thread_rng();

    // Record a handful of measured strikes for a seven iron.
    let mut store = ProfileStore::new();
    for speed in [46.5, 47.2, 48.0, 48.4, 49.1, 47.8] {
        store.record(
            "seven_iron",
            &LaunchParameters {
                ball_speed_mps: speed,
                ..ClubClass::SevenIron.typical_launch()
            },
        )?;
    }

    // The profile can now synthesize statistically similar launches.
    let synthetic = store.synthesize("seven_iron", &mut rng)?;
    println!(
        "Synthesized launch: {:.1} m/s at {:.1}°, {:.0} rpm",
        synthetic.ball_speed_mps, synthetic.launch_angle_deg, synthetic.backspin_rpm
    );

    // Dispersion of the stock strike under swing-to-swing variation.
    let env = EnvironmentalConditions::calm();
    let sim = FlightSimulator::new(BallProperties::default(), &env, SurfaceType::Soft)?;
    let report = run_dispersion(
        &sim,
        &ClubClass::SevenIron.typical_launch(),
        &DispersionParams::default(),
        &mut rng,
    )?;

    println!(
        "\nDispersion over {} rounds ({} ok):",
        report.rounds, report.successful
    );
    println!(
        "  carry   {:6.1} ± {:4.1} m  (min {:.1}, max {:.1})",
        report.carry_m.mean, report.carry_m.std, report.carry_m.min, report.carry_m.max
    );
    println!(
        "  lateral {:+6.1} ± {:4.1} m",
        report.lateral_m.mean, report.lateral_m.std
    );
    println!(
        "  apex    {:6.1} ± {:4.1} m",
        report.max_height_m.mean, report.max_height_m.std
    );

    Ok(())
}
