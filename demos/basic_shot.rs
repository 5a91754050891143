/// Basic Shot Example
///
/// Simulates a stock seven-iron strike on a calm day and prints the flight
/// metrics, then shows how bounce events can be observed as they happen.
use ballflight::{
    BallProperties, BounceEvent, BounceObserver, ClubClass, EnvironmentalConditions,
    FlightSimulator, SurfaceType,
};

struct PrintBounces;

impl BounceObserver for PrintBounces {
    fn on_bounce(&mut self, event: &BounceEvent) {
        println!(
            "  bounce at {:6.1} m, impact speed {:4.1} m/s",
            (event.position.x.powi(2) + event.position.z.powi(2)).sqrt(),
            event.velocity.norm(),
        );
    }
}

fn main() -> ballflight::Result<()> {
    println!("=== Basic Shot Example ===\n");

    let env = EnvironmentalConditions::calm();
    let sim = FlightSimulator::new(BallProperties::default(), &env, SurfaceType::Soft)?;

    let launch = ClubClass::SevenIron.typical_launch();
    println!(
        "Launch: {:.0} m/s at {:.1}°, {:.0} rpm backspin\n",
        launch.ball_speed_mps, launch.launch_angle_deg, launch.backspin_rpm
    );

    println!("Ground contacts:");
    let result = sim.run_with_observer(&launch, &mut PrintBounces)?;

    println!();
    println!("Carry:       {:6.1} m", result.carry_m);
    println!("Total:       {:6.1} m", result.total_m);
    println!("Apex:        {:6.1} m", result.max_height_m);
    println!("Flight time: {:6.2} s", result.flight_time_s);
    println!("Lateral:     {:+6.1} m", result.lateral_m);
    println!("Bounces:     {:6}", result.bounce_count);

    // The same shot into an 8 m/s headwind.
    let windy = EnvironmentalConditions {
        wind_speed_mps: 8.0,
        wind_direction_deg: 0.0,
        ..env
    };
    let into_wind = FlightSimulator::new(BallProperties::default(), &windy, SurfaceType::Soft)?
        .run(&launch)?;
    println!(
        "\nInto an 8 m/s headwind the same swing carries {:.1} m ({:+.1} m).",
        into_wind.carry_m,
        into_wind.carry_m - result.carry_m
    );

    Ok(())
}
