use ballflight::{
    run_dispersion, BallProperties, ClubClass, DispersionParams, EnvironmentalConditions,
    FlightSimulator, LaunchParameters, SurfaceType,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::thread_rng;

#[derive(Parser)]
#[command(name = "ballflight")]
#[command(version)]
#[command(about = "Golf ball flight calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single shot
    Shot {
        #[command(flatten)]
        launch: LaunchArgs,

        #[command(flatten)]
        conditions: ConditionArgs,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Run a dispersion analysis over perturbed copies of a shot
    Disperse {
        #[command(flatten)]
        launch: LaunchArgs,

        #[command(flatten)]
        conditions: ConditionArgs,

        /// Number of simulated rounds
        #[arg(short = 'n', long, default_value = "500")]
        rounds: usize,

        /// Ball speed standard deviation (m/s)
        #[arg(long, default_value = "1.5")]
        speed_std: f64,

        /// Launch angle standard deviation (degrees)
        #[arg(long, default_value = "1.0")]
        angle_std: f64,

        /// Backspin standard deviation (rpm)
        #[arg(long, default_value = "250.0")]
        backspin_std: f64,

        /// Sidespin standard deviation (rpm)
        #[arg(long, default_value = "200.0")]
        sidespin_std: f64,

        /// Face angle standard deviation (degrees)
        #[arg(long, default_value = "1.0")]
        face_std: f64,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Args)]
struct LaunchArgs {
    /// Start from a club preset; explicit flags override its fields
    #[arg(short = 'c', long, value_enum)]
    club: Option<ClubPreset>,

    /// Ball speed (m/s)
    #[arg(short = 'v', long)]
    speed: Option<f64>,

    /// Launch angle (degrees)
    #[arg(short = 'a', long)]
    angle: Option<f64>,

    /// Backspin (rpm)
    #[arg(short = 'b', long)]
    backspin: Option<f64>,

    /// Sidespin (rpm, positive curves right)
    #[arg(long, default_value = "0.0")]
    sidespin: f64,

    /// Face angle (degrees, positive = open)
    #[arg(long, default_value = "0.0")]
    face: f64,
}

#[derive(Args)]
struct ConditionArgs {
    /// Landing surface
    #[arg(short = 's', long, value_enum, default_value = "soft")]
    surface: Surface,

    /// Temperature (Celsius)
    #[arg(long, default_value = "15.0")]
    temperature: f64,

    /// Relative humidity (0-100 %)
    #[arg(long, default_value = "50.0")]
    humidity: f64,

    /// Pressure (hPa)
    #[arg(long, default_value = "1013.25")]
    pressure: f64,

    /// Altitude (meters)
    #[arg(long, default_value = "0.0")]
    altitude: f64,

    /// Wind speed (m/s)
    #[arg(long, default_value = "0.0")]
    wind_speed: f64,

    /// Wind direction (degrees, 0 = headwind)
    #[arg(long, default_value = "0.0")]
    wind_direction: f64,

    /// Gust factor (multiplier on wind speed)
    #[arg(long, default_value = "1.0")]
    gust: f64,

    /// Integration timestep (seconds)
    #[arg(long, default_value = "0.01")]
    timestep: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Surface {
    Hard,
    Soft,
    Sand,
}

impl From<Surface> for SurfaceType {
    fn from(surface: Surface) -> Self {
        match surface {
            Surface::Hard => SurfaceType::Hard,
            Surface::Soft => SurfaceType::Soft,
            Surface::Sand => SurfaceType::Sand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClubPreset {
    Driver,
    ThreeWood,
    FiveIron,
    SevenIron,
    PitchingWedge,
}

impl From<ClubPreset> for ClubClass {
    fn from(preset: ClubPreset) -> Self {
        match preset {
            ClubPreset::Driver => ClubClass::Driver,
            ClubPreset::ThreeWood => ClubClass::ThreeWood,
            ClubPreset::FiveIron => ClubClass::FiveIron,
            ClubPreset::SevenIron => ClubClass::SevenIron,
            ClubPreset::PitchingWedge => ClubClass::PitchingWedge,
        }
    }
}

impl LaunchArgs {
    fn to_launch(&self) -> LaunchParameters {
        let base = self
            .club
            .map(|preset| ClubClass::from(preset).typical_launch())
            .unwrap_or_default();
        LaunchParameters {
            ball_speed_mps: self.speed.unwrap_or(base.ball_speed_mps),
            launch_angle_deg: self.angle.unwrap_or(base.launch_angle_deg),
            backspin_rpm: self.backspin.unwrap_or(base.backspin_rpm),
            sidespin_rpm: self.sidespin,
            face_angle_deg: self.face,
            ..base
        }
    }
}

impl ConditionArgs {
    fn to_environment(&self) -> EnvironmentalConditions {
        EnvironmentalConditions {
            temperature_c: self.temperature,
            humidity_pct: self.humidity,
            pressure_hpa: self.pressure,
            altitude_m: self.altitude,
            wind_speed_mps: self.wind_speed,
            wind_direction_deg: self.wind_direction,
            gust_factor: self.gust,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> ballflight::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shot {
            launch,
            conditions,
            output,
        } => {
            let env = conditions.to_environment();
            let sim = FlightSimulator::new(BallProperties::default(), &env, conditions.surface.into())?
                .with_timestep(conditions.timestep)?;
            let result = sim.run(&launch.to_launch())?;

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result).expect("serializable"));
                }
                OutputFormat::Table => {
                    println!("SHOT RESULT");
                    println!("  Carry:        {:8.1} m", result.carry_m);
                    println!("  Total:        {:8.1} m", result.total_m);
                    println!("  Apex:         {:8.1} m", result.max_height_m);
                    println!("  Flight time:  {:8.2} s", result.flight_time_s);
                    println!("  Lateral:      {:+8.1} m", result.lateral_m);
                    println!("  Bounces:      {:8}", result.bounce_count);
                    if !result.converged {
                        println!("  (iteration cap reached; metrics are truncated)");
                    }
                }
            }
        }

        Commands::Disperse {
            launch,
            conditions,
            rounds,
            speed_std,
            angle_std,
            backspin_std,
            sidespin_std,
            face_std,
            output,
        } => {
            let env = conditions.to_environment();
            let sim = FlightSimulator::new(BallProperties::default(), &env, conditions.surface.into())?
                .with_timestep(conditions.timestep)?;
            let params = DispersionParams {
                rounds,
                ball_speed_std: speed_std,
                launch_angle_std: angle_std,
                backspin_std,
                sidespin_std,
                face_angle_std: face_std,
            };
            let report = run_dispersion(&sim, &launch.to_launch(), &params, &mut thread_rng())?;

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report).expect("serializable"));
                }
                OutputFormat::Table => {
                    println!(
                        "DISPERSION ({} rounds, {} ok, {} failed)",
                        report.rounds, report.successful, report.failed
                    );
                    print_field("Carry (m)", &report.carry_m);
                    print_field("Total (m)", &report.total_m);
                    print_field("Apex (m)", &report.max_height_m);
                    print_field("Lateral (m)", &report.lateral_m);
                    print_field("Flight (s)", &report.flight_time_s);
                }
            }
        }
    }

    Ok(())
}

fn print_field(label: &str, stats: &ballflight::FieldStats) {
    println!(
        "  {label:<12} mean {:8.2}  std {:7.2}  min {:8.2}  max {:8.2}",
        stats.mean, stats.std, stats.min, stats.max
    );
}
