//! Environmental conditions shared across simulations.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::atmosphere::{air_properties, AirProperties};

/// Weather and site observations for a round.
///
/// Owned by the caller and passed by reference into each simulation; the
/// derived air state and wind vector are computed once per simulator, so a
/// single `EnvironmentalConditions` can back any number of concurrent
/// trajectories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Relative humidity (0-100 %)
    pub humidity_pct: f64,
    /// Station pressure (hPa)
    pub pressure_hpa: f64,
    /// Site altitude above sea level (m)
    pub altitude_m: f64,
    /// Sustained wind speed (m/s)
    pub wind_speed_mps: f64,
    /// Wind direction in degrees; 0 blows straight at the player (headwind),
    /// 90 blows across the line from the left
    pub wind_direction_deg: f64,
    /// Steady multiplier applied to wind speed; 1.0 = no gusting
    pub gust_factor: f64,
}

impl Default for EnvironmentalConditions {
    fn default() -> Self {
        Self {
            temperature_c: 15.0,
            humidity_pct: 50.0,
            pressure_hpa: 1013.25,
            altitude_m: 0.0,
            wind_speed_mps: 0.0,
            wind_direction_deg: 0.0,
            gust_factor: 1.0,
        }
    }
}

impl EnvironmentalConditions {
    /// Still air at 15°C, sea level.
    pub fn calm() -> Self {
        Self::default()
    }

    /// Derive the air state (density, viscosity) for these conditions.
    pub fn air_properties(&self) -> AirProperties {
        air_properties(
            self.temperature_c,
            self.humidity_pct,
            self.pressure_hpa,
            self.altitude_m,
        )
    }

    /// Wind as a 3D vector in the launch frame (x toward the target, y up,
    /// z right of the target line).
    ///
    /// Direction 0° is a headwind, so the vector points back down the line;
    /// the gust factor scales the sustained speed.
    pub fn wind_vector(&self) -> Vector3<f64> {
        let angle = self.wind_direction_deg.to_radians();
        let speed = self.wind_speed_mps * self.gust_factor;
        Vector3::new(-speed * angle.cos(), 0.0, -speed * angle.sin())
    }
}
