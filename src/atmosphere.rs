//! Atmospheric state for aerodynamic calculations.
//!
//! Air density comes from the ideal-gas split between dry air and water
//! vapor, with the saturation vapor pressure approximated by the Arden Buck
//! equation. Dynamic viscosity follows Sutherland's law. Station pressure is
//! adjusted to altitude with the tropospheric barometric formula before the
//! density split.
//!
//! These are pure functions with no failure modes: inputs are validated at
//! the simulation boundary, and out-of-physical-range values here produce
//! physically nonsensical but finite output rather than errors.

use crate::constants::{
    G_STANDARD_MPS2, R_DRY_AIR, R_WATER_VAPOR, SUTHERLAND_MU0, SUTHERLAND_S_K, SUTHERLAND_T0_K,
    TROPOSPHERE_LAPSE_RATE,
};

/// Air state consumed by the force model, computed once per environment.
#[derive(Debug, Clone, Copy)]
pub struct AirProperties {
    /// Air density (kg/m³)
    pub density: f64,
    /// Dynamic viscosity (Pa·s)
    pub dynamic_viscosity: f64,
}

impl AirProperties {
    /// Kinematic viscosity ν = μ/ρ (m²/s), the form Reynolds numbers want.
    pub fn kinematic_viscosity(&self) -> f64 {
        self.dynamic_viscosity / self.density
    }
}

/// Saturation vapor pressure over water (hPa), Arden Buck equation.
///
/// Valid over the meteorological range; `temp_c` in Celsius.
pub fn saturation_vapor_pressure_hpa(temp_c: f64) -> f64 {
    6.1121 * ((18.678 - temp_c / 234.5) * (temp_c / (257.14 + temp_c))).exp()
}

/// Air density (kg/m³) from temperature (°C), relative humidity (%) and
/// station pressure (hPa).
///
/// Humid air is less dense than dry air at the same pressure because water
/// vapor displaces heavier N₂/O₂.
pub fn air_density(temp_c: f64, humidity_pct: f64, pressure_hpa: f64) -> f64 {
    let temp_k = temp_c + 273.15;
    let humidity = humidity_pct.clamp(0.0, 100.0);

    let vapor_pressure_pa = humidity / 100.0 * saturation_vapor_pressure_hpa(temp_c) * 100.0;
    let dry_pressure_pa = (pressure_hpa * 100.0 - vapor_pressure_pa).max(0.0);

    dry_pressure_pa / (R_DRY_AIR * temp_k) + vapor_pressure_pa / (R_WATER_VAPOR * temp_k)
}

/// Dynamic viscosity of air (Pa·s) by Sutherland's formula.
pub fn dynamic_viscosity(temp_k: f64) -> f64 {
    let t = temp_k.max(1.0);
    SUTHERLAND_MU0 * (SUTHERLAND_T0_K + SUTHERLAND_S_K) / (t + SUTHERLAND_S_K)
        * (t / SUTHERLAND_T0_K).powf(1.5)
}

/// Adjust a sea-level-referenced pressure (hPa) to `altitude_m` using the
/// tropospheric barometric formula with a constant lapse rate.
pub fn pressure_at_altitude(pressure_hpa: f64, temp_c: f64, altitude_m: f64) -> f64 {
    if altitude_m == 0.0 {
        return pressure_hpa;
    }
    let base_temp_k = temp_c + 273.15;
    // Clamped so absurd altitudes stay finite instead of producing NaN.
    let temp_ratio = ((base_temp_k + TROPOSPHERE_LAPSE_RATE * altitude_m) / base_temp_k).max(1e-3);
    pressure_hpa * temp_ratio.powf(-G_STANDARD_MPS2 / (TROPOSPHERE_LAPSE_RATE * R_DRY_AIR))
}

/// Full air state for a set of surface observations.
pub fn air_properties(
    temp_c: f64,
    humidity_pct: f64,
    pressure_hpa: f64,
    altitude_m: f64,
) -> AirProperties {
    let local_pressure = pressure_at_altitude(pressure_hpa, temp_c, altitude_m);
    let local_temp_c = temp_c + TROPOSPHERE_LAPSE_RATE * altitude_m;
    AirProperties {
        density: air_density(local_temp_c, humidity_pct, local_pressure),
        dynamic_viscosity: dynamic_viscosity(local_temp_c + 273.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STANDARD_AIR_DENSITY;

    #[test]
    fn dry_sea_level_density_matches_standard() {
        let density = air_density(15.0, 0.0, 1013.25);
        assert!(
            (density - STANDARD_AIR_DENSITY).abs() < 0.01,
            "expected ~1.225, got {density}"
        );
    }

    #[test]
    fn humid_air_is_less_dense() {
        let dry = air_density(25.0, 0.0, 1013.25);
        let humid = air_density(25.0, 90.0, 1013.25);
        assert!(humid < dry);
    }

    #[test]
    fn saturation_pressure_plausible_at_room_temperature() {
        // Published value at 20°C is about 23.4 hPa.
        let es = saturation_vapor_pressure_hpa(20.0);
        assert!((es - 23.4).abs() < 0.5, "got {es}");
    }

    #[test]
    fn viscosity_increases_with_temperature() {
        let cold = dynamic_viscosity(273.15);
        let warm = dynamic_viscosity(313.15);
        assert!(warm > cold);
        assert!((cold - 1.716e-5).abs() < 1e-7);
    }

    #[test]
    fn pressure_drops_with_altitude() {
        let sea = pressure_at_altitude(1013.25, 15.0, 0.0);
        let high = pressure_at_altitude(1013.25, 15.0, 2000.0);
        assert!((sea - 1013.25).abs() < 1e-9);
        // Roughly 80 hPa per 700 m in the lower troposphere.
        assert!(high > 750.0 && high < 820.0, "got {high}");
    }

    #[test]
    fn altitude_thins_the_air() {
        let sea = air_properties(15.0, 50.0, 1013.25, 0.0);
        let mountain = air_properties(15.0, 50.0, 1013.25, 2500.0);
        assert!(mountain.density < sea.density * 0.85);
        assert!(mountain.kinematic_viscosity() > sea.kinematic_viscosity());
    }

    #[test]
    fn extreme_inputs_stay_finite() {
        let props = air_properties(-80.0, 250.0, 3.0, 40_000.0);
        assert!(props.density.is_finite());
        assert!(props.dynamic_viscosity.is_finite());
    }
}
