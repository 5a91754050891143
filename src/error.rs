use thiserror::Error;

/// Errors surfaced at the simulation and statistics boundaries.
///
/// The numerical core itself has no failure modes once its inputs pass
/// validation; everything here is raised before integration starts or by
/// the statistical layer.
#[derive(Debug, Error)]
pub enum FlightError {
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("no performance profile recorded for club \"{club}\"")]
    UnknownClub { club: String },

    #[error("profile for \"{club}\" has {have} recorded shots, need at least {need}")]
    InsufficientSamples {
        club: String,
        have: usize,
        need: usize,
    },

    #[error("degenerate {field} sampling distribution")]
    Distribution {
        field: &'static str,
        #[source]
        source: rand_distr::NormalError,
    },

    #[error("dispersion run produced no successful rounds")]
    NoSuccessfulRounds,
}

impl FlightError {
    /// Reject a value that must be finite and inside `[min, max]`.
    pub(crate) fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<()> {
        if !value.is_finite() {
            return Err(FlightError::InvalidInput {
                field,
                value,
                reason: "not a finite number",
            });
        }
        if value < min || value > max {
            return Err(FlightError::InvalidInput {
                field,
                value,
                reason: "outside the physically valid range",
            });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_rejects_nan_and_bounds() {
        assert!(FlightError::check_range("speed", f64::NAN, 0.0, 1.0).is_err());
        assert!(FlightError::check_range("speed", -0.1, 0.0, 1.0).is_err());
        assert!(FlightError::check_range("speed", 1.1, 0.0, 1.0).is_err());
        assert!(FlightError::check_range("speed", 0.5, 0.0, 1.0).is_ok());
    }

    #[test]
    fn errors_render_context() {
        let err = FlightError::InsufficientSamples {
            club: "7i".to_string(),
            have: 2,
            need: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("7i"));
        assert!(msg.contains('2'));
        assert!(msg.contains('5'));
    }
}
