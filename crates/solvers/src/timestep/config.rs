use thiserror::Error;

/// Tuning constants for the time-step controller.
///
/// The defaults are `interpolation_constant = 1.0`, `safety_factor = 0.9`,
/// `snap_fraction = 0.9`, and `conservation = 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    interpolation_constant: f64,
    safety_factor: f64,
    snap_fraction: f64,
    conservation: f64,
}

/// Errors that can occur when validating a time-step controller config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("interpolation_constant must be finite and positive, got {0}")]
    InterpolationConstant(f64),

    #[error("safety_factor must be finite and positive, got {0}")]
    SafetyFactor(f64),

    #[error("snap_fraction must be in (0, 1], got {0}")]
    SnapFraction(f64),

    #[error("conservation must be finite and non-negative, got {0}")]
    Conservation(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpolation_constant: 1.0,
            safety_factor: 0.9,
            snap_fraction: 0.9,
            conservation: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated constants.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first constant that is out of range.
    pub fn new(
        interpolation_constant: f64,
        safety_factor: f64,
        snap_fraction: f64,
        conservation: f64,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_interpolation_constant(interpolation_constant)?
            .with_safety_factor(safety_factor)?
            .with_snap_fraction(snap_fraction)?
            .with_conservation(conservation)
    }

    /// Sets the interpolation constant `C`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InterpolationConstant`] unless `value` is finite and positive.
    pub fn with_interpolation_constant(mut self, value: f64) -> Result<Self, ConfigError> {
        if !is_positive(value) {
            return Err(ConfigError::InterpolationConstant(value));
        }
        self.interpolation_constant = value;
        Ok(self)
    }

    /// Sets the safety factor applied to the raw candidate step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SafetyFactor`] unless `value` is finite and positive.
    pub fn with_safety_factor(mut self, value: f64) -> Result<Self, ConfigError> {
        if !is_positive(value) {
            return Err(ConfigError::SafetyFactor(value));
        }
        self.safety_factor = value;
        Ok(self)
    }

    /// Sets the fraction of the remaining interval above which a step snaps
    /// to the end time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SnapFraction`] unless `0 < value <= 1`.
    pub fn with_snap_fraction(mut self, value: f64) -> Result<Self, ConfigError> {
        if !is_positive(value) || value > 1.0 {
            return Err(ConfigError::SnapFraction(value));
        }
        self.snap_fraction = value;
        Ok(self)
    }

    /// Sets how strongly the previous step is retained.
    ///
    /// Zero disables smoothing; larger values change the step more slowly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Conservation`] unless `value` is finite and non-negative.
    pub fn with_conservation(mut self, value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Conservation(value));
        }
        self.conservation = value;
        Ok(self)
    }

    #[must_use]
    pub fn interpolation_constant(&self) -> f64 {
        self.interpolation_constant
    }

    #[must_use]
    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    #[must_use]
    pub fn snap_fraction(&self) -> f64 {
        self.snap_fraction
    }

    #[must_use]
    pub fn conservation(&self) -> f64 {
        self.conservation
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = Config::default();
        assert_eq!(config.interpolation_constant(), 1.0);
        assert_eq!(config.safety_factor(), 0.9);
        assert_eq!(config.snap_fraction(), 0.9);
        assert_eq!(config.conservation(), 1.0);
    }

    #[test]
    fn new_accepts_valid_constants() {
        let config = Config::new(2.0, 0.5, 1.0, 0.0).unwrap();
        assert_eq!(config.interpolation_constant(), 2.0);
        assert_eq!(config.safety_factor(), 0.5);
        assert_eq!(config.snap_fraction(), 1.0);
        assert_eq!(config.conservation(), 0.0);
    }

    #[test]
    fn new_rejects_out_of_range_constants() {
        assert_eq!(
            Config::new(0.0, 0.9, 0.9, 1.0),
            Err(ConfigError::InterpolationConstant(0.0))
        );
        assert_eq!(
            Config::new(1.0, -0.9, 0.9, 1.0),
            Err(ConfigError::SafetyFactor(-0.9))
        );
        assert_eq!(
            Config::new(1.0, 0.9, 1.5, 1.0),
            Err(ConfigError::SnapFraction(1.5))
        );
        assert_eq!(
            Config::new(1.0, 0.9, 0.9, -1.0),
            Err(ConfigError::Conservation(-1.0))
        );
        assert!(matches!(
            Config::new(1.0, f64::INFINITY, 0.9, 1.0),
            Err(ConfigError::SafetyFactor(_))
        ));
    }

    #[test]
    fn builder_leaves_other_constants_alone() {
        let config = Config::default().with_conservation(3.0).unwrap();
        assert_eq!(config.conservation(), 3.0);
        assert_eq!(config.safety_factor(), 0.9);
    }
}
