use thiserror::Error;

/// The finest supported curve resolution, in bits per coordinate.
pub const MAX_DENSITY: u32 = 12;

/// Configuration for the global search solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    precision: f64,
    reliability: f64,
    density: u32,
    reserve: f64,
}

/// Errors that can occur when validating a global search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("precision must be finite and non-negative")]
    Precision,

    #[error("reliability must be finite and greater than 1")]
    Reliability,

    #[error("density must be between 1 and {}", MAX_DENSITY)]
    Density,

    #[error("reserve must be finite and non-negative")]
    Reserve,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 20_000,
            precision: 0.01,
            reliability: 3.0,
            density: 12,
            reserve: 0.001,
        }
    }
}

impl Config {
    /// Creates a new config with the given trial budget and precision.
    ///
    /// The remaining parameters take their default values and can be changed
    /// with the `with_*` methods.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `precision` is negative or
    /// non-finite.
    pub fn new(max_iters: usize, precision: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !precision.is_finite() || precision < 0.0 {
            return Err(ConfigError::Precision);
        }

        Ok(Self {
            max_iters,
            precision,
            ..Self::default()
        })
    }

    /// Sets the reliability parameter `r`.
    ///
    /// Larger values spread trials more evenly over the search region, smaller
    /// values concentrate them around the best points found so far.
    ///
    /// # Errors
    ///
    /// Returns an error unless `reliability` is finite and greater than 1.
    pub fn with_reliability(self, reliability: f64) -> Result<Self, ConfigError> {
        if !reliability.is_finite() || reliability <= 1.0 {
            return Err(ConfigError::Reliability);
        }
        Ok(Self {
            reliability,
            ..self
        })
    }

    /// Sets the resolution of the space-filling curve.
    ///
    /// Each coordinate of a mapped point is resolved to `2^-density` of the
    /// box width.
    ///
    /// # Errors
    ///
    /// Returns an error unless `density` is in `1..=MAX_DENSITY`.
    pub fn with_density(self, density: u32) -> Result<Self, ConfigError> {
        if !(1..=MAX_DENSITY).contains(&density) {
            return Err(ConfigError::Density);
        }
        Ok(Self { density, ..self })
    }

    /// Sets the reserve used for constraint targets and for accepting a new
    /// best feasible point.
    ///
    /// # Errors
    ///
    /// Returns an error if `reserve` is negative or non-finite.
    pub fn with_reserve(self, reserve: f64) -> Result<Self, ConfigError> {
        if !reserve.is_finite() || reserve < 0.0 {
            return Err(ConfigError::Reserve);
        }
        Ok(Self { reserve, ..self })
    }

    /// Returns the maximum number of trials.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the interval size below which the search stops.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the reliability parameter `r`.
    #[must_use]
    pub fn reliability(&self) -> f64 {
        self.reliability
    }

    /// Returns the curve resolution in bits per coordinate.
    #[must_use]
    pub fn density(&self) -> u32 {
        self.density
    }

    /// Returns the reserve parameter.
    #[must_use]
    pub fn reserve(&self) -> f64 {
        self.reserve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_defaults_for_tuning_parameters() {
        let config = Config::new(50, 1e-4).unwrap();

        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.precision(), 1e-4);
        assert_eq!(config.reliability(), Config::default().reliability());
        assert_eq!(config.density(), Config::default().density());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new(0, 1e-3), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(10, -1.0), Err(ConfigError::Precision));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Precision));

        let config = Config::default();
        assert_eq!(config.with_reliability(1.0), Err(ConfigError::Reliability));
        assert_eq!(config.with_density(0), Err(ConfigError::Density));
        assert_eq!(
            config.with_density(MAX_DENSITY + 1),
            Err(ConfigError::Density)
        );
        assert_eq!(config.with_reserve(-0.1), Err(ConfigError::Reserve));
    }

    #[test]
    fn zero_precision_is_allowed() {
        assert!(Config::new(10, 0.0).is_ok());
    }

    #[test]
    fn builders_chain() {
        let config = Config::new(100, 1e-3)
            .and_then(|c| c.with_reliability(4.5))
            .and_then(|c| c.with_density(8))
            .and_then(|c| c.with_reserve(0.0))
            .unwrap();

        assert_eq!(config.reliability(), 4.5);
        assert_eq!(config.density(), 8);
        assert_eq!(config.reserve(), 0.0);
    }
}
