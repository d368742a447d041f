use hoelder_solvers::optimization::global_search::{Config, ConfigError, MAX_DENSITY};

/// Tuning parameters for [`minimize`](crate::minimize).
///
/// Every call takes its settings explicitly, so concurrent calls with
/// different settings never interfere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Reliability parameter `r`, greater than 1.
    pub reliability: f64,

    /// Interval width in curve coordinates at which the search stops.
    ///
    /// Zero runs until the evaluation budget is spent or no interval can be
    /// split further.
    pub precision: f64,

    /// Reserve for constraint targets and best-point updates.
    pub reserve: f64,

    /// Space-filling curve resolution in bits per coordinate.
    pub density: u32,

    /// Logs the statistics report and every solver event.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reliability: 3.0,
            precision: 0.0,
            reserve: 0.001,
            density: MAX_DENSITY,
            verbose: false,
        }
    }
}

impl Settings {
    /// Builds the solver configuration for a budget of `max_evals` trials.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting, or the budget, is out of range.
    pub fn config(&self, max_evals: usize) -> Result<Config, ConfigError> {
        Config::new(max_evals, self.precision)?
            .with_reliability(self.reliability)?
            .with_density(self.density)?
            .with_reserve(self.reserve)
    }
}

/// Stopping criteria for [`minimize`](crate::minimize).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopping {
    /// Maximum number of trials.
    pub max_evals: usize,
}

impl Stopping {
    #[must_use]
    pub fn max_evals(max_evals: usize) -> Self {
        Self { max_evals }
    }
}
