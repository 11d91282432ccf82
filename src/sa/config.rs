//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction. Applied once per step.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.9995 }
    }
}

/// Configuration for the annealing search.
///
/// # Examples
///
/// ```
/// use u_queens::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
///     .with_max_steps(50_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Hard step budget. One candidate move is evaluated per step.
    pub max_steps: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Temperature floor. Cooling never goes below this value.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_steps: 100_000_000,
            initial_temperature: 600.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err("initial_temperature must be positive and finite".into());
        }
        if !(self.min_temperature > 0.0) {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
        }
        Ok(())
    }
}
