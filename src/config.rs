use crate::error::SimError;

// ============================================
// Island Detection Policy
// ============================================

/// Per-node coherence a cell must reach before it can join an island.
/// Two adjacent cells are linked only when both clear this bar.
pub const ISLAND_COHERENCE_THRESHOLD: f64 = 0.5;

/// Smallest connected component reported as an island. Isolated
/// high-coherence cells are noise peaks, not structure.
pub const MIN_ISLAND_SIZE: usize = 2;

// ============================================
// Measurement Policy
// ============================================

/// Number of equal-width bins over [0, 2π) for the phase-distribution
/// entropy histogram.
pub const PHASE_BINS: usize = 16;

// ============================================
// Life-Likeness Classification
// ============================================
//
// Thresholds taken from the scoring rule used across all scenario sweeps.
// Kept as named constants so the classifier can be tuned and tested
// independently of the dynamics.

/// Minimum run-average coherence for a life-like verdict.
pub const LIFE_COHERENCE_MIN: f64 = 0.35;

/// Minimum number of coherence islands on the final grid.
pub const LIFE_MIN_ISLANDS: usize = 2;

/// Energy-entropy Pearson correlation must fall below this (strong
/// anti-correlation = energy intake being converted into order).
pub const LIFE_CORRELATION_MAX: f64 = -0.4;

// ============================================
// Dynamics Constants
// ============================================

/// Upper bound for the initial per-node coherence draw. Grids start
/// essentially incoherent; structure has to be earned through coupling.
pub const INITIAL_COHERENCE_MAX: f64 = 0.05;

/// Scale applied to the thermal kick on the coherence channel. The phase
/// channel takes the full √(2 T dt) diffusion; coherence only takes a
/// damped, strictly degrading kick.
pub const COHERENCE_NOISE_SCALE: f64 = 0.1;

/// Seed used by [`crate::sim::CqonSimulation::new`] when the caller does
/// not supply one. (ASCII "CQON".)
pub const DEFAULT_SEED: u64 = 0x4351_4F4E;

/// Simulation parameters for one run. Immutable once validated.
///
/// Units follow the model convention: `alpha` and `gamma` are rates
/// [1/time], `k0` is an energy scale, `temperature` is dimensionless
/// noise intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Resonance sensitivity: scales how strongly neighbor alignment
    /// feeds a node's coherence. Must be > 0.
    pub alpha: f64,
    /// Decoherence rate: relaxation of coherence back toward zero.
    /// Must be >= 0.
    pub gamma: f64,
    /// Coupling / energy scale. Must be >= 0 (zero disables coupling).
    pub k0: f64,
    /// Thermal noise intensity T. Must be >= 0.
    pub temperature: f64,
    /// Side length of the square grid. Must be > 0.
    pub grid_size: usize,
    /// Total simulated time. Must be > 0.
    pub total_time: f64,
    /// Integration step. Must satisfy 0 < dt <= total_time.
    pub dt: f64,
}

impl SimParams {
    /// Check every field against its domain. Called by the orchestrator
    /// before any simulation work; a violation aborts the run with
    /// [`SimError::InvalidParameter`].
    pub fn validate(&self) -> Result<(), SimError> {
        fn finite(name: &'static str, value: f64) -> Result<(), SimError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(SimError::InvalidParameter {
                    name,
                    reason: "must be finite",
                    value,
                })
            }
        }

        finite("alpha", self.alpha)?;
        finite("gamma", self.gamma)?;
        finite("k0", self.k0)?;
        finite("temperature", self.temperature)?;
        finite("total_time", self.total_time)?;
        finite("dt", self.dt)?;

        if self.alpha <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "alpha",
                reason: "must be > 0",
                value: self.alpha,
            });
        }
        if self.gamma < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "gamma",
                reason: "must be >= 0",
                value: self.gamma,
            });
        }
        if self.k0 < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "k0",
                reason: "must be >= 0",
                value: self.k0,
            });
        }
        if self.temperature < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "temperature",
                reason: "must be >= 0",
                value: self.temperature,
            });
        }
        if self.grid_size == 0 {
            return Err(SimError::InvalidParameter {
                name: "grid_size",
                reason: "must be > 0",
                value: 0.0,
            });
        }
        if self.total_time <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "total_time",
                reason: "must be > 0",
                value: self.total_time,
            });
        }
        if self.dt <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "dt",
                reason: "must be > 0",
                value: self.dt,
            });
        }
        if self.dt > self.total_time {
            return Err(SimError::InvalidParameter {
                name: "dt",
                reason: "must be <= total_time",
                value: self.dt,
            });
        }
        Ok(())
    }

    /// Number of integration steps for this run: round(total_time / dt).
    /// At least 1 for any valid parameter set.
    pub fn steps(&self) -> usize {
        (self.total_time / self.dt).round() as usize
    }

    /// Rough explicit-Euler stiffness indicator. There is no hard bound,
    /// but dt * K0 * alpha approaching 1 invites blow-up; the orchestrator
    /// warns when this exceeds 0.5.
    pub fn stiffness(&self) -> f64 {
        self.dt * self.k0 * self.alpha.max(self.gamma)
    }
}

impl Default for SimParams {
    /// The early-Earth analog scenario: moderate noise, prebiotic regime.
    fn default() -> Self {
        Self {
            alpha: 0.35,
            gamma: 0.07,
            k0: 0.9,
            temperature: 0.15,
            grid_size: 12,
            total_time: 100.0,
            dt: 0.2,
        }
    }
}
