use thiserror::Error;

/// Errors surfaced by the simulation engine.
///
/// Both variants are fatal to the run that raised them. The engine never
/// retries; a failed run reproduces exactly from the same parameters and
/// seed. Batch harnesses are expected to catch per-scenario and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A configuration value is outside its valid domain. Raised before any
    /// simulation work begins; no partial state is ever produced.
    #[error("invalid parameter `{name}`: {reason} (got {value})")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
        value: f64,
    },

    /// A measured quantity left its valid range mid-run (NaN, overflow, or
    /// coherence escaping [0,1] despite clamping). Usually means `dt` is too
    /// large for the chosen coupling scale.
    #[error("numerical instability at step {step}: {quantity} = {value}")]
    NumericalInstability {
        step: usize,
        quantity: &'static str,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimError::InvalidParameter {
            name: "dt",
            reason: "must be > 0",
            value: -0.1,
        };
        let msg = err.to_string();
        assert!(msg.contains("dt"), "message should name the parameter: {}", msg);
        assert!(msg.contains("-0.1"), "message should carry the value: {}", msg);
    }

    #[test]
    fn test_instability_display_names_step_and_quantity() {
        let err = SimError::NumericalInstability {
            step: 42,
            quantity: "energy",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("42"), "got: {}", msg);
        assert!(msg.contains("energy"), "got: {}", msg);
    }
}
