use std::f64::consts::TAU;

/// One cell of the oscillator grid.
///
/// - `phase`: oscillator phase angle in [0, 2π) on the unit circle.
/// - `coherence`: local amplitude/coherence contribution in [0, 1].
///
/// Nodes are owned exclusively by [`crate::simulation::Grid`] and mutated
/// only through the synchronous update rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Phase angle [0, 2π)
    pub phase: f64,
    /// Local coherence contribution [0, 1]
    pub coherence: f64,
}

impl Node {
    pub fn new(phase: f64, coherence: f64) -> Self {
        Self {
            phase: wrap_phase(phase),
            coherence: coherence.clamp(0.0, 1.0),
        }
    }
}

/// Map an arbitrary angle into [0, 2π). Wrap, not clamp: the phase lives
/// on a circle.
pub fn wrap_phase(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_phase_identity_in_range() {
        assert_eq!(wrap_phase(1.0), 1.0);
        assert_eq!(wrap_phase(0.0), 0.0);
    }

    #[test]
    fn test_wrap_phase_negative() {
        let wrapped = wrap_phase(-0.5);
        assert!((wrapped - (TAU - 0.5)).abs() < 1e-12, "got {}", wrapped);
    }

    #[test]
    fn test_wrap_phase_over_tau() {
        let wrapped = wrap_phase(TAU + 0.25);
        assert!((wrapped - 0.25).abs() < 1e-12, "got {}", wrapped);
        assert!(wrap_phase(TAU) < 1e-12);
    }

    #[test]
    fn test_node_new_clamps_coherence() {
        assert_eq!(Node::new(0.0, 1.5).coherence, 1.0);
        assert_eq!(Node::new(0.0, -0.2).coherence, 0.0);
    }
}
