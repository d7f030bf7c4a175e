//! Coherent Quantum Oscillator Network (CQON) simulation engine.
//!
//! Simulates a stochastic network of coupled oscillators on a square torus
//! grid to study whether life-like coherent organization emerges under a
//! given noise/coupling regime. Each node carries a phase and a local
//! coherence contribution; every explicit-Euler step applies neighbor
//! coupling, decoherence relaxation, and thermal noise against the previous
//! step's full snapshot, then records scalar coherence, energy, and entropy.
//! After the time loop, coherent islands on the final grid are detected and
//! a summary ([`RunResult`]) is assembled, including the energy-entropy
//! correlation and a threshold-based life-likeness verdict.
//!
//! ```no_run
//! use cqon::{CqonSimulation, SimParams};
//!
//! let sim = CqonSimulation::with_seed(SimParams::default(), 42)?;
//! let result = sim.run(false)?;
//! println!("<c> = {:.3}, life-like: {}", result.avg_coherence, result.life_like_organization);
//! # Ok::<(), cqon::SimError>(())
//! ```
//!
//! Every instance owns its parameters and its own seeded random stream;
//! identical parameters and seed reproduce the histories bit for bit, and
//! independent instances may run on separate threads without coordination.

pub mod config;
pub mod error;
pub mod islands;
pub mod measure;
pub mod sim;
pub mod simulation;
pub mod stats;

pub use config::SimParams;
pub use error::SimError;
pub use islands::{detect_islands, Island};
pub use measure::{measure, Measurement};
pub use sim::{CqonSimulation, RunResult};
pub use simulation::{Grid, Node};
