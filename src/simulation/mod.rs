//! Grid state and the stochastic update rule.

pub mod grid;
pub mod node;
pub mod update;

pub use grid::Grid;
pub use node::Node;
pub use update::step;
