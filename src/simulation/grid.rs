use std::f64::consts::TAU;

use rand::Rng;

use crate::config::INITIAL_COHERENCE_MAX;
use crate::simulation::node::Node;

/// Moore 8-neighborhood offsets (row, col). The same topology is used for
/// phase coupling and for island adjacency, so the coupling graph and the
/// cluster graph agree.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Forward half of the Moore neighborhood. Summing bonds over these
/// offsets visits each unordered neighbor pair exactly once.
pub const FORWARD_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Square oscillator grid, row-major storage, torus boundary.
///
/// Invariant: `nodes.len() == size * size`; every position in
/// [0,size)×[0,size) holds exactly one node. Boundary handling is
/// wrap-around (`rem_euclid`), so every node has a full 8-neighborhood
/// and the coupling sum has no edge bias.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    nodes: Vec<Node>,
}

impl Grid {
    /// Create a grid with phases drawn uniformly from [0, 2π) and
    /// coherence seeded near zero, from the caller-supplied generator.
    /// No global random state is touched.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let mut nodes = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            let phase = rng.gen_range(0.0..TAU);
            let coherence = rng.gen_range(0.0..INITIAL_COHERENCE_MAX);
            nodes.push(Node { phase, coherence });
        }
        Self { size, nodes }
    }

    /// Grid with every node at the same phase and coherence. Used for
    /// boundary checks and as a known-ordered reference state.
    pub fn uniform(size: usize, phase: f64, coherence: f64) -> Self {
        let node = Node::new(phase, coherence);
        Self {
            size,
            nodes: vec![node; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, row: usize, col: usize) -> &Node {
        &self.nodes[row * self.size + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Node {
        &mut self.nodes[row * self.size + col]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Wrap possibly out-of-range coordinates onto the torus.
    pub fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        let n = self.size as isize;
        (row.rem_euclid(n) as usize, col.rem_euclid(n) as usize)
    }

    /// Positions of the 8 Moore neighbors of (row, col), torus-wrapped.
    pub fn neighbors(&self, row: usize, col: usize) -> [(usize, usize); 8] {
        let mut out = [(0usize, 0usize); 8];
        for (k, (dr, dc)) in NEIGHBOR_OFFSETS.iter().enumerate() {
            out[k] = self.wrap(row as isize + dr, col as isize + dc);
        }
        out
    }

    /// Local Kuramoto order parameter r ∈ [0, 1] over the node and its 8
    /// neighbors: magnitude of the mean unit phasor. 1 when the whole
    /// neighborhood is phase-locked, near 0 when phases are scattered.
    pub fn local_order(&self, row: usize, col: usize) -> f64 {
        let mut sum_cos = self.get(row, col).phase.cos();
        let mut sum_sin = self.get(row, col).phase.sin();
        for (nr, nc) in self.neighbors(row, col) {
            let phase = self.get(nr, nc).phase;
            sum_cos += phase.cos();
            sum_sin += phase.sin();
        }
        let count = 9.0;
        ((sum_cos / count).powi(2) + (sum_sin / count).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_grid_creation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = Grid::random(12, &mut rng);
        assert_eq!(grid.node_count(), 144);
        assert_eq!(grid.size(), 12);
    }

    #[test]
    fn test_initial_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = Grid::random(10, &mut rng);
        for node in grid.nodes() {
            assert!(
                (0.0..TAU).contains(&node.phase),
                "phase out of range: {}",
                node.phase
            );
            assert!(
                (0.0..INITIAL_COHERENCE_MAX).contains(&node.coherence),
                "coherence should seed near zero, got {}",
                node.coherence
            );
        }
    }

    #[test]
    fn test_seeded_init_is_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let ga = Grid::random(8, &mut a);
        let gb = Grid::random(8, &mut b);
        assert_eq!(ga.nodes(), gb.nodes());
    }

    #[test]
    fn test_neighbor_wraparound() {
        let grid = Grid::uniform(5, 0.0, 0.0);
        let nbrs = grid.neighbors(0, 0);
        assert!(nbrs.contains(&(4, 4)), "corner should wrap to far corner");
        assert!(nbrs.contains(&(0, 4)));
        assert!(nbrs.contains(&(4, 0)));
        assert!(nbrs.contains(&(1, 1)));
    }

    #[test]
    fn test_local_order_phase_locked() {
        let grid = Grid::uniform(6, 1.3, 0.5);
        let r = grid.local_order(2, 3);
        assert!(
            (r - 1.0).abs() < 1e-12,
            "locked neighborhood should give r=1, got {}",
            r
        );
    }

    #[test]
    fn test_local_order_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = Grid::random(9, &mut rng);
        for row in 0..9 {
            for col in 0..9 {
                let r = grid.local_order(row, col);
                assert!((0.0..=1.0).contains(&r), "r out of range: {}", r);
            }
        }
    }

    #[test]
    fn test_opposed_phases_cancel() {
        // Checkerboard of opposite phases on an even grid.
        let mut grid = Grid::uniform(4, 0.0, 0.0);
        for row in 0..4 {
            for col in 0..4 {
                if (row + col) % 2 == 1 {
                    grid.get_mut(row, col).phase = std::f64::consts::PI;
                }
            }
        }
        // 3x3 block holds 5 of one phase, 4 of the other: r = |5-4|/9
        let r = grid.local_order(1, 1);
        assert!((r - 1.0 / 9.0).abs() < 1e-12, "got {}", r);
    }
}
