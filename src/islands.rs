//! Connected-region analysis of the coherence field.
//!
//! An island is a maximal connected set of nodes that all clear the fixed
//! coherence bar, linked through the same Moore torus adjacency the
//! coupling uses. Islands are transient: recomputed from the grid on
//! demand, never persisted.

use std::collections::VecDeque;

use crate::config::{ISLAND_COHERENCE_THRESHOLD, MIN_ISLAND_SIZE};
use crate::simulation::grid::Grid;

/// One qualifying coherent region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Island {
    /// Number of member nodes.
    pub size: usize,
    /// Spatial extent: count of distinct rows and columns touched.
    pub extent: (usize, usize),
    /// Graph diameter: the longest shortest path (in hops) between two
    /// members, walking only through the island.
    pub diameter: usize,
}

/// Find all coherent islands on the grid.
///
/// Two adjacent nodes are linked iff both have coherence >=
/// [`ISLAND_COHERENCE_THRESHOLD`]; components are found by BFS flood fill,
/// and components smaller than [`MIN_ISLAND_SIZE`] are dropped as noise
/// peaks. Both policy values are fixed configuration, not per-call inputs,
/// so island counts stay comparable across runs.
///
/// Cost is O(N²) for the fill plus O(k²) per island of k members for the
/// diameter; the detector runs once per simulation, not per step.
pub fn detect_islands(grid: &Grid) -> Vec<Island> {
    let size = grid.size();
    let coherent: Vec<bool> = grid
        .nodes()
        .iter()
        .map(|n| n.coherence >= ISLAND_COHERENCE_THRESHOLD)
        .collect();
    let mut visited = vec![false; coherent.len()];
    let mut islands = Vec::new();

    for start in 0..coherent.len() {
        if visited[start] || !coherent[start] {
            continue;
        }
        let members = flood_fill(grid, &coherent, &mut visited, start);
        if members.len() < MIN_ISLAND_SIZE {
            continue;
        }

        let mut rows = vec![false; size];
        let mut cols = vec![false; size];
        for &idx in &members {
            rows[idx / size] = true;
            cols[idx % size] = true;
        }
        let extent = (
            rows.iter().filter(|&&r| r).count(),
            cols.iter().filter(|&&c| c).count(),
        );

        islands.push(Island {
            size: members.len(),
            extent,
            diameter: component_diameter(grid, &members),
        });
    }

    // Largest first, for stable reporting.
    islands.sort_by(|a, b| b.size.cmp(&a.size));
    islands
}

/// Largest island diameter, or 0 when no island qualifies. This is the
/// `max_chain_length` statistic of the run result.
pub fn max_chain_length(islands: &[Island]) -> usize {
    islands.iter().map(|i| i.diameter).max().unwrap_or(0)
}

/// BFS flood fill from `start` over coherent cells; returns member indices.
fn flood_fill(grid: &Grid, coherent: &[bool], visited: &mut [bool], start: usize) -> Vec<usize> {
    let size = grid.size();
    let mut members = Vec::new();
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(idx) = queue.pop_front() {
        members.push(idx);
        for (nr, nc) in grid.neighbors(idx / size, idx % size) {
            let nidx = nr * size + nc;
            if coherent[nidx] && !visited[nidx] {
                visited[nidx] = true;
                queue.push_back(nidx);
            }
        }
    }
    members
}

/// Longest shortest path within one component: BFS from every member,
/// restricted to member cells.
fn component_diameter(grid: &Grid, members: &[usize]) -> usize {
    let size = grid.size();
    let mut in_component = vec![false; size * size];
    for &idx in members {
        in_component[idx] = true;
    }

    let mut diameter = 0;
    let mut distance = vec![usize::MAX; size * size];
    for &source in members {
        for &idx in members {
            distance[idx] = usize::MAX;
        }
        distance[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(idx) = queue.pop_front() {
            diameter = diameter.max(distance[idx]);
            for (nr, nc) in grid.neighbors(idx / size, idx % size) {
                let nidx = nr * size + nc;
                if in_component[nidx] && distance[nidx] == usize::MAX {
                    distance[nidx] = distance[idx] + 1;
                    queue.push_back(nidx);
                }
            }
        }
    }
    diameter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low_grid(size: usize) -> Grid {
        Grid::uniform(size, 0.0, ISLAND_COHERENCE_THRESHOLD - 0.2)
    }

    fn raise(grid: &mut Grid, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            grid.get_mut(row, col).coherence = ISLAND_COHERENCE_THRESHOLD + 0.3;
        }
    }

    #[test]
    fn test_no_islands_below_threshold() {
        let islands = detect_islands(&low_grid(12));
        assert!(islands.is_empty(), "sub-threshold grid produced {:?}", islands);
    }

    #[test]
    fn test_single_hot_cell_is_noise() {
        let mut grid = low_grid(10);
        raise(&mut grid, &[(4, 4)]);
        assert!(
            detect_islands(&grid).is_empty(),
            "an isolated peak must not count as an island"
        );
    }

    #[test]
    fn test_pair_is_smallest_island() {
        let mut grid = low_grid(10);
        raise(&mut grid, &[(4, 4), (4, 5)]);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].size, 2);
        assert_eq!(islands[0].diameter, 1);
    }

    #[test]
    fn test_chain_diameter() {
        // Horizontal run of five: diameter 4 hops end to end.
        let mut grid = low_grid(12);
        raise(&mut grid, &[(6, 3), (6, 4), (6, 5), (6, 6), (6, 7)]);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].size, 5);
        assert_eq!(islands[0].diameter, 4);
        assert_eq!(islands[0].extent, (1, 5));
        assert_eq!(max_chain_length(&islands), 4);
    }

    #[test]
    fn test_diagonal_adjacency_links() {
        // Moore adjacency: a diagonal pair is one island, not two.
        let mut grid = low_grid(8);
        raise(&mut grid, &[(2, 2), (3, 3)]);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 1, "diagonal neighbors must link");
        assert_eq!(islands[0].diameter, 1);
    }

    #[test]
    fn test_separate_components_counted() {
        let mut grid = low_grid(12);
        raise(&mut grid, &[(1, 1), (1, 2)]);
        raise(&mut grid, &[(8, 8), (8, 9), (9, 8)]);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 2);
        // Sorted largest first.
        assert_eq!(islands[0].size, 3);
        assert_eq!(islands[1].size, 2);
    }

    #[test]
    fn test_wraparound_joins_edges() {
        // Cells on opposite edges of the torus are adjacent.
        let mut grid = low_grid(9);
        raise(&mut grid, &[(0, 0), (8, 0)]);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 1, "torus edges must connect");
    }

    #[test]
    fn test_full_grid_one_island() {
        let grid = Grid::uniform(6, 0.0, 0.9);
        let islands = detect_islands(&grid);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].size, 36);
        assert_eq!(islands[0].extent, (6, 6));
        // On a 6-torus with Moore moves, no two cells are more than 3 hops apart.
        assert_eq!(islands[0].diameter, 3);
    }

    #[test]
    fn test_max_chain_length_empty() {
        assert_eq!(max_chain_length(&[]), 0);
    }
}
