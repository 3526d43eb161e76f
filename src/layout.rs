use bevy::math::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::RandomGraph;

/// Fixed layout seed so a given topology always lays out the same way
/// across redraws and rebuilds
pub const LAYOUT_SEED: u64 = 42;

const ITERATIONS: usize = 250;
const INITIAL_TEMPERATURE: f32 = 0.1;
const COOLING: f32 = 0.97;
/// Margin keeping nodes away from the unit-square border
const MARGIN: f32 = 0.06;

/// Compute one position per node inside the unit square with a seeded
/// force-directed pass: all pairs repel, edges pull their endpoints
/// together, and a cooling temperature caps each step.
///
/// Deterministic for a given (topology, seed) pair; the caller maps the
/// unit square into whatever screen region it owns.
pub fn compute_layout(graph: &RandomGraph, seed: u64) -> Vec<Vec2> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Vec2::splat(0.5)];
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // Start on a circle with a little jitter so symmetric topologies
    // still converge to distinct positions
    let mut positions: Vec<Vec2> = (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            let jitter = Vec2::new(rng.random_range(-0.05..0.05), rng.random_range(-0.05..0.05));
            Vec2::splat(0.5) + 0.35 * Vec2::new(angle.cos(), angle.sin()) + jitter
        })
        .collect();

    // Ideal edge length for n nodes in unit area
    let k = (1.0 / n as f32).sqrt();
    let mut temperature = INITIAL_TEMPERATURE;

    for _ in 0..ITERATIONS {
        let mut displacement = vec![Vec2::ZERO; n];

        // Pairwise repulsion
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.length().max(1e-4);
                let push = (k * k / distance) * (delta / distance);
                displacement[i] += push;
                displacement[j] -= push;
            }
        }

        // Spring attraction along edges
        for edge in graph.edges() {
            let (a, b) = (edge.from.index(), edge.to.index());
            let delta = positions[a] - positions[b];
            let distance = delta.length().max(1e-4);
            let pull = (distance * distance / k) * (delta / distance);
            displacement[a] -= pull;
            displacement[b] += pull;
        }

        // Step, capped by the current temperature
        for i in 0..n {
            let length = displacement[i].length();
            if length > 1e-6 {
                let step = displacement[i] / length * length.min(temperature);
                positions[i] =
                    (positions[i] + step).clamp(Vec2::splat(MARGIN), Vec2::splat(1.0 - MARGIN));
            }
        }

        temperature *= COOLING;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_graph() -> RandomGraph {
        RandomGraph::generate(8, 0.5, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_layout_is_deterministic() {
        let graph = sample_graph();

        let first = compute_layout(&graph, LAYOUT_SEED);
        let second = compute_layout(&graph, LAYOUT_SEED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_one_position_per_node() {
        let graph = sample_graph();
        assert_eq!(compute_layout(&graph, LAYOUT_SEED).len(), 8);

        let single = RandomGraph::from_edges(1, &[]);
        assert_eq!(compute_layout(&single, LAYOUT_SEED), vec![Vec2::splat(0.5)]);
    }

    #[test]
    fn test_layout_stays_in_unit_square() {
        let graph = sample_graph();

        for position in compute_layout(&graph, LAYOUT_SEED) {
            assert!(position.x >= 0.0 && position.x <= 1.0);
            assert!(position.y >= 0.0 && position.y <= 1.0);
        }
    }

    #[test]
    fn test_layout_separates_nodes() {
        // Complete graph is the tightest packing the forces must resolve
        let complete = RandomGraph::generate(5, 1.0, &mut StdRng::seed_from_u64(1));
        let positions = compute_layout(&complete, LAYOUT_SEED);

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let distance = positions[i].distance(positions[j]);
                assert!(distance > 0.01, "nodes {} and {} overlap", i, j);
            }
        }
    }
}
