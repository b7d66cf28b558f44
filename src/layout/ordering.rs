//! Intra-rank ordering: alternating sweeps that pull each node toward the
//! median position of its neighbors in the adjacent rank. Ties keep the
//! previous order, which makes the whole pass deterministic.

use std::cmp::Ordering;

use itertools::Itertools;

/// Groups nodes into layers by rank and runs `passes` median sweeps.
/// Returns the layers in rank order; position within a layer is the order.
pub(super) fn order_within_ranks(
    ranks: &[usize],
    forward: &[(usize, usize)],
    passes: usize,
) -> Vec<Vec<usize>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut layers = vec![Vec::new(); max_rank + 1];
    for (node, &rank) in ranks.iter().enumerate() {
        layers[rank].push(node);
    }

    // Only edges spanning exactly one rank steer the ordering; longer spans
    // contribute little and would need dummy nodes to matter.
    let mut down = vec![Vec::new(); ranks.len()];
    let mut up = vec![Vec::new(); ranks.len()];
    for &(from, to) in forward {
        if ranks[to] == ranks[from] + 1 {
            down[from].push(to);
            up[to].push(from);
        }
    }

    for pass in 0..passes {
        if pass % 2 == 0 {
            for rank in 1..layers.len() {
                reorder_layer(&mut layers, rank, &up, ranks.len());
            }
        } else {
            for rank in (0..layers.len().saturating_sub(1)).rev() {
                reorder_layer(&mut layers, rank, &down, ranks.len());
            }
        }
    }

    layers
}

fn reorder_layer(
    layers: &mut [Vec<usize>],
    layer_index: usize,
    neighbors: &[Vec<usize>],
    node_count: usize,
) {
    let mut position = vec![0usize; node_count];
    for layer in layers.iter() {
        for (pos, &node) in layer.iter().enumerate() {
            position[node] = pos;
        }
    }

    let current = &layers[layer_index];
    let reordered: Vec<usize> = current
        .iter()
        .map(|&node| {
            let score =
                median_position(&neighbors[node], &position).unwrap_or(position[node] as f64);
            (node, score)
        })
        .sorted_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| position[a.0].cmp(&position[b.0]))
        })
        .map(|(node, _)| node)
        .collect();
    layers[layer_index] = reordered;
}

fn median_position(neighbors: &[usize], position: &[usize]) -> Option<f64> {
    if neighbors.is_empty() {
        return None;
    }
    let mut positions: Vec<usize> = neighbors.iter().map(|&n| position[n]).collect();
    positions.sort_unstable();
    let mid = positions.len() / 2;
    Some(if positions.len() % 2 == 1 {
        positions[mid] as f64
    } else {
        (positions[mid - 1] + positions[mid]) as f64 / 2.0
    })
}
