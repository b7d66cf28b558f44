//! Rank (layer) assignment: longest path from any source node, measured in
//! edge hops. Back edges found by depth-first traversal are excluded so a
//! cyclic input still ranks every node; the edges themselves stay in the
//! rendered graph.

use std::collections::VecDeque;

/// Returns the subset of `edges` that is acyclic when traversed in input
/// order. Self-loops count as back edges.
pub(super) fn drop_back_edges(node_count: usize, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut adjacency = vec![Vec::new(); node_count];
    for (idx, &(from, _)) in edges.iter().enumerate() {
        adjacency[from].push(idx);
    }

    // 0 = unvisited, 1 = on the current path, 2 = done.
    let mut state = vec![0u8; node_count];
    let mut keep = vec![true; edges.len()];
    for node in 0..node_count {
        if state[node] == 0 {
            mark_back_edges(node, &adjacency, edges, &mut state, &mut keep);
        }
    }

    edges
        .iter()
        .zip(keep)
        .filter_map(|(&edge, kept)| kept.then_some(edge))
        .collect()
}

fn mark_back_edges(
    node: usize,
    adjacency: &[Vec<usize>],
    edges: &[(usize, usize)],
    state: &mut [u8],
    keep: &mut [bool],
) {
    state[node] = 1;
    for &edge_idx in &adjacency[node] {
        let (_, to) = edges[edge_idx];
        match state[to] {
            0 => mark_back_edges(to, adjacency, edges, state, keep),
            1 => keep[edge_idx] = false,
            _ => {}
        }
    }
    state[node] = 2;
}

/// Assigns each node the length of the longest forward path reaching it.
/// Nodes without incoming edges (including isolated ones) land at rank 0.
pub(super) fn assign_ranks(node_count: usize, forward: &[(usize, usize)]) -> Vec<usize> {
    let mut indegree = vec![0usize; node_count];
    let mut outgoing = vec![Vec::new(); node_count];
    for &(from, to) in forward {
        outgoing[from].push(to);
        indegree[to] += 1;
    }

    let mut queue: VecDeque<usize> = (0..node_count).filter(|&n| indegree[n] == 0).collect();
    let mut topological = Vec::with_capacity(node_count);
    while let Some(node) = queue.pop_front() {
        topological.push(node);
        for &next in &outgoing[node] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    let mut ranks = vec![0usize; node_count];
    for &node in &topological {
        let current = ranks[node];
        for &next in &outgoing[node] {
            ranks[next] = ranks[next].max(current + 1);
        }
    }
    ranks
}
