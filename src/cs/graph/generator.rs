//! Synthetic test graphs for exercising the spanning-tree builder.
//!
//! - [`dense_prefix_graph`]: deterministic, low-index-heavy edge lists
//! - [`random_connected_graph`]: a random spanning tree plus random extra edges

use rand::Rng;

use crate::cs::graph::kruskal::Edge;
use crate::error::{Error, Result};

/// Builds the first `vertex_count + edges_offset` vertex pairs `(i, j)` with
/// `i < j`, in lexicographic order, weighted `(i + j) * weight_factor`.
///
/// Small vertex counts have fewer pairs than requested; every pair is
/// then kept. The result is always connected, since the first
/// `vertex_count - 1` pairs form a star around vertex 0.
///
/// # Examples
/// ```
/// use kruskal::graph::generator::dense_prefix_graph;
///
/// let edges = dense_prefix_graph(4, 5, 3);
/// assert_eq!(edges.len(), 6);
/// assert_eq!((edges[0].src, edges[0].dest, edges[0].weight), (0, 1, 3));
/// ```
pub fn dense_prefix_graph(
    vertex_count: usize,
    edges_offset: usize,
    weight_factor: i64,
) -> Vec<Edge<i64>> {
    let limit = vertex_count + edges_offset;
    (0..vertex_count)
        .flat_map(|i| ((i + 1)..vertex_count).map(move |j| (i, j)))
        .take(limit)
        .map(|(i, j)| Edge::new(i, j, (i + j) as i64 * weight_factor))
        .collect()
}

/// Generates a connected graph on `vertex_count` vertices.
///
/// Every vertex `i > 0` is first joined to a uniformly random earlier
/// vertex, then `extra_edges` further edges are added between random
/// distinct vertices. Weights are uniform in `1..=max_weight`. Extra edges
/// may repeat existing pairs.
///
/// # Errors
/// * `InvalidInput` if `max_weight < 1`
/// * `InvalidInput` if `extra_edges > 0` but there are fewer than two vertices
pub fn random_connected_graph<R: Rng + ?Sized>(
    vertex_count: usize,
    extra_edges: usize,
    max_weight: i64,
    rng: &mut R,
) -> Result<Vec<Edge<i64>>> {
    if max_weight < 1 {
        return Err(Error::invalid_input("max_weight must be at least 1"));
    }
    if extra_edges > 0 && vertex_count < 2 {
        return Err(Error::invalid_input("extra edges need at least two vertices"));
    }

    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1) + extra_edges);
    for v in 1..vertex_count {
        let u = rng.gen_range(0..v);
        edges.push(Edge::new(u, v, rng.gen_range(1..=max_weight)));
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..vertex_count);
        // Shift past `u` so the pair is never a self-loop.
        let mut v = rng.gen_range(0..vertex_count - 1);
        if v >= u {
            v += 1;
        }
        edges.push(Edge::new(u, v, rng.gen_range(1..=max_weight)));
    }

    Ok(edges)
}
