use std::cmp::Ordering;
use std::ops::AddAssign;

use log::{debug, trace};
use num_traits::Zero;
use rayon::prelude::*;

use crate::cs::graph::disjoint_set::DisjointSet;
use crate::error::{Error, Result};

/// Represents an undirected, weighted edge in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub src: usize,
    pub dest: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src: usize, dest: usize, weight: W) -> Self {
        Self { src, dest, weight }
    }
}

/// Edges chosen by Kruskal's algorithm, in the order they were accepted,
/// together with their summed weight.
///
/// For a connected graph on `V` vertices this is a minimum spanning tree
/// with `V - 1` edges; otherwise it is a spanning forest with fewer.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_cost: W,
    edges_scanned: usize,
}

impl<W: Copy> MinimumSpanningForest<W> {
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn total_cost(&self) -> W {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// How many sorted edges were examined before the scan stopped.
    pub fn edges_scanned(&self) -> usize {
        self.edges_scanned
    }

    /// Returns `true` if the forest is a single tree covering all
    /// `vertex_count` vertices, i.e. the input graph was connected.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }

    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_cost)
    }
}

/// Checks that every edge names vertices in `0..vertex_count` and carries
/// an orderable weight.
///
/// # Errors
/// * `OutOfRangeVertex` for the first edge with an endpoint `>= vertex_count`
/// * `UnorderedWeight` for the first edge whose weight is not comparable
///   with itself (e.g. `f64::NAN`)
pub fn validate<W: PartialOrd>(vertex_count: usize, edges: &[Edge<W>]) -> Result<()> {
    for (idx, edge) in edges.iter().enumerate() {
        for vertex in [edge.src, edge.dest] {
            if vertex >= vertex_count {
                return Err(Error::OutOfRangeVertex {
                    edge: idx,
                    vertex,
                    vertex_count,
                });
            }
        }
        if edge.weight.partial_cmp(&edge.weight).is_none() {
            return Err(Error::UnorderedWeight { edge: idx });
        }
    }
    Ok(())
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// - `vertex_count` is the number of vertices (labeled `0..vertex_count`).
/// - `edges` is left untouched; the builder sorts its own copy.
///
/// Edges are scanned in ascending weight. Equal weights keep their input
/// order, so of two identical edges only the first can be accepted. The
/// scan stops once `vertex_count - 1` edges are accepted or the edges run
/// out. A disconnected graph is not an error: the result is then a spanning
/// forest and [`MinimumSpanningForest::is_spanning_tree`] returns `false`.
///
/// # Examples
/// ```
/// use kruskal::{build_mst, Edge};
///
/// let edges = vec![
///     Edge::new(0, 1, 10),
///     Edge::new(0, 2, 6),
///     Edge::new(0, 3, 5),
///     Edge::new(1, 3, 15),
///     Edge::new(2, 3, 4),
/// ];
/// let mst = build_mst(4, &edges).unwrap();
/// assert_eq!(mst.total_cost(), 19);
/// assert!(mst.is_spanning_tree(4));
/// ```
///
/// # Complexity
/// * Time: O(E log E) for the sort, plus O(E α(V)) for the scan
/// * Space: O(V + E)
///
/// # Errors
/// Fails wholesale, before any work, if [`validate`] rejects the input.
pub fn build_mst<W>(vertex_count: usize, edges: &[Edge<W>]) -> Result<MinimumSpanningForest<W>>
where
    W: Copy + PartialOrd + Zero + AddAssign,
{
    validate(vertex_count, edges)?;

    let mut sorted = edges.to_vec();
    // Validation rules out incomparable weights.
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    Ok(select(vertex_count, &sorted))
}

/// Builds one spanning forest per `(vertex_count, edges)` pair in parallel.
///
/// Each build owns its own disjoint-set, so nothing is shared between
/// graphs. Results come back in input order.
pub fn build_mst_batch<W>(
    graphs: &[(usize, Vec<Edge<W>>)],
) -> Vec<Result<MinimumSpanningForest<W>>>
where
    W: Copy + PartialOrd + Zero + AddAssign + Send + Sync,
{
    graphs
        .par_iter()
        .map(|(vertex_count, edges)| build_mst(*vertex_count, edges))
        .collect()
}

/// Greedy scan over edges already sorted by ascending weight.
fn select<W>(vertex_count: usize, sorted: &[Edge<W>]) -> MinimumSpanningForest<W>
where
    W: Copy + Zero + AddAssign,
{
    let target = vertex_count.saturating_sub(1);
    debug!(
        "kruskal: {} vertices, {} edges, looking for {} tree edges",
        vertex_count,
        sorted.len(),
        target
    );

    let mut sets = DisjointSet::new(vertex_count);
    let mut edges = Vec::with_capacity(target);
    let mut total_cost = W::zero();
    let mut edges_scanned = 0;

    for edge in sorted {
        if edges.len() == target {
            break;
        }
        edges_scanned += 1;

        let x = sets.find(edge.src);
        let y = sets.find(edge.dest);
        if x == y {
            trace!(
                "skipping edge ({}, {}): same component (root {})",
                edge.src,
                edge.dest,
                x
            );
            continue;
        }

        trace!("adding edge ({}, {})", edge.src, edge.dest);
        edges.push(*edge);
        total_cost += edge.weight;
        sets.union(x, y);
    }

    debug!(
        "kruskal: accepted {} of {} scanned ({} total), {} component(s) left",
        edges.len(),
        edges_scanned,
        sorted.len(),
        sets.component_count()
    );

    MinimumSpanningForest {
        edges,
        total_cost,
        edges_scanned,
    }
}
