//! Timed test-case runner around [`build_mst`].
//!
//! Each case generates a [`dense_prefix_graph`], builds its spanning tree,
//! and records the wall-clock time of the build. Reports render in a plain
//! text layout:
//!
//! ```text
//! Test Case with V = 4 and E = 6
//! Following are the edges of the constructed MST:
//! 0 -- 1 == 3
//! 0 -- 2 == 6
//! 0 -- 3 == 9
//! Total cost of MST: 18
//! Time taken: 2100 nanoseconds
//! ```

use std::fmt::{self, Display};
use std::ops::AddAssign;
use std::time::{Duration, Instant};

use log::debug;
use num_traits::Zero;

use crate::cs::graph::generator::dense_prefix_graph;
use crate::cs::graph::kruskal::{build_mst, Edge, MinimumSpanningForest};
use crate::error::{Error, Result};

/// Which graphs the harness builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// One test case per entry, run in order.
    pub vertex_counts: Vec<usize>,
    /// Each case asks for `vertex_count + edges_offset` edges.
    pub edges_offset: usize,
    /// Edge `(i, j)` weighs `(i + j) * weight_factor`.
    pub weight_factor: i64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![4, 5, 10, 25, 50, 100, 200],
            edges_offset: 5,
            weight_factor: 3,
        }
    }
}

/// Outcome of one timed build.
#[derive(Debug, Clone)]
pub struct CaseReport<W> {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub forest: MinimumSpanningForest<W>,
    pub elapsed: Duration,
}

impl<W: Copy + Display> Display for CaseReport<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Test Case with V = {} and E = {}",
            self.vertex_count, self.edge_count
        )?;
        writeln!(f, "Following are the edges of the constructed MST:")?;
        for edge in self.forest.edges() {
            writeln!(f, "{} -- {} == {}", edge.src, edge.dest, edge.weight)?;
        }
        writeln!(f, "Total cost of MST: {}", self.forest.total_cost())?;
        write!(f, "Time taken: {} nanoseconds", self.elapsed.as_nanos())
    }
}

/// Builds the spanning tree of one graph and times the build.
pub fn run_case<W>(vertex_count: usize, edges: &[Edge<W>]) -> Result<CaseReport<W>>
where
    W: Copy + PartialOrd + Zero + AddAssign,
{
    let start = Instant::now();
    let forest = build_mst(vertex_count, edges)?;
    let elapsed = start.elapsed();

    debug!(
        "case V = {}: {} tree edges in {:?}",
        vertex_count,
        forest.len(),
        elapsed
    );

    Ok(CaseReport {
        vertex_count,
        edge_count: edges.len(),
        forest,
        elapsed,
    })
}

/// Runs every case in `config`, in order.
///
/// # Errors
/// * `InvalidInput` if `config.vertex_counts` is empty
pub fn run(config: &HarnessConfig) -> Result<Vec<CaseReport<i64>>> {
    if config.vertex_counts.is_empty() {
        return Err(Error::invalid_input("no vertex counts to run"));
    }

    config
        .vertex_counts
        .iter()
        .map(|&v| {
            let edges = dense_prefix_graph(v, config.edges_offset, config.weight_factor);
            run_case(v, &edges)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.vertex_counts, vec![4, 5, 10, 25, 50, 100, 200]);
        assert_eq!(config.edges_offset, 5);
        assert_eq!(config.weight_factor, 3);
    }

    #[test]
    fn test_run_default_cases_are_spanning() {
        let reports = run(&HarnessConfig::default()).unwrap();
        assert_eq!(reports.len(), 7);
        for report in &reports {
            assert!(report.forest.is_spanning_tree(report.vertex_count));
        }
        // V = 4 has every pair; the star around 0 is cheapest.
        assert_eq!(reports[0].edge_count, 6);
        assert_eq!(reports[0].forest.total_cost(), 18);
        // V = 200 is capped at 205 edges.
        assert_eq!(reports[6].edge_count, 205);
    }

    #[test]
    fn test_run_rejects_empty_config() {
        let config = HarnessConfig {
            vertex_counts: vec![],
            ..HarnessConfig::default()
        };
        assert!(matches!(run(&config), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_run_case_propagates_validation_errors() {
        let edges = vec![Edge::new(0, 3, 1)];
        assert!(matches!(
            run_case(2, &edges),
            Err(Error::OutOfRangeVertex { vertex: 3, .. })
        ));
    }

    #[test]
    fn test_report_format() {
        let edges = vec![Edge::new(0, 1, 10), Edge::new(0, 3, 5), Edge::new(2, 3, 4)];
        let mut report = run_case(4, &edges).unwrap();
        report.elapsed = Duration::from_nanos(1234);

        assert_eq!(
            report.to_string(),
            "Test Case with V = 4 and E = 3\n\
             Following are the edges of the constructed MST:\n\
             2 -- 3 == 4\n\
             0 -- 3 == 5\n\
             0 -- 1 == 10\n\
             Total cost of MST: 19\n\
             Time taken: 1234 nanoseconds"
        );
    }
}
