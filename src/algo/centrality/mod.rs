//! Centrality measures: ranking cities by importance in the road network.

mod betweenness;
mod closeness;

pub use betweenness::betweenness;
pub use closeness::closeness;

use petgraph::graph::NodeIndex;
use std::cmp::Ordering;

/// Min-heap entry for the weight-ordered passes both measures run:
/// smallest distance pops first, ties broken by node index.
#[derive(Debug, Clone, Copy)]
struct MinScored(f64, NodeIndex);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.index().cmp(&self.1.index()))
    }
}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
