//! Coalescing rigid components that already move as one body.

use std::collections::BTreeSet;

use nalgebra::RowDVector;

use crate::exact::{rank, Rat};
use crate::framework::{Framework, NodeSet};

use super::matrix::{restriction_row, stack_rows, RigidityMatrix};
use super::RigidityError;

/// Merge rigid components whose relative motion is already eliminated.
///
/// For every pair of components sharing at least one joint, all
/// length-preservation rows for cross-component joint pairs not already
/// connected by a bar are accumulated into ONE augmented matrix. If its rank
/// equals the framework's global rank, every added constraint was implied:
/// the two components cannot move relative to each other, and the pair is
/// queued for merging. The pair is judged as a whole; testing the virtual
/// bars one at a time would accept pairs whose joints are only pairwise
/// constrained. Queued merges are then applied by unioning into the
/// higher-indexed component, and emptied entries are dropped.
///
/// Idempotent: rerunning on the output produces no further merges.
pub fn merge_subgraphs(
    fw: &Framework,
    subgraphs: Vec<NodeSet>,
    dim: usize,
) -> Result<Vec<NodeSet>, RigidityError> {
    let matrix = RigidityMatrix::build(fw, dim)?;
    let global_rank = matrix.rank();
    let num_nodes = fw.num_nodes();
    for set in &subgraphs {
        if let Some(&node) = set.iter().find(|n| n.0 >= num_nodes) {
            return Err(RigidityError::UnknownNode { node });
        }
    }

    // One independent set per node slot: which components contain this joint.
    let mut containing: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); num_nodes];
    for (idx, set) in subgraphs.iter().enumerate() {
        for &node in set {
            containing[node.0].insert(idx);
        }
    }

    let mut merges: Vec<(usize, usize)> = Vec::new();
    for (idx, set) in subgraphs.iter().enumerate() {
        let mut neighbors: BTreeSet<usize> = BTreeSet::new();
        for &node in set {
            neighbors.extend(containing[node.0].iter().copied());
        }
        for &other in &neighbors {
            // Skip self and handle each unordered pair once.
            if other <= idx {
                continue;
            }
            let mut extra: Vec<RowDVector<Rat>> = Vec::new();
            for &a in set {
                for &b in &subgraphs[other] {
                    if a == b || fw.has_edge(a, b) {
                        continue;
                    }
                    extra.push(restriction_row(fw, dim, a, b));
                }
            }
            let augmented = stack_rows(matrix.matrix(), &extra);
            if rank(&augmented) == global_rank {
                merges.push((idx, other));
            }
        }
    }

    let mut subgraphs = subgraphs;
    for (a, b) in merges {
        let moved = std::mem::take(&mut subgraphs[a]);
        subgraphs[b].extend(moved);
    }
    Ok(subgraphs.into_iter().filter(|s| !s.is_empty()).collect())
}
