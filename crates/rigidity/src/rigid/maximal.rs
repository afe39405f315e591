//! Discovery of maximal rigid substructures in 2D and 3D.

use std::collections::BTreeSet;

use crate::exact::{is_collinear, rank};
use crate::framework::{Framework, InducedSubgraph, NodeId, NodeSet};

use super::matrix::{restriction_row, stack_rows, RigidityMatrix};
use super::pinning::rigid_component_from_pinning;
use super::RigidityError;

/// Maximal rigid components of a 2D framework.
///
/// For each bar not yet covered by a discovered component, pin its two
/// endpoints and collect everything they immobilize. Components are reported
/// in bar insertion order; overlapping components are possible and preserved.
pub fn max_rigid_subgraphs_2d(fw: &Framework) -> Result<Vec<NodeSet>, RigidityError> {
    let matrix = RigidityMatrix::build(fw, 2)?;
    let mut found: Vec<NodeSet> = Vec::new();
    for &(u, v) in fw.edges() {
        if covered(&found, &[u, v]) {
            continue;
        }
        found.push(rigid_component_from_pinning(&matrix, [u, v])?);
    }
    Ok(found)
}

/// Maximal rigid components of a 3D framework.
///
/// Pinning in 3D needs three non-collinear joints, so discovery is driven by
/// triangles over each bar: shared neighbors of the endpoints, with an exact
/// collinearity filter. When `assume_triangles` is false, near-triangles are
/// considered too: a joint adjacent to exactly one endpoint whose implied bar
/// to the other endpoint is rank-redundant already behaves as a triangle.
/// Any bar still uncovered afterwards is its own trivial 2-joint component
/// (a lone bar has no internal freedom).
pub fn max_rigid_subgraphs_3d(
    fw: &Framework,
    assume_triangles: bool,
) -> Result<Vec<NodeSet>, RigidityError> {
    let matrix = RigidityMatrix::build(fw, 3)?;
    let mut found: Vec<NodeSet> = Vec::new();

    for &(u, v) in fw.edges() {
        for w in fw.shared_neighbors(u, v) {
            if is_collinear(fw.position(u), fw.position(v), fw.position(w), 3) {
                continue;
            }
            if covered(&found, &[u, v, w]) {
                continue;
            }
            found.push(rigid_component_from_pinning(&matrix, [u, v, w])?);
        }
    }

    if !assume_triangles {
        let global_rank = matrix.rank();
        for &(u, v) in fw.edges() {
            for w in one_sided_neighbors(fw, u, v) {
                if is_collinear(fw.position(u), fw.position(v), fw.position(w), 3) {
                    continue;
                }
                if covered(&found, &[u, v, w]) {
                    continue;
                }
                // The implied bar closes the triangle at the endpoint w is
                // not yet attached to. If it adds no rank, the constraint is
                // already implied and (u, v, w) pins a rigid component.
                let missing = if fw.has_edge(u, w) { (v, w) } else { (u, w) };
                let row = restriction_row(fw, 3, missing.0, missing.1);
                let augmented = stack_rows(matrix.matrix(), std::slice::from_ref(&row));
                if rank(&augmented) == global_rank {
                    found.push(rigid_component_from_pinning(&matrix, [u, v, w])?);
                }
            }
        }
    }

    for &(u, v) in fw.edges() {
        if covered(&found, &[u, v]) {
            continue;
        }
        found.push([u, v].into_iter().collect());
    }
    Ok(found)
}

/// Convert discovered node sets into induced subgraphs of the framework.
pub fn as_induced(fw: &Framework, subgraphs: &[NodeSet]) -> Vec<InducedSubgraph> {
    subgraphs.iter().map(|s| fw.induced(s)).collect()
}

fn covered(sets: &[NodeSet], nodes: &[NodeId]) -> bool {
    sets.iter()
        .any(|s| nodes.iter().all(|n| s.contains(n)))
}

/// Joints adjacent to exactly one of `u`, `v` (near-triangle candidates).
fn one_sided_neighbors(fw: &Framework, u: NodeId, v: NodeId) -> Vec<NodeId> {
    let nu: BTreeSet<NodeId> = fw.neighbors(u).iter().copied().collect();
    let nv: BTreeSet<NodeId> = fw.neighbors(v).iter().copied().collect();
    nu.symmetric_difference(&nv)
        .copied()
        .filter(|&w| w != u && w != v)
        .collect()
}
