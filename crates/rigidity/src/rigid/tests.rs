use proptest::prelude::*;

use super::*;
use crate::framework::rand::{draw_framework_grid, GridCfg, ReplayToken};
use crate::framework::special::{dumbbell, jansen_walker, parallel_four_bar};
use crate::framework::{Framework, NodeId, NodeSet};

fn set(ids: &[usize]) -> NodeSet {
    ids.iter().map(|&i| NodeId(i)).collect()
}

fn sets(groups: &[&[usize]]) -> Vec<NodeSet> {
    groups.iter().map(|g| set(g)).collect()
}

/// Two triangles sharing the bar 1-2: rigid as a whole, handy for the
/// positive merge path.
fn triangle_pair() -> Framework {
    let mut fw = Framework::new();
    let ids = [
        fw.add_node_ints(&[0, 0]),
        fw.add_node_ints(&[4, 0]),
        fw.add_node_ints(&[2, 3]),
        fw.add_node_ints(&[6, 3]),
    ];
    for (a, b) in [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)] {
        fw.add_edge(ids[a], ids[b]);
    }
    fw
}

/// Complete bipartite K5,5 at generic integer positions: triangle-free but
/// infinitesimally rigid in 3D, so only the near-triangle pass can find it.
fn bipartite_k55() -> Framework {
    let mut fw = Framework::new();
    let a: Vec<_> = [
        [1, -5, 3],
        [-8, -7, 8],
        [-6, 2, 9],
        [-8, 7, -3],
        [-8, -7, 4],
    ]
    .iter()
    .map(|c| fw.add_node_ints(c))
    .collect();
    let b: Vec<_> = [
        [4, -7, -2],
        [-7, 8, 4],
        [-8, 9, -6],
        [-2, 9, -8],
        [9, 9, 3],
    ]
    .iter()
    .map(|c| fw.add_node_ints(c))
    .collect();
    for &x in &a {
        for &y in &b {
            fw.add_edge(x, y);
        }
    }
    fw
}

#[test]
fn four_bar_is_a_mechanism() {
    let fw = parallel_four_bar(false);
    assert_eq!(rigidity_rank(&fw, 2).unwrap(), 4);
    assert_eq!(motion_dof(&fw, 2).unwrap(), 4);
    assert!(!is_rigid(&fw, 2).unwrap());
    // One 2-node component per bar, none spanning more.
    let subs = max_rigid_subgraphs_2d(&fw).unwrap();
    assert_eq!(subs, sets(&[&[0, 1], &[1, 2], &[2, 3], &[0, 3]]));
}

#[test]
fn braced_four_bar_is_rigid() {
    let fw = parallel_four_bar(true);
    assert_eq!(motion_dof(&fw, 2).unwrap(), 3);
    assert!(is_rigid(&fw, 2).unwrap());
    let subs = max_rigid_subgraphs_2d(&fw).unwrap();
    assert_eq!(subs, sets(&[&[0, 1, 2, 3]]));
}

#[test]
fn walker_components_follow_bar_order() {
    let fw = jansen_walker(false);
    assert_eq!(rigidity_rank(&fw, 2).unwrap(), 10);
    assert_eq!(motion_dof(&fw, 2).unwrap(), 4);
    assert!(!is_rigid(&fw, 2).unwrap());
    let subs = max_rigid_subgraphs_2d(&fw).unwrap();
    // The two triangles come out with their rigidly attached joints, the
    // four loose bars on their own; order is bar insertion order.
    assert_eq!(
        subs,
        sets(&[&[0, 1, 6], &[1, 2], &[2, 3], &[3, 4, 5], &[0, 5], &[3, 6]])
    );
    // No pair of these components is rigidly coupled yet.
    let merged = merge_subgraphs(&fw, subs.clone(), 2).unwrap();
    assert_eq!(merged, subs);
}

#[test]
fn braced_walker_is_one_component() {
    let fw = jansen_walker(true);
    assert!(is_rigid(&fw, 2).unwrap());
    let subs = max_rigid_subgraphs_2d(&fw).unwrap();
    assert_eq!(subs, sets(&[&[0, 1, 2, 3, 4, 5, 6]]));
}

#[test]
fn pinning_the_whole_node_set_returns_it() {
    let fw = jansen_walker(false);
    let matrix = RigidityMatrix::build(&fw, 2).unwrap();
    let all: NodeSet = (0..fw.num_nodes()).map(NodeId).collect();
    let got = rigid_component_from_pinning(&matrix, all.iter().copied()).unwrap();
    assert_eq!(got, all);
}

#[test]
fn pinning_accepts_any_iterator_of_pins() {
    let fw = parallel_four_bar(true);
    let matrix = RigidityMatrix::build(&fw, 2).unwrap();
    let from_array = rigid_component_from_pinning(&matrix, [NodeId(0), NodeId(1)]).unwrap();
    let from_vec =
        rigid_component_from_pinning(&matrix, vec![NodeId(1), NodeId(0), NodeId(1)]).unwrap();
    assert_eq!(from_array, from_vec);
    assert_eq!(from_array, set(&[0, 1, 2, 3]));
}

#[test]
fn empty_edge_set_has_rank_zero() {
    let mut fw = Framework::new();
    for k in 0..3 {
        fw.add_node_ints(&[k, 0]);
    }
    let matrix = RigidityMatrix::build(&fw, 2).unwrap();
    assert_eq!(matrix.rank(), 0);
    // With no bars, pinned joints immobilize nothing else.
    let got = rigid_component_from_pinning(&matrix, [NodeId(0), NodeId(1)]).unwrap();
    assert_eq!(got, set(&[0, 1]));
}

#[test]
fn dumbbell_halves_stay_separate() {
    let fw = dumbbell();
    assert_eq!(rigidity_rank(&fw, 3).unwrap(), 19);
    assert_eq!(motion_dof(&fw, 3).unwrap(), 11);
    assert!(!is_rigid(&fw, 3).unwrap());

    let expected = sets(&[&[0, 1, 2, 3, 4], &[5, 6, 7, 8, 9], &[4, 5]]);
    let subs = max_rigid_subgraphs_3d(&fw, true).unwrap();
    assert_eq!(subs, expected);
    // The near-triangle pass finds nothing extra here.
    assert_eq!(max_rigid_subgraphs_3d(&fw, false).unwrap(), expected);

    // The bridging bar alone does not remove the relative rotation, so the
    // merger must leave all three components untouched.
    let merged = merge_subgraphs(&fw, subs.clone(), 3).unwrap();
    assert_eq!(merged, subs);
}

#[test]
fn collinear_triangle_yields_only_trivial_bars() {
    // Four joints on a line, 0-1-2 pairwise connected plus a tail bar 2-3.
    // The triangle 0-1-2 is degenerate and 3 is a degenerate near-triangle
    // candidate for the bar 1-2, so no triple may drive pinning and every
    // bar stays its own component.
    let mut fw = Framework::new();
    let ids = [
        fw.add_node_ints(&[0, 0, 0]),
        fw.add_node_ints(&[1, 1, 1]),
        fw.add_node_ints(&[2, 2, 2]),
        fw.add_node_ints(&[3, 3, 3]),
    ];
    for (a, b) in [(0, 1), (0, 2), (1, 2), (2, 3)] {
        fw.add_edge(ids[a], ids[b]);
    }
    // The three rows of the triangle are dependent along the line.
    assert_eq!(rigidity_rank(&fw, 3).unwrap(), 3);
    assert!(!is_rigid(&fw, 3).unwrap());

    let expected = sets(&[&[0, 1], &[0, 2], &[1, 2], &[2, 3]]);
    assert_eq!(max_rigid_subgraphs_3d(&fw, true).unwrap(), expected);
    assert_eq!(max_rigid_subgraphs_3d(&fw, false).unwrap(), expected);
}

#[test]
fn near_triangles_discover_triangle_free_rigidity() {
    let fw = bipartite_k55();
    assert_eq!(rigidity_rank(&fw, 3).unwrap(), 24);
    assert!(is_rigid(&fw, 3).unwrap());

    // No triangles at all: assuming them yields only the trivial bars.
    let assume = max_rigid_subgraphs_3d(&fw, true).unwrap();
    assert_eq!(assume.len(), fw.num_edges());
    assert!(assume.iter().all(|s| s.len() == 2));

    // The near-triangle pass recovers the single full component.
    let near = max_rigid_subgraphs_3d(&fw, false).unwrap();
    assert_eq!(near, sets(&[&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]]));
}

#[test]
fn merge_coalesces_rigidly_coupled_triangles() {
    let fw = triangle_pair();
    assert_eq!(rigidity_rank(&fw, 2).unwrap(), 5);
    let merged = merge_subgraphs(&fw, sets(&[&[0, 1, 2], &[1, 2, 3]]), 2).unwrap();
    assert_eq!(merged, sets(&[&[0, 1, 2, 3]]));
    // Idempotent on its own output.
    let again = merge_subgraphs(&fw, merged.clone(), 2).unwrap();
    assert_eq!(again, merged);
}

#[test]
fn merge_rejects_flexible_pairs() {
    let fw = parallel_four_bar(false);
    let subs = sets(&[&[0, 1], &[1, 2]]);
    // The two bars share joint 1 but can still fold about it.
    let merged = merge_subgraphs(&fw, subs.clone(), 2).unwrap();
    assert_eq!(merged, subs);
}

#[test]
fn merge_ignores_disjoint_components() {
    let fw = parallel_four_bar(false);
    // No shared joint, so the pair is never even tested.
    let subs = sets(&[&[0, 1], &[2, 3]]);
    let merged = merge_subgraphs(&fw, subs.clone(), 2).unwrap();
    assert_eq!(merged, subs);
}

#[test]
fn induced_output_form() {
    let fw = parallel_four_bar(true);
    let subs = max_rigid_subgraphs_2d(&fw).unwrap();
    let induced = as_induced(&fw, &subs);
    assert_eq!(induced.len(), 1);
    assert_eq!(induced[0].nodes, set(&[0, 1, 2, 3]));
    assert_eq!(induced[0].edges.len(), 5);
}

#[test]
fn dimension_preconditions_fail_fast() {
    let fw = parallel_four_bar(false);
    assert_eq!(
        RigidityMatrix::build(&fw, 4).unwrap_err(),
        RigidityError::UnsupportedDimension { dim: 4 }
    );
    // Planar joints cannot be embedded in 3D.
    assert_eq!(
        RigidityMatrix::build(&fw, 3).unwrap_err(),
        RigidityError::Dimension {
            node: NodeId(0),
            coords: 2,
            dim: 3
        }
    );
}

#[test]
fn pinning_preconditions_fail_fast() {
    let fw = parallel_four_bar(false);
    let matrix = RigidityMatrix::build(&fw, 2).unwrap();
    assert_eq!(
        rigid_component_from_pinning(&matrix, [NodeId(0)]).unwrap_err(),
        RigidityError::InsufficientPins { got: 1, need: 2 }
    );
    assert_eq!(
        rigid_component_from_pinning(&matrix, [NodeId(0), NodeId(99)]).unwrap_err(),
        RigidityError::UnknownNode { node: NodeId(99) }
    );
}

#[test]
fn rank_is_independent_of_bar_order() {
    let fw = jansen_walker(true);
    let mut reversed = Framework::new();
    for node in fw.nodes() {
        reversed.add_node(node.pos.clone());
    }
    for &(u, v) in fw.edges().iter().rev() {
        reversed.add_edge(u, v);
    }
    assert_eq!(
        rigidity_rank(&fw, 2).unwrap(),
        rigidity_rank(&reversed, 2).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn pinning_all_nodes_is_identity(seed in any::<u64>(), index in 0u64..64, n in 2usize..8) {
        let cfg = GridCfg { num_nodes: n, ..GridCfg::default() };
        let fw = draw_framework_grid(cfg, ReplayToken { seed, index });
        let matrix = RigidityMatrix::build(&fw, 2).unwrap();
        let all: NodeSet = (0..n).map(NodeId).collect();
        let got = rigid_component_from_pinning(&matrix, all.iter().copied()).unwrap();
        prop_assert_eq!(got, all);
    }

    #[test]
    fn rank_bounded_by_bars_and_motions(seed in any::<u64>(), index in 0u64..64, n in 2usize..8) {
        let cfg = GridCfg { num_nodes: n, ..GridCfg::default() };
        let fw = draw_framework_grid(cfg, ReplayToken { seed, index });
        let rank = rigidity_rank(&fw, 2).unwrap();
        prop_assert!(rank <= fw.num_edges());
        // Rigid-body motions always survive, so rank never exceeds 2n - 3.
        prop_assert!(rank <= 2 * n - 3);
    }
}
