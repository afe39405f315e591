//! Canned example frameworks used in tests and benchmarks.
//!
//! Purpose
//! - Provide the classic linkage fixtures deterministically: a four-bar
//!   linkage, a walking-mechanism linkage, and a 3D dumbbell of two
//!   tetrahedral bodies joined by one bar.
//! - Each planar example has a `braced` variant that adds one stiffening bar,
//!   turning the mechanism into a rigid framework.

use super::Framework;

/// Parallel four-bar linkage: a quadrilateral of four bars.
///
/// Unbraced it is the textbook 1-DOF mechanism; `braced` adds the diagonal
/// and makes it rigid.
pub fn parallel_four_bar(braced: bool) -> Framework {
    let mut fw = Framework::new();
    let p1 = fw.add_node_ints(&[0, 0]);
    let p2 = fw.add_node_ints(&[5, 0]);
    let p3 = fw.add_node_ints(&[5, 5]);
    let p4 = fw.add_node_ints(&[0, 5]);
    fw.add_edge(p1, p2);
    fw.add_edge(p2, p3);
    fw.add_edge(p3, p4);
    fw.add_edge(p4, p1);
    if braced {
        fw.add_edge(p4, p2);
    }
    fw
}

/// Jansen-style walking linkage: seven joints, ten bars.
///
/// Unbraced it retains one internal degree of freedom (that is the point of a
/// walking mechanism); `braced` adds the bar p7-p3 and freezes it.
pub fn jansen_walker(braced: bool) -> Framework {
    let mut fw = Framework::new();
    let p1 = fw.add_node_ints(&[0, 6]);
    let p2 = fw.add_node_ints(&[4, 10]);
    let p3 = fw.add_node_ints(&[9, 6]);
    let p4 = fw.add_node_ints(&[5, 3]);
    let p5 = fw.add_node_ints(&[3, 0]);
    let p6 = fw.add_node_ints(&[1, 3]);
    let p7 = fw.add_node_ints(&[4, 6]);
    for (a, b) in [
        (p1, p2),
        (p2, p3),
        (p3, p4),
        (p4, p5),
        (p5, p6),
        (p6, p1),
        (p6, p4),
        (p4, p7),
        (p1, p7),
        (p2, p7),
    ] {
        fw.add_edge(a, b);
    }
    if braced {
        fw.add_edge(p7, p3);
    }
    fw
}

/// Two rigid tetrahedral bodies joined by a single bar (3D).
///
/// Each half is a triangle bipyramid (five joints, nine bars), rigid on its
/// own. The single connecting bar leaves the halves free to rotate relative
/// to each other, so the whole framework is not rigid.
pub fn dumbbell() -> Framework {
    let mut fw = Framework::new();
    let base: [[i64; 3]; 5] = [
        [0, 0, 0],
        [2, -1, 2],
        [2, -1, -2],
        [2, 2, 0],
        [4, 0, 0],
    ];
    let shift = [10, 1, 1];
    let mut halves = Vec::with_capacity(2);
    for offset in [[0, 0, 0], shift] {
        let ids: Vec<_> = base
            .iter()
            .map(|p| {
                fw.add_node_ints(&[p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]])
            })
            .collect();
        fw.add_edge(ids[0], ids[1]);
        fw.add_edge(ids[0], ids[2]);
        fw.add_edge(ids[0], ids[3]);
        fw.add_edge(ids[1], ids[2]);
        fw.add_edge(ids[2], ids[3]);
        fw.add_edge(ids[3], ids[1]);
        fw.add_edge(ids[4], ids[1]);
        fw.add_edge(ids[4], ids[2]);
        fw.add_edge(ids[4], ids[3]);
        halves.push(ids);
    }
    fw.add_edge(halves[0][4], halves[1][0]);
    fw
}
