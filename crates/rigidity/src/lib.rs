//! Infinitesimal rigidity analysis of bar-joint frameworks.
//!
//! A framework is a graph embedded in 2D or 3D space: edges are rigid bars,
//! nodes are pivot joints with exact rational coordinates. This crate builds
//! the framework's rigidity matrix, decides infinitesimal rigidity from its
//! exact rank and kernel, discovers maximal rigid substructures, and merges
//! rigid components that already move as one body.
//!
//! All rank, kernel, and collinearity decisions run over arbitrary-precision
//! rationals; there is no floating point anywhere in the analysis.
//!
//! Library surface only: callers construct a [`Framework`], treat it as an
//! immutable snapshot, and call the free functions in [`rigid`].

pub mod exact;
pub mod framework;
pub mod rigid;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use exact::Rat;
pub use framework::{Framework, InducedSubgraph, Node, NodeId, NodeSet};
pub use rigid::{RigidityError, RigidityMatrix};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::exact::{is_collinear, rat, rat_vec, Rat};
    pub use crate::framework::special::{dumbbell, jansen_walker, parallel_four_bar};
    pub use crate::framework::{Framework, InducedSubgraph, Node, NodeId, NodeSet};
    pub use crate::rigid::{
        as_induced, is_rigid, max_rigid_subgraphs_2d, max_rigid_subgraphs_3d, merge_subgraphs,
        motion_dof, rigid_body_dof, rigid_component_from_pinning, rigidity_rank, RigidityError,
        RigidityMatrix,
    };
}
