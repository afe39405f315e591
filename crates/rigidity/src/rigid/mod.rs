//! The rigidity-matroid engine.
//!
//! Purpose
//! - Decide infinitesimal rigidity of a bar-joint framework from the exact
//!   rank and kernel of its rigidity matrix, discover maximal rigid
//!   substructures in 2D and 3D, and coalesce rigid components whose relative
//!   motion is already pinned down by the rest of the framework.
//!
//! Pipeline
//! - `matrix`: framework -> reduced rigidity matrix (one row per bar).
//! - `pinning`: reduced matrix + pinned joints -> the joints they immobilize.
//! - `maximal`: drives pinning over bars (2D) or bar-triangles (3D).
//! - `merge`: rank test deciding whether two components move as one body.
//!
//! All operations are pure functions over an immutable `&Framework`; output
//! order derives only from node/edge insertion order. The discovered maximal
//! components may overlap, and which overlapping set is reported first
//! depends on edge enumeration order. That is a property of the discovery
//! algorithm, not of the underlying matroid.

use std::fmt;

use crate::framework::NodeId;

mod matrix;
mod maximal;
mod merge;
mod pinning;

pub use matrix::{is_rigid, motion_dof, rigidity_rank, RigidityMatrix};
pub use maximal::{as_induced, max_rigid_subgraphs_2d, max_rigid_subgraphs_3d};
pub use merge::merge_subgraphs;
pub use pinning::rigid_component_from_pinning;

/// Dimension of the rigid-body motion space in `dim` dimensions:
/// `dim` translations plus `dim (dim - 1) / 2` rotations.
#[inline]
pub fn rigid_body_dof(dim: usize) -> usize {
    dim * (dim + 1) / 2
}

/// Precondition violations surfaced by the engine.
///
/// None of these are recoverable mid-analysis: a rigidity verdict computed
/// from an invalid embedding or an underdetermined pinning would be
/// meaningless, so every operation fails fast and produces no partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RigidityError {
    /// The embedding dimension is not 2 or 3.
    UnsupportedDimension { dim: usize },
    /// A joint's position has fewer coordinates than the embedding dimension.
    Dimension {
        node: NodeId,
        coords: usize,
        dim: usize,
    },
    /// Fewer pins than the embedding dimension: the pins cannot remove all
    /// rigid-body motions, so the kernel test would be vacuous.
    InsufficientPins { got: usize, need: usize },
    /// A pin or subgraph member does not exist in the framework.
    UnknownNode { node: NodeId },
}

impl fmt::Display for RigidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension { dim } => {
                write!(f, "embedding dimension must be 2 or 3, got {dim}")
            }
            Self::Dimension { node, coords, dim } => write!(
                f,
                "node {} has {coords} coordinates, embedding needs {dim}",
                node.0
            ),
            Self::InsufficientPins { got, need } => {
                write!(f, "pinning needs at least {need} pins, got {got}")
            }
            Self::UnknownNode { node } => write!(f, "node {} is not in the framework", node.0),
        }
    }
}

impl std::error::Error for RigidityError {}

#[cfg(test)]
mod tests;
