//! Rigidity matrix construction and rank reduction.

use nalgebra::{DMatrix, RowDVector};
use num_traits::Zero;

use crate::exact::{rref_in_place, Rat};
use crate::framework::{Framework, NodeId};

use super::{rigid_body_dof, RigidityError};

/// The reduced rigidity matrix of a framework in a fixed embedding dimension.
///
/// One row per bar before reduction: for bar (u, v) the d columns of u hold
/// the first d coordinates of u - v, the d columns of v the negation, all
/// others zero. Rows are then brought to reduced row-echelon form and the
/// trailing zero rows dropped, so `m.nrows() == rank`. The retained row space
/// does not depend on bar enumeration order.
#[derive(Clone, Debug)]
pub struct RigidityMatrix {
    m: DMatrix<Rat>,
    dim: usize,
    num_nodes: usize,
}

impl RigidityMatrix {
    /// Build and reduce the rigidity matrix.
    ///
    /// Fails if `dim` is not 2 or 3 or any joint has fewer than `dim`
    /// coordinates. An empty bar set yields a valid zero-row matrix.
    pub fn build(fw: &Framework, dim: usize) -> Result<Self, RigidityError> {
        if dim != 2 && dim != 3 {
            return Err(RigidityError::UnsupportedDimension { dim });
        }
        for (idx, node) in fw.nodes().iter().enumerate() {
            if node.pos.len() < dim {
                return Err(RigidityError::Dimension {
                    node: NodeId(idx),
                    coords: node.pos.len(),
                    dim,
                });
            }
        }
        let num_nodes = fw.num_nodes();
        let ncols = dim * num_nodes;
        let rows: Vec<RowDVector<Rat>> = fw
            .edges()
            .iter()
            .map(|&(u, v)| restriction_row(fw, dim, u, v))
            .collect();
        let mut m = if rows.is_empty() {
            DMatrix::from_element(0, ncols, Rat::zero())
        } else {
            DMatrix::from_rows(&rows)
        };
        let rank = rref_in_place(&mut m);
        let m = m.rows(0, rank).into_owned();
        Ok(Self { m, dim, num_nodes })
    }

    /// Rank of the rigidity matrix (= retained rows).
    #[inline]
    pub fn rank(&self) -> usize {
        self.m.nrows()
    }

    /// The reduced matrix itself.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<Rat> {
        &self.m
    }

    /// Embedding dimension the matrix was built for.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }
}

/// Length-preservation row for a (possibly virtual) bar between `u` and `v`.
pub(super) fn restriction_row(
    fw: &Framework,
    dim: usize,
    u: NodeId,
    v: NodeId,
) -> RowDVector<Rat> {
    let mut row = RowDVector::from_element(dim * fw.num_nodes(), Rat::zero());
    let pu = fw.position(u);
    let pv = fw.position(v);
    for axis in 0..dim {
        let diff = &pu[axis] - &pv[axis];
        row[dim * u.0 + axis] = diff.clone();
        row[dim * v.0 + axis] = -diff;
    }
    row
}

/// Stack extra rows under a base matrix.
pub(super) fn stack_rows(base: &DMatrix<Rat>, extra: &[RowDVector<Rat>]) -> DMatrix<Rat> {
    let nbase = base.nrows();
    DMatrix::from_fn(nbase + extra.len(), base.ncols(), |r, c| {
        if r < nbase {
            base[(r, c)].clone()
        } else {
            extra[r - nbase][c].clone()
        }
    })
}

/// Rank of the full rigidity matrix of `fw` in dimension `dim`.
pub fn rigidity_rank(fw: &Framework, dim: usize) -> Result<usize, RigidityError> {
    Ok(RigidityMatrix::build(fw, dim)?.rank())
}

/// Degrees of freedom of the infinitesimal motion space:
/// `dim * |V| - rank`.
pub fn motion_dof(fw: &Framework, dim: usize) -> Result<usize, RigidityError> {
    let m = RigidityMatrix::build(fw, dim)?;
    Ok(dim * fw.num_nodes() - m.rank())
}

/// A framework is infinitesimally rigid iff its only motions are the
/// rigid-body ones: `motion_dof == dim (dim + 1) / 2`.
pub fn is_rigid(fw: &Framework, dim: usize) -> Result<bool, RigidityError> {
    Ok(motion_dof(fw, dim)? == rigid_body_dof(dim))
}
