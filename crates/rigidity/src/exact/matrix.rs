//! Gauss-Jordan reduction, rank, and kernel bases over exact rationals.

use nalgebra::{DMatrix, DVector};
use num_traits::{One, Zero};

use super::Rat;

/// Reduce `m` to reduced row-echelon form in place and return its rank.
///
/// Pivots are normalized to 1 and eliminated above and below, so the first
/// `rank` rows afterwards are the canonical basis of the row space and the
/// remaining rows are zero. The row space (hence the rank) is invariant under
/// row order and row scaling of the input.
pub fn rref_in_place(m: &mut DMatrix<Rat>) -> usize {
    let (nrows, ncols) = m.shape();
    let mut pivot_row = 0usize;
    for col in 0..ncols {
        if pivot_row == nrows {
            break;
        }
        let Some(sel) = (pivot_row..nrows).find(|&r| !m[(r, col)].is_zero()) else {
            continue;
        };
        m.swap_rows(pivot_row, sel);
        let inv = m[(pivot_row, col)].recip();
        for c in col..ncols {
            let v = &m[(pivot_row, c)] * &inv;
            m[(pivot_row, c)] = v;
        }
        for r in 0..nrows {
            if r == pivot_row || m[(r, col)].is_zero() {
                continue;
            }
            let factor = m[(r, col)].clone();
            for c in col..ncols {
                let v = &m[(r, c)] - &factor * &m[(pivot_row, c)];
                m[(r, c)] = v;
            }
        }
        pivot_row += 1;
    }
    pivot_row
}

/// Rank of `m`, leaving `m` untouched.
pub fn rank(m: &DMatrix<Rat>) -> usize {
    rref_in_place(&mut m.clone())
}

/// Exact basis of the kernel `{ x : m x = 0 }`.
///
/// Built from the RREF by the free-column construction: one basis vector per
/// non-pivot column, with a 1 in that column and the negated reduced entries
/// in the pivot columns. A zero-row matrix yields the full standard basis.
pub fn nullspace(m: &DMatrix<Rat>) -> Vec<DVector<Rat>> {
    let mut r = m.clone();
    let rank = rref_in_place(&mut r);
    let ncols = r.ncols();
    let mut pivot_cols = Vec::with_capacity(rank);
    for row in 0..rank {
        if let Some(col) = (0..ncols).find(|&c| !r[(row, c)].is_zero()) {
            pivot_cols.push(col);
        }
    }
    let mut basis = Vec::with_capacity(ncols - pivot_cols.len());
    let mut next_pivot = 0usize;
    for free in 0..ncols {
        if next_pivot < pivot_cols.len() && pivot_cols[next_pivot] == free {
            next_pivot += 1;
            continue;
        }
        let mut v = DVector::from_element(ncols, Rat::zero());
        v[free] = Rat::one();
        for (row, &pc) in pivot_cols.iter().enumerate() {
            v[pc] = -r[(row, free)].clone();
        }
        basis.push(v);
    }
    basis
}
