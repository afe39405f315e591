//! Exact coordinate helpers and the collinearity predicate.

use num_bigint::BigInt;

use super::Rat;

/// Exact rational from an integer.
#[inline]
pub fn rat(n: i64) -> Rat {
    Rat::from_integer(BigInt::from(n))
}

/// Exact position vector from integer coordinates.
pub fn rat_vec(coords: &[i64]) -> Vec<Rat> {
    coords.iter().map(|&n| rat(n)).collect()
}

/// Exact collinearity of three positions in the first `dim` coordinates.
///
/// True iff the vectors `b - a` and `c - a` are linearly dependent, i.e. all
/// their 2x2 minors vanish. Coincident points count as collinear, which is
/// what the triangle enumeration in 3D needs (a degenerate "triangle" pins
/// fewer than three independent points and must be skipped).
pub fn is_collinear(a: &[Rat], b: &[Rat], c: &[Rat], dim: usize) -> bool {
    let u: Vec<Rat> = (0..dim).map(|k| &b[k] - &a[k]).collect();
    let v: Vec<Rat> = (0..dim).map(|k| &c[k] - &a[k]).collect();
    for i in 0..dim {
        for j in (i + 1)..dim {
            if &u[i] * &v[j] != &u[j] * &v[i] {
                return false;
            }
        }
    }
    true
}
