//! Pinning analysis: which joints does fixing a set of joints immobilize?

use nalgebra::RowDVector;
use num_traits::{One, Zero};

use crate::exact::{nullspace, Rat};
use crate::framework::{NodeId, NodeSet};

use super::matrix::{stack_rows, RigidityMatrix};
use super::RigidityError;

/// The rigid component containing a set of pinned joints.
///
/// Augments the reduced rigidity matrix with one unit row per (pin, axis)
/// that fixes the pin's coordinate, then takes the exact kernel of the
/// augmented matrix: the admissible infinitesimal motions that respect both
/// the bars and the pins. A non-pinned joint whose columns vanish in every
/// kernel basis vector cannot move at all and is rigidly attached.
///
/// Pins are accepted as any iterator of node ids and normalized into a set;
/// at least `dim` pins are required, since fewer cannot remove all rigid-body
/// motions. Returns pins plus all immobilized joints. Pure function.
pub fn rigid_component_from_pinning(
    matrix: &RigidityMatrix,
    pins: impl IntoIterator<Item = NodeId>,
) -> Result<NodeSet, RigidityError> {
    let dim = matrix.dim();
    let pins: NodeSet = pins.into_iter().collect();
    if pins.len() < dim {
        return Err(RigidityError::InsufficientPins {
            got: pins.len(),
            need: dim,
        });
    }
    for &pin in &pins {
        if pin.0 >= matrix.num_nodes() {
            return Err(RigidityError::UnknownNode { node: pin });
        }
    }

    let ncols = matrix.matrix().ncols();
    let mut pin_rows = Vec::with_capacity(pins.len() * dim);
    for &pin in &pins {
        for axis in 0..dim {
            let mut row = RowDVector::from_element(ncols, Rat::zero());
            row[dim * pin.0 + axis] = Rat::one();
            pin_rows.push(row);
        }
    }
    let augmented = stack_rows(matrix.matrix(), &pin_rows);
    let kernel = nullspace(&augmented);

    let mut component = pins;
    for idx in 0..matrix.num_nodes() {
        let node = NodeId(idx);
        if component.contains(&node) {
            continue;
        }
        let immobile = kernel
            .iter()
            .all(|motion| (0..dim).all(|axis| motion[dim * idx + axis].is_zero()));
        if immobile {
            component.insert(node);
        }
    }
    Ok(component)
}
