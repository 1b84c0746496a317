//! Flat entry points mirroring the engine's small in-process surface.
//!
//! - `distance`, `intersect`, `inflate` over shapes;
//! - `fixed` and `distance_constraint` constructors returning boxed constraints;
//! - `solve` over an object list and constraint list.

pub use crate::geom::{distance, inflate, intersect};
pub use crate::solver::solve;

use crate::constraint::{Constraint, Distance, Fixed};
use crate::error::SolveError;
use crate::geom::Point;

/// Pin `object` to `target`.
pub fn fixed(object: &Point, target: Point) -> Result<Box<dyn Constraint>, SolveError> {
    Ok(Box::new(Fixed::new(object, target)?))
}

/// Keep `a` and `b` exactly `d` apart.
pub fn distance_constraint(
    a: &Point,
    b: &Point,
    d: f64,
) -> Result<Box<dyn Constraint>, SolveError> {
    Ok(Box::new(Distance::new(a, b, d)?))
}
