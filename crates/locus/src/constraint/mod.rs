//! Constraints over registered objects and the freedom map they produce.
//!
//! Purpose
//! - `Constraint` is the only thing the solver knows about a relation: which
//!   objects it touches, how to derive a dependent's freedom from the freedoms
//!   known so far, and whether the current positions satisfy it.
//! - Two kinds: `Fixed` (one dependent, pinned to a target point) and
//!   `Distance` (two dependents at a fixed separation).
//!
//! References
//! - Code cross-refs: `solver::Solver` (consumes `dyn Constraint`),
//!   `geom::{inflate, intersect}`

mod distance;
mod fixed;
mod freedoms;

pub use distance::Distance;
pub use fixed::Fixed;
pub use freedoms::Freedoms;

use std::fmt;

use crate::error::SolveError;
use crate::geom::{Point, Shape};
use crate::ids::ObjectId;

/// A relation between one or two objects.
///
/// Dependents are held by value (identity plus position at construction time);
/// they are matched to freedoms by identity only.
pub trait Constraint: fmt::Debug {
    /// Participating objects, in declaration order (1 or 2 entries).
    fn dependents(&self) -> &[Point];

    /// Freedom of `target` implied by this constraint and `freedoms`.
    fn freedom(&self, target: ObjectId, freedoms: &Freedoms) -> Result<Shape, SolveError>;

    /// Whether the dependents' positions satisfy the constraint (within `EPS`).
    fn validate(&self) -> bool;
}

/// Identity of a dependent; constructors only accept registered objects.
pub(crate) fn require_id(p: &Point) -> Result<ObjectId, SolveError> {
    p.id.ok_or(SolveError::MissingIdentity)
}
