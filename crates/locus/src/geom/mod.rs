//! 2D geometric loci and their algebra.
//!
//! Purpose
//! - Represent where an object may be ("freedom") as a `Shape`: a point, a circle,
//!   or a disjunctive `Locus` of nested shapes.
//! - Provide the three operations the solver composes: `distance`, `intersect`
//!   and `inflate`, all tolerance-aware (`tol::EPS`).
//!
//! Why a closed sum type
//! - Each operation matches on the variant pair exhaustively, so adding a variant
//!   forces every operation to decide what to do with it. `Line` is the example:
//!   it is representable but every operation rejects it explicitly.
//!
//! References
//! - Code cross-refs: `constraint::Distance` (uses `inflate`),
//!   `constraint::Freedoms::merge` (uses `intersect`)

mod error;
mod ops;
pub mod tol;
mod types;

pub use error::GeomError;
pub use ops::{distance, inflate, intersect, point_distance};
pub use tol::{approx_eq, greater_or_equal, strictly_greater, EPS};
pub use types::{Circle, Line, Locus, Point, Shape};

#[cfg(test)]
mod tests;
