//! Geometric freedom propagation for 2D points under fixed-position and
//! fixed-distance constraints.
//!
//! Layout
//! - `geom`: loci (`Point`, `Circle`, `Locus`, `Shape`) and their algebra.
//! - `constraint`: the `Constraint` capability, `Fixed`, `Distance`, `Freedoms`.
//! - `solver`: fixed-point propagation with the self-anchoring stall fallback.
//! - `scene`: object registration (ids) and constraint declarations.
//! - `random`: reproducible random scenes for benches and tests.
//!
//! API Policy
//! - The engine is a pure function of objects and constraints to freedoms; it
//!   never mutates its inputs and owns no rendering or timing state.

pub mod api;
pub mod constraint;
mod error;
pub mod geom;
pub mod ids;
pub mod random;
pub mod scene;
pub mod solver;

pub use error::SolveError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::constraint::{Constraint, Distance, Fixed, Freedoms};
    pub use crate::geom::{
        distance, inflate, intersect, Circle, GeomError, Line, Locus, Point, Shape,
    };
    pub use crate::ids::{IdAllocator, ObjectId};
    pub use crate::scene::{Link, Scene};
    pub use crate::solver::{solve, SolveCfg, Solution, Solver};
    pub use crate::SolveError;
}
