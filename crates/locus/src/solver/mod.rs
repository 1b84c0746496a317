//! Freedom propagation over the constraint graph.
//!
//! Purpose
//! - Seed freedoms from one-dependent (fixed) constraints, then repeatedly fire
//!   two-dependent constraints that touch an already constrained object until a
//!   pass makes no progress.
//! - On a stall, optionally pin one dependent of the first pending constraint
//!   at its current position (a synthetic anchor) and keep going.
//!
//! Why a worklist
//! - Each pass drains the pending indices into "fired" and "still pending";
//!   the input slices are never mutated.
//!
//! References
//! - Code cross-refs: `constraint::{Constraint, Fixed, Freedoms}`, `scene::Scene::solve`

mod run;
mod types;

pub use run::{solve, Solver};
pub use types::{SolveCfg, Solution};
