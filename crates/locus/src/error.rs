use thiserror::Error;

use crate::geom::GeomError;
use crate::ids::ObjectId;

/// Errors surfaced by constraint construction and solving.
///
/// Under-constrained graphs are not errors: the solver anchors them (see
/// `solver::SolveCfg::self_anchor`) or reports them in `Solution::unresolved`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("malformed constraint: {0}")]
    MalformedConstraint(String),
    #[error("constraint dependent has no identity; register it before constraining it")]
    MissingIdentity,
    #[error("object {0} appears more than once in the object set")]
    DuplicateObject(ObjectId),
    #[error("object {0} is not part of the object set")]
    UnknownObject(ObjectId),
    #[error("no freedom known yet for object {0}")]
    MissingFreedom(ObjectId),
    #[error("object {0} is not a dependent of this constraint")]
    NotADependent(ObjectId),
    #[error("distance must be non-negative and finite, got {0}")]
    NegativeDistance(f64),
    #[error("gave up after {anchors} synthetic anchors with {pending} constraints still pending")]
    AnchorBudgetExhausted { anchors: usize, pending: usize },
    #[error(transparent)]
    Geom(#[from] GeomError),
}
