use thiserror::Error;

/// Errors surfaced by the geometric algebra.
///
/// Empty intersections are not errors; they are `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// No rule exists for this pair of variants (e.g. anything involving a `Line`).
    #[error("{op} is not defined for {left} and {right}")]
    UnsupportedOperandPair {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("radius must be non-negative and finite, got {0}")]
    NegativeRadius(f64),
}
