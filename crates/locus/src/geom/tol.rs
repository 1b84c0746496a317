//! Tolerance primitives shared by the algebra and the solver.
//!
//! Policy
//! - One fixed epsilon for every comparison. Exact equality is only used by
//!   `Point::is_congruent`.
//! - `strictly_greater` is `a - b > EPS`. A difference of exactly `EPS` counts as
//!   equal, so tangency and "radius equals inflation" cases are classified by
//!   `approx_eq` first.

/// Absolute tolerance for all geometric comparisons.
pub const EPS: f64 = 1e-5;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

#[inline]
pub fn strictly_greater(a: f64, b: f64) -> bool {
    a - b > EPS
}

#[inline]
pub fn greater_or_equal(a: f64, b: f64) -> bool {
    strictly_greater(a, b) || approx_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_of_eps_is_equal_not_greater() {
        assert!(approx_eq(1.0, 1.0 + 0.5 * EPS));
        assert!(!strictly_greater(1.0 + 0.5 * EPS, 1.0));
        assert!(strictly_greater(1.0 + 2.0 * EPS, 1.0));
        assert!(greater_or_equal(1.0, 1.0 + 0.5 * EPS));
        assert!(!greater_or_equal(1.0, 1.0 + 2.0 * EPS));
    }
}
