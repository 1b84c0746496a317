//! Pairwise algebra over `Shape`: distance, intersection, inflation.
//!
//! Every operation matches exhaustively on the variant pair. Pairs without a
//! rule (anything with a `Line`, distances to a `Locus`) return
//! `GeomError::UnsupportedOperandPair` rather than a guessed answer.
//!
//! References
//! - Code cross-refs: `types::{Point, Circle, Locus, Shape}`, `tol::{approx_eq, strictly_greater}`

use nalgebra::Vector2;

use super::error::GeomError;
use super::tol::{approx_eq, greater_or_equal, strictly_greater};
use super::types::{Circle, Locus, Point, Shape};

fn unsupported(op: &'static str, a: &Shape, b: &Shape) -> GeomError {
    GeomError::UnsupportedOperandPair {
        op,
        left: a.kind(),
        right: b.kind(),
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn point_distance(a: &Point, b: &Point) -> f64 {
    (b.pos - a.pos).norm()
}

/// Unsigned distance from `p` to the boundary of `c`.
#[inline]
fn point_circle_distance(p: &Point, c: &Circle) -> f64 {
    (point_distance(p, &c.center) - c.r).abs()
}

fn circle_circle_distance(c1: &Circle, c2: &Circle) -> f64 {
    let sep = point_distance(&c1.center, &c2.center);
    let boundary = sep - c1.r - c2.r;
    let nested = (c1.r - c2.r).abs();
    if greater_or_equal(boundary, 0.0) {
        boundary
    } else if sep >= nested {
        0.0
    } else {
        nested - sep
    }
}

/// Distance between two shapes (point–point, point–circle, circle–circle).
pub fn distance(a: &Shape, b: &Shape) -> Result<f64, GeomError> {
    match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => Ok(point_distance(p, q)),
        (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
            Ok(point_circle_distance(p, c))
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => Ok(circle_circle_distance(c1, c2)),
        (Shape::Line(_) | Shape::Locus(_), _) | (_, Shape::Line(_) | Shape::Locus(_)) => {
            Err(unsupported("distance", a, b))
        }
    }
}

/// Two-circle intersection.
///
/// - Concentric with equal radii: the circles coincide and `c1` is returned.
/// - One tangency point, or a locus of the two symmetric crossing points.
/// - `None` for disjoint, nested or concentric-unequal circles.
fn circle_circle(c1: &Circle, c2: &Circle) -> Option<Shape> {
    let disp = c2.center.pos - c1.center.pos;
    let d = disp.norm();
    if approx_eq(d, 0.0) {
        return approx_eq(c1.r, c2.r).then_some(Shape::Circle(*c1));
    }
    if strictly_greater(d, c1.r + c2.r) {
        return None;
    }
    // signed distance from c1's center to the radical axis
    let a = (c1.r * c1.r - c2.r * c2.r + d * d) / (2.0 * d);
    let mid = Point::from_vec(c1.center.pos + disp * (a / d));
    if approx_eq(a.abs(), c1.r) {
        return Some(Shape::Point(mid));
    }
    if strictly_greater(a.abs(), c1.r) {
        // one circle strictly inside the other
        return None;
    }
    let h = (c1.r * c1.r - a * a).max(0.0).sqrt();
    let offset = Point::from_vec(Vector2::new(-disp.y, disp.x) / d * h);
    Some(Shape::Locus(Locus::of([
        Shape::Point(mid + offset),
        Shape::Point(mid - offset),
    ])))
}

fn intersect_members(locus: &Locus, other: &Shape) -> Result<Option<Shape>, GeomError> {
    let mut hits = Vec::with_capacity(locus.len());
    for member in locus {
        hits.push(intersect(member, other)?);
    }
    Ok(Locus::new(hits).non_empty())
}

/// Intersection of two shapes; `Ok(None)` when they do not meet.
///
/// Symmetric up to member order: `intersect(a, b)` and `intersect(b, a)` describe
/// the same point set.
pub fn intersect(a: &Shape, b: &Shape) -> Result<Option<Shape>, GeomError> {
    match (a, b) {
        (Shape::Line(_), _) | (_, Shape::Line(_)) => Err(unsupported("intersect", a, b)),
        (Shape::Point(p), Shape::Point(q)) => Ok(p.is_congruent(q).then_some(Shape::Point(*p))),
        (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
            Ok(approx_eq(point_circle_distance(p, c), 0.0).then_some(Shape::Point(*p)))
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => Ok(circle_circle(c1, c2)),
        (Shape::Locus(l), Shape::Locus(_)) => intersect_members(l, b),
        (Shape::Locus(l), other) | (other, Shape::Locus(l)) => intersect_members(l, other),
    }
}

/// Points at exactly `radius` from `shape` (boundary of the Minkowski sum with a disk).
///
/// - Point: circle of `radius`.
/// - Circle: the larger offset circle, plus the inner offset (a circle, or the
///   center when `radius` equals the circle's radius) unless `radius` is larger.
/// - Locus: element-wise.
pub fn inflate(shape: &Shape, radius: f64) -> Result<Shape, GeomError> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GeomError::NegativeRadius(radius));
    }
    match shape {
        Shape::Point(p) => Ok(Shape::Circle(Circle::around(*p, radius)?)),
        Shape::Circle(c) => {
            let larger = Circle {
                center: c.center,
                r: c.r + radius,
            };
            if strictly_greater(radius, c.r) {
                Ok(Shape::Circle(larger))
            } else if approx_eq(radius, c.r) {
                Ok(Shape::Locus(Locus::of([
                    Shape::Circle(larger),
                    Shape::Point(c.center),
                ])))
            } else {
                let smaller = Circle {
                    center: c.center,
                    r: c.r - radius,
                };
                Ok(Shape::Locus(Locus::of([
                    Shape::Circle(larger),
                    Shape::Circle(smaller),
                ])))
            }
        }
        Shape::Line(_) => Err(GeomError::UnsupportedOperandPair {
            op: "inflate",
            left: "line",
            right: "radius",
        }),
        Shape::Locus(l) => {
            let mut out = Vec::with_capacity(l.len());
            for member in l {
                out.push(Some(inflate(member, radius)?));
            }
            Ok(Shape::Locus(Locus::new(out)))
        }
    }
}
