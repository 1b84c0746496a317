//! Immutable 2D value types: `Point`, `Circle`, `Line`, `Locus` and the closed
//! sum type `Shape` over them.
//!
//! - `Point` carries an optional identity; arithmetic never propagates it.
//! - `Circle` owns an untagged center and a non-negative radius.
//! - `Locus` is a disjunction ("one of these") of arbitrary, possibly nested shapes.
//!
//! References
//! - Code cross-refs: `ops::{distance, intersect, inflate}`, `tol::EPS`

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;

use super::error::GeomError;
use super::tol::{approx_eq, EPS};
use crate::ids::ObjectId;

/// A 2D coordinate plus an optional identity token.
///
/// Invariants:
/// - Points produced by arithmetic are untagged (`id == None`).
/// - `is_congruent` compares coordinates exactly and ignores identity.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub id: Option<ObjectId>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id: None,
        }
    }
    #[inline]
    pub fn from_vec(pos: Vector2<f64>) -> Self {
        Self { pos, id: None }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    /// Re-tag with `id`.
    #[inline]
    pub fn with_id(self, id: ObjectId) -> Self {
        Self {
            pos: self.pos,
            id: Some(id),
        }
    }
    #[inline]
    pub fn untagged(self) -> Self {
        Self::from_vec(self.pos)
    }
    #[inline]
    pub fn is_congruent(&self, other: &Point) -> bool {
        self.pos.x == other.pos.x && self.pos.y == other.pos.y
    }
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.pos.norm()
    }
    /// Move by `by`, keeping this point's identity.
    #[inline]
    pub fn translate(&self, by: Point) -> Point {
        Point {
            pos: self.pos + by.pos,
            id: self.id,
        }
    }
    #[inline]
    pub fn approx_eq(&self, other: &Point) -> bool {
        approx_eq(self.pos.x, other.pos.x) && approx_eq(self.pos.y, other.pos.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::from_vec(self.pos + rhs.pos)
    }
}
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::from_vec(self.pos - rhs.pos)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::from_vec(self.pos * rhs)
    }
}
impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        self * (1.0 / rhs)
    }
}
impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::from_vec(-self.pos)
    }
}

/// Circle boundary `{ p : |p - center| = r }`.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    /// Panics if `r` is negative or not finite.
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        assert!(r.is_finite() && r >= 0.0, "circle radius must be >= 0, got {r}");
        Self {
            center: Point::new(x, y),
            r,
        }
    }
    pub fn try_new(x: f64, y: f64, r: f64) -> Result<Self, GeomError> {
        if !(r.is_finite() && r >= 0.0) {
            return Err(GeomError::NegativeRadius(r));
        }
        Ok(Self {
            center: Point::new(x, y),
            r,
        })
    }
    /// Circle around `center`; the center's identity is dropped.
    pub fn around(center: Point, r: f64) -> Result<Self, GeomError> {
        Self::try_new(center.x(), center.y(), r)
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x()
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y()
    }
}

/// Segment between two points. Carried as a value only; the algebra rejects it.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }
    pub fn translate(&self, by: Point) -> Line {
        Line {
            p1: self.p1.translate(by),
            p2: self.p2.translate(by),
        }
    }
}

/// Disjunctive set: the object is at one of `items`.
///
/// Invariants:
/// - No `None` entries and no empty nested loci (filtered on construction).
/// - Never flattened or deduplicated; nesting is preserved.
#[derive(Clone, Debug, Default)]
pub struct Locus {
    items: Vec<Shape>,
}

impl Locus {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<Shape>>,
    {
        let items = items
            .into_iter()
            .flatten()
            .filter(|s| !matches!(s, Shape::Locus(l) if l.is_empty()))
            .collect();
        Self { items }
    }
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Shape>,
    {
        Self::new(items.into_iter().map(Some))
    }
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.items.iter()
    }
    /// `None` if empty, otherwise the locus as a shape.
    pub fn non_empty(self) -> Option<Shape> {
        if self.is_empty() {
            None
        } else {
            Some(Shape::Locus(self))
        }
    }
}

impl<'a> IntoIterator for &'a Locus {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Closed set of geometric variants. Every algebra operation matches on it
/// exhaustively.
#[derive(Clone, Debug)]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Line(Line),
    Locus(Locus),
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}
impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}
impl From<Locus> for Shape {
    fn from(l: Locus) -> Self {
        Shape::Locus(l)
    }
}

impl Shape {
    /// Variant name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
            Shape::Locus(_) => "locus",
        }
    }

    /// True for an empty locus (a freedom with no reachable position).
    pub fn is_empty(&self) -> bool {
        matches!(self, Shape::Locus(l) if l.is_empty())
    }

    /// Non-locus members in depth-first order.
    pub fn leaves(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Structural equality within `EPS` (order-sensitive for loci).
    pub fn approx_eq(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => a.approx_eq(b),
            (Shape::Circle(a), Shape::Circle(b)) => {
                a.center.approx_eq(&b.center) && approx_eq(a.r, b.r)
            }
            (Shape::Line(a), Shape::Line(b)) => a.p1.approx_eq(&b.p1) && a.p2.approx_eq(&b.p2),
            (Shape::Locus(a), Shape::Locus(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.approx_eq(y))
            }
            _ => false,
        }
    }

    /// Equality of the flattened leaf sets within `EPS`, ignoring order and nesting.
    pub fn same_set(&self, other: &Shape) -> bool {
        let a = self.leaves();
        let b = other.leaves();
        a.iter().all(|x| b.iter().any(|y| x.approx_eq(y)))
            && b.iter().all(|y| a.iter().any(|x| x.approx_eq(y)))
    }

    /// Whether `p` lies on some point or circle leaf within `EPS`.
    pub fn contains(&self, p: &Point) -> bool {
        self.leaves().into_iter().any(|leaf| match leaf {
            Shape::Point(q) => (p.pos - q.pos).norm() <= EPS,
            Shape::Circle(c) => approx_eq((p.pos - c.center.pos).norm(), c.r),
            _ => false,
        })
    }

    /// One concrete position inside the shape, for callers that need a layout.
    /// Circles contribute their rightmost point.
    pub fn representative(&self) -> Option<Point> {
        self.leaves().into_iter().find_map(|leaf| match leaf {
            Shape::Point(q) => Some(q.untagged()),
            Shape::Circle(c) => Some(Point::new(c.x() + c.r, c.y())),
            _ => None,
        })
    }
}

fn collect_leaves<'a>(shape: &'a Shape, out: &mut Vec<&'a Shape>) {
    match shape {
        Shape::Locus(l) => {
            for s in l {
                collect_leaves(s, out);
            }
        }
        leaf => out.push(leaf),
    }
}
