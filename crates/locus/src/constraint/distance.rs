use crate::error::SolveError;
use crate::geom::{approx_eq, inflate, point_distance, Point, Shape};
use crate::ids::ObjectId;

use super::{require_id, Constraint, Freedoms};

/// Keeps two objects exactly `distance` apart.
///
/// The freedom of one dependent is the other's freedom inflated by `distance`.
#[derive(Clone, Debug)]
pub struct Distance {
    dependents: [Point; 2],
    distance: f64,
}

impl Distance {
    pub fn new(a: &Point, b: &Point, distance: f64) -> Result<Self, SolveError> {
        let ia = require_id(a)?;
        let ib = require_id(b)?;
        if ia == ib {
            return Err(SolveError::MalformedConstraint(format!(
                "distance constraint links object {ia} to itself"
            )));
        }
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(SolveError::NegativeDistance(distance));
        }
        Ok(Self {
            dependents: [*a, *b],
            distance,
        })
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    fn other(&self, target: ObjectId) -> Result<ObjectId, SolveError> {
        let [a, b] = &self.dependents;
        match (a.id, b.id) {
            (Some(ia), Some(ib)) if ia == target => Ok(ib),
            (Some(ia), Some(ib)) if ib == target => Ok(ia),
            _ => Err(SolveError::NotADependent(target)),
        }
    }
}

impl Constraint for Distance {
    fn dependents(&self) -> &[Point] {
        &self.dependents
    }

    fn freedom(&self, target: ObjectId, freedoms: &Freedoms) -> Result<Shape, SolveError> {
        let other = self.other(target)?;
        let known = freedoms
            .get(other)
            .ok_or(SolveError::MissingFreedom(other))?;
        Ok(inflate(known, self.distance)?)
    }

    fn validate(&self) -> bool {
        let [a, b] = &self.dependents;
        approx_eq(point_distance(a, b), self.distance)
    }
}
