use crate::error::SolveError;
use crate::geom::{Point, Shape};
use crate::ids::ObjectId;

use super::{require_id, Constraint, Freedoms};

/// Pins one object to `target`, independently of every other freedom.
#[derive(Clone, Debug)]
pub struct Fixed {
    dependents: [Point; 1],
    target: Point,
}

impl Fixed {
    pub fn new(object: &Point, target: Point) -> Result<Self, SolveError> {
        require_id(object)?;
        Ok(Self {
            dependents: [*object],
            target: target.untagged(),
        })
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }
}

impl Constraint for Fixed {
    fn dependents(&self) -> &[Point] {
        &self.dependents
    }

    fn freedom(&self, target: ObjectId, _freedoms: &Freedoms) -> Result<Shape, SolveError> {
        if self.dependents[0].id != Some(target) {
            return Err(SolveError::NotADependent(target));
        }
        Ok(Shape::Point(self.target))
    }

    fn validate(&self) -> bool {
        self.dependents[0].is_congruent(&self.target)
    }
}
