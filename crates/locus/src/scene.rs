//! Object set assembly: identity allocation, constraint declarations, solving.
//!
//! A `Scene` stores constraint *declarations* (`Link`) by identity and builds
//! fresh `Constraint` values from the current object positions on every
//! `constraints()` call, so a host loop may move objects between solves.

use crate::constraint::{Constraint, Distance, Fixed};
use crate::error::SolveError;
use crate::geom::Point;
use crate::ids::{IdAllocator, ObjectId};
use crate::solver::{SolveCfg, Solution, Solver};

/// Constraint declaration over registered objects.
#[derive(Clone, Copy, Debug)]
pub enum Link {
    Fix { object: ObjectId, target: Point },
    Distance { a: ObjectId, b: ObjectId, distance: f64 },
}

impl Link {
    pub fn touches(&self, id: ObjectId) -> bool {
        match *self {
            Link::Fix { object, .. } => object == id,
            Link::Distance { a, b, .. } => a == id || b == id,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    ids: IdAllocator,
    objects: Vec<Point>,
    links: Vec<Link>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new object at `(x, y)` and return it, tagged.
    pub fn add_point(&mut self, x: f64, y: f64) -> Point {
        let p = Point::new(x, y).with_id(self.ids.next_id());
        self.objects.push(p);
        p
    }

    pub fn objects(&self) -> &[Point] {
        &self.objects
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn object(&self, id: ObjectId) -> Option<&Point> {
        self.objects.iter().find(|p| p.id == Some(id))
    }

    fn registered(&self, p: &Point) -> Result<ObjectId, SolveError> {
        let id = p.id.ok_or(SolveError::MissingIdentity)?;
        self.object(id).map(|_| id).ok_or(SolveError::UnknownObject(id))
    }

    /// Replace an object's position; its identity is kept whatever `f` returns.
    pub fn update_object<F>(&mut self, id: ObjectId, f: F) -> Result<Point, SolveError>
    where
        F: FnOnce(Point) -> Point,
    {
        let slot = self
            .objects
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(SolveError::UnknownObject(id))?;
        *slot = f(*slot).untagged().with_id(id);
        Ok(*slot)
    }

    /// Remove an object and every link that mentions it.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<Point> {
        let k = self.objects.iter().position(|p| p.id == Some(id))?;
        self.links.retain(|l| !l.touches(id));
        Some(self.objects.remove(k))
    }

    pub fn fix(&mut self, object: &Point, target: Point) -> Result<(), SolveError> {
        let object = self.registered(object)?;
        self.links.push(Link::Fix {
            object,
            target: target.untagged(),
        });
        Ok(())
    }

    pub fn distance(&mut self, a: &Point, b: &Point, distance: f64) -> Result<(), SolveError> {
        Distance::new(a, b, distance)?;
        let a = self.registered(a)?;
        let b = self.registered(b)?;
        self.links.push(Link::Distance { a, b, distance });
        Ok(())
    }

    fn current(&self, id: ObjectId) -> Result<Point, SolveError> {
        self.object(id).copied().ok_or(SolveError::UnknownObject(id))
    }

    /// Fresh constraints over the current positions, in declaration order.
    pub fn constraints(&self) -> Result<Vec<Box<dyn Constraint>>, SolveError> {
        self.links
            .iter()
            .map(|link| -> Result<Box<dyn Constraint>, SolveError> {
                let c: Box<dyn Constraint> = match *link {
                    Link::Fix { object, target } => {
                        Box::new(Fixed::new(&self.current(object)?, target)?)
                    }
                    Link::Distance { a, b, distance } => Box::new(Distance::new(
                        &self.current(a)?,
                        &self.current(b)?,
                        distance,
                    )?),
                };
                Ok(c)
            })
            .collect()
    }

    pub fn solve(&self, cfg: SolveCfg) -> Result<Solution, SolveError> {
        let constraints = self.constraints()?;
        Solver::new(&self.objects, &constraints)?
            .with_cfg(cfg)
            .solve()
    }

    /// `validate()` of every link against the current positions.
    pub fn validate(&self) -> Result<Vec<bool>, SolveError> {
        let constraints = self.constraints()?;
        Ok(Solver::new(&self.objects, &constraints)?.validate_all())
    }
}
