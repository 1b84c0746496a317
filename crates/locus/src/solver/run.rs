//! Seeding, propagation passes and the stall fallback.

use std::collections::{HashMap, HashSet};

use crate::constraint::{Constraint, Fixed, Freedoms};
use crate::error::SolveError;
use crate::geom::Point;
use crate::ids::ObjectId;

use super::types::{SolveCfg, Solution};

/// Solve with the default configuration.
pub fn solve(
    objects: &[Point],
    constraints: &[Box<dyn Constraint>],
) -> Result<Solution, SolveError> {
    Solver::new(objects, constraints)?.solve()
}

/// Read-only view over an object set and its constraints.
pub struct Solver<'a> {
    objects: &'a [Point],
    constraints: &'a [Box<dyn Constraint>],
    index: HashMap<ObjectId, usize>,
    cfg: SolveCfg,
}

/// Working state owned by a single `solve` call.
#[derive(Default)]
struct Run {
    freedoms: Freedoms,
    constrained: HashSet<ObjectId>,
    anchored: Vec<ObjectId>,
}

impl Run {
    fn resolve(&mut self, c: &dyn Constraint, target: ObjectId) -> Result<(), SolveError> {
        let freedom = c.freedom(target, &self.freedoms)?;
        self.freedoms.merge(target, freedom)?;
        self.constrained.insert(target);
        Ok(())
    }
}

impl<'a> Solver<'a> {
    /// Check the inputs; neither slice is modified.
    ///
    /// Errors: duplicate object ids, constraints with other than one or two
    /// dependents, and dependents that are untagged or not in `objects`.
    pub fn new(
        objects: &'a [Point],
        constraints: &'a [Box<dyn Constraint>],
    ) -> Result<Self, SolveError> {
        let mut index = HashMap::with_capacity(objects.len());
        for (k, p) in objects.iter().enumerate() {
            let id = p.id.ok_or(SolveError::MissingIdentity)?;
            if index.insert(id, k).is_some() {
                return Err(SolveError::DuplicateObject(id));
            }
        }
        for (i, c) in constraints.iter().enumerate() {
            let deps = c.dependents();
            if !(1..=2).contains(&deps.len()) {
                return Err(SolveError::MalformedConstraint(format!(
                    "constraint {i} has {} dependents (expected 1 or 2)",
                    deps.len()
                )));
            }
            for d in deps {
                let id = d.id.ok_or(SolveError::MissingIdentity)?;
                if !index.contains_key(&id) {
                    return Err(SolveError::UnknownObject(id));
                }
            }
        }
        Ok(Self {
            objects,
            constraints,
            index,
            cfg: SolveCfg::default(),
        })
    }

    pub fn with_cfg(mut self, cfg: SolveCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Current position of a registered object.
    pub fn position(&self, id: ObjectId) -> Option<Point> {
        self.index.get(&id).map(|&k| self.objects[k])
    }

    /// `validate()` of every constraint, in input order. Never used by `solve`.
    pub fn validate_all(&self) -> Vec<bool> {
        self.constraints.iter().map(|c| c.validate()).collect()
    }

    pub fn solve(&self) -> Result<Solution, SolveError> {
        let mut run = Run::default();
        let mut pending = Vec::new();
        for (i, c) in self.constraints.iter().enumerate() {
            match c.dependents() {
                [only] => run.resolve(c.as_ref(), dependent_id(only)?)?,
                _ => pending.push(i),
            }
        }
        tracing::debug!(
            seeded = run.constrained.len(),
            pending = pending.len(),
            "seeded fixed constraints"
        );

        let limit = self.cfg.max_anchors.unwrap_or(self.constraints.len());
        loop {
            pending = self.propagate(&mut run, pending)?;
            if pending.is_empty() || !self.cfg.self_anchor {
                break;
            }
            if run.anchored.len() >= limit {
                return Err(SolveError::AnchorBudgetExhausted {
                    anchors: run.anchored.len(),
                    pending: pending.len(),
                });
            }
            self.anchor(&mut run, pending[0])?;
        }

        if !pending.is_empty() {
            tracing::debug!(unresolved = pending.len(), "propagation stalled");
        }
        Ok(Solution {
            freedoms: run.freedoms,
            anchored: run.anchored,
            unresolved: pending,
        })
    }

    /// Fire constraints until a full pass over `pending` fires none.
    /// Returns the indices that are still pending.
    fn propagate(&self, run: &mut Run, mut pending: Vec<usize>) -> Result<Vec<usize>, SolveError> {
        let mut pass = 0usize;
        loop {
            pass += 1;
            let before = pending.len();
            let mut still = Vec::with_capacity(before);
            for idx in pending {
                let c = self.constraints[idx].as_ref();
                match target_of(c, &run.constrained)? {
                    Some(target) => run.resolve(c, target)?,
                    None => still.push(idx),
                }
            }
            pending = still;
            let fired = before - pending.len();
            tracing::debug!(pass, fired, pending = pending.len(), "propagation pass");
            if fired == 0 || pending.is_empty() {
                return Ok(pending);
            }
        }
    }

    /// Pin the first dependent of constraint `idx` where it currently is.
    fn anchor(&self, run: &mut Run, idx: usize) -> Result<(), SolveError> {
        let dep = self.constraints[idx].dependents()[0];
        let id = dependent_id(&dep)?;
        let at = self.position(id).unwrap_or(dep);
        let pin = Fixed::new(&dep, at)?;
        run.resolve(&pin, id)?;
        run.anchored.push(id);
        tracing::info!(object = %id, x = at.x(), y = at.y(), "anchored at current position");
        Ok(())
    }
}

#[inline]
fn dependent_id(p: &Point) -> Result<ObjectId, SolveError> {
    p.id.ok_or(SolveError::MissingIdentity)
}

/// Which dependent a two-object constraint should resolve, if it can fire.
///
/// - exactly one side constrained: the other side;
/// - both constrained: the first dependent, tightened by intersection;
/// - neither: not yet.
fn target_of(
    c: &dyn Constraint,
    constrained: &HashSet<ObjectId>,
) -> Result<Option<ObjectId>, SolveError> {
    let [a, b] = c.dependents() else {
        return Err(SolveError::MalformedConstraint(format!(
            "expected two dependents, got {}",
            c.dependents().len()
        )));
    };
    let (ia, ib) = (dependent_id(a)?, dependent_id(b)?);
    Ok(match (constrained.contains(&ia), constrained.contains(&ib)) {
        (true, false) => Some(ib),
        (false, true) | (true, true) => Some(ia),
        (false, false) => None,
    })
}
