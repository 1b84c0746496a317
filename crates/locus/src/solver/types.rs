//! Solver configuration and result.

use crate::constraint::Freedoms;
use crate::geom::{Point, Shape};
use crate::ids::ObjectId;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Pin an object at its current position when propagation stalls.
    /// When off, stalled constraints are returned in `Solution::unresolved`.
    pub self_anchor: bool,
    /// Upper bound on synthetic anchors. `None` means one per constraint,
    /// which is always enough because every anchor lets at least one
    /// pending constraint fire.
    pub max_anchors: Option<usize>,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            self_anchor: true,
            max_anchors: None,
        }
    }
}

/// Freedoms plus diagnostics about how they were obtained.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub freedoms: Freedoms,
    /// Objects pinned by the stall fallback, in anchoring order.
    pub anchored: Vec<ObjectId>,
    /// Indices (into the input constraint list) that never fired.
    pub unresolved: Vec<usize>,
}

impl Solution {
    #[inline]
    pub fn freedom(&self, id: ObjectId) -> Option<&Shape> {
        self.freedoms.get(id)
    }

    /// Every constraint fired and no freedom collapsed to the empty set.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && self.freedoms.contradictions().is_empty()
    }

    /// One concrete position per resolved object (see `Shape::representative`).
    pub fn pick_positions(&self) -> Vec<(ObjectId, Point)> {
        self.freedoms
            .iter()
            .filter_map(|(id, f)| f.representative().map(|p| (*id, p.with_id(*id))))
            .collect()
    }
}
