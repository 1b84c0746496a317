use std::collections::btree_map::{self, BTreeMap};

use crate::geom::{intersect, GeomError, Locus, Shape};
use crate::ids::ObjectId;

/// Freedom per object, keyed by identity.
///
/// Invariants:
/// - At most one entry per object. A second derivation is intersected with the
///   first (`merge`), never stored alongside it.
/// - An empty locus means "no reachable position" (conflicting constraints).
#[derive(Clone, Debug, Default)]
pub struct Freedoms {
    map: BTreeMap<ObjectId, Shape>,
}

impl Freedoms {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Shape> {
        self.map.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.map.contains_key(&id)
    }

    /// Overwrite the freedom of `id`, returning the previous one.
    pub fn insert(&mut self, id: ObjectId, freedom: Shape) -> Option<Shape> {
        self.map.insert(id, freedom)
    }

    /// Conjoin `freedom` into the entry for `id` (insert if absent).
    pub fn merge(&mut self, id: ObjectId, freedom: Shape) -> Result<(), GeomError> {
        match self.map.entry(id) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(freedom);
            }
            btree_map::Entry::Occupied(mut slot) => {
                let tightened = intersect(slot.get(), &freedom)?;
                let tightened = tightened.unwrap_or_else(|| Shape::Locus(Locus::empty()));
                if tightened.is_empty() {
                    tracing::warn!(object = %id, "freedom collapsed to the empty set");
                }
                slot.insert(tightened);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ObjectId, Shape> {
        self.map.iter()
    }

    /// Objects whose freedom is empty (over-constrained).
    pub fn contradictions(&self) -> Vec<ObjectId> {
        self.map
            .iter()
            .filter(|(_, s)| s.is_empty())
            .map(|(id, _)| *id)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Freedoms {
    type Item = (&'a ObjectId, &'a Shape);
    type IntoIter = btree_map::Iter<'a, ObjectId, Shape>;
    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
