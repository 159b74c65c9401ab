//! Live-scene bookkeeping shared by validation, playback and frame evaluation.

use std::collections::BTreeMap;

use crate::{
    foundation::error::{SketchError, SketchResult},
    timeline::step::GroupId,
};

/// Where a group is in its `absent -> present -> mutated* -> absent` lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Never introduced.
    Absent,
    /// On screen; `mutations` counts the animate actions applied so far.
    Present { mutations: u32 },
    /// Removed. The id is retired for good.
    Removed,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    states: BTreeMap<GroupId, Lifecycle>,
    /// Present groups in introduction order (painter's order).
    order: Vec<GroupId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: GroupId) -> Lifecycle {
        self.states.get(&id).copied().unwrap_or(Lifecycle::Absent)
    }

    pub fn is_present(&self, id: GroupId) -> bool {
        matches!(self.state(id), Lifecycle::Present { .. })
    }

    /// Present groups, first introduced first.
    pub fn present(&self) -> &[GroupId] {
        &self.order
    }

    pub fn introduce(&mut self, id: GroupId) -> SketchResult<()> {
        match self.state(id) {
            Lifecycle::Absent => {
                self.states.insert(id, Lifecycle::Present { mutations: 0 });
                self.order.push(id);
                Ok(())
            }
            Lifecycle::Present { .. } => Err(SketchError::timeline(format!(
                "group {id} is already present"
            ))),
            Lifecycle::Removed => Err(SketchError::timeline(format!(
                "group {id} was removed and cannot re-enter the scene"
            ))),
        }
    }

    pub fn mutate(&mut self, id: GroupId) -> SketchResult<()> {
        match self.states.get_mut(&id) {
            Some(Lifecycle::Present { mutations }) => {
                *mutations += 1;
                Ok(())
            }
            _ => Err(SketchError::timeline(format!(
                "group {id} is not present and cannot be animated"
            ))),
        }
    }

    /// Remove `id` if present. Returns whether anything changed; removing an absent group is a
    /// no-op.
    pub fn remove(&mut self, id: GroupId) -> bool {
        if !self.is_present(id) {
            return false;
        }
        self.states.insert(id, Lifecycle::Removed);
        self.order.retain(|g| *g != id);
        true
    }

    /// Remove every present group, returning them in id order.
    pub fn clear(&mut self) -> Vec<GroupId> {
        let mut gone = self.order.clone();
        gone.sort();
        for id in &gone {
            self.remove(*id);
        }
        gone
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scene.rs"]
mod tests;
