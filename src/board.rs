//! The board: four quadrant slots holding acknowledged task records.
//!
//! The board is the client's only view state. It is constructed once at
//! initialization and passed explicitly into snapshot/render calls rather
//! than captured ambiently. It is write-only with respect to the backend:
//! mutations happen solely in response to acknowledged requests, and the
//! board is never read back to reconcile with the server.

use crate::task::{Quadrant, Task, TaskId};

/// Explicit mapping from quadrant to the tasks rendered under it.
#[derive(Debug, Default, Clone)]
pub struct Board {
    slots: [Vec<Task>; 4],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task under the quadrant selected by its priority.
    ///
    /// Exactly one slot receives the task. No de-duplication: inserting the
    /// same record twice yields two entries, mirroring the render contract.
    pub fn insert(&mut self, task: Task) -> Quadrant {
        let quadrant = task.quadrant();
        self.slots[quadrant.index()].push(task);
        quadrant
    }

    /// Remove the first entry with the given id, returning it.
    ///
    /// With duplicate records only one entry is removed per call, matching
    /// the one-item-per-delete-control contract.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        for slot in &mut self.slots {
            if let Some(pos) = slot.iter().position(|t| &t.id == id) {
                return Some(slot.remove(pos));
            }
        }
        None
    }

    /// First entry with the given id, if present.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.slots.iter().flat_map(|slot| slot.iter()).find(|t| &t.id == id)
    }

    /// Tasks currently under a quadrant, in insertion order.
    pub fn tasks(&self, quadrant: Quadrant) -> &[Task] {
        &self.slots[quadrant.index()]
    }

    /// Total entries across all quadrants.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}
