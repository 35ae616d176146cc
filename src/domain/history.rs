//! Recorded positions of a simulation run.

use std::slice::Iter;

use super::Position;

/// Positions of all robots at one instant, in robot order.
pub type Snapshot = Vec<Position>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    pub fn iter(&self) -> Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Path of a single robot across all recorded steps.
    pub fn trajectory(&self, particle: usize) -> Option<Vec<Position>> {
        self.snapshots
            .iter()
            .map(|snapshot| snapshot.get(particle).copied())
            .collect()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
