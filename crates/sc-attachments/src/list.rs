//! The composer-owned attachment list
//!
//! An ordered sequence of records with an advisory capacity. The capacity
//! gates intake (remaining-slot math, drop-time rejection) but is not a
//! hard length invariant: under the legacy accept-all overflow policy the
//! list can temporarily exceed it.

use serde::{Deserialize, Serialize};

use crate::model::{AttachmentId, AttachmentRecord};

/// Ordered, capacity-aware list of attachment records.
///
/// Owned exclusively by the [`Composer`](crate::Composer); other components
/// read its length and mutate it only through composer callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentList {
    records: Vec<AttachmentRecord>,
    capacity: usize,
}

impl AttachmentList {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when no further attachments should be accepted.
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Free slots left before the capacity is reached.
    pub fn remaining_slots(&self) -> usize {
        self.capacity.saturating_sub(self.records.len())
    }

    pub fn get(&self, index: usize) -> Option<&AttachmentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachmentRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[AttachmentRecord] {
        &self.records
    }

    pub fn push(&mut self, record: AttachmentRecord) {
        self.records.push(record);
    }

    /// Remove by position. Positions are volatile across mutations, so this
    /// is only safe for a single, synchronous removal.
    pub fn remove_at(&mut self, index: usize) -> Option<AttachmentRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Remove by stable id. Safe regardless of prior mutations.
    pub fn remove_by_id(&mut self, id: AttachmentId) -> Option<AttachmentRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }
}
