//! Routing table: channel slot → ordered source labels
//!
//! Storage is a fixed array indexed by [`ChannelSlot`], so the table always
//! holds exactly the eleven slots. An unassigned slot is an empty list, never
//! a missing entry.

use crate::label::SourceLabel;
use crate::slot::{ChannelSlot, SLOT_COUNT};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Complete routing table for the output patchbay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingTable {
    slots: [Vec<SourceLabel>; SLOT_COUNT],
}

impl RoutingTable {
    /// Create a table with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every slot
    pub fn reset(&mut self) {
        for labels in &mut self.slots {
            labels.clear();
        }
    }

    /// Replace the labels routed to `slot`
    pub fn assign<I, L>(&mut self, slot: ChannelSlot, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<SourceLabel>,
    {
        let entry = &mut self.slots[slot.index()];
        entry.clear();
        entry.extend(labels.into_iter().map(Into::into));
    }

    /// Labels routed to `slot`, in order
    pub fn get(&self, slot: ChannelSlot) -> &[SourceLabel] {
        &self.slots[slot.index()]
    }

    /// Iterate all slots in canonical order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (ChannelSlot, &[SourceLabel])> {
        ChannelSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    /// Slots carrying at least one label
    pub fn assigned_slots(&self) -> Vec<ChannelSlot> {
        self.iter()
            .filter(|(_, labels)| !labels.is_empty())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Check if no slot carries any label
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Number of slots (always eleven)
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl Serialize for RoutingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SLOT_COUNT))?;
        for (slot, labels) in self.iter() {
            map.serialize_entry(slot.key(), labels)?;
        }
        map.end()
    }
}
