//! Narrow adapter between the resolver and the host
//!
//! The resolver never touches host state directly. Everything it needs goes
//! through [`HostAdapter`]: one read of the selected preset, one wholesale
//! publish of the routing table.

use crate::config::HostConfig;
use crate::error::HostError;
use crate::store::HostStore;
use patchbay_core::{PresetId, RoutingTable};

/// Boundary between the pure resolver and host-global state
pub trait HostAdapter {
    /// Read the currently selected preset identifier
    fn read_preset_id(&self) -> PresetId;

    /// Publish every slot of `table` to the host
    fn publish_routing_table(&mut self, table: &RoutingTable) -> Result<(), HostError>;
}

/// [`HostAdapter`] over a key/value [`HostStore`]
#[derive(Debug)]
pub struct StoreAdapter<S> {
    store: S,
    patchbay_prefix: String,
    preset_key: String,
}

impl<S: HostStore> StoreAdapter<S> {
    /// Create an adapter using the prefix and preset key from `config`
    pub fn new(store: S, config: &HostConfig) -> Self {
        Self::with_keys(store, &config.patchbay_prefix, &config.preset_key)
    }

    /// Create an adapter with explicit prefix and preset key
    pub fn with_keys(
        store: S,
        patchbay_prefix: impl Into<String>,
        preset_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            patchbay_prefix: patchbay_prefix.into(),
            preset_key: preset_key.into(),
        }
    }

    /// The wrapped store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The wrapped store, mutably (e.g. to simulate a selection)
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the adapter
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: HostStore> HostAdapter for StoreAdapter<S> {
    /// A missing value reads as an empty (unrecognized) identifier
    fn read_preset_id(&self) -> PresetId {
        self.store
            .get(&self.preset_key)
            .map(|raw| PresetId::parse(&raw))
            .unwrap_or_default()
    }

    /// One `set` per slot in canonical order, empty slots included
    ///
    /// A refused write does not stop the remaining slots from being
    /// overwritten; the first error is returned once all eleven were tried.
    fn publish_routing_table(&mut self, table: &RoutingTable) -> Result<(), HostError> {
        let mut first_error = None;
        for (slot, labels) in table.iter() {
            let path = slot.path(&self.patchbay_prefix);
            log::trace!("patchbay: set {} = {:?}", path, labels);
            if let Err(e) = self.store.set(&path, labels) {
                log::warn!("patchbay: write to {} failed: {}", path, e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
