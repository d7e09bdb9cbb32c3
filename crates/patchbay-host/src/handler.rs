//! Reactive preset-selection handler
//!
//! ```text
//! selector change → flume channel → PatchbayHandler::run
//!                                      │
//!                     read preset → resolve → publish (11 × set)
//! ```
//!
//! Events are handled strictly one at a time; each resolution finishes and
//! publishes before the next event is taken off the channel.

use crate::adapter::HostAdapter;
use crate::error::HostError;
use flume::{Receiver, Sender};
use patchbay_core::{PresetId, PresetRouter, RoutingTable};

/// Capacity of the selection event channel
const SELECTION_CHANNEL_CAPACITY: usize = 64;

/// Event delivered by the host when the layout selector changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The operator selected a preset; re-read and republish
    PresetSelected,
    /// Stop the handler loop
    Shutdown,
}

/// Create the channel the host uses to notify the handler
pub fn selection_channel() -> (Sender<SelectionEvent>, Receiver<SelectionEvent>) {
    flume::bounded(SELECTION_CHANNEL_CAPACITY)
}

/// Counters for a handler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerStats {
    /// Selections that were resolved and fully published
    pub published: u64,
    /// Selections whose publish failed
    pub failed: u64,
}

/// Recomputes and republishes the routing table on every selection
pub struct PatchbayHandler<A> {
    adapter: A,
    stats: HandlerStats,
}

impl<A: HostAdapter> PatchbayHandler<A> {
    /// Create a handler over a host adapter
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            stats: HandlerStats::default(),
        }
    }

    /// Handle one selection: read, resolve, publish
    ///
    /// Returns the table that was published.
    pub fn on_preset_selected(&mut self) -> Result<RoutingTable, HostError> {
        let id = self.adapter.read_preset_id();
        let table = PresetRouter::resolve(&id);

        match &id {
            PresetId::Known(preset) => {
                log::info!(
                    "patchbay: preset {} → {} routed slot(s)",
                    preset,
                    table.assigned_slots().len()
                );
            }
            PresetId::Unrecognized(raw) => {
                log::debug!("patchbay: unrecognized preset '{}', clearing all slots", raw);
            }
        }

        match self.adapter.publish_routing_table(&table) {
            Ok(()) => {
                self.stats.published += 1;
                Ok(table)
            }
            Err(e) => {
                self.stats.failed += 1;
                Err(e)
            }
        }
    }

    /// Process selection events until shutdown or all senders drop
    ///
    /// A failed publish is logged and the loop moves on to the next event.
    pub fn run(&mut self, events: &Receiver<SelectionEvent>) -> HandlerStats {
        while let Ok(event) = events.recv() {
            match event {
                SelectionEvent::PresetSelected => {
                    if let Err(e) = self.on_preset_selected() {
                        log::warn!("patchbay: failed to publish routing table: {}", e);
                    }
                }
                SelectionEvent::Shutdown => {
                    log::debug!("patchbay: handler shutting down");
                    break;
                }
            }
        }
        self.stats
    }

    /// Counters so far
    pub fn stats(&self) -> HandlerStats {
        self.stats
    }

    /// The wrapped adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The wrapped adapter, mutably
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Unwrap the handler
    pub fn into_inner(self) -> A {
        self.adapter
    }
}
