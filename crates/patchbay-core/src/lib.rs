//! Output patchbay routing for venue speaker-layout presets
//!
//! This crate provides:
//! - The fixed set of output channel slots (chan_1..chan_10, chan_spot)
//! - Source labels and speaker-layout preset identifiers
//! - A complete, always-eleven-slot routing table
//! - [`PresetRouter`], the pure preset → routing table resolver
//!
//! # Resolution
//!
//! ```text
//! preset id ──► reset (all slots empty) ──► match preset ──► RoutingTable
//!                                               │
//!                                      unrecognized: no-op
//! ```
//!
//! Resolution holds no state between calls and cannot fail. Reading the
//! selected preset and publishing the table belong to the host adapter in
//! `patchbay-host`.
//!
//! ```
//! use patchbay_core::{ChannelSlot, PresetRouter};
//!
//! let table = PresetRouter::resolve_str("HEX");
//! assert_eq!(table.get(ChannelSlot::Chan2).len(), 2);
//! assert!(table.get(ChannelSlot::Chan6).is_empty());
//! ```

mod error;
mod label;
mod preset;
mod router;
mod slot;
mod table;

pub use error::PatchbayError;
pub use label::SourceLabel;
pub use preset::{Preset, PresetId};
pub use router::{Assignment, PresetRouter};
pub use slot::{ChannelSlot, DEFAULT_PATCHBAY_PREFIX, SLOT_COUNT};
pub use table::RoutingTable;
