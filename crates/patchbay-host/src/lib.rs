//! Host integration for the output patchbay
//!
//! This crate provides:
//! - [`HostStore`]: the host's `get`/`set` primitives, with in-memory and
//!   YAML-file implementations
//! - [`HostAdapter`]: the narrow read-preset / publish-table boundary
//! - [`PatchbayHandler`]: reacts to preset selections and republishes the
//!   full routing table
//! - YAML host configuration
//!
//! # Architecture
//!
//! ```text
//! Host selector → SelectionEvent (flume) → PatchbayHandler
//!                                             │
//!                       HostAdapter::read_preset_id
//!                       PresetRouter::resolve          (patchbay-core, pure)
//!                       HostAdapter::publish_routing_table → HostStore::set × 11
//! ```

mod adapter;
mod config;
mod error;
mod handler;
mod store;

pub use adapter::{HostAdapter, StoreAdapter};
pub use config::{
    default_config_dir, default_config_path, default_state_path, load_host_config,
    load_or_init_host_config, save_host_config, HostConfig,
};
pub use error::HostError;
pub use handler::{selection_channel, HandlerStats, PatchbayHandler, SelectionEvent};
pub use store::{HostStore, MemoryStore, StoreDocument, YamlStore};
