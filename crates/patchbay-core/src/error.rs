//! Error types for patchbay-core
//!
//! Resolution itself never fails. These errors only come from strict
//! parsing of slot keys and preset names.

/// Errors from parsing patchbay identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchbayError {
    /// Slot key is not one of chan_1..chan_10, chan_spot
    #[error("unknown channel slot '{key}'")]
    UnknownSlot {
        /// The key that failed to parse
        key: String,
    },

    /// Preset name is not one of the known layouts
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// The name that failed to parse
        name: String,
    },
}

impl PatchbayError {
    /// Create an UnknownSlot error
    pub fn unknown_slot(key: impl Into<String>) -> Self {
        Self::UnknownSlot { key: key.into() }
    }

    /// Create an UnknownPreset error
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }
}
