//! Speaker-layout presets
//!
//! The host hands us whatever string the operator's selector holds. Known
//! layouts become [`Preset`] variants; anything else is kept verbatim as
//! [`PresetId::Unrecognized`] so resolution stays total.

use crate::error::PatchbayError;
use std::fmt;
use std::str::FromStr;

/// A named speaker layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Everything folded onto channel 1
    Mono,
    /// Front pair plus four left/right pairs on channels 1-5
    Hex,
    Deca,
    Fwd,
    Back,
    Zig,
}

impl Preset {
    /// All known presets
    pub const ALL: [Preset; 6] = [
        Self::Mono,
        Self::Hex,
        Self::Deca,
        Self::Fwd,
        Self::Back,
        Self::Zig,
    ];

    /// Identifier as selected on the control surface
    pub fn name(self) -> &'static str {
        match self {
            Self::Mono => "MONO",
            Self::Hex => "HEX",
            Self::Deca => "DECA",
            Self::Fwd => "FWD",
            Self::Back => "BACK",
            Self::Zig => "ZIG",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PatchbayError;

    /// Exact, case-sensitive match against [`Preset::name`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| PatchbayError::unknown_preset(s))
    }
}

/// Preset identifier as read from the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresetId {
    /// One of the known layouts
    Known(Preset),
    /// Any other value, including an empty selection
    Unrecognized(String),
}

impl PresetId {
    /// Classify a raw identifier. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Preset>() {
            Ok(preset) => Self::Known(preset),
            Err(_) => Self::Unrecognized(raw.to_string()),
        }
    }

    /// The known preset, if any
    pub fn preset(&self) -> Option<Preset> {
        match self {
            Self::Known(preset) => Some(*preset),
            Self::Unrecognized(_) => None,
        }
    }

    /// Check if this identifier names a known preset
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl Default for PresetId {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<Preset> for PresetId {
    fn from(preset: Preset) -> Self {
        Self::Known(preset)
    }
}

impl From<&str> for PresetId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(preset) => f.write_str(preset.name()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
