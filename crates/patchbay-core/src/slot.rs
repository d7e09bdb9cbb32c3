//! Output channel slots on the patchbay
//!
//! The slot set is closed: ten numbered outputs plus the dedicated spot
//! output. Every published routing table carries all eleven.

use crate::error::PatchbayError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Host path prefix under which slots are published
pub const DEFAULT_PATCHBAY_PREFIX: &str = "output_patchbay";

/// Number of channel slots in every routing table
pub const SLOT_COUNT: usize = 11;

/// One named output of the patchbay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelSlot {
    Chan1,
    Chan2,
    Chan3,
    Chan4,
    Chan5,
    Chan6,
    Chan7,
    Chan8,
    Chan9,
    Chan10,
    /// Dedicated spot output
    Spot,
}

impl ChannelSlot {
    /// All slots in canonical publish order
    pub const ALL: [ChannelSlot; SLOT_COUNT] = [
        Self::Chan1,
        Self::Chan2,
        Self::Chan3,
        Self::Chan4,
        Self::Chan5,
        Self::Chan6,
        Self::Chan7,
        Self::Chan8,
        Self::Chan9,
        Self::Chan10,
        Self::Spot,
    ];

    /// Literal slot key as used by the host (e.g. "chan_3", "chan_spot")
    pub fn key(self) -> &'static str {
        match self {
            Self::Chan1 => "chan_1",
            Self::Chan2 => "chan_2",
            Self::Chan3 => "chan_3",
            Self::Chan4 => "chan_4",
            Self::Chan5 => "chan_5",
            Self::Chan6 => "chan_6",
            Self::Chan7 => "chan_7",
            Self::Chan8 => "chan_8",
            Self::Chan9 => "chan_9",
            Self::Chan10 => "chan_10",
            Self::Spot => "chan_spot",
        }
    }

    /// Host path for this slot under `prefix` (e.g. "output_patchbay/chan_1")
    pub fn path(self, prefix: &str) -> String {
        format!("{}/{}", prefix, self.key())
    }

    /// Position in [`ChannelSlot::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChannelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChannelSlot {
    type Err = PatchbayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| PatchbayError::unknown_slot(s))
    }
}

impl Serialize for ChannelSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ChannelSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots_in_canonical_order() {
        let keys: Vec<&str> = ChannelSlot::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                "chan_1", "chan_2", "chan_3", "chan_4", "chan_5", "chan_6", "chan_7", "chan_8",
                "chan_9", "chan_10", "chan_spot"
            ]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (i, slot) in ChannelSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_path() {
        assert_eq!(
            ChannelSlot::Chan10.path(DEFAULT_PATCHBAY_PREFIX),
            "output_patchbay/chan_10"
        );
        assert_eq!(
            ChannelSlot::Spot.path(DEFAULT_PATCHBAY_PREFIX),
            "output_patchbay/chan_spot"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("chan_7".parse::<ChannelSlot>(), Ok(ChannelSlot::Chan7));
        assert_eq!("chan_spot".parse::<ChannelSlot>(), Ok(ChannelSlot::Spot));
        assert!(matches!(
            "chan_11".parse::<ChannelSlot>(),
            Err(PatchbayError::UnknownSlot { .. })
        ));
        assert!("CHAN_1".parse::<ChannelSlot>().is_err());
    }

    #[test]
    fn test_serde_uses_key() {
        let yaml = serde_yaml::to_string(&ChannelSlot::Chan2).unwrap();
        assert_eq!(yaml.trim(), "chan_2");
        let slot: ChannelSlot = serde_yaml::from_str("chan_spot").unwrap();
        assert_eq!(slot, ChannelSlot::Spot);
    }
}
