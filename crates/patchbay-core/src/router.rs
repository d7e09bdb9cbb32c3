//! Preset → routing table resolution
//!
//! # Preset table
//!
//! ```text
//! MONO  chan_1    ◄── left_1..4, right_1..4, front_1, front_2, spot
//! HEX   chan_1    ◄── front_1, front_2
//!       chan_2..5 ◄── left_n, right_n  (n = 1..4)
//! all   chan_spot ◄── spot
//! ```
//!
//! DECA, FWD, BACK and ZIG only route the spot output. chan_6..chan_10 are
//! never assigned by any preset.

use crate::preset::{Preset, PresetId};
use crate::slot::ChannelSlot;
use crate::table::RoutingTable;

/// One preset table row: a slot and the labels routed to it
pub type Assignment = (ChannelSlot, &'static [&'static str]);

const MONO: &[Assignment] = &[
    (
        ChannelSlot::Chan1,
        &[
            "left_1", "left_2", "left_3", "left_4", "right_1", "right_2", "right_3", "right_4",
            "front_1", "front_2", "spot",
        ],
    ),
    (ChannelSlot::Spot, &["spot"]),
];

const HEX: &[Assignment] = &[
    (ChannelSlot::Chan1, &["front_1", "front_2"]),
    (ChannelSlot::Chan2, &["left_1", "right_1"]),
    (ChannelSlot::Chan3, &["left_2", "right_2"]),
    (ChannelSlot::Chan4, &["left_3", "right_3"]),
    (ChannelSlot::Chan5, &["left_4", "right_4"]),
    (ChannelSlot::Spot, &["spot"]),
];

// TODO: confirm real channel layouts for DECA/FWD/BACK/ZIG with the show's
// sound designer; until then they only carry the spot output.
const SPOT_ONLY: &[Assignment] = &[(ChannelSlot::Spot, &["spot"])];

/// Stateless resolver from preset identifier to routing table
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetRouter;

impl PresetRouter {
    /// Known presets, in selector order
    pub fn known_presets() -> &'static [Preset] {
        &Preset::ALL
    }

    /// Static assignments for a known preset
    pub fn assignments(preset: Preset) -> &'static [Assignment] {
        match preset {
            Preset::Mono => MONO,
            Preset::Hex => HEX,
            Preset::Deca | Preset::Fwd | Preset::Back | Preset::Zig => SPOT_ONLY,
        }
    }

    /// Build the full routing table for `id`
    ///
    /// Starts from an all-empty table every call, so nothing from a previous
    /// preset can survive. Unrecognized identifiers yield the empty table.
    pub fn resolve(id: &PresetId) -> RoutingTable {
        let mut table = RoutingTable::new();

        match id {
            PresetId::Known(preset) => {
                for &(slot, labels) in Self::assignments(*preset) {
                    table.assign(slot, labels.iter().copied());
                }
            }
            PresetId::Unrecognized(_) => {}
        }

        table
    }

    /// Parse a raw identifier and resolve it
    pub fn resolve_str(raw: &str) -> RoutingTable {
        Self::resolve(&PresetId::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::SourceLabel;

    fn labels(table: &RoutingTable, slot: ChannelSlot) -> Vec<&str> {
        table.get(slot).iter().map(SourceLabel::as_str).collect()
    }

    fn assert_empty_except(table: &RoutingTable, keep: &[ChannelSlot]) {
        for slot in ChannelSlot::ALL {
            if !keep.contains(&slot) {
                assert!(table.get(slot).is_empty(), "{} should be empty", slot);
            }
        }
    }

    #[test]
    fn test_mono() {
        let table = PresetRouter::resolve_str("MONO");
        assert_eq!(
            labels(&table, ChannelSlot::Chan1),
            vec![
                "left_1", "left_2", "left_3", "left_4", "right_1", "right_2", "right_3",
                "right_4", "front_1", "front_2", "spot"
            ]
        );
        assert_eq!(labels(&table, ChannelSlot::Spot), vec!["spot"]);
        assert_empty_except(&table, &[ChannelSlot::Chan1, ChannelSlot::Spot]);
    }

    #[test]
    fn test_hex() {
        let table = PresetRouter::resolve_str("HEX");
        assert_eq!(labels(&table, ChannelSlot::Chan1), vec!["front_1", "front_2"]);
        assert_eq!(labels(&table, ChannelSlot::Chan2), vec!["left_1", "right_1"]);
        assert_eq!(labels(&table, ChannelSlot::Chan3), vec!["left_2", "right_2"]);
        assert_eq!(labels(&table, ChannelSlot::Chan4), vec!["left_3", "right_3"]);
        assert_eq!(labels(&table, ChannelSlot::Chan5), vec!["left_4", "right_4"]);
        assert_eq!(labels(&table, ChannelSlot::Spot), vec!["spot"]);
        assert_empty_except(
            &table,
            &[
                ChannelSlot::Chan1,
                ChannelSlot::Chan2,
                ChannelSlot::Chan3,
                ChannelSlot::Chan4,
                ChannelSlot::Chan5,
                ChannelSlot::Spot,
            ],
        );
    }

    #[test]
    fn test_spot_only_presets() {
        for name in ["DECA", "FWD", "BACK", "ZIG"] {
            let table = PresetRouter::resolve_str(name);
            assert_eq!(labels(&table, ChannelSlot::Spot), vec!["spot"], "{}", name);
            assert_empty_except(&table, &[ChannelSlot::Spot]);
        }
    }

    #[test]
    fn test_unrecognized_yields_empty_table() {
        for raw in ["", "mono", "OCTO", "HEX ", "chan_1"] {
            let table = PresetRouter::resolve_str(raw);
            assert_eq!(table.len(), 11);
            assert!(table.is_empty(), "'{}' should resolve to empty table", raw);
        }
    }

    #[test]
    fn test_every_resolution_is_complete() {
        let mut ids: Vec<PresetId> = Preset::ALL.into_iter().map(PresetId::from).collect();
        ids.push(PresetId::parse("unknown"));
        for id in ids {
            let table = PresetRouter::resolve(&id);
            assert_eq!(table.iter().count(), 11);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for preset in Preset::ALL {
            let id = PresetId::from(preset);
            assert_eq!(PresetRouter::resolve(&id), PresetRouter::resolve(&id));
        }
        let unknown = PresetId::parse("???");
        assert_eq!(PresetRouter::resolve(&unknown), PresetRouter::resolve(&unknown));
    }

    #[test]
    fn test_hex_then_mono_leaves_no_residue() {
        let _ = PresetRouter::resolve_str("HEX");
        let after_hex = PresetRouter::resolve_str("MONO");
        assert_eq!(after_hex, PresetRouter::resolve_str("MONO"));
        for slot in [
            ChannelSlot::Chan2,
            ChannelSlot::Chan3,
            ChannelSlot::Chan4,
            ChannelSlot::Chan5,
        ] {
            assert!(after_hex.get(slot).is_empty());
        }
    }

    #[test]
    fn test_numbered_slots_above_five_never_assigned() {
        for preset in PresetRouter::known_presets() {
            for &(slot, _) in PresetRouter::assignments(*preset) {
                assert!(
                    !matches!(
                        slot,
                        ChannelSlot::Chan6
                            | ChannelSlot::Chan7
                            | ChannelSlot::Chan8
                            | ChannelSlot::Chan9
                            | ChannelSlot::Chan10
                    ),
                    "{} assigns {}",
                    preset,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_every_known_preset_routes_spot() {
        for preset in Preset::ALL {
            let table = PresetRouter::resolve(&preset.into());
            assert_eq!(labels(&table, ChannelSlot::Spot), vec!["spot"]);
        }
    }
}
