//! The card catalogue: one file per named card kind under `definitions/`
//! (`spec.md` GLOSSARY "Card catalogue"). `descriptor` resolves a
//! `CardKindId` to its static `CardDescriptor` through a registry built
//! once and cached, mirroring `characters::descriptor`.

use std::sync::OnceLock;

use crate::card::CardDescriptor;
use crate::ids::CardKindId;

mod definitions {
    pub mod arcane_legend_convergence;
    pub mod artifact_cloak;
    pub mod artifact_windveil;
    pub mod event_aegis_ward;
    pub mod event_battle_trance;
    pub mod event_cauterize;
    pub mod event_elemental_surge;
    pub mod event_guardians_oath;
    pub mod event_revival_rite;
    pub mod event_swift_reprieve;
    pub mod event_tides_of_renewal;
    pub mod summon_frostbound_sentinel;
    pub mod summon_smoldering_cinders;
    pub mod summon_tidal_guardian;
    pub mod support_alchemists_bench;
    pub mod support_caravan_outpost;
    pub mod support_traveling_scholar;
    pub mod support_wayshrine;
    pub mod talent_glacial_edge;
    pub mod talent_stormcall;
    pub mod weapon_edge;
    pub mod weapon_frostguard;
    pub mod weapon_twinblade;
}

fn registry() -> &'static [CardDescriptor] {
    static REGISTRY: OnceLock<Vec<CardDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            definitions::weapon_edge::descriptor(),
            definitions::artifact_cloak::descriptor(),
            definitions::talent_stormcall::descriptor(),
            definitions::event_guardians_oath::descriptor(),
            definitions::support_wayshrine::descriptor(),
            definitions::summon_smoldering_cinders::descriptor(),
            definitions::event_revival_rite::descriptor(),
            definitions::arcane_legend_convergence::descriptor(),
            definitions::summon_frostbound_sentinel::descriptor(),
            definitions::weapon_twinblade::descriptor(),
            definitions::support_caravan_outpost::descriptor(),
            definitions::event_swift_reprieve::descriptor(),
            definitions::weapon_frostguard::descriptor(),
            definitions::artifact_windveil::descriptor(),
            definitions::talent_glacial_edge::descriptor(),
            definitions::event_elemental_surge::descriptor(),
            definitions::event_cauterize::descriptor(),
            definitions::event_battle_trance::descriptor(),
            definitions::event_aegis_ward::descriptor(),
            definitions::summon_tidal_guardian::descriptor(),
            definitions::support_alchemists_bench::descriptor(),
            definitions::support_traveling_scholar::descriptor(),
            definitions::event_tides_of_renewal::descriptor(),
        ]
    })
}

/// Looks up a card kind's static descriptor. Panics if `kind` is not in
/// the registry -- every `CardKindId` reaching this function was already
/// validated against this same registry by `Deck::validate`.
pub fn descriptor(kind: CardKindId) -> &'static CardDescriptor {
    registry()
        .iter()
        .find(|d| d.kind_id == kind)
        .unwrap_or_else(|| panic!("unknown card kind {kind:?}"))
}

pub fn all() -> &'static [CardDescriptor] {
    registry()
}
