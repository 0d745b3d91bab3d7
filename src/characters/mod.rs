//! The character catalogue: one file per named character kind
//! (`spec.md` GLOSSARY "Card catalogue", generalized to characters).
//! `descriptor` resolves a `CharacterKindId` to its static
//! `CharacterDescriptor` through a registry built once and cached, the
//! same shape the card catalogue uses (`cards::descriptor`).

use std::sync::OnceLock;

use crate::character::CharacterDescriptor;
use crate::ids::CharacterKindId;

pub mod anemo_scholar;
pub mod anemo_swordsman;
pub mod cryo_archer;
pub mod cryo_berserker;
pub mod dendro_ranger;
pub mod electro_duelist;
pub mod electro_sniper;
pub mod geo_guard;
pub mod geo_sentinel;
pub mod hydro_mage;
pub mod hydro_medic;
pub mod pyro_berserker;
pub mod pyro_mage;

fn registry() -> &'static [CharacterDescriptor] {
    static REGISTRY: OnceLock<Vec<CharacterDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            electro_duelist::descriptor(),
            hydro_mage::descriptor(),
            pyro_mage::descriptor(),
            cryo_archer::descriptor(),
            dendro_ranger::descriptor(),
            geo_guard::descriptor(),
            anemo_swordsman::descriptor(),
            hydro_medic::descriptor(),
            cryo_berserker::descriptor(),
            electro_sniper::descriptor(),
            anemo_scholar::descriptor(),
            geo_sentinel::descriptor(),
            pyro_berserker::descriptor(),
        ]
    })
}

/// Looks up a character kind's static descriptor. Panics if `kind` is not
/// in the registry -- every `CharacterKindId` that reaches this function
/// was assigned from a `Deck`, which is validated against this same
/// registry before a game starts.
pub fn descriptor(kind: CharacterKindId) -> &'static CharacterDescriptor {
    registry()
        .iter()
        .find(|d| d.kind_id == kind)
        .unwrap_or_else(|| panic!("unknown character kind {kind:?}"))
}

pub fn all() -> &'static [CharacterDescriptor] {
    registry()
}
