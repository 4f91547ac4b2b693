//! The fixed spell table.
//!
//! Spells are static data, not a scripting system. Damage spells scale off
//! the caster's attack power; heal spells restore a fixed amount to the
//! caster.

use crate::error::{ErrorSeverity, GameError};

/// What a spell does on a successful cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellEffect {
    /// Deal `attack_power * multiplier_pct / 100` damage to one enemy.
    Damage { multiplier_pct: u32 },
    /// Restore a fixed amount of HP to the caster.
    Heal { amount: u32 },
}

/// One entry in the spell table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spell {
    pub name: &'static str,
    pub mp_cost: u32,
    pub effect: SpellEffect,
    pub description: &'static str,
}

/// Every castable spell.
pub const SPELLS: [Spell; 4] = [
    Spell {
        name: "Fireball",
        mp_cost: 3,
        effect: SpellEffect::Damage { multiplier_pct: 150 },
        description: "Scorches one enemy with flame.",
    },
    Spell {
        name: "Inferno",
        mp_cost: 5,
        effect: SpellEffect::Damage { multiplier_pct: 200 },
        description: "Engulfs one enemy in a roaring blaze.",
    },
    Spell {
        name: "Heal",
        mp_cost: 3,
        effect: SpellEffect::Heal { amount: 30 },
        description: "Restores some of the caster's HP.",
    },
    Spell {
        name: "Greater Heal",
        mp_cost: 8,
        effect: SpellEffect::Heal { amount: 80 },
        description: "Restores a large amount of the caster's HP.",
    },
];

/// Look up a spell by name.
pub fn lookup(name: &str) -> Option<&'static Spell> {
    SPELLS.iter().find(|spell| spell.name == name)
}

/// Errors from casting a spell. The cast aborts before any MP deduction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("unknown spell: {name}")]
    UnknownSpell { name: String },

    #[error("insufficient MP: need {required}, have {available}")]
    InsufficientMp { required: u32, available: u32 },
}

impl GameError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSpell { .. } => ErrorSeverity::Validation,
            Self::InsufficientMp { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpell { .. } => "UNKNOWN_SPELL",
            Self::InsufficientMp { .. } => "INSUFFICIENT_MP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_table_entry() {
        for spell in &SPELLS {
            assert_eq!(lookup(spell.name), Some(spell));
        }
        assert!(lookup("Meteor").is_none());
    }
}
