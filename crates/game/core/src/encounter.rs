//! Encounter generation.
//!
//! Builds a 1-3 member enemy party matched to the player party's average
//! level. Template selection is weighted by level proximity so fights stay
//! winnable but not trivial, with extra weight on low-tier monsters for
//! low-level parties.

use crate::config::GameConfig;
use crate::env::monsters::{MonsterOracle, MonsterTemplate};
use crate::env::rng::{RngOracle, compute_seed};
use crate::state::party::Party;

mod context {
    pub const COUNT: u32 = 1;
    pub const PICK: u32 = 2;
    pub const LEVEL: u32 = 3;
}

/// Relative selection weight for a template given the player party's
/// average level.
fn selection_weight(template: &MonsterTemplate, player_level: u32) -> u64 {
    let diff = template.base_level.abs_diff(player_level);
    let mut weight: u64 = match diff {
        0 => 10_000,
        1 => 7_000,
        2 => 4_000,
        3 => 2_000,
        4 | 5 => 500,
        _ => 100,
    };

    // ease early game by favoring low-tier monsters
    if player_level <= 3 && template.base_level <= 3 {
        weight *= 2;
    } else if player_level <= 5 && template.base_level <= 5 {
        weight = weight * 3 / 2;
    } else if player_level <= 10 && template.base_level <= 10 {
        weight = weight * 6 / 5;
    }
    weight
}

/// Draw one template by weighted selection.
fn pick_template<'a>(
    monsters: &'a dyn MonsterOracle,
    rng: &dyn RngOracle,
    seed: u64,
    player_level: u32,
) -> Option<&'a MonsterTemplate> {
    let templates = monsters.all_templates();
    if templates.is_empty() {
        return None;
    }

    let total: u64 = templates
        .iter()
        .map(|t| selection_weight(t, player_level))
        .sum();
    let mut draw = u64::from(rng.next_u32(seed)) % total;
    for template in templates {
        let weight = selection_weight(template, player_level);
        if draw < weight {
            return Some(template);
        }
        draw -= weight;
    }
    templates.last()
}

/// Generate an enemy party of 1-3 monsters around the given average level.
///
/// Each monster spawns at `max(1, avg_level + d)` where `d` is drawn from
/// -1..=1 independently per slot. Fully deterministic for a given seed.
pub fn generate_enemy_party(
    monsters: &dyn MonsterOracle,
    rng: &dyn RngOracle,
    seed: u64,
    party_avg_level: u32,
) -> Party {
    let mut enemies = Party::new();

    let count = rng.range(
        compute_seed(seed, 0, 0, context::COUNT),
        GameConfig::MIN_ENEMIES,
        GameConfig::MAX_ENEMIES,
    );

    for slot in 0..count {
        let pick_seed = compute_seed(seed, u64::from(slot) + 1, slot, context::PICK);
        let Some(template) = pick_template(monsters, rng, pick_seed, party_avg_level) else {
            break;
        };

        let level_seed = compute_seed(seed, u64::from(slot) + 1, slot, context::LEVEL);
        let jitter = rng.range(level_seed, 0, 2) as i64 - 1;
        let level = (i64::from(party_avg_level) + jitter).max(1) as u32;

        // capacity is 4 and count tops out at 3, so this cannot fail
        if enemies.add_member(template.spawn(level)).is_err() {
            break;
        }
    }
    enemies
}
