//! Monster template definitions and oracle interface.
//!
//! Templates describe every monster in a data-driven way: combat stats at a
//! canonical `base_level`, rewards, recruitment odds, and a display glyph.
//! Spawning a template at another level scales its stats up or down.
//!
//! The `MonsterOracle` trait lets the content layer provide the template
//! catalog without the engine hard-coupling to concrete data.

use crate::config::GameConfig;
use crate::state::{Actor, ActorKind, MonsterTraits};

/// Static monster definition at its canonical level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold_reward: u32,
    pub ticket_reward: u32,
    /// Chance per 10 000 that this monster joins the party when defeated.
    pub recruitment_rate: u32,
    /// Level the stat block above is balanced for.
    pub base_level: u32,
    pub glyph: &'static str,
    pub description: &'static str,
}

impl MonsterTemplate {
    /// Spawn an actor from this template at the given level.
    ///
    /// `max_hp`, `max_mp`, `attack`, `defense`, and `gold_reward` scale by
    /// `1 + 0.15 * (level - base_level)` (floored integer arithmetic, never
    /// below 5% of the template value). Pools start full.
    pub fn spawn(&self, level: u32) -> Actor {
        let traits = MonsterTraits {
            gold_reward: self.scaled(self.gold_reward, level),
            ticket_reward: self.ticket_reward,
            recruitment_rate: self.recruitment_rate,
            base_level: self.base_level,
            glyph: self.glyph,
        };

        Actor::with_level(
            self.name,
            ActorKind::Monster(traits),
            self.scaled(self.max_hp, level),
            self.scaled(self.max_mp, level),
            self.scaled(self.attack, level),
            self.scaled(self.defense, level),
            level.max(1),
        )
    }

    /// Scale a template value to the target level.
    fn scaled(&self, value: u32, level: u32) -> u32 {
        let diff = i64::from(level.max(1)) - i64::from(self.base_level);
        let num = (GameConfig::LEVEL_SCALE_DEN + GameConfig::LEVEL_SCALE_STEP * diff)
            .max(GameConfig::LEVEL_SCALE_MIN_NUM);
        ((i64::from(value) * num) / GameConfig::LEVEL_SCALE_DEN) as u32
    }
}

/// Oracle providing monster templates for spawning and rehydration.
pub trait MonsterOracle: Send + Sync {
    /// Returns the template with the given name, if registered.
    fn template(&self, name: &str) -> Option<&MonsterTemplate>;

    /// Returns every registered template, in registration order.
    ///
    /// Used by encounter generation for weighted selection.
    fn all_templates(&self) -> &[MonsterTemplate];
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOBLIN: MonsterTemplate = MonsterTemplate {
        name: "Inflation Goblin",
        max_hp: 50,
        max_mp: 10,
        attack: 15,
        defense: 5,
        gold_reward: 20,
        ticket_reward: 1,
        recruitment_rate: 1_500,
        base_level: 1,
        glyph: "👹",
        description: "A small fiend that drives prices upward.",
    };

    #[test]
    fn spawn_at_base_level_keeps_template_stats() {
        let m = GOBLIN.spawn(1);
        assert_eq!(m.max_hp, 50);
        assert_eq!(m.hp, 50);
        assert_eq!(m.mp, 10);
        assert_eq!(m.attack, 15);
        assert_eq!(m.defense, 5);
        assert_eq!(m.level, 1);
    }

    #[test]
    fn spawn_above_base_level_scales_up() {
        // level diff +2 => x1.30
        let m = GOBLIN.spawn(3);
        assert_eq!(m.max_hp, 65);
        assert_eq!(m.attack, 19); // floor(15 * 1.30)
        assert_eq!(m.defense, 6); // floor(5 * 1.30)
        match &m.kind {
            ActorKind::Monster(t) => assert_eq!(t.gold_reward, 26),
            ActorKind::Human => panic!("expected monster"),
        }
    }

    #[test]
    fn deep_down_level_never_zeroes_stats() {
        let boss = MonsterTemplate {
            base_level: 20,
            ..GOBLIN
        };
        let m = boss.spawn(1);
        assert!(m.max_hp > 0);
        assert!(m.attack > 0);
    }
}
