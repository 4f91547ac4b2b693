//! Combat-capable entities.
//!
//! An `Actor` is anything that can fight: the human party members and every
//! monster, friendly or hostile. Monsters carry extra traits (rewards,
//! recruitment odds, glyph) as variant data on `ActorKind`, so no caller
//! ever needs to inspect the concrete kind to render or reward one.

use crate::config::GameConfig;
use crate::env::catalog::{ArmorDef, WeaponDef};
use crate::spell::{self, SpellEffect, SpellError};

/// What kind of actor this is. Monster-specific data rides on the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActorKind {
    Human,
    Monster(MonsterTraits),
}

impl ActorKind {
    /// Stable tag used by the serialization boundary.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Monster(_) => "monster",
        }
    }
}

/// Monster-only attributes, populated from the template at spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterTraits {
    pub gold_reward: u32,
    pub ticket_reward: u32,
    /// Chance per 10 000 of joining the party when defeated.
    pub recruitment_rate: u32,
    pub base_level: u32,
    pub glyph: &'static str,
}

/// Result of a successful spell cast. MP has already been deducted; a heal
/// has already been applied to the caster, a damage payload is the caller's
/// to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellOutcome {
    Damage { amount: u32 },
    Healed { amount: u32 },
}

/// A combat-capable entity: human party member or monster.
///
/// `attack`/`defense` are derived stats (base + equipment bonus) and are
/// re-derived whenever equipment or base stats change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub kind: ActorKind,
    pub max_hp: u32,
    pub hp: u32,
    pub max_mp: u32,
    pub mp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub experience: u32,
    pub equipped_weapon: Option<WeaponDef>,
    pub equipped_armor: Option<ArmorDef>,
    /// One-shot status set by guarding, consumed by the next incoming hit.
    pub guarding: bool,
}

impl Actor {
    /// Create a level-1 human with full pools and no equipment.
    pub fn new_human(
        name: impl Into<String>,
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self::with_level(name, ActorKind::Human, max_hp, max_mp, attack, defense, 1)
    }

    /// Create an actor at a specific level with full pools.
    pub fn with_level(
        name: impl Into<String>,
        kind: ActorKind,
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
        level: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            max_hp,
            hp: max_hp,
            max_mp,
            mp: max_mp,
            base_attack: attack,
            base_defense: defense,
            attack,
            defense,
            level: level.max(1),
            experience: 0,
            equipped_weapon: None,
            equipped_armor: None,
            guarding: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Display glyph. Humans share one glyph; each monster carries its own.
    pub fn glyph(&self) -> &'static str {
        match &self.kind {
            ActorKind::Human => "👤",
            ActorKind::Monster(traits) => traits.glyph,
        }
    }

    /// Outgoing damage before the target's defense: derived attack plus the
    /// equipped weapon's bonus.
    pub fn attack_power(&self) -> u32 {
        let weapon_bonus = self.equipped_weapon.map_or(0, |w| w.attack_bonus);
        self.attack + weapon_bonus
    }

    /// Apply incoming damage and return the amount actually dealt.
    ///
    /// A guarding actor defends at 1.5x for this one hit; the guard status is
    /// consumed whether or not it changed the result. Every hit deals at
    /// least 1 damage.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let effective_defense = if self.guarding {
            self.guarding = false;
            self.defense * GameConfig::GUARD_DEFENSE_NUM / GameConfig::GUARD_DEFENSE_DEN
        } else {
            self.defense
        };

        let actual = amount
            .saturating_sub(effective_defense)
            .max(GameConfig::MINIMUM_DAMAGE);
        self.hp = self.hp.saturating_sub(actual);
        actual
    }

    /// Restore HP, clamped to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Restore MP, clamped to max. Returns the amount actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_mp - self.mp);
        self.mp += restored;
        restored
    }

    /// Raise the one-shot guard status.
    pub fn guard(&mut self) {
        self.guarding = true;
    }

    /// Equip a weapon, replacing any current one. The previous bonus never
    /// stacks: derived attack is always rebuilt from base plus the new bonus.
    pub fn equip_weapon(&mut self, weapon: WeaponDef) {
        self.equipped_weapon = Some(weapon);
        self.rederive_stats();
    }

    /// Equip an armor, replacing any current one.
    pub fn equip_armor(&mut self, armor: ArmorDef) {
        self.equipped_armor = Some(armor);
        self.rederive_stats();
    }

    /// Cast a spell by name.
    ///
    /// MP is deducted only on success. Heals apply to the caster immediately;
    /// damage is returned for the battle engine to deliver.
    pub fn cast_spell(&mut self, name: &str) -> Result<SpellOutcome, SpellError> {
        let spell = spell::lookup(name).ok_or_else(|| SpellError::UnknownSpell {
            name: name.to_string(),
        })?;

        if self.mp < spell.mp_cost {
            return Err(SpellError::InsufficientMp {
                required: spell.mp_cost,
                available: self.mp,
            });
        }
        self.mp -= spell.mp_cost;

        match spell.effect {
            SpellEffect::Damage { multiplier_pct } => Ok(SpellOutcome::Damage {
                amount: self.attack_power() * multiplier_pct / 100,
            }),
            SpellEffect::Heal { amount } => {
                let healed = self.heal(amount);
                Ok(SpellOutcome::Healed { amount: healed })
            }
        }
    }

    /// Grant experience, leveling up while the threshold is crossed.
    ///
    /// The threshold for the next level is `level * 100`; leftover experience
    /// carries over, so one large grant can advance several levels. Returns
    /// true if at least one level was gained.
    pub fn add_experience(&mut self, exp: u32) -> bool {
        self.experience += exp;

        let mut leveled = false;
        while self.experience >= self.level * GameConfig::EXP_PER_LEVEL {
            self.experience -= self.level * GameConfig::EXP_PER_LEVEL;
            self.level_up();
            leveled = true;
        }
        leveled
    }

    /// Apply one level of stat growth and fully restore pools.
    fn level_up(&mut self) {
        self.level += 1;
        self.max_hp += self.max_hp / 10 + 5;
        self.max_mp += self.max_mp / 10 + 2;
        self.hp = self.max_hp;
        self.mp = self.max_mp;
        self.base_attack += GameConfig::LEVEL_ATTACK_GAIN;
        self.base_defense += GameConfig::LEVEL_DEFENSE_GAIN;
        self.rederive_stats();
    }

    /// Rebuild derived attack/defense from base stats plus equipment.
    fn rederive_stats(&mut self) {
        self.attack = self.base_attack + self.equipped_weapon.map_or(0, |w| w.attack_bonus);
        self.defense = self.base_defense + self.equipped_armor.map_or(0, |a| a.defense_bonus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Actor {
        Actor::new_human("Taylor", 100, 20, 15, 10)
    }

    fn sword(bonus: u32) -> WeaponDef {
        WeaponDef {
            name: "Sword",
            attack_bonus: bonus,
            price_gold: 100,
            price_tickets: 2,
            description: "",
        }
    }

    #[test]
    fn damage_is_attack_minus_defense_with_floor() {
        let mut a = hero();
        assert_eq!(a.take_damage(25), 15);
        assert_eq!(a.hp, 85);
        // below defense still lands 1
        assert_eq!(a.take_damage(3), 1);
        assert_eq!(a.hp, 84);
    }

    #[test]
    fn hp_never_goes_below_zero() {
        let mut a = hero();
        a.take_damage(10_000);
        assert_eq!(a.hp, 0);
        assert!(!a.is_alive());
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut a = hero();
        a.take_damage(60); // 50 through defense
        assert_eq!(a.hp, 50);
        assert_eq!(a.heal(999), 50);
        assert_eq!(a.hp, 100);
    }

    #[test]
    fn guard_is_consumed_by_one_hit() {
        let mut a = hero();
        a.guard();
        // effective defense 15 for the guarded hit
        assert_eq!(a.take_damage(25), 10);
        assert!(!a.guarding);
        // next hit back to base defense 10
        assert_eq!(a.take_damage(25), 15);
    }

    #[test]
    fn equipment_never_stacks() {
        let mut a = hero();
        a.equip_weapon(sword(5));
        assert_eq!(a.attack, 20);
        a.equip_weapon(sword(8));
        assert_eq!(a.attack, 23);
        // same item twice is a no-op on the derived stat
        a.equip_weapon(sword(8));
        assert_eq!(a.attack, 23);
    }

    #[test]
    fn attack_power_adds_weapon_bonus_on_top() {
        let mut a = hero();
        a.equip_weapon(sword(5));
        assert_eq!(a.attack_power(), 25);
    }

    #[test]
    fn single_level_up_restores_and_grows() {
        let mut a = hero();
        a.take_damage(60);
        assert!(a.add_experience(150));
        assert_eq!(a.level, 2);
        assert_eq!(a.experience, 50);
        assert_eq!(a.max_hp, 115); // 100 + 100/10 + 5
        assert_eq!(a.hp, 115);
        assert_eq!(a.max_mp, 24); // 20 + 20/10 + 2
        assert_eq!(a.attack, 17);
        assert_eq!(a.defense, 12);
    }

    #[test]
    fn large_grant_loops_levels() {
        let mut a = hero();
        assert!(a.add_experience(350));
        // 350 -> -100 (lv2) -> -200 (lv3), 50 left
        assert_eq!(a.level, 3);
        assert_eq!(a.experience, 50);
    }

    #[test]
    fn spell_failures_leave_mp_untouched() {
        let mut a = hero();
        assert!(matches!(
            a.cast_spell("Meteor"),
            Err(SpellError::UnknownSpell { .. })
        ));
        a.mp = 2;
        assert!(matches!(
            a.cast_spell("Fireball"),
            Err(SpellError::InsufficientMp { .. })
        ));
        assert_eq!(a.mp, 2);
    }

    #[test]
    fn damage_spell_scales_attack_power() {
        let mut a = hero();
        let outcome = a.cast_spell("Fireball").unwrap();
        assert_eq!(outcome, SpellOutcome::Damage { amount: 22 }); // 15 * 1.5
        assert_eq!(a.mp, 17);
    }

    #[test]
    fn heal_spell_applies_to_self() {
        let mut a = hero();
        a.take_damage(30); // hp 80
        let outcome = a.cast_spell("Heal").unwrap();
        assert_eq!(outcome, SpellOutcome::Healed { amount: 20 });
        assert_eq!(a.hp, 100);
    }
}
