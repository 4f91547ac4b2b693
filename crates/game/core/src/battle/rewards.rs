//! Victory payout computation.

use crate::battle::{Battle, context};
use crate::config::GameConfig;
use crate::env::rng::RngOracle;
use crate::state::actor::{Actor, ActorKind};

/// Everything a won battle pays out.
///
/// Experience is per surviving player member, not a pool to split.
/// Recruited monsters come back restored to full HP/MP.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VictoryRewards {
    pub gold: u32,
    pub tickets: u32,
    pub experience: u32,
    pub recruited: Vec<Actor>,
}

impl Battle {
    /// Compute the payout for a won battle.
    ///
    /// Gold and tickets sum over every enemy, experience is the sum of
    /// `enemy level * 20`, and each enemy gets exactly one recruitment roll
    /// against its own rate.
    pub fn victory_rewards(&mut self, rng: &dyn RngOracle) -> VictoryRewards {
        let mut rewards = VictoryRewards::default();

        for index in 0..self.enemies.len() {
            let seed = self.next_seed(index as u32, context::RECRUIT);
            let Some(enemy) = self.enemies.get(index) else {
                continue;
            };
            let ActorKind::Monster(traits) = enemy.kind else {
                continue;
            };

            rewards.gold += traits.gold_reward;
            rewards.tickets += traits.ticket_reward;
            rewards.experience += enemy.level * GameConfig::EXP_PER_ENEMY_LEVEL;

            if rng.chance(seed, traits.recruitment_rate) {
                let mut recruit = enemy.clone();
                recruit.hp = recruit.max_hp;
                recruit.mp = recruit.max_mp;
                recruit.guarding = false;
                rewards.recruited.push(recruit);
            }
        }
        rewards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::rng::PcgRng;
    use crate::state::actor::MonsterTraits;
    use crate::state::party::Party;

    fn monster(name: &str, level: u32, recruitment_rate: u32) -> Actor {
        let traits = MonsterTraits {
            gold_reward: 20,
            ticket_reward: 1,
            recruitment_rate,
            base_level: 1,
            glyph: "👹",
        };
        let mut m = Actor::with_level(name, ActorKind::Monster(traits), 30, 0, 8, 3, level);
        m.hp = 0;
        m
    }

    fn won_battle(recruitment_rate: u32) -> Battle {
        let mut players = Party::new();
        players
            .add_member(Actor::new_human("Taylor", 100, 20, 15, 10))
            .unwrap();
        let mut enemies = Party::new();
        enemies.add_member(monster("A", 1, recruitment_rate)).unwrap();
        enemies.add_member(monster("B", 3, recruitment_rate)).unwrap();
        Battle::new(players, enemies, 11)
    }

    #[test]
    fn payout_sums_over_all_enemies() {
        let rng = PcgRng;
        let mut battle = won_battle(0);
        let rewards = battle.victory_rewards(&rng);
        assert_eq!(rewards.gold, 40);
        assert_eq!(rewards.tickets, 2);
        assert_eq!(rewards.experience, 80); // (1 + 3) * 20
    }

    #[test]
    fn recruitment_rolls_are_per_enemy_extremes() {
        let rng = PcgRng;

        let mut never = won_battle(0);
        assert!(never.victory_rewards(&rng).recruited.is_empty());

        let mut always = won_battle(10_000);
        let recruited = always.victory_rewards(&rng).recruited;
        assert_eq!(recruited.len(), 2);
        // recruits come back at full strength
        assert!(recruited.iter().all(|r| r.hp == r.max_hp));
    }
}
