//! Turn-based battle engine.
//!
//! A battle pits the player party against a generated enemy party and runs
//! in one of two modes:
//!
//! - **Automatic**: [`Battle::run_auto`] resolves the whole encounter with
//!   basic attacks at random targets, alternating full side sweeps.
//! - **Interactive**: [`Battle::player_action`] resolves exactly one player
//!   actor's command per call. Once every alive player member has acted the
//!   enemy side takes one automatic sweep and the round counter advances.
//!
//! All randomness draws through the [`RngOracle`] with seeds derived from
//! the battle seed and a per-roll nonce, so a persisted battle replays
//! identically.

pub mod action;
pub mod log;
pub mod rewards;

pub use action::{ActionReport, BattleCommand, BattleError, BattleOutcome, BattleSummary};
pub use log::BattleLog;
pub use rewards::VictoryRewards;

use crate::env::rng::{RngOracle, compute_seed};
use crate::state::actor::SpellOutcome;
use crate::state::party::Party;

/// Seed-mixing contexts, one per kind of roll.
mod context {
    pub const TARGET: u32 = 1;
    pub const RECRUIT: u32 = 2;
}

/// One encounter between the player party and an enemy party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    pub players: Party,
    pub enemies: Party,
    /// Round counter, starting at 1.
    pub turn: u32,
    /// Player-side member index whose action is next.
    cursor: usize,
    pub log: BattleLog,
    seed: u64,
    nonce: u64,
}

impl Battle {
    /// Open a new battle. The log starts with one appearance line per enemy.
    pub fn new(players: Party, enemies: Party, seed: u64) -> Self {
        let mut log = BattleLog::new();
        for enemy in enemies.members() {
            log.push(format!("{} {} draws near!", enemy.glyph(), enemy.name));
        }
        let cursor = players.alive_indices().next().unwrap_or(0);
        Self {
            players,
            enemies,
            turn: 1,
            cursor,
            log,
            seed,
            nonce: 0,
        }
    }

    /// Rebuild a battle from persisted state.
    pub fn resume(
        players: Party,
        enemies: Party,
        turn: u32,
        cursor: usize,
        log: BattleLog,
        seed: u64,
        nonce: u64,
    ) -> Self {
        Self {
            players,
            enemies,
            turn,
            cursor,
            log,
            seed,
            nonce,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// How the battle ended, if it has. Defeat takes priority: a wiped
    /// player side is a defeat no matter what state the enemies are in.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.players.is_wiped() {
            Some(BattleOutcome::Defeat)
        } else if self.enemies.is_wiped() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Draw the next roll seed.
    fn next_seed(&mut self, actor: u32, ctx: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor, ctx);
        self.nonce += 1;
        seed
    }

    /// Resolve one player actor's command.
    ///
    /// On success the acting member's turn is consumed and the cursor
    /// advances; completing the round triggers the automatic enemy sweep.
    /// Failures (unknown spell, not enough MP, item through the wrong
    /// channel) leave the battle untouched.
    pub fn player_action(
        &mut self,
        rng: &dyn RngOracle,
        command: &BattleCommand,
    ) -> Result<ActionReport, BattleError> {
        if self.is_over() {
            return Err(BattleError::NoActionableActors);
        }
        let actor_index = self.normalize_cursor().ok_or(BattleError::NoActionableActors)?;
        let log_start = self.log.len();

        match command {
            BattleCommand::UseItem => return Err(BattleError::WrongChannel),
            BattleCommand::Attack { target } => {
                let (name, amount) = {
                    let actor = self
                        .players
                        .get(actor_index)
                        .ok_or(BattleError::NoActionableActors)?;
                    (actor.name.clone(), actor.attack_power())
                };
                self.deliver_damage(rng, actor_index, *target, amount, &name, None)?;
            }
            BattleCommand::Spell { name, target } => {
                let caster = self
                    .players
                    .get_mut(actor_index)
                    .ok_or(BattleError::NoActionableActors)?;
                let outcome = caster.cast_spell(name)?;
                let caster_name = caster.name.clone();
                match outcome {
                    SpellOutcome::Damage { amount } => {
                        self.deliver_damage(
                            rng,
                            actor_index,
                            *target,
                            amount,
                            &caster_name,
                            Some(name),
                        )?;
                    }
                    SpellOutcome::Healed { amount } => {
                        self.log.push(format!(
                            "{caster_name} casts {name} and restores {amount} HP!"
                        ));
                    }
                }
            }
            BattleCommand::Guard => {
                let actor = self
                    .players
                    .get_mut(actor_index)
                    .ok_or(BattleError::NoActionableActors)?;
                actor.guard();
                let name = actor.name.clone();
                self.log.push(format!("{name} braces for the next hit."));
            }
        }

        // the enemy sweep only runs while the battle is still undecided
        if self.outcome().is_none() {
            self.advance_cursor(rng);
        }

        Ok(ActionReport {
            messages: self.log.lines()[log_start..].to_vec(),
            outcome: self.outcome(),
        })
    }

    /// Resolve the whole battle automatically: basic attacks at random
    /// targets, full player sweep then full enemy sweep per round, stopping
    /// mid-sweep the moment a side is wiped.
    pub fn run_auto(&mut self, rng: &dyn RngOracle) -> BattleSummary {
        loop {
            if let Some(outcome) = self.outcome() {
                return BattleSummary {
                    outcome,
                    turns: self.turn,
                };
            }
            self.player_sweep(rng);
            if let Some(outcome) = self.outcome() {
                return BattleSummary {
                    outcome,
                    turns: self.turn,
                };
            }
            self.enemy_sweep(rng);
            if let Some(outcome) = self.outcome() {
                return BattleSummary {
                    outcome,
                    turns: self.turn,
                };
            }
            self.turn += 1;
        }
    }

    /// Deal damage from a player member to an enemy, resolving the target.
    ///
    /// A requested index pointing at a dead or out-of-range enemy silently
    /// falls back to a seeded-random alive enemy.
    fn deliver_damage(
        &mut self,
        rng: &dyn RngOracle,
        actor_index: usize,
        requested: Option<usize>,
        amount: u32,
        attacker_name: &str,
        spell_name: Option<&str>,
    ) -> Result<(), BattleError> {
        let seed = self.next_seed(actor_index as u32, context::TARGET);
        let target_index = pick_alive_target(&self.enemies, requested, rng, seed)
            .ok_or(BattleError::NoActionableActors)?;
        let Some(target) = self.enemies.get_mut(target_index) else {
            return Err(BattleError::NoActionableActors);
        };

        let dealt = target.take_damage(amount);
        let target_name = target.name.clone();
        let downed = !target.is_alive();

        match spell_name {
            Some(spell) => self.log.push(format!(
                "{attacker_name} casts {spell}! {target_name} takes {dealt} damage!"
            )),
            None => self.log.push(format!(
                "{attacker_name} attacks {target_name} for {dealt} damage!"
            )),
        }
        if downed {
            self.log.push(format!("{target_name} is defeated!"));
        }
        Ok(())
    }

    /// Point the cursor at an alive player member, preferring the current
    /// position, then the next alive one, then wrapping.
    fn normalize_cursor(&mut self) -> Option<usize> {
        if self
            .players
            .get(self.cursor)
            .is_some_and(|a| a.is_alive())
        {
            return Some(self.cursor);
        }
        let next = self
            .players
            .alive_indices()
            .find(|&i| i > self.cursor)
            .or_else(|| self.players.alive_indices().next())?;
        self.cursor = next;
        Some(next)
    }

    /// Move to the next alive player member; when the round is complete,
    /// run the enemy sweep and start the next round.
    fn advance_cursor(&mut self, rng: &dyn RngOracle) {
        if let Some(next) = self.players.alive_indices().find(|&i| i > self.cursor) {
            self.cursor = next;
            return;
        }
        self.enemy_sweep(rng);
        self.turn += 1;
        self.cursor = self.players.alive_indices().next().unwrap_or(0);
    }

    /// Every alive player member basic-attacks a random alive enemy.
    fn player_sweep(&mut self, rng: &dyn RngOracle) {
        for index in 0..self.players.len() {
            if self.enemies.is_wiped() {
                break;
            }
            let Some(member) = self.players.get(index) else {
                continue;
            };
            if !member.is_alive() {
                continue;
            }
            let name = member.name.clone();
            let amount = member.attack_power();
            let seed = self.next_seed(index as u32, context::TARGET);
            let Some(target_index) = pick_alive_target(&self.enemies, None, rng, seed) else {
                break;
            };
            basic_strike(&mut self.log, &name, amount, &mut self.enemies, target_index);
        }
    }

    /// Every alive enemy basic-attacks a random alive player member.
    fn enemy_sweep(&mut self, rng: &dyn RngOracle) {
        for index in 0..self.enemies.len() {
            if self.players.is_wiped() {
                break;
            }
            let Some(enemy) = self.enemies.get(index) else {
                continue;
            };
            if !enemy.is_alive() {
                continue;
            }
            let name = enemy.name.clone();
            let amount = enemy.attack_power();
            let seed = self.next_seed(index as u32, context::TARGET);
            let Some(target_index) = pick_alive_target(&self.players, None, rng, seed) else {
                break;
            };
            basic_strike(&mut self.log, &name, amount, &mut self.players, target_index);
        }
    }
}

/// Validate a requested target index or fall back to a seeded-random alive
/// member of the defending party.
fn pick_alive_target(
    party: &Party,
    requested: Option<usize>,
    rng: &dyn RngOracle,
    seed: u64,
) -> Option<usize> {
    if let Some(index) = requested
        && party.get(index).is_some_and(|a| a.is_alive())
    {
        return Some(index);
    }
    let alive: Vec<usize> = party.alive_indices().collect();
    if alive.is_empty() {
        None
    } else {
        Some(alive[rng.pick(seed, alive.len())])
    }
}

/// Apply one basic attack and log it.
fn basic_strike(
    log: &mut BattleLog,
    attacker_name: &str,
    amount: u32,
    defenders: &mut Party,
    target_index: usize,
) {
    if let Some(target) = defenders.get_mut(target_index) {
        let dealt = target.take_damage(amount);
        let target_name = target.name.clone();
        let downed = !target.is_alive();
        log.push(format!(
            "{attacker_name} attacks {target_name} for {dealt} damage!"
        ));
        if downed {
            log.push(format!("{target_name} is defeated!"));
        }
    }
}
