//! The high-level game service.
//!
//! [`GameService`] exposes every operation the surrounding web or CLI layer
//! needs. Each call is a complete transaction against an explicitly passed
//! [`SessionState`]: live engine state is rebuilt from the session at the
//! start, mutated, and recorded back before returning. A call that fails
//! leaves the session exactly as it was.

use serde::{Deserialize, Serialize};

use game_content::ContentRegistry;
use game_core::{
    ActorKind, ActorRecord, Battle, BattleCommand, BattleOutcome, BattleRecord, CatalogOracle,
    Currency, EconomyState, GameConfig, MonsterOracle, PcgRng, Player, RngOracle, StateError,
    compute_seed, generate_enemy_party,
};

use crate::error::ServiceError;
use crate::session::{PlayerRecord, SessionState};

/// Session-level seed-mixing contexts.
mod context {
    pub const ECONOMY_GATE: u32 = 10;
    pub const ECONOMY_SHIFT: u32 = 11;
    pub const ENCOUNTER: u32 = 12;
    pub const BATTLE_SEED: u32 = 13;
}

/// Which equipment slot a shop or equip operation concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Armor,
}

/// Result of starting an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterReport {
    pub economy_changed: bool,
    pub enemies: Vec<ActorRecord>,
}

/// Result of one interactive battle action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleTurn {
    pub messages: Vec<String>,
    pub outcome: Option<BattleOutcome>,
    /// Present on the action that ended the battle.
    pub conclusion: Option<BattleConclusion>,
}

/// Final accounting for a finished battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleConclusion {
    pub outcome: BattleOutcome,
    pub gold_gained: u32,
    pub tickets_gained: u32,
    /// Experience granted to each surviving party member.
    pub experience_each: u32,
    /// Names of every monster that rolled a successful recruitment.
    pub recruited: Vec<String>,
    /// Names of party members that gained at least one level.
    pub leveled_up: Vec<String>,
    /// Gold lost to the defeat penalty.
    pub gold_lost: u32,
}

/// Read-only battle snapshot for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleView {
    pub turn: u32,
    pub is_player_turn: bool,
    pub cursor: usize,
    pub players: Vec<ActorRecord>,
    pub enemies: Vec<ActorRecord>,
    pub recent_log: Vec<String>,
    pub is_over: bool,
}

/// One purchasable weapon or armor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EquipmentListing {
    pub name: String,
    pub bonus: u32,
    pub price_gold: u32,
    pub price_tickets: u32,
    pub description: String,
}

/// One purchasable consumable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsumableListing {
    pub name: String,
    pub hp_restore: u32,
    pub mp_restore: u32,
    pub price_gold: u32,
    pub price_tickets: u32,
    pub description: String,
}

/// Everything the shop sells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShopCatalog {
    pub weapons: Vec<EquipmentListing>,
    pub armors: Vec<EquipmentListing>,
    pub consumables: Vec<ConsumableListing>,
}

/// Economy status for the report screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EconomyReport {
    pub condition: String,
    pub description: String,
    pub ticket_value: u32,
    pub tickets_held: u32,
    pub holdings_value: u32,
    /// Recent past conditions, oldest first.
    pub history: Vec<String>,
}

/// Stateless game service over the shipped content.
pub struct GameService {
    registry: ContentRegistry,
    rng: PcgRng,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService {
    pub fn new() -> Self {
        Self {
            registry: ContentRegistry::new(),
            rng: PcgRng,
        }
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// Draw the next session-level roll seed.
    fn next_seed(session: &mut SessionState, ctx: u32) -> u64 {
        let seed = compute_seed(session.seed, session.nonce, 0, ctx);
        session.nonce += 1;
        seed
    }

    fn rehydrate_player(&self, session: &SessionState) -> Result<Player, ServiceError> {
        Ok(session.player.rehydrate(&self.registry, &self.registry)?)
    }

    /// Start a new game: level-1 hero, starting wallet, stable economy.
    ///
    /// When `seed` is `None` a random one is drawn; everything after that
    /// is deterministic given the session.
    pub fn start_game(&self, hero_name: &str, seed: Option<u64>) -> SessionState {
        let seed = seed.unwrap_or_else(rand::random);
        let player = Player::new(hero_name);
        tracing::info!(target: "runtime::session", hero = hero_name, seed, "new game started");
        SessionState {
            seed,
            nonce: 0,
            player: PlayerRecord::from_player(&player),
            economy: EconomyState::new(),
            area: 1,
            story_progress: 0,
            battle: None,
        }
    }

    /// Begin a new encounter: maybe shift the economy, fully restore the
    /// party, generate an enemy party around its average level, and install
    /// the battle.
    pub fn start_encounter(
        &self,
        session: &mut SessionState,
    ) -> Result<EncounterReport, ServiceError> {
        if session.battle.is_some() {
            return Err(ServiceError::BattleInProgress);
        }
        let mut player = self.rehydrate_player(session)?;

        let gate_seed = Self::next_seed(session, context::ECONOMY_GATE);
        let mut economy_changed = false;
        if self.rng.chance(gate_seed, GameConfig::ECONOMY_SHIFT_CHANCE) {
            let shift_seed = Self::next_seed(session, context::ECONOMY_SHIFT);
            let before = session.economy.condition;
            let next = session.economy.shift(&self.rng, shift_seed);
            // a shift step can re-draw the current condition; only report a
            // change when the condition actually moved
            economy_changed = next != before;
            if economy_changed {
                tracing::info!(target: "runtime::economy", condition = %next, "economy shifted");
            }
        }

        player.party.heal_all(u32::MAX);
        player.party.restore_all_mp(u32::MAX);

        let avg_level = player.party.average_level();
        let encounter_seed = Self::next_seed(session, context::ENCOUNTER);
        let enemies = generate_enemy_party(&self.registry, &self.rng, encounter_seed, avg_level);

        let battle_seed = Self::next_seed(session, context::BATTLE_SEED);
        let battle = Battle::new(player.party.clone(), enemies, battle_seed);
        tracing::info!(
            target: "runtime::battle",
            enemies = battle.enemies.len(),
            avg_level,
            "encounter started"
        );

        let report = EncounterReport {
            economy_changed,
            enemies: battle.enemies.members().iter().map(ActorRecord::from_actor).collect(),
        };
        session.record_player(&player);
        session.battle = Some(BattleRecord::from_battle(&battle));
        Ok(report)
    }

    /// Resolve one player battle action. When the action ends the battle,
    /// the payout (or defeat penalty) is applied and the battle cleared.
    pub fn battle_action(
        &self,
        session: &mut SessionState,
        command: &BattleCommand,
    ) -> Result<BattleTurn, ServiceError> {
        let record = session.battle.as_ref().ok_or(ServiceError::NoBattle)?;
        let mut battle = record.rehydrate(&self.registry, &self.registry)?;

        let report = battle.player_action(&self.rng, command)?;

        match report.outcome {
            None => {
                session.battle = Some(BattleRecord::from_battle(&battle));
                Ok(BattleTurn {
                    messages: report.messages,
                    outcome: None,
                    conclusion: None,
                })
            }
            Some(outcome) => {
                let mut player = self.rehydrate_player(session)?;
                let conclusion = self.finalize_battle(&mut battle, &mut player, outcome);
                if outcome == BattleOutcome::Victory {
                    session.story_progress += 1;
                }
                session.record_player(&player);
                session.battle = None;
                Ok(BattleTurn {
                    messages: report.messages,
                    outcome: Some(outcome),
                    conclusion: Some(conclusion),
                })
            }
        }
    }

    /// Apply the payout or penalty for a finished battle and sync the
    /// player's party with the battle's final state.
    fn finalize_battle(
        &self,
        battle: &mut Battle,
        player: &mut Player,
        outcome: BattleOutcome,
    ) -> BattleConclusion {
        match outcome {
            BattleOutcome::Victory => {
                let rewards = battle.victory_rewards(&self.rng);
                player.gold = player.gold.saturating_add(rewards.gold);
                player.tickets = player.tickets.saturating_add(rewards.tickets);

                let mut leveled_up = Vec::new();
                for member in battle.players.members_mut() {
                    if member.is_alive() && member.add_experience(rewards.experience) {
                        leveled_up.push(member.name.clone());
                    }
                }
                player.party = battle.players.clone();

                let recruited: Vec<String> =
                    rewards.recruited.iter().map(|r| r.name.clone()).collect();
                // recruits join while the party has room; the rest can still
                // be recruited explicitly with a swap
                for recruit in rewards.recruited {
                    if player.party.add_member(recruit).is_err() {
                        break;
                    }
                }

                tracing::info!(
                    target: "runtime::battle",
                    gold = rewards.gold,
                    tickets = rewards.tickets,
                    experience = rewards.experience,
                    recruited = recruited.len(),
                    "battle won"
                );
                BattleConclusion {
                    outcome,
                    gold_gained: rewards.gold,
                    tickets_gained: rewards.tickets,
                    experience_each: rewards.experience,
                    recruited,
                    leveled_up,
                    gold_lost: 0,
                }
            }
            BattleOutcome::Defeat => {
                player.party = battle.players.clone();
                let gold_lost = player.apply_defeat_penalty();
                tracing::info!(target: "runtime::battle", gold_lost, "battle lost");
                BattleConclusion {
                    outcome,
                    gold_gained: 0,
                    tickets_gained: 0,
                    experience_each: 0,
                    recruited: Vec::new(),
                    leveled_up: Vec::new(),
                    gold_lost,
                }
            }
        }
    }

    /// Read-only snapshot of the in-progress battle.
    pub fn battle_state(&self, session: &SessionState) -> Result<BattleView, ServiceError> {
        let record = session.battle.as_ref().ok_or(ServiceError::NoBattle)?;
        let battle = record.rehydrate(&self.registry, &self.registry)?;
        Ok(BattleView {
            turn: battle.turn,
            is_player_turn: !battle.is_over(),
            cursor: battle.cursor(),
            players: record.players.clone(),
            enemies: record.enemies.clone(),
            recent_log: battle.log.recent().to_vec(),
            is_over: battle.is_over(),
        })
    }

    /// Add a monster to the party by template name, optionally releasing a
    /// current monster first. The recruit spawns fresh at the party's
    /// average level.
    pub fn recruit_monster(
        &self,
        session: &mut SessionState,
        name: &str,
        release: Option<&str>,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        if let Some(release_name) = release {
            release_member(&mut player, release_name)?;
        }
        let template = self
            .registry
            .template(name)
            .ok_or_else(|| StateError::UnknownTemplate {
                name: name.to_string(),
            })?;
        let recruit = template.spawn(player.party.average_level());
        player.party.add_member(recruit)?;
        tracing::info!(target: "runtime::party", monster = name, "monster recruited");
        session.record_player(&player);
        Ok(())
    }

    /// Remove a monster from the party. Humans cannot be released.
    pub fn release_monster(
        &self,
        session: &mut SessionState,
        name: &str,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        release_member(&mut player, name)?;
        tracing::info!(target: "runtime::party", monster = name, "monster released");
        session.record_player(&player);
        Ok(())
    }

    /// Everything currently purchasable.
    pub fn shop_catalog(&self) -> ShopCatalog {
        ShopCatalog {
            weapons: self
                .registry
                .weapons()
                .iter()
                .map(|w| EquipmentListing {
                    name: w.name.to_string(),
                    bonus: w.attack_bonus,
                    price_gold: w.price_gold,
                    price_tickets: w.price_tickets,
                    description: w.description.to_string(),
                })
                .collect(),
            armors: self
                .registry
                .armors()
                .iter()
                .map(|a| EquipmentListing {
                    name: a.name.to_string(),
                    bonus: a.defense_bonus,
                    price_gold: a.price_gold,
                    price_tickets: a.price_tickets,
                    description: a.description.to_string(),
                })
                .collect(),
            consumables: self
                .registry
                .consumables()
                .iter()
                .map(|c| ConsumableListing {
                    name: c.name.to_string(),
                    hp_restore: c.hp_restore,
                    mp_restore: c.mp_restore,
                    price_gold: c.price_gold,
                    price_tickets: c.price_tickets,
                    description: c.description.to_string(),
                })
                .collect(),
        }
    }

    /// Buy a weapon or armor with the chosen currency.
    pub fn buy_item(
        &self,
        session: &mut SessionState,
        kind: EquipmentKind,
        name: &str,
        currency: Currency,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        match kind {
            EquipmentKind::Weapon => player.buy_weapon(&self.registry, name, currency)?,
            EquipmentKind::Armor => player.buy_armor(&self.registry, name, currency)?,
        }
        tracing::debug!(target: "runtime::shop", item = name, %currency, "item bought");
        session.record_player(&player);
        Ok(())
    }

    /// Buy consumables at unit price times quantity.
    pub fn buy_consumable(
        &self,
        session: &mut SessionState,
        name: &str,
        currency: Currency,
        quantity: u32,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        player.buy_consumable(&self.registry, name, currency, quantity)?;
        tracing::debug!(target: "runtime::shop", item = name, quantity, "consumable bought");
        session.record_player(&player);
        Ok(())
    }

    /// Equip an owned weapon or armor on a party member.
    pub fn equip_item(
        &self,
        session: &mut SessionState,
        kind: EquipmentKind,
        member_index: usize,
        name: &str,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        match kind {
            EquipmentKind::Weapon => player.equip_weapon(member_index, name)?,
            EquipmentKind::Armor => player.equip_armor(member_index, name)?,
        }
        tracing::debug!(target: "runtime::shop", item = name, member_index, "item equipped");
        session.record_player(&player);
        Ok(())
    }

    /// Use an owned consumable on a party member. Only outside battle
    /// actions; the battle protocol rejects item commands.
    pub fn use_consumable(
        &self,
        session: &mut SessionState,
        member_index: usize,
        name: &str,
    ) -> Result<(), ServiceError> {
        let mut player = self.rehydrate_player(session)?;
        player.use_consumable(&self.registry, member_index, name)?;
        tracing::debug!(target: "runtime::shop", item = name, member_index, "consumable used");
        session.record_player(&player);
        Ok(())
    }

    /// Economy status: condition, ticket value, and holdings.
    pub fn economy_report(&self, session: &SessionState) -> EconomyReport {
        EconomyReport {
            condition: session.economy.condition.to_string(),
            description: session.economy.condition.description().to_string(),
            ticket_value: session.economy.ticket_value(),
            tickets_held: session.player.tickets,
            holdings_value: session.economy.total_value(session.player.tickets),
            history: session.economy.history.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Remove a party member by name; only monsters can be released.
fn release_member(player: &mut Player, name: &str) -> Result<(), ServiceError> {
    let member = player
        .party
        .members()
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| ServiceError::MemberNotFound {
            name: name.to_string(),
        })?;
    if matches!(member.kind, ActorKind::Human) {
        return Err(ServiceError::CannotReleaseHuman {
            name: name.to_string(),
        });
    }
    player.party.remove_by_name(name);
    Ok(())
}
