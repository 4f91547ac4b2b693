//! Economy condition machine.
//!
//! Five ordered conditions drive the exchange value of tickets, the
//! secondary currency. Each shift moves at most one severity step: the next
//! condition is drawn uniformly from a fixed three-element set biased toward
//! the current condition, so the economy drifts rather than jumps.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::rng::RngOracle;

/// Market condition, ordered from strongest to weakest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum EconomyCondition {
    Boom,
    Recovery,
    Stable,
    Recession,
    Depression,
}

impl EconomyCondition {
    /// Ticket value as a percentage of the base value.
    pub const fn value_pct(&self) -> u32 {
        match self {
            Self::Boom => 150,
            Self::Recovery => 120,
            Self::Stable => 100,
            Self::Recession => 80,
            Self::Depression => 50,
        }
    }

    /// The conditions reachable in one shift, current condition included.
    pub const fn transitions(&self) -> [EconomyCondition; 3] {
        match self {
            Self::Boom => [Self::Boom, Self::Recovery, Self::Stable],
            Self::Recovery => [Self::Boom, Self::Recovery, Self::Stable],
            Self::Stable => [Self::Recovery, Self::Stable, Self::Recession],
            Self::Recession => [Self::Stable, Self::Recession, Self::Depression],
            Self::Depression => [Self::Stable, Self::Recession, Self::Depression],
        }
    }

    /// One-line flavor text for status screens.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Boom => "The market is booming. Tickets trade far above par.",
            Self::Recovery => "The market is recovering. Ticket prices are climbing.",
            Self::Stable => "The market is calm. Tickets trade at par.",
            Self::Recession => "The market is contracting. Ticket prices are slipping.",
            Self::Depression => "The market has collapsed. Tickets are nearly worthless.",
        }
    }
}

/// Economy state: current condition plus a bounded history of past ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyState {
    pub condition: EconomyCondition,
    pub base_value: u32,
    /// Most recent conditions, oldest first, capped at 10.
    pub history: ArrayVec<EconomyCondition, { GameConfig::CONDITION_HISTORY }>,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            condition: EconomyCondition::Stable,
            base_value: GameConfig::TICKET_BASE_VALUE,
            history: ArrayVec::new(),
        }
    }
}

impl EconomyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform one transition step and record the outgoing condition.
    ///
    /// Returns the new condition.
    pub fn shift(&mut self, rng: &dyn RngOracle, seed: u64) -> EconomyCondition {
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(self.condition);

        let choices = self.condition.transitions();
        self.condition = choices[rng.pick(seed, choices.len())];
        self.condition
    }

    /// Current gold value of one ticket, floored.
    pub fn ticket_value(&self) -> u32 {
        self.base_value * self.condition.value_pct() / 100
    }

    /// Gold value of a ticket holding. Saturates rather than overflowing,
    /// since `count` can come straight from a persisted session blob.
    pub fn total_value(&self, count: u32) -> u32 {
        self.ticket_value().saturating_mul(count)
    }
}
