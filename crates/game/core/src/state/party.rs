//! Ordered party of up to four actors.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::actor::Actor;

/// Errors from party membership changes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("party is full ({max} members)")]
    PartyFull { max: usize },
}

impl GameError for PartyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "PARTY_FULL"
    }
}

/// An ordered group of up to four actors fighting together.
///
/// Order matters: turn cycling, target indices, and serialization all follow
/// member order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Party {
    members: ArrayVec<Actor, { GameConfig::MAX_PARTY_MEMBERS }>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member at the back. Fails without mutation when full.
    pub fn add_member(&mut self, actor: Actor) -> Result<(), PartyError> {
        if self.members.is_full() {
            return Err(PartyError::PartyFull {
                max: GameConfig::MAX_PARTY_MEMBERS,
            });
        }
        self.members.push(actor);
        Ok(())
    }

    /// Remove the member at `index`, returning it. `None` if out of range.
    pub fn remove_member(&mut self, index: usize) -> Option<Actor> {
        if index < self.members.len() {
            Some(self.members.remove(index))
        } else {
            None
        }
    }

    /// Remove the first member with the given name. No-op if absent.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Actor> {
        let index = self.members.iter().position(|m| m.name == name)?;
        Some(self.members.remove(index))
    }

    pub fn members(&self) -> &[Actor] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Actor] {
        &mut self.members
    }

    pub fn get(&self, index: usize) -> Option<&Actor> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Actor> {
        self.members.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.is_full()
    }

    /// Indices of the members that are still alive, in member order.
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_alive())
            .map(|(i, _)| i)
    }

    /// The members that are still alive, in member order.
    pub fn alive_members(&self) -> impl Iterator<Item = &Actor> {
        self.members.iter().filter(|m| m.is_alive())
    }

    /// True when no member is alive. An empty party counts as wiped.
    pub fn is_wiped(&self) -> bool {
        self.alive_members().next().is_none()
    }

    /// Heal every member, alive or not.
    pub fn heal_all(&mut self, amount: u32) {
        for member in &mut self.members {
            member.heal(amount);
        }
    }

    /// Restore MP for every member, alive or not.
    pub fn restore_all_mp(&mut self, amount: u32) {
        for member in &mut self.members {
            member.restore_mp(amount);
        }
    }

    /// Average member level, floored. 1 for an empty party.
    pub fn average_level(&self) -> u32 {
        if self.members.is_empty() {
            return 1;
        }
        let total: u32 = self.members.iter().map(|m| m.level).sum();
        (total / self.members.len() as u32).max(1)
    }
}
