//! Battle commands, reports, and errors.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellError;

/// One player actor's command for the interactive battle protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleCommand {
    /// Basic attack. An invalid or absent target falls back to a random
    /// alive enemy.
    Attack { target: Option<usize> },
    /// Cast a spell. Damage spells target like `Attack`; heal spells apply
    /// to the caster.
    Spell { name: String, target: Option<usize> },
    /// Raise the one-shot guard status.
    Guard,
    /// Item use is not part of the battle protocol; always rejected.
    UseItem,
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// What one interactive action (plus any automatic enemy sweep it
/// triggered) did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionReport {
    /// Log lines produced by this call, in order.
    pub messages: Vec<String>,
    /// Set when this action ended the battle.
    pub outcome: Option<BattleOutcome>,
}

/// Summary of a fully automatic battle resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleSummary {
    pub outcome: BattleOutcome,
    /// Rounds fought, counting the one the battle ended in.
    pub turns: u32,
}

/// Errors from the interactive battle protocol. Every failure leaves the
/// battle state untouched and the acting member's turn unconsumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("no actors able to act")]
    NoActionableActors,

    #[error("item use goes through the inventory service, not a battle action")]
    WrongChannel,

    #[error(transparent)]
    Spell(#[from] SpellError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActionableActors => ErrorSeverity::Validation,
            Self::WrongChannel => ErrorSeverity::Validation,
            Self::Spell(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActionableActors => "NO_ACTIONABLE_ACTORS",
            Self::WrongChannel => "WRONG_CHANNEL",
            Self::Spell(err) => err.error_code(),
        }
    }
}
