//! Runtime service errors.
//!
//! Wraps the engine's domain errors and adds the session-level failures the
//! service layer can produce on its own.

use game_core::{
    BattleError, ErrorSeverity, GameError, PartyError, ShopError, SpellError, StateError,
};

/// Any failure a [`crate::GameService`] operation can report.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no battle in progress")]
    NoBattle,

    #[error("a battle is already in progress")]
    BattleInProgress,

    #[error("no party member named {name}")]
    MemberNotFound { name: String },

    #[error("{name} is not a monster and cannot be released")]
    CannotReleaseHuman { name: String },

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Spell(#[from] SpellError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("session serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError for ServiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoBattle
            | Self::BattleInProgress
            | Self::MemberNotFound { .. }
            | Self::CannotReleaseHuman { .. } => ErrorSeverity::Validation,
            Self::Battle(err) => err.severity(),
            Self::Spell(err) => err.severity(),
            Self::Shop(err) => err.severity(),
            Self::Party(err) => err.severity(),
            Self::State(err) => err.severity(),
            Self::Json(_) => ErrorSeverity::Integrity,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoBattle => "NO_BATTLE",
            Self::BattleInProgress => "BATTLE_IN_PROGRESS",
            Self::MemberNotFound { .. } => "MEMBER_NOT_FOUND",
            Self::CannotReleaseHuman { .. } => "CANNOT_RELEASE_HUMAN",
            Self::Battle(err) => err.error_code(),
            Self::Spell(err) => err.error_code(),
            Self::Shop(err) => err.error_code(),
            Self::Party(err) => err.error_code(),
            Self::State(err) => err.error_code(),
            Self::Json(_) => "SESSION_JSON",
        }
    }
}
