//! Battle message log.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Append-only battle log.
///
/// The full history is kept for automatic-mode summaries; external snapshots
/// read only the recent tail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Every line, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The 10 most recent lines, oldest first.
    pub fn recent(&self) -> &[String] {
        let start = self.lines.len().saturating_sub(GameConfig::BATTLE_LOG_RECENT);
        &self.lines[start..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
