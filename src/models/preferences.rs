use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A played game from the user's library history
///
/// Only the tag set and playtime survive from the upstream Steam integration;
/// the engine never sees the full owned-game record here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayedGame {
    /// Tags of the played game, already mapped into the shared tag vocabulary
    pub tags: Vec<String>,
    /// Total playtime in minutes; zero contributes nothing to the vector
    pub playtime_minutes: u32,
}

/// Ephemeral user preference signal for one scoring request
///
/// Carries explicitly liked tags (from a UI tag picker), a played-game
/// history (from the Steam profile collaborator), or both. Nothing here is
/// persisted by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceSignal {
    #[serde(default)]
    pub liked_tags: Vec<String>,
    #[serde(default)]
    pub play_history: Vec<PlayedGame>,
}

impl PreferenceSignal {
    /// Signal built from explicitly liked tags only
    pub fn from_liked_tags(liked_tags: Vec<String>) -> Self {
        Self {
            liked_tags,
            play_history: Vec::new(),
        }
    }

    /// Signal built from a played-game history only
    pub fn from_history(play_history: Vec<PlayedGame>) -> Self {
        Self {
            liked_tags: Vec::new(),
            play_history,
        }
    }

    /// True when neither likes nor history carry any usable tags
    pub fn is_empty(&self) -> bool {
        self.liked_tags.is_empty() && self.play_history.iter().all(|g| g.tags.is_empty())
    }

    /// Fails fast on malformed input at the engine boundary
    ///
    /// Tags are matched as exact members of the shared vocabulary, so an
    /// empty or whitespace-only tag can never match anything and indicates a
    /// broken upstream mapping rather than a degenerate-but-valid signal.
    pub fn validate(&self) -> EngineResult<()> {
        if self.liked_tags.iter().any(|t| t.trim().is_empty()) {
            return Err(EngineError::InvalidPreference(
                "liked tags must not be empty or whitespace".to_string(),
            ));
        }
        for game in &self.play_history {
            if game.tags.iter().any(|t| t.trim().is_empty()) {
                return Err(EngineError::InvalidPreference(
                    "played-game tags must not be empty or whitespace".to_string(),
                ));
            }
        }
        Ok(())
    }
}
