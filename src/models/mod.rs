use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod preferences;

pub use preferences::{PlayedGame, PreferenceSignal};

/// Identifier for a game, which can be either a Steam appid or an
/// aggregator-specific catalog slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    /// Steam appid (e.g., 1245620)
    Steam(u32),
    /// Catalog slug from the deals aggregator (e.g., "elden-ring")
    Catalog(String),
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameId::Steam(id) => write!(f, "{}", id),
            GameId::Catalog(id) => write!(f, "{}", id),
        }
    }
}

/// A game record as assembled by the catalog collaborators
///
/// Read-only input to the engine: tags, trend, and scores are aggregated
/// upstream (deals site, storefront, streaming platforms) and never mutated
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub id: GameId,
    /// Primary display title
    pub title: String,
    /// Localized alias, when the aggregator carries one (e.g., a Korean title)
    pub localized_title: Option<String>,
    /// Deduplicated genre/feature tags from the shared tag vocabulary
    pub tags: Vec<String>,
    /// Live-viewership plus concurrent-player proxy; non-negative, unbounded
    pub trend_signal: f64,
    /// Critic score in 0..=100, 0 meaning unscored
    pub critic_score: u8,
    pub price: PriceSnapshot,
    /// Steam appid when known, used to de-duplicate against owned games
    pub steam_appid: Option<u32>,
}

impl GameRecord {
    /// True when the record matches any of the caller-supplied exclusions,
    /// either by its own id or by its Steam appid
    pub fn matches_any(&self, excluded: &[GameId]) -> bool {
        excluded.iter().any(|ex| {
            if ex == &self.id {
                return true;
            }
            match (ex, self.steam_appid) {
                (GameId::Steam(appid), Some(own)) => *appid == own,
                _ => false,
            }
        })
    }
}

/// Point-in-time pricing captured by the deals aggregator
///
/// Used only by the result formatter; scoring never reads prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSnapshot {
    pub current_price: f64,
    pub regular_price: f64,
    pub discount_percent: u8,
    pub is_free: bool,
    pub fetched_at: DateTime<Utc>,
}

impl PriceSnapshot {
    /// A free-to-play snapshot with no discount
    pub fn free(fetched_at: DateTime<Utc>) -> Self {
        Self {
            current_price: 0.0,
            regular_price: 0.0,
            discount_percent: 0,
            is_free: true,
            fetched_at,
        }
    }
}

/// A scored candidate produced by the composite ranker
///
/// The individual components are exposed alongside the blended score so the
/// presentation layer can explain why a game was recommended and tests can
/// assert on sub-scores independently.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedGame {
    pub game: GameRecord,
    pub final_score: f64,
    pub tag_component: f64,
    pub trend_component: f64,
    pub critic_component: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: GameId, steam_appid: Option<u32>) -> GameRecord {
        GameRecord {
            id,
            title: "Elden Ring".to_string(),
            localized_title: None,
            tags: vec!["RPG".to_string()],
            trend_signal: 1000.0,
            critic_score: 95,
            price: PriceSnapshot::free(Utc::now()),
            steam_appid,
        }
    }

    #[test]
    fn test_game_id_display_steam() {
        let id = GameId::Steam(1245620);
        assert_eq!(format!("{}", id), "1245620");
    }

    #[test]
    fn test_game_id_display_catalog() {
        let id = GameId::Catalog("elden-ring".to_string());
        assert_eq!(format!("{}", id), "elden-ring");
    }

    #[test]
    fn test_game_id_serde_roundtrip() {
        let id = GameId::Steam(1245620);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"Steam":1245620}"#);

        let deserialized: GameId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_matches_any_by_id() {
        let rec = record(GameId::Catalog("elden-ring".to_string()), None);
        let excluded = vec![GameId::Catalog("elden-ring".to_string())];
        assert!(rec.matches_any(&excluded));
    }

    #[test]
    fn test_matches_any_by_steam_appid() {
        let rec = record(GameId::Catalog("elden-ring".to_string()), Some(1245620));
        let excluded = vec![GameId::Steam(1245620)];
        assert!(rec.matches_any(&excluded));
    }

    #[test]
    fn test_matches_any_no_match() {
        let rec = record(GameId::Catalog("elden-ring".to_string()), Some(1245620));
        let excluded = vec![GameId::Steam(570), GameId::Catalog("hades".to_string())];
        assert!(!rec.matches_any(&excluded));
    }
}
