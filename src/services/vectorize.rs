use std::collections::{HashMap, HashSet};

use crate::config::ScoringWeights;
use crate::models::PreferenceSignal;

/// Sparse tag vector over the shared tag vocabulary
///
/// Maps validated tag strings to non-negative weights. Vectors are only
/// constructed through [`vectorize_game`] and [`vectorize_user`] so raw,
/// unvalidated tag arrays from upstream scraping never reach the similarity
/// computation directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagVector {
    weights: HashMap<String, f64>,
}

impl TagVector {
    fn add(&mut self, tag: &str, weight: f64) {
        *self.weights.entry(tag.to_string()).or_insert(0.0) += weight;
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, tag: &str) -> f64 {
        self.weights.get(tag).copied().unwrap_or(0.0)
    }

    /// Dot product over the union of tags present in either vector
    pub fn dot(&self, other: &TagVector) -> f64 {
        // Iterating the smaller map keeps this O(min(|a|,|b|))
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .map(|(tag, w)| w * large.weight(tag))
            .sum()
    }

    /// Sum of squared weights
    pub fn magnitude_squared(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }
}

/// Builds a game's feature vector: weight 1.0 per distinct tag
///
/// Duplicate tags from sloppy upstream scraping collapse to a single entry;
/// an empty tag list yields the empty vector.
pub fn vectorize_game(tags: &[String]) -> TagVector {
    let mut vector = TagVector::default();
    for tag in tags {
        vector.weights.entry(tag.clone()).or_insert(1.0);
    }
    vector
}

/// Builds the user preference vector from likes and play history
///
/// Play-history tags accumulate playtime-weighted mass: each played game adds
/// its playtime minutes to every one of its distinct tags, and the
/// accumulated history weights are then divided by total playtime so they
/// become shares in [0, 1]. Explicitly liked tags then add
/// `liked_tag_weight` each, on top of any history-derived weight for the same
/// tag. Games with zero playtime contribute nothing.
pub fn vectorize_user(signal: &PreferenceSignal, weights: &ScoringWeights) -> TagVector {
    let mut vector = TagVector::default();

    let total_minutes: u64 = signal
        .play_history
        .iter()
        .filter(|g| !g.tags.is_empty())
        .map(|g| g.playtime_minutes as u64)
        .sum();

    if total_minutes > 0 {
        let mut accumulated: HashMap<&str, u64> = HashMap::new();
        for game in &signal.play_history {
            if game.playtime_minutes == 0 {
                continue;
            }
            let mut seen = HashSet::new();
            for tag in &game.tags {
                // A duplicated tag within one game must not double its minutes
                if seen.insert(tag.as_str()) {
                    *accumulated.entry(tag.as_str()).or_insert(0) += game.playtime_minutes as u64;
                }
            }
        }
        for (tag, minutes) in accumulated {
            vector.add(tag, minutes as f64 / total_minutes as f64);
        }
    }

    let mut seen_likes = HashSet::new();
    for tag in &signal.liked_tags {
        if seen_likes.insert(tag.as_str()) {
            vector.add(tag, weights.liked_tag_weight);
        }
    }

    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayedGame;

    #[test]
    fn test_vectorize_game_distinct_tags() {
        let vector = vectorize_game(&["RPG".to_string(), "오픈월드".to_string()]);
        assert_eq!(vector.weight("RPG"), 1.0);
        assert_eq!(vector.weight("오픈월드"), 1.0);
        assert_eq!(vector.magnitude_squared(), 2.0);
    }

    #[test]
    fn test_vectorize_game_collapses_duplicates() {
        let vector = vectorize_game(&["RPG".to_string(), "RPG".to_string()]);
        assert_eq!(vector.weight("RPG"), 1.0);
        assert_eq!(vector.magnitude_squared(), 1.0);
    }

    #[test]
    fn test_vectorize_game_empty() {
        let vector = vectorize_game(&[]);
        assert!(vector.is_empty());
        assert_eq!(vector.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_vectorize_user_liked_tags() {
        let weights = ScoringWeights::default();
        let signal = PreferenceSignal::from_liked_tags(vec!["RPG".to_string()]);
        let vector = vectorize_user(&signal, &weights);
        assert_eq!(vector.weight("RPG"), 3.0);
    }

    #[test]
    fn test_vectorize_user_duplicate_likes_count_once() {
        let weights = ScoringWeights::default();
        let signal =
            PreferenceSignal::from_liked_tags(vec!["RPG".to_string(), "RPG".to_string()]);
        let vector = vectorize_user(&signal, &weights);
        assert_eq!(vector.weight("RPG"), 3.0);
    }

    #[test]
    fn test_vectorize_user_history_playtime_shares() {
        let weights = ScoringWeights::default();
        let signal = PreferenceSignal::from_history(vec![
            PlayedGame {
                tags: vec!["RPG".to_string(), "Soulslike".to_string()],
                playtime_minutes: 900,
            },
            PlayedGame {
                tags: vec!["RPG".to_string()],
                playtime_minutes: 100,
            },
        ]);
        let vector = vectorize_user(&signal, &weights);
        // RPG: (900 + 100) / 1000, Soulslike: 900 / 1000
        assert!((vector.weight("RPG") - 1.0).abs() < 1e-12);
        assert!((vector.weight("Soulslike") - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_user_zero_playtime_contributes_nothing() {
        let weights = ScoringWeights::default();
        let signal = PreferenceSignal::from_history(vec![PlayedGame {
            tags: vec!["RPG".to_string()],
            playtime_minutes: 0,
        }]);
        let vector = vectorize_user(&signal, &weights);
        assert!(vector.is_empty());
    }

    #[test]
    fn test_vectorize_user_likes_stack_on_history() {
        let weights = ScoringWeights::default();
        let signal = PreferenceSignal {
            liked_tags: vec!["RPG".to_string()],
            play_history: vec![PlayedGame {
                tags: vec!["RPG".to_string()],
                playtime_minutes: 500,
            }],
        };
        let vector = vectorize_user(&signal, &weights);
        // Full playtime share (1.0) plus the like weight (3.0)
        assert!((vector.weight("RPG") - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_user_empty_signal() {
        let weights = ScoringWeights::default();
        let vector = vectorize_user(&PreferenceSignal::default(), &weights);
        assert!(vector.is_empty());
    }

    #[test]
    fn test_dot_product_over_union() {
        let weights = ScoringWeights::default();
        let user = vectorize_user(
            &PreferenceSignal::from_liked_tags(vec!["RPG".to_string(), "FPS".to_string()]),
            &weights,
        );
        let game = vectorize_game(&["RPG".to_string(), "Roguelike".to_string()]);
        assert_eq!(user.dot(&game), 3.0);
        assert_eq!(game.dot(&user), 3.0);
    }
}
