use crate::config::ScoringWeights;
use crate::models::{GameRecord, RankedGame};
use crate::services::similarity::non_standard_cosine;
use crate::services::vectorize::{vectorize_game, TagVector};

/// Normalizes the unbounded trend signal into roughly [0, 1]
///
/// `log10(trend + 1) / divisor` compresses the heavy-tailed viewer counts;
/// the divisor is deployment-calibrated (see [`ScoringWeights`]).
pub fn trend_component(trend_signal: f64, weights: &ScoringWeights) -> f64 {
    (trend_signal + 1.0).log10() / weights.trend_log_divisor
}

/// Critic score mapped to [0, 1]; unscored games (0) stay at the bottom
pub fn critic_component(critic_score: u8) -> f64 {
    critic_score as f64 / 100.0
}

/// Scores every candidate against the user vector and returns the top K
///
/// The blend is `tag_weight * similarity + trend_weight * trend +
/// critic_weight * critic`. The sort is stable and descending: candidates
/// with exactly equal scores keep the loader's relative order, since there is
/// no secondary key. An empty candidate set yields an empty list; K larger
/// than the candidate count yields everything.
pub fn rank_candidates(
    candidates: Vec<GameRecord>,
    user_vector: &TagVector,
    weights: &ScoringWeights,
    top_k: usize,
) -> Vec<RankedGame> {
    let mut ranked: Vec<RankedGame> = candidates
        .into_iter()
        .map(|game| score_candidate(game, user_vector, weights))
        .collect();

    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    ranked.truncate(top_k);
    ranked
}

/// Scores a single candidate, exposing every component
pub fn score_candidate(
    game: GameRecord,
    user_vector: &TagVector,
    weights: &ScoringWeights,
) -> RankedGame {
    let game_vector = vectorize_game(&game.tags);
    let tag_component = non_standard_cosine(user_vector, &game_vector);
    let trend_component = trend_component(game.trend_signal, weights);
    let critic_component = critic_component(game.critic_score);

    let final_score = weights.tag_weight * tag_component
        + weights.trend_weight * trend_component
        + weights.critic_weight * critic_component;

    RankedGame {
        game,
        final_score,
        tag_component,
        trend_component,
        critic_component,
    }
}
