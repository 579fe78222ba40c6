use std::time::Instant;

use crate::config::ScoringWeights;
use crate::error::EngineResult;
use crate::models::{GameId, PlayedGame, PreferenceSignal, RankedGame};
use crate::services::catalog::{load_candidates, CatalogProvider};
use crate::services::ranking::rank_candidates;
use crate::services::vectorize::vectorize_user;

/// Default result counts per call site; K is always caller-overridable
pub const DEFAULT_TAG_SEARCH_LIMIT: usize = 12;
pub const DEFAULT_PERSONALIZED_LIMIT: usize = 20;
pub const DEFAULT_BROWSE_PAGE_SIZE: usize = 15;

/// Tag-based search: optional text query plus explicitly liked tags
///
/// Games that match the query but not the tags still appear, ranked by their
/// trend and critic components alone.
pub async fn search_by_tags(
    provider: &dyn CatalogProvider,
    query: Option<&str>,
    liked_tags: Vec<String>,
    top_k: usize,
    weights: &ScoringWeights,
) -> EngineResult<Vec<RankedGame>> {
    let signal = PreferenceSignal::from_liked_tags(liked_tags);
    score_request(provider, query, signal, &[], top_k, weights, "tag_search").await
}

/// Personalized recommendations from a played-game history
///
/// Owned games are excluded from the candidate set so the user is never
/// recommended something already in their library.
pub async fn recommend_for_library(
    provider: &dyn CatalogProvider,
    play_history: Vec<PlayedGame>,
    owned: &[GameId],
    top_k: usize,
    weights: &ScoringWeights,
) -> EngineResult<Vec<RankedGame>> {
    let signal = PreferenceSignal::from_history(play_history);
    score_request(provider, None, signal, owned, top_k, weights, "personalized").await
}

/// General catalog browse: no preference signal
///
/// With an empty user vector the tag component is zero everywhere and the
/// ordering falls out of the trend and critic components.
pub async fn browse_catalog(
    provider: &dyn CatalogProvider,
    query: Option<&str>,
    top_k: usize,
    weights: &ScoringWeights,
) -> EngineResult<Vec<RankedGame>> {
    score_request(
        provider,
        query,
        PreferenceSignal::default(),
        &[],
        top_k,
        weights,
        "browse",
    )
    .await
}

/// Shared scoring pipeline behind all call sites
///
/// validate → load candidates → vectorize user → rank → top-K. Combined
/// signals (likes plus history) are accepted here too, for callers that
/// assemble a [`PreferenceSignal`] themselves.
pub async fn score_request(
    provider: &dyn CatalogProvider,
    query: Option<&str>,
    signal: PreferenceSignal,
    excluded: &[GameId],
    top_k: usize,
    weights: &ScoringWeights,
    call_site: &'static str,
) -> EngineResult<Vec<RankedGame>> {
    let start = Instant::now();
    signal.validate()?;

    let candidates = load_candidates(provider, query, excluded).await?;
    tracing::debug!(
        call_site,
        candidates = candidates.len(),
        excluded = excluded.len(),
        "Candidates loaded"
    );

    let user_vector = vectorize_user(&signal, weights);
    let ranked = rank_candidates(candidates, &user_vector, weights, top_k);

    tracing::info!(
        call_site,
        results = ranked.len(),
        top_score = ranked.first().map(|r| r.final_score),
        processing_time_ms = start.elapsed().as_millis() as u64,
        "Scoring completed"
    );

    Ok(ranked)
}
