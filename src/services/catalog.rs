use async_trait::async_trait;
use regex::RegexBuilder;

use crate::error::EngineResult;
use crate::models::{GameId, GameRecord};

/// Catalog seam toward the storage collaborator
///
/// The engine performs no I/O of its own; whoever owns the aggregated game
/// catalog (database, cache, fixture) implements this trait. Implementations
/// may bound the returned set however they like — the engine scores whatever
/// it is handed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self) -> EngineResult<Vec<GameRecord>>;
}

/// Fetches the catalog and applies query and exclusion filtering
pub async fn load_candidates(
    provider: &dyn CatalogProvider,
    query: Option<&str>,
    excluded: &[GameId],
) -> EngineResult<Vec<GameRecord>> {
    let catalog = provider.fetch_catalog().await?;
    Ok(filter_candidates(catalog, query, excluded))
}

/// Pure candidate filtering
///
/// A non-empty query keeps a record when the trimmed query is a literal,
/// case-insensitive substring of the primary or localized title. Regex
/// metacharacters in the query are escaped so "C++" matches as text. Tags are
/// deliberately not filtered on: tag relevance flows through scoring so
/// partially matching games still appear, ranked lower. Excluded identifiers
/// are removed unconditionally.
pub fn filter_candidates(
    catalog: Vec<GameRecord>,
    query: Option<&str>,
    excluded: &[GameId],
) -> Vec<GameRecord> {
    let matcher = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| {
            RegexBuilder::new(&regex::escape(q))
                .case_insensitive(true)
                .build()
                .expect("escaped query is a valid literal pattern")
        });

    catalog
        .into_iter()
        .filter(|record| !record.matches_any(excluded))
        .filter(|record| match &matcher {
            Some(re) => {
                re.is_match(&record.title)
                    || record
                        .localized_title
                        .as_deref()
                        .is_some_and(|t| re.is_match(t))
            }
            None => true,
        })
        .collect()
}
