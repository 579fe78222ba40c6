pub mod catalog;
pub mod format;
pub mod ranking;
pub mod recommend;
pub mod similarity;
pub mod vectorize;

pub use catalog::CatalogProvider;
pub use format::{format_results, RecommendationCard};
pub use recommend::{browse_catalog, recommend_for_library, search_by_tags};
pub use vectorize::TagVector;
