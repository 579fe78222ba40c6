//! Recommendation scoring engine for the game-discovery platform
//!
//! Turns a user's tag preferences and/or played-game history into a ranked
//! list of catalog games by blending tag similarity, trend, and critic
//! signals into one composite score. The engine is stateless and performs no
//! I/O: catalog access goes through the [`services::CatalogProvider`] seam,
//! and everything downstream of it is pure, synchronous computation that the
//! caller can run (and abandon) freely under concurrency.
//!
//! Three call sites share the pipeline so they rank consistently:
//! tag-based search, Steam-library personalization, and catalog browse.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::ScoringWeights;
pub use error::{EngineError, EngineResult};
pub use models::{GameId, GameRecord, PlayedGame, PreferenceSignal, PriceSnapshot, RankedGame};
