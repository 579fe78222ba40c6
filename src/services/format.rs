use serde::Serialize;

use crate::models::{GameId, RankedGame};

const HIDDEN_GEM_MIN_CRITIC: u8 = 85;
const HIDDEN_GEM_MAX_TREND: f64 = 1000.0;

/// Presentation-ready projection of a ranked game
///
/// The score components ride along so the frontend can render a "why
/// recommended" breakdown without recomputing anything.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationCard {
    pub id: GameId,
    pub title: String,
    pub localized_title: Option<String>,
    pub price_display: String,
    /// Regular price shown struck through when a discount is active
    pub regular_price_display: Option<String>,
    pub discount_percent: u8,
    /// Highly rated but flying under the trend radar
    pub hidden_gem: bool,
    pub final_score: f64,
    pub tag_component: f64,
    pub trend_component: f64,
    pub critic_component: f64,
}

/// Projects ranked output into display cards, preserving order
pub fn format_results(ranked: Vec<RankedGame>) -> Vec<RecommendationCard> {
    ranked.into_iter().map(format_result).collect()
}

fn format_result(entry: RankedGame) -> RecommendationCard {
    let game = entry.game;
    let hidden_gem =
        game.critic_score >= HIDDEN_GEM_MIN_CRITIC && game.trend_signal < HIDDEN_GEM_MAX_TREND;

    let price_display = if game.price.is_free {
        "Free".to_string()
    } else {
        format_price(game.price.current_price)
    };
    let regular_price_display = (!game.price.is_free && game.price.discount_percent > 0)
        .then(|| format_price(game.price.regular_price));

    RecommendationCard {
        id: game.id,
        title: game.title,
        localized_title: game.localized_title,
        price_display,
        regular_price_display,
        discount_percent: game.price.discount_percent,
        hidden_gem,
        final_score: entry.final_score,
        tag_component: entry.tag_component,
        trend_component: entry.trend_component,
        critic_component: entry.critic_component,
    }
}

fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
