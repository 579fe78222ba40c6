use super::vectorize::TagVector;

/// Tag similarity with the production denominator
///
/// Computes `dot / (mag_sq_user * mag_sq_game)` — the product of *squared*
/// magnitudes, not the `sqrt(a)*sqrt(b)` a true cosine similarity would use.
/// The composite weights were tuned against this formula, so it is kept
/// bit-for-bit rather than swapped for a generic cosine; correcting it would
/// rescale every tag component and needs a product decision first.
///
/// Either vector being empty (zero magnitude) yields exactly 0.0.
pub fn non_standard_cosine(user: &TagVector, game: &TagVector) -> f64 {
    let mag_user = user.magnitude_squared();
    let mag_game = game.magnitude_squared();
    if mag_user == 0.0 || mag_game == 0.0 {
        return 0.0;
    }
    user.dot(game) / (mag_user * mag_game)
}
