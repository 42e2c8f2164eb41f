use crate::models::{PriceObservation, RankedPrice};

/// Annotate a list of price observations with the best-price flag and savings.
///
/// The minimum is computed over entries with price > 0 only; zero means the
/// price is unknown, so zero-priced entries are never candidates for best
/// price and never receive savings. Exactly one entry is flagged best when a
/// positive price exists; ties resolve to the first observation with the
/// minimum value. Savings are rounded to the nearest unit.
pub fn rank_prices(observations: Vec<PriceObservation>) -> Vec<RankedPrice> {
    let min_price = observations
        .iter()
        .map(|o| o.price)
        .filter(|p| *p > 0.0)
        .fold(f64::INFINITY, f64::min);

    let best_index = if min_price.is_finite() {
        observations.iter().position(|o| o.price == min_price)
    } else {
        None
    };

    observations
        .into_iter()
        .enumerate()
        .map(|(index, observation)| {
            let savings = (min_price.is_finite() && observation.price > min_price)
                .then(|| (observation.price - min_price).round());
            RankedPrice {
                is_best_price: best_index == Some(index),
                savings,
                observation,
            }
        })
        .collect()
}
