//! Weighted token selection.

use crate::models::TokenId;
use crate::registry::StockDraft;
use rand::Rng;

/// Pick one eligible token with probability proportional to its draft stock.
///
/// Eligible means draft stock > 0 and not already used in the in-progress
/// pack. Draws a uniform real in `[0, total)` and walks the candidates in
/// stable seed order, accumulating their stock, until the cumulative sum
/// reaches the roll. Returns `None` when no token is eligible.
pub fn pick_weighted<R: Rng>(draft: &StockDraft, rng: &mut R) -> Option<TokenId> {
    let candidates: Vec<(TokenId, u32)> = draft.candidates().collect();
    if candidates.is_empty() {
        return None;
    }

    let total: f64 = candidates.iter().map(|(_, stock)| f64::from(*stock)).sum();
    let roll = rng.gen_range(0.0..total);

    let mut acc = 0.0;
    for &(id, stock) in &candidates {
        acc += f64::from(stock);
        if roll <= acc {
            return Some(id);
        }
    }

    // Rounding in the accumulation can leave the sum just short of the
    // roll; the last candidate absorbs that sliver.
    candidates.last().map(|(id, _)| *id)
}
