//! Rejection-sampling pack generation.

use super::selector::pick_weighted;
use crate::error::Result;
use crate::models::{PackType, Rarity, TokenId, PACK_SIZE};
use crate::registry::StockRegistry;
use rand::Rng;

/// A drawn pack before it is numbered: the five `(token, rarity)` pairs in
/// draw order.
pub type PackDraw = Vec<(TokenId, Rarity)>;

/// Try to generate one pack of the requested type.
///
/// Runs up to `max_attempts` draws, each against a detached draft of the
/// current stock. An attempt that fills all five slots is accepted if its
/// Common count is within the type's cap, at which point the five tokens
/// are committed against the real registry. A capped-out attempt discards
/// its draft and retries; an attempt that cannot reach five distinct
/// tokens ends generation outright, since every later attempt would
/// exhaust the same pool.
///
/// Returns `Ok(None)` when no pack of this type could be produced -- the
/// caller decides whether to fall back to a less restrictive type.
pub fn generate_pack<R: Rng>(
    registry: &mut StockRegistry,
    pack_type: PackType,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Option<PackDraw>> {
    if registry.total_stock() < PACK_SIZE as u64 {
        return Ok(None);
    }

    let max_common = pack_type.max_common();

    for _ in 0..max_attempts {
        let mut draft = registry.draft();
        let mut draw: PackDraw = Vec::with_capacity(PACK_SIZE);

        for _ in 0..PACK_SIZE {
            match pick_weighted(&draft, rng) {
                Some(id) => {
                    draft.take(id);
                    if let Some(rarity) = registry.rarity(id) {
                        draw.push((id, rarity));
                    }
                }
                None => break,
            }
        }

        if draw.len() < PACK_SIZE {
            // Pool exhausted mid-draw: too few distinct tokens left.
            return Ok(None);
        }

        let commons = draw
            .iter()
            .filter(|(_, rarity)| *rarity == Rarity::Common)
            .count();
        if commons <= max_common {
            let ids: Vec<TokenId> = draw.iter().map(|(id, _)| *id).collect();
            registry.commit(&ids)?;
            return Ok(Some(draw));
        }
    }

    Ok(None)
}
