//! In-memory stock registry for the token pool.
//!
//! The registry is the single mutable resource of an allocation run. It
//! distinguishes committed stock (decremented only when a pack is accepted)
//! from the detached [`StockDraft`] working copies used while a candidate
//! pack is being drawn, so a rejected attempt never touches real stock.

use crate::error::{AperturaError, Result};
use crate::models::{Rarity, TokenId, TokenSeed};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy)]
struct TokenEntry {
    remaining: u32,
    rarity: Rarity,
}

// ---------------------------------------------------------------------------
// StockRegistry
// ---------------------------------------------------------------------------

/// Committed stock ledger: token id -> remaining count and rarity tier.
///
/// Iteration order is the seed order, which keeps the weighted selector's
/// cumulative walk stable across calls.
#[derive(Debug, Clone)]
pub struct StockRegistry {
    order: Vec<TokenId>,
    entries: HashMap<TokenId, TokenEntry>,
}

impl StockRegistry {
    /// Build a registry from seed rows, validating them first.
    ///
    /// Fails fast on a duplicate token id, a negative stock count, or an
    /// unknown rarity label -- malformed seed data is a precondition
    /// violation, not a runtime condition to recover from.
    pub fn from_seeds(seeds: &[TokenSeed]) -> Result<Self> {
        let mut order = Vec::with_capacity(seeds.len());
        let mut entries = HashMap::with_capacity(seeds.len());

        for seed in seeds {
            if entries.contains_key(&seed.id) {
                return Err(AperturaError::DuplicateToken(seed.id));
            }
            if seed.stock < 0 {
                return Err(AperturaError::NegativeStock {
                    id: seed.id,
                    stock: seed.stock,
                });
            }
            let remaining = u32::try_from(seed.stock).map_err(|_| {
                AperturaError::InvalidArgument(format!(
                    "stock {} for token {} exceeds the supported range",
                    seed.stock, seed.id
                ))
            })?;
            let rarity = Rarity::from_label(&seed.rarity)?;

            order.push(seed.id);
            entries.insert(seed.id, TokenEntry { remaining, rarity });
        }

        Ok(Self { order, entries })
    }

    /// Build a registry from a JSON array of seed objects
    /// (`[{"id": 2, "stock": 1000, "rarity": "Bronce"}, ...]`).
    pub fn from_json(json: &str) -> Result<Self> {
        let seeds: Vec<TokenSeed> = serde_json::from_str(json)?;
        Self::from_seeds(&seeds)
    }

    /// Number of distinct tokens in the registry (zero-stock tokens included).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of remaining stock across all tokens.
    pub fn total_stock(&self) -> u64 {
        self.order
            .iter()
            .map(|id| u64::from(self.entries[id].remaining))
            .sum()
    }

    /// Remaining stock for a token, or `None` if the id is unknown.
    pub fn remaining(&self, id: TokenId) -> Option<u32> {
        self.entries.get(&id).map(|e| e.remaining)
    }

    /// Rarity tier for a token, or `None` if the id is unknown.
    pub fn rarity(&self, id: TokenId) -> Option<Rarity> {
        self.entries.get(&id).map(|e| e.rarity)
    }

    /// Token ids in seed order.
    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot the current stock counts into a detached working copy.
    ///
    /// Draws against the draft never affect the registry; only
    /// [`commit`](Self::commit) does.
    pub fn draft(&self) -> StockDraft {
        StockDraft {
            remaining: self
                .order
                .iter()
                .map(|&id| (id, self.entries[&id].remaining))
                .collect(),
            used: HashSet::new(),
        }
    }

    /// Decrement real stock for an accepted pack.
    ///
    /// Validates before mutating: every id must be known, pairwise
    /// distinct, and have stock left. On error the registry is unchanged,
    /// so remaining stock can never go negative.
    pub fn commit(&mut self, tokens: &[TokenId]) -> Result<()> {
        let mut seen = HashSet::with_capacity(tokens.len());
        for &id in tokens {
            if !seen.insert(id) {
                return Err(AperturaError::InvalidArgument(format!(
                    "token {} appears twice in one pack",
                    id
                )));
            }
            match self.entries.get(&id) {
                None => {
                    return Err(AperturaError::InvalidArgument(format!(
                        "cannot commit unknown token {}",
                        id
                    )))
                }
                Some(entry) if entry.remaining == 0 => {
                    return Err(AperturaError::InvalidArgument(format!(
                        "token {} is out of stock",
                        id
                    )))
                }
                Some(_) => {}
            }
        }

        for &id in tokens {
            if let Some(entry) = self.entries.get_mut(&id) {
                entry.remaining -= 1;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StockDraft
// ---------------------------------------------------------------------------

/// Detached working copy of stock counts for one pack-generation attempt.
///
/// Tracks which tokens the in-progress pack has already used, so the same
/// token cannot be drawn twice into one pack even while it still has
/// draft stock left.
#[derive(Debug, Clone)]
pub struct StockDraft {
    remaining: Vec<(TokenId, u32)>,
    used: HashSet<TokenId>,
}

impl StockDraft {
    /// Eligible tokens in stable seed order: draft stock > 0 and not yet
    /// used in the in-progress pack.
    pub fn candidates(&self) -> impl Iterator<Item = (TokenId, u32)> + '_ {
        self.remaining
            .iter()
            .copied()
            .filter(move |(id, stock)| *stock > 0 && !self.used.contains(id))
    }

    /// Draft stock left for a token (zero for unknown ids).
    pub fn remaining(&self, id: TokenId) -> u32 {
        self.remaining
            .iter()
            .find(|(t, _)| *t == id)
            .map(|(_, stock)| *stock)
            .unwrap_or(0)
    }

    /// Take one unit of a token into the in-progress pack.
    ///
    /// Returns `false` (leaving the draft unchanged) if the token is
    /// unknown, exhausted, or already used in this pack.
    pub fn take(&mut self, id: TokenId) -> bool {
        if self.used.contains(&id) {
            return false;
        }
        match self.remaining.iter_mut().find(|(t, _)| *t == id) {
            Some((_, stock)) if *stock > 0 => {
                *stock -= 1;
                self.used.insert(id);
                true
            }
            _ => false,
        }
    }
}
