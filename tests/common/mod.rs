//! Shared fixtures for the apertura integration tests.

use apertura::{StockRegistry, TokenSeed};

/// Build seed rows from `(id, stock, rarity label)` tuples.
pub fn seeds(rows: &[(u32, i64, &str)]) -> Vec<TokenSeed> {
    rows.iter()
        .map(|&(id, stock, rarity)| TokenSeed {
            id,
            stock,
            rarity: rarity.to_string(),
        })
        .collect()
}

/// Build a validated registry from `(id, stock, rarity label)` tuples.
pub fn registry(rows: &[(u32, i64, &str)]) -> StockRegistry {
    StockRegistry::from_seeds(&seeds(rows)).unwrap()
}
