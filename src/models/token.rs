use crate::error::{AperturaError, Result};
use serde::{Deserialize, Serialize};

/// Identifier of a token in the pool.
pub type TokenId = u32;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier of a token.
///
/// The serialized labels follow the upstream data feed exactly, Spanish
/// casing included -- they are an external contract, not a style choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "Bronce")]
    Common,
    #[serde(rename = "Plata")]
    Silver,
    Gold,
    Premium,
}

impl Rarity {
    /// Parse an upstream rarity label (exact casing).
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "Bronce" => Ok(Rarity::Common),
            "Plata" => Ok(Rarity::Silver),
            "Gold" => Ok(Rarity::Gold),
            "Premium" => Ok(Rarity::Premium),
            other => Err(AperturaError::UnknownRarity(other.to_string())),
        }
    }

    /// The upstream label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Bronce",
            Rarity::Silver => "Plata",
            Rarity::Gold => "Gold",
            Rarity::Premium => "Premium",
        }
    }
}

// ---------------------------------------------------------------------------
// TokenSeed
// ---------------------------------------------------------------------------

/// One row of raw seed data: a token id, its initial stock, and its rarity
/// label as found in the feed.
///
/// `stock` is signed on purpose so that negative input is caught by
/// registry validation instead of wrapping silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSeed {
    pub id: TokenId,
    pub stock: i64,
    pub rarity: String,
}
