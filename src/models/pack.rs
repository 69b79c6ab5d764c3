use super::token::TokenId;
use serde::{Deserialize, Serialize};

/// Number of tokens in every pack.
pub const PACK_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// PackType
// ---------------------------------------------------------------------------

/// The three pack varieties, distinguished only by how many Common-rarity
/// tokens a pack may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackType {
    #[serde(rename = "estandar")]
    Standard,
    #[serde(rename = "elite")]
    Elite,
    #[serde(rename = "full_fun")]
    FullFun,
}

impl PackType {
    /// Maximum number of Common-rarity tokens allowed in a pack of this type.
    ///
    /// Standard's cap equals the pack size, so its rarity check never
    /// rejects a draw.
    pub fn max_common(&self) -> usize {
        match self {
            PackType::Standard => 5,
            PackType::Elite => 4,
            PackType::FullFun => 3,
        }
    }

    /// Export label, matching the original tool's output vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            PackType::Standard => "estandar",
            PackType::Elite => "elite",
            PackType::FullFun => "full_fun",
        }
    }
}

// ---------------------------------------------------------------------------
// PackRecord
// ---------------------------------------------------------------------------

/// A finished pack: its 1-based sequence number, the type it was actually
/// generated as (after any fallback), and its five distinct token ids in
/// draw order. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRecord {
    pub number: u32,
    pub pack_type: PackType,
    pub tokens: Vec<TokenId>,
}
