//! Weighted card-pack allocator.
//!
//! Distributes a fixed pool of tokens -- each with a remaining stock count
//! and a rarity tier -- into randomized packs of five until the pool can no
//! longer supply a pack. Tokens are drawn with probability proportional to
//! their remaining stock, each pack type caps how many Common-rarity
//! tokens it may contain, and capped-out draws are rejection-sampled under
//! a bounded retry budget. The finished run exports as one spreadsheet row
//! per pack.
//!
//! # Quick start
//!
//! ```
//! use apertura::{config, CsvSink, PackAllocator, StockRegistry};
//!
//! let registry = StockRegistry::from_seeds(&config::default_seed_data()).unwrap();
//! let mut allocator = PackAllocator::builder().rng_seed(7).build(registry);
//!
//! let packs = allocator.run().unwrap();
//! assert!(!packs.is_empty());
//! assert!(packs.iter().all(|pack| pack.tokens.len() == 5));
//!
//! let mut sink = CsvSink::new(Vec::new());
//! apertura::export::export_all(&mut sink, &packs).unwrap();
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;

pub use allocator::{PackAllocator, PackAllocatorBuilder};
pub use error::{AperturaError, Result};
pub use export::{CsvSink, PackSink};
pub use models::{PackRecord, PackType, Rarity, TokenId, TokenSeed, PACK_SIZE};
pub use registry::{StockDraft, StockRegistry};
