//! Pack generation and the allocation driver.
//!
//! [`PackAllocator`] owns the stock registry and a single RNG, samples a
//! pack type per iteration from a weighted distribution, and drives the
//! rejection-sampling generator until the pool can no longer supply a
//! pack. Failed elite / full-fun draws fall back to standard once before
//! the run terminates.

pub mod generator;
pub mod selector;

pub use selector::pick_weighted;

use crate::config;
use crate::error::Result;
use crate::models::{PackRecord, PackType};
use crate::registry::StockRegistry;
use generator::generate_pack;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// PackAllocatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PackAllocator`].
pub struct PackAllocatorBuilder {
    max_attempts: usize,
    type_weights: Vec<(PackType, u32)>,
    rng_seed: Option<u64>,
}

impl Default for PackAllocatorBuilder {
    fn default() -> Self {
        Self {
            max_attempts: config::DEFAULT_MAX_ATTEMPTS,
            type_weights: config::DEFAULT_TYPE_WEIGHTS.to_vec(),
            rng_seed: None,
        }
    }
}

impl PackAllocatorBuilder {
    /// Override the rejection-sampling retry budget per generated pack.
    ///
    /// Defaults to [`config::DEFAULT_MAX_ATTEMPTS`].
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Override the pack-type sampling weights.
    ///
    /// Defaults to [`config::DEFAULT_TYPE_WEIGHTS`] (40% standard,
    /// 30% elite, 30% full fun). A weight of zero disables a type.
    pub fn type_weights(mut self, weights: &[(PackType, u32)]) -> Self {
        self.type_weights = weights.to_vec();
        self
    }

    /// Seed the RNG for a reproducible run.
    ///
    /// Unseeded allocators draw their RNG state from the OS.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the allocator over a validated registry.
    pub fn build(self, registry: StockRegistry) -> PackAllocator {
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PackAllocator {
            registry,
            max_attempts: self.max_attempts,
            type_weights: self.type_weights,
            rng,
            produced: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PackAllocator
// ---------------------------------------------------------------------------

/// Drives pack generation over a [`StockRegistry`] until stock runs out.
pub struct PackAllocator {
    registry: StockRegistry,
    max_attempts: usize,
    type_weights: Vec<(PackType, u32)>,
    rng: StdRng,
    produced: u32,
}

impl PackAllocator {
    /// Create a new builder for configuring the allocator.
    pub fn builder() -> PackAllocatorBuilder {
        PackAllocatorBuilder::default()
    }

    /// Allocator with default configuration and an OS-seeded RNG.
    pub fn new(registry: StockRegistry) -> Self {
        Self::builder().build(registry)
    }

    /// The registry in its current (post-commits) state.
    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    /// Number of packs produced so far.
    pub fn produced(&self) -> u32 {
        self.produced
    }

    /// Sample a pack type from the weighted distribution.
    fn sample_type(&mut self) -> PackType {
        let total: u32 = self.type_weights.iter().map(|(_, w)| w).sum();
        if total == 0 {
            return PackType::Standard;
        }
        let mut roll = i64::from(self.rng.gen_range(0..total));
        for &(pack_type, weight) in &self.type_weights {
            roll -= i64::from(weight);
            if roll < 0 {
                return pack_type;
            }
        }
        // Unreachable with a positive total; keep the last entry as the
        // fallback the same way the cumulative walk does.
        self.type_weights
            .last()
            .map(|(pack_type, _)| *pack_type)
            .unwrap_or(PackType::Standard)
    }

    /// Produce the next pack, or `None` when the run is over.
    ///
    /// Samples a type, generates, and falls back to standard exactly once
    /// if an elite or full-fun draw could not be satisfied. The record
    /// carries the type actually used, which may differ from the sampled
    /// one.
    pub fn next_pack(&mut self) -> Result<Option<PackRecord>> {
        let sampled = self.sample_type();
        let mut actual = sampled;
        let mut draw =
            generate_pack(&mut self.registry, sampled, self.max_attempts, &mut self.rng)?;

        if draw.is_none() && sampled != PackType::Standard {
            actual = PackType::Standard;
            draw = generate_pack(
                &mut self.registry,
                PackType::Standard,
                self.max_attempts,
                &mut self.rng,
            )?;
        }

        match draw {
            Some(draw) => {
                self.produced += 1;
                Ok(Some(PackRecord {
                    number: self.produced,
                    pack_type: actual,
                    tokens: draw.into_iter().map(|(id, _)| id).collect(),
                }))
            }
            None => Ok(None),
        }
    }

    /// Run the allocation loop to completion and return every pack produced.
    ///
    /// Terminates once not even a standard pack can be formed. Guaranteed
    /// finite: every committed pack removes five units of real stock.
    pub fn run(&mut self) -> Result<Vec<PackRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.next_pack()? {
            records.push(record);
        }
        Ok(records)
    }
}
