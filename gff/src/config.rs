use serde::{Deserialize, Serialize};

use garage_rs::alloc::AllocConfig;

/// Configuration for the GFF driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GFFConfig {
    /// Configuration of the allocator
    #[serde(default)]
    pub alloc_config: AllocConfig,
    /// Seed for the PRNG generating ids of anonymous vehicles.
    /// If undefined, ids are drawn from entropy
    pub prng_seed: Option<u64>,
    /// Fraction of rejected vehicles above which a warning is logged.
    /// If undefined, no warning is logged
    pub rejected_warn_threshold: Option<f32>,
}

impl Default for GFFConfig {
    fn default() -> Self {
        Self {
            alloc_config: AllocConfig::default(),
            prng_seed: Some(0),
            rejected_warn_threshold: Some(0.5),
        }
    }
}
