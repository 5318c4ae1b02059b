use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Settings for building random sources and rendering matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RandomConfig {
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Number of decimals used when printing entries.
    pub precision: Option<usize>,
}

impl RandomConfig {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Builds a fresh random source. Two sources built from the same seed
    /// produce the same sequence.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("Seeding random source with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                log::debug!("Seeding random source from entropy");
                StdRng::from_entropy()
            }
        }
    }
}

/// Load a random configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RandomConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RandomConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
