//! JSON run files.
//!
//! ```json
//! { "spiral": { "min_pitch": 12.0, "max_pitch": 66.0, "target_arc_length": 200.0 },
//!   "facet_count": 12 }
//! ```
//!
//! Missing fields fall back to [`RunConfig::default`].

use crate::errors::SpiralError;
use crate::facets::FacetSampling;
use crate::io::IoError;
use crate::spiral::{SpiralParams, SpiralSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub spiral: SpiralSpec,
    pub facet_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spiral: SpiralSpec::default(),
            facet_count: 12,
        }
    }
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Solve then sample; a failed solve never reaches the sampler.
    pub fn run(&self) -> Result<(SpiralParams, FacetSampling), SpiralError> {
        let params = self.spiral.solve()?;
        let sampling = params.sample(self.facet_count)?;
        Ok((params, sampling))
    }
}
