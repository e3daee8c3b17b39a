//! Consensus reporting configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RANKING_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Number of space groups reported in the frequency ranking. Default: 5.
    pub ranking_size: Option<usize>,
}

impl ConsensusConfig {
    pub fn effective_ranking_size(&self) -> usize {
        self.ranking_size.unwrap_or(DEFAULT_RANKING_SIZE)
    }
}
