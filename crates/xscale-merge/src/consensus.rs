//! Consensus unit cell and space group across all records.
//!
//! The cell is the componentwise mean with every record weighted equally;
//! datasets are assumed curated before they reach this point. The space
//! group is the mode, with ties going to the value seen first.

use rustc_hash::FxHashMap;
use statrs::statistics::Statistics;

use xscale_core::constants::DEFAULT_RANKING_SIZE;
use xscale_core::errors::ConsensusError;
use xscale_core::types::{ConsensusParameters, RecordSet, SpaceGroup, UnitCell};

/// Caller-fixed values. Each field is independent: fixing one still computes
/// the other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub unit_cell: Option<UnitCell>,
    pub space_group: Option<SpaceGroup>,
}

/// How often a space group occurs in the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceGroupCount {
    pub space_group: SpaceGroup,
    pub count: usize,
}

/// Resolved parameters plus the frequency ranking behind the space group.
#[derive(Debug, Clone, PartialEq)]
pub struct Consensus {
    pub parameters: ConsensusParameters,
    /// Most frequent space groups first, at most `ranking_size` entries.
    /// Informational only.
    pub ranking: Vec<SpaceGroupCount>,
}

#[derive(Debug, Clone)]
pub struct ConsensusResolver {
    ranking_size: usize,
}

impl ConsensusResolver {
    pub fn new(ranking_size: usize) -> Self {
        Self {
            ranking_size: ranking_size.max(1),
        }
    }

    pub fn resolve(
        &self,
        records: &RecordSet,
        overrides: &Overrides,
    ) -> Result<Consensus, ConsensusError> {
        if records.is_empty() {
            return Err(ConsensusError::EmptyRecordSet);
        }

        let unit_cell = match overrides.unit_cell {
            Some(cell) => cell,
            None => mean_unit_cell(records),
        };

        let mut ranking = rank_space_groups(records);
        let space_group = match overrides.space_group {
            Some(group) => group,
            None => {
                for entry in ranking.iter().take(self.ranking_size) {
                    tracing::info!(
                        "Space group {} was found {} times",
                        entry.space_group,
                        entry.count
                    );
                }
                // Non-empty input always ranks at least one group.
                ranking[0].space_group
            }
        };
        ranking.truncate(self.ranking_size);

        tracing::info!(space_group = %space_group, unit_cell = %unit_cell, "resolved consensus");
        Ok(Consensus {
            parameters: ConsensusParameters {
                unit_cell,
                space_group,
            },
            ranking,
        })
    }
}

impl Default for ConsensusResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RANKING_SIZE)
    }
}

/// Componentwise arithmetic mean. `records` must be non-empty.
pub fn mean_unit_cell(records: &RecordSet) -> UnitCell {
    let mut mean = [0.0; UnitCell::LEN];
    for (i, slot) in mean.iter_mut().enumerate() {
        *slot = records.iter().map(|r| r.unit_cell().parameters()[i]).mean();
    }
    UnitCell::new(mean)
}

/// Every distinct space group with its frequency, most frequent first.
///
/// Counting keeps first-seen order and the sort is stable, so equal counts
/// stay in the order their values first appeared in `records`.
pub fn rank_space_groups(records: &RecordSet) -> Vec<SpaceGroupCount> {
    let mut index: FxHashMap<SpaceGroup, usize> = FxHashMap::default();
    let mut counts: Vec<SpaceGroupCount> = Vec::new();
    for record in records {
        let group = record.space_group();
        match index.get(&group) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(group, counts.len());
                counts.push(SpaceGroupCount {
                    space_group: group,
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
