//! Sweep plan — the ordered enumeration of every combination to run
//!
//! The order is part of the contract: outer loop over parameter triples by
//! configured index, inner loop over thread levels in configured order.

use super::entities::{ParameterTriple, SweepSpec};
use super::value_objects::{PairingPolicy, ThreadLevel};
use crate::core::error::DomainError;

/// One (triple, thread level) pair of the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// 1-based position in the sweep
    pub ordinal: usize,
    /// Index of the parameter triple this combination belongs to
    pub triple_index: usize,
    pub triple: ParameterTriple,
    pub threads: ThreadLevel,
}

/// Every combination of the sweep, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    combinations: Vec<Combination>,
    triple_count: usize,
    thread_count: usize,
}

impl SweepPlan {
    pub fn new(triples: &[ParameterTriple], levels: &[ThreadLevel]) -> Self {
        let combinations = triples
            .iter()
            .enumerate()
            .flat_map(move |(triple_index, triple)| {
                levels
                    .iter()
                    .map(move |&threads| (triple_index, triple.clone(), threads))
            })
            .enumerate()
            .map(|(i, (triple_index, triple, threads))| Combination {
                ordinal: i + 1,
                triple_index,
                triple,
                threads,
            })
            .collect();

        Self {
            combinations,
            triple_count: triples.len(),
            thread_count: levels.len(),
        }
    }

    /// Pair the sequences of `spec` under `policy` and cross them with its
    /// thread levels.
    pub fn from_spec(spec: &SweepSpec, policy: PairingPolicy) -> Result<Self, DomainError> {
        let triples = spec.triples(policy)?;
        let levels = spec.thread_levels()?;
        Ok(Self::new(&triples, &levels))
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn triple_count(&self) -> usize {
        self.triple_count
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }

    /// Distinct input files in first-use order
    pub fn input_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for c in &self.combinations {
            if !files.contains(&c.triple.input_file.as_str()) {
                files.push(&c.triple.input_file);
            }
        }
        files
    }
}

impl<'a> IntoIterator for &'a SweepPlan {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
