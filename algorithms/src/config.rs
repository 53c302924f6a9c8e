//! Option structs for the tunable routines.
//!
//! Every struct has a `Default` matching the classic textbook parameters, so
//! the plain entry points (`find_path`, `bucket_sort`, ...) never need one.

use serde::{Deserialize, Serialize};

use crate::error::{AlgorithmError, Result};

/// How the A* open set treats a coordinate that is already queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierPolicy {
    /// Track the best known g per coordinate and only enqueue strict improvements.
    #[default]
    BestKnown,
    /// Enqueue every unvisited neighbour, duplicates included.
    Lazy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    frontier: FrontierPolicy,
}

impl PathOptions {
    pub fn new(frontier: FrontierPolicy) -> Self {
        Self { frontier }
    }
    pub fn lazy() -> Self {
        Self::new(FrontierPolicy::Lazy)
    }
    pub fn frontier(&self) -> FrontierPolicy {
        self.frontier
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSortOptions {
    buckets: usize,
}

impl BucketSortOptions {
    pub fn new(buckets: usize) -> Result<Self> {
        if buckets < 2 {
            return Err(AlgorithmError::invalid(format!(
                "bucket sort needs at least 2 buckets, got {buckets}"
            )));
        }
        Ok(Self { buckets })
    }
    pub fn buckets(&self) -> usize {
        self.buckets
    }
}

impl Default for BucketSortOptions {
    fn default() -> Self {
        Self { buckets: 10 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixSortOptions {
    base: u64,
}

impl RadixSortOptions {
    pub const MAX_BASE: u64 = 1 << 16;

    pub fn new(base: u64) -> Result<Self> {
        if !(2..=Self::MAX_BASE).contains(&base) {
            return Err(AlgorithmError::invalid(format!(
                "radix base must be within 2..={}, got {base}",
                Self::MAX_BASE
            )));
        }
        Ok(Self { base })
    }
    pub fn base(&self) -> u64 {
        self.base
    }
}

impl Default for RadixSortOptions {
    fn default() -> Self {
        Self { base: 10 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingSortOptions {
    max_range: u64,
}

impl CountingSortOptions {
    pub fn new(max_range: u64) -> Self {
        Self { max_range }
    }
    /// Widest `max - min + 1` the count table may cover.
    pub fn max_range(&self) -> u64 {
        self.max_range
    }
}

impl Default for CountingSortOptions {
    fn default() -> Self {
        Self { max_range: 1 << 24 }
    }
}
