//! Algorithm enum for selecting how a generation is evaluated.
//!
//! Both variants walk the same frontier and produce identical generations;
//! they differ only in whether the per-cell work is spread over rayon's pool.

use serde::{Deserialize, Serialize};

/// Frontier evaluation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Single-threaded frontier walk
    Sparse,
    /// Frontier built and classified in parallel with rayon
    #[default]
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Hash-set frontier, serial",
            Algorithm::SparseParallel => "Hash-set frontier, parallel rayon",
        }
    }

    /// The other strategy, for toggling from the UI
    pub fn next(&self) -> Algorithm {
        match self {
            Algorithm::Sparse => Algorithm::SparseParallel,
            Algorithm::SparseParallel => Algorithm::Sparse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(Algorithm::default(), Algorithm::SparseParallel);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_next_cycles() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.next().next(), algorithm);
        }
    }
}
