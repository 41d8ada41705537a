// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the search context while a minimization runs, and
//! handed back to the [`Minimizer`](crate::minimize::Minimizer) when it ends.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Start nodes whose insertion ordering was searched.
    StartNodes,
    /// Unused candidates whose tentative cost was computed.
    CandidatesEvaluated,
    /// Candidates admitted into an ordering (one per insertion step).
    CandidatesAccepted,
    /// Times a start node beat the best total cost so far.
    BestImprovements,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} start nodes, {} candidates evaluated, {} accepted, {} improvements",
            self.get(Counters::StartNodes),
            self.get(Counters::CandidatesEvaluated),
            self.get(Counters::CandidatesAccepted),
            self.get(Counters::BestImprovements)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::StartNodes), 0);
        assert_eq!(stats.get(Counters::BestImprovements), 0);
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::CandidatesEvaluated);
        stats.increment(Counters::CandidatesEvaluated);
        stats.increment(Counters::StartNodes);
        assert_eq!(stats.get(Counters::CandidatesEvaluated), 2);
        assert_eq!(stats.get(Counters::StartNodes), 1);
        assert_eq!(stats.get(Counters::CandidatesAccepted), 0);
        assert_eq!(
            stats.to_string(),
            "1 start nodes, 2 candidates evaluated, 0 accepted, 0 improvements"
        );
    }
}
