//! Reconstructed schedules and their failure mode.

use std::error::Error;
use std::fmt;

/// A concrete day-by-day plan recovered from the choice memo.
///
/// `day_starts[d]` is the index of the first bag emptied on day `d`
/// (chronological order); `bag_drones[b]` is the drone that flies bag `b`.
/// Day `d` covers bags `day_starts[d] ..` up to the next start (or `N`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub day_starts: Vec<usize>,
    pub bag_drones: Vec<usize>,
}

impl Schedule {
    /// Number of operating days.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.day_starts.len()
    }

    /// The half-open bag ranges of each day, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        let n = self.bag_drones.len();
        self.day_starts.iter().enumerate().map(move |(d, &start)| {
            let end = self.day_starts.get(d + 1).copied().unwrap_or(n);
            start..end
        })
    }
}

/// Why no schedule could be reconstructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconstructError {
    /// The optimum is infinite: no partition of the bags fits the daily
    /// budget. A normal outcome, not a fault.
    Infeasible,
    /// The choice memo has no entry for a cell the backward walk needed.
    /// Indicates an internal inconsistency between grid and memo.
    MissingChoice { bags_done: usize, drone: usize },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructError::Infeasible => write!(f, "no feasible schedule"),
            ReconstructError::MissingChoice { bags_done, drone } => write!(
                f,
                "no solution recorded for {bags_done} bags with drone pool 0..={drone}"
            ),
        }
    }
}

impl Error for ReconstructError {}
