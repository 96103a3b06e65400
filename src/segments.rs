//! Pairwise segment cost table.
//!
//! A *segment* `(i, j)` is a contiguous run of bags emptied on a single day.
//! This module precomputes, for every `i <= j`, the idle penalty of spending
//! a day on that segment: zero for a feasible final day, infeasible when the
//! payload plus travel exceeds the budget, and a cubic function of the
//! leftover slack otherwise. Segment sums come from prefix arrays, so the
//! whole table fills in Θ(N²) and each later lookup is O(1).

use crate::cost::DayCost;

/// One cell of the penalty table.
///
/// `Unset` is the pre-fill state; it is distinct from both computed outcomes
/// so a zero penalty can never be mistaken for "not yet computed".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PenaltyCell {
    Unset,
    Idle(i64),
    Infeasible,
}

/// Upper-triangular table of per-segment idle penalties plus the prefix sums
/// that back slack queries. Built once, read-only afterwards.
#[derive(Clone, Debug)]
pub struct SegmentTable {
    n: usize,
    budget: i64,
    water_prefix: Vec<i64>,
    travel_prefix: Vec<i64>,
    cells: Vec<PenaltyCell>,
}

#[inline]
fn cubic(slack: i64) -> i64 {
    slack.saturating_mul(slack).saturating_mul(slack)
}

impl SegmentTable {
    /// Build the table for `bags[i]` liters per bag and `travel[i]` liters of
    /// round-trip cost per bag, under a per-day liter budget.
    ///
    /// # Panics
    /// Panics if `bags` and `travel` differ in length.
    pub fn build(bags: &[i64], travel: &[i64], budget: i64) -> Self {
        assert_eq!(
            bags.len(),
            travel.len(),
            "one travel cost per bag is required"
        );
        let n = bags.len();

        let mut water_prefix = Vec::with_capacity(n + 1);
        let mut travel_prefix = Vec::with_capacity(n + 1);
        water_prefix.push(0);
        travel_prefix.push(0);
        for i in 0..n {
            water_prefix.push(water_prefix[i] + bags[i]);
            travel_prefix.push(travel_prefix[i] + travel[i]);
        }

        let mut table = SegmentTable {
            n,
            budget,
            water_prefix,
            travel_prefix,
            cells: Vec::new(),
        };
        table.cells = table.fill_cells();
        table
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_cells(&self) -> Vec<PenaltyCell> {
        (0..self.n).flat_map(|i| self.fill_row(i)).collect()
    }

    #[cfg(feature = "parallel")]
    fn fill_cells(&self) -> Vec<PenaltyCell> {
        use rayon::prelude::*;
        (0..self.n)
            .into_par_iter()
            .flat_map_iter(|i| self.fill_row(i))
            .collect()
    }

    /// Compute row `i` of the table. Columns below the diagonal stay `Unset`.
    fn fill_row(&self, i: usize) -> Vec<PenaltyCell> {
        let mut row = vec![PenaltyCell::Unset; self.n];
        for (j, cell) in row.iter_mut().enumerate().skip(i) {
            let slack = self.raw_slack(i, j);
            *cell = if slack < 0 {
                PenaltyCell::Infeasible
            } else if j == self.n - 1 {
                // Mission complete after the final bag; idle time is free.
                PenaltyCell::Idle(0)
            } else {
                PenaltyCell::Idle(cubic(slack))
            };
        }
        row
    }

    #[inline]
    fn raw_slack(&self, i: usize, j: usize) -> i64 {
        let water = self.water_prefix[j + 1] - self.water_prefix[i];
        let travel = self.travel_prefix[j + 1] - self.travel_prefix[i];
        self.budget - water - travel
    }

    /// Number of bags the table covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the table covers no bags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Liters left over after emptying bags `i..=j` in one day, or `None`
    /// when the indices do not name a segment. Negative slack means the
    /// segment does not fit in a day.
    pub fn slack(&self, i: usize, j: usize) -> Option<i64> {
        if i > j || j >= self.n {
            return None;
        }
        Some(self.raw_slack(i, j))
    }

    /// Idle penalty for handling bags `i..=j` in one day.
    ///
    /// Queries outside the upper triangle (including any out-of-range index)
    /// report `Infeasible`, never panic; callers probing boundary cells rely
    /// on this.
    pub fn penalty(&self, i: usize, j: usize) -> DayCost {
        if i > j || j >= self.n {
            return DayCost::Infeasible;
        }
        match self.cells[i * self.n + j] {
            PenaltyCell::Idle(v) => DayCost::Finite(v),
            PenaltyCell::Infeasible | PenaltyCell::Unset => DayCost::Infeasible,
        }
    }
}
