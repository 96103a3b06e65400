//! Dense solver tables: the optimal-cost grid and the choice memo.
//!
//! Both are flat 2D arrays indexed by `(bags_done, drone)` with
//! `bags_done ∈ 0..=N` and `drone ∈ 0..K`. They are created empty, filled by
//! one forward pass of the recurrence, and read-only from then on.

use crate::cost::DayCost;

/// `optimal(c, k)`: minimal cost of emptying the first `c` bags with drones
/// `0..=k` available. Row 0 is always zero; unfilled cells read as
/// infeasible so a partially probed grid never reports a fake optimum.
#[derive(Clone, Debug)]
pub struct CostGrid {
    drones: usize,
    cells: Vec<DayCost>,
}

impl CostGrid {
    /// Grid for `bag_count + 1` prefix lengths and `drones >= 1` columns,
    /// with the zero base case pre-filled.
    pub fn new(bag_count: usize, drones: usize) -> Self {
        assert!(drones > 0, "at least one drone column is required");
        let mut cells = vec![DayCost::Infeasible; (bag_count + 1) * drones];
        cells[..drones].fill(DayCost::ZERO);
        CostGrid { drones, cells }
    }

    #[inline]
    pub fn get(&self, bags_done: usize, drone: usize) -> DayCost {
        self.cells[bags_done * self.drones + drone]
    }

    #[inline]
    pub(crate) fn set(&mut self, bags_done: usize, drone: usize, cost: DayCost) {
        self.cells[bags_done * self.drones + drone] = cost;
    }
}

/// Parent-pointer table for reconstruction, struct-of-arrays style.
///
/// For each cell `(bags_done, drone)` that achieved a finite optimum it
/// records the winning split point (first bag of the last day) and the drone
/// that flew that day. Cells that never improved stay unrecorded.
#[derive(Clone, Debug)]
pub struct ChoiceMemo {
    drones: usize,
    split: Vec<usize>,
    day_drone: Vec<usize>,
    recorded: Vec<bool>,
}

impl ChoiceMemo {
    pub fn new(bag_count: usize, drones: usize) -> Self {
        assert!(drones > 0, "at least one drone column is required");
        let cells = (bag_count + 1) * drones;
        ChoiceMemo {
            drones,
            split: vec![0; cells],
            day_drone: vec![0; cells],
            recorded: vec![false; cells],
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, bags_done: usize, drone: usize, split: usize, day_drone: usize) {
        let idx = bags_done * self.drones + drone;
        self.split[idx] = split;
        self.day_drone[idx] = day_drone;
        self.recorded[idx] = true;
    }

    /// The `(split, day_drone)` recorded for a cell, if any.
    #[inline]
    pub fn get(&self, bags_done: usize, drone: usize) -> Option<(usize, usize)> {
        let idx = bags_done * self.drones + drone;
        if self.recorded[idx] {
            Some((self.split[idx], self.day_drone[idx]))
        } else {
            None
        }
    }
}
