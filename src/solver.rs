//! Problem instances and the dynamic-programming planner.
//!
//! [`Instance`] holds the static problem data. [`Planner::solve`] runs one
//! forward pass — travel-cost preprocessing, segment-penalty table, then the
//! partition recurrence — and returns a [`Solution`] that owns every table
//! read-only. A `Solution` is an immutable value; concurrent readers need no
//! locking.
//!
//! The recurrence follows the nested-pool semantic: `optimal(c, k)` is the
//! cheapest way to empty the first `c` bags with drones `0..=k` available,
//!
//! ```text
//! optimal(c, k) = min over s in [0, c), l in [0, k] of
//!                 optimal(s, l) + idle_penalty(s, c-1) + usage(s..=c-1, l)
//! ```
//!
//! where drone `l` flies all of the last day's bags and also bounds the
//! pool available before that day. Split points and drones are scanned in
//! ascending order and a candidate wins only on strict improvement, so ties
//! resolve deterministically toward the smallest `(s, l)`.

use crate::cost::DayCost;
use crate::geo::{round_trip_liters, Point};
use crate::schedule::{ReconstructError, Schedule};
use crate::segments::SegmentTable;
use crate::tables::{ChoiceMemo, CostGrid};

/// Static data of one airlift problem. Immutable once built.
#[derive(Clone, Debug)]
pub struct Instance {
    depot: Point,
    bags: Vec<i64>,
    bag_locations: Vec<Point>,
    liter_cost_per_km: f64,
    daily_budget: i64,
    usage_cost: Option<Vec<Vec<i64>>>,
    num_drones: usize,
}

impl Instance {
    /// Assemble an instance from raw parts.
    ///
    /// `usage_cost` is bag-major: `usage_cost[i][k]` is the operational cost
    /// of flying bag `i` with drone `k`. `None` means a single implicit
    /// drone with zero cost everywhere.
    ///
    /// # Panics
    /// Panics if `bags` and `bag_locations` differ in length, or if the
    /// usage table is ragged or has a row per-bag mismatch.
    pub fn new(
        depot: Point,
        bags: Vec<i64>,
        bag_locations: Vec<Point>,
        liter_cost_per_km: f64,
        daily_budget: i64,
        usage_cost: Option<Vec<Vec<i64>>>,
    ) -> Self {
        assert_eq!(
            bags.len(),
            bag_locations.len(),
            "one location per bag is required"
        );
        let num_drones = match &usage_cost {
            Some(rows) => {
                assert_eq!(rows.len(), bags.len(), "one usage row per bag is required");
                let width = rows.first().map_or(1, Vec::len);
                assert!(
                    rows.iter().all(|r| r.len() == width),
                    "usage rows must all have the same width"
                );
                assert!(width > 0, "usage rows must name at least one drone");
                width
            }
            None => 1,
        };
        Instance {
            depot,
            bags,
            bag_locations,
            liter_cost_per_km,
            daily_budget,
            usage_cost,
            num_drones,
        }
    }

    #[inline]
    pub fn depot(&self) -> Point {
        self.depot
    }

    #[inline]
    pub fn bags(&self) -> &[i64] {
        &self.bags
    }

    #[inline]
    pub fn bag_locations(&self) -> &[Point] {
        &self.bag_locations
    }

    #[inline]
    pub fn daily_budget(&self) -> i64 {
        self.daily_budget
    }

    #[inline]
    pub fn num_bags(&self) -> usize {
        self.bags.len()
    }

    #[inline]
    pub fn num_drones(&self) -> usize {
        self.num_drones
    }

    /// Operational cost of flying bag `i` with drone `k`; zero when either
    /// index is out of range or no usage table was configured.
    #[inline]
    pub fn bag_usage(&self, i: usize, k: usize) -> i64 {
        match &self.usage_cost {
            Some(rows) => rows
                .get(i)
                .and_then(|row| row.get(k))
                .copied()
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Total usage cost of flying bags `i..=j` with drone `k`.
    ///
    /// Out-of-range inputs (including `i > j`) contribute nothing and yield
    /// zero; callers probing boundary cells must never fault.
    pub fn sequence_usage_cost(&self, i: usize, j: usize, k: usize) -> i64 {
        if i > j || j >= self.num_bags() {
            return 0;
        }
        (i..=j).map(|b| self.bag_usage(b, k)).sum()
    }

    /// Per-bag round-trip travel costs in liters, rounded upward.
    pub fn travel_liters(&self) -> Vec<i64> {
        self.bag_locations
            .iter()
            .map(|&loc| round_trip_liters(self.depot, loc, self.liter_cost_per_km))
            .collect()
    }
}

/// Runs the forward pass for one [`Instance`].
pub struct Planner {
    instance: Instance,
}

impl Planner {
    pub fn new(instance: Instance) -> Self {
        Planner { instance }
    }

    /// Fill every table in one forward pass and freeze the result.
    ///
    /// Complexity is Θ(N²·K) time over Θ(N·K) recurrence state plus the
    /// Θ(N²) segment table; segment and usage sums come from prefix arrays,
    /// never from rescanning the bags in the inner loops.
    pub fn solve(self) -> Solution {
        let instance = self.instance;
        let n = instance.num_bags();
        let drones = instance.num_drones();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("airlift_solve", bags = n, drones);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let travel = instance.travel_liters();
        let segments = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("segment_table", bags = n);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            SegmentTable::build(instance.bags(), &travel, instance.daily_budget())
        };

        // usage_prefix[l][c] = total usage cost of bags 0..c with drone l.
        let usage_prefix: Vec<Vec<i64>> = (0..drones)
            .map(|l| {
                let mut prefix = Vec::with_capacity(n + 1);
                prefix.push(0);
                for i in 0..n {
                    prefix.push(prefix[i] + instance.bag_usage(i, l));
                }
                prefix
            })
            .collect();

        let mut optimal = CostGrid::new(n, drones);
        let mut memo = ChoiceMemo::new(n, drones);

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("recurrence", bags = n, drones);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            for c in 1..=n {
                for k in 0..drones {
                    let mut best = DayCost::Infeasible;
                    for s in 0..c {
                        let penalty = segments.penalty(s, c - 1);
                        if penalty == DayCost::Infeasible {
                            continue;
                        }
                        for l in 0..=k {
                            let usage = usage_prefix[l][c] - usage_prefix[l][s];
                            let candidate = optimal.get(s, l) + penalty + DayCost::Finite(usage);
                            if candidate < best {
                                best = candidate;
                                memo.record(c, k, s, l);
                            }
                        }
                    }
                    optimal.set(c, k, best);
                }
            }
        }

        Solution {
            instance,
            travel,
            segments,
            optimal,
            memo,
        }
    }
}

/// The filled tables of a solved instance. Read-only and safely shareable
/// across threads.
#[derive(Clone, Debug)]
pub struct Solution {
    instance: Instance,
    travel: Vec<i64>,
    segments: SegmentTable,
    optimal: CostGrid,
    memo: ChoiceMemo,
}

impl Solution {
    #[inline]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Per-bag round-trip liters computed by the preprocessor.
    #[inline]
    pub fn travel_liters(&self) -> &[i64] {
        &self.travel
    }

    /// The frozen segment-penalty table.
    #[inline]
    pub fn segments(&self) -> &SegmentTable {
        &self.segments
    }

    /// Idle penalty of handling bags `i..=j` in one day; `Infeasible` for
    /// any query outside the configured upper triangle.
    #[inline]
    pub fn segment_penalty(&self, i: usize, j: usize) -> DayCost {
        self.segments.penalty(i, j)
    }

    /// The optimum: minimal total cost of emptying every bag with the full
    /// drone pool. `Infeasible` means no partition fits the daily budget.
    pub fn lowest_cost(&self) -> DayCost {
        self.optimal
            .get(self.instance.num_bags(), self.instance.num_drones() - 1)
    }

    /// Walk the choice memo backward into a chronological [`Schedule`].
    ///
    /// Each recorded cell names the last day's first bag and its drone; the
    /// walk then resumes from that split with that drone's pool. Indices
    /// only ever decrease, so the walk terminates. Fails when the instance
    /// has no feasible schedule.
    pub fn reconstruct(&self) -> Result<Schedule, ReconstructError> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("reconstruct", bags = self.instance.num_bags());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if !self.lowest_cost().is_finite() {
            return Err(ReconstructError::Infeasible);
        }

        let n = self.instance.num_bags();
        let mut day_starts = Vec::new();
        let mut bag_drones = vec![0usize; n];

        let mut bags_done = n;
        let mut pool = self.instance.num_drones() - 1;
        while bags_done > 0 {
            let (split, day_drone) = self.memo.get(bags_done, pool).ok_or(
                ReconstructError::MissingChoice {
                    bags_done,
                    drone: pool,
                },
            )?;
            for slot in bag_drones[split..bags_done].iter_mut() {
                *slot = day_drone;
            }
            day_starts.push(split);
            bags_done = split;
            pool = day_drone;
        }

        day_starts.reverse();
        Ok(Schedule {
            day_starts,
            bag_drones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Instance, Planner};
    use crate::cost::DayCost;
    use crate::geo::Point;

    fn origin_bags(bags: Vec<i64>, budget: i64, usage: Option<Vec<Vec<i64>>>) -> Instance {
        let locations = vec![Point::new(0.0, 0.0); bags.len()];
        Instance::new(Point::new(0.0, 0.0), bags, locations, 1.0, budget, usage)
    }

    #[test]
    fn empty_instance_costs_nothing() {
        let solution = Planner::new(origin_bags(vec![], 10, None)).solve();
        assert_eq!(solution.lowest_cost(), DayCost::ZERO);
        let schedule = solution.reconstruct().unwrap();
        assert!(schedule.day_starts.is_empty());
        assert!(schedule.bag_drones.is_empty());
    }

    #[test]
    fn single_fitting_bag_is_a_free_final_day() {
        let solution = Planner::new(origin_bags(vec![7], 10, None)).solve();
        assert_eq!(solution.lowest_cost(), DayCost::ZERO);
        let schedule = solution.reconstruct().unwrap();
        assert_eq!(schedule.day_starts, vec![0]);
        assert_eq!(schedule.bag_drones, vec![0]);
    }

    #[test]
    fn single_oversized_bag_is_infeasible() {
        let solution = Planner::new(origin_bags(vec![11], 10, None)).solve();
        assert_eq!(solution.lowest_cost(), DayCost::Infeasible);
        assert!(solution.reconstruct().is_err());
    }

    #[test]
    fn prefers_the_fully_packed_first_day() {
        // [5, 5] on day one leaves zero slack; [5] alone would cost 125.
        let solution = Planner::new(origin_bags(vec![5, 5, 5], 10, None)).solve();
        assert_eq!(solution.lowest_cost(), DayCost::ZERO);
        let schedule = solution.reconstruct().unwrap();
        assert_eq!(schedule.day_starts, vec![0, 2]);
        assert_eq!(schedule.bag_drones, vec![0, 0, 0]);
    }

    #[test]
    fn picks_the_cheaper_drone_for_the_final_day() {
        let usage = vec![vec![5, 0], vec![5, 0]];
        let solution = Planner::new(origin_bags(vec![1, 1], 10, Some(usage))).solve();
        assert_eq!(solution.lowest_cost(), DayCost::ZERO);
        let schedule = solution.reconstruct().unwrap();
        assert_eq!(schedule.bag_drones, vec![1, 1]);
    }

    #[test]
    fn ties_resolve_toward_the_smallest_drone_index() {
        let usage = vec![vec![2, 2], vec![2, 2]];
        let solution = Planner::new(origin_bags(vec![1, 1], 10, Some(usage))).solve();
        assert_eq!(solution.lowest_cost(), DayCost::Finite(4));
        let schedule = solution.reconstruct().unwrap();
        assert_eq!(schedule.bag_drones, vec![0, 0]);
    }

    #[test]
    fn chronological_drone_indices_never_decrease() {
        // Two forced days; drone 1 is free for the late bags, drone 0 for
        // the early ones, but the nested pool only permits non-decreasing
        // drone indices across days.
        let usage = vec![vec![0, 9], vec![0, 9], vec![9, 0], vec![9, 0]];
        let solution = Planner::new(origin_bags(vec![5, 5, 5, 5], 10, Some(usage))).solve();
        let schedule = solution.reconstruct().unwrap();
        let day_drones: Vec<usize> = schedule
            .days()
            .map(|day| schedule.bag_drones[day.start])
            .collect();
        assert!(day_drones.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(solution.lowest_cost(), DayCost::ZERO);
        assert_eq!(schedule.bag_drones, vec![0, 0, 1, 1]);
    }

    #[test]
    fn travel_costs_shrink_the_effective_budget() {
        // Bag at distance 5 km costs 10 liters of travel; 25 + 10 > 30.
        let instance = Instance::new(
            Point::new(0.0, 0.0),
            vec![25],
            vec![Point::new(3.0, 4.0)],
            1.0,
            30,
            None,
        );
        let solution = Planner::new(instance).solve();
        assert_eq!(solution.lowest_cost(), DayCost::Infeasible);
    }

    #[test]
    fn usage_probes_are_lenient() {
        let usage = vec![vec![10, 20], vec![30, 40], vec![50, 60], vec![70, 80]];
        let instance = origin_bags(vec![100, 200, 150, 120], 500, Some(usage));
        assert_eq!(instance.sequence_usage_cost(2, 1, 0), 0);
        assert_eq!(instance.sequence_usage_cost(5, 6, 0), 0);
        assert_eq!(instance.sequence_usage_cost(2, 3, 5), 0);
        assert_eq!(instance.sequence_usage_cost(1, 2, 1), 100);
    }
}
