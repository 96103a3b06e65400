//! Fluent construction of problem instances.

use crate::geo::Point;
use crate::solver::Instance;

/// Builder for [`Instance`].
///
/// Bags are appended in mission order; that order is significant because
/// days are contiguous runs of it. The usage-cost table is optional: without
/// one the fleet is a single drone that costs nothing to operate.
pub struct InstanceBuilder {
    depot: Point,
    daily_budget: i64,
    liter_cost_per_km: f64,
    bags: Vec<i64>,
    locations: Vec<Point>,
    usage_cost: Option<Vec<Vec<i64>>>,
}

impl InstanceBuilder {
    pub fn new(depot: Point, daily_budget: i64) -> Self {
        InstanceBuilder {
            depot,
            daily_budget,
            liter_cost_per_km: 0.0,
            bags: Vec::new(),
            locations: Vec::new(),
            usage_cost: None,
        }
    }

    /// Liters burned per kilometer of drone flight. Defaults to zero.
    pub fn liter_cost_per_km(mut self, cost: f64) -> Self {
        self.liter_cost_per_km = cost;
        self
    }

    /// Append one bag (contents in liters) at a location.
    pub fn add_bag(mut self, liters: i64, location: Point) -> Self {
        self.bags.push(liters);
        self.locations.push(location);
        self
    }

    /// Provide the bag-major usage-cost table; row `i`, column `k` is the
    /// cost of flying bag `i` with drone `k`.
    pub fn usage_cost(mut self, table: Vec<Vec<i64>>) -> Self {
        self.usage_cost = Some(table);
        self
    }

    /// Finish the instance.
    ///
    /// # Panics
    /// Panics if a supplied usage table does not have exactly one row per
    /// bag, or if its rows are ragged or empty.
    pub fn build(self) -> Instance {
        Instance::new(
            self.depot,
            self.bags,
            self.locations,
            self.liter_cost_per_km,
            self.daily_budget,
            self.usage_cost,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceBuilder;
    use crate::geo::Point;

    #[test]
    fn defaults_to_one_free_drone() {
        let instance = InstanceBuilder::new(Point::new(0.0, 0.0), 10)
            .add_bag(3, Point::new(1.0, 0.0))
            .add_bag(4, Point::new(0.0, 1.0))
            .build();
        assert_eq!(instance.num_bags(), 2);
        assert_eq!(instance.num_drones(), 1);
        assert_eq!(instance.bag_usage(0, 0), 0);
    }

    #[test]
    fn usage_table_sets_the_fleet_size() {
        let instance = InstanceBuilder::new(Point::new(0.0, 0.0), 10)
            .add_bag(3, Point::new(0.0, 0.0))
            .usage_cost(vec![vec![1, 2, 3]])
            .build();
        assert_eq!(instance.num_drones(), 3);
        assert_eq!(instance.bag_usage(0, 2), 3);
    }

    #[test]
    #[should_panic]
    fn ragged_usage_table_is_rejected() {
        let _ = InstanceBuilder::new(Point::new(0.0, 0.0), 10)
            .add_bag(1, Point::new(0.0, 0.0))
            .add_bag(1, Point::new(0.0, 0.0))
            .usage_cost(vec![vec![1, 2], vec![1]])
            .build();
    }

    #[test]
    #[should_panic]
    fn usage_rows_must_match_bag_count() {
        let _ = InstanceBuilder::new(Point::new(0.0, 0.0), 10)
            .add_bag(1, Point::new(0.0, 0.0))
            .usage_cost(vec![vec![1], vec![1]])
            .build();
    }
}
