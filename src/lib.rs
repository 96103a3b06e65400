//! Daily airlift scheduling by dynamic programming.
//!
//! Given an ordered sequence of water bags, each with a liter content and a
//! 2D location, this crate partitions the sequence into daily sorties under
//! a per-day liter budget and assigns a drone to every day, minimizing a
//! cubic idle-time penalty plus per-bag drone usage costs.
//!
//! ## Core idea
//! 1. Convert each bag's location into a round-trip travel cost, once.
//! 2. Precompute the idle penalty of every contiguous bag segment.
//! 3. Run a two-dimensional recurrence over (bags processed, drone pool)
//!    while recording split choices, then walk the memo backward to recover
//!    the schedule.
//!
//! The recurrence runs in Θ(N²·K) time for N bags and K drones; segment and
//! usage sums come from prefix arrays, never from inner-loop rescans.
//!
//! ## Quick start
//! ```
//! use airlift_dp::{InstanceBuilder, Planner, Point};
//!
//! let instance = InstanceBuilder::new(Point::new(0.0, 0.0), 30)
//!     .add_bag(10, Point::new(0.0, 0.0))
//!     .add_bag(15, Point::new(0.0, 0.0))
//!     .build();
//! let solution = Planner::new(instance).solve();
//! assert!(solution.lowest_cost().is_finite());
//!
//! let schedule = solution.reconstruct().unwrap();
//! assert_eq!(schedule.day_starts, vec![0]);
//! assert_eq!(schedule.bag_drones, vec![0, 0]);
//! ```
//!
//! An infinite optimum ([`DayCost::Infeasible`]) means no partition of the
//! bags fits the daily budget; that is a normal outcome, not an error.
//! [`Solution`] is immutable once built, so concurrent readers may share it
//! freely.

pub mod builder;
pub mod cost;
pub mod geo;
pub mod schedule;
pub mod segments;
pub mod solver;
pub mod tables;

pub use crate::builder::InstanceBuilder;
pub use crate::cost::DayCost;
pub use crate::geo::Point;
pub use crate::schedule::{ReconstructError, Schedule};
pub use crate::solver::{Instance, Planner, Solution};
