//! Planar geometry and the travel-cost preprocessor.
//!
//! Each water bag sits at a fixed 2D location; a drone flies from the depot
//! to the bag and back before the bag's contents count against the day.
//! The round trip is converted to liters once, up front, and rounded upward
//! so that the daily budget is never optimistically underestimated.

/// A point in the plane, in kilometers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Liters consumed by a depot → bag → depot round trip.
///
/// The factor of 2 accounts for the return leg; the result is rounded with
/// `ceil` to whole liters.
#[inline]
pub fn round_trip_liters(depot: Point, bag: Point, liter_cost_per_km: f64) -> i64 {
    (2.0 * euclidean_distance(depot, bag) * liter_cost_per_km).ceil() as i64
}
