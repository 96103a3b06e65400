//! Cost values with an explicit infeasible state.
//!
//! Every quantity the solver optimizes is measured in liters. A day whose
//! payload plus travel exceeds the liter budget has no valid cost at all,
//! which [`DayCost::Infeasible`] makes explicit instead of reusing a numeric
//! sentinel that could collide with a real answer.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Cost of a (partial) schedule measured in liters.
///
/// `Infeasible` compares greater than every finite cost, so taking a `min`
/// over candidate transitions never selects an impossible day unless every
/// alternative is impossible too.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayCost {
    /// A realizable cost. Finite costs are never negative in practice, but
    /// the representation does not rely on that.
    Finite(i64),
    /// No assignment within the daily budget exists.
    Infeasible,
}

impl DayCost {
    /// The zero cost, used for the empty prefix and for completed final days.
    pub const ZERO: DayCost = DayCost::Finite(0);

    /// Returns true for `Finite` values.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, DayCost::Finite(_))
    }

    /// Extract the finite value, if any.
    #[inline]
    pub fn value(self) -> Option<i64> {
        match self {
            DayCost::Finite(v) => Some(v),
            DayCost::Infeasible => None,
        }
    }
}

impl Add for DayCost {
    type Output = DayCost;

    /// Infeasibility absorbs; finite sums saturate rather than wrap.
    fn add(self, rhs: DayCost) -> DayCost {
        match (self, rhs) {
            (DayCost::Finite(a), DayCost::Finite(b)) => DayCost::Finite(a.saturating_add(b)),
            _ => DayCost::Infeasible,
        }
    }
}

impl AddAssign for DayCost {
    fn add_assign(&mut self, rhs: DayCost) {
        *self = *self + rhs;
    }
}

impl fmt::Display for DayCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayCost::Finite(v) => write!(f, "{v}"),
            DayCost::Infeasible => write!(f, "infeasible"),
        }
    }
}
