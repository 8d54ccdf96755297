//! Elapsed travel time.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// An elapsed travel time in seconds.
///
/// Times are fractional seconds (a rail hop of 30 units takes 3.75 s), and
/// display as zero-padded `mm:ss` with fractional seconds truncated. The
/// wrapper provides a total order over its inner `f64` so search states can
/// live in a `BinaryHeap`; travel times are never NaN in practice since all
/// edge weights are finite and non-negative.
///
/// # Examples
///
/// ```
/// use wayfinder_server::domain::TravelTime;
///
/// let t = TravelTime::from_seconds(75.4);
/// assert_eq!(t.to_string(), "01:15");
/// assert_eq!(TravelTime::ZERO.to_string(), "00:00");
///
/// // Minutes are not wrapped at the hour.
/// assert_eq!(TravelTime::from_seconds(3600.0).to_string(), "60:00");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TravelTime(f64);

impl TravelTime {
    /// The zero duration.
    pub const ZERO: TravelTime = TravelTime(0.0);

    /// Wrap a duration in seconds. Negative input is out of contract.
    pub fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// The duration in seconds.
    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TravelTime {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl PartialEq for TravelTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for TravelTime {}

impl PartialOrd for TravelTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TravelTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0 as u64;
        write!(f, "{:02}:{:02}", total / 60, total % 60)
    }
}
