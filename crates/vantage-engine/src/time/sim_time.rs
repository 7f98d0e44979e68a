use core::fmt;
use core::ops::Add;
use std::time::Duration;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Simulation timestamp.
///
/// A signed nanosecond count on the simulation timeline. It carries no
/// wall-clock meaning; only its total order matters to the render gating.
/// [`SimTime::MIN`] is the value every "last seen" timestamp starts at, so
/// the first real timestamp always compares strictly greater.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SimTime(i64);

impl SimTime {
    /// Smallest representable timestamp.
    pub const MIN: SimTime = SimTime(i64::MIN);

    /// Simulation start.
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    /// Converts fractional seconds, rounding to the nearest nanosecond.
    ///
    /// Out-of-range values saturate; NaN maps to [`SimTime::ZERO`].
    pub fn from_secs_f64(secs: f64) -> Self {
        // `as` saturates on overflow and maps NaN to 0.
        Self((secs * NANOS_PER_SEC as f64).round() as i64)
    }

    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC as f64
    }

    /// Adds `dt`, clamping at the top of the range.
    pub fn saturating_add(self, dt: Duration) -> Self {
        let dt = i64::try_from(dt.as_nanos()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(dt))
    }
}

impl Default for SimTime {
    fn default() -> Self {
        Self::MIN
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;

    #[inline]
    fn add(self, dt: Duration) -> SimTime {
        self.saturating_add(dt)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::MIN {
            f.write_str("-inf")
        } else {
            write!(f, "{:.9}s", self.as_secs_f64())
        }
    }
}
