use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests, instead of reading ambient process state.
///
/// The unit is **seconds** since the Unix epoch (1970-01-01 UTC); the
/// KSUID-specific epoch adjustment happens in [`crate::Timestamp`], not here.
///
/// # Example
///
/// ```
/// use ksuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_seconds(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.unix_seconds(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch.
    fn unix_seconds(&self) -> u64;
}

/// A [`TimeSource`] backed by [`std::time::SystemTime`].
///
/// This reads the system wall clock on every call. Wall-clock adjustments
/// (e.g. NTP corrections) can move it backwards; identifiers only promise
/// one-second creation-time ordering, so no monotonic guard is applied.
///
/// # Panics
///
/// [`TimeSource::unix_seconds`] panics if the system clock reads earlier
/// than the Unix epoch.
#[derive(Default, Clone, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is set before the Unix epoch")
            .as_secs()
    }
}
