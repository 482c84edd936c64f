use crate::{Base62Error, Payload, Result, SystemClock, TimeSource, base62::decode_base62};
use chrono::{DateTime, TimeZone};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The creation-time component of a [`crate::Ksuid`].
///
/// Stores a count of seconds elapsed since [`Timestamp::EPOCH`], serialized
/// as an unsigned 32-bit big-endian value in the identifier's binary form.
/// Immutable after construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    value: u32,
}

impl Timestamp {
    /// The custom epoch: 2014-05-13 16:53:20 UTC, 1.4 billion seconds after
    /// the Unix epoch. All timestamp values count seconds from this instant.
    pub const EPOCH: u64 = 1_400_000_000;

    /// Serialized size of the timestamp field in bytes.
    pub const SIZE: usize = 4;

    /// Creates a timestamp from an epoch-relative value.
    ///
    /// The value is stored verbatim: it counts seconds since
    /// [`Timestamp::EPOCH`], **not** since the Unix epoch. Any value is
    /// accepted; whether it is sane is the caller's concern.
    pub const fn from_raw(value: u32) -> Self {
        Self { value }
    }

    /// Extracts the timestamp field from a base62-encoded identifier.
    ///
    /// The encoded text is decoded in full, and the 4 bytes immediately
    /// preceding the trailing 16-byte payload window are read as a
    /// big-endian u32.
    ///
    /// # Errors
    ///
    /// - [`Base62Error::DecodeInvalidAscii`] if the text contains a byte
    ///   outside the base62 alphabet.
    /// - [`Base62Error::DecodeInvalidLen`] if the decoded buffer is shorter
    ///   than the 20-byte binary form, leaving no timestamp window.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let bytes = decode_base62(encoded)?;
        if bytes.len() < Self::SIZE + Payload::SIZE {
            return Err(Base62Error::DecodeInvalidLen { len: bytes.len() }.into());
        }
        let at = bytes.len() - Payload::SIZE - Self::SIZE;
        let mut be = [0_u8; Self::SIZE];
        be.copy_from_slice(&bytes[at..at + Self::SIZE]);
        Ok(Self::from_raw(u32::from_be_bytes(be)))
    }

    /// Creates a timestamp from the current wall-clock time, adjusted to the
    /// custom epoch.
    ///
    /// Equivalent to `Timestamp::from_time_source(&SystemClock)`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn now() -> Self {
        Self::from_time_source(&SystemClock)
    }

    /// Creates a timestamp by reading the given [`TimeSource`] and
    /// subtracting [`Timestamp::EPOCH`].
    ///
    /// Saturates to zero if the clock reads earlier than the epoch.
    pub fn from_time_source<T: TimeSource>(clock: &T) -> Self {
        Self::from_raw(clock.unix_seconds().saturating_sub(Self::EPOCH) as u32)
    }

    /// Returns the epoch-relative value in seconds.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the absolute Unix time in seconds (`value + EPOCH`).
    pub const fn unix_time(&self) -> u64 {
        self.value as u64 + Self::EPOCH
    }

    /// Returns the timestamp field as it appears in the identifier's binary
    /// form: 4 bytes, big-endian.
    pub const fn to_be_bytes(&self) -> [u8; Self::SIZE] {
        self.value.to_be_bytes()
    }

    /// Renders the Unix time as a calendar date-time in the given timezone,
    /// formatted as `YYYY-MM-DD HH:MM:SS ±HHMM ZZZ` (numeric UTC offset
    /// followed by the timezone abbreviation).
    ///
    /// The timezone is an explicit parameter rather than ambient process
    /// state, so output is deterministic for a given `tz`.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Timestamp;
    ///
    /// let ts = Timestamp::from_raw(107_608_047);
    /// let formatted = ts.format_in(&chrono_tz::America::New_York);
    /// assert_eq!(formatted, "2017-10-10 00:00:47 -0400 EDT");
    /// ```
    pub fn format_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        // u32::MAX + EPOCH lands around year 2150, far inside chrono's range
        let Some(utc) = DateTime::from_timestamp(self.unix_time() as i64, 0) else {
            unreachable!("32-bit timestamps are always within chrono's range")
        };
        utc.with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S %z %Z")
            .to_string()
    }
}
