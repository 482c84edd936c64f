use crate::Base62Error;
use core::fmt;

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `ksuid` can produce.
///
/// Every variant carries the offending values so callers can build precise
/// diagnostics. Failures are synchronous and non-recoverable at the point of
/// construction: a failed factory call yields no identifier, and nothing is
/// logged or swallowed internally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A payload was constructed from a byte slice whose length is not
    /// exactly 16, whether from direct input or from an under-length decoded
    /// buffer.
    InvalidPayloadSize {
        current_size: usize,
        expected_size: usize,
    },

    /// An identifier handed to [`crate::Ksuid::inspect`] did not have the
    /// canonical 27-character length. Inspection never attempts to parse
    /// oversized or undersized input.
    InvalidKsuidForInspection { input: String },

    /// An error occurred during base62 decoding.
    ///
    /// This wraps the [`crate::Base62Error`] type and is propagated unchanged
    /// through `Timestamp`, `Payload`, and `Ksuid`.
    Base62(Base62Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayloadSize {
                current_size,
                expected_size,
            } => write!(
                f,
                "invalid payload size <{current_size}>, expected size <{expected_size}> bytes"
            ),
            Self::InvalidKsuidForInspection { input } => {
                write!(f, "the KSUID <{input}> is not valid for inspection")
            }
            Self::Base62(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for Error {}
