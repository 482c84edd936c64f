use crate::{Error, RandSource, Result, ThreadRandom, base62::decode_base62};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The 16-byte random (or caller-supplied) component of a [`crate::Ksuid`].
///
/// The exact-length invariant is enforced at every construction path: a
/// slice of any other length is a hard failure, never silently truncated or
/// padded. Immutable after construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Payload {
    value: [u8; Self::SIZE],
}

impl Payload {
    /// Payload size in bytes.
    pub const SIZE: usize = 16;

    /// Creates a payload of 16 cryptographically-secure random bytes.
    ///
    /// Equivalent to `Payload::from_rand_source(&ThreadRandom)`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn random() -> Self {
        Self::from_rand_source(&ThreadRandom)
    }

    /// Creates a payload by drawing 16 bytes from the given [`RandSource`].
    pub fn from_rand_source<R: RandSource>(rng: &R) -> Self {
        Self {
            value: rng.rand_payload(),
        }
    }

    /// Creates a payload from explicit bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayloadSize`] if `bytes` is not exactly 16
    /// bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::InvalidPayloadSize {
                current_size: bytes.len(),
                expected_size: Self::SIZE,
            });
        }
        let mut value = [0_u8; Self::SIZE];
        value.copy_from_slice(bytes);
        Ok(Self { value })
    }

    /// Extracts the payload field from a base62-encoded identifier.
    ///
    /// The encoded text is decoded in full and the trailing 16 bytes are
    /// taken as the payload.
    ///
    /// # Errors
    ///
    /// - [`crate::Base62Error::DecodeInvalidAscii`] if the text contains a
    ///   byte outside the base62 alphabet.
    /// - [`Error::InvalidPayloadSize`] if the decoded buffer is shorter than
    ///   16 bytes.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let bytes = decode_base62(encoded)?;
        let at = bytes.len().saturating_sub(Self::SIZE);
        Self::from_bytes(&bytes[at..])
    }

    /// Returns the raw 16 bytes.
    pub const fn value(&self) -> &[u8; Self::SIZE] {
        &self.value
    }

    /// Returns the payload as a 32-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.value)
    }
}
