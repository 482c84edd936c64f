use crate::{
    Error, Payload, RandSource, Result, SystemClock, ThreadRandom, TimeSource, Timestamp,
    base62::encode_base62,
};
use chrono::TimeZone;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A K-Sortable Unique IDentifier.
///
/// A `Ksuid` composes a [`Timestamp`] and a [`Payload`] into a 160-bit
/// value: 4 bytes of big-endian, epoch-relative creation time followed by 16
/// random bytes. Because the timestamp occupies the high-order bytes,
/// byte-wise comparison of the binary form orders identifiers by creation
/// time, and the fixed-width base62 text form preserves that order
/// character-wise.
///
/// A `Ksuid` is a value type: two identifiers with equal byte content are
/// interchangeable, and values are immutable once constructed and freely
/// shareable across threads.
///
/// # Example
///
/// ```
/// use ksuid::Ksuid;
///
/// let id = Ksuid::random();
/// assert_eq!(id.to_bytes().len(), Ksuid::BINARY_SIZE);
/// assert_eq!(id.encode().len(), Ksuid::ENCODED_SIZE);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ksuid {
    // Field order matters: deriving `Ord` on (timestamp, payload) matches
    // the byte-wise order of the binary form.
    timestamp: Timestamp,
    payload: Payload,
}

/// The decomposition of an encoded identifier, as returned by
/// [`Ksuid::inspect`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Inspection {
    /// Creation time formatted in the timezone handed to
    /// [`Ksuid::inspect`].
    pub time: String,
    /// Payload as a 32-character lowercase hex string.
    pub payload: String,
    /// Epoch-relative timestamp value in seconds.
    pub timestamp: u32,
}

impl Ksuid {
    /// Length of the canonical text form in characters.
    pub const ENCODED_SIZE: usize = 27;

    /// Length of the binary form in bytes.
    pub const BINARY_SIZE: usize = Timestamp::SIZE + Payload::SIZE;

    /// Creates an identifier with the current creation time and a random
    /// payload.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn random() -> Self {
        Self::random_with(&SystemClock, &ThreadRandom)
    }

    /// Creates an identifier from the given clock and random source.
    ///
    /// This is the injectable counterpart to [`Ksuid::random`] for
    /// deterministic tests.
    pub fn random_with<T: TimeSource, R: RandSource>(clock: &T, rng: &R) -> Self {
        Self {
            timestamp: Timestamp::from_time_source(clock),
            payload: Payload::from_rand_source(rng),
        }
    }

    /// Creates an identifier from explicit payload bytes and an
    /// epoch-relative timestamp value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayloadSize`] if `payload` is not exactly 16
    /// bytes long.
    pub fn from_parts(payload: &[u8], timestamp: u32) -> Result<Self> {
        Ok(Self {
            timestamp: Timestamp::from_raw(timestamp),
            payload: Payload::from_bytes(payload)?,
        })
    }

    /// Parses an identifier from its base62 text form.
    ///
    /// [`Payload`] and [`Timestamp`] each decode the same text and extract
    /// their own byte window from the decoded buffer. This is the canonical
    /// parse path; [`Ksuid::from_str`] delegates here.
    ///
    /// # Errors
    ///
    /// - [`crate::Base62Error::DecodeInvalidAscii`] for bytes outside the
    ///   alphabet.
    /// - [`Error::InvalidPayloadSize`] / [`crate::Base62Error::DecodeInvalidLen`]
    ///   when the text decodes to fewer than 20 bytes.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        Ok(Self {
            timestamp: Timestamp::from_encoded(encoded)?,
            payload: Payload::from_encoded(encoded)?,
        })
    }

    /// Creates an identifier with the given epoch-relative timestamp and a
    /// random payload.
    ///
    /// Useful for deterministic-time identifiers in tests and backfills.
    pub fn from_timestamp(timestamp: u32) -> Self {
        Self::from_timestamp_with(timestamp, &ThreadRandom)
    }

    /// Creates an identifier with the given epoch-relative timestamp,
    /// drawing the payload from the given [`RandSource`].
    pub fn from_timestamp_with<R: RandSource>(timestamp: u32, rng: &R) -> Self {
        Self {
            timestamp: Timestamp::from_raw(timestamp),
            payload: Payload::from_rand_source(rng),
        }
    }

    /// Validates and decomposes an encoded identifier.
    ///
    /// The input must be exactly 27 characters; anything else fails without
    /// any parse attempt. On success the identifier is parsed via
    /// [`Ksuid::from_encoded`] and returned as a structured record with the
    /// creation time rendered in `tz`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKsuidForInspection`] if the input length is not 27.
    /// - Any error [`Ksuid::from_encoded`] can produce.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// let inspection = Ksuid::inspect(
    ///     "0ujzPyRiIAffKhBux4PvQdDqMHY",
    ///     &chrono_tz::America::Sao_Paulo,
    /// ).unwrap();
    /// assert_eq!(inspection.timestamp, 107610780);
    /// assert_eq!(inspection.payload, "73fc1aa3b2446246d6e89fcd909e8fe8");
    /// assert_eq!(inspection.time, "2017-10-10 01:46:20 -0300 -03");
    /// ```
    pub fn inspect<Tz: TimeZone>(encoded: &str, tz: &Tz) -> Result<Inspection>
    where
        Tz::Offset: fmt::Display,
    {
        if encoded.len() != Self::ENCODED_SIZE {
            return Err(Error::InvalidKsuidForInspection {
                input: encoded.to_owned(),
            });
        }
        let ksuid = Self::from_encoded(encoded)?;
        Ok(Inspection {
            time: ksuid.timestamp.format_in(tz),
            payload: ksuid.payload.to_hex(),
            timestamp: ksuid.timestamp.value(),
        })
    }

    /// Returns the canonical 20-byte binary form: 4-byte big-endian
    /// timestamp followed by the 16 payload bytes.
    pub fn to_bytes(&self) -> [u8; Self::BINARY_SIZE] {
        let mut bytes = [0_u8; Self::BINARY_SIZE];
        bytes[..Timestamp::SIZE].copy_from_slice(&self.timestamp.to_be_bytes());
        bytes[Timestamp::SIZE..].copy_from_slice(self.payload.value());
        bytes
    }

    /// Encodes this identifier into its canonical text form: exactly 27
    /// base62 characters, left-padded with `'0'`.
    ///
    /// The fixed width is what makes sort-by-text match sort-by-binary; the
    /// base62 expansion of 20 bytes can never exceed 27 digits, so only
    /// padding, never trimming, is applied.
    pub fn encode(&self) -> String {
        let mut buf = [0_u8; Self::ENCODED_SIZE];
        encode_base62(&self.to_bytes(), &mut buf);

        // SAFETY: base62 output is always valid ASCII
        unsafe { String::from_utf8_unchecked(buf.to_vec()) }
    }

    /// Returns the payload as a 32-character lowercase hex string.
    pub fn payload_hex(&self) -> String {
        self.payload.to_hex()
    }

    /// Returns the payload component.
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the epoch-relative timestamp value in seconds.
    pub const fn timestamp(&self) -> u32 {
        self.timestamp.value()
    }

    /// Returns the timestamp component.
    pub const fn timestamp_value(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the absolute Unix time in seconds.
    pub const fn unix_time(&self) -> u64 {
        self.timestamp.unix_time()
    }
}

impl fmt::Display for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ksuid")
            .field("timestamp", &self.timestamp.value())
            .field("payload", &self.payload.to_hex())
            .finish()
    }
}

impl FromStr for Ksuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_encoded(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Base62Error;

    struct FixedTime(u64);
    impl TimeSource for FixedTime {
        fn unix_seconds(&self) -> u64 {
            self.0
        }
    }

    struct FixedRand([u8; 16]);
    impl RandSource for FixedRand {
        fn rand_payload(&self) -> [u8; 16] {
            self.0
        }
    }

    #[test]
    fn random_has_the_expected_lengths() {
        let id = Ksuid::random();
        assert_eq!(id.to_bytes().len(), 20);
        assert_eq!(id.encode().len(), Ksuid::ENCODED_SIZE);
    }

    #[test]
    fn random_with_uses_the_injected_sources() {
        let id = Ksuid::random_with(&FixedTime(1_507_611_700), &FixedRand([0x42; 16]));
        assert_eq!(id.timestamp(), 107_611_700);
        assert_eq!(id.payload_hex(), "42".repeat(16));
    }

    #[test]
    fn from_parts_matches_the_known_vector() {
        let payload = hex::decode("9850EEEC191BF4FF26F99315CE43B0C8").unwrap();
        let id = Ksuid::from_parts(&payload, 107_611_700).unwrap();

        assert_eq!(id.payload_hex(), "9850eeec191bf4ff26f99315ce43b0c8");
        assert_eq!(id.timestamp(), 107_611_700);
        assert_eq!(id.encode(), "0uk1Hbc9dQ9pxyTqJ93IUrfhdGq");
        assert_eq!(id.to_bytes().len(), 20);
    }

    #[test]
    fn from_parts_rejects_invalid_payloads() {
        assert_eq!(
            Ksuid::from_parts(b"", 0).unwrap_err(),
            Error::InvalidPayloadSize {
                current_size: 0,
                expected_size: 16,
            }
        );
        assert_eq!(
            Ksuid::from_parts(b"ABC", 0).unwrap_err(),
            Error::InvalidPayloadSize {
                current_size: 3,
                expected_size: 16,
            }
        );
    }

    #[test]
    fn from_encoded_has_the_expected_lengths() {
        let id = Ksuid::from_encoded("0o5Fs0EELR0fUjHjbCnEtdUwQe3").unwrap();
        assert_eq!(id.to_bytes().len(), 20);
        assert_eq!(id.encode().len(), Ksuid::ENCODED_SIZE);
    }

    #[test]
    fn from_encoded_round_trips_the_binary_form() {
        let payload = hex::decode("9850EEEC191BF4FF26F99315CE43B0C8").unwrap();
        let id = Ksuid::from_parts(&payload, 107_611_700).unwrap();

        let parsed = Ksuid::from_encoded(&id.encode()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.to_bytes(), id.to_bytes());
    }

    #[test]
    fn all_zero_identifier_round_trips() {
        let id = Ksuid::from_parts(&[0; 16], 0).unwrap();

        let encoded = id.encode();
        assert_eq!(encoded, "0".repeat(27));

        let parsed = Ksuid::from_encoded(&encoded).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.timestamp(), 0);
        assert_eq!(parsed.payload_hex(), "0".repeat(32));
    }

    #[test]
    fn from_timestamp_keeps_the_value_and_randomizes_the_payload() {
        let id = Ksuid::from_timestamp(107_611_700);
        assert_eq!(id.timestamp(), 107_611_700);
        assert_eq!(id.unix_time(), 107_611_700 + Timestamp::EPOCH);
        assert_eq!(id.to_bytes().len(), 20);
        assert_eq!(id.encode().len(), Ksuid::ENCODED_SIZE);
    }

    #[test]
    fn binary_and_text_order_follow_the_timestamp() {
        let payload_hi = [0xFF; 16];
        let payload_lo = [0x00; 16];

        let older = Ksuid::from_parts(&payload_hi, 1_000).unwrap();
        let newer = Ksuid::from_parts(&payload_lo, 1_001).unwrap();

        assert!(older < newer);
        assert!(older.to_bytes() < newer.to_bytes());
        assert!(older.encode() < newer.encode());
    }

    #[test]
    fn text_order_matches_binary_order_across_samples() {
        let timestamps = [0_u32, 1, 61, 62, 107_611_700, u32::MAX];
        let ids: Vec<Ksuid> = timestamps
            .iter()
            .map(|&ts| Ksuid::from_timestamp_with(ts, &FixedRand([0x5A; 16])))
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_bytes() < pair[1].to_bytes());
            assert!(pair[0].encode() < pair[1].encode());
        }
    }

    #[test]
    fn inspect_decomposes_a_well_formed_identifier() {
        let inspection =
            Ksuid::inspect("0ujzPyRiIAffKhBux4PvQdDqMHY", &chrono_tz::America::Sao_Paulo)
                .unwrap();

        assert_eq!(
            inspection,
            Inspection {
                time: "2017-10-10 01:46:20 -0300 -03".to_owned(),
                payload: "73fc1aa3b2446246d6e89fcd909e8fe8".to_owned(),
                timestamp: 107_610_780,
            }
        );
    }

    #[test]
    fn inspect_matches_the_second_known_vector() {
        let inspection =
            Ksuid::inspect("2QzPUGEaAKHhVcQYrqQodbiZat1", &chrono_tz::America::Sao_Paulo)
                .unwrap();

        assert_eq!(
            inspection,
            Inspection {
                time: "2023-06-09 20:30:50 -0300 -03".to_owned(),
                payload: "464932c1194da98e752145d72b8f0aab".to_owned(),
                timestamp: 286_353_450,
            }
        );
    }

    #[test]
    fn inspect_rejects_inputs_of_the_wrong_length() {
        for input in ["", "short", &"0".repeat(26), &"0".repeat(28)] {
            assert_eq!(
                Ksuid::inspect(input, &chrono::Utc).unwrap_err(),
                Error::InvalidKsuidForInspection {
                    input: (*input).to_owned(),
                }
            );
        }
    }

    #[test]
    fn inspect_propagates_codec_errors() {
        let input = "!".repeat(27);
        assert_eq!(
            Ksuid::inspect(&input, &chrono::Utc).unwrap_err(),
            Error::Base62(Base62Error::DecodeInvalidAscii {
                byte: b'!',
                index: 0,
            })
        );
    }

    #[test]
    fn display_is_the_canonical_encoding() {
        let payload = hex::decode("9850EEEC191BF4FF26F99315CE43B0C8").unwrap();
        let id = Ksuid::from_parts(&payload, 107_611_700).unwrap();
        assert_eq!(id.to_string(), "0uk1Hbc9dQ9pxyTqJ93IUrfhdGq");
    }

    #[test]
    fn from_str_parses_the_canonical_encoding() {
        let id: Ksuid = "0uk1Hbc9dQ9pxyTqJ93IUrfhdGq".parse().unwrap();
        assert_eq!(id.timestamp(), 107_611_700);
        assert_eq!(id.payload_hex(), "9850eeec191bf4ff26f99315ce43b0c8");
    }

    #[test]
    fn debug_shows_the_components() {
        let id = Ksuid::from_parts(&[0xAB; 16], 42).unwrap();
        let debug = format!("{id:?}");
        assert!(debug.contains("42"));
        assert!(debug.contains("abababababababababababababababab"));
    }
}
