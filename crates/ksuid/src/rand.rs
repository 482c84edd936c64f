/// A trait for random sources that produce the 16-byte payload component.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// Implementations used for real identifier generation must be
/// cryptographically secure and safe to call from concurrent threads.
///
/// # Example
/// ```
/// use ksuid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand_payload(&self) -> [u8; 16] {
///         [7; 16]
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand_payload(), [7; 16]);
/// ```
pub trait RandSource {
    /// Returns 16 random bytes.
    fn rand_payload(&self) -> [u8; 16];
}
