use crate::base62::Base62Error;

/// Base62 alphabet in ascending byte-value order (`0-9A-Za-z`).
///
/// Keeping the symbols byte-ordered is what makes a fixed-width encoding
/// compare the same way as the raw big-endian bytes it encodes.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const BASE: u32 = 62;

/// Lookup table for base62 decoding. Decoding is case-sensitive: upper and
/// lower case letters are distinct digits.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 62 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Number of bytes [`decode_base62`] produces for an `encoded_len`-character
/// input.
///
/// Capacity bound: 62 < 2^6, so any `n`-digit base62 value fits in
/// `ceil(6n / 8)` bytes. A canonical 27-character identifier decodes to 21
/// bytes, with the high byte zero for every value below 2^160.
pub(crate) const fn decoded_len(encoded_len: usize) -> usize {
    (encoded_len * 6).div_ceil(8)
}

/// Encodes a byte slice into base62, writing output to `buf_slice`.
///
/// The input is interpreted as an unsigned big-endian integer. Digits are
/// written right-aligned and the remaining leading positions are filled with
/// `'0'`, so the output is fixed-width and lexicographically sortable.
///
/// The caller must ensure that `buf_slice` is large enough to hold every
/// digit of the encoded input. For the 20-byte identifier form this is 27
/// characters (`ceil(160 / log2(62)) = 27`), so no truncation path exists.
pub(crate) fn encode_base62(input: &[u8], buf_slice: &mut [u8]) {
    buf_slice.fill(b'0');

    // Repeated long division of the big-endian scratch value by 62 yields
    // digits least-significant first.
    let mut scratch = input.to_vec();
    let mut start = 0;
    let mut out = buf_slice.len();
    while start < scratch.len() {
        if scratch[start] == 0 {
            start += 1;
            continue;
        }
        let mut rem: u32 = 0;
        for b in &mut scratch[start..] {
            let acc = (rem << 8) | u32::from(*b);
            *b = (acc / BASE) as u8;
            rem = acc % BASE;
        }
        out -= 1;
        buf_slice[out] = ALPHABET[rem as usize];
    }
}

/// Decodes a base62 string into its big-endian byte representation.
///
/// The output is fixed-width: always exactly [`decoded_len`] bytes for the
/// given input length, left-padded with zero bytes. This keeps decoding the
/// exact inverse of [`encode_base62`]'s zero-padded output, including for
/// values whose minimal representation would drop leading zero bytes.
///
/// # Errors
///
/// Returns [`Base62Error::DecodeInvalidAscii`] if the input contains a byte
/// outside the alphabet.
pub(crate) fn decode_base62(encoded: &str) -> Result<Vec<u8>, Base62Error> {
    let mut out = vec![0_u8; decoded_len(encoded.len())];
    for (index, byte) in encoded.bytes().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Base62Error::DecodeInvalidAscii { byte, index });
        }
        // Multiply the accumulated value by 62 and add the next digit.
        let mut carry = u32::from(val);
        for b in out.iter_mut().rev() {
            carry += u32::from(*b) * BASE;
            *b = carry as u8;
            carry >>= 8;
        }
        // The output buffer is sized to hold any value of this digit count.
        debug_assert_eq!(carry, 0);
    }
    Ok(out)
}
