//! SHA-1 digests in the uppercase hex form the range API speaks.

use std::fmt;

use sha1::{Digest as _, Sha1};

use crate::error::Error;

/// Length of a hex encoded SHA-1 digest.
pub const DIGEST_HEX_LEN: usize = 40;

/// The length of the prefix sent to the range endpoint (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the suffix that is only ever compared locally.
pub const SUFFIX_LEN: usize = DIGEST_HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest encoding.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// A 40 character uppercase hex SHA-1 digest.
///
/// Stored as ASCII bytes on the stack. The first [`PREFIX_LEN`] characters are
/// the routable prefix, the rest is the suffix checked against the range
/// response.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    hex: [u8; DIGEST_HEX_LEN],
}

impl Digest {
    /// Encodes a raw 20-byte SHA-1 hash.
    pub fn from_sha1_bytes(hash: &[u8; 20]) -> Self {
        let mut hex = [0u8; DIGEST_HEX_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }
        Self { hex }
    }

    /// Hashes the raw bytes of a plaintext password. No text encoding is
    /// assumed.
    pub fn of_password(password: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_ref());
        let hash: [u8; 20] = hasher.finalize().into();
        Self::from_sha1_bytes(&hash)
    }

    /// Parses an already hashed input, normalizing it to uppercase.
    ///
    /// The input must be exactly 40 ASCII hex digits in either case. The error
    /// never echoes the input, which may well be a password passed by mistake.
    pub fn parse_hex(input: impl AsRef<[u8]>) -> Result<Self, Error> {
        let bytes = input.as_ref();
        if bytes.len() != DIGEST_HEX_LEN {
            return Err(Error::MalformedHash {
                reason: format!(
                    "expected {} hex characters, got {} bytes",
                    DIGEST_HEX_LEN,
                    bytes.len()
                ),
            });
        }

        let mut hex = [0u8; DIGEST_HEX_LEN];
        for (i, &c) in bytes.iter().enumerate() {
            if !c.is_ascii_hexdigit() {
                return Err(Error::MalformedHash {
                    reason: format!("non-hex character at position {}", i + 1),
                });
            }
            hex[i] = c.to_ascii_uppercase();
        }

        Ok(Self { hex })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds ASCII hex digits (from HEX_CHARS or
        // validated in parse_hex)
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// The first 5 characters; the only part of the digest that leaves the
    /// process.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// The remaining 35 characters.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.as_str()).finish()
    }
}

/// Builds the digest for a candidate.
///
/// With `already_hashed` set the input is taken as a hex SHA-1 and only
/// normalized; otherwise the input is hashed.
pub fn build_digest(input: impl AsRef<[u8]>, already_hashed: bool) -> Result<Digest, Error> {
    if already_hashed {
        Digest::parse_hex(input)
    } else {
        Ok(Digest::of_password(input))
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_password_vector() {
        let digest = build_digest("password", false).unwrap();
        assert_eq!(digest.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_from_sha1_bytes() {
        // password123 -> SHA1: CBFDAC6008F9CAB4083784CBD1874F76618D2A97
        let hash = hex!("cbfdac6008f9cab4083784cbd1874f76618d2a97");
        let digest = Digest::from_sha1_bytes(&hash);
        assert_eq!(digest.as_str(), "CBFDAC6008F9CAB4083784CBD1874F76618D2A97");
        assert_eq!(digest, Digest::of_password("password123"));
    }

    #[test]
    fn test_plaintext_is_deterministic_uppercase_hex() {
        for input in ["", "a", "correct horse battery staple", "pässwörd", "🔑🔑"] {
            let first = build_digest(input, false).unwrap();
            let second = build_digest(input, false).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.as_str().len(), DIGEST_HEX_LEN);
            assert!(
                first
                    .as_str()
                    .bytes()
                    .all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(&c))
            );
        }
    }

    #[test]
    fn test_hashed_input_is_uppercased() {
        let digest = build_digest("5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8", true).unwrap();
        assert_eq!(digest.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");

        let upper = build_digest("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8", true).unwrap();
        assert_eq!(digest, upper);
    }

    #[test]
    fn test_hashed_input_is_not_rehashed() {
        let hashed = build_digest("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8", true).unwrap();
        let plain = build_digest("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8", false).unwrap();
        assert_ne!(hashed, plain);
    }

    #[test]
    fn test_hashed_input_wrong_length() {
        let err = build_digest("5BAA61E4", true).unwrap_err();
        assert!(matches!(err, Error::MalformedHash { .. }));

        let err = build_digest("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8A", true).unwrap_err();
        assert!(matches!(err, Error::MalformedHash { .. }));
    }

    #[test]
    fn test_hashed_input_non_hex() {
        let err = build_digest("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FDZ", true).unwrap_err();
        assert!(matches!(err, Error::MalformedHash { .. }));
        assert!(err.to_string().contains("position 40"));
        assert!(!err.to_string().contains("5BAA6"));
    }

    #[test]
    fn test_non_utf8_password_hashes_raw_bytes() {
        // Latin-1 "pässword"
        let digest = build_digest(b"p\xe4ssword", false).unwrap();
        assert_eq!(digest.as_str(), "2BB859CD0194BA5439CC7A06B78FB1090CCA8787");
        assert_ne!(digest, Digest::of_password("pässword"));
    }

    #[test]
    fn test_hashed_input_with_non_ascii_bytes() {
        let mut input = b"5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD".to_vec();
        input.push(0xe4);
        let err = build_digest(&input, true).unwrap_err();
        assert!(err.to_string().contains("position 40"));
    }

    #[test]
    fn test_prefix_and_suffix() {
        let digest = Digest::of_password("password");
        assert_eq!(digest.prefix(), "5BAA6");
        assert_eq!(digest.suffix(), "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(digest.suffix().len(), SUFFIX_LEN);
        assert_eq!(format!("{}{}", digest.prefix(), digest.suffix()), digest.to_string());
    }
}
