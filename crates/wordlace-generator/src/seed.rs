use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 256-bit seed that fully determines a seeded generation run.
///
/// Rendered as 64 lowercase hexadecimal digits, and parsed back from the same
/// form (upper- or lowercase).
///
/// # Examples
///
/// ```
/// use wordlace_generator::CrosswordSeed;
///
/// let seed: CrosswordSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
///
/// assert!("abc".parse::<CrosswordSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrosswordSeed([u8; 32]);

impl CrosswordSeed {
    /// Number of hexadecimal digits in the text form.
    pub const HEX_LEN: usize = 64;

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for CrosswordSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`CrosswordSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be {} hex digits, got {len}", CrosswordSeed::HEX_LEN)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidHex {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for CrosswordSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != Self::HEX_LEN {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for ch in chars.by_ref().take(2) {
                let digit = ch.to_digit(16).ok_or(SeedParseError::InvalidHex { ch })?;
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = (value << 4) | digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: CrosswordSeed = SEED.parse().unwrap();
        assert_eq!(seed.to_bytes()[0], 0xc1);
        assert_eq!(seed.to_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper: CrosswordSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abcd".parse::<CrosswordSeed>(),
            Err(SeedParseError::InvalidLength { len: 4 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<CrosswordSeed>(),
            Err(SeedParseError::InvalidHex { ch: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(CrosswordSeed::random(), CrosswordSeed::random());
    }
}
