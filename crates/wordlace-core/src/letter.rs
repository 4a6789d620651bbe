//! Crossword letter representation.

use std::fmt::{self, Display};

/// An uppercase ASCII letter `A`-`Z`.
///
/// Every occupied grid cell holds exactly one `Letter`. Lowercase input is
/// folded to uppercase on construction, so two letters compare equal exactly
/// when they render the same.
///
/// # Examples
///
/// ```
/// use wordlace_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter, Letter::from_char('Q').unwrap());
///
/// assert!(Letter::from_char('7').is_none());
/// assert!(Letter::from_char('é').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from a character, folding lowercase to uppercase.
    ///
    /// Returns `None` for anything other than an ASCII letter.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii() {
            Self::from_ascii(ch as u8)
        } else {
            None
        }
    }

    /// Creates a letter from an ASCII byte, folding lowercase to uppercase.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the uppercase ASCII byte for this letter.
    #[must_use]
    pub const fn as_ascii(self) -> u8 {
        self.0
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
