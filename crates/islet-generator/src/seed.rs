use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

const SEED_LEN: usize = 32;

/// A 256-bit seed that fully determines a generated map.
///
/// Shown and parsed as 64 lowercase hex digits, so a map can be reproduced
/// from its printed seed.
///
/// # Examples
///
/// ```
/// use islet_generator::MapSeed;
///
/// let seed = MapSeed::from_phrase("archipelago");
/// let parsed: MapSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), islet_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapSeed([u8; SEED_LEN]);

impl MapSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a seed from operating system entropy.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide random bytes.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; SEED_LEN];
        getrandom::fill(&mut bytes).expect("operating system entropy is unavailable");
        Self(bytes)
    }

    /// Derives a seed from a memorable phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Creates the random generator this seed stands for.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for MapSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MapSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != SEED_LEN * 2 {
            return Err(SeedParseError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidHex);
        }
        let mut bytes = [0; SEED_LEN];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| SeedParseError::InvalidHex)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| SeedParseError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

/// Errors from parsing a [`MapSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contains a non-hex character.
    #[display("seed contains a character that is not a hex digit")]
    InvalidHex,
}
