//! Scene identifiers.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const LENGTH: usize = 13;

/// Number of background gradient themes a scene id selects from.
pub const BACKGROUND_THEME_COUNT: u64 = 5;

/// A short lowercase base-36 identifier derived from a scene seed.
///
/// The same seed always yields the same id. The id's leading characters pick
/// the background gradient theme.
///
/// # Examples
///
/// ```
/// # use starfall::scene::SceneId;
/// let id = SceneId::from_seed(42);
/// assert_eq!(id.as_str().len(), 13);
/// assert_eq!(id, SceneId::from_seed(42));
/// assert!(id.background_theme() < 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl SceneId {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = (0..LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Index of the background theme: the first eight characters read as a
    /// base-36 number, modulo the theme count.
    pub fn background_theme(&self) -> usize {
        let prefix = &self.0[..self.0.len().min(8)];
        let value = u64::from_str_radix(prefix, 36).unwrap_or_default();
        (value % BACKGROUND_THEME_COUNT) as usize
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
