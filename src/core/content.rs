//! Token content sources
//!
//! A round needs `pair_count` distinct values to pair up. Where they come
//! from is pluggable: numbers, words, color names. The deck only cares that
//! values are distinct and that the source can say whether two contents pair.

use std::fmt;

use crate::core::rng::SimpleRng;

/// Setup-time failure while pulling values from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The source cannot produce the requested number of distinct values.
    NotEnoughValues { available: usize, requested: usize },
    /// The source produced the same value twice.
    DuplicateValue(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotEnoughValues {
                available,
                requested,
            } => write!(
                f,
                "content source holds {} distinct values, {} requested",
                available, requested
            ),
            ContentError::DuplicateValue(v) => {
                write!(f, "content source produced duplicate value {:?}", v)
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Produces distinct content values and decides when two of them pair up.
pub trait ContentSource {
    fn name(&self) -> &'static str;

    /// `count` distinct values, or an error before any timing starts.
    fn values(&mut self, count: usize) -> Result<Vec<String>, ContentError>;

    /// Whether two content strings form a pair. Equality by default.
    fn is_pair(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

/// Distinct two-digit numbers.
pub struct NumberSource {
    rng: SimpleRng,
}

impl NumberSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ContentSource for NumberSource {
    fn name(&self) -> &'static str {
        "numbers"
    }

    fn values(&mut self, count: usize) -> Result<Vec<String>, ContentError> {
        // Two-digit range 10..=99.
        if count > 90 {
            return Err(ContentError::NotEnoughValues {
                available: 90,
                requested: count,
            });
        }
        let mut pool: Vec<u32> = (10..100).collect();
        self.rng.shuffle(&mut pool);
        Ok(pool[..count].iter().map(|n| n.to_string()).collect())
    }
}

const WORDS: [&str; 24] = [
    "sun", "moon", "star", "tree", "leaf", "rock", "wave", "fish", "bird", "wolf", "bear", "frog",
    "rain", "snow", "wind", "fire", "sand", "lake", "hill", "cave", "road", "gate", "bell", "kite",
];

/// Short words drawn from a fixed list.
pub struct WordSource {
    rng: SimpleRng,
}

impl WordSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ContentSource for WordSource {
    fn name(&self) -> &'static str {
        "words"
    }

    fn values(&mut self, count: usize) -> Result<Vec<String>, ContentError> {
        if count > WORDS.len() {
            return Err(ContentError::NotEnoughValues {
                available: WORDS.len(),
                requested: count,
            });
        }
        let mut pool: Vec<&str> = WORDS.to_vec();
        self.rng.shuffle(&mut pool);
        Ok(pool[..count].iter().map(|w| w.to_string()).collect())
    }
}

const COLORS: [&str; 16] = [
    "red", "blue", "green", "gold", "teal", "pink", "gray", "lime", "cyan", "plum", "rust", "jade",
    "navy", "rose", "sage", "ruby",
];

/// Color names drawn from a fixed list.
pub struct ColorSource {
    rng: SimpleRng,
}

impl ColorSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ContentSource for ColorSource {
    fn name(&self) -> &'static str {
        "colors"
    }

    fn values(&mut self, count: usize) -> Result<Vec<String>, ContentError> {
        if count > COLORS.len() {
            return Err(ContentError::NotEnoughValues {
                available: COLORS.len(),
                requested: count,
            });
        }
        let mut pool: Vec<&str> = COLORS.to_vec();
        self.rng.shuffle(&mut pool);
        Ok(pool[..count].iter().map(|c| c.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn number_source_yields_distinct_values() {
        let mut source = NumberSource::new(3);
        let values = source.values(8).unwrap();
        assert_eq!(values.len(), 8);
        let unique: HashSet<&String> = values.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn number_source_rejects_oversized_request() {
        let mut source = NumberSource::new(3);
        let err = source.values(91).unwrap_err();
        assert_eq!(
            err,
            ContentError::NotEnoughValues {
                available: 90,
                requested: 91
            }
        );
    }

    #[test]
    fn word_source_fails_fast_when_exhausted() {
        let mut source = WordSource::new(1);
        assert!(source.values(WORDS.len()).is_ok());
        assert!(source.values(WORDS.len() + 1).is_err());
    }

    #[test]
    fn color_source_yields_distinct_values() {
        let mut source = ColorSource::new(11);
        let values = source.values(10).unwrap();
        let unique: HashSet<&String> = values.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn default_pair_predicate_is_equality() {
        let source = NumberSource::new(1);
        assert!(source.is_pair("42", "42"));
        assert!(!source.is_pair("42", "43"));
    }

    #[test]
    fn same_seed_same_values() {
        let a = NumberSource::new(9).values(5).unwrap();
        let b = NumberSource::new(9).values(5).unwrap();
        assert_eq!(a, b);
    }
}
