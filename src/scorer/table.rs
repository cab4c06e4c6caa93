use crate::alphabet::{self, DEFAULT_FALLBACK};
use crate::error::{FusionError, FvResult};
use std::collections::HashMap;

/// Immutable symbol -> score lookup with a single fallback for misses.
///
/// Lookups are case-insensitive and total: any `char` yields a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    // Insertion order is kept for the legend.
    entries: Vec<(char, f64)>,
    index: HashMap<char, f64>,
    fallback: f64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoreTable {
    /// The reference 20-residue table with a fallback of 5.
    pub fn standard() -> Self {
        let entries = alphabet::reference_entries();
        let index = entries.iter().copied().collect();
        Self {
            entries,
            index,
            fallback: DEFAULT_FALLBACK,
        }
    }

    pub fn from_entries<I>(entries: I, fallback: f64) -> FvResult<Self>
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        if !fallback.is_finite() || fallback <= 0.0 {
            return Err(FusionError::Validation(format!(
                "fallback score must be a positive number, got {}",
                fallback
            )));
        }

        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for (raw_symbol, score) in entries {
            let symbol = normalize_symbol(raw_symbol);
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(FusionError::Validation(format!(
                    "symbol {:?} is not printable",
                    raw_symbol
                )));
            }
            if !score.is_finite() || score <= 0.0 {
                return Err(FusionError::Validation(format!(
                    "score for '{}' must be a positive number, got {}",
                    symbol, score
                )));
            }
            if index.insert(symbol, score).is_some() {
                return Err(FusionError::Validation(format!(
                    "duplicate symbol '{}'",
                    symbol
                )));
            }
            ordered.push((symbol, score));
        }

        Ok(Self {
            entries: ordered,
            index,
            fallback,
        })
    }

    /// Same entries, different miss value.
    pub fn with_fallback(self, fallback: f64) -> FvResult<Self> {
        Self::from_entries(self.entries, fallback)
    }

    pub fn score(&self, symbol: char) -> f64 {
        self.index
            .get(&normalize_symbol(symbol))
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&normalize_symbol(symbol))
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn entries(&self) -> &[(char, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uppercases a symbol when the mapping is one-to-one (`ß` stays `ß`).
pub fn normalize_symbol(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
