//! Input symbols and the alphabet that admits them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One unit of input. Usually a single character, but any token is allowed.
pub type Symbol = String;

/// The set of symbols an automaton accepts as input.
///
/// Membership is an exact string match. Symbols are only ever added.
///
/// # Example
///
/// ```rust
/// use fsa::core::Alphabet;
///
/// let mut alphabet = Alphabet::new();
/// alphabet.extend(["0", "1"]);
/// alphabet.extend(["1"]);
///
/// assert_eq!(alphabet.len(), 2);
/// assert!(alphabet.contains("0"));
/// assert!(!alphabet.contains("01"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    symbols: BTreeSet<Symbol>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol. Returns `false` if it was already present.
    pub fn insert(&mut self, symbol: impl Into<Symbol>) -> bool {
        self.symbols.insert(symbol.into())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl<S: Into<Symbol>> Extend<S> for Alphabet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.symbols.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<Symbol>> FromIterator<S> for Alphabet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut alphabet = Self::new();
        alphabet.extend(iter);
        alphabet
    }
}
