use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FactError, FactResult};

/// A single displayable fact: a short icon and a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Short display string, usually a single emoji.
    pub icon: String,
    /// The human-readable fact.
    pub text: String,
}

impl Fact {
    /// Create a fact from an icon and its text.
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

/// The ordered set of facts loaded from the data file.
///
/// A collection always holds at least one fact; [`FactCollection::new`]
/// rejects an empty list. File order is preserved and is the only ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCollection {
    facts: Vec<Fact>,
}

impl FactCollection {
    /// Wrap a list of facts, failing with [`FactError::EmptyCollection`]
    /// if it is empty.
    pub fn new(facts: Vec<Fact>) -> FactResult<Self> {
        if facts.is_empty() {
            return Err(FactError::EmptyCollection);
        }
        Ok(Self { facts })
    }

    /// Total number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always `false`: a collection cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// The fact at a 0-based position, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    /// Iterate over all facts in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// Pick one fact uniformly at random.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Fact {
        &self.facts[rng.random_range(0..self.facts.len())]
    }
}
