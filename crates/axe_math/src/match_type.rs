//! Flag matching rules and a 64-bit flag set

use serde::{Serialize, Deserialize};

/// How a set of input flags is compared against a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Input equals the query exactly
    Exact,
    /// Every query bit is set in the input
    #[default]
    All,
    /// At least one query bit is set
    AnyOf,
    /// No query bit is set
    None,
    /// At least one query bit is missing
    NotAll,
}

impl MatchType {
    #[inline]
    pub fn is_match(self, input: u64, to: u64) -> bool {
        match self {
            MatchType::Exact => input == to,
            MatchType::All => (input & to) == to,
            MatchType::AnyOf => (input & to) != 0,
            MatchType::None => (input & to) == 0,
            MatchType::NotAll => (input & to) != to,
        }
    }
}

/// A set of up to 64 flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitSet(pub u64);

impl BitSet {
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn set_index(&mut self, i: u32, on: bool) {
        if on {
            self.add_index(i);
        } else {
            self.remove_index(i);
        }
    }

    pub fn add(&mut self, y: u64) {
        self.0 |= y;
    }

    pub fn add_if(&mut self, y: u64, condition: bool) {
        if condition {
            self.add(y);
        }
    }

    pub fn add_index(&mut self, i: u32) {
        self.0 |= bit(i);
    }

    pub fn add_index_if(&mut self, i: u32, condition: bool) {
        if condition {
            self.add_index(i);
        }
    }

    pub fn remove(&mut self, y: u64) {
        self.0 &= !y;
    }

    pub fn remove_if(&mut self, y: u64, condition: bool) {
        if condition {
            self.remove(y);
        }
    }

    pub fn remove_index(&mut self, i: u32) {
        self.0 &= !bit(i);
    }

    pub fn remove_index_if(&mut self, i: u32, condition: bool) {
        if condition {
            self.remove_index(i);
        }
    }

    pub fn toggle(&mut self, y: u64) {
        self.0 ^= y;
    }

    pub fn toggle_if(&mut self, y: u64, condition: bool) {
        if condition {
            self.toggle(y);
        }
    }

    pub fn toggle_index(&mut self, i: u32) {
        self.0 ^= bit(i);
    }

    pub fn toggle_index_if(&mut self, i: u32, condition: bool) {
        if condition {
            self.toggle_index(i);
        }
    }

    /// Test the set against `y` with the given rule
    #[inline]
    pub fn has(&self, y: u64, match_type: MatchType) -> bool {
        match_type.is_match(self.0, y)
    }

    pub fn has_index(&self, i: u32, match_type: MatchType) -> bool {
        self.has(bit(i), match_type)
    }

    pub fn matches(&self, y: u64) -> bool {
        self.has(y, MatchType::All)
    }

    pub fn matches_index(&self, i: u32) -> bool {
        self.has_index(i, MatchType::All)
    }

    pub fn exists(&self, y: u64) -> bool {
        self.has(y, MatchType::AnyOf)
    }

    pub fn exists_index(&self, i: u32) -> bool {
        self.has_index(i, MatchType::AnyOf)
    }

    pub fn equals(&self, y: u64) -> bool {
        self.has(y, MatchType::Exact)
    }

    pub fn equals_index(&self, i: u32) -> bool {
        self.has_index(i, MatchType::Exact)
    }
}

#[inline]
fn bit(i: u32) -> u64 {
    1u64 << (i & 63)
}
