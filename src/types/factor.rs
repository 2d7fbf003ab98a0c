//! Named factors for argmin / argmax selection
//!
//! Every selector builds a small, fixed-order list of `(key, value)` pairs
//! once per call. Ties always resolve to the first factor in list order.

use serde::{Deserialize, Serialize};

/// One named factor with its resolved score.
///
/// Scores are whole points unless a selector works on averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor<K, V = i32> {
    pub key: K,
    pub value: V,
}

impl<K, V> Factor<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Fixed-order, non-empty list of factors
#[derive(Debug, Clone)]
pub struct FactorList<K, const N: usize, V = i32> {
    factors: [Factor<K, V>; N],
}

impl<K: Copy, const N: usize, V: Copy + PartialOrd> FactorList<K, N, V> {
    /// Build a list. `N` must be at least 1.
    pub fn new(factors: [Factor<K, V>; N]) -> Self {
        debug_assert!(N > 0, "factor list must not be empty");
        Self { factors }
    }

    /// Resolve every key through `value`, keeping key order
    pub fn resolve(keys: [K; N], value: impl Fn(K) -> V) -> Self {
        Self::new(keys.map(|key| Factor::new(key, value(key))))
    }

    /// Lowest value, first occurrence on ties
    pub fn weakest(&self) -> Factor<K, V> {
        self.weakest_position().1
    }

    /// Highest value, first occurrence on ties
    pub fn strongest(&self) -> Factor<K, V> {
        self.factors[1..]
            .iter()
            .fold(self.factors[0], |max, f| if f.value > max.value { *f } else { max })
    }

    /// Lowest value among all factors except the weakest one.
    ///
    /// Falls back to the weakest itself for a single-factor list.
    pub fn second_weakest(&self) -> Factor<K, V> {
        let (skip, weakest) = self.weakest_position();
        self.factors
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, f)| *f)
            .reduce(|min, f| if f.value < min.value { f } else { min })
            .unwrap_or(weakest)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Factor<K, V>> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    fn weakest_position(&self) -> (usize, Factor<K, V>) {
        self.factors
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, self.factors[0]), |(idx, min), (i, f)| {
                if f.value < min.value {
                    (i, *f)
                } else {
                    (idx, min)
                }
            })
    }
}
