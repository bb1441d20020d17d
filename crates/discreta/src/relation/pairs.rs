//! Ordered pair sets: the boundary type that relations and orders are given as.
//!
//! Pairs may name elements outside the universe they are checked against;
//! `relation::analyze` and `order::layer` decide how to treat those.

use std::collections::BTreeSet;

/// Set of ordered pairs `(a, b)`; duplicates collapse, insertion order is
/// irrelevant, iteration is sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "E: serde::Serialize",
            deserialize = "E: Ord + serde::Deserialize<'de>"
        )
    )
)]
pub struct RelationPairSet<E> {
    pairs: BTreeSet<(E, E)>,
}

impl<E: Ord> Default for RelationPairSet<E> {
    fn default() -> Self {
        Self {
            pairs: BTreeSet::new(),
        }
    }
}

impl<E: Ord> RelationPairSet<E> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the pair was already present.
    #[inline]
    pub fn insert(&mut self, a: E, b: E) -> bool {
        self.pairs.insert((a, b))
    }

    #[inline]
    pub fn contains(&self, a: &E, b: &E) -> bool
    where
        E: Clone,
    {
        self.pairs.contains(&(a.clone(), b.clone()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &E)> + '_ {
        self.pairs.iter().map(|(a, b)| (a, b))
    }
}

impl<E: Ord> FromIterator<(E, E)> for RelationPairSet<E> {
    fn from_iter<I: IntoIterator<Item = (E, E)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<E: Ord> Extend<(E, E)> for RelationPairSet<E> {
    fn extend<I: IntoIterator<Item = (E, E)>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl<E> IntoIterator for RelationPairSet<E> {
    type Item = (E, E);
    type IntoIter = std::collections::btree_set::IntoIter<(E, E)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
