//! Dense indexing for finite universes.
//!
//! `ElementIndex` assigns each distinct element a dense id (first-occurrence
//! order); `Adjacency` is the n×n boolean matrix of a relation over those ids.
//! Every algorithm in `relation` and `order` runs on ids, not on elements.

use std::collections::BTreeMap;
use std::fmt;

use super::pairs::RelationPairSet;

/// Bound for relation members: totally ordered, cloneable, printable labels.
pub trait Element: Ord + Clone + fmt::Display {}

impl<T: Ord + Clone + fmt::Display> Element for T {}

/// Elements of one universe in first-occurrence order, plus the reverse lookup.
#[derive(Clone, Debug)]
pub struct ElementIndex<E> {
    elements: Vec<E>,
    ids: BTreeMap<E, usize>,
}

impl<E: Element> ElementIndex<E> {
    /// Build from a sequence; repeated elements collapse onto their first id.
    pub fn new(elements: &[E]) -> Self {
        let mut out = Self {
            elements: Vec::with_capacity(elements.len()),
            ids: BTreeMap::new(),
        };
        for e in elements {
            if !out.ids.contains_key(e) {
                out.ids.insert(e.clone(), out.elements.len());
                out.elements.push(e.clone());
            }
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn id(&self, e: &E) -> Option<usize> {
        self.ids.get(e).copied()
    }

    #[inline]
    pub fn element(&self, id: usize) -> &E {
        &self.elements[id]
    }

    #[inline]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }
}

/// Dense boolean adjacency matrix over `n` ids (row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency {
    n: usize,
    bits: Vec<bool>,
}

impl Adjacency {
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            bits: vec![false; n * n],
        }
    }

    /// Map `pairs` onto ids of `index`. Pairs naming an element outside the
    /// universe are dropped; the second value is how many were dropped.
    pub fn from_pairs<E: Element>(
        index: &ElementIndex<E>,
        pairs: &RelationPairSet<E>,
    ) -> (Self, usize) {
        let mut adj = Self::empty(index.len());
        let mut dropped = 0usize;
        for (a, b) in pairs.iter() {
            match (index.id(a), index.id(b)) {
                (Some(i), Some(j)) => adj.set(i, j),
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, "pairs outside the element set ignored");
        }
        (adj, dropped)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.n + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize) {
        self.bits[i * self.n + j] = true;
    }

    /// Ids `j` with `(i, j)` present, ascending.
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&j| self.get(i, j))
    }

    /// All present pairs `(i, j)` in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n).flat_map(move |i| self.successors(i).map(move |j| (i, j)))
    }

    /// Warshall's transitive closure.
    pub fn transitive_closure(&self) -> Self {
        let mut out = self.clone();
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                if !out.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if out.get(k, j) {
                        out.set(i, j);
                    }
                }
            }
        }
        out
    }

    /// Back to element pairs.
    pub fn to_pairs<E: Element>(&self, index: &ElementIndex<E>) -> RelationPairSet<E> {
        self.pairs()
            .map(|(i, j)| (index.element(i).clone(), index.element(j).clone()))
            .collect()
    }
}
