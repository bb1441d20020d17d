//! Smallest supersets of a relation with a given property, restricted to the
//! universe. Relation editors use these to offer "complete to ..." actions.

use super::index::{Adjacency, Element, ElementIndex};
use super::pairs::RelationPairSet;

/// Adds `(a, a)` for every element.
pub fn reflexive_closure<E: Element>(
    elements: &[E],
    pairs: &RelationPairSet<E>,
) -> RelationPairSet<E> {
    with_adjacency(elements, pairs, |adj| {
        for i in 0..adj.len() {
            adj.set(i, i);
        }
    })
}

/// Adds `(b, a)` for every `(a, b)`.
pub fn symmetric_closure<E: Element>(
    elements: &[E],
    pairs: &RelationPairSet<E>,
) -> RelationPairSet<E> {
    with_adjacency(elements, pairs, |adj| {
        let present: Vec<(usize, usize)> = adj.pairs().collect();
        for (i, j) in present {
            adj.set(j, i);
        }
    })
}

/// Warshall closure.
pub fn transitive_closure<E: Element>(
    elements: &[E],
    pairs: &RelationPairSet<E>,
) -> RelationPairSet<E> {
    with_adjacency(elements, pairs, |adj| *adj = adj.transitive_closure())
}

/// Smallest equivalence relation containing `pairs`.
pub fn equivalence_closure<E: Element>(
    elements: &[E],
    pairs: &RelationPairSet<E>,
) -> RelationPairSet<E> {
    with_adjacency(elements, pairs, |adj| {
        let present: Vec<(usize, usize)> = adj.pairs().collect();
        for (i, j) in present {
            adj.set(j, i);
        }
        for i in 0..adj.len() {
            adj.set(i, i);
        }
        *adj = adj.transitive_closure();
    })
}

fn with_adjacency<E: Element>(
    elements: &[E],
    pairs: &RelationPairSet<E>,
    f: impl FnOnce(&mut Adjacency),
) -> RelationPairSet<E> {
    let index = ElementIndex::new(elements);
    let (mut adj, _) = Adjacency::from_pairs(&index, pairs);
    f(&mut adj);
    adj.to_pairs(&index)
}
