//! Property checks and equivalence classes over a dense adjacency matrix.

use super::index::{Adjacency, Element, ElementIndex};
use super::pairs::RelationPairSet;

/// Properties of a relation over a finite universe.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelationReport<E> {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
    /// Partition of the universe; `Some` only for equivalence relations.
    /// Classes are ordered by their first member, members by universe order.
    pub classes: Option<Vec<Vec<E>>>,
}

impl<E> RelationReport<E> {
    #[inline]
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    #[inline]
    pub fn is_partial_order(&self) -> bool {
        self.reflexive && self.antisymmetric && self.transitive
    }
}

/// Analyze `pairs` as a relation over `elements`.
///
/// Total: every input has an answer. Pairs naming elements outside `elements`
/// are ignored; repeated elements collapse.
pub fn analyze<E: Element>(elements: &[E], pairs: &RelationPairSet<E>) -> RelationReport<E> {
    let index = ElementIndex::new(elements);
    let (adj, _) = Adjacency::from_pairs(&index, pairs);
    let reflexive = is_reflexive(&adj);
    let symmetric = is_symmetric(&adj);
    let transitive = is_transitive(&adj);
    let antisymmetric = is_antisymmetric(&adj);
    let classes = (reflexive && symmetric && transitive).then(|| partition(&index, &adj));
    RelationReport {
        reflexive,
        symmetric,
        transitive,
        antisymmetric,
        classes,
    }
}

pub(crate) fn is_reflexive(adj: &Adjacency) -> bool {
    (0..adj.len()).all(|i| adj.get(i, i))
}

pub(crate) fn is_symmetric(adj: &Adjacency) -> bool {
    adj.pairs().all(|(i, j)| adj.get(j, i))
}

pub(crate) fn is_antisymmetric(adj: &Adjacency) -> bool {
    adj.pairs().all(|(i, j)| i == j || !adj.get(j, i))
}

/// O(|pairs|·|U|): for each `(a, b)`, every `(b, c)` must have `(a, c)`.
pub(crate) fn is_transitive(adj: &Adjacency) -> bool {
    adj.pairs()
        .all(|(i, j)| adj.successors(j).all(|k| adj.get(i, k)))
}

fn partition<E: Element>(index: &ElementIndex<E>, adj: &Adjacency) -> Vec<Vec<E>> {
    let n = index.len();
    let mut uf = UnionFind::new(n);
    for (i, j) in adj.pairs() {
        uf.union(i, j);
    }
    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut classes: Vec<Vec<E>> = Vec::new();
    for i in 0..n {
        let root = uf.find(i);
        let slot = *slot_of_root[root].get_or_insert_with(|| {
            classes.push(Vec::new());
            classes.len() - 1
        });
        classes[slot].push(index.element(i).clone());
    }
    classes
}

/// Disjoint-set forest with union by rank and path halving.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}
