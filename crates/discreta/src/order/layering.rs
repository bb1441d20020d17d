//! Longest-path ranks via Kahn's topological sweep.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::relation::{Adjacency, Element, ElementIndex, RelationPairSet};

/// Rank per element; every input pair `(a, b)` has `rank(a) < rank(b)`.
#[derive(Clone, Debug)]
pub struct RankAssignment<E> {
    index: ElementIndex<E>,
    ranks: Vec<usize>,
}

impl<E: Element> RankAssignment<E> {
    #[inline]
    pub fn rank(&self, e: &E) -> Option<usize> {
        self.index.id(e).map(|id| self.ranks[id])
    }

    /// `(element, rank)` in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> + '_ {
        self.index.elements().iter().zip(self.ranks.iter().copied())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Number of distinct layers (max rank + 1; 0 when empty).
    pub fn height(&self) -> usize {
        self.ranks.iter().max().map_or(0, |r| r + 1)
    }

    /// Elements grouped by rank, bottom layer first, each layer sorted by element.
    pub fn layers(&self) -> Vec<Vec<E>> {
        let mut out: Vec<Vec<E>> = vec![Vec::new(); self.height()];
        for (e, r) in self.iter() {
            out[r].push(e.clone());
        }
        for layer in &mut out {
            layer.sort();
        }
        out
    }
}

/// Rank every element by the longest `precedes` path ending at it.
///
/// Fails with `CycleDetected` when the relation (restricted to `elements`)
/// has a cycle, including a self-pair `(a, a)`.
pub fn layer<E: Element>(
    elements: &[E],
    precedes: &RelationPairSet<E>,
) -> Result<RankAssignment<E>> {
    let index = ElementIndex::new(elements);
    let (adj, _) = Adjacency::from_pairs(&index, precedes);
    let ranks = longest_path_ranks(&index, &adj)?;
    Ok(RankAssignment { index, ranks })
}

/// Kahn's algorithm with `rank(succ) = max(rank(succ), rank(cur) + 1)`.
pub(crate) fn longest_path_ranks<E: Element>(
    index: &ElementIndex<E>,
    adj: &Adjacency,
) -> Result<Vec<usize>> {
    let n = adj.len();
    let mut indegree = vec![0usize; n];
    for (_, j) in adj.pairs() {
        indegree[j] += 1;
    }
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    let mut ranks = vec![0usize; n];
    let mut consumed = 0usize;
    while let Some(cur) = queue.pop_front() {
        consumed += 1;
        for succ in adj.successors(cur) {
            ranks[succ] = ranks[succ].max(ranks[cur] + 1);
            indegree[succ] -= 1;
            if indegree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }
    if consumed < n {
        let remaining: Vec<String> = (0..n)
            .filter(|&i| indegree[i] > 0)
            .map(|i| index.element(i).to_string())
            .collect();
        tracing::debug!(count = remaining.len(), "precedes relation has a cycle");
        return Err(Error::CycleDetected { remaining });
    }
    Ok(ranks)
}
