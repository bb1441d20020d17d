use crate::error::Result;
use crate::relation::{Adjacency, Element, ElementIndex, RelationPairSet};

use super::layering::longest_path_ranks;

/// Cover pairs (transitive reduction) of an acyclic `precedes` relation.
///
/// `(a, b)` is a cover when `b` is reachable from `a` and no `c` sits strictly
/// between them. These are exactly the edges a Hasse diagram draws. Fails with
/// `CycleDetected` under the same condition as [`super::layer`].
pub fn hasse_covers<E: Element>(
    elements: &[E],
    precedes: &RelationPairSet<E>,
) -> Result<RelationPairSet<E>> {
    let index = ElementIndex::new(elements);
    let (adj, _) = Adjacency::from_pairs(&index, precedes);
    longest_path_ranks(&index, &adj)?;

    let reach = adj.transitive_closure();
    let n = reach.len();
    let mut covers = Adjacency::empty(n);
    for (a, b) in reach.pairs() {
        let between = (0..n).any(|c| reach.get(a, c) && reach.get(c, b));
        if !between {
            covers.set(a, b);
        }
    }
    Ok(covers.to_pairs(&index))
}
