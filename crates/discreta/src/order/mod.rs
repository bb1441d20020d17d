//! Layered placement for partial orders (Hasse-diagram style).
//!
//! - `layer`: rank = length of the longest `precedes` path ending at an
//!   element (Kahn's algorithm); cycles are rejected with `CycleDetected`.
//! - `hasse_covers`: the cover pairs a Hasse diagram draws.
//!
//! Order within a rank is not part of the contract; `RankAssignment::layers`
//! sorts each layer by element for callers that want a stable left-to-right
//! order.

mod hasse;
mod layering;

pub use hasse::hasse_covers;
pub use layering::{layer, RankAssignment};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::relation::RelationPairSet;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pairs(list: &[(&'static str, &'static str)]) -> RelationPairSet<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn chain_ranks_bottom_up() {
        let ranks = layer(&["a", "b", "c"], &pairs(&[("a", "b"), ("b", "c")])).unwrap();
        assert_eq!(ranks.rank(&"a"), Some(0));
        assert_eq!(ranks.rank(&"b"), Some(1));
        assert_eq!(ranks.rank(&"c"), Some(2));
        assert_eq!(ranks.height(), 3);
        assert_eq!(ranks.rank(&"zz"), None);
    }

    #[test]
    fn two_cycle_is_rejected() {
        match layer(&["a", "b"], &pairs(&[("a", "b"), ("b", "a")])) {
            Err(Error::CycleDetected { remaining }) => {
                assert_eq!(remaining, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn self_pair_is_a_cycle() {
        let res = layer(&["a", "b"], &pairs(&[("a", "a")]));
        assert!(matches!(res, Err(Error::CycleDetected { .. })));
    }

    #[test]
    fn longest_path_wins_over_shortcut() {
        // Diamond plus a shortcut a→d: d sits above both b and c.
        let rel = pairs(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("a", "d")]);
        let ranks = layer(&["d", "c", "b", "a", "e"], &rel).unwrap();
        assert_eq!(ranks.rank(&"d"), Some(2));
        assert_eq!(
            ranks.layers(),
            vec![vec!["a", "e"], vec!["b", "c"], vec!["d"]]
        );
        let order: Vec<&str> = ranks.iter().map(|(e, _)| *e).collect();
        assert_eq!(order, vec!["d", "c", "b", "a", "e"]);
    }

    #[test]
    fn empty_universe_has_no_layers() {
        let none: [&str; 0] = [];
        let ranks = layer(&none, &RelationPairSet::new()).unwrap();
        assert!(ranks.is_empty());
        assert_eq!(ranks.height(), 0);
        assert!(ranks.layers().is_empty());
    }

    #[test]
    fn covers_drop_implied_pairs() {
        let rel = pairs(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("a", "d")]);
        let covers = hasse_covers(&["a", "b", "c", "d"], &rel).unwrap();
        assert_eq!(
            covers,
            pairs(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")])
        );
        let cyc = hasse_covers(&["a", "b"], &pairs(&[("a", "b"), ("b", "a")]));
        assert!(cyc.is_err());
    }

    #[test]
    fn divisibility_ranks_respect_every_pair_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let n: u32 = rng.gen_range(2..30);
            let elements: Vec<u32> = (1..=n).collect();
            let mut rel = RelationPairSet::new();
            for a in 1..=n {
                for b in (a + 1)..=n {
                    if b % a == 0 && rng.gen_bool(0.7) {
                        rel.insert(a, b);
                    }
                }
            }
            let ranks = layer(&elements, &rel).unwrap();
            for (a, b) in rel.iter() {
                assert!(ranks.rank(a).unwrap() < ranks.rank(b).unwrap());
            }
        }
    }
}
