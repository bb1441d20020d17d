//! Binary relations over a finite universe.
//!
//! Purpose
//! - Decide reflexivity, symmetry, transitivity (and antisymmetry) of a pair
//!   set, and partition the universe into equivalence classes when the
//!   relation is an equivalence.
//! - Offer the standard closures for relation editors.
//!
//! Representation
//! - Elements are mapped once to dense ids (`ElementIndex`); all checks run on
//!   an n×n boolean matrix (`Adjacency`). Universes are small (tens of
//!   elements), so O(|pairs|·|U|) checks are fine.
//! - Pairs that name an element outside the universe are ignored.
//!
//! Code cross-refs: `order::layer` (reuses the same indexing)

mod analyze;
mod closure;
mod index;
mod pairs;

pub use analyze::{analyze, RelationReport};
pub use closure::{equivalence_closure, reflexive_closure, symmetric_closure, transitive_closure};
pub use index::{Adjacency, Element, ElementIndex};
pub use pairs::RelationPairSet;
