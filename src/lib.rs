//! # Finite sets and binary relations
//!
//! [`Set`] is a finite collection of [`Element`]s: integers, strings, tuples, or other sets. The
//! [`algebra`] module builds unions, intersections, complements, Cartesian products and power sets
//! out of them.
//!
//! On top of sets sit [binary relations](relation::BinaryRelation), either stored pair by pair or
//! defined through a predicate, and the [`properties`] module checks them for reflexivity,
//! completeness, symmetry, antisymmetry, transitivity, and the orders built out of these.
//!
//! ```
//! use setrel::prelude::*;
//!
//! let ranks = set!["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];
//! let suits = set!["♠", "♥", "♦", "♣"];
//! assert_eq!(cartesian_product(&ranks, &suits).cardinality(), 52);
//!
//! let universe: Set = (0..10).collect();
//! let le = typed_relation(&universe, |x: &i64, y: &i64| x <= y);
//! assert!(weak_order(&le));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Builds a [`Set`](crate::set::Set) out of anything convertible into an
/// [`Element`](crate::element::Element). Duplicates are discarded.
#[macro_export]
macro_rules! set {
    ($($x: expr), *$(,)*) => ({
        #[allow(unused_mut)]
        let mut set = $crate::set::Set::empty();
        $(set.add($x);)*
        set
    });
}

pub mod algebra;
pub mod element;
pub mod prelude;
pub mod properties;
pub mod relation;
pub mod set;


/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;
