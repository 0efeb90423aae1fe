//! Crate prelude.

// The actual prelude.
pub use crate::{
    algebra::{
        cartesian_product, clone, complement, equivalent, intersection, is_proper_subset,
        is_subset, is_superset, power_set, union,
    },
    element::{Element, ElementKind, Tuple},
    properties::{
        anti_symmetric, complete, composable_relations, reflexive, strict_order, symmetric,
        transitive, transitive_parallel, transitive_parallel_with, weak_order, ParallelConfig,
    },
    relation::{
        reverse, typed_relation, BinaryRelation, MaterializedRelation, PredicateRelation,
        RelationError, Side,
    },
    set,
    set::{Set, Stream},
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use derive_more::{From, IntoIterator};
pub(crate) use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
