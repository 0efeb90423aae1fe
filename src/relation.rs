//! Binary relations over a universe [`Set`].
//!
//! A relation decides whether x is related to y, for x and y drawn from its universe. It can
//! either be stored pair by pair ([`MaterializedRelation`]) or computed by a function
//! ([`PredicateRelation`]). The verifiers in [`properties`](crate::properties) only ever go
//! through [`BinaryRelation`], so they work the same on either.

use crate::prelude::*;

/// A binary relation over a universe set.
pub trait BinaryRelation {
    /// The set the relation ranges over.
    fn universe(&self) -> &Set;

    /// Whether x is related to y. Order matters.
    fn contains_relation(&self, x: &Element, y: &Element) -> bool;
}

// -------------------- Errors -------------------- //

/// Which argument of a relation call was at fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left element x in xRy.
    First,
    /// The right element y in xRy.
    Second,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// Misuse of a [`MaterializedRelation`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelationError {
    /// An element outside of the universe was passed in.
    #[error("{side} element {element} is not contained in the universe")]
    OutsideUniverse {
        /// The offending argument.
        side: Side,
        /// The offending element.
        element: Element,
    },
}

/// Result of the checked [`MaterializedRelation`] methods.
pub type Result<T> = std::result::Result<T, RelationError>;

// -------------------- Materialized relations -------------------- //

/// A relation stored explicitly as the set of elements each element is related to.
///
/// Only pairs that were added are related. Every element passed to this relation must belong to
/// its universe: the `try_` methods report a [`RelationError`] otherwise, and the rest of the
/// methods panic.
///
/// The relation borrows its universe rather than copying it, so the universe can't be modified
/// for as long as the relation is alive. To grow the universe, drop the relation first and build a
/// new one afterwards.
///
/// ```compile_fail
/// use setrel::prelude::*;
///
/// let mut universe = set![1, 2];
/// let relation = MaterializedRelation::new(&universe);
/// universe.add(3);
/// assert!(!relation.contains_relation(&Element::from(1), &Element::from(2)));
/// ```
#[derive(Clone)]
pub struct MaterializedRelation<'u> {
    /// The universe.
    universe: &'u Set,
    /// Maps x to the set of all y with xRy. Never holds empty buckets.
    related: BTreeMap<Element, Set>,
}

impl Debug for MaterializedRelation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MaterializedRelation")
            .field("universe", self.universe)
            .field("pairs", &self.pairs())
            .finish()
    }
}

impl<'u> MaterializedRelation<'u> {
    /// The empty relation over a universe.
    #[must_use]
    pub fn new(universe: &'u Set) -> Self {
        Self {
            universe,
            related: BTreeMap::new(),
        }
    }

    /// Checks that both arguments are within the universe.
    fn check(&self, x: &Element, y: &Element) -> Result<()> {
        for (side, element) in [(Side::First, x), (Side::Second, y)] {
            if !self.universe.contains(element) {
                tracing::trace!(%side, %element, "element outside of the universe");
                return Err(RelationError::OutsideUniverse {
                    side,
                    element: element.clone(),
                });
            }
        }

        Ok(())
    }

    /// Records that x is related to y.
    ///
    /// ## Errors
    ///
    /// Fails if either element is not in the universe.
    pub fn try_add_relation(&mut self, x: &Element, y: &Element) -> Result<()> {
        self.check(x, y)?;
        self.related.entry(x.clone()).or_default().add(y.clone());
        Ok(())
    }

    /// Forgets that x is related to y. Returns whether they were related.
    ///
    /// ## Errors
    ///
    /// Fails if either element is not in the universe.
    pub fn try_remove_relation(&mut self, x: &Element, y: &Element) -> Result<bool> {
        self.check(x, y)?;
        let Some(bucket) = self.related.get_mut(x) else {
            return Ok(false);
        };

        let removed = bucket.remove(y);
        if bucket.is_empty() {
            self.related.remove(x);
        }
        Ok(removed)
    }

    /// Whether x is related to y.
    ///
    /// ## Errors
    ///
    /// Fails if either element is not in the universe.
    pub fn try_contains_relation(&self, x: &Element, y: &Element) -> Result<bool> {
        self.check(x, y)?;
        Ok(self.related.get(x).is_some_and(|bucket| bucket.contains(y)))
    }

    /// Records that x is related to y.
    ///
    /// ## Panics
    ///
    /// Panics if either element is not in the universe.
    pub fn add_relation<X: Into<Element>, Y: Into<Element>>(&mut self, x: X, y: Y) {
        let (x, y) = (x.into(), y.into());
        if let Err(err) = self.try_add_relation(&x, &y) {
            panic!("add_relation: {err}");
        }
    }

    /// Forgets that x is related to y. Returns whether they were related.
    ///
    /// ## Panics
    ///
    /// Panics if either element is not in the universe.
    pub fn remove_relation<X: Into<Element>, Y: Into<Element>>(&mut self, x: X, y: Y) -> bool {
        let (x, y) = (x.into(), y.into());
        self.try_remove_relation(&x, &y)
            .unwrap_or_else(|err| panic!("remove_relation: {err}"))
    }

    /// All related pairs (x, y).
    #[must_use]
    pub fn pairs(&self) -> Vec<Tuple> {
        self.related
            .iter()
            .flat_map(|(x, bucket)| bucket.iter().map(move |y| Tuple::new(x.clone(), y.clone())))
            .collect()
    }
}

impl BinaryRelation for MaterializedRelation<'_> {
    fn universe(&self) -> &Set {
        self.universe
    }

    /// ## Panics
    ///
    /// Panics if either element is not in the universe.
    fn contains_relation(&self, x: &Element, y: &Element) -> bool {
        self.try_contains_relation(x, y)
            .unwrap_or_else(|err| panic!("contains_relation: {err}"))
    }
}

// -------------------- Predicate relations -------------------- //

/// A relation computed on demand by a function.
///
/// The function is evaluated as is, for any two elements, whether in the universe or not.
/// Predicate relations can't be modified after construction, and like [`MaterializedRelation`]
/// they borrow their universe, which stays frozen while the relation is alive.
#[derive(Clone, Copy)]
pub struct PredicateRelation<'u, F> {
    /// The universe.
    universe: &'u Set,
    /// Decides xRy.
    related: F,
}

impl<F> Debug for PredicateRelation<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PredicateRelation")
            .field("universe", self.universe)
            .finish_non_exhaustive()
    }
}

impl<'u, F: Fn(&Element, &Element) -> bool> PredicateRelation<'u, F> {
    /// The relation xRy ⟺ `related(x, y)` over a universe.
    #[must_use]
    pub fn new(universe: &'u Set, related: F) -> Self {
        Self { universe, related }
    }
}

impl<F: Fn(&Element, &Element) -> bool> BinaryRelation for PredicateRelation<'_, F> {
    fn universe(&self) -> &Set {
        self.universe
    }

    fn contains_relation(&self, x: &Element, y: &Element) -> bool {
        (self.related)(x, y)
    }
}

/// A predicate relation defined by a comparison on a single [`ElementKind`].
///
/// Two elements are related iff both have kind `T` and `related` holds on their values.
///
/// ```
/// use setrel::prelude::*;
///
/// let universe: Set = (0..10).collect();
/// let le = typed_relation(&universe, |x: &i64, y: &i64| x <= y);
/// assert!(le.contains_relation(&Element::from(2), &Element::from(3)));
/// ```
#[must_use]
pub fn typed_relation<T, G>(
    universe: &Set,
    related: G,
) -> PredicateRelation<'_, impl Fn(&Element, &Element) -> bool>
where
    T: ElementKind + ?Sized,
    G: Fn(&T, &T) -> bool,
{
    PredicateRelation::new(universe, move |x: &Element, y: &Element| {
        match (T::extract(x), T::extract(y)) {
            (Some(x), Some(y)) => related(x, y),
            _ => false,
        }
    })
}

/// The negation of a relation: xR'y ⟺ ¬xRy.
///
/// This is the complement of the relation, **not** its transpose. The reverse of ≥ is <.
#[must_use]
pub fn reverse<'a, R>(
    relation: &'a R,
) -> PredicateRelation<'a, impl Fn(&Element, &Element) -> bool + 'a>
where
    R: BinaryRelation + ?Sized + 'a,
{
    PredicateRelation::new(relation.universe(), move |x: &Element, y: &Element| {
        !relation.contains_relation(x, y)
    })
}
