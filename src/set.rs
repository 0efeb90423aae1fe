//! Finite sets of [`Element`]s.

use crate::prelude::*;
use std::{collections::btree_set, iter::FusedIterator, sync::Arc};

/// A finite, mutable, duplicate-free collection of [`Element`]s.
///
/// ## Invariants
///
/// No two stored elements compare equal. Since set-valued elements compare by deep equivalence,
/// this holds hereditarily: a set never stores two equivalent subsets.
///
/// Every set returned by a constructor or by a function in [`algebra`](crate::algebra) is
/// independently owned. Mutating it is never observable through its operands.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct Set(#[into_iterator(owned, ref)] BTreeSet<Element>);

// -------------------- Basic traits -------------------- //

impl<T: Into<Element>> FromIterator<T> for Set {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<T: Into<Element>> Extend<T> for Set {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.add(el);
        }
    }
}

impl Debug for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self}")
    }
}

/// Displays a set in roster notation `{e1, e2, ..., eN}`.
impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_char('}')
    }
}

// -------------------- Container -------------------- //

impl Set {
    /// The empty set Ø.
    ///
    /// Every call builds a new set, so there is no shared instance to corrupt.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a set out of the given elements, discarding duplicates.
    pub fn from_elements<T: Into<Element>, I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect()
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(self) -> Self {
        let mut set = Self::empty();
        set.add(self);
        set
    }

    /// Set membership ∈.
    ///
    /// Set-valued elements are found by deep equivalence, not identity.
    #[must_use]
    pub fn contains(&self, el: &Element) -> bool {
        self.0.contains(el)
    }

    /// Inserts an element. Returns whether the element was already present.
    ///
    /// Adding an element twice has the same effect as adding it once.
    pub fn add<T: Into<Element>>(&mut self, el: T) -> bool {
        !self.0.insert(el.into())
    }

    /// Removes an element. Returns whether the element was present.
    ///
    /// Removing an absent element does nothing.
    pub fn remove(&mut self, el: &Element) -> bool {
        self.0.remove(el)
    }

    /// Set cardinality.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Some element of the set.
    ///
    /// The choice is deterministic for a given set, but callers should not rely on which element
    /// it is.
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.0.first()
    }

    /// Iterate over the elements of the set.
    pub fn iter(&self) -> btree_set::Iter<'_, Element> {
        self.0.iter()
    }

    /// A copy of the elements of the set.
    ///
    /// The returned vector and the set are fully independent afterwards.
    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        self.0.iter().cloned().collect()
    }

    /// A read stream over a snapshot of the set.
    ///
    /// See [`Stream`].
    #[must_use]
    pub fn iterate(&self) -> Stream {
        Stream {
            snapshot: self.0.iter().cloned().collect(),
            cursor: 0,
        }
    }
}

// -------------------- Stream -------------------- //

/// A single pass over a snapshot of a [`Set`], returned by [`Set::iterate`].
///
/// The snapshot is taken when the stream is created and shared between clones. Each clone owns a
/// private cursor, so any number of streams can be consumed concurrently from different threads,
/// and each of them yields every member of the snapshot exactly once.
///
/// Changes made to the set after the stream was created are not seen by the stream.
#[derive(Clone, Debug)]
pub struct Stream {
    /// Elements at the time the stream was created.
    snapshot: Arc<[Element]>,
    /// Index of the next element to be yielded.
    cursor: usize,
}

impl Iterator for Stream {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let el = self.snapshot.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(el)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.snapshot.len().saturating_sub(self.cursor);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Stream {}
impl FusedIterator for Stream {}

/// Tests for [`Set`].
#[cfg(test)]
mod set {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty() {
        let set = Set::empty();
        assert!(set.is_empty());
        assert_eq!(set.cardinality(), 0);
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn add_idempotent() {
        let mut set = Set::empty();
        assert!(!set.add(1));
        assert!(set.add(1));
        assert_eq!(set.cardinality(), 1);
        assert!(set.contains(&Element::from(1)));
    }

    #[test]
    fn remove_idempotent() {
        let mut set = set![1, 2, 3];
        assert!(set.remove(&Element::from(2)));
        assert!(!set.remove(&Element::from(2)));
        assert_eq!(set.cardinality(), 2);
        assert!(!set.contains(&Element::from(2)));
    }

    #[test]
    fn mixed_kinds() {
        let set = set![1, "1", Tuple::new(1, 1), set![1]];
        assert_eq!(set.cardinality(), 4);
        assert!(set.contains(&Element::from("1")));
        assert!(!set.contains(&Element::from("2")));
    }

    /// Set-valued members are compared by deep equivalence.
    #[test]
    fn nested_membership() {
        let mut set = set![set![1, 2], set![]];
        assert!(set.contains(&Element::from(set![2, 1])));
        assert!(set.add(set![2, 1]));
        assert!(set.add(Set::empty()));
        assert_eq!(set.cardinality(), 2);
        assert!(!set.contains(&Element::from(set![1])));
    }

    #[test]
    fn singleton() {
        let set = set![1, 2].singleton();
        assert_eq!(set.cardinality(), 1);
        assert!(set.contains(&Element::from(set![1, 2])));
    }

    #[test]
    fn elements_snapshot() {
        let mut set = set![1, 2, 3];
        let mut elements = set.elements();
        elements.clear();
        assert_eq!(set.cardinality(), 3);

        let elements = set.elements();
        set.add(4);
        assert_eq!(elements.len(), 3);
        assert!(!elements.contains(&Element::from(4)));
    }

    #[test]
    fn from_elements() {
        let set = Set::from_elements([1, 1, 2, 3, 3]);
        assert_eq!(set, set![1, 2, 3]);
        assert_eq!(set.cardinality(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(set![3, 1, 2].to_string(), "{1, 2, 3}");
        assert_eq!(set![set![]].to_string(), "{{}}");
    }

    #[test]
    fn stream_is_snapshot() {
        let mut set = set![1, 2, 3];
        let stream = set.iterate();
        set.add(4);
        set.remove(&Element::from(1));

        let read: Vec<_> = stream.collect();
        assert_eq!(read, vec![Element::from(1), Element::from(2), Element::from(3)]);
    }

    /// Clones of a stream advance independently.
    #[test]
    fn stream_cursors() {
        let set = set![1, 2, 3];
        let mut fst = set.iterate();
        assert_eq!(fst.next(), Some(Element::from(1)));

        let snd = fst.clone();
        assert_eq!(fst.len(), 2);
        assert_eq!(fst.count(), 2);
        assert_eq!(snd.count(), 2);
    }

    /// Every concurrent reader sees every member exactly once.
    #[test]
    fn stream_concurrent_readers() {
        let set: Set = (0..200).collect();
        let stream = set.iterate();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let reader = stream.clone();
                    scope.spawn(move || reader.collect::<Set>())
                })
                .collect();

            for handle in handles {
                let read = handle.join().unwrap();
                assert_eq!(read, set);
            }
        });
    }
}
