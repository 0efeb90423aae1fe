//! Set algebra.
//!
//! Every function here is built on the public contract of [`Set`] alone, and returns a new,
//! independently owned set whenever it returns a set. Inputs are never modified.

use crate::prelude::*;

// -------------------- Relations -------------------- //

/// Set equivalence: both sets have exactly the same members.
#[must_use]
pub fn equivalent(fst: &Set, snd: &Set) -> bool {
    is_subset(fst, snd) && is_subset(snd, fst)
}

/// Subset relation ⊆.
#[must_use]
pub fn is_subset(fst: &Set, snd: &Set) -> bool {
    fst.iter().all(|el| snd.contains(el))
}

/// Strict subset relation ⊊.
#[must_use]
pub fn is_proper_subset(fst: &Set, snd: &Set) -> bool {
    is_subset(fst, snd) && !equivalent(fst, snd)
}

/// Superset relation ⊇.
#[must_use]
pub fn is_superset(fst: &Set, snd: &Set) -> bool {
    is_subset(snd, fst)
}

// -------------------- Constructions -------------------- //

/// Union x ∪ y.
#[must_use]
pub fn union(fst: &Set, snd: &Set) -> Set {
    let mut set = clone(fst);
    set.extend(snd.iter().cloned());
    set
}

/// Intersection x ∩ y.
#[must_use]
pub fn intersection(fst: &Set, snd: &Set) -> Set {
    // Walk the smaller set, test against the larger.
    let (small, large) = if fst.cardinality() < snd.cardinality() {
        (fst, snd)
    } else {
        (snd, fst)
    };

    small
        .iter()
        .filter(|el| large.contains(el))
        .cloned()
        .collect()
}

/// Relative complement x \ y, the elements of x that are not in y.
#[must_use]
pub fn complement(fst: &Set, snd: &Set) -> Set {
    fst.iter().filter(|el| !snd.contains(el)).cloned().collect()
}

/// An independently owned copy of a set.
#[must_use]
pub fn clone(set: &Set) -> Set {
    Set::from_elements(set.elements())
}

/// Cartesian product x × y, the set of all [`Tuple`]s (a, b) with a ∈ x and b ∈ y.
#[must_use]
pub fn cartesian_product(fst: &Set, snd: &Set) -> Set {
    let mut set = Set::empty();
    for a in fst {
        for b in snd {
            set.add(Tuple::new(a.clone(), b.clone()));
        }
    }
    set
}

/// Inserts `el` into every member of `family`, which must be a set of sets.
///
/// {X ∪ {el} | X ∈ family}
fn insert_into_each(el: &Element, family: &Set) -> Set {
    family
        .iter()
        .filter_map(Element::as_set)
        .map(|subset| {
            let mut subset = clone(subset);
            subset.add(el.clone());
            subset
        })
        .collect()
}

/// Powerset 𝒫(x), the set of all subsets of x.
///
/// Built recursively: 𝒫(Ø) = {Ø}, and otherwise, for any e ∈ x,
/// 𝒫(x) = 𝒫(x \ {e}) ∪ {X ∪ {e} | X ∈ 𝒫(x \ {e})}.
#[must_use]
pub fn power_set(set: &Set) -> Set {
    let Some(el) = set.first() else {
        return Set::empty().singleton();
    };

    tracing::trace!(card = set.cardinality(), "power set step");
    let rest = complement(set, &Set::from_elements([el.clone()]));
    let without = power_set(&rest);
    let with = insert_into_each(el, &without);
    union(&without, &with)
}

/// Tests for the set algebra.
#[cfg(test)]
mod algebra {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ranks() -> Set {
        set!["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"]
    }

    fn suits() -> Set {
        set!["♠", "♥", "♦", "♣"]
    }

    #[test]
    fn subsets() {
        let small = set![1, 2];
        let large = set![1, 2, 3];

        assert!(is_subset(&small, &large));
        assert!(is_proper_subset(&small, &large));
        assert!(is_superset(&large, &small));
        assert!(!is_subset(&large, &small));

        assert!(is_subset(&large, &large));
        assert!(!is_proper_subset(&large, &large));
        assert!(equivalent(&large, &set![3, 2, 1]));
        assert!(!equivalent(&small, &large));

        assert!(is_subset(&Set::empty(), &small));
    }

    #[test]
    fn union_intersection() {
        let fst = set![1, 2, 3];
        let snd = set![3, 4];

        assert_eq!(union(&fst, &snd), set![1, 2, 3, 4]);
        assert_eq!(intersection(&fst, &snd), set![3]);
        assert_eq!(intersection(&snd, &fst), set![3]);
        assert_eq!(intersection(&fst, &Set::empty()), Set::empty());
    }

    #[test]
    fn complement_is_relative() {
        let fst = set![1, 2, 3];
        let snd = set![3, 4];

        assert_eq!(complement(&fst, &snd), set![1, 2]);
        assert_eq!(complement(&snd, &fst), set![4]);
        assert_eq!(complement(&fst, &fst), Set::empty());
    }

    /// Results never alias their operands.
    #[test]
    fn results_are_independent() {
        let fst = set![1, 2];
        let snd = set![2, 3];

        let mut copy = clone(&fst);
        copy.add(5);
        assert_eq!(fst, set![1, 2]);

        let mut joined = union(&fst, &snd);
        joined.remove(&Element::from(1));
        assert!(fst.contains(&Element::from(1)));
    }

    #[test]
    fn deck() {
        let deck = cartesian_product(&ranks(), &suits());
        assert_eq!(deck.cardinality(), 52);
        assert!(deck.contains(&Element::from(Tuple::new("A", "♠"))));
        assert!(!deck.contains(&Element::from(Tuple::new("♠", "A"))));

        assert_eq!(union(&ranks(), &suits()).cardinality(), 17);
    }

    #[test]
    fn cartesian_product_empty() {
        assert!(cartesian_product(&set![1, 2], &Set::empty()).is_empty());
        assert!(cartesian_product(&Set::empty(), &set![1, 2]).is_empty());
    }

    #[test]
    fn power_set_empty() {
        let power = power_set(&Set::empty());
        assert_eq!(power.cardinality(), 1);
        assert!(power.contains(&Element::from(Set::empty())));
    }

    #[test]
    fn power_set_small() {
        let power = power_set(&set![1, 2, 3]);
        assert_eq!(
            power,
            set![
                set![],
                set![1],
                set![2],
                set![3],
                set![1, 2],
                set![1, 3],
                set![2, 3],
                set![1, 2, 3]
            ]
        );
    }

    #[test]
    fn power_set_nested() {
        // 𝒫(𝒫(Ø)) = {Ø, {Ø}}
        let power = power_set(&power_set(&Set::empty()));
        assert_eq!(power, set![set![], set![set![]]]);

        assert_eq!(power_set(&power).cardinality(), 4);
    }
}
