//! Values that can be stored within a [`Set`].

use crate::prelude::*;

/// A member of a [`Set`].
///
/// Elements form a closed family of value kinds. Two elements are the same member iff they compare
/// equal. For set-valued elements this means deep equivalence: two sets are equal iff every
/// member of one is a member of the other, regardless of how either was built.
///
/// The derived total order exists so that sets can be stored in sorted containers. It compares
/// kinds first (integers, strings, sets, tuples), then values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub enum Element {
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
    /// A nested set.
    Set(Set),
    /// An ordered pair.
    Tuple(Tuple),
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl Element {
    /// Whether the element is itself a set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// The element as an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The element as a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(str) => Some(str),
            _ => None,
        }
    }

    /// The element as a set.
    #[must_use]
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// The element as a tuple.
    #[must_use]
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }
}

/// Integers and strings are written bare, sets in roster notation and tuples as `(a, b)`.
impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(str) => f.write_str(str),
            Self::Set(set) => write!(f, "{set}"),
            Self::Tuple(tuple) => write!(f, "{tuple}"),
        }
    }
}

// -------------------- Tuples -------------------- //

/// An ordered pair (first, second), the element type produced by
/// [`cartesian_product`](crate::algebra::cartesian_product).
///
/// Two tuples are equal iff their components are equal position by position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple {
    /// First component.
    first: Box<Element>,
    /// Second component.
    second: Box<Element>,
}

impl Tuple {
    /// Builds the pair (first, second).
    #[must_use]
    pub fn new<A: Into<Element>, B: Into<Element>>(first: A, second: B) -> Self {
        Self {
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }

    /// The first component.
    #[must_use]
    pub fn first(&self) -> &Element {
        &self.first
    }

    /// The second component.
    #[must_use]
    pub fn second(&self) -> &Element {
        &self.second
    }

    /// Splits the pair into its components.
    #[must_use]
    pub fn into_parts(self) -> (Element, Element) {
        (*self.first, *self.second)
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.first, self.second)
    }
}

// -------------------- Typed access -------------------- //

/// A kind of value an [`Element`] may hold.
///
/// This is the checked counterpart of a downcast: [`ElementKind::extract`] returns `None` whenever
/// the element holds a different kind of value.
pub trait ElementKind {
    /// Borrows the value out of the element, if it has this kind.
    fn extract(element: &Element) -> Option<&Self>;
}

impl ElementKind for i64 {
    fn extract(element: &Element) -> Option<&Self> {
        match element {
            Element::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl ElementKind for str {
    fn extract(element: &Element) -> Option<&Self> {
        element.as_str()
    }
}

impl ElementKind for Set {
    fn extract(element: &Element) -> Option<&Self> {
        element.as_set()
    }
}

impl ElementKind for Tuple {
    fn extract(element: &Element) -> Option<&Self> {
        element.as_tuple()
    }
}
