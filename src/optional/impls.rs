//! Trait implementations for `Optional`
//!
//! Serialization follows the value-or-null convention: `Empty` encodes as
//! the format's null token and `Present(v)` as `v`'s own encoding.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Optional;

impl<T> Default for Optional<T> {
    /// Returns `Empty`
    #[inline]
    fn default() -> Optional<T> {
        Optional::Empty
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Optional<T> {
        Optional::Present(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Optional::of_nullable(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<'a, T> From<&'a Optional<T>> for Optional<&'a T> {
    fn from(o: &'a Optional<T>) -> Optional<&'a T> {
        o.as_ref()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "Present({})", v),
            Optional::Empty => f.write_str("Empty"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Encodes `Present(v)` as the encoding of `v` and `Empty` as `null`
///
/// A payload that itself encodes as `null` (`()`, `Option::None`, a nested
/// `Optional::Empty`) is indistinguishable from `Empty` on the wire, so
/// `Present(())` or `Present(None)` decode back as `Empty`. Round trips are
/// only lossless for payloads with a non-null encoding.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(v) => serializer.serialize_some(v),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The whole value is decoded before anything is constructed, so a
        // failure never yields a partial `Present`.
        Option::<T>::deserialize(deserializer).map(Optional::of_nullable)
    }
}
