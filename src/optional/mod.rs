//! The Optional container
//!
//! `Optional<T>` holds either exactly one value (`Present`) or nothing
//! (`Empty`). Everything else in this module is built on top of that
//! two-state invariant:
//!
//! - construction (`empty`, `of`, `of_nullable`, `from_result`, `cast`)
//! - presence queries and unwrapping with fallbacks
//! - transformation and chaining (see `map.rs`)
//! - side-effecting inspection (see `inspect.rs`)
//! - bridging to and from `Result` (see `result.rs`)
//! - trait implementations, including serde (see `impls.rs`)
//!
//! # Example
//! ```rust
//! use nilo::Optional;
//!
//! let port = Optional::of("8080")
//!     .and_then_result(|s| s.parse::<u16>())
//!     .filter(|p| *p > 1024)
//!     .or_else(3000);
//! assert_eq!(port, 8080);
//! ```

mod impls;
mod inspect;
mod map;
mod result;

use std::any::Any;
use std::mem;

use crate::error::OptionalError;

/// A value that is either present or absent
///
/// Variant order matters for the derived `Ord`: `Empty` sorts before any
/// `Present` value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Optional<T> {
    /// No value
    Empty,
    /// Some value `T`
    Present(T),
}

impl<T> Optional<T> {
    /////////////////////////////////////////////////////////////////////////
    // Construction
    /////////////////////////////////////////////////////////////////////////

    /// Create an empty optional
    #[inline]
    pub const fn empty() -> Self {
        Optional::Empty
    }

    /// Create an optional holding `value`
    #[inline]
    pub const fn of(value: T) -> Self {
        Optional::Present(value)
    }

    /// Create an optional from a nullable value
    ///
    /// `Some(v)` becomes `Present(v)` without copying, `None` becomes `Empty`.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Empty,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Presence queries
    /////////////////////////////////////////////////////////////////////////

    /// Returns `true` if a value is present
    #[must_use = "if you intended to assert that this has a value, consider `.get()` instead"]
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is present
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns `true` if a value is present and it satisfies `predicate`
    ///
    /// The predicate is never invoked on an `Empty` optional.
    #[must_use]
    pub fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => predicate(v),
            Optional::Empty => false,
        }
    }

    /// Returns `true` if empty, otherwise the result of `predicate`
    #[must_use]
    pub fn is_empty_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => predicate(v),
            Optional::Empty => true,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Unwrapping
    /////////////////////////////////////////////////////////////////////////

    /// Borrow the contained value
    ///
    /// # Panics
    ///
    /// Panics if the optional is `Empty`. Guard with [`is_present`] or use
    /// one of the fallback variants (`or_else`, `or_error`, `try_get`).
    ///
    /// [`is_present`]: Optional::is_present
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => empty_access_failed(),
        }
    }

    /// Mutably borrow the contained value
    ///
    /// # Panics
    ///
    /// Panics if the optional is `Empty`.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => empty_access_failed(),
        }
    }

    /// Move the contained value out
    ///
    /// # Panics
    ///
    /// Panics if the optional is `Empty`.
    #[inline]
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => empty_access_failed(),
        }
    }

    /// Return the contained value, or `fallback` if empty
    ///
    /// `fallback` is evaluated by the caller; use [`or_else_get`] to defer it.
    ///
    /// [`or_else_get`]: Optional::or_else_get
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => fallback,
        }
    }

    /// Return the contained value, or compute one with `supplier` if empty
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => supplier(),
        }
    }

    /// Return the contained value, panicking with `message` if empty
    ///
    /// # Panics
    ///
    /// Panics with `message` verbatim if the optional is `Empty`.
    #[inline]
    #[track_caller]
    pub fn or_panic(self, message: &str) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => expect_failed(message),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Adapters for working with references
    /////////////////////////////////////////////////////////////////////////

    /// Converts from `&Optional<T>` to `Optional<&T>`
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Borrow as a std `Option`
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }

    /// Convert into a std `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }

    /// Iterate over the contained value, if any
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_option().into_iter()
    }

    /////////////////////////////////////////////////////////////////////////
    // Boolean combinators
    /////////////////////////////////////////////////////////////////////////

    /// Returns `other` if both optionals are present, otherwise `Empty`
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match (self, other) {
            (Optional::Present(_), Optional::Present(b)) => Optional::Present(b),
            _ => Optional::Empty,
        }
    }

    /// Returns self if present, otherwise `other`
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => other,
        }
    }

    /// Returns self if present, otherwise the optional produced by `supplier`
    #[inline]
    pub fn or_with<F>(self, supplier: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => supplier(),
        }
    }

    /// Returns whichever side is present when exactly one of them is
    #[inline]
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Optional::Present(a), Optional::Empty) => Optional::Present(a),
            (Optional::Empty, Optional::Present(b)) => Optional::Present(b),
            _ => Optional::Empty,
        }
    }

    /// Pair two present values
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Optional::Present(a), Optional::Present(b)) => Optional::Present((a, b)),
            _ => Optional::Empty,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // In-place mutation
    /////////////////////////////////////////////////////////////////////////

    /// Take the value out, leaving `Empty` in its place
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        mem::replace(self, Optional::Empty)
    }

    /// Take the value out only if it satisfies `predicate`
    ///
    /// When the optional is empty or the predicate fails, the binding is left
    /// untouched and `Empty` is returned.
    pub fn take_if<P>(&mut self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if self.is_present_and(predicate) {
            self.take()
        } else {
            Optional::Empty
        }
    }

    /// Store `value`, discarding any previous content
    #[inline]
    pub fn insert(&mut self, value: T) {
        *self = Optional::Present(value);
    }

    /// Return the contained value, inserting `value` first if empty
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Return the contained value, inserting the result of `supplier` first if empty
    ///
    /// `supplier` is only invoked on an `Empty` optional.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, supplier: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Optional::Empty = *self {
            *self = Optional::Present(supplier());
        }

        match self {
            Optional::Present(v) => v,
            Optional::Empty => unreachable!(),
        }
    }
}

impl<T: Clone> Optional<T> {
    /// Store `value` and return the new state
    ///
    /// Unlike a swap, the returned optional holds the *new* value. Capture the
    /// old state with [`take`] first if it is still needed.
    ///
    /// [`take`]: Optional::take
    pub fn replace(&mut self, value: T) -> Optional<T> {
        *self = Optional::Present(value);
        self.clone()
    }
}

impl<T: Default> Optional<T> {
    /// Return the contained value, or the type's default if empty
    ///
    /// Types with a hand-written `Default` impl get that value; built-in
    /// types fall back to their zero value.
    #[inline]
    pub fn or_default(self) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => T::default(),
        }
    }

    /// Return the contained value, inserting the type's default first if empty
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T {
        self.get_or_insert_with(T::default)
    }
}

impl<T: 'static> Optional<T> {
    /// Recover a `T` from a type-erased box
    ///
    /// Returns `Empty` when the boxed value is of any other type.
    pub fn cast(value: Box<dyn Any>) -> Self {
        match value.downcast::<T>() {
            Ok(v) => Optional::Present(*v),
            Err(_) => Optional::Empty,
        }
    }
}

impl<'a, T: 'static> Optional<&'a T> {
    /// Borrow a `T` out of a type-erased reference
    pub fn cast_ref(value: &'a dyn Any) -> Self {
        Optional::of_nullable(value.downcast_ref::<T>())
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Optional::Present(inner) => inner,
            Optional::Empty => Optional::Empty,
        }
    }
}

#[inline(never)]
#[cold]
#[track_caller]
fn empty_access_failed() -> ! {
    panic!("{}", OptionalError::EmptyAccess)
}

#[inline(never)]
#[cold]
#[track_caller]
fn expect_failed(message: &str) -> ! {
    panic!("{}", message)
}
