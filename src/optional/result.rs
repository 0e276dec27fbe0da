//! Bridging between `Optional` and `Result`
//!
//! A failed `Result` turns into `Empty` (the error is dropped), and an
//! `Empty` turns into a caller-supplied error. The logged variants live in
//! `crate::utils::error`.

use super::Optional;
use crate::error::{OptionalError, OptionalResult};

impl<T> Optional<T> {
    /// Create an optional from the outcome of a fallible call
    ///
    /// `Ok(v)` becomes `Present(v)`; any `Err` becomes `Empty`.
    ///
    /// # Example
    /// ```rust
    /// use nilo::Optional;
    ///
    /// assert_eq!(Optional::from_result("10".parse::<i32>()), Optional::of(10));
    /// assert!(Optional::from_result("ten".parse::<i32>()).is_empty());
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Optional::Present(v),
            Err(_) => Optional::Empty,
        }
    }

    /// Chain a fallible operation on the contained value
    ///
    /// Returns `Empty` if self is empty (without calling `f`) or if `f` fails.
    #[inline]
    pub fn and_then_result<R, E, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Optional::Present(v) => Optional::from_result(f(v)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Chain a fallible operation that may also yield nothing
    ///
    /// `Ok(Some(r))` becomes `Present(r)`; `Ok(None)` and any `Err` become
    /// `Empty`.
    ///
    /// # Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use nilo::Optional;
    ///
    /// let users = HashMap::from([(1u32, "ada")]);
    /// let lookup = |raw: &str| raw.parse::<u32>().map(|id| users.get(&id).copied());
    ///
    /// assert_eq!(Optional::of("1").and_then_nullable_result(lookup), Optional::of("ada"));
    /// assert!(Optional::of("2").and_then_nullable_result(lookup).is_empty());
    /// assert!(Optional::of("x").and_then_nullable_result(lookup).is_empty());
    /// ```
    #[inline]
    pub fn and_then_nullable_result<R, E, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Result<Option<R>, E>,
    {
        self.and_then_result(f).and_then(Optional::of_nullable)
    }

    /// Borrow the value, or build an error with `err` if empty
    ///
    /// `err` is only invoked on the empty path.
    #[inline]
    pub fn or_error<E, F>(&self, err: F) -> Result<&T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => Err(err()),
        }
    }

    /// Borrow the value, or return [`OptionalError::EmptyAccess`] if empty
    #[inline]
    pub fn try_get(&self) -> OptionalResult<&T> {
        self.or_error(|| OptionalError::EmptyAccess)
    }

    /// Convert into a `Result`, using `err` for the empty case
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => Err(err),
        }
    }

    /// Convert into a `Result`, building the error lazily
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => Err(err()),
        }
    }
}

impl<T, E> Optional<Result<T, E>> {
    /// Transposes an `Optional` of a `Result` into a `Result` of an `Optional`
    #[inline]
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self {
            Optional::Present(Ok(v)) => Ok(Optional::Present(v)),
            Optional::Present(Err(e)) => Err(e),
            Optional::Empty => Ok(Optional::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct NotFound;

    fn find(id: u32) -> Result<&'static str, NotFound> {
        match id {
            1 => Ok("alice"),
            _ => Err(NotFound),
        }
    }

    #[test]
    fn test_from_result() {
        assert_eq!(*Optional::from_result(Ok::<_, NotFound>(10)).get(), 10);
        assert!(Optional::from_result(Err::<i32, _>(NotFound)).is_empty());
    }

    #[test]
    fn test_and_then_result() {
        assert_eq!(Optional::of(1).and_then_result(find), Optional::of("alice"));
        assert!(Optional::of(2).and_then_result(find).is_empty());

        let mut called = false;
        let out = Optional::<u32>::empty().and_then_result(|id| {
            called = true;
            find(id)
        });
        assert!(out.is_empty());
        assert!(!called);
    }

    fn find_nullable(id: u32) -> Result<Option<&'static str>, NotFound> {
        match id {
            1 => Ok(Some("alice")),
            2 => Ok(None),
            _ => Err(NotFound),
        }
    }

    #[test]
    fn test_and_then_nullable_result() {
        assert_eq!(
            Optional::of(1).and_then_nullable_result(find_nullable),
            Optional::of("alice")
        );
        assert!(Optional::of(2).and_then_nullable_result(find_nullable).is_empty());
        assert!(Optional::of(3).and_then_nullable_result(find_nullable).is_empty());
        assert!(Optional::<u32>::empty()
            .and_then_nullable_result(find_nullable)
            .is_empty());
    }

    #[test]
    fn test_or_error_is_lazy() {
        let mut built = 0;
        let present = Optional::of(5);
        assert_eq!(
            present.or_error(|| {
                built += 1;
                NotFound
            }),
            Ok(&5)
        );
        assert_eq!(built, 0);

        let empty: Optional<i32> = Optional::empty();
        assert_eq!(empty.or_error(|| NotFound), Err(NotFound));
    }

    #[test]
    fn test_try_get() {
        assert_eq!(*Optional::of('x').try_get().unwrap(), 'x');
        let err = Optional::<char>::empty().try_get().unwrap_err();
        assert!(matches!(err, OptionalError::EmptyAccess));
    }

    #[test]
    fn test_ok_or() {
        assert_eq!(Optional::of(1).ok_or(NotFound), Ok(1));
        assert_eq!(Optional::<i32>::empty().ok_or(NotFound), Err(NotFound));
        assert_eq!(Optional::<i32>::empty().ok_or_else(|| "missing"), Err("missing"));
    }

    #[test]
    fn test_transpose() {
        let x: Optional<Result<i32, NotFound>> = Optional::of(Ok(5));
        assert_eq!(x.transpose(), Ok(Optional::of(5)));
        let x: Optional<Result<i32, NotFound>> = Optional::of(Err(NotFound));
        assert_eq!(x.transpose(), Err(NotFound));
        let x: Optional<Result<i32, NotFound>> = Optional::empty();
        assert_eq!(x.transpose(), Ok(Optional::empty()));
    }
}
