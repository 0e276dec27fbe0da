//! Transformation and chaining combinators

use super::Optional;

impl<T> Optional<T> {
    /// Apply `mapper` to the contained value, keeping the same type
    ///
    /// `Empty` propagates untouched and `mapper` is not invoked.
    #[inline]
    pub fn map<F>(self, mapper: F) -> Optional<T>
    where
        F: FnOnce(T) -> T,
    {
        self.map_to(mapper)
    }

    /// Apply `mapper` to the contained value, producing an optional of another type
    #[inline]
    pub fn map_to<R, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(v) => Optional::Present(mapper(v)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// [`map_to`](Optional::map_to) specialized to `String`
    pub fn map_to_string<F>(self, mapper: F) -> Optional<String>
    where
        F: FnOnce(T) -> String,
    {
        self.map_to(mapper)
    }

    /// [`map_to`](Optional::map_to) specialized to `i64`
    pub fn map_to_int<F>(self, mapper: F) -> Optional<i64>
    where
        F: FnOnce(T) -> i64,
    {
        self.map_to(mapper)
    }

    /// [`map_to`](Optional::map_to) specialized to `bool`
    pub fn map_to_bool<F>(self, mapper: F) -> Optional<bool>
    where
        F: FnOnce(T) -> bool,
    {
        self.map_to(mapper)
    }

    /// Map the contained value, or return `default` if empty
    #[inline]
    pub fn map_or<R, F>(self, default: R, mapper: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(v) => mapper(v),
            Optional::Empty => default,
        }
    }

    /// Map the contained value, or compute a fallback with `supplier` if empty
    #[inline]
    pub fn map_or_else<R, D, F>(self, supplier: D, mapper: F) -> R
    where
        D: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(v) => mapper(v),
            Optional::Empty => supplier(),
        }
    }

    /// Map the contained value, or return `R::default()` if empty
    #[inline]
    pub fn map_or_default<R, F>(self, mapper: F) -> R
    where
        R: Default,
        F: FnOnce(T) -> R,
    {
        self.map_or_else(R::default, mapper)
    }

    /// Keep the value only if it satisfies `predicate`
    ///
    /// The predicate is never invoked on an `Empty` optional.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Optional::Present(v) = self {
            if predicate(&v) {
                return Optional::Present(v);
            }
        }
        Optional::Empty
    }

    /// Chain a lookup that may itself come back empty
    ///
    /// # Example
    /// ```rust
    /// use nilo::Optional;
    ///
    /// fn half(n: u32) -> Optional<u32> {
    ///     if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() }
    /// }
    ///
    /// assert_eq!(Optional::of(8).and_then(half).and_then(half), Optional::of(2));
    /// assert!(Optional::of(6).and_then(half).and_then(half).is_empty());
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Empty => Optional::Empty,
        }
    }
}
