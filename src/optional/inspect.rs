//! Side-effecting inspection
//!
//! These never change the state of the optional they are called on.

use super::Optional;

impl<T> Optional<T> {
    /// Call `consumer` with the value if present, then return self unchanged
    ///
    /// # Example
    /// ```rust
    /// use nilo::Optional;
    ///
    /// let doubled = Optional::of(21)
    ///     .inspect(|v| tracing::debug!(value = *v, "before doubling"))
    ///     .map(|v| v * 2);
    /// assert_eq!(doubled, Optional::of(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(ref v) = self {
            consumer(v);
        }
        self
    }

    /// Consume the optional, calling `consumer` with the value if present
    #[inline]
    pub fn consume<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Present(v) = self {
            consumer(v);
        }
    }

    /// Call `action` if the optional is empty
    #[inline]
    pub fn if_empty<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
    }

    /// Call `consumer` with the value if present, otherwise call `or`
    ///
    /// Exactly one of the two closures runs.
    #[inline]
    pub fn inspect_or_else<F, G>(&self, consumer: F, or: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(v) => consumer(v),
            Optional::Empty => or(),
        }
    }
}
