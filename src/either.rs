//! A sum type for computations that produce one of two values.
//!
//! `Either<L, R>` is right-biased: `map`, `and_then`, and friends operate
//! on the `Right` value and pass `Left` through untouched. Effect
//! evaluation in this crate uses `Either<E, T>` as its outcome type, with
//! `Left` carrying the typed error channel.
//!
//! # Either vs Result
//!
//! `Result` bakes in an error interpretation; `Either` does not. Use
//! `Either` when both sides are meaningful outcomes, and the `From`
//! conversions when crossing into `Result`-speaking code.
//!
//! # Examples
//!
//! ```
//! use tarn::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//! ```

/// One of two possible values, biased to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left value, conventionally the error channel.
    Left(L),
    /// The right value, conventionally the success channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Constructs a left value.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Constructs a right value.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns true if this is a `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns true if this is a `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Transforms the right value, passing `Left` through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarn::Either;
    ///
    /// let e: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(e.map(|n| n + 1), Either::Right(3));
    ///
    /// let e: Either<&str, i32> = Either::Left("nope");
    /// assert_eq!(e.map(|n| n + 1), Either::Left("nope"));
    /// ```
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms the left value, passing `Right` through unchanged.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chains a computation that may itself go left.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarn::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::Right(n / 2)
    ///     } else {
    ///         Either::Left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Right(8).and_then(half).and_then(half), Either::Right(2));
    /// assert_eq!(Either::Right(6).and_then(half).and_then(half), Either::Left("3 is odd".to_string()));
    /// ```
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Chains a computation on the left value, passing `Right` through.
    ///
    /// The mirror image of [`and_then`](Either::and_then), useful for
    /// recovery pipelines.
    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Collapses both sides into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarn::Either;
    ///
    /// let e: Either<String, i32> = Either::Right(5);
    /// let msg = e.fold(|err| err, |n| format!("got {n}"));
    /// assert_eq!(msg, "got 5");
    /// ```
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Keeps the right value only if it satisfies the predicate, otherwise
    /// replaces it with the supplied left value.
    pub fn filter_or_else<P, F>(self, predicate: P, or_left: F) -> Either<L, R>
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(&R) -> L,
    {
        match self {
            Either::Right(r) if !predicate(&r) => Either::Left(or_left(&r)),
            other => other,
        }
    }

    /// Runs a side effect against the right value, returning self.
    pub fn on_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            f(r);
        }
        self
    }

    /// Runs a side effect against the left value, returning self.
    pub fn on_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Swaps the sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Returns the right value or computes one from the left.
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    /// Borrows both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Extracts the right value, if any.
    pub fn right_value(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Extracts the left value, if any.
    pub fn left_value(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens one level of right-side nesting.
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
