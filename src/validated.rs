//! Accumulating validation.
//!
//! `Validated<T, E>` is how you check many things at once. Where
//! [`Either`](crate::Either) stops at the first `Left`, `Validated`
//! gathers every failure: combining two `Invalid` values merges their
//! errors with [`Semigroup::combine`](crate::Semigroup::combine), so a
//! form with three bad fields reports all three.
//!
//! # Examples
//!
//! ```
//! use tarn::Validated;
//!
//! fn name(s: &str) -> Validated<String, Vec<String>> {
//!     if s.is_empty() {
//!         Validated::invalid(vec!["name is empty".to_string()])
//!     } else {
//!         Validated::valid(s.to_string())
//!     }
//! }
//!
//! fn age(n: i64) -> Validated<i64, Vec<String>> {
//!     if (0..=130).contains(&n) {
//!         Validated::valid(n)
//!     } else {
//!         Validated::invalid(vec![format!("age {n} out of range")])
//!     }
//! }
//!
//! let both = name("").zip_with(age(-3), |n, a| (n, a));
//! assert_eq!(
//!     both,
//!     Validated::Invalid(vec![
//!         "name is empty".to_string(),
//!         "age -3 out of range".to_string(),
//!     ])
//! );
//! ```

use crate::either::Either;
use crate::semigroup::Semigroup;

/// A value that is either valid or carries accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T, E> {
    /// The validation passed.
    Valid(T),
    /// The validation failed with one or more accumulated errors.
    Invalid(E),
}

impl<T, E> Validated<T, E> {
    /// Constructs a valid value.
    pub fn valid(value: T) -> Self {
        Validated::Valid(value)
    }

    /// Constructs an invalid value.
    pub fn invalid(errors: E) -> Self {
        Validated::Invalid(errors)
    }

    /// Returns true if the validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Returns true if the validation failed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// Transforms the valid value.
    pub fn map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(t) => Validated::Valid(f(t)),
            Validated::Invalid(e) => Validated::Invalid(e),
        }
    }

    /// Transforms the accumulated errors.
    pub fn map_errors<E2, F>(self, f: F) -> Validated<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validated::Valid(t) => Validated::Valid(t),
            Validated::Invalid(e) => Validated::Invalid(f(e)),
        }
    }

    /// Sequences a dependent validation.
    ///
    /// This is fail-fast by nature: a dependent check cannot run without
    /// the value it depends on. Use [`zip_with`](Validated::zip_with) for
    /// independent checks that should accumulate.
    pub fn and_then<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        match self {
            Validated::Valid(t) => f(t),
            Validated::Invalid(e) => Validated::Invalid(e),
        }
    }

    /// Collapses both cases into a single value.
    pub fn fold<U, FI, FV>(self, on_invalid: FI, on_valid: FV) -> U
    where
        FI: FnOnce(E) -> U,
        FV: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(t) => on_valid(t),
            Validated::Invalid(e) => on_invalid(e),
        }
    }

    /// Converts to an `Either`, errors on the left.
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Validated::Valid(t) => Either::Right(t),
            Validated::Invalid(e) => Either::Left(e),
        }
    }

    /// Converts to a `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validated::Valid(t) => Ok(t),
            Validated::Invalid(e) => Err(e),
        }
    }
}

impl<T, E: Semigroup> Validated<T, E> {
    /// Combines two independent validations, accumulating errors.
    ///
    /// If both fail, the error channels merge in order.
    pub fn zip_with<U, V, F>(self, other: Validated<U, E>, f: F) -> Validated<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Validated::Valid(t), Validated::Valid(u)) => Validated::Valid(f(t, u)),
            (Validated::Invalid(e1), Validated::Invalid(e2)) => {
                Validated::Invalid(e1.combine(e2))
            }
            (Validated::Invalid(e), _) | (_, Validated::Invalid(e)) => Validated::Invalid(e),
        }
    }

    /// Pairs two independent validations.
    pub fn zip<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        self.zip_with(other, |t, u| (t, u))
    }
}

impl<T, E> From<Either<E, T>> for Validated<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Left(e) => Validated::Invalid(e),
            Either::Right(t) => Validated::Valid(t),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validated<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(t) => Validated::Valid(t),
            Err(e) => Validated::Invalid(e),
        }
    }
}

/// Combines two independent validations, accumulating every error.
pub fn combine2<A, B, Out, E, F>(a: Validated<A, E>, b: Validated<B, E>, f: F) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B) -> Out,
{
    a.zip_with(b, f)
}

/// Combines three independent validations, accumulating every error.
pub fn combine3<A, B, C, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C) -> Out,
{
    a.zip(b).zip_with(c, |(a, b), c| f(a, b, c))
}

/// Combines four independent validations, accumulating every error.
pub fn combine4<A, B, C, D, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    d: Validated<D, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C, D) -> Out,
{
    a.zip(b).zip(c).zip_with(d, |((a, b), c), d| f(a, b, c, d))
}

/// Combines five independent validations, accumulating every error.
#[allow(clippy::too_many_arguments)]
pub fn combine5<A, B, C, D, G, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    d: Validated<D, E>,
    g: Validated<G, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C, D, G) -> Out,
{
    a.zip(b)
        .zip(c)
        .zip(d)
        .zip_with(g, |(((a, b), c), d), g| f(a, b, c, d, g))
}

/// Combines six independent validations, accumulating every error.
#[allow(clippy::too_many_arguments)]
pub fn combine6<A, B, C, D, G, H, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    d: Validated<D, E>,
    g: Validated<G, E>,
    h: Validated<H, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C, D, G, H) -> Out,
{
    a.zip(b)
        .zip(c)
        .zip(d)
        .zip(g)
        .zip_with(h, |((((a, b), c), d), g), h| f(a, b, c, d, g, h))
}

/// Combines seven independent validations, accumulating every error.
#[allow(clippy::too_many_arguments)]
pub fn combine7<A, B, C, D, G, H, I, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    d: Validated<D, E>,
    g: Validated<G, E>,
    h: Validated<H, E>,
    i: Validated<I, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C, D, G, H, I) -> Out,
{
    a.zip(b)
        .zip(c)
        .zip(d)
        .zip(g)
        .zip(h)
        .zip_with(i, |(((((a, b), c), d), g), h), i| f(a, b, c, d, g, h, i))
}

/// Combines eight independent validations, accumulating every error.
#[allow(clippy::too_many_arguments)]
pub fn combine8<A, B, C, D, G, H, I, J, Out, E, F>(
    a: Validated<A, E>,
    b: Validated<B, E>,
    c: Validated<C, E>,
    d: Validated<D, E>,
    g: Validated<G, E>,
    h: Validated<H, E>,
    i: Validated<I, E>,
    j: Validated<J, E>,
    f: F,
) -> Validated<Out, E>
where
    E: Semigroup,
    F: FnOnce(A, B, C, D, G, H, I, J) -> Out,
{
    a.zip(b)
        .zip(c)
        .zip(d)
        .zip(g)
        .zip(h)
        .zip(i)
        .zip_with(j, |((((((a, b), c), d), g), h), i), j| {
            f(a, b, c, d, g, h, i, j)
        })
}
