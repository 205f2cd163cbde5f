//! Extension methods bridging `Option` into this crate's types.

use crate::either::Either;
use crate::validated::Validated;

/// Conversions from `Option` into [`Either`] and [`Validated`].
pub trait OptionExt<T> {
    /// Collapses both cases into a single value.
    fn fold<U, FN, FS>(self, on_none: FN, on_some: FS) -> U
    where
        FN: FnOnce() -> U,
        FS: FnOnce(T) -> U;

    /// Converts to an `Either`, computing the left value when absent.
    fn to_either<L, F>(self, or_left: F) -> Either<L, T>
    where
        F: FnOnce() -> L;

    /// Converts to a `Validated`, computing the errors when absent.
    fn to_validated<E, F>(self, or_invalid: F) -> Validated<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    fn fold<U, FN, FS>(self, on_none: FN, on_some: FS) -> U
    where
        FN: FnOnce() -> U,
        FS: FnOnce(T) -> U,
    {
        match self {
            Some(t) => on_some(t),
            None => on_none(),
        }
    }

    fn to_either<L, F>(self, or_left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Some(t) => Either::Right(t),
            None => Either::Left(or_left()),
        }
    }

    fn to_validated<E, F>(self, or_invalid: F) -> Validated<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(t) => Validated::Valid(t),
            None => Validated::Invalid(or_invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_handles_both_cases() {
        assert_eq!(Some(2).fold(|| 0, |n| n * 10), 20);
        assert_eq!(None::<i32>.fold(|| 0, |n| n * 10), 0);
    }

    #[test]
    fn to_either_maps_none_to_left() {
        assert_eq!(Some(1).to_either(|| "absent"), Either::Right(1));
        assert_eq!(None::<i32>.to_either(|| "absent"), Either::Left("absent"));
    }

    #[test]
    fn to_validated_maps_none_to_invalid() {
        let v: Validated<i32, Vec<&str>> = None.to_validated(|| vec!["absent"]);
        assert_eq!(v, Validated::Invalid(vec!["absent"]));
    }
}
