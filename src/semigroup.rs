//! Associative combination of values.
//!
//! A semigroup is a type with an associative `combine` operation. It is
//! what lets [`Validated`](crate::Validated) accumulate errors instead of
//! stopping at the first one: each failure channel merges into the next
//! with `combine`.

/// A type with an associative binary operation.
///
/// Law: `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    /// Combines two values into one.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vec_combine_is_associative(
            a in proptest::collection::vec(any::<i32>(), 0..8),
            b in proptest::collection::vec(any::<i32>(), 0..8),
            c in proptest::collection::vec(any::<i32>(), 0..8),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn string_combine_is_associative(a in ".*", b in ".*", c in ".*") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }

    #[test]
    fn vec_combine_preserves_order() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }
}
