//! Pure success and failure leaves.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::io::node::Node;

/// An eager success value, cloned out on every evaluation.
pub(crate) struct Succeed<T> {
    pub(crate) value: T,
}

impl<E, T> Node<E, T> for Succeed<T>
where
    T: Clone + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { Either::Right(self.value.clone()) })
    }
}

/// A lazy success thunk, invoked once per evaluation.
pub(crate) struct SucceedWith<F> {
    pub(crate) thunk: F,
}

impl<E, T, F> Node<E, T> for SucceedWith<F>
where
    F: Fn() -> T + Send + Sync,
    T: Send,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { Either::Right((self.thunk)()) })
    }
}

/// An eager failure value, cloned out on every evaluation.
pub(crate) struct Fail<E> {
    pub(crate) error: E,
}

impl<E, T> Node<E, T> for Fail<E>
where
    E: Clone + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { Either::Left(self.error.clone()) })
    }
}

/// A lazy failure thunk, invoked once per evaluation.
pub(crate) struct FailWith<F> {
    pub(crate) thunk: F,
}

impl<E, T, F> Node<E, T> for FailWith<F>
where
    F: Fn() -> E + Send + Sync,
    E: Send,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { Either::Left((self.thunk)()) })
    }
}
