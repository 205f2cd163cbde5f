//! Side-effecting leaves.

use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::panic::Panic;

/// A throwing effectful computation.
///
/// The panic boundary covers both the closure call and the future it
/// returns; a panic from either side becomes the effect's [`Panic`]
/// error rather than unwinding through the evaluator.
pub(crate) struct EffectFn<T> {
    pub(crate) thunk: Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>,
}

impl<T> Node<Panic, T> for EffectFn<T>
where
    T: Send,
{
    fn eval(&self) -> BoxFuture<'_, Either<Panic, T>> {
        Box::pin(async move {
            let fut = match catch_unwind(AssertUnwindSafe(|| (self.thunk)())) {
                Ok(fut) => fut,
                Err(payload) => return Either::Left(Panic::new(payload)),
            };
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(value) => Either::Right(value),
                Err(payload) => Either::Left(Panic::new(payload)),
            }
        })
    }
}

/// An effectful computation that must not panic.
///
/// No boundary here: a panic from the closure is a programming error and
/// unwinds straight through to the run site.
pub(crate) struct EffectTotal<T> {
    pub(crate) thunk: Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>,
}

impl<E, T> Node<E, T> for EffectTotal<T>
where
    T: Send,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { Either::Right((self.thunk)().await) })
    }
}
