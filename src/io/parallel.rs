//! Concurrent fan-out/fan-in.

use std::any::Any;

use futures::future::{self, BoxFuture};
use tokio::task::JoinHandle;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// How a spawned evaluation came back.
///
/// The single decode point for join outcomes: a typed failure and a task
/// panic travel different channels and must never be conflated.
enum FanOutError<E> {
    Typed(E),
    Panicked(Box<dyn Any + Send + 'static>),
}

/// Runs every effect concurrently on the ambient runtime.
pub(crate) struct Par<E: 'static, T: 'static> {
    pub(crate) effects: Vec<Io<E, T>>,
}

impl<E, T> Node<E, Vec<T>> for Par<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, Vec<T>>> {
        Box::pin(async move {
            let tasks: Vec<JoinHandle<Either<E, T>>> = self
                .effects
                .iter()
                .map(|effect| {
                    let effect = effect.clone();
                    tokio::spawn(async move { effect.eval().await })
                })
                .collect();

            let settled = future::try_join_all(tasks.into_iter().map(|task| async move {
                match task.await {
                    Ok(Either::Right(value)) => Ok(value),
                    Ok(Either::Left(error)) => Err(FanOutError::Typed(error)),
                    Err(join) if join.is_panic() => Err(FanOutError::Panicked(join.into_panic())),
                    Err(_) => Err(FanOutError::Panicked(Box::new("parallel task cancelled"))),
                }
            }))
            .await;

            match settled {
                Ok(values) => Either::Right(values),
                Err(FanOutError::Typed(error)) => Either::Left(error),
                Err(FanOutError::Panicked(payload)) => std::panic::resume_unwind(payload),
            }
        })
    }
}

/// Evaluates every effect concurrently, collecting values in input order.
///
/// All effects share one error and one value type. On success the result
/// vector is index-ordered to match the input, regardless of completion
/// order, and the wall time tracks the slowest effect rather than the
/// sum. The first failure to surface resolves the whole combination;
/// still-running siblings are left to finish on their own rather than
/// being cancelled.
///
/// A panic inside a spawned effect is caught at the fan-in and resumed
/// at the caller, never silently dropped.
///
/// # Examples
///
/// ```
/// use tarn::{par, Either, Io};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let effects: Vec<Io<String, i32>> = (1..=3).map(|n| Io::succeed(n * 10)).collect();
/// assert_eq!(par(effects).run().await, Either::Right(vec![10, 20, 30]));
/// # }
/// ```
pub fn par<E, T>(effects: Vec<Io<E, T>>) -> Io<E, Vec<T>>
where
    E: Send + 'static,
    T: Send + 'static,
{
    Io::from_node(Par { effects })
}
