//! Lazy, typed-error effect descriptions.
//!
//! An [`Io<E, T>`] is an immutable description of a computation that,
//! when run, either fails with an `E` or produces a `T`. Nothing happens
//! at construction time: combinators only wrap nodes in further nodes,
//! and the tree is walked when [`run`](Io::run) is awaited. The same
//! description can be run any number of times; each run re-executes its
//! effects from scratch.
//!
//! Two channels carry failure. Typed errors travel through `E` and are
//! recoverable with [`recover`](Io::recover) and friends. Panics model
//! defects: they are caught only at the [`effect`](Io::effect) leaf, the
//! [`par`](crate::par) fan-in, and [`bracket`](Io::bracket), and
//! anywhere else they unwind straight through to the run site.
//!
//! # Examples
//!
//! ```
//! use tarn::{Either, Io};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let program: Io<String, u32> = Io::succeed_with(|| 20)
//!     .map(|n| n + 1)
//!     .and_then(|n| {
//!         if n % 2 == 1 {
//!             Io::succeed_with(move || n * 2)
//!         } else {
//!             Io::fail_with(move || format!("{n} is even"))
//!         }
//!     });
//!
//! assert_eq!(program.run().await, Either::Right(42));
//! # }
//! ```

mod bracket;
mod combinators;
mod node;
mod panic;
mod parallel;

#[cfg(test)]
mod tests;

pub use panic::Panic;
pub use parallel::par;

use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::time::error::Elapsed;

use crate::either::Either;

use bracket::{Bracket, Brace};
use combinators::{
    AndThen, CoalesceFail, EffectFn, EffectTotal, Fail, FailWith, FilterOrFail, Map, MapErr,
    OnHandle, Recover, Succeed, SucceedWith, Tap, TapErr, Timeout, ZipWith,
};
use node::Node;

/// An effect that panics on failure instead of carrying a typed error.
///
/// This is the shape of effects wrapping arbitrary fallible host
/// operations; narrow the defect back to a typed error with
/// [`refine_or_die`](Io::refine_or_die).
pub type Task<T> = Io<Panic, T>;

/// An effect that cannot fail.
pub type Unfailing<T> = Io<Infallible, T>;

/// An effect that cannot produce a value, only fail.
pub type Unproductive<E> = Io<E, Infallible>;

/// A lazy description of a computation that may fail with `E` or
/// produce a `T`.
///
/// Cheap to clone: the handle shares the underlying node tree.
pub struct Io<E: 'static, T: 'static> {
    node: Arc<dyn Node<E, T>>,
}

impl<E: 'static, T: 'static> Clone for Io<E, T> {
    fn clone(&self) -> Self {
        Io {
            node: Arc::clone(&self.node),
        }
    }
}

impl<E: 'static, T: 'static> fmt::Debug for Io<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Io").finish_non_exhaustive()
    }
}

impl<E: 'static, T: 'static> Io<E, T> {
    pub(crate) fn from_node<N>(node: N) -> Self
    where
        N: Node<E, T> + 'static,
    {
        Io {
            node: Arc::new(node),
        }
    }

    pub(crate) fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        self.node.eval()
    }
}

impl<E, T> Io<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    /// An effect that succeeds with a clone of the value on each run.
    pub fn succeed(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Io::from_node(Succeed { value })
    }

    /// An effect that succeeds by invoking the thunk, once per run.
    pub fn succeed_with<F>(thunk: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Io::from_node(SucceedWith { thunk })
    }

    /// An effect that fails with a clone of the error on each run.
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Io::from_node(Fail { error })
    }

    /// An effect that fails by invoking the thunk, once per run.
    pub fn fail_with<F>(thunk: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        Io::from_node(FailWith { thunk })
    }

    /// Lifts an effectful computation that is guaranteed not to panic.
    ///
    /// No panic boundary is installed. A panic from the closure or its
    /// future is a programming error and unwinds to the run site
    /// instead of becoming a failure. Use [`Io::effect`] for fallible
    /// host operations.
    pub fn effect_total<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let thunk: Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync> =
            Box::new(move || Box::pin(f()));
        Io::from_node(EffectTotal { thunk })
    }

    /// Lifts an already-computed outcome into an effect.
    pub fn from_either(either: Either<E, T>) -> Self
    where
        E: Clone + Sync,
        T: Clone + Sync,
    {
        match either {
            Either::Left(error) => Io::fail(error),
            Either::Right(value) => Io::succeed(value),
        }
    }

    /// Lifts an already-computed `Result` into an effect.
    pub fn from_result(result: Result<T, E>) -> Self
    where
        E: Clone + Sync,
        T: Clone + Sync,
    {
        Io::from_either(result.into())
    }

    /// Runs the description to completion in the current context.
    pub async fn run(&self) -> Either<E, T> {
        self.eval().await
    }

    /// Runs the description on the given runtime handle.
    pub async fn run_on(&self, handle: Handle) -> Either<E, T> {
        self.clone().on(handle).run().await
    }

    /// Transforms the success value.
    pub fn map<U, F>(self, f: F) -> Io<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Io::from_node(Map { inner: self, f })
    }

    /// Sequences a dependent effect after this one.
    ///
    /// When this effect fails, the continuation is never invoked and the
    /// failure short-circuits through.
    pub fn and_then<U, F>(self, f: F) -> Io<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> Io<E, U> + Send + Sync + 'static,
    {
        Io::from_node(AndThen { inner: self, f })
    }

    /// Transforms the error value.
    pub fn map_err<E2, F>(self, f: F) -> Io<E2, T>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        Io::from_node(MapErr { inner: self, f })
    }

    /// Handles a failure by running the effect the handler produces.
    ///
    /// A success passes through and the handler is never invoked.
    pub fn recover<E2, F>(self, f: F) -> Io<E2, T>
    where
        E2: Send + 'static,
        F: Fn(E) -> Io<E2, T> + Send + Sync + 'static,
    {
        Io::from_node(Recover { inner: self, f })
    }

    /// Replaces a failure with the failure of a fresh effect.
    ///
    /// The handler can only fail, so this rewrites the error channel
    /// effectfully without touching the success path.
    pub fn flat_map_err<E2, F>(self, f: F) -> Io<E2, T>
    where
        E2: Send + 'static,
        F: Fn(E) -> Unproductive<E2> + Send + Sync + 'static,
    {
        self.recover(move |error| f(error).into_productive())
    }

    /// Combines this effect's value with another's, sequentially.
    ///
    /// Left runs first; its failure skips the right effect entirely.
    /// For concurrent combination use [`par`](crate::par).
    pub fn zip_with<B, U, F>(self, other: Io<E, B>, f: F) -> Io<E, U>
    where
        B: Send + 'static,
        U: Send + 'static,
        F: Fn(T, B) -> U + Send + Sync + 'static,
    {
        Io::from_node(ZipWith {
            left: self,
            right: other,
            f,
        })
    }

    /// Pairs this effect's value with another's, sequentially.
    pub fn zip<B>(self, other: Io<E, B>) -> Io<E, (T, B)>
    where
        B: Send + 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Enforces a deadline on this effect's evaluation.
    ///
    /// On expiry the in-flight evaluation is cancelled and the elapsed
    /// signal is converted into this effect's error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use tarn::{Either, Io};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let slow: Io<String, ()> = Io::effect_total(|| async {
    ///     tokio::time::sleep(Duration::from_secs(60)).await;
    /// });
    /// let bounded = slow.timeout(Duration::from_millis(10), |_| "too slow".to_string());
    /// assert_eq!(bounded.run().await, Either::Left("too slow".to_string()));
    /// # }
    /// ```
    pub fn timeout<F>(self, after: Duration, on_timeout: F) -> Io<E, T>
    where
        F: Fn(Elapsed) -> E + Send + Sync + 'static,
    {
        Io::from_node(Timeout {
            inner: self,
            after,
            on_timeout,
        })
    }

    /// Evaluates this effect on the given runtime.
    pub fn on(self, handle: Handle) -> Io<E, T> {
        Io::from_node(OnHandle {
            handle,
            inner: self,
        })
    }

    /// Converts a success that fails the predicate into a failure.
    pub fn filter_or_fail<P, F>(self, predicate: P, or_fail: F) -> Io<E, T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(T) -> E + Send + Sync + 'static,
    {
        Io::from_node(FilterOrFail {
            inner: self,
            predicate,
            or_fail,
        })
    }

    /// Runs a side effect against the success value, passing it through.
    ///
    /// The closure's result is discarded; failures pass through without
    /// it being invoked.
    pub fn for_each<F>(self, f: F) -> Io<E, T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.map(move |value| {
            f(&value);
            value
        })
    }

    /// Peeks at the success value with a probe effect.
    ///
    /// The probe's entire outcome is discarded, failure included; the
    /// original success always passes through.
    pub fn tap<E2, U, F>(self, f: F) -> Io<E, T>
    where
        T: Sync,
        E2: Send + 'static,
        U: Send + 'static,
        F: Fn(&T) -> Io<E2, U> + Send + Sync + 'static,
    {
        let probe = move |value: &T| -> BoxFuture<'static, ()> {
            let effect = f(value);
            Box::pin(async move {
                let _ = effect.eval().await;
            })
        };
        Io::from_node(Tap { inner: self, probe })
    }

    /// Peeks at the error value with a probe effect.
    ///
    /// The probe's entire outcome is discarded, failure included; the
    /// original failure always passes through.
    pub fn tap_err<E2, U, F>(self, f: F) -> Io<E, T>
    where
        E: Sync,
        E2: Send + 'static,
        U: Send + 'static,
        F: Fn(&E) -> Io<E2, U> + Send + Sync + 'static,
    {
        let probe = move |error: &E| -> BoxFuture<'static, ()> {
            let effect = f(error);
            Box::pin(async move {
                let _ = effect.eval().await;
            })
        };
        Io::from_node(TapErr { inner: self, probe })
    }

    /// Collapses this effect into one that can only fail.
    ///
    /// A success is converted into an error through `if_success`; a
    /// failure passes through.
    pub fn coalesce_fail<F>(self, if_success: F) -> Unproductive<E>
    where
        F: Fn(T) -> E + Send + Sync + 'static,
    {
        Io::from_node(CoalesceFail {
            inner: self,
            if_success,
        })
    }

    /// Runs this effect between a setup effect and a cleanup effect.
    ///
    /// `before` gates everything: on its failure, neither the body nor
    /// the cleanup runs. Once setup has succeeded, the cleanup built
    /// from its value always runs. A body failure wins over a cleanup
    /// failure; a cleanup failure overrides a body success; otherwise
    /// the body's value is returned and the cleanup's is discarded.
    pub fn brace<B, F>(self, before: Io<E, B>, after: F) -> Io<E, T>
    where
        B: Send + 'static,
        F: Fn(B) -> Io<E, ()> + Send + Sync + 'static,
    {
        Io::from_node(Brace {
            before,
            body: self,
            after,
        })
    }
}

impl<T> Io<Panic, T>
where
    T: Send + 'static,
{
    /// Lifts a fallible effectful computation.
    ///
    /// The closure and the future it returns run under a panic
    /// boundary; a panic from either becomes the effect's [`Panic`]
    /// error instead of unwinding through the evaluator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarn::{Either, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let risky: Task<i32> = Task::effect(|| async { "7".parse::<i32>().unwrap() });
    /// assert!(matches!(risky.run().await, Either::Right(7)));
    ///
    /// let doomed: Task<i32> = Task::effect(|| async { "x".parse::<i32>().unwrap() });
    /// assert!(doomed.run().await.is_left());
    /// # }
    /// ```
    pub fn effect<F, Fut>(f: F) -> Task<T>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let thunk: Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync> =
            Box::new(move || Box::pin(f()));
        Io::from_node(EffectFn { thunk })
    }

    /// Acquires a resource, uses it, and releases it on every exit path.
    ///
    /// If `acquire` panics, that is the failure and neither `use_fn`
    /// nor `release` runs. Once acquired, `release` runs exactly once
    /// whether `use_fn` returns or panics. A `release` panic is logged
    /// and discarded so it cannot mask the use outcome.
    pub fn bracket<R, A, U, UFut, Rel>(acquire: A, use_fn: U, release: Rel) -> Task<T>
    where
        R: Send + Sync + 'static,
        A: Fn() -> R + Send + Sync + 'static,
        U: Fn(&R) -> UFut + Send + Sync + 'static,
        UFut: Future<Output = T> + Send + 'static,
        Rel: Fn(R) + Send + Sync + 'static,
    {
        let use_fn = move |resource: &R| -> BoxFuture<'static, T> { Box::pin(use_fn(resource)) };
        Io::from_node(Bracket {
            acquire: Box::new(acquire),
            use_fn: Box::new(use_fn),
            release: Box::new(release),
        })
    }

    /// Narrows the defect to a concrete error type.
    ///
    /// When the caught payload is an `X`, it becomes the typed error.
    /// Any other payload is a fatal mismatch: the panic is resumed and
    /// evaluation aborts rather than producing a recoverable failure.
    pub fn refine_or_die<X>(self) -> Io<X, T>
    where
        X: Any + Send + 'static,
    {
        self.map_err(|panic: Panic| match panic.downcast::<X>() {
            Ok(error) => error,
            Err(panic) => panic.resume(),
        })
    }
}

impl<T> Io<Infallible, T>
where
    T: Send + 'static,
{
    /// Widens the error channel of an effect that cannot fail.
    pub fn into_failable<E>(self) -> Io<E, T>
    where
        E: Send + 'static,
    {
        self.map_err(|never| match never {})
    }
}

impl<E> Io<E, Infallible>
where
    E: Send + 'static,
{
    /// Widens the value channel of an effect that cannot succeed.
    pub fn into_productive<T>(self) -> Io<E, T>
    where
        T: Send + 'static,
    {
        self.map(|never| match never {})
    }
}
