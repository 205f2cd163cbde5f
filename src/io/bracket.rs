//! Resource safety: acquire, use, release.

use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::panic::Panic;
use crate::io::Io;

/// Scoped resource acquisition with guaranteed release.
///
/// Evaluation order is acquire, use, release. Once acquire has returned
/// a resource, release runs on every exit path before the outcome is
/// reported. An acquire panic is the effect's failure and neither use
/// nor release runs.
///
/// A panic raised by release is logged and discarded; the use outcome is
/// always what the caller sees. Cleanup is best-effort and must not mask
/// the failure that made it necessary.
pub(crate) struct Bracket<R, T> {
    pub(crate) acquire: Box<dyn Fn() -> R + Send + Sync>,
    pub(crate) use_fn: Box<dyn Fn(&R) -> BoxFuture<'static, T> + Send + Sync>,
    pub(crate) release: Box<dyn Fn(R) + Send + Sync>,
}

impl<R, T> Node<Panic, T> for Bracket<R, T>
where
    R: Send + Sync,
    T: Send,
{
    fn eval(&self) -> BoxFuture<'_, Either<Panic, T>> {
        Box::pin(async move {
            let resource = match catch_unwind(AssertUnwindSafe(|| (self.acquire)())) {
                Ok(resource) => resource,
                Err(payload) => return Either::Left(Panic::new(payload)),
            };
            let outcome = match catch_unwind(AssertUnwindSafe(|| (self.use_fn)(&resource))) {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(payload) => Err(payload),
            };
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| (self.release)(resource))) {
                let defect = Panic::new(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!("bracket release panicked: {}", defect);
                #[cfg(not(feature = "tracing"))]
                eprintln!("bracket release panicked: {defect}");
            }
            match outcome {
                Ok(value) => Either::Right(value),
                Err(payload) => Either::Left(Panic::new(payload)),
            }
        })
    }
}

/// Effect-level before/body/after sequencing.
///
/// `before` gates everything: its failure short-circuits and neither the
/// body nor `after` runs. Once `before` succeeds, `after` runs whatever
/// the body does. A body failure wins over an `after` failure; a
/// succeeding body keeps its value unless `after` fails.
pub(crate) struct Brace<E: 'static, B: 'static, T: 'static, F> {
    pub(crate) before: Io<E, B>,
    pub(crate) body: Io<E, T>,
    pub(crate) after: F,
}

impl<E, B, T, F> Node<E, T> for Brace<E, B, T, F>
where
    E: Send + 'static,
    B: Send + 'static,
    T: Send + 'static,
    F: Fn(B) -> Io<E, ()> + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            let setup = match self.before.eval().await {
                Either::Left(error) => return Either::Left(error),
                Either::Right(setup) => setup,
            };
            let body_outcome = self.body.eval().await;
            let cleanup = (self.after)(setup);
            let cleanup_outcome = cleanup.eval().await;
            match (body_outcome, cleanup_outcome) {
                (Either::Left(error), _) => Either::Left(error),
                (Either::Right(_), Either::Left(error)) => Either::Left(error),
                (Either::Right(value), Either::Right(())) => Either::Right(value),
            }
        })
    }
}
