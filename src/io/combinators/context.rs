//! Execution-context switching.

use futures::future::BoxFuture;
use tokio::runtime::Handle;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Evaluates the inner effect on a specific runtime.
///
/// The effect is spawned onto the handle's runtime and awaited from the
/// caller's context. This is not a panic boundary: a panicking task is
/// resumed at the await site.
pub(crate) struct OnHandle<E: 'static, T: 'static> {
    pub(crate) handle: Handle,
    pub(crate) inner: Io<E, T>,
}

impl<E, T> Node<E, T> for OnHandle<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            let io = self.inner.clone();
            let task = self.handle.spawn(async move { io.eval().await });
            match task.await {
                Ok(outcome) => outcome,
                Err(join) if join.is_panic() => std::panic::resume_unwind(join.into_panic()),
                Err(_) => panic!("context-switched evaluation was cancelled externally"),
            }
        })
    }
}
