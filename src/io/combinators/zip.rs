//! Pairwise sequential combination.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Evaluates left then right, combining both successes.
///
/// Strictly sequential and left-biased on failure: when the left effect
/// fails, the right effect is never evaluated. Concurrent combination is
/// [`par`](crate::par), not this node.
pub(crate) struct ZipWith<E: 'static, A: 'static, B: 'static, F> {
    pub(crate) left: Io<E, A>,
    pub(crate) right: Io<E, B>,
    pub(crate) f: F,
}

impl<E, A, B, T, F> Node<E, T> for ZipWith<E, A, B, F>
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    T: Send,
    F: Fn(A, B) -> T + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            let a = match self.left.eval().await {
                Either::Left(error) => return Either::Left(error),
                Either::Right(a) => a,
            };
            match self.right.eval().await {
                Either::Left(error) => Either::Left(error),
                Either::Right(b) => Either::Right((self.f)(a, b)),
            }
        })
    }
}
