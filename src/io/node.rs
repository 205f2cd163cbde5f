//! The sealed evaluation-node trait.
//!
//! Every `Io` holds exactly one node from the fixed set defined under
//! [`combinators`](super::combinators), [`bracket`](super::bracket), and
//! [`parallel`](super::parallel). The trait is crate-private, so the set
//! of node shapes is closed: evaluation can rely on each node's contract
//! without an open-ended extension point.

use futures::future::BoxFuture;

use crate::either::Either;

/// One node of an effect tree.
///
/// `eval` borrows the node, so a description can be evaluated any number
/// of times; each call re-runs the node's effects from scratch.
pub(crate) trait Node<E, T>: Send + Sync {
    fn eval(&self) -> BoxFuture<'_, Either<E, T>>;
}
