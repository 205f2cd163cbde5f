//! # Tarn
//!
//! Lazy, typed-error effect descriptions for Rust: compose now, run
//! later.
//!
//! The core type is [`Io<E, T>`], an immutable description of a
//! computation that may fail with a typed `E` or produce a `T`.
//! Building one performs no work; combinators wrap descriptions in
//! further descriptions, and awaiting [`run`](Io::run) walks the tree.
//! Around it sit the collaborator types: [`Either`] as the outcome sum
//! type, [`Validated`] for accumulating validation, and small bridges
//! from `Option` and `Result`.
//!
//! ## Quick start
//!
//! ```
//! use std::time::Duration;
//! use tarn::{par, Either, Io};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Descriptions are inert until run.
//! let fetch = |name: &'static str| -> Io<String, String> {
//!     Io::effect_total(move || async move {
//!         tokio::time::sleep(Duration::from_millis(10)).await;
//!         format!("{name}: ok")
//!     })
//! };
//!
//! let combined = par(vec![fetch("users"), fetch("posts")])
//!     .timeout(Duration::from_secs(1), |_| "deadline".to_string())
//!     .map(|reports| reports.join(", "));
//!
//! assert_eq!(
//!     combined.run().await,
//!     Either::Right("users: ok, posts: ok".to_string())
//! );
//! # }
//! ```
//!
//! ## Failure model
//!
//! Typed errors flow through `E` and are handled with
//! [`recover`](Io::recover), [`map_err`](Io::map_err), and
//! [`flat_map_err`](Io::flat_map_err). Panics model defects and are
//! caught only at three boundaries: the [`effect`](Io::effect) leaf,
//! the [`par`] fan-in, and [`bracket`](Io::bracket). Everywhere else a
//! panic is a programming error and unwinds to the run site.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod io;
pub mod option_ext;
pub mod prelude;
pub mod semigroup;
pub mod validated;

pub use either::Either;
pub use io::{par, Io, Panic, Task, Unfailing, Unproductive};
pub use option_ext::OptionExt;
pub use semigroup::Semigroup;
pub use validated::{
    combine2, combine3, combine4, combine5, combine6, combine7, combine8, Validated,
};
