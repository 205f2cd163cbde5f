//! Convenience re-exports for typical usage.
//!
//! ```
//! use tarn::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let effect: Io<String, i32> = Io::succeed_with(|| 41).map(|n| n + 1);
//! assert_eq!(effect.run().await, Either::Right(42));
//! # }
//! ```

pub use crate::either::Either;
pub use crate::io::{par, Io, Panic, Task, Unfailing, Unproductive};
pub use crate::option_ext::OptionExt;
pub use crate::semigroup::Semigroup;
pub use crate::validated::Validated;
