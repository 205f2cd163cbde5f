//! The closed set of effect-tree nodes.
//!
//! One file per family, one struct per evaluation shape. These are
//! implementation detail: user code only ever sees [`Io`](crate::Io)
//! handles produced by constructors and combinator methods.

mod and_then;
mod context;
mod effect;
mod filter;
mod map;
mod pure;
mod tap;
mod timeout;
mod zip;

pub(crate) use and_then::{AndThen, Recover};
pub(crate) use context::OnHandle;
pub(crate) use effect::{EffectFn, EffectTotal};
pub(crate) use filter::{CoalesceFail, FilterOrFail};
pub(crate) use map::{Map, MapErr};
pub(crate) use pure::{Fail, FailWith, Succeed, SucceedWith};
pub(crate) use tap::{Tap, TapErr};
pub(crate) use timeout::Timeout;
pub(crate) use zip::ZipWith;
