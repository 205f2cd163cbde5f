//! The defect carrier for caught panics.

use std::any::Any;
use std::fmt;

/// A caught panic payload.
///
/// Effects built with [`Io::effect`](crate::Io::effect) run their closure
/// under a panic boundary; whatever the closure threw lands here as the
/// effect's error. The payload stays available for
/// [`downcast`](Panic::downcast) so typed errors thrown as panics can be
/// recovered, and [`resume`](Panic::resume) re-raises it unchanged.
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Panic { payload }
    }

    /// The panic message, if the payload was a string.
    ///
    /// Payloads from `panic!("...")` are `String` or `&str`; anything
    /// thrown via `panic_any` yields `None`.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Attempts to recover a typed value from the payload.
    ///
    /// Returns the original `Panic` untouched when the payload is some
    /// other type.
    pub fn downcast<X: Any + Send + 'static>(self) -> Result<X, Panic> {
        match self.payload.downcast::<X>() {
            Ok(boxed) => Ok(*boxed),
            Err(payload) => Err(Panic { payload }),
        }
    }

    /// Re-raises the panic with its original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.debug_tuple("Panic").field(&msg).finish(),
            None => f.debug_struct("Panic").finish_non_exhaustive(),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "panic: {msg}"),
            None => write!(f, "panic with non-string payload"),
        }
    }
}
