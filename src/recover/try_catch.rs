use std::any::Any;
use std::fmt::{self, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};

use derive_more::IsVariant;
use tracing::debug;

/// A failure intercepted while running a procedure through [`TryCatch`].
#[derive(Debug, IsVariant)]
pub enum Caught<E> {
    /// The procedure returned this error.
    Raised(E),
    /// The procedure panicked with this payload.
    Panicked(Box<dyn Any + Send>),
}

impl<E> Caught<E> {
    /// Returns the panic message, if this is a panic whose payload is a string. Panics created by
    /// [`panic!`] with a message always are.
    pub fn message(&self) -> Option<&str> {
        match self {
            Caught::Raised(_) => None,
            Caught::Panicked(payload) => payload
                .downcast_ref::<&'static str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str)),
        }
    }

    /// Returns the raised error, discarding a panic payload.
    pub fn into_raised(self) -> Option<E> {
        match self {
            Caught::Raised(error) => Some(error),
            Caught::Panicked(_) => None,
        }
    }

    /// Returns the panic payload, discarding a raised error.
    pub fn into_panic(self) -> Option<Box<dyn Any + Send>> {
        match self {
            Caught::Raised(_) => None,
            Caught::Panicked(payload) => Some(payload),
        }
    }
}

impl<E: Display> Display for Caught<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Caught::Raised(error) => write!(f, "{error}"),
            Caught::Panicked(_) => match self.message() {
                Some(message) => write!(f, "panicked: {message}"),
                None => write!(f, "panicked with a non-string payload"),
            },
        }
    }
}

/// A procedure waiting to be run by [`catch`](TryCatch::catch) or
/// [`outcome`](TryCatch::outcome). Created with [`attempt`].
#[must_use = "the procedure doesn't run until `catch` or `outcome` is called"]
pub struct TryCatch<F> {
    procedure: F,
}

/// Wraps `procedure` so that its failures can be caught.
///
/// # Examples
/// ```
/// # use container_kit::collections::contiguous::List;
/// # use container_kit::recover::attempt;
/// let list = List::from([1, 2, 3]);
/// let mut caught = None;
/// attempt(|| Ok::<_, ()>(*list.get(5))).catch(|failure| {
///     caught = failure.message().map(str::to_owned);
/// });
/// assert_eq!(caught.as_deref(), Some("Index 5 out of bounds for collection with 3 elements!"));
/// ```
pub fn attempt<F, T, E>(procedure: F) -> TryCatch<F>
where
    F: FnOnce() -> Result<T, E>,
{
    TryCatch { procedure }
}

/// Fails the surrounding procedure with `error`. Inside an [`attempt`] this reaches the handler as
/// [`Caught::Raised`].
pub fn raise<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

impl<F, T, E> TryCatch<F>
where
    F: FnOnce() -> Result<T, E>,
{
    /// Runs the procedure, returning its value or the failure that stopped it.
    ///
    /// The procedure is treated as unwind safe. If it panics part way through mutating something
    /// it borrowed, that value may be left in an intermediate state.
    pub fn outcome(self) -> Result<T, Caught<E>> {
        let caught = match panic::catch_unwind(AssertUnwindSafe(self.procedure)) {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(error)) => Caught::Raised(error),
            Err(payload) => Caught::Panicked(payload),
        };

        debug!(
            panicked = caught.is_panicked(),
            message = caught.message(),
            "caught a failed procedure"
        );
        Err(caught)
    }

    /// Runs the procedure. If it fails, `handler` is called exactly once with the failure and
    /// [`None`] is returned. Otherwise `handler` is never called and the procedure's value is
    /// returned.
    pub fn catch<H: FnOnce(Caught<E>)>(self, handler: H) -> Option<T> {
        match self.outcome() {
            Ok(value) => Some(value),
            Err(caught) => {
                handler(caught);
                None
            },
        }
    }
}
