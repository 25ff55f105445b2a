//! Try/catch over fallible procedures.
//!
//! [`attempt`] wraps a procedure returning a [`Result`], and [`TryCatch::catch`] runs it, handing
//! any failure to a handler. Failures come in two forms, both delivered as a [`Caught`]: an [`Err`]
//! returned by the procedure (see [`raise`]), or a panic that unwound out of it, such as the one
//! raised by [`List::get`](crate::collections::contiguous::List::get) for an out of bounds index.
//!
//! Panics are only intercepted when the crate is built with `panic = "unwind"`, which is the
//! default. The panic hook still runs before the handler, so the usual message is printed unless
//! the hook has been replaced.

mod try_catch;

pub use try_catch::*;
