use std::error::Error;

pub(crate) trait OrPanic<T> {
    /// Similar to [`Result::unwrap`], but panics with the [`Display`](std::fmt::Display) message of
    /// the error itself and reports the caller's location rather than this one.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn or_panic(self) -> T;
}

impl<T, E: Error> OrPanic<T> for Result<T, E> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
