//! A small toolkit of generic containers and the helpers that usually travel with them.
//!
//! # Contents
//! - [`List`](collections::contiguous::List): a growable ordered sequence with positional insert
//!   and remove, linear search and both sequential and parallel traversal.
//! - [`Queue`](collections::contiguous::Queue) and [`Stack`](collections::contiguous::Stack): the
//!   FIFO and LIFO restrictions of the same contiguous storage.
//! - [`ptr`]: an explicit nullability capability and equality over possibly-null values.
//! - [`recover`]: a try/catch wrapper that routes both returned errors and panics to a handler.
//!
//! # Error Handling
//! Out of range access through an indexing method such as
//! [`List::get`](collections::contiguous::List::get) is a programmer error and panics, the same way
//! slice indexing does. Every one of those methods has a `try_` counterpart returning a
//! [`Result`] with a strongly typed error for callers that would rather branch than unwind.
//! Everything else that can come up empty (searching, popping from an empty container, removing
//! past the end) returns an [`Option`] instead.
//!
//! # Features
//! Each container sits behind its own Cargo feature (`list`, `queue`, `stack`), with `parallel`
//! adding [`List::par_for_each`](collections::contiguous::List::par_for_each) on top of `rayon`.
//! `collections-all`, `ptr` and `recover` are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "ptr")]
pub mod ptr;
#[cfg(feature = "recover")]
pub mod recover;

pub(crate) mod util;
