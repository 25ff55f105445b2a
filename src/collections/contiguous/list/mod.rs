//! A module containing [`List`] and associated types.
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`], and owned iteration uses [`IntoIter`](std::vec::IntoIter) from [`std::vec`].
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;
#[cfg(feature = "parallel")]
mod parallel;
mod tests;

pub use list::*;
