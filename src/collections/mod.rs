//! Generic container types.
//!
//! # Method
//! All containers here own a single contiguous buffer. [`List`](contiguous::List) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves re-writing the read-only
//! slice functionality, while [`Queue`](contiguous::Queue) and [`Stack`](contiguous::Stack)
//! deliberately don't, so that their ends stay the only way in or out.

pub mod contiguous;
pub mod error;
