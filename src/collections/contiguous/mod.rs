//! Contiguous collection types. [`List`] for arbitrary positional access, and [`Queue`] and
//! [`Stack`] for access restricted to the ends.
#![warn(missing_docs)]

#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "list")]
#[doc(inline)]
pub use list::List;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::Queue;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;
