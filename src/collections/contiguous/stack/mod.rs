//! A module containing [`Stack`], a last in, first out container.
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;

pub use stack::*;
