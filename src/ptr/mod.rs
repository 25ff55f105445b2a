//! Explicit nullability for pointer-like values.
//!
//! Rather than inspecting a value at runtime to decide whether it's a null pointer, anything that
//! can be absent implements [`Nullable`], which states through its type whether a value may be
//! missing and how to reach the value it points to. [`equal`] builds the usual "both null, or both
//! pointing at equal values" comparison on top of that.

mod nullable;

pub use nullable::*;
