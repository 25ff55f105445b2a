//! Errors shared by the collection types.

use derive_more::{Display, Error};

/// An index was used that doesn't refer to an element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}
