use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

#[doc(inline)]
pub use crate::collections::error::IndexOutOfBounds;
use crate::util::result::OrPanic;

/// A growable, ordered sequence of elements stored contiguously.
///
/// Insertion order is the only order a List keeps. Indices always run from `0` to `len() - 1`
/// without gaps, so inserting or removing an element shifts everything after it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
/// - `k`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `add` | `O(k)`* |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `index_of` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `find` | `O(n)` |
/// | `find_all` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, growing the buffer takes `O(n)`.
///
/// # References
/// Methods like [`get_mut`](List::get_mut) and [`find_mut`](List::find_mut) hand out references
/// straight into the List's storage, so writes through them are visible in the List. Any such
/// reference is invalidated by the next [`insert`](List::insert), [`remove`](List::remove) or
/// [`clear`](List::clear), which the borrow checker enforces by requiring `&mut self` for all of
/// them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Creates a new, empty List. Memory isn't allocated until the first element is added.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let list: List<u8> = List::new();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub const fn new() -> List<T> {
        List {
            items: Vec::new(),
        }
    }

    /// Creates a new, empty List with room for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> List<T> {
        List {
            items: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the List.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the List contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    /// list.push(1);
    /// assert!(!list.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a single element to the end of the List.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Appends every provided element to the end of the List, keeping the order they are given
    /// in. Adding nothing is a no-op.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let mut list = List::from([1, 2, 3]);
    /// list.add([4, 5, 6]);
    /// list.add(vec![7, 8]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).or_panic()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len();
        self.items.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    /// Writing through the reference changes the element held by the List.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let mut list = List::from([1, 2, 3]);
    /// *list.get_mut(1) = 20;
    /// assert_eq!(list.as_slice(), &[1, 20, 3]);
    /// ```
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).or_panic()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        self.items.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a view over all elements in their current order. An empty List gives an empty
    /// slice.
    pub const fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns a mutable view over all elements in their current order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Inserts `value` so that it ends up at `index`, moving every following element back by one.
    ///
    /// An `index` greater than or equal to the length of the List isn't an error, the value is
    /// appended instead.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let mut list = List::new();
    /// list.insert(0, 1);
    /// list.insert(1, 2);
    /// list.insert(1, 3);
    /// list.insert(0, 4);
    /// list.insert(100, 5);
    /// assert_eq!(list.as_slice(), &[4, 1, 3, 2, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        let index = cmp::min(index, self.len());
        self.items.insert(index, value);
    }

    /// Removes and returns the element at `index`, moving every following element forward by one
    /// to fill the gap.
    ///
    /// An out of bounds `index` leaves the List untouched and returns [`None`].
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove(2), Some(3));
    /// assert_eq!(list.remove(0), Some(1));
    /// assert_eq!(list.remove(3), None);
    /// assert_eq!(list.as_slice(), &[2, 4, 5]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Removes all elements from the List, dropping them. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Calls `f` with the index and a reference to each element, in ascending index order, on the
    /// current thread.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let list = List::from(["a", "b", "c"]);
    /// let mut seen = Vec::new();
    /// list.for_each(|index, item| seen.push(format!("{index}:{item}")));
    /// assert_eq!(seen, ["0:a", "1:b", "2:c"]);
    /// ```
    pub fn for_each<F: FnMut(usize, &T)>(&self, mut f: F) {
        for (index, item) in self.items.iter().enumerate() {
            f(index, item);
        }
    }

    /// Returns the index of and a reference to the first element matching `predicate`, or
    /// [`None`] if there isn't one.
    ///
    /// The reference points into the List itself rather than at a copy. See
    /// [`find_mut`](List::find_mut) to modify the match in place.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let list = List::from([1, 2, 3, 2]);
    /// assert_eq!(list.find(|&i| i == 2), Some((1, &2)));
    /// assert_eq!(list.find(|&i| i > 5), None);
    /// ```
    pub fn find<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<(usize, &T)> {
        self.items.iter().enumerate().find(|&(_, item)| predicate(item))
    }

    /// Returns the index of and a mutable reference to the first element matching `predicate`, or
    /// [`None`] if there isn't one. Writing through the reference changes the element held by the
    /// List.
    pub fn find_mut<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<(usize, &mut T)> {
        self.items.iter_mut().enumerate().find(|(_, item)| predicate(item))
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> List<T> {
    /// Returns the index of the first element equal to `item`, or [`None`] if the List doesn't
    /// contain one.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let list = List::from(["x", "y", "x"]);
    /// assert_eq!(list.index_of(&"x"), Some(0));
    /// assert_eq!(list.index_of(&"z"), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|element| element == item)
    }

    /// Returns true if the List contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T: Clone> List<T> {
    /// Returns a new List holding clones of every element that matches `predicate`, in their
    /// original relative order. `self` is left unchanged, and a List with no matches is simply
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::List;
    /// let list = List::from([1, -2, 3, -4, 5]);
    /// assert_eq!(list.find_all(|&i| i > 0).as_slice(), &[1, 3, 5]);
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn find_all<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> List<T> {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for List<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for List<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(value: [T; N]) -> Self {
        List {
            items: Vec::from(value),
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(value: Vec<T>) -> Self {
        List {
            items: value,
        }
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(value: List<T>) -> Self {
        value.items
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
