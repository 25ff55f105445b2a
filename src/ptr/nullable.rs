use std::rc::Rc;
use std::sync::Arc;

/// A value that either refers to a `Target` or is null.
///
/// Owning and borrowing pointers (`&T`, `&mut T`, [`Box`], [`Rc`], [`Arc`]) are never null, so for
/// them this only exposes the pointee. [`Option`] is the nullable wrapper proper: [`None`] is null
/// and `Some(value)` refers to `value`.
pub trait Nullable {
    /// The type of the value being referred to.
    type Target: ?Sized;

    /// Returns the value referred to, or [`None`] if `self` is null.
    fn as_target(&self) -> Option<&Self::Target>;

    /// Returns true if `self` doesn't refer to a value.
    fn is_null(&self) -> bool {
        self.as_target().is_none()
    }
}

impl<T> Nullable for Option<T> {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T: ?Sized> Nullable for &T {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        Some(*self)
    }
}

impl<T: ?Sized> Nullable for &mut T {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: ?Sized> Nullable for Rc<T> {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    type Target = T;

    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

/// Moves `value` onto the heap, giving a pointer to it that is never null.
///
/// # Examples
/// ```
/// # use container_kit::ptr::{ptr, Nullable};
/// let boxed = ptr(7);
/// assert_eq!(*boxed, 7);
/// assert!(!boxed.is_null());
/// ```
pub fn ptr<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Returns true if `value` doesn't refer to anything. Shorthand for [`Nullable::is_null`].
pub fn is_null<N: Nullable + ?Sized>(value: &N) -> bool {
    value.is_null()
}

/// Compares two possibly-null values.
///
/// Two nulls are equal and a null never equals a non-null value. Otherwise the values being
/// pointed to are compared, so two distinct allocations holding equal values are equal.
///
/// # Examples
/// ```
/// # use container_kit::ptr::{equal, ptr};
/// assert!(equal(&None::<u8>, &None::<u8>));
/// assert!(equal(&ptr(3), &ptr(3)));
/// assert!(equal(&ptr(3), &Some(3)));
/// assert!(!equal(&ptr(4), &None::<i32>));
/// ```
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Nullable + ?Sized,
    B: Nullable<Target = A::Target> + ?Sized,
    A::Target: PartialEq,
{
    match (a.as_target(), b.as_target()) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
