//! # Forward List
//!
//! An owning singly linked list with a sentinel header and copyable
//! position handles.
//!
//! ## Core Components
//!
//! - [`ForwardList`]: the container. It owns every node and the sentinel.
//! - [`Position`] and [`PositionMut`]: non-owning handles used for traversal
//!   and as the address of [`ForwardList::insert_after`] and
//!   [`ForwardList::erase_after`].
//! - [`Iter`], [`IterMut`] and [`IntoIter`]: ordinary borrowing and owning
//!   iterators.
//! - [`OutOfRange`]: the error returned by every checked operation.
//!
//! ## Safety
//!
//! Position handles do not borrow the list, so the compiler cannot tell
//! when one goes stale. The user is responsible for these invariants:
//!
//! - A position is only used while the node it refers to is still in the list.
//! - Clearing, dropping or reassigning a list invalidates all of its positions.
//! - A position is only passed back to the list it came from.
//!
//! The end position is always safe to use; every operation on it fails with
//! [`OutOfRange::NoNode`].

mod error;
mod fmt;
mod iter;
mod list;
mod node;
mod position;
mod traits;

#[cfg(test)]
mod tests;

pub use error::{OutOfRange, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{ForwardList, swap};
pub use position::{Position, PositionMut};

/// Creates a [`ForwardList`] holding the given elements in order.
///
/// ```
/// use mola_forward_list::forward_list;
///
/// let list = forward_list![1, 2, 3];
/// assert_eq!(list.to_string(), "{1, 2, 3}");
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::ForwardList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ForwardList::from([$($value),+])
    };
}
