use alloc::boxed::Box;
use core::ptr::NonNull;

use super::traits::Link;

/// The sentinel header of a forward list.
///
/// It holds no value and marks the "before the first element" position.
/// `Node` starts with the same field, so a node pointer may be viewed as a
/// header pointer when only the link is touched.
#[repr(C)]
pub(crate) struct Head<T> {
    next: Option<NonNull<Node<T>>>,
}

/// A heap-allocated element of a forward list.
#[repr(C)]
pub(crate) struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    value: T,
}

impl<T> Head<T> {
    /// Allocates an empty header on the heap.
    pub(crate) fn alloc() -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Head { next: None })))
    }

    /// Releases a header allocated with [`Head::alloc`].
    ///
    /// # Safety
    ///
    /// `head` must come from [`Head::alloc`] and must not be used afterwards.
    /// The chain it points to is not released.
    pub(crate) unsafe fn free(head: NonNull<Self>) {
        drop(unsafe { Box::from_raw(head.as_ptr()) });
    }
}

impl<T> Node<T> {
    /// Allocates a node holding `value` that links to `next`.
    pub(crate) fn alloc(value: T, next: Option<NonNull<Self>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }

    /// Releases a node and moves its value out.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must already be unlinked from
    /// its chain and must not be used afterwards.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }

    /// Views this node as a link header.
    #[inline]
    pub(crate) fn as_head(node: NonNull<Self>) -> NonNull<Head<T>> {
        node.cast()
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Link<T> for Head<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }
}

impl<T> Link<T> for Node<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }
}
