use core::ptr::NonNull;

use super::node::Node;

/// A trait for anything that owns the `next` link of a forward chain.
///
/// Both the sentinel header and the element nodes implement it, so the
/// positional operations can splice after either one uniformly.
pub(crate) trait Link<T> {
    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Node<T>>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>);

    /// Replace the next pointer, returning the old one
    #[inline]
    fn replace_next(&mut self, next: Option<NonNull<Node<T>>>) -> Option<NonNull<Node<T>>> {
        let old = self.next();
        self.set_next(next);
        old
    }
}
