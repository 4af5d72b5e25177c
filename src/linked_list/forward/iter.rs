use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::ForwardList, node::Node, traits::Link};

/// A borrowing iterator over the elements of a [`ForwardList`].
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a ForwardList<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>) -> Self {
        Self {
            current: list.first(),
            remaining: list.len(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // The list is borrowed for 'a, so every node outlives the iterator.
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _list: PhantomData,
        }
    }
}

/// A mutably borrowing iterator over the elements of a [`ForwardList`].
pub struct IterMut<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a mut ForwardList<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>) -> Self {
        Self {
            current: list.first(),
            remaining: list.len(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // Each node is yielded once, so the mutable borrows never overlap.
            let node = unsafe { &mut *current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.value_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish()
    }
}

/// An owning iterator that moves the elements out of a [`ForwardList`].
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.list.len()).finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
