use alloc::boxed::Box;
use core::{
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use super::{
    error::{OutOfRange, Result},
    iter::{IntoIter, Iter, IterMut},
    node::{Head, Node},
    position::{Position, PositionMut, RawPosition},
    traits::Link,
};

/// A singly linked list that owns its elements.
///
/// The chain starts at a heap-allocated sentinel that stands for the
/// position before the first element, so [`insert_after`] and
/// [`erase_after`] treat the front of the list like any interior position.
/// There is no tail pointer: [`push_back`] and [`pop_back`] walk the chain.
///
/// [`insert_after`]: ForwardList::insert_after
/// [`erase_after`]: ForwardList::erase_after
/// [`push_back`]: ForwardList::push_back
/// [`pop_back`]: ForwardList::pop_back
///
/// # Examples
///
/// ```
/// use mola_forward_list::{ForwardList, OutOfRange};
///
/// let mut list = ForwardList::from([2, 3]);
/// list.push_front(1);
/// list.push_back(4);
/// assert_eq!(list.to_string(), "{1, 2, 3, 4}");
///
/// assert_eq!(list.pop_back(), Ok(4));
/// assert_eq!(list.pop_front(), Ok(1));
/// list.clear();
/// assert_eq!(list.pop_front(), Err(OutOfRange::Empty));
/// ```
pub struct ForwardList<T> {
    head: NonNull<Head<T>>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            head: Head::alloc(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Moves the whole chain out into a new list, leaving `self` empty.
    ///
    /// Runs in O(1). Element positions follow their nodes into the returned
    /// list; a before-begin position of `self` stays bound to `self`.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        taken.swap(self);
        taken
    }

    /// Returns the number of elements, in O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.first().map(|node| unsafe { &*node.as_ptr() }.value())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first().map(|node| unsafe { &mut *node.as_ptr() }.value_mut())
    }

    /// Appends `value` after the last element. O(n).
    pub fn push_back(&mut self, value: T) {
        unsafe { Self::splice_after(self.last_link(), value) };
        self.len += 1;
    }

    /// Removes the last element and returns it. O(n).
    pub fn pop_back(&mut self) -> Result<T> {
        let Some(mut back) = self.first() else {
            return Err(OutOfRange::Empty);
        };
        let mut pre_back = self.head;

        unsafe {
            while let Some(next) = back.as_ref().next() {
                pre_back = Node::as_head(back);
                back = next;
            }
            pre_back.as_mut().set_next(None);
        }
        self.len -= 1;

        Ok(unsafe { Node::free(back) })
    }

    /// Inserts `value` before the first element. O(1).
    pub fn push_front(&mut self, value: T) {
        unsafe { Self::splice_after(self.head, value) };
        self.len += 1;
    }

    /// Removes the first element and returns it. O(1).
    pub fn pop_front(&mut self) -> Result<T> {
        let node = unsafe { Self::unlink_after(self.head) }.ok_or(OutOfRange::Empty)?;
        self.len -= 1;

        Ok(unsafe { Node::free(node) })
    }

    /// Inserts `value` right after `position` and returns the position of
    /// the new element. O(1).
    ///
    /// Inserting after [`before_begin`](ForwardList::before_begin) is the
    /// same as [`push_front`](ForwardList::push_front). Fails with
    /// [`OutOfRange::NoNode`] at the end position.
    ///
    /// # Safety
    ///
    /// `position` must be an end position or a valid position of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use mola_forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from(['a', 'c']);
    /// let inserted = unsafe { list.insert_after(list.begin(), 'b') }.unwrap();
    /// assert_eq!(unsafe { inserted.get() }, Ok(&'b'));
    /// assert_eq!(list.to_string(), "{a, b, c}");
    /// ```
    pub unsafe fn insert_after(
        &mut self,
        position: impl Into<Position<T>>,
        value: T,
    ) -> Result<PositionMut<T>> {
        let link = position.into().raw().link().ok_or(OutOfRange::NoNode)?;
        let node = unsafe { Self::splice_after(link, value) };
        self.len += 1;

        Ok(PositionMut::from_raw(RawPosition::at(Some(node))))
    }

    /// Removes the element right after `position` and returns the position
    /// of its former successor, or the end position. O(1).
    ///
    /// Fails with [`OutOfRange::NoNode`] at the end position and with
    /// [`OutOfRange::PastEnd`] when `position` is the last element.
    /// Positions of the removed element become invalid.
    ///
    /// # Safety
    ///
    /// `position` must be an end position or a valid position of this list.
    pub unsafe fn erase_after(
        &mut self,
        position: impl Into<Position<T>>,
    ) -> Result<PositionMut<T>> {
        let link = position.into().raw().link().ok_or(OutOfRange::NoNode)?;
        let node = unsafe { Self::unlink_after(link) }.ok_or(OutOfRange::PastEnd)?;
        self.len -= 1;

        let next = unsafe { node.as_ref().next() };
        drop(unsafe { Node::free(node) });

        Ok(PositionMut::from_raw(RawPosition::at(next)))
    }

    /// Removes every element, invalidating all element positions. O(n).
    pub fn clear(&mut self) {
        let mut current = unsafe { self.head.as_mut().replace_next(None) };
        self.len = 0;

        while let Some(node) = current {
            current = unsafe { node.as_ref().next() };
            drop(unsafe { Node::free(node) });
        }
    }

    /// Exchanges the chains of two lists in O(1).
    ///
    /// Nothing is copied or moved element-wise. Element positions follow
    /// their nodes; before-begin positions stay with their own list.
    pub fn swap(&mut self, other: &mut Self) {
        unsafe {
            let ours = self.head.as_mut().replace_next(None);
            let theirs = other.head.as_mut().replace_next(ours);
            self.head.as_mut().set_next(theirs);
        }
        mem::swap(&mut self.len, &mut other.len);
    }

    /// The position before the first element.
    pub fn before_begin(&self) -> Position<T> {
        Position::from_raw(RawPosition::before_begin(self.head))
    }

    /// The position of the first element, or the end position when empty.
    pub fn begin(&self) -> Position<T> {
        Position::from_raw(RawPosition::at(self.first()))
    }

    /// The position one past the last element.
    pub fn end(&self) -> Position<T> {
        Position::from_raw(RawPosition::end())
    }

    pub fn before_begin_mut(&mut self) -> PositionMut<T> {
        PositionMut::from_raw(RawPosition::before_begin(self.head))
    }

    pub fn begin_mut(&mut self) -> PositionMut<T> {
        PositionMut::from_raw(RawPosition::at(self.first()))
    }

    pub fn end_mut(&mut self) -> PositionMut<T> {
        PositionMut::from_raw(RawPosition::end())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<NonNull<Node<T>>> {
        unsafe { self.head.as_ref().next() }
    }

    /// The link of the last node, or the sentinel when empty.
    fn last_link(&self) -> NonNull<Head<T>> {
        let mut link = self.head;
        while let Some(next) = unsafe { link.as_ref().next() } {
            link = Node::as_head(next);
        }
        link
    }

    /// Links a new node holding `value` right after `link`.
    ///
    /// # Safety
    ///
    /// `link` must be the live sentinel or a live node of a chain.
    unsafe fn splice_after(mut link: NonNull<Head<T>>, value: T) -> NonNull<Node<T>> {
        unsafe {
            let node = Node::alloc(value, link.as_ref().next());
            link.as_mut().set_next(Some(node));
            node
        }
    }

    /// Unlinks the node right after `link`, if any, without freeing it.
    ///
    /// # Safety
    ///
    /// `link` must be the live sentinel or a live node of a chain.
    unsafe fn unlink_after(mut link: NonNull<Head<T>>) -> Option<NonNull<Node<T>>> {
        unsafe {
            let node = link.as_ref().next()?;
            link.as_mut().set_next(node.as_ref().next());
            Some(node)
        }
    }
}

/// Exchanges the contents of two lists in O(1).
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe { Head::free(self.head) };
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds a complete copy of `source` first and only then swaps it in,
    /// so a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends every item after the last element, walking the chain once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_link();
        for value in iter {
            let node = unsafe { Self::splice_after(tail, value) };
            tail = Node::as_head(node);
            self.len += 1;
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}
