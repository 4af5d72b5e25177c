use core::{fmt, marker::PhantomData, ptr::NonNull};

use super::{
    error::{OutOfRange, Result},
    node::{Head, Node},
    traits::Link,
};

/// The shared representation of both position handles.
///
/// `link` is `None` at the end position. Otherwise it points at the
/// sentinel (`before_begin` is set) or at a node viewed through its header.
pub(crate) struct RawPosition<T> {
    link: Option<NonNull<Head<T>>>,
    before_begin: bool,
}

impl<T> RawPosition<T> {
    #[inline]
    pub(crate) const fn end() -> Self {
        Self {
            link: None,
            before_begin: false,
        }
    }

    #[inline]
    pub(crate) fn before_begin(head: NonNull<Head<T>>) -> Self {
        Self {
            link: Some(head),
            before_begin: true,
        }
    }

    #[inline]
    pub(crate) fn at(node: Option<NonNull<Node<T>>>) -> Self {
        Self {
            link: node.map(Node::as_head),
            before_begin: false,
        }
    }

    #[inline]
    pub(crate) fn link(&self) -> Option<NonNull<Head<T>>> {
        self.link
    }

    #[inline]
    pub(crate) fn is_end(&self) -> bool {
        self.link.is_none()
    }

    /// # Safety
    ///
    /// The referenced sentinel or node must be alive.
    pub(crate) unsafe fn advance(&mut self) -> Result<()> {
        let link = self.link.ok_or(OutOfRange::NoNode)?;
        let next = unsafe { link.as_ref().next() };
        *self = Self::at(next);
        Ok(())
    }

    /// The node this position refers to, if it refers to an element.
    pub(crate) fn node(&self) -> Result<NonNull<Node<T>>> {
        match self.link {
            Some(link) if !self.before_begin => Ok(link.cast()),
            _ => Err(OutOfRange::NoNode),
        }
    }
}

impl<T> Clone for RawPosition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawPosition<T> {}

impl<T> PartialEq for RawPosition<T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<T> Eq for RawPosition<T> {}

impl<T> fmt::Debug for RawPosition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            None => f.write_str("End"),
            Some(link) if self.before_begin => f.debug_tuple("BeforeBegin").field(&link).finish(),
            Some(link) => f.debug_tuple("Node").field(&link).finish(),
        }
    }
}

/// A read-only position in a [`ForwardList`](super::ForwardList).
///
/// A position is a plain copyable handle: it does not borrow the list and
/// does not keep any node alive. It stays valid until the node it refers
/// to is removed, or until the list is cleared, dropped or reassigned.
/// Using an invalidated position is undefined behavior, which is why the
/// accessors are `unsafe`. The end position never dangles; operations on
/// it fail with [`OutOfRange::NoNode`].
///
/// Two positions are equal when they refer to the same node, or are both
/// end positions. `Default` yields the end position.
pub struct Position<T> {
    raw: RawPosition<T>,
}

impl<T> Position<T> {
    #[inline]
    pub(crate) fn from_raw(raw: RawPosition<T>) -> Self {
        Self { raw }
    }

    #[inline]
    pub(crate) fn raw(&self) -> RawPosition<T> {
        self.raw
    }

    /// Returns `true` at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    /// Steps to the next node, or to the end position after the last one.
    ///
    /// # Safety
    ///
    /// The position must be valid (see the type documentation).
    pub unsafe fn advance(&mut self) -> Result<()> {
        unsafe { self.raw.advance() }
    }

    /// By-value form of [`Position::advance`].
    ///
    /// # Safety
    ///
    /// The position must be valid (see the type documentation).
    pub unsafe fn advanced(mut self) -> Result<Self> {
        unsafe { self.advance()? };
        Ok(self)
    }

    /// Returns the element at this position.
    ///
    /// Fails at the end position and at the before-begin position.
    ///
    /// # Safety
    ///
    /// The position must be valid, and the node must stay alive and
    /// unmodified for the chosen lifetime `'a`.
    pub unsafe fn get<'a>(&self) -> Result<&'a T> {
        let node = self.raw.node()?;
        Ok(unsafe { node.as_ref() }.value())
    }
}

impl<T> Default for Position<T> {
    fn default() -> Self {
        Self::from_raw(RawPosition::end())
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> PartialEq<PositionMut<T>> for Position<T> {
    fn eq(&self, other: &PositionMut<T>) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Position<T> {}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.raw).finish()
    }
}

/// A mutable position in a [`ForwardList`](super::ForwardList).
///
/// Same contract as [`Position`], but dereferencing grants write access.
/// Converts into a [`Position`] with `From`.
///
/// Unlike [`Position`], it is invariant in `T`: a handle into a list of
/// long-lived references cannot be shortened and used to store a
/// shorter-lived one.
///
/// ```compile_fail
/// use mola_forward_list::PositionMut;
///
/// fn shorten<'a>(position: PositionMut<&'static str>) -> PositionMut<&'a str> {
///     position
/// }
/// ```
pub struct PositionMut<T> {
    raw: RawPosition<T>,
    _invariant: PhantomData<fn(T) -> T>,
}

impl<T> PositionMut<T> {
    #[inline]
    pub(crate) fn from_raw(raw: RawPosition<T>) -> Self {
        Self {
            raw,
            _invariant: PhantomData,
        }
    }

    /// Returns `true` at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    /// Steps to the next node, or to the end position after the last one.
    ///
    /// # Safety
    ///
    /// The position must be valid (see [`Position`]).
    pub unsafe fn advance(&mut self) -> Result<()> {
        unsafe { self.raw.advance() }
    }

    /// By-value form of [`PositionMut::advance`].
    ///
    /// # Safety
    ///
    /// The position must be valid (see [`Position`]).
    pub unsafe fn advanced(mut self) -> Result<Self> {
        unsafe { self.advance()? };
        Ok(self)
    }

    /// Returns the element at this position.
    ///
    /// # Safety
    ///
    /// Same as [`Position::get`].
    pub unsafe fn get<'a>(&self) -> Result<&'a T> {
        let node = self.raw.node()?;
        Ok(unsafe { node.as_ref() }.value())
    }

    /// Returns the element at this position for writing.
    ///
    /// Fails at the end position and at the before-begin position.
    ///
    /// # Safety
    ///
    /// The position must be valid, and no other reference to the element
    /// may exist for the chosen lifetime `'a`.
    pub unsafe fn get_mut<'a>(&mut self) -> Result<&'a mut T> {
        let mut node = self.raw.node()?;
        Ok(unsafe { node.as_mut() }.value_mut())
    }
}

impl<T> From<PositionMut<T>> for Position<T> {
    fn from(position: PositionMut<T>) -> Self {
        Position::from_raw(position.raw)
    }
}

impl<T> Default for PositionMut<T> {
    fn default() -> Self {
        Self::from_raw(RawPosition::end())
    }
}

impl<T> Clone for PositionMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PositionMut<T> {}

impl<T> PartialEq for PositionMut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> PartialEq<Position<T>> for PositionMut<T> {
    fn eq(&self, other: &Position<T>) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for PositionMut<T> {}

impl<T> fmt::Debug for PositionMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PositionMut").field(&self.raw).finish()
    }
}
