use thiserror::Error;

/// The single failure kind of a forward list: an access through a position
/// that holds no element, or a removal from an empty list.
///
/// The variants only say which check rejected the call. A failed call never
/// touches the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OutOfRange {
    /// Popped from an empty list.
    #[error("out of range: pop from an empty forward list")]
    Empty,

    /// The position refers to no node (the end position), or to the
    /// sentinel when an element was required.
    #[error("out of range: position does not refer to an element")]
    NoNode,

    /// `erase_after` on the last node, which has no successor.
    #[error("out of range: nothing to erase past the last element")]
    PastEnd,
}

pub type Result<T, E = OutOfRange> = core::result::Result<T, E>;
