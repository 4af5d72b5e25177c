//! Linked list collections.
//!
//! The [`forward`] module holds an owning singly linked list with a sentinel
//! header and position handles for splicing in the middle of the chain.
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::linked_list::forward::ForwardList;
//!
//! let mut list: ForwardList<i32> = [3, 4].into_iter().collect();
//! list.push_front(1);
//!
//! unsafe {
//!     // `begin` is the 1, so this lands between 1 and 3.
//!     let two = list.insert_after(list.begin(), 2).unwrap();
//!     assert_eq!(*two.get().unwrap(), 2);
//!
//!     let mut position = list.begin();
//!     let mut values = vec![];
//!     while !position.is_end() {
//!         values.push(*position.get().unwrap());
//!         position.advance().unwrap();
//!     }
//!     assert_eq!(values, vec![1, 2, 3, 4]);
//! }
//!
//! assert_eq!(list.len(), 4);
//! ```
pub mod forward;
