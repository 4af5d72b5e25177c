extern crate std;

use std::{vec, vec::Vec};

use crate::linked_list::forward::{ForwardList, OutOfRange, Position, PositionMut};

fn collect(list: &ForwardList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_empty_list_positions() {
    let list = ForwardList::<i32>::new();

    assert_eq!(list.begin(), list.end());
    assert!(list.begin().is_end());
    assert_ne!(list.before_begin(), list.end());

    unsafe {
        assert_eq!(list.before_begin().advanced(), Ok(list.end()));
    }
}

#[test]
fn test_advance_walks_the_chain() {
    let list = ForwardList::from([1, 2, 3]);
    let mut position = list.before_begin();
    let mut values = vec![];

    unsafe {
        position.advance().unwrap();
        while position != list.end() {
            values.push(*position.get().unwrap());
            position.advance().unwrap();
        }
    }

    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_end_position_fails() {
    let list = ForwardList::from([1]);
    let mut end = list.end();

    unsafe {
        assert_eq!(end.advance(), Err(OutOfRange::NoNode));
        assert_eq!(end.get(), Err(OutOfRange::NoNode));
        assert_eq!(Position::<i32>::default().advanced(), Err(OutOfRange::NoNode));
    }
    assert!(end.is_end());
}

#[test]
fn test_before_begin_holds_no_element() {
    let mut list = ForwardList::from([1]);

    unsafe {
        assert_eq!(list.before_begin().get(), Err(OutOfRange::NoNode));
        assert_eq!(list.before_begin_mut().get_mut(), Err(OutOfRange::NoNode));
    }
}

#[test]
fn test_write_through_mutable_position() {
    let mut list = ForwardList::from([1, 2, 3]);

    unsafe {
        let mut second = list.begin_mut().advanced().unwrap();
        *second.get_mut().unwrap() = 20;
        assert_eq!(second.get(), Ok(&20));
    }

    assert_eq!(collect(&list), vec![1, 20, 3]);
}

#[test]
fn test_mutable_and_read_only_positions_compare() {
    let mut list = ForwardList::from([1, 2]);
    let mutable = list.begin_mut();
    let read_only = list.begin();

    assert_eq!(mutable, read_only);
    assert_eq!(read_only, mutable);
    assert_eq!(Position::from(mutable), read_only);
    assert_eq!(PositionMut::<i32>::default(), list.end());

    let copy = read_only;
    unsafe {
        assert_ne!(read_only.advanced().unwrap(), copy);
    }
    assert_eq!(copy, read_only);
}

#[test]
fn test_insert_after_before_begin_is_push_front() {
    let mut inserted = ForwardList::from([2, 3]);
    let mut pushed = ForwardList::from([2, 3]);

    let position = unsafe { inserted.insert_after(inserted.before_begin(), 1) }.unwrap();
    pushed.push_front(1);

    assert_eq!(inserted, pushed);
    assert_eq!(inserted.len(), pushed.len());
    assert_eq!(position, inserted.begin());
}

#[test]
fn test_insert_after_interior_and_last() {
    let mut list = ForwardList::from([1, 3]);

    unsafe {
        let two = list.insert_after(list.begin(), 2).unwrap();
        assert_eq!(two.get(), Ok(&2));

        let last = two.advanced().unwrap();
        let four = list.insert_after(last, 4).unwrap();
        assert_eq!(four.advanced(), Ok(list.end_mut()));
    }

    assert_eq!(list.len(), 4);
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
}

#[test]
fn test_insert_after_end_fails_without_mutation() {
    let mut list = ForwardList::from([1, 2]);

    let result = unsafe { list.insert_after(list.end(), 3) };
    assert_eq!(result, Err(OutOfRange::NoNode));
    assert_eq!(list.len(), 2);
    assert_eq!(collect(&list), vec![1, 2]);
}

#[test]
fn test_erase_after_returns_successor() {
    let mut list = ForwardList::from([1, 2, 3, 4]);

    unsafe {
        let next = list.erase_after(list.begin()).unwrap();
        assert_eq!(next.get(), Ok(&3));
        assert_eq!(next, list.begin().advanced().unwrap());

        let end = list.erase_after(next).unwrap();
        assert_eq!(end, list.end());
    }

    assert_eq!(list.len(), 2);
    assert_eq!(collect(&list), vec![1, 3]);
}

#[test]
fn test_erase_after_before_begin_removes_first() {
    let mut list = ForwardList::from([1, 2]);

    unsafe {
        let next = list.erase_after(list.before_begin()).unwrap();
        assert_eq!(next, list.begin());
        assert_eq!(next.get(), Ok(&2));
    }
    assert_eq!(collect(&list), vec![2]);
}

#[test]
fn test_erase_after_exhausted_fails_without_mutation() {
    let mut list = ForwardList::from([1, 2]);

    unsafe {
        let last = list.begin().advanced().unwrap();
        assert_eq!(list.erase_after(last), Err(OutOfRange::PastEnd));
        assert_eq!(list.erase_after(list.end()), Err(OutOfRange::NoNode));
    }
    assert_eq!(collect(&list), vec![1, 2]);

    let mut empty = ForwardList::<i32>::new();
    unsafe {
        assert_eq!(empty.erase_after(empty.before_begin()), Err(OutOfRange::PastEnd));
        assert_eq!(empty.erase_after(empty.begin()), Err(OutOfRange::NoNode));
    }
    assert!(empty.is_empty());
}

#[test]
fn test_other_positions_survive_erase() {
    let mut list = ForwardList::from([1, 2, 3]);
    let first = list.begin();

    unsafe {
        let third = first.advanced().unwrap().advanced().unwrap();
        list.erase_after(first).unwrap();

        assert_eq!(first.get(), Ok(&1));
        assert_eq!(third.get(), Ok(&3));
        assert_eq!(first.advanced(), Ok(third));
    }
}

#[test]
fn test_before_begin_follows_moved_list() {
    let list = ForwardList::from([1, 2]);
    let before_begin = list.before_begin();

    let moved = list;
    assert_eq!(moved.before_begin(), before_begin);

    let mut boxed = std::boxed::Box::new(moved);
    let position = unsafe { boxed.insert_after(before_begin, 0) }.unwrap();
    assert_eq!(position, boxed.begin());
    assert_eq!(collect(&boxed), vec![0, 1, 2]);
}

#[test]
fn test_read_only_position_shortens_lifetime() {
    fn shorten<'a>(position: Position<&'static str>) -> Position<&'a str> {
        position
    }

    let mut list = ForwardList::from(["static"]);
    let shortened = shorten(list.begin());
    assert_eq!(unsafe { shortened.get() }, Ok(&"static"));

    // The mutable handle keeps its exact element type and stays usable.
    let mut position: PositionMut<&'static str> = list.begin_mut();
    unsafe { *position.get_mut().unwrap() = "replaced" };
    assert_eq!(list.front(), Some(&"replaced"));
}
