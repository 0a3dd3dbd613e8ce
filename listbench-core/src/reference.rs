//! In-Process Reference Implementations
//!
//! These run inside the host with no boundary crossing and anchor the
//! rankings: the naive reference-counted linked list is the append-suite
//! baseline, the plain `Vec` is the insert-suite baseline. Each driver
//! owns a fresh generator per invocation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::rng::Lcg;

type Link = Rc<RefCell<Node>>;

struct Node {
    value: i64,
    next: Option<Link>,
    prev: Option<Weak<RefCell<Node>>>,
}

/// Naive doubly linked list: one heap node per element, reference-counted
/// links forward and weak links back.
struct LinkedList {
    head: Option<Link>,
    tail: Option<Link>,
}

impl LinkedList {
    fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    fn push_back(&mut self, value: i64) {
        let node = Rc::new(RefCell::new(Node {
            value,
            next: None,
            prev: None,
        }));
        match self.tail.take() {
            Some(tail) => {
                node.borrow_mut().prev = Some(Rc::downgrade(&tail));
                tail.borrow_mut().next = Some(Rc::clone(&node));
                self.tail = Some(node);
            }
            None => {
                self.head = Some(Rc::clone(&node));
                self.tail = Some(node);
            }
        }
    }

    fn sum(&self) -> i64 {
        let mut total = 0;
        let mut current = self.head.clone();
        while let Some(node) = current {
            let node = node.borrow();
            total += node.value;
            current = node.next.clone();
        }
        total
    }
}

impl Drop for LinkedList {
    // Unlink iteratively; dropping a long Rc chain recursively would
    // overflow the stack at suite sizes.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }
}

/// Append-and-sum over the naive linked list (append-suite baseline).
pub fn linked_append(n: u32) -> i64 {
    let mut list = LinkedList::new();
    for i in 0..n as i64 {
        list.push_back(i);
    }
    list.sum()
}

/// Append-and-sum over `VecDeque`.
pub fn deque_append(n: u32) -> i64 {
    let mut deque = VecDeque::new();
    for i in 0..n as i64 {
        deque.push_back(i);
    }
    deque.iter().sum()
}

/// Random positional insertion into a `Vec` (insert-suite baseline).
///
/// Returns the position checksum; the container work is the element shift
/// `Vec::insert` performs on every step.
pub fn vec_insert(n: u32) -> i64 {
    let mut items: Vec<i64> = Vec::new();
    let mut lcg = Lcg::new();
    let mut checksum = 0i64;
    for i in 0..n as i64 {
        let len = items.len();
        let value = lcg.next_value();
        let position = if len == 0 { 0 } else { value as usize % len };
        items.insert(position, i);
        checksum += position as i64;
    }
    checksum
}

/// Random positional insertion into a `VecDeque`.
pub fn deque_insert(n: u32) -> i64 {
    let mut items: VecDeque<i64> = VecDeque::new();
    let mut lcg = Lcg::new();
    let mut checksum = 0i64;
    for i in 0..n as i64 {
        let len = items.len();
        let value = lcg.next_value();
        let position = if len == 0 { 0 } else { value as usize % len };
        items.insert(position, i);
        checksum += position as i64;
    }
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{insertion_positions, position_checksum};
    use crate::workload::Workload;

    #[test]
    fn test_append_drivers_agree_with_closed_form() {
        for n in [0u32, 1, 2, 10, 1000] {
            let expected = Workload::SequentialBuildAndSum.expected_checksum(n);
            assert_eq!(linked_append(n), expected, "linked n={n}");
            assert_eq!(deque_append(n), expected, "deque n={n}");
        }
    }

    #[test]
    fn test_insert_drivers_report_position_checksum() {
        for n in [0u32, 1, 5, 8, 100] {
            let expected = position_checksum(n);
            assert_eq!(vec_insert(n), expected, "vec n={n}");
            assert_eq!(deque_insert(n), expected, "deque n={n}");
        }
    }

    #[test]
    fn test_insert_builds_the_reference_container() {
        // Replay the derived positions against a model Vec and check the
        // final arrangement matches the fixed references.
        let build = |n: u32| {
            let mut model: Vec<i64> = Vec::new();
            for (i, position) in insertion_positions(n).into_iter().enumerate() {
                model.insert(position, i as i64);
            }
            model
        };
        assert_eq!(build(5), [3, 2, 4, 1, 0]);
        assert_eq!(build(8), [3, 7, 2, 5, 4, 6, 1, 0]);
    }

    #[test]
    fn test_linked_list_drop_is_iterative() {
        // Deep enough to overflow the stack if Drop recursed.
        let _ = linked_append(200_000);
    }
}
