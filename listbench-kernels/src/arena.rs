//! Bump-allocated doubly linked list.
//!
//! Nodes come from a single buffer sized up front and owned by the list
//! value, so allocation is a pointer bump and teardown frees one block.
//! Linkage is identical to `RawList`; only the allocator differs.

use std::mem::MaybeUninit;
use std::ptr;

struct Node {
    value: i64,
    next: *mut Node,
    prev: *mut Node,
}

/// Doubly linked list whose nodes live in a preallocated arena.
///
/// Capacity is fixed at construction; exceeding it panics, which the
/// export wrapper converts into the failure sentinel.
pub struct ArenaList {
    arena: Box<[MaybeUninit<Node>]>,
    used: usize,
    head: *mut Node,
    tail: *mut Node,
    len: usize,
}

impl ArenaList {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = Vec::with_capacity(capacity);
        arena.resize_with(capacity, MaybeUninit::uninit);
        Self {
            arena: arena.into_boxed_slice(),
            used: 0,
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: i64) -> *mut Node {
        assert!(self.used < self.arena.len(), "arena exhausted");
        let slot = self.arena[self.used].as_mut_ptr();
        self.used += 1;
        // SAFETY: `slot` points into the arena buffer and is written before
        // any read; Node has no drop glue.
        unsafe {
            slot.write(Node {
                value,
                next: ptr::null_mut(),
                prev: ptr::null_mut(),
            });
        }
        slot
    }

    pub fn push_back(&mut self, value: i64) {
        let node = self.alloc(value);
        // SAFETY: `node` is initialized; `tail` is null or points into the
        // arena, which lives as long as `self`.
        unsafe {
            if self.tail.is_null() {
                self.head = node;
            } else {
                (*self.tail).next = node;
                (*node).prev = self.tail;
            }
            self.tail = node;
        }
        self.len += 1;
    }

    fn push_front(&mut self, value: i64) {
        let node = self.alloc(value);
        // SAFETY: as in push_back, with head in place of tail.
        unsafe {
            if self.head.is_null() {
                self.tail = node;
            } else {
                (*self.head).prev = node;
                (*node).next = self.head;
            }
            self.head = node;
        }
        self.len += 1;
    }

    /// Insert before the element at `index`; out-of-range appends.
    pub fn insert(&mut self, index: usize, value: i64) {
        if index == 0 {
            self.push_front(value);
            return;
        }
        if index >= self.len {
            self.push_back(value);
            return;
        }

        let node = self.alloc(value);
        // SAFETY: 0 < index < len keeps the walk inside initialized arena
        // nodes; `prev` is non-null past index 0.
        unsafe {
            let mut current = self.head;
            for _ in 0..index {
                current = (*current).next;
            }
            let prev = (*current).prev;
            (*node).next = current;
            (*node).prev = prev;
            (*current).prev = node;
            (*prev).next = node;
        }
        self.len += 1;
    }

    pub fn sum(&self) -> i64 {
        let mut total = 0;
        let mut current = self.head;
        // SAFETY: traversal over initialized arena nodes.
        unsafe {
            while !current.is_null() {
                total += (*current).value;
                current = (*current).next;
            }
        }
        total
    }

    #[cfg(test)]
    fn to_vec(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut current = self.head;
        unsafe {
            while !current.is_null() {
                out.push((*current).value);
                current = (*current).next;
            }
        }
        out
    }
}

// No Drop: Node is plain data, the arena buffer frees as one block.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_sum() {
        let mut list = ArenaList::with_capacity(10);
        for i in 0..10 {
            list.push_back(i);
        }
        assert_eq!(list.sum(), 45);
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_matches_vec_model() {
        let mut list = ArenaList::with_capacity(8);
        let mut model: Vec<i64> = Vec::new();
        for (index, value) in [(0, 10), (0, 11), (1, 12), (3, 13), (99, 14), (2, 15)] {
            list.insert(index, value);
            let clamped = index.min(model.len());
            model.insert(clamped, value);
        }
        assert_eq!(list.to_vec(), model);
    }

    #[test]
    #[should_panic(expected = "arena exhausted")]
    fn test_overflow_panics() {
        let mut list = ArenaList::with_capacity(2);
        for i in 0..3 {
            list.push_back(i);
        }
    }
}
