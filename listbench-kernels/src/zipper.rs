//! Zipper lists: two contiguous stacks forming a cursor.
//!
//! `left` holds the elements before the cursor in list order; `right` holds
//! the elements after the cursor reversed, so the element adjacent to the
//! cursor is on top of each stack. Insertion cost is the distance the
//! cursor has to travel, paid as contiguous element moves instead of
//! pointer chasing.

/// Safe zipper: stack transfers go through `drain`/`extend`.
pub struct ZipperList {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl ZipperList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Append at the very end, wherever the cursor is.
    ///
    /// With the cursor already at the end (the append workload's steady
    /// state) this is a plain push.
    pub fn push_back(&mut self, value: i64) {
        if self.right.is_empty() {
            self.left.push(value);
        } else {
            self.right.insert(0, value);
        }
    }

    /// Move the cursor to `index`, then insert there.
    pub fn insert(&mut self, index: usize, value: i64) {
        let cursor = self.left.len();
        if index < cursor {
            let drained = self.left.drain(index..).rev();
            self.right.extend(drained);
        } else if index > cursor {
            let wanted = index - cursor;
            let moved = wanted.min(self.right.len());
            let start = self.right.len() - moved;
            let drained = self.right.drain(start..).rev();
            self.left.extend(drained);
        }
        self.left.push(value);
    }

    pub fn sum(&self) -> i64 {
        let left: i64 = self.left.iter().sum();
        let right: i64 = self.right.iter().sum();
        left + right
    }

    #[cfg(test)]
    fn to_vec(&self) -> Vec<i64> {
        let mut out = self.left.clone();
        out.extend(self.right.iter().rev());
        out
    }
}

/// Zipper with unchecked stack transfers: the cursor move is raw forward
/// copies between the two buffers instead of drain/extend.
pub struct RawZipperList {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl RawZipperList {
    /// Both stacks reserve full capacity up front; the unchecked copies
    /// below rely on never needing to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Move the cursor to `index`, then insert there.
    pub fn insert(&mut self, index: usize, value: i64) {
        let cursor = self.left.len();
        if index < cursor {
            let count = cursor - index;
            // SAFETY: `right` was constructed with capacity for every
            // element this list can hold, so `right.len() + count` fits its
            // allocation; source range `index..cursor` is initialized.
            // Destination is written forward while the source is read
            // backward, preserving stack order.
            unsafe {
                let src = self.left.as_ptr().add(index);
                let dst = self.right.as_mut_ptr().add(self.right.len());
                for i in 0..count {
                    *dst.add(i) = *src.add(count - 1 - i);
                }
                self.right.set_len(self.right.len() + count);
                self.left.set_len(index);
            }
        } else if index > cursor {
            let wanted = index - cursor;
            let moved = wanted.min(self.right.len());
            let start = self.right.len() - moved;
            // SAFETY: mirror of the branch above with the roles swapped;
            // `left.len() + moved <= capacity` and `start..right.len()` is
            // initialized.
            unsafe {
                let src = self.right.as_ptr().add(start);
                let dst = self.left.as_mut_ptr().add(cursor);
                for i in 0..moved {
                    *dst.add(i) = *src.add(moved - 1 - i);
                }
                self.left.set_len(cursor + moved);
                self.right.set_len(start);
            }
        }
        self.left.push(value);
    }

    pub fn sum(&self) -> i64 {
        let left: i64 = self.left.iter().sum();
        let right: i64 = self.right.iter().sum();
        left + right
    }

    #[cfg(test)]
    fn to_vec(&self) -> Vec<i64> {
        let mut out = self.left.clone();
        out.extend(self.right.iter().rev());
        out
    }
}
