use log::{debug, trace};

use crate::config::Config;
use crate::error::{Result, RingStackError};

/// A fixed-capacity stack backed by a ring buffer.
///
/// Pushing onto a full stack overwrites the oldest entry. Reading past the
/// retrievable history yields `None` (or `T::default()` through the
/// `*_or_default` methods) instead of an error.
#[derive(Clone, Debug)]
pub struct RingStack<T> {
    data: Box<[Option<T>]>,
    // Slot of the newest element. Starts at `capacity - 1` so the first push
    // lands on slot 0.
    head: usize,
    len: usize,
}

impl<T> RingStack<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingStackError::ZeroCapacity);
        }

        Ok(Self {
            data: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: capacity - 1,
            len: 0,
        })
    }

    /// Builds a stack sized by the `capacity` key of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let capacity = config.capacity();
        debug!("building ring stack with configured capacity {capacity}");
        Self::new(capacity)
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of elements that can still be popped.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn push(&mut self, item: T) {
        self.head = self.forward(self.head);
        if self.is_full() {
            debug!("ring stack full, overwriting slot {}", self.head);
        } else {
            self.len += 1;
        }
        trace!("push into slot {} (len {})", self.head, self.len);
        self.data[self.head] = Some(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.data[self.head].take();
        trace!("pop from slot {} (len {})", self.head, self.len - 1);
        self.head = self.backward(self.head);
        self.len -= 1;
        item
    }

    pub fn peek(&self) -> Option<&T> {
        self.nth_newest(0)
    }

    /// Returns exactly `n` entries, newest first. Positions past the
    /// retrievable history are `None`.
    pub fn peek_many(&self, n: usize) -> Vec<Option<&T>> {
        let mut out = Vec::with_capacity(n);
        out.extend((0..n).map(|k| self.nth_newest(k)));
        out
    }

    /// Drops every stored element and resets the stack to its initial state.
    pub fn clear(&mut self) {
        debug!("clearing ring stack of {} elements", self.len);
        for slot in self.data.iter_mut() {
            *slot = None;
        }
        self.head = self.capacity() - 1;
        self.len = 0;
    }

    fn nth_newest(&self, k: usize) -> Option<&T> {
        if k >= self.len {
            return None;
        }
        // k < len <= capacity, so the subtraction cannot underflow.
        let capacity = self.capacity();
        self.data[(self.head + capacity - k) % capacity].as_ref()
    }

    fn forward(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn backward(&self, index: usize) -> usize {
        let capacity = self.capacity();
        (index + capacity - 1) % capacity
    }
}

impl<T: Default + Clone> RingStack<T> {
    pub fn pop_or_default(&mut self) -> T {
        self.pop().unwrap_or_default()
    }

    pub fn peek_or_default(&self) -> T {
        self.peek().cloned().unwrap_or_default()
    }

    pub fn peek_many_or_default(&self, n: usize) -> Vec<T> {
        let mut out = vec![T::default(); n];
        for (k, slot) in out.iter_mut().enumerate().take(self.len) {
            if let Some(item) = self.nth_newest(k) {
                *slot = item.clone();
            }
        }
        out
    }
}

impl<T: PartialEq> RingStack<T> {
    /// Whether any retrievable element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        (0..self.len).any(|k| self.nth_newest(k) == Some(item))
    }
}
