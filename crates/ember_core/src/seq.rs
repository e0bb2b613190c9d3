//! Growable sequences with doubling capacity.
//!
//! A [`GrowSeq`] tracks its capacity separately from the length of the
//! underlying `Vec`, so growth happens exactly when `len == capacity` and
//! always doubles. The backing store is reserved to at least `capacity`
//! before any element lands in it, which keeps `Vec::push` from reallocating
//! on its own.
//!
//! The plain operations (`make`, `push`, `add`) terminate the process when the
//! store cannot grow; the `try_` forms hand the [`SeqError`] back instead.

use tracing::trace;

use crate::config::SeqConfig;
use crate::errors::{SeqError, fatal, messages};
use crate::render::Element;

const INITIAL_CAPACITY: usize = 1;

/// Ordered run of primitive elements that grows by doubling.
pub struct GrowSeq<T: Element> {
    elements: Vec<T>,
    capacity: usize,
    config: SeqConfig,
}

pub type CharSeq = GrowSeq<char>;
pub type IntSeq = GrowSeq<i32>;

impl<T: Element> GrowSeq<T> {
    /// Empty sequence with one reserved slot.
    pub fn make() -> Self {
        Self::make_with(SeqConfig::default())
    }

    pub fn make_with(config: SeqConfig) -> Self {
        match Self::try_make_with(config) {
            Ok(seq) => seq,
            Err(e) => fatal(messages::ALLOC_FAILED, &e),
        }
    }

    pub fn try_make_with(config: SeqConfig) -> Result<Self, SeqError> {
        config.check(INITIAL_CAPACITY)?;
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| SeqError::Alloc {
                requested: INITIAL_CAPACITY,
            })?;
        Ok(Self {
            elements,
            capacity: INITIAL_CAPACITY,
            config,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reserved slot count. Never below 1 and never decreases.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> SeqConfig {
        self.config
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn get(&self, idx: usize) -> Option<T> {
        self.elements.get(idx).copied()
    }

    /// Appends `value`, doubling the capacity first when the store is full.
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.try_push(value) {
            fatal(messages::RESIZE_FAILED, &e);
        }
    }

    /// Like [`push`](Self::push), but a failed growth leaves the sequence
    /// untouched and returns the error.
    pub fn try_push(&mut self, value: T) -> Result<(), SeqError> {
        if self.elements.len() == self.capacity {
            self.grow()?;
        }
        self.elements.push(value);
        Ok(())
    }

    /// Pushes every element of `source` in order.
    pub fn add_slice(&mut self, source: &[T]) {
        for &value in source {
            self.push(value);
        }
    }

    /// Pushes elements of `source` in order, stopping at the first failure.
    /// Elements pushed before the failure stay in the sequence.
    pub fn try_add_slice(&mut self, source: &[T]) -> Result<(), SeqError> {
        for &value in source {
            self.try_push(value)?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<(), SeqError> {
        let old = self.capacity;
        let new_capacity = old
            .checked_mul(2)
            .ok_or(SeqError::CapacityOverflow { capacity: old })?;
        self.config.check(new_capacity)?;
        let additional = new_capacity - self.elements.len();
        self.elements
            .try_reserve_exact(additional)
            .map_err(|_| SeqError::Alloc {
                requested: new_capacity,
            })?;
        self.capacity = new_capacity;
        trace!(old, new = new_capacity, "sequence grew");
        Ok(())
    }
}

impl CharSeq {
    /// Pushes the characters of `source` up to the first NUL, or all of them
    /// when there is none.
    pub fn add(&mut self, source: &str) {
        for c in source.chars().take_while(|&c| c != '\0') {
            self.push(c);
        }
    }

    pub fn try_add(&mut self, source: &str) -> Result<(), SeqError> {
        for c in source.chars().take_while(|&c| c != '\0') {
            self.try_push(c)?;
        }
        Ok(())
    }
}

impl IntSeq {
    /// Pushes every integer of `source`; the slice carries its own length.
    pub fn add(&mut self, source: &[i32]) {
        self.add_slice(source);
    }

    pub fn try_add(&mut self, source: &[i32]) -> Result<(), SeqError> {
        self.try_add_slice(source)
    }
}

impl<T: Element> Clone for GrowSeq<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            capacity: self.capacity,
            config: self.config,
        }
    }
}

impl<T: Element + std::fmt::Debug> std::fmt::Debug for GrowSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowSeq")
            .field("elements", &self.elements)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_reserves_one_slot() {
        let s = IntSeq::make();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn push_doubles_at_full() {
        let mut s = IntSeq::make();
        let mut seen = vec![s.capacity()];
        for i in 0..9 {
            s.push(i);
            if *seen.last().unwrap() != s.capacity() {
                seen.push(s.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn backing_store_covers_capacity() {
        let mut s = CharSeq::make();
        for c in "growable".chars() {
            s.push(c);
            assert!(s.elements.capacity() >= s.capacity());
        }
    }

    #[test]
    fn char_add_stops_at_nul() {
        let mut s = CharSeq::make();
        s.add("ab\0cd");
        assert_eq!(s.as_slice(), &['a', 'b']);
    }

    #[test]
    fn try_push_over_limit_leaves_sequence_unchanged() {
        let mut s = IntSeq::make_with(SeqConfig::with_max_capacity(2));
        s.try_push(1).unwrap();
        s.try_push(2).unwrap();
        let err = s.try_push(3).unwrap_err();
        assert_eq!(err, SeqError::CapacityLimit { requested: 4, limit: 2 });
        assert_eq!(s.len(), 2);
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn try_add_keeps_the_prefix_before_failure() {
        let mut s = IntSeq::make_with(SeqConfig::with_max_capacity(4));
        let err = s.try_add(&[1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(matches!(err, SeqError::CapacityLimit { requested: 8, .. }));
        assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn zero_limit_refuses_construction() {
        let err = CharSeq::try_make_with(SeqConfig::with_max_capacity(0)).unwrap_err();
        assert_eq!(err, SeqError::CapacityLimit { requested: 1, limit: 0 });
    }

    #[test]
    fn clone_keeps_capacity() {
        let mut s = IntSeq::make();
        s.add(&[7, 8, 9]);
        let c = s.clone();
        assert_eq!(c.as_slice(), s.as_slice());
        assert_eq!(c.capacity(), 4);
    }
}
