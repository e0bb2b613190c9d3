//! Immutable string value with small string optimization.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;
use std::str;

pub const INLINE_CAP: usize = 22;
const CHAR_COUNT_UNKNOWN: u32 = u32::MAX;

/// A string payload fixed at construction.
///
/// Short payloads live inline; longer ones share one heap block between
/// clones. The storage form is private, so the payload cannot change after
/// construction and is always valid UTF-8.
///
/// ```compile_fail
/// let t = ember_core::Text::make("Alex");
/// let ember_core::Text(repr) = t;
/// ```
#[derive(Clone)]
pub struct Text(Repr);

#[derive(Clone)]
enum Repr {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap { data: Rc<str>, char_count: Cell<u32> },
}

impl Text {
    pub fn new() -> Self {
        Text(Repr::Inline {
            len: 0,
            buf: [0u8; INLINE_CAP],
        })
    }

    /// Wraps a copy of `value`.
    pub fn make(value: &str) -> Self {
        if value.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..value.len()].copy_from_slice(value.as_bytes());
            return Text(Repr::Inline {
                len: value.len() as u8,
                buf,
            });
        }
        Text(Repr::Heap {
            data: Rc::from(value),
            char_count: Cell::new(CHAR_COUNT_UNKNOWN),
        })
    }

    pub fn from_string(value: String) -> Self {
        if value.len() <= INLINE_CAP {
            return Self::make(&value);
        }
        Text(Repr::Heap {
            data: Rc::from(value.into_boxed_str()),
            char_count: Cell::new(CHAR_COUNT_UNKNOWN),
        })
    }

    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Inline { len, buf } => {
                let s = &buf[..*len as usize];
                // Only `make` writes `buf`, copying whole `&str` bytes.
                unsafe { str::from_utf8_unchecked(s) }
            }
            Repr::Heap { data, .. } => &data[..],
        }
    }

    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.0, Repr::Inline { .. })
    }

    /// Returns the number of Unicode characters (not bytes)
    pub fn char_count(&self) -> usize {
        match &self.0 {
            Repr::Inline { len, buf } => {
                let byte_len = *len as usize;
                if buf[..byte_len].is_ascii() {
                    byte_len
                } else {
                    self.as_str().chars().count()
                }
            }
            Repr::Heap { data, char_count } => {
                let cached = char_count.get();
                if cached != CHAR_COUNT_UNKNOWN {
                    cached as usize
                } else {
                    let count = data.chars().count();
                    if let Ok(c) = u32::try_from(count) {
                        if c != CHAR_COUNT_UNKNOWN {
                            char_count.set(c);
                        }
                    }
                    count
                }
            }
        }
    }

    /// True when both values share one heap block.
    pub fn shares_storage(&self, other: &Text) -> bool {
        match (&self.0, &other.0) {
            (Repr::Heap { data: a, .. }, Repr::Heap { data: b, .. }) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.as_str() == other.as_str()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::make(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_string(value)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}
