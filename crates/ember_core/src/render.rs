//! Textual rendering, the one routine that differs per element type.
//!
//! Characters render as a quoted literal: `"alex"`.
//! Integers render as a spaced list: `[ 1, 2, 3 ]`, and `[  ]` when empty.

use std::fmt;
use std::io::{self, Write};

use crate::appendable::Appendable;
use crate::seq::GrowSeq;

mod sealed {
    pub trait Sealed {}
    impl Sealed for char {}
    impl Sealed for i32 {}
}

/// Element types a [`GrowSeq`] can hold.
pub trait Element: Copy + sealed::Sealed {
    fn render_elements<A: Appendable + ?Sized>(items: &[Self], out: &mut A);
}

impl Element for char {
    /// Stops at the first NUL, which terminates the text the same way the
    /// generated program's string literals are terminated.
    fn render_elements<A: Appendable + ?Sized>(items: &[Self], out: &mut A) {
        out.append_char('"');
        for &c in items.iter().take_while(|&&c| c != '\0') {
            out.append_char(c);
        }
        out.append_char('"');
    }
}

impl Element for i32 {
    fn render_elements<A: Appendable + ?Sized>(items: &[Self], out: &mut A) {
        out.append_str("[ ");
        for (i, &v) in items.iter().enumerate() {
            if i > 0 {
                out.append_str(", ");
            }
            out.append_i64(i64::from(v));
        }
        out.append_str(" ]");
    }
}

impl<T: Element> GrowSeq<T> {
    pub fn render_into<A: Appendable + ?Sized>(&self, out: &mut A) {
        T::render_elements(self.as_slice(), out);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Writes the rendering and a newline to stdout in one write.
    pub fn print(&self) -> io::Result<()> {
        let mut line: Vec<u8> = Vec::with_capacity(self.len() + 8);
        self.render_into(&mut line);
        line.push(b'\n');
        let mut stdout = io::stdout().lock();
        stdout.write_all(&line)?;
        stdout.flush()
    }
}

impl<T: Element> fmt::Display for GrowSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::seq::{CharSeq, IntSeq};

    #[test]
    fn empty_renderings() {
        assert_eq!(IntSeq::make().render(), "[  ]");
        assert_eq!(CharSeq::make().render(), "\"\"");
    }

    #[test]
    fn single_int_has_no_separator() {
        let mut s = IntSeq::make();
        s.push(-7);
        assert_eq!(s.render(), "[ -7 ]");
    }

    #[test]
    fn chars_render_up_to_nul() {
        let mut s = CharSeq::make();
        for c in ['h', 'i', '\0', 'x'] {
            s.push(c);
        }
        assert_eq!(s.len(), 4);
        assert_eq!(s.render(), "\"hi\"");
    }

    #[test]
    fn display_matches_render() {
        let mut s = IntSeq::make();
        s.add(&[i32::MIN, 0, i32::MAX]);
        assert_eq!(format!("{s}"), "[ -2147483648, 0, 2147483647 ]");
    }
}
