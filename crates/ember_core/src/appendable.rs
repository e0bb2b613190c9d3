/// Text sink the rendering routines write into.
pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_char(&mut self, c: char);
    fn append_i64(&mut self, i: i64);
}

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_char(&mut self, c: char) {
        self.push(c);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
}

/// UTF-8 bytes, for output headed straight to a writer.
impl Appendable for Vec<u8> {
    fn append_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }
    fn append_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.extend_from_slice(buf.format(i).as_bytes());
    }
}
