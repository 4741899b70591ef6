//! Adapters that let formatting and I/O code write into a builder.

use core::{fmt, mem};
use std::io;

use super::StringBuilder;

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append_rune(c);
        Ok(())
    }
}

/// Length of the longest prefix of `bytes` that no later byte can change.
///
/// What remains is the start of a UTF-8 sequence cut off by the end of the
/// chunk. Such a sequence is at most three bytes long.
fn settled_len(bytes: &[u8]) -> usize {
    use bstr::ByteSlice;

    let window = bytes.len().saturating_sub(3);
    // the std slice method of the same name has no notion of `incomplete`
    match ByteSlice::utf8_chunks(&bytes[window..]).last() {
        Some(chunk) if chunk.incomplete() => bytes.len() - chunk.invalid().len(),
        _ => bytes.len(),
    }
}

/// Bytes are decoded lossily (see [`StringBuilder::append_bytes`]) and every
/// chunk is reported as consumed in full.
///
/// A character split across two `write` calls is reassembled: the unfinished
/// tail of one chunk is held back and decoded together with the next. `flush`
/// decodes whatever is still held back, so a stream that ends mid-character
/// yields U+FFFD there.
impl io::Write for StringBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            let settled = settled_len(buf);
            self.append_bytes(&buf[..settled]);
            self.pending.extend_from_slice(&buf[settled..]);
        } else {
            let mut bytes = mem::take(&mut self.pending);
            bytes.extend_from_slice(buf);
            let settled = settled_len(&bytes);
            self.append_bytes(&bytes[..settled]);
            bytes.drain(..settled);
            self.pending = bytes;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let pending = mem::take(&mut self.pending);
            self.append_bytes(&pending);
        }
        Ok(())
    }
}
