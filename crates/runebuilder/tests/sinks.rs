#![allow(missing_docs)]

mod common;

use runebuilder::{StringBuilder, SyncStringBuilder};

#[test]
fn fmt_write_formats_into_builder() {
    use core::fmt::Write as _;

    let mut sb = StringBuilder::with_capacity(8);
    for (i, word) in ["null", "eins", "zwö"].iter().enumerate() {
        writeln!(sb, "{i}: {word}").unwrap();
    }
    assert_eq!(sb.to_string(), "0: null\n1: eins\n2: zwö\n");
}

#[test]
fn io_copy_into_builder() {
    let mut source = common::MIXED.as_bytes();
    let mut sb = StringBuilder::new();
    let copied = std::io::copy(&mut source, &mut sb).unwrap();
    assert_eq!(copied, u64::try_from(common::MIXED.len()).unwrap());
    assert_eq!(sb.to_string(), common::MIXED);
}

#[test]
fn io_copy_through_a_small_buffer() {
    use std::io::{BufWriter, Write as _};

    let mut sb = StringBuilder::new();
    {
        // capacity 3 cuts the four-byte emoji apart
        let mut writer = BufWriter::with_capacity(3, &mut sb);
        for chunk in common::MIXED.as_bytes().chunks(2) {
            writer.write_all(chunk).unwrap();
        }
        writer.flush().unwrap();
    }
    assert_eq!(sb.to_string(), common::MIXED);
}

#[test]
fn shared_builder_accepts_io_writes() {
    use std::io::Write as _;

    let sb = SyncStringBuilder::new();
    (&sb).write_all(b"Gr\xC3\xBC\xC3\x9Fe").unwrap();
    (&sb).write_all(b" \xFF").unwrap();
    (&sb).flush().unwrap();
    assert_eq!(sb.to_string(), "Grüße \u{FFFD}");
}

#[test]
fn append_bytes_reports_code_points() {
    let mut sb = StringBuilder::new();
    assert_eq!(sb.append_bytes(common::MIXED.as_bytes()), 9);
    assert_eq!(sb.len(), 9);
}
