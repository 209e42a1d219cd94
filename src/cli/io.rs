//! JSON line I/O for the CLI
//!
//! - Input: one JSON object per line
//! - Output: one JSON object per line
//! - Input lines that are not UTF-8 are reported, not fatal

use std::io::{BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// One raw input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// UTF-8 text without its line terminator
    Text(String),
    /// Bytes that are not valid UTF-8
    NotUtf8,
}

/// Non-blank input lines.
///
/// A line that is not UTF-8 is yielded as `InputLine::NotUtf8` and reading
/// goes on. A read failure yields one error and ends the stream.
pub fn read_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = CliResult<InputLine>> {
    let mut buf = Vec::new();
    let mut done = false;

    std::iter::from_fn(move || {
        while !done {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => done = true,
                Ok(_) => {
                    if buf.ends_with(b"\n") {
                        buf.pop();
                        if buf.ends_with(b"\r") {
                            buf.pop();
                        }
                    }
                    match String::from_utf8(std::mem::take(&mut buf)) {
                        Ok(text) if text.trim().is_empty() => continue,
                        Ok(text) => return Some(Ok(InputLine::Text(text))),
                        Err(_) => return Some(Ok(InputLine::NotUtf8)),
                    }
                }
                Err(e) => {
                    done = true;
                    return Some(Err(CliError::from(e)));
                }
            }
        }
        None
    })
}

/// Write one JSON value as a single line
pub fn write_json<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write text followed by a newline
pub fn write_text<W: Write>(writer: &mut W, text: &str) -> CliResult<()> {
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<InputLine> {
        read_lines(Cursor::new(input.to_vec()))
            .map(Result::unwrap)
            .collect()
    }

    fn text(s: &str) -> InputLine {
        InputLine::Text(s.to_string())
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let lines = collect(b"{\"a\":1}\n\n   \r\n{\"b\":2}\r\n");
        assert_eq!(lines, vec![text("{\"a\":1}"), text("{\"b\":2}")]);
    }

    #[test]
    fn test_read_lines_last_line_without_newline() {
        assert_eq!(collect(b"one\ntwo"), vec![text("one"), text("two")]);
    }

    #[test]
    fn test_read_lines_continues_past_invalid_utf8() {
        let lines = collect(b"first\nbad \xff byte\nlast\n");
        assert_eq!(lines, vec![text("first"), InputLine::NotUtf8, text("last")]);
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_read_error_ends_stream() {
        let reader = std::io::BufReader::new(FailingReader);
        let items: Vec<_> = read_lines(reader).collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[test]
    fn test_write_json_single_line() {
        let mut out = Vec::new();
        write_json(&mut out, &json!({"status": "ok", "data": [1, 2]})).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        let parsed: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed["status"], "ok");
    }
}
