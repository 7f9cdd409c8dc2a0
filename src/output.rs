//! Report output
//!
//! Writes a result set as a count line, a blank line, then the records as
//! an indented JSON array.

use crate::error::Result;
use crate::types::ResultSet;
use std::io::Write;

/// Write the report for `results` to `out`
pub fn write_report<W: Write>(out: &mut W, results: &ResultSet) -> Result<()> {
    writeln!(out, "Fetched {} events total", results.len())?;
    writeln!(out)?;
    serde_json::to_writer_pretty(&mut *out, results.records())
        .map_err(std::io::Error::from)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Accepts the count line, then fails once the JSON array starts
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.contains(&b'[') {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "pipe closed",
                ));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_report() {
        let mut results = ResultSet::new();
        results.push_page(vec![json!({"id": "a", "name": "Show"})]);
        results.push_page(vec![json!({"id": "b"})]);

        let mut out = Vec::new();
        write_report(&mut out, &results).unwrap();

        let expected = r#"Fetched 2 events total

[
  {
    "id": "a",
    "name": "Show"
  },
  {
    "id": "b"
  }
]
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_report_empty() {
        let mut out = Vec::new();
        write_report(&mut out, &ResultSet::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fetched 0 events total\n\n[]\n"
        );
    }

    #[test]
    fn test_write_report_json_failure_is_io_error() {
        let mut results = ResultSet::new();
        results.push_page(vec![json!({"id": "a"})]);

        let mut out = ClosedPipe;
        let err = write_report(&mut out, &results).unwrap_err();

        assert!(matches!(err, Error::Io(_)), "{err:?}");
        assert!(!err.to_string().contains("parse"));
    }
}
