//! Archive log records
//!
//! One record is appended per archived file:
//!
//! ```text
//! === ARCHIVE ENTRY ===
//! Timestamp: 2025-03-14T09:26:53+01:00
//! Original: expenses_2025-03-14.txt
//! Archived: archives/expenses_2025-03-14-20250314-092653.txt
//! Bytes: 42
//! --- BEGIN CONTENT ---
//! <content verbatim>
//! --- END CONTENT ---
//!
//! ```
//!
//! `Bytes` is the exact content length, so content that happens to contain
//! marker lines still parses back. Content that does not end in a newline is
//! followed by one extra newline before the end marker.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::{ArchiveError, ArchiveResult};

pub const SECTION_MARKER: &str = "=== ARCHIVE ENTRY ===";
pub const BEGIN_CONTENT: &str = "--- BEGIN CONTENT ---";
pub const END_CONTENT: &str = "--- END CONTENT ---";

const TIMESTAMP_HEADER: &str = "Timestamp: ";
const ORIGINAL_HEADER: &str = "Original: ";
const ARCHIVED_HEADER: &str = "Archived: ";
const BYTES_HEADER: &str = "Bytes: ";

/// A single archival event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// When the file was archived
    pub timestamp: DateTime<FixedOffset>,
    /// Original filename in the working directory
    pub original: String,
    /// Where the file was moved to
    pub archived: String,
    /// Verbatim copy of the archived content
    pub content: Vec<u8>,
}

impl LogRecord {
    /// Create a new record
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        original: impl Into<String>,
        archived: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            timestamp,
            original: original.into(),
            archived: archived.into(),
            content,
        }
    }

    /// Render the record exactly as it is appended to the log
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "{}\n{}{}\n{}{}\n{}{}\n{}{}\n{}\n",
            SECTION_MARKER,
            TIMESTAMP_HEADER,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            ORIGINAL_HEADER,
            self.original,
            ARCHIVED_HEADER,
            self.archived,
            BYTES_HEADER,
            self.content.len(),
            BEGIN_CONTENT,
        );

        let mut out = header.into_bytes();
        out.extend_from_slice(&self.content);
        if needs_terminator(&self.content) {
            out.push(b'\n');
        }
        out.extend_from_slice(END_CONTENT.as_bytes());
        out.extend_from_slice(b"\n\n");
        out
    }

    /// Content as text, replacing invalid UTF-8
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Parse every record in a log file's contents
    pub fn parse_all(data: &[u8]) -> ArchiveResult<Vec<LogRecord>> {
        let mut reader = RecordReader { data, pos: 0 };
        let mut records = Vec::new();

        loop {
            reader.skip_blank_lines();
            if reader.at_end() {
                break;
            }
            let record = reader
                .read_record()
                .map_err(|e| ArchiveError::Log(format!("record {}: {}", records.len() + 1, e)))?;
            records.push(record);
        }

        Ok(records)
    }
}

fn needs_terminator(content: &[u8]) -> bool {
    !content.ends_with(b"\n")
}

struct RecordReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn skip_blank_lines(&mut self) {
        while self.data.get(self.pos) == Some(&b'\n') {
            self.pos += 1;
        }
    }

    fn next_line(&mut self) -> Result<&'a str, String> {
        if self.at_end() {
            return Err("unexpected end of log".into());
        }
        let rest = &self.data[self.pos..];
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        std::str::from_utf8(line).map_err(|_| "header line is not valid UTF-8".to_string())
    }

    fn expect_line(&mut self, expected: &str) -> Result<(), String> {
        let line = self.next_line()?;
        if line == expected {
            Ok(())
        } else {
            Err(format!("expected '{}', found '{}'", expected, line))
        }
    }

    fn header(&mut self, prefix: &str) -> Result<&'a str, String> {
        let line = self.next_line()?;
        line.strip_prefix(prefix)
            .ok_or_else(|| format!("expected '{}' header, found '{}'", prefix.trim_end(), line))
    }

    fn read_record(&mut self) -> Result<LogRecord, String> {
        self.expect_line(SECTION_MARKER)?;

        let timestamp = self.header(TIMESTAMP_HEADER)?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| format!("invalid timestamp '{}': {}", timestamp, e))?;
        let original = self.header(ORIGINAL_HEADER)?.to_string();
        let archived = self.header(ARCHIVED_HEADER)?.to_string();
        let bytes = self.header(BYTES_HEADER)?;
        let len: usize = bytes
            .parse()
            .map_err(|_| format!("invalid byte count '{}'", bytes))?;

        self.expect_line(BEGIN_CONTENT)?;

        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| "content is shorter than its byte count".to_string())?;
        let content = self.data[self.pos..end].to_vec();
        self.pos = end;

        if needs_terminator(&content) {
            if self.data.get(self.pos) != Some(&b'\n') {
                return Err("missing newline after content".into());
            }
            self.pos += 1;
        }

        self.expect_line(END_CONTENT)?;

        Ok(LogRecord {
            timestamp,
            original,
            archived,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
            .unwrap()
    }

    fn record(content: &[u8]) -> LogRecord {
        LogRecord::new(
            timestamp(),
            "expenses_2025-03-14.txt",
            "archives/expenses_2025-03-14-20250314-092653.txt",
            content.to_vec(),
        )
    }

    #[test]
    fn test_render_format() {
        let rendered = String::from_utf8(record(b"1|coffee|3.50\n").to_bytes()).unwrap();
        let expected = "=== ARCHIVE ENTRY ===\n\
                        Timestamp: 2025-03-14T09:26:53+01:00\n\
                        Original: expenses_2025-03-14.txt\n\
                        Archived: archives/expenses_2025-03-14-20250314-092653.txt\n\
                        Bytes: 14\n\
                        --- BEGIN CONTENT ---\n\
                        1|coffee|3.50\n\
                        --- END CONTENT ---\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_content_without_trailing_newline() {
        let rendered = String::from_utf8(record(b"no newline").to_bytes()).unwrap();
        assert!(rendered.contains("Bytes: 10\n"));
        assert!(rendered.contains("--- BEGIN CONTENT ---\nno newline\n--- END CONTENT ---\n"));

        let parsed = LogRecord::parse_all(rendered.as_bytes()).unwrap();
        assert_eq!(parsed[0].content, b"no newline");
    }

    #[test]
    fn test_parse_multiple_records() {
        let mut log = record(b"first\n").to_bytes();
        log.extend(record(b"").to_bytes());
        log.extend(record(b"third").to_bytes());

        let parsed = LogRecord::parse_all(&log).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], record(b"first\n"));
        assert_eq!(parsed[1].content, b"");
        assert_eq!(parsed[2].content, b"third");
        assert_eq!(parsed[0].timestamp, timestamp());
    }

    #[test]
    fn test_content_containing_markers() {
        let tricky = format!("{}\n{}\nBytes: 0\n", END_CONTENT, SECTION_MARKER);
        let mut log = record(tricky.as_bytes()).to_bytes();
        log.extend(record(b"after\n").to_bytes());

        let parsed = LogRecord::parse_all(&log).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].content_lossy(), tricky);
        assert_eq!(parsed[1].content, b"after\n");
    }

    #[test]
    fn test_binary_content() {
        let bytes = vec![0xff, 0x00, 0xfe, b'\n', 0x80];
        let parsed = LogRecord::parse_all(&record(&bytes).to_bytes()).unwrap();
        assert_eq!(parsed[0].content, bytes);
    }

    #[test]
    fn test_empty_log() {
        assert!(LogRecord::parse_all(b"").unwrap().is_empty());
        assert!(LogRecord::parse_all(b"\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_record() {
        let rendered = record(b"some content\n").to_bytes();
        let truncated = &rendered[..rendered.len() - 30];

        let err = LogRecord::parse_all(truncated).unwrap_err();
        assert!(matches!(err, ArchiveError::Log(_)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = LogRecord::parse_all(b"hello world\n").unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }
}
