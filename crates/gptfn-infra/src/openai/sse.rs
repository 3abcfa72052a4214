//! Incremental parser for the chat-completions event stream.
//!
//! The protocol is line oriented: an event is a `data: <payload>` line
//! finalized by a blank line, and the payload is either a JSON object
//! or the literal `[DONE]`. The parser is a two-state machine:
//!
//! - holding no payload: a `data: ` line captures its payload; any
//!   other line is protocol noise and is ignored.
//! - holding a payload: a blank line finalizes the event; any other
//!   line resets the state -- the captured payload is discarded and the
//!   offending line itself is not re-examined.
//!
//! The reset rule silently drops partially-buffered data on malformed
//! or interleaved input. That behavior is load-bearing and covered by
//! tests; do not "fix" it into an error path.

const DATA_PREFIX: &str = "data: ";
const DONE_PAYLOAD: &str = "[DONE]";

/// A finalized server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SseEvent {
    /// A JSON payload to decode.
    Data(String),
    /// The terminal `[DONE]` marker; the sequence is over.
    Done,
}

/// Line-at-a-time event assembler.
#[derive(Debug, Default)]
pub(crate) struct EventParser {
    payload: Option<String>,
}

impl EventParser {
    /// Feed one line (without its terminator). Returns a finalized
    /// event when this line completes one.
    pub(crate) fn feed_line(&mut self, line: &str) -> Option<SseEvent> {
        match self.payload.take() {
            None => {
                if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
                    self.payload = Some(payload.to_string());
                }
                None
            }
            Some(payload) => {
                if !line.is_empty() {
                    // State reset: discard the buffered payload.
                    return None;
                }
                if payload == DONE_PAYLOAD {
                    Some(SseEvent::Done)
                } else {
                    Some(SseEvent::Data(payload))
                }
            }
        }
    }
}

/// Splits an arbitrary byte-chunk sequence into lines.
///
/// Lines end at `\n`; a trailing `\r` is stripped so CRLF responses
/// parse the same as LF. Bytes after the last terminator stay buffered
/// until the next chunk arrives.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    pub(crate) fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    pub(crate) fn next_line(&mut self) -> Option<String> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(lines: &[&str]) -> Vec<SseEvent> {
        let mut parser = EventParser::default();
        lines
            .iter()
            .filter_map(|line| parser.feed_line(line))
            .collect()
    }

    #[test]
    fn test_single_event_then_done() {
        let events = feed_all(&[
            r#"data: {"choices":[{"delta":{"content":"Hi"}}]}"#,
            "",
            "data: [DONE]",
            "",
        ]);
        assert_eq!(
            events,
            vec![
                SseEvent::Data(r#"{"choices":[{"delta":{"content":"Hi"}}]}"#.to_string()),
                SseEvent::Done,
            ]
        );
    }

    #[test]
    fn test_noise_before_data_is_ignored() {
        let events = feed_all(&[": keepalive", "event: message", "data: {}", ""]);
        assert_eq!(events, vec![SseEvent::Data("{}".to_string())]);
    }

    #[test]
    fn test_stray_line_while_holding_data_resets_state() {
        // The captured payload is dropped, the stray line is not
        // re-examined, and parsing resumes cleanly afterwards.
        let events = feed_all(&[
            "data: {\"lost\":true}",
            "interleaved garbage",
            "",
            "data: {\"kept\":true}",
            "",
        ]);
        assert_eq!(events, vec![SseEvent::Data("{\"kept\":true}".to_string())]);
    }

    #[test]
    fn test_second_data_line_also_resets_state() {
        // Even a well-formed data line is "any non-blank line" while a
        // payload is held.
        let events = feed_all(&["data: first", "data: second", ""]);
        assert_eq!(events, vec![]);
    }

    #[test]
    fn test_blank_lines_without_data_produce_nothing() {
        assert_eq!(feed_all(&["", "", ""]), vec![]);
    }

    #[test]
    fn test_line_buffer_reassembles_split_chunks() {
        let mut lines = LineBuffer::default();
        lines.push(b"data: par");
        assert_eq!(lines.next_line(), None);
        lines.push(b"tial\n\nda");
        assert_eq!(lines.next_line(), Some("data: partial".to_string()));
        assert_eq!(lines.next_line(), Some(String::new()));
        assert_eq!(lines.next_line(), None);
        lines.push(b"ta: x\n");
        assert_eq!(lines.next_line(), Some("data: x".to_string()));
    }

    #[test]
    fn test_line_buffer_strips_crlf() {
        let mut lines = LineBuffer::default();
        lines.push(b"data: x\r\n\r\n");
        assert_eq!(lines.next_line(), Some("data: x".to_string()));
        assert_eq!(lines.next_line(), Some(String::new()));
    }
}
