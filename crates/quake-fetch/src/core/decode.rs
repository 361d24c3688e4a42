use std::char::REPLACEMENT_CHARACTER;

use crate::data::LineMode;

/// Incremental UTF-8 decoder for a response body delivered in chunks.
///
/// A multi-byte sequence cut by a chunk boundary is held back until the next
/// chunk completes it, so the decoded text does not depend on how the
/// transport split the body. Invalid sequences become U+FFFD, the same as
/// [`String::from_utf8_lossy`] over the whole body.
#[derive(Debug, Default)]
pub struct TextDecoder {
    pending:   Vec<u8>,
    text:      String,
    line_mode: LineMode,
}

impl TextDecoder {
    pub fn new(line_mode: LineMode) -> Self {
        Self {
            line_mode,
            ..Self::default()
        }
    }

    pub fn push(&mut self, chunk: &[u8]) {
        let Self {
            pending,
            text,
            line_mode,
        } = self;
        pending.extend_from_slice(chunk);

        let mut rest: &[u8] = pending.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    append(text, *line_mode, valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    append(text, *line_mode, &String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            text.push(REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        // incomplete sequence at the end; wait for more bytes
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        let consumed = pending.len() - rest.len();
        pending.drain(..consumed);
    }

    /// Bytes held back waiting for the rest of a character.
    pub fn pending_len(&self) -> usize { self.pending.len() }

    /// Finish decoding. A truncated trailing sequence becomes one U+FFFD.
    pub fn finish(mut self) -> String {
        if !self.pending.is_empty() {
            self.text.push(REPLACEMENT_CHARACTER);
        }
        self.text
    }
}

fn append(text: &mut String, line_mode: LineMode, decoded: &str) {
    match line_mode {
        LineMode::Preserve => text.push_str(decoded),
        LineMode::JoinLines => text.extend(decoded.chars().filter(|c| !matches!(c, '\r' | '\n'))),
    }
}

/// Decode a sequence of body chunks into text.
///
/// # Examples
///
/// ```
/// use quake_fetch::{LineMode, decode_to_text};
///
/// let chunks: [&[u8]; 2] = [b"{\"features\":", b"\n[]}"];
/// assert_eq!(decode_to_text(chunks, LineMode::Preserve), "{\"features\":\n[]}");
/// assert_eq!(decode_to_text(chunks, LineMode::JoinLines), "{\"features\":[]}");
/// ```
pub fn decode_to_text<I>(chunks: I, line_mode: LineMode) -> String
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut decoder = TextDecoder::new(line_mode);
    for chunk in chunks {
        decoder.push(chunk.as_ref());
    }
    decoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "{\"place\": \"Ōita, Japan · 深さ 10km\",\r\n \"mag\": 6.1}\n";

    #[test]
    fn single_chunk_is_verbatim() {
        assert_eq!(decode_to_text([BODY.as_bytes()], LineMode::Preserve), BODY);
    }

    #[test]
    fn every_split_point_decodes_the_same() {
        let bytes = BODY.as_bytes();
        for split in 0..=bytes.len() {
            let (head, tail) = bytes.split_at(split);
            assert_eq!(
                decode_to_text([head, tail], LineMode::Preserve),
                BODY,
                "split at byte {split}"
            );
        }
    }

    #[test]
    fn byte_at_a_time_decodes_the_same() {
        let chunks = BODY.as_bytes().chunks(1);
        assert_eq!(decode_to_text(chunks, LineMode::Preserve), BODY);
    }

    #[test]
    fn split_character_is_held_back() {
        let bytes = "深".as_bytes();
        let mut decoder = TextDecoder::new(LineMode::Preserve);
        decoder.push(&bytes[..2]);
        assert_eq!(decoder.pending_len(), 2);
        decoder.push(&bytes[2..]);
        assert_eq!(decoder.pending_len(), 0);
        assert_eq!(decoder.finish(), "深");
    }

    #[test]
    fn invalid_bytes_match_lossy_decoding() {
        let bytes: &[u8] = b"ok \xff\xfe then \xe6\xb7 end";
        let expected = String::from_utf8_lossy(bytes).into_owned();

        assert_eq!(decode_to_text([bytes], LineMode::Preserve), expected);
        for split in 0..=bytes.len() {
            let (head, tail) = bytes.split_at(split);
            assert_eq!(decode_to_text([head, tail], LineMode::Preserve), expected);
        }
    }

    #[test]
    fn truncated_tail_becomes_replacement() {
        let text = decode_to_text([&"深".as_bytes()[..2]], LineMode::Preserve);
        assert_eq!(text, "\u{FFFD}");
    }

    #[test]
    fn join_lines_drops_terminators() {
        let text = decode_to_text(["line one\r\nline two\nline three\r".as_bytes()], LineMode::JoinLines);
        assert_eq!(text, "line oneline twoline three");
    }

    #[test]
    fn join_lines_is_chunking_independent() {
        let expected = decode_to_text([BODY.as_bytes()], LineMode::JoinLines);
        assert!(!expected.contains('\n'));
        let chunks = BODY.as_bytes().chunks(3);
        assert_eq!(decode_to_text(chunks, LineMode::JoinLines), expected);
    }

    #[test]
    fn empty_body_is_empty_text() {
        assert_eq!(decode_to_text(std::iter::empty::<&[u8]>(), LineMode::Preserve), "");
    }
}
