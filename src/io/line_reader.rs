//! Line reassembly over a chunked byte stream
//!
//! DXF text is line-oriented, but transports hand back arbitrary byte
//! fragments. The reader here re-forms complete lines no matter where the
//! fragment boundaries fall, so a line split across two network chunks (or a
//! `\r\n` split down the middle) comes out whole.

use crate::error::Result;
use encoding_rs::Encoding;
use std::io::Read;

/// Bytes requested from the underlying stream per pull.
pub const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Reassembles trimmed logical lines from a byte stream read in fixed-size
/// chunks.
///
/// Only the unterminated tail is retained between pulls, so memory tracks
/// the longest line rather than the stream. After end of input a non-empty
/// tail is emitted as the final line even without a terminator.
pub struct DxfLineReader<R: Read> {
    inner: R,
    /// Carry buffer: received bytes not yet emitted as lines
    buf: Vec<u8>,
    /// Start of the next line within `buf`
    pos: usize,
    /// Bytes past `pos` already scanned and known newline-free
    scanned: usize,
    /// Scratch space for reads, allocated once
    chunk: Vec<u8>,
    eof: bool,
    finished: bool,
    /// Non-UTF8 fallback encoding. `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> DxfLineReader<R> {
    /// Create a reader over a byte stream
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pos: 0,
            scanned: 0,
            chunk: vec![0u8; READ_CHUNK_SIZE],
            eof: false,
            finished: false,
            encoding: None,
        }
    }

    /// Set the fallback encoding used when a line is not valid UTF-8
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Next complete line, trimmed of surrounding whitespace (including
    /// `\r`); `None` once the stream is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }
        loop {
            let search_from = self.pos + self.scanned;
            if let Some(offset) = self.buf[search_from..].iter().position(|&b| b == b'\n') {
                let start = self.pos;
                let end = search_from + offset;
                self.pos = end + 1;
                self.scanned = 0;
                return Ok(Some(self.decode_trimmed(&self.buf[start..end])));
            }
            self.scanned = self.buf.len() - self.pos;

            if self.eof {
                self.finished = true;
                if self.pos < self.buf.len() {
                    let line = self.decode_trimmed(&self.buf[self.pos..]);
                    self.buf.clear();
                    self.pos = 0;
                    self.scanned = 0;
                    return Ok(Some(line));
                }
                return Ok(None);
            }

            // Compact the consumed prefix before pulling the next chunk
            if self.pos > 0 {
                self.buf.drain(..self.pos);
                self.pos = 0;
            }
            let n = self.inner.read(&mut self.chunk)?;
            if n == 0 {
                self.eof = true;
            } else {
                self.buf.extend_from_slice(&self.chunk[..n]);
            }
        }
    }

    /// Decode raw line bytes, handling non-UTF8 bytes gracefully.
    /// Uses the configured encoding for fallback, or Latin-1 if none set.
    fn decode_trimmed(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(s) => s.trim().to_string(),
            Err(_) => {
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(bytes);
                    decoded.trim().to_string()
                } else {
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    let line: String = bytes.iter().map(|&b| b as char).collect();
                    line.trim().to_string()
                }
            }
        }
    }
}
