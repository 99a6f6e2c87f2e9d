//! Shared test utilities for dxfaudit integration tests.
//!
//! Consolidates the helpers every test crate needs (chunk-scripted readers,
//! in-memory chunk sources, tag/value fixture builders) into a single module
//! imported via `mod common;`.

#![allow(dead_code)]

use std::io::{self, Cursor, Read};

use dxfaudit::error::{AuditError, Result};
use dxfaudit::ChunkSource;

// ===========================================================================
// Readers with scripted chunking
// ===========================================================================

/// Reader that returns scripted fragment sizes, mimicking a transport that
/// splits the stream wherever it pleases. Once the script runs out it keeps
/// using the last size.
pub struct ScriptedReader {
    data: Vec<u8>,
    pos: usize,
    sizes: Vec<usize>,
    call: usize,
}

impl ScriptedReader {
    pub fn new(data: impl Into<Vec<u8>>, sizes: Vec<usize>) -> Self {
        assert!(sizes.iter().all(|&s| s > 0), "zero-size chunks mean EOF");
        Self {
            data: data.into(),
            pos: 0,
            sizes,
            call: 0,
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Ok(0);
        }
        let scripted = self
            .sizes
            .get(self.call)
            .or_else(|| self.sizes.last())
            .copied()
            .unwrap_or(out.len().max(1));
        self.call += 1;
        let n = scripted.min(out.len()).min(self.data.len() - self.pos);
        out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Reader that yields a prefix of valid data, then fails.
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    error_kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: impl Into<Vec<u8>>, error_kind: io::ErrorKind) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            error_kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(self.error_kind, "connection lost"));
        }
        let n = out.len().min(self.data.len() - self.pos).min(16);
        out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

// ===========================================================================
// Chunk sources
// ===========================================================================

/// Source serving a fixed body from memory.
pub struct MemorySource(pub Vec<u8>);

impl ChunkSource for MemorySource {
    fn open(&self, _url: &str) -> Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.0.clone())))
    }
}

/// Source that refuses to open with the given HTTP status.
pub struct StatusFailSource(pub u16);

impl ChunkSource for StatusFailSource {
    fn open(&self, _url: &str) -> Result<Box<dyn Read + Send>> {
        Err(AuditError::HttpStatus(self.0))
    }
}

// ===========================================================================
// Fixture builders
// ===========================================================================

/// Join tag/value pairs into DXF body text, one line each, LF-terminated.
pub fn tag_value_body(pairs: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (code, value) in pairs {
        body.push_str(code);
        body.push('\n');
        body.push_str(value);
        body.push('\n');
    }
    body
}

/// Minimal well-formed drawing: header with a version, one LINE on the
/// given layer, coordinates within a 10x10 box.
pub fn drawing_with_layer(layer: &str) -> String {
    tag_value_body(&[
        ("0", "SECTION"),
        ("2", "HEADER"),
        ("9", "$ACADVER"),
        ("1", "AC1032"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "LINE"),
        ("8", layer),
        ("10", "0.0"),
        ("20", "0.0"),
        ("30", "0.0"),
        ("11", "10.0"),
        ("21", "10.0"),
        ("31", "0.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ])
}
