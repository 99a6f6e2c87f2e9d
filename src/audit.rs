//! Streaming audit orchestration
//!
//! The entry points here wire transport, line reassembly, record scanning
//! and rule evaluation into one pass, then map every failure onto a
//! terminal error report. They always hand back a report value; no error
//! escapes the audit boundary.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{error, info};

use crate::error::Result;
use crate::io::{DxfLineReader, StreamScanner};
use crate::report::AuditReport;
use crate::stats::DrawingStats;
use crate::transport::{ChunkSource, HttpSource};

/// Progress log cadence, in reassembled lines
const PROGRESS_LINE_INTERVAL: u64 = 1_000_000;
/// Longest URL prefix echoed to the log. Presigned query strings stay out
/// of log files.
const LOGGED_URL_CHARS: usize = 100;

/// Audit a drawing reachable over HTTP(S), streaming the body.
///
/// Never fails: transport problems come back as a download-error report,
/// stream problems as a processing-error report.
pub fn audit_url(url: &str) -> AuditReport {
    match HttpSource::new() {
        Ok(source) => audit_url_with_source(url, &source),
        Err(e) => {
            error!(error = %e, "failed to construct HTTP source");
            AuditReport::download_error(e.to_string())
        }
    }
}

/// Audit a drawing through a caller-supplied transport
pub fn audit_url_with_source(url: &str, source: &dyn ChunkSource) -> AuditReport {
    info!(url = log_prefix(url), "starting streaming audit");
    match source.open(url) {
        Ok(stream) => audit_reader(stream),
        Err(e) => {
            error!(error = %e, "download failed before streaming began");
            AuditReport::download_error(e.to_string())
        }
    }
}

/// Audit a drawing stored on the local filesystem
pub fn audit_file<P: AsRef<Path>>(path: P) -> AuditReport {
    let path = path.as_ref();
    info!(path = %path.display(), "starting streaming audit");
    match File::open(path) {
        Ok(file) => audit_reader(file),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to open drawing");
            AuditReport::download_error(format!("failed to open {}: {}", path.display(), e))
        }
    }
}

/// Audit a drawing from any byte reader.
///
/// Read failures mid-stream produce a processing-error report; everything
/// else yields a scored report.
pub fn audit_reader<R: Read>(reader: R) -> AuditReport {
    match scan_stream(reader) {
        Ok(stats) => {
            let report = AuditReport::from_stats(&stats);
            info!(
                entities = report.summary.entities,
                layers = report.summary.total_layers,
                lines = report.summary.total_lines,
                score = report.summary.score,
                "streaming audit complete"
            );
            report
        }
        Err(e) => {
            error!(error = %e, "streaming audit failed");
            AuditReport::processing_error(e.to_string())
        }
    }
}

/// One sequential pass: reassemble lines, feed the scanner, return the
/// accumulated statistics.
fn scan_stream<R: Read>(reader: R) -> Result<DrawingStats> {
    let mut lines = DxfLineReader::new(reader);
    let mut scanner = StreamScanner::new();
    while let Some(line) = lines.next_line()? {
        scanner.process_line(&line);
        if scanner.total_lines() % PROGRESS_LINE_INTERVAL == 0 {
            info!(lines = scanner.total_lines(), "audit progress");
        }
    }
    Ok(scanner.into_stats())
}

/// Truncate a URL for logging without splitting a UTF-8 character
fn log_prefix(url: &str) -> &str {
    if url.len() <= LOGGED_URL_CHARS {
        return url;
    }
    let mut end = LOGGED_URL_CHARS;
    while !url.is_char_boundary(end) {
        end -= 1;
    }
    &url[..end]
}
