//! # dxfaudit
//!
//! A streaming audit engine for CAD drawings in DXF format.
//!
//! The engine makes a single pass over the raw tag/value text of a drawing
//! and produces a structured quality report: layer inventory, entity counts
//! by type, spatial bounds, format version and a rule-based score. Memory
//! use is bounded by the number of distinct layers, never by file size, so
//! multi-gigabyte drawings stream in constant space.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfaudit::audit_url;
//!
//! // Stream a drawing straight off object storage
//! let report = audit_url("https://bucket.example.com/plan.dxf?sig=...");
//!
//! println!("status: {:?}, score: {}", report.status, report.summary.score);
//! for layer in &report.layers {
//!     println!("  {} ({} entities)", layer.name, layer.entity_count);
//! }
//! println!("{}", report.to_json_pretty()?);
//! # Ok::<(), dxfaudit::AuditError>(())
//! ```
//!
//! ## Architecture
//!
//! One sequential pipeline, each stage feeding the next:
//!
//! - [`transport::ChunkSource`] - turns a URL into an ordered byte stream
//! - [`io::DxfLineReader`] - reassembles logical lines across chunk splits
//! - [`io::StreamScanner`] - record state machine accumulating statistics
//! - [`rules::evaluate`] - pure scoring pass over the finished snapshot
//! - [`report::AuditReport`] - the stable serialized contract
//!
//! Audits never raise past their boundary: transport and stream failures
//! come back as terminal error reports with the cause attached.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod audit;
pub mod error;
pub mod io;
pub mod report;
pub mod rules;
pub mod stats;
pub mod transport;
pub mod types;

// Re-export the audit entry points
pub use audit::{audit_file, audit_reader, audit_url, audit_url_with_source};

// Re-export commonly used types
pub use error::{AuditError, Result};
pub use report::{AuditReport, AuditSummary, BoundingBoxReport, LayerReport, MAX_REPORT_LAYERS};
pub use rules::{AuditStatus, Issue, IssueCode, RuleOutcome, Severity};
pub use stats::{DrawingStats, EntityTally, LayerUsage};
pub use transport::{is_remote_url, ChunkSource, HttpSource};
pub use types::{AxisRange, EntityKind, Section, StreamBounds};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
