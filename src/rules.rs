//! Audit rule evaluation
//!
//! A pure pass over a finished [`DrawingStats`] snapshot: no I/O, no shared
//! state, same outcome for the same snapshot every time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats::DrawingStats;

/// Largest drawing extent, in file units, before the scale check fires.
pub const MAX_EXTENT: f64 = 10_000.0;

/// Score every audit starts from
const FULL_SCORE: u32 = 100;
/// Deduction per fail-severity issue
const FAIL_PENALTY: u32 = 20;
/// Deduction per warning-severity issue
const WARNING_PENALTY: u32 = 5;

/// Minimum score for a "pass" status
const PASS_THRESHOLD: u32 = 70;
/// Minimum score for a "warning" status
const WARNING_THRESHOLD: u32 = 50;

/// Severity of an audit issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Warning,
    Fail,
}

impl Severity {
    /// Score deduction for one issue of this severity
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Pass => 0,
            Severity::Warning => WARNING_PENALTY,
            Severity::Fail => FAIL_PENALTY,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Pass => "pass",
            Severity::Warning => "warning",
            Severity::Fail => "fail",
        };
        write!(f, "{}", s)
    }
}

/// Machine-readable issue codes. The serialized names are a stable contract
/// consumed by downstream services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// Entities found on the default ("" or "0") layer
    LayerDefault,
    /// Drawing extents exceed [`MAX_EXTENT`] along X or Y
    ScaleLarge,
    /// Synthetic pass entry emitted when no check fired
    AllChecksPassed,
    /// The source could not be opened; nothing was streamed
    DownloadError,
    /// The stream failed after processing began
    ProcessingError,
}

/// One audit finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
    /// Layer the issue refers to, when layer-specific
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub layer: Option<String>,
}

impl Issue {
    /// Create an issue with no layer attribution
    pub fn new(code: IssueCode, severity: Severity, message: impl Into<String>) -> Self {
        Issue {
            code,
            severity,
            message: message.into(),
            layer: None,
        }
    }

    /// Attribute the issue to a layer
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }
}

/// Overall report status. `Error` is reserved for terminal transport or
/// processing failures; scores only ever derive the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pass,
    Warning,
    Fail,
    Error,
}

impl AuditStatus {
    /// Derive the status from a final score
    pub fn from_score(score: u32) -> Self {
        if score >= PASS_THRESHOLD {
            AuditStatus::Pass
        } else if score >= WARNING_THRESHOLD {
            AuditStatus::Warning
        } else {
            AuditStatus::Fail
        }
    }
}

/// Result of evaluating the rule set against one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Final score, 0 to 100
    pub score: u32,
    /// Findings in evaluation order; never empty
    pub issues: Vec<Issue>,
}

/// Evaluate the fixed rule set against a statistics snapshot.
///
/// The returned issue list is never empty: when no check fires, a single
/// synthetic pass entry takes its place. The synthetic entry carries no
/// penalty, so it is appended after scoring.
pub fn evaluate(stats: &DrawingStats) -> RuleOutcome {
    let mut issues = Vec::new();

    // Entities on the default layer. At most one finding, naming whichever
    // default spelling appeared first.
    for name in ["", "0"] {
        if stats.layers.contains_key(name) {
            issues.push(
                Issue::new(
                    IssueCode::LayerDefault,
                    Severity::Warning,
                    format!(
                        "Entities on default layer \"{}\"; consider organizing them into named layers",
                        name
                    ),
                )
                .with_layer(name),
            );
            break;
        }
    }

    // Oversized extents. Skipped entirely while no X coordinate was seen.
    if stats.bounds.x.has_values() {
        let width = stats.bounds.width();
        let height = stats.bounds.height();
        if width > MAX_EXTENT || height > MAX_EXTENT {
            issues.push(Issue::new(
                IssueCode::ScaleLarge,
                Severity::Warning,
                format!(
                    "Drawing dimensions are very large ({:.0} x {:.0}); check the drawing units",
                    width, height
                ),
            ));
        }
    }

    let penalty: u32 = issues.iter().map(|issue| issue.severity.penalty()).sum();
    let score = FULL_SCORE.saturating_sub(penalty);

    if issues.is_empty() {
        issues.push(Issue::new(
            IssueCode::AllChecksPassed,
            Severity::Pass,
            "File processed successfully; no issues found",
        ));
    }

    RuleOutcome { score, issues }
}
