//! Externally visible audit report
//!
//! The report is the sole contract consumed by the surrounding service:
//! serialized field names are stable API and must not drift. Everything here
//! is a plain value, independently serializable with no handle back into the
//! engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{self, AuditStatus, Issue, IssueCode, Severity};
use crate::stats::DrawingStats;

/// Maximum number of layers included in a report
pub const MAX_REPORT_LAYERS: usize = 50;

/// Axis-aligned extents as reported. Axes that never saw a coordinate
/// render as zero rather than an infinity sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxReport {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBoxReport {
    fn zero() -> Self {
        BoundingBoxReport {
            min: [0.0; 3],
            max: [0.0; 3],
        }
    }
}

/// Aggregate figures for the audited drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total_layers: usize,
    pub entities: u64,
    pub version: String,
    pub score: u32,
    pub total_lines: u64,
    pub bounding_box: BoundingBoxReport,
    /// Cause of a terminal failure; absent from successful reports
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// One layer entry, in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    pub name: String,
    pub color: i16,
    pub linetype: String,
    pub entity_count: u64,
}

/// Complete audit result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub status: AuditStatus,
    pub summary: AuditSummary,
    /// First-seen layers, truncated to [`MAX_REPORT_LAYERS`]
    pub layers: Vec<LayerReport>,
    /// Findings from the rule engine, or the single terminal error
    pub details: Vec<Issue>,
    /// Entity counts by type name, nonzero entries only, in reporting order
    pub entity_breakdown: IndexMap<String, u64>,
}

impl AuditReport {
    /// Assemble the report for a completed scan: run the rule engine, then
    /// apply the truncation and filtering policies.
    pub fn from_stats(stats: &DrawingStats) -> Self {
        let outcome = rules::evaluate(stats);

        let layers = stats
            .layers
            .iter()
            .take(MAX_REPORT_LAYERS)
            .map(|(name, usage)| LayerReport {
                name: name.clone(),
                color: usage.color,
                linetype: usage.linetype.clone(),
                entity_count: usage.entity_count,
            })
            .collect();

        let entity_breakdown = stats
            .entities
            .nonzero()
            .map(|(kind, count)| (kind.name().to_string(), count))
            .collect();

        AuditReport {
            status: AuditStatus::from_score(outcome.score),
            summary: AuditSummary {
                total_layers: stats.layers.len(),
                entities: stats.entities.total(),
                version: stats.version_label().to_string(),
                score: outcome.score,
                total_lines: stats.total_lines,
                bounding_box: BoundingBoxReport {
                    min: stats.bounds.min_point(),
                    max: stats.bounds.max_point(),
                },
                error: None,
            },
            layers,
            details: outcome.issues,
            entity_breakdown,
        }
    }

    /// Terminal report for a source that could not be opened. Nothing was
    /// streamed, so every statistic is zero.
    pub fn download_error(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self::terminal(
            IssueCode::DownloadError,
            format!("Failed to download file: {}", cause),
            cause,
        )
    }

    /// Terminal report for a stream that failed after processing began
    pub fn processing_error(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self::terminal(IssueCode::ProcessingError, cause.clone(), cause)
    }

    fn terminal(code: IssueCode, summary_error: String, detail: String) -> Self {
        AuditReport {
            status: AuditStatus::Error,
            summary: AuditSummary {
                total_layers: 0,
                entities: 0,
                version: "Unknown".to_string(),
                score: 0,
                total_lines: 0,
                bounding_box: BoundingBoxReport::zero(),
                error: Some(summary_error),
            },
            layers: Vec::new(),
            details: vec![Issue::new(code, Severity::Fail, detail)],
            entity_breakdown: IndexMap::new(),
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to human-readable JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LayerUsage;
    use crate::types::EntityKind;

    fn sample_stats() -> DrawingStats {
        let mut stats = DrawingStats::new();
        stats.total_lines = 42;
        stats.version = Some("2018".to_string());
        stats.entities.record(EntityKind::Line);
        stats.entities.record(EntityKind::Line);
        stats.entities.record(EntityKind::Circle);
        for name in ["WALLS", "DOORS"] {
            let mut usage = LayerUsage::new();
            usage.entity_count = 1;
            stats.layers.insert(name.to_string(), usage);
        }
        stats.bounds.x.update(0.0);
        stats.bounds.x.update(10.0);
        stats.bounds.y.update(-2.0);
        stats.bounds.y.update(8.0);
        stats
    }

    #[test]
    fn test_report_from_clean_stats() {
        let report = AuditReport::from_stats(&sample_stats());
        assert_eq!(report.status, AuditStatus::Pass);
        assert_eq!(report.summary.score, 100);
        assert_eq!(report.summary.entities, 3);
        assert_eq!(report.summary.total_layers, 2);
        assert_eq!(report.summary.total_lines, 42);
        assert_eq!(report.summary.version, "2018");
        assert_eq!(report.summary.error, None);
        assert_eq!(report.summary.bounding_box.min, [0.0, -2.0, 0.0]);
        assert_eq!(report.summary.bounding_box.max, [10.0, 8.0, 0.0]);
        assert_eq!(report.layers.len(), 2);
        assert_eq!(report.layers[0].name, "WALLS");
        assert_eq!(report.details[0].code, IssueCode::AllChecksPassed);
    }

    #[test]
    fn test_breakdown_is_nonzero_in_reporting_order() {
        let report = AuditReport::from_stats(&sample_stats());
        let keys: Vec<&str> = report.entity_breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["LINE", "CIRCLE"]);
        assert_eq!(report.entity_breakdown["LINE"], 2);
        assert!(!report.entity_breakdown.contains_key("ARC"));
    }

    #[test]
    fn test_layer_list_truncates_but_total_does_not() {
        let mut stats = DrawingStats::new();
        for i in 0..80 {
            let mut usage = LayerUsage::new();
            usage.entity_count = 1;
            stats.layers.insert(format!("LAYER-{:03}", i), usage);
        }
        let report = AuditReport::from_stats(&stats);
        assert_eq!(report.layers.len(), MAX_REPORT_LAYERS);
        assert_eq!(report.summary.total_layers, 80);
        // First-seen order, not sorted
        assert_eq!(report.layers[0].name, "LAYER-000");
        assert_eq!(report.layers[49].name, "LAYER-049");
    }

    #[test]
    fn test_unknown_version_label() {
        let stats = DrawingStats::new();
        let report = AuditReport::from_stats(&stats);
        assert_eq!(report.summary.version, "Unknown");
    }

    #[test]
    fn test_download_error_report() {
        let report = AuditReport::download_error("HTTP 404");
        assert_eq!(report.status, AuditStatus::Error);
        assert_eq!(report.summary.score, 0);
        assert_eq!(
            report.summary.error.as_deref(),
            Some("Failed to download file: HTTP 404")
        );
        assert!(report.layers.is_empty());
        assert!(report.entity_breakdown.is_empty());
        assert_eq!(report.details.len(), 1);
        assert_eq!(report.details[0].code, IssueCode::DownloadError);
        assert_eq!(report.details[0].severity, Severity::Fail);
        assert_eq!(report.details[0].message, "HTTP 404");
    }

    #[test]
    fn test_processing_error_report() {
        let report = AuditReport::processing_error("peer reset");
        assert_eq!(report.status, AuditStatus::Error);
        assert_eq!(report.summary.error.as_deref(), Some("peer reset"));
        assert_eq!(report.details[0].code, IssueCode::ProcessingError);
        assert_eq!(report.details[0].message, "peer reset");
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let report = AuditReport::from_stats(&sample_stats());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["status"], "pass");
        assert!(value["summary"]["total_layers"].is_number());
        assert!(value["summary"]["bounding_box"]["min"].is_array());
        assert_eq!(value["layers"][0]["linetype"], "Continuous");
        assert_eq!(value["details"][0]["code"], "ALL_CHECKS_PASSED");
        assert_eq!(value["details"][0]["severity"], "pass");
        // No error key on success, no layer key on layer-less issues
        assert!(value["summary"].get("error").is_none());
        assert!(value["details"][0].get("layer").is_none());
    }
}
