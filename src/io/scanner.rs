//! Record state machine for the streaming audit
//!
//! DXF text alternates group-code lines with value lines. The scanner never
//! materializes a record: it keeps the previous line in a single register
//! and evaluates each (previous, current) pair as lines arrive, which is
//! what keeps the pass single and the memory constant.

use crate::stats::{DrawingStats, LayerUsage};
use crate::types::{
    is_structural_record, resolve_version, EntityKind, Section, VERSION_CODE_PREFIX,
};

/// Group code introducing a record type name
const TYPE_TAG: &str = "0";
/// Group code carrying a layer name
const LAYER_TAG: &str = "8";
/// Group code carrying the primary value of a header variable
const HEADER_VALUE_TAG: &str = "1";
/// Group code carrying a primary X coordinate
const X_TAG: &str = "10";
/// Group code carrying a primary Y coordinate
const Y_TAG: &str = "20";
/// Group code carrying a primary Z coordinate
const Z_TAG: &str = "30";

/// Streaming record scanner.
///
/// Feed it every reassembled line in order; read the accumulated
/// [`DrawingStats`] when the stream ends. Malformed input never fails the
/// scan, it just fails to match any rule.
#[derive(Debug, Default)]
pub struct StreamScanner {
    section: Section,
    /// Previous line, i.e. the group code a value line belongs to
    pending_tag: String,
    current_entity: Option<EntityKind>,
    current_layer: Option<String>,
    stats: DrawingStats,
}

impl StreamScanner {
    /// Create a scanner in its initial state (outside any section)
    pub fn new() -> Self {
        StreamScanner::default()
    }

    /// Consume one reassembled line.
    ///
    /// Section control lines switch sections and match no record rule.
    /// Every line, control or data, becomes the pending tag for the next
    /// call; the register is updated last.
    pub fn process_line(&mut self, line: &str) {
        self.stats.total_lines += 1;

        if let Some(next) = self.section.transition(line) {
            self.section = next;
        } else {
            self.apply_record_rules(line);
        }

        self.pending_tag.clear();
        self.pending_tag.push_str(line);
    }

    fn apply_record_rules(&mut self, line: &str) {
        match self.pending_tag.as_str() {
            HEADER_VALUE_TAG if self.section == Section::Header => {
                // The first AC-prefixed header value wins; later matches
                // (and anything after a conflicting duplicate) are ignored
                if self.stats.version.is_none() && line.starts_with(VERSION_CODE_PREFIX) {
                    self.stats.version = Some(resolve_version(line));
                }
            }
            TYPE_TAG if self.section == Section::Entities => {
                if let Some(kind) = EntityKind::from_type_name(line) {
                    self.stats.entities.record(kind);
                    self.current_entity = Some(kind);
                } else if !is_structural_record(line) {
                    self.stats.entities.record(EntityKind::Other);
                    self.current_entity = Some(EntityKind::Other);
                }
            }
            LAYER_TAG if self.section == Section::Entities => {
                match self.stats.layers.get_mut(line) {
                    Some(usage) => usage.entity_count += 1,
                    None => {
                        let mut usage = LayerUsage::new();
                        usage.entity_count = 1;
                        self.stats.layers.insert(line.to_string(), usage);
                    }
                }
                if self.current_layer.as_deref() != Some(line) {
                    self.current_layer = Some(line.to_string());
                }
            }
            X_TAG => {
                if let Ok(value) = line.parse::<f64>() {
                    self.stats.bounds.x.update(value);
                }
            }
            Y_TAG => {
                if let Ok(value) = line.parse::<f64>() {
                    self.stats.bounds.y.update(value);
                }
            }
            Z_TAG => {
                if let Ok(value) = line.parse::<f64>() {
                    self.stats.bounds.z.update(value);
                }
            }
            _ => {}
        }
    }

    /// Section the scanner is currently inside
    pub fn section(&self) -> Section {
        self.section
    }

    /// Type of the entity record most recently started, if any
    pub fn current_entity(&self) -> Option<EntityKind> {
        self.current_entity
    }

    /// Layer named by the most recent layer record, if any
    pub fn current_layer(&self) -> Option<&str> {
        self.current_layer.as_deref()
    }

    /// Lines consumed so far
    pub fn total_lines(&self) -> u64 {
        self.stats.total_lines
    }

    /// Read access to the running statistics
    pub fn stats(&self) -> &DrawingStats {
        &self.stats
    }

    /// Finish the pass and take the accumulated statistics
    pub fn into_stats(self) -> DrawingStats {
        self.stats
    }
}
