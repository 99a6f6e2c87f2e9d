//! Running statistics accumulated during a streaming pass
//!
//! Everything here is bounded by the number of distinct layers and the fixed
//! entity kind set, never by file size, so memory stays constant for
//! arbitrarily large drawings.

use indexmap::IndexMap;

use crate::types::{EntityKind, StreamBounds};

/// ACI color index assigned to layers discovered from entity records.
/// Entity records carry no color data, so the table default (7, white)
/// stands in.
pub const DEFAULT_LAYER_COLOR: i16 = 7;

/// Line type assigned to layers discovered from entity records.
pub const DEFAULT_LINETYPE: &str = "Continuous";

/// Usage data for one layer, keyed by name in the layer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerUsage {
    /// Number of entity records referencing the layer
    pub entity_count: u64,
    /// ACI color index
    pub color: i16,
    /// Line type name
    pub linetype: String,
}

impl LayerUsage {
    /// Create an entry with the table defaults and a zero count
    pub fn new() -> Self {
        LayerUsage {
            entity_count: 0,
            color: DEFAULT_LAYER_COLOR,
            linetype: DEFAULT_LINETYPE.to_string(),
        }
    }
}

impl Default for LayerUsage {
    fn default() -> Self {
        LayerUsage::new()
    }
}

/// Fixed-capacity tally of entity records by kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityTally {
    counts: [u64; EntityKind::COUNT],
}

impl EntityTally {
    /// Create an empty tally
    pub fn new() -> Self {
        EntityTally {
            counts: [0; EntityKind::COUNT],
        }
    }

    /// Count one record of the given kind
    pub fn record(&mut self, kind: EntityKind) {
        self.counts[kind.index()] += 1;
    }

    /// Count for one kind
    pub fn count(&self, kind: EntityKind) -> u64 {
        self.counts[kind.index()]
    }

    /// Total records counted, the catch-all bucket included
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Kinds with a nonzero count, in reporting order
    pub fn nonzero(&self) -> impl Iterator<Item = (EntityKind, u64)> + '_ {
        EntityKind::ALL
            .iter()
            .map(move |&kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

/// Complete statistics snapshot produced by one streaming pass.
#[derive(Debug, Clone, Default)]
pub struct DrawingStats {
    /// Reassembled lines consumed, control and empty lines included
    pub total_lines: u64,
    /// Layers in first-seen order
    pub layers: IndexMap<String, LayerUsage>,
    /// Entity record tally
    pub entities: EntityTally,
    /// Coordinate extents across all primary coordinate records
    pub bounds: StreamBounds,
    /// Resolved release label, if the header declared a version
    pub version: Option<String>,
}

impl DrawingStats {
    /// Create an empty snapshot
    pub fn new() -> Self {
        DrawingStats::default()
    }

    /// Version label for reporting; "Unknown" when the header never
    /// declared one.
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("Unknown")
    }
}
