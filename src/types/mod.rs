//! Value types shared across the audit engine

pub mod bounds;
pub mod entity_kind;
pub mod section;
pub mod version;

pub use bounds::{AxisRange, StreamBounds};
pub use entity_kind::{is_structural_record, EntityKind};
pub use section::Section;
pub use version::{release_label, resolve_version, VERSION_CODE_PREFIX};
