//! Entity type classification for the audit tally

use std::fmt;

/// Record names that delimit structure rather than describe entities.
///
/// These appear on type lines inside ENTITIES but never count toward the
/// tally, not even as [`EntityKind::Other`]: `SEQEND` closes a polyline
/// sequence, `VERTEX` and `ATTRIB` are sub-records owned by their parent
/// entity, and `ENDSEC` closes the section itself.
pub fn is_structural_record(name: &str) -> bool {
    matches!(name, "ENDSEC" | "SEQEND" | "ATTRIB" | "VERTEX")
}

/// The closed set of entity types tallied individually.
///
/// Any other type name that starts a record in the ENTITIES section counts
/// under `Other`, except the structural records rejected by
/// [`is_structural_record`]. Variant order is the fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    LwPolyline,
    Polyline,
    Circle,
    Arc,
    Text,
    MText,
    Insert,
    Point,
    Dimension,
    Solid,
    Hatch,
    /// The 3DFACE record (Rust identifiers cannot start with a digit)
    Face3D,
    Spline,
    Ellipse,
    /// Catch-all bucket for unrecognized entity types
    Other,
}

impl EntityKind {
    /// Number of tracked kinds, including the catch-all
    pub const COUNT: usize = 16;

    /// Every kind in reporting order
    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Line,
        EntityKind::LwPolyline,
        EntityKind::Polyline,
        EntityKind::Circle,
        EntityKind::Arc,
        EntityKind::Text,
        EntityKind::MText,
        EntityKind::Insert,
        EntityKind::Point,
        EntityKind::Dimension,
        EntityKind::Solid,
        EntityKind::Hatch,
        EntityKind::Face3D,
        EntityKind::Spline,
        EntityKind::Ellipse,
        EntityKind::Other,
    ];

    /// Parse a DXF record type name.
    ///
    /// Returns `None` for names outside the closed set; the caller decides
    /// between the catch-all bucket and skipping structural records.
    pub fn from_type_name(name: &str) -> Option<EntityKind> {
        match name {
            "LINE" => Some(EntityKind::Line),
            "LWPOLYLINE" => Some(EntityKind::LwPolyline),
            "POLYLINE" => Some(EntityKind::Polyline),
            "CIRCLE" => Some(EntityKind::Circle),
            "ARC" => Some(EntityKind::Arc),
            "TEXT" => Some(EntityKind::Text),
            "MTEXT" => Some(EntityKind::MText),
            "INSERT" => Some(EntityKind::Insert),
            "POINT" => Some(EntityKind::Point),
            "DIMENSION" => Some(EntityKind::Dimension),
            "SOLID" => Some(EntityKind::Solid),
            "HATCH" => Some(EntityKind::Hatch),
            "3DFACE" => Some(EntityKind::Face3D),
            "SPLINE" => Some(EntityKind::Spline),
            "ELLIPSE" => Some(EntityKind::Ellipse),
            _ => None,
        }
    }

    /// The DXF type name for this kind
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Line => "LINE",
            EntityKind::LwPolyline => "LWPOLYLINE",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Circle => "CIRCLE",
            EntityKind::Arc => "ARC",
            EntityKind::Text => "TEXT",
            EntityKind::MText => "MTEXT",
            EntityKind::Insert => "INSERT",
            EntityKind::Point => "POINT",
            EntityKind::Dimension => "DIMENSION",
            EntityKind::Solid => "SOLID",
            EntityKind::Hatch => "HATCH",
            EntityKind::Face3D => "3DFACE",
            EntityKind::Spline => "SPLINE",
            EntityKind::Ellipse => "ELLIPSE",
            EntityKind::Other => "OTHER",
        }
    }

    /// Position in the fixed reporting order
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
