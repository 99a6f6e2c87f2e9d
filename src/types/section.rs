//! Document section tracking

/// Section of the DXF document the scanner is currently inside.
///
/// Only three control lines move the state: `HEADER` and `ENTITIES` open
/// their sections, `ENDSEC` closes whichever section is open. Sections are
/// flat, never nested, so `ENDSEC` always returns to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Outside any tracked section
    None,
    /// Inside the HEADER section (drawing variables)
    Header,
    /// Inside the ENTITIES section (model geometry)
    Entities,
}

impl Section {
    /// Apply a control line, returning the new state.
    ///
    /// Returns `Option::None` when `line` is not a section control line,
    /// leaving the caller free to treat it as record data instead.
    pub fn transition(self, line: &str) -> Option<Section> {
        match line {
            "HEADER" => Some(Section::Header),
            "ENTITIES" => Some(Section::Entities),
            "ENDSEC" => Some(Section::None),
            _ => None,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::None
    }
}
